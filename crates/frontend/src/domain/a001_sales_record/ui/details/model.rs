use crate::shared::browser_storage::sales_store;
use contracts::domain::a001_sales_record::{SalesRecord, SalesRecordDto, SalesRecordId};
use ledger::domain::a001_sales_record::{service, SalesRecordRepository};
use ledger::shared::data::KeyValueStorage;

pub fn fetch_by_id(id: &str) -> Result<Option<SalesRecord>, String> {
    service::get_by_id(&sales_store(), &SalesRecordId::new(id))
        .map_err(|e| format!("{:#}", e))
}

/// Create a record, or replace the one being edited
pub fn save_form(editing_id: Option<&str>, dto: &SalesRecordDto) -> Result<(), String> {
    save_form_to(&sales_store(), editing_id, dto)
}

/// Editing a record that no longer exists writes nothing
fn save_form_to<S: KeyValueStorage>(
    store: &SalesRecordRepository<S>,
    editing_id: Option<&str>,
    dto: &SalesRecordDto,
) -> Result<(), String> {
    match editing_id {
        Some(id) => {
            let updated = service::update(store, &SalesRecordId::new(id), dto)
                .map_err(|e| format!("{:#}", e))?;
            if !updated {
                log::warn!("Record {} no longer exists, nothing updated", id);
            }
            Ok(())
        }
        None => service::create(store, dto)
            .map(|_| ())
            .map_err(|e| format!("{:#}", e)),
    }
}
