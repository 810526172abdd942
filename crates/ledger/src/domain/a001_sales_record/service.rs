use anyhow::Context;
use contracts::domain::a001_sales_record::{SalesRecord, SalesRecordDto, SalesRecordId};

use super::repository::SalesRecordRepository;
use crate::shared::data::KeyValueStorage;

/// Create a new record under a fresh id
pub fn create<S: KeyValueStorage>(
    repo: &SalesRecordRepository<S>,
    dto: &SalesRecordDto,
) -> anyhow::Result<SalesRecordId> {
    let id = SalesRecordId::new_v4();
    let record = SalesRecord::from_dto(id.clone(), dto);

    repo.add(record).context("Failed to add sales record")?;
    tracing::info!("Created sales record {}", id);
    Ok(id)
}

/// Replace the fields of an existing record
///
/// Returns `false` when the record no longer exists.
pub fn update<S: KeyValueStorage>(
    repo: &SalesRecordRepository<S>,
    id: &SalesRecordId,
    dto: &SalesRecordDto,
) -> anyhow::Result<bool> {
    let record = SalesRecord::from_dto(id.clone(), dto);
    let updated = repo
        .update(id, record)
        .with_context(|| format!("Failed to update sales record {}", id))?;
    if updated {
        tracing::info!("Updated sales record {}", id);
    }
    Ok(updated)
}

/// Delete a record
pub fn delete<S: KeyValueStorage>(
    repo: &SalesRecordRepository<S>,
    id: &SalesRecordId,
) -> anyhow::Result<bool> {
    let removed = repo
        .remove(id)
        .with_context(|| format!("Failed to delete sales record {}", id))?;
    if removed {
        tracing::info!("Deleted sales record {}", id);
    }
    Ok(removed)
}

pub fn get_by_id<S: KeyValueStorage>(
    repo: &SalesRecordRepository<S>,
    id: &SalesRecordId,
) -> anyhow::Result<Option<SalesRecord>> {
    Ok(repo.get_by_id(id)?)
}

pub fn list_all<S: KeyValueStorage>(
    repo: &SalesRecordRepository<S>,
) -> anyhow::Result<Vec<SalesRecord>> {
    Ok(repo.list_all()?)
}

/// Records for the list page, newest first
pub fn list_newest_first<S: KeyValueStorage>(
    repo: &SalesRecordRepository<S>,
) -> anyhow::Result<Vec<SalesRecord>> {
    Ok(repo.list_newest_first()?)
}

/// Replace everything with the demo dataset
pub fn insert_test_data<S: KeyValueStorage>(
    repo: &SalesRecordRepository<S>,
) -> anyhow::Result<()> {
    repo.seed().context("Failed to seed demo data")
}
