use crate::shared::browser_storage::sales_store;
use contracts::dashboards::d400_rep_summary::{RepSummaryRequest, RepSummaryResponse};
use ledger::dashboards::d400_rep_summary::service;
use ledger::domain::a001_sales_record::service as records;

/// Read the store and build the dashboard for the requested month
pub fn load_summary(request: RepSummaryRequest) -> Result<RepSummaryResponse, String> {
    let store = sales_store();
    let data = records::list_all(&store).map_err(|e| format!("データの読み込みに失敗しました: {:#}", e))?;
    Ok(service::get_rep_summary(&data, request))
}

/// Replace the stored records with the demo dataset
pub fn seed_demo_data() -> Result<(), String> {
    let store = sales_store();
    records::insert_test_data(&store).map_err(|e| format!("デモデータの生成に失敗しました: {:#}", e))
}
