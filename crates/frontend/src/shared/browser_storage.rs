//! `window.localStorage` as the record store substrate.

use ledger::domain::a001_sales_record::SalesRecordRepository;
use ledger::shared::config::{default_config, Config};
use ledger::shared::data::KeyValueStorage;
use ledger::shared::error::{StoreError, StoreResult};

/// Stateless handle; the `Storage` object is looked up on every call
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

fn local_storage() -> StoreResult<web_sys::Storage> {
    web_sys::window()
        .ok_or_else(|| StoreError::Storage("window is not available".into()))?
        .local_storage()
        .map_err(|e| StoreError::Storage(format!("localStorage access denied: {:?}", e)))?
        .ok_or_else(|| StoreError::Storage("localStorage is not available".into()))
}

impl KeyValueStorage for BrowserStorage {
    fn read(&self, key: &str) -> StoreResult<Option<String>> {
        local_storage()?
            .get_item(key)
            .map_err(|e| StoreError::Storage(format!("Failed to read '{}': {:?}", key, e)))
    }

    fn write(&self, key: &str, value: &str) -> StoreResult<()> {
        local_storage()?
            .set_item(key, value)
            .map_err(|e| StoreError::Storage(format!("Failed to write '{}': {:?}", key, e)))
    }
}

/// Record store over localStorage under the configured key
pub fn sales_store() -> SalesRecordRepository<BrowserStorage> {
    let config = default_config().unwrap_or_else(|e| {
        log::warn!("Embedded config rejected, using built-in defaults: {}", e);
        Config::default()
    });
    SalesRecordRepository::from_config(BrowserStorage, &config)
}
