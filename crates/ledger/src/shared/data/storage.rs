use crate::shared::error::StoreResult;
use std::cell::RefCell;
use std::collections::HashMap;

/// Persistence substrate: one text value per key
///
/// Reads and writes are synchronous and whole-value. There is no locking;
/// a single writer is assumed.
pub trait KeyValueStorage {
    /// Stored text under `key`, `None` when nothing was written
    fn read(&self, key: &str) -> StoreResult<Option<String>>;

    /// Replace the text under `key`
    fn write(&self, key: &str, value: &str) -> StoreResult<()>;
}

impl<S: KeyValueStorage + ?Sized> KeyValueStorage for &S {
    fn read(&self, key: &str) -> StoreResult<Option<String>> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> StoreResult<()> {
        (**self).write(key, value)
    }
}

/// In-process substrate, lost when dropped
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Substrate pre-filled with one entry
    pub fn with_entry(key: &str, value: &str) -> Self {
        let storage = Self::new();
        storage
            .entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        storage
    }
}

impl KeyValueStorage for MemoryStorage {
    fn read(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> StoreResult<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
