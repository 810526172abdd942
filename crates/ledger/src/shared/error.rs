use thiserror::Error;

/// Failures of the record store and its persistence substrate
#[derive(Debug, Error)]
pub enum StoreError {
    /// The persisted payload under `key` is not a list of records
    #[error("Corrupt data under key '{key}'")]
    CorruptData {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Serialization error")]
    Serialize(#[from] serde_json::Error),
}

impl StoreError {
    pub fn is_corrupt(&self) -> bool {
        matches!(self, StoreError::CorruptData { .. })
    }
}

pub type StoreResult<T> = Result<T, StoreError>;
