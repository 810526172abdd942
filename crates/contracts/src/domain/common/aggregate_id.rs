use serde::{de::DeserializeOwned, Serialize};
use std::hash::Hash;

/// Trait for aggregate identifier types
pub trait AggregateId:
    Clone + PartialEq + Eq + Hash + Serialize + DeserializeOwned + std::fmt::Debug
{
    /// Convert the ID to its stored string form
    fn as_string(&self) -> String;

    /// Build an ID from its stored string form
    fn from_string(s: &str) -> Result<Self, String>;
}

impl AggregateId for String {
    fn as_string(&self) -> String {
        self.clone()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        if s.is_empty() {
            return Err("Empty id".into());
        }
        Ok(s.to_string())
    }
}
