use serde::{Deserialize, Serialize};

/// One unit of data held by a store.
///
/// `key` only distinguishes records for display; nothing in the listing
/// path interprets `value`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub key: String,
    #[serde(default)]
    pub value: serde_json::Value,
}

impl Record {
    pub fn new(key: impl Into<String>, value: serde_json::Value) -> Self {
        Self { key: key.into(), value }
    }

    /// Record with a null value.
    pub fn key_only(key: impl Into<String>) -> Self {
        Self::new(key, serde_json::Value::Null)
    }
}
