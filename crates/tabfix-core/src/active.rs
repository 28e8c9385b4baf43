//! Persisted active tool selection.

use std::sync::Arc;

use serde_json::Value;
use tracing::warn;

use tabfix_config::Config;
use tabfix_protocols::error::StorageError;
use tabfix_protocols::storage::KvStorage;

/// The tool id used by shortcut triggers.
pub struct ActiveToolStore {
    storage: Arc<dyn KvStorage>,
    key: String,
    default: String,
}

impl ActiveToolStore {
    pub fn new(storage: Arc<dyn KvStorage>, config: &Config) -> Self {
        Self {
            storage,
            key: config.storage.active_key.clone(),
            default: config.tools.default.clone(),
        }
    }

    /// The stored tool id, or the configured default.
    pub async fn get(&self) -> Result<String, StorageError> {
        match self.storage.get(&self.key).await? {
            Some(Value::String(id)) if !id.is_empty() => Ok(id),
            Some(other) if !other.is_null() => {
                warn!("Ignoring malformed active tool record: {}", other);
                Ok(self.default.clone())
            }
            _ => Ok(self.default.clone()),
        }
    }

    pub async fn set(&self, tool_id: &str) -> Result<(), StorageError> {
        self.storage
            .set(&self.key, Value::String(tool_id.to_string()))
            .await
    }
}
