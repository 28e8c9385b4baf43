//! In-memory key-value storage.

use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;

use tabfix_protocols::error::StorageError;
use tabfix_protocols::storage::KvStorage;

/// In-memory storage for testing. Contents die with the process.
pub struct MemoryKvStorage {
    entries: RwLock<HashMap<String, Value>>,
}

impl MemoryKvStorage {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for MemoryKvStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl KvStorage for MemoryKvStorage {
    async fn get(&self, key: &str) -> Result<Option<Value>, StorageError> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: Value) -> Result<(), StorageError> {
        self.entries.write().await.insert(key.to_string(), value);
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries.write().await.remove(key);
        Ok(())
    }
}
