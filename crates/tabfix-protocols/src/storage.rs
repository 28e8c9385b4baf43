//! Persistent key-value storage protocol.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::StorageError;

/// Flat key-value store that outlives the process.
///
/// Writes are durable once the returned future completes.
#[async_trait]
pub trait KvStorage: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<Value>, StorageError>;

    async fn set(&self, key: &str, value: Value) -> Result<(), StorageError>;

    /// No-op when the key is absent.
    async fn remove(&self, key: &str) -> Result<(), StorageError>;
}
