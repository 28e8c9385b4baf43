//! Per-tool undo payload storage.

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::debug;

use tabfix_config::StorageConfig;
use tabfix_protocols::error::StorageError;
use tabfix_protocols::payload::UndoPayload;
use tabfix_protocols::storage::KvStorage;

type PayloadMap = BTreeMap<String, UndoPayload>;

/// Undo payloads keyed by tool id, kept in one namespaced record.
///
/// Read-modify-write of the record is not atomic across concurrent
/// operations on the same tool; the last save wins.
pub struct StateStore {
    storage: Arc<dyn KvStorage>,
    namespace: String,
}

impl StateStore {
    pub fn new(storage: Arc<dyn KvStorage>, config: &StorageConfig) -> Self {
        Self {
            storage,
            namespace: config.namespace.clone(),
        }
    }

    /// Upsert the payload for a tool, replacing any previous one.
    ///
    /// Payloads without recorded elements are refused.
    pub async fn save(&self, tool_id: &str, payload: UndoPayload) -> Result<(), StorageError> {
        if payload.original_state.is_empty() {
            return Err(StorageError::EmptyPayload(tool_id.to_string()));
        }

        let mut all = self.read_all().await?;
        let count = payload.original_state.len();
        all.insert(tool_id.to_string(), payload);
        self.write_all(all).await?;

        debug!("Saved undo payload for {} ({} elements)", tool_id, count);
        Ok(())
    }

    pub async fn read(&self, tool_id: &str) -> Result<Option<UndoPayload>, StorageError> {
        let mut all = self.read_all().await?;
        Ok(all.remove(tool_id))
    }

    /// Remove the payload for a tool. No-op if absent.
    pub async fn clear(&self, tool_id: &str) -> Result<(), StorageError> {
        let mut all = self.read_all().await?;
        if all.remove(tool_id).is_none() {
            return Ok(());
        }
        self.write_all(all).await?;

        debug!("Cleared undo payload for {}", tool_id);
        Ok(())
    }

    /// Whether a non-empty payload is stored for the tool.
    pub async fn has_data(&self, tool_id: &str) -> Result<bool, StorageError> {
        Ok(self
            .read(tool_id)
            .await?
            .is_some_and(|payload| !payload.original_state.is_empty()))
    }

    async fn read_all(&self) -> Result<PayloadMap, StorageError> {
        match self.storage.get(&self.namespace).await? {
            None => Ok(PayloadMap::new()),
            Some(value) => serde_json::from_value(value).map_err(|e| StorageError::Corrupt {
                key: self.namespace.clone(),
                message: e.to_string(),
            }),
        }
    }

    async fn write_all(&self, all: PayloadMap) -> Result<(), StorageError> {
        if all.is_empty() {
            return self.storage.remove(&self.namespace).await;
        }
        self.storage
            .set(&self.namespace, serde_json::to_value(all)?)
            .await
    }
}
