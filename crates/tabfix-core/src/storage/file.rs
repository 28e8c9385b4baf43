//! File-backed key-value storage.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::{Map, Value};
use tokio::fs;
use tokio::sync::Mutex;
use tracing::debug;

use tabfix_protocols::error::StorageError;
use tabfix_protocols::storage::KvStorage;

/// Key-value storage persisted as a single JSON object.
///
/// ```text
/// {path}
/// {
///   "tabfix_data": { "<tool id>": { "timestamp": ..., "originalState": {...} } },
///   "active_tool": "css_fixer"
/// }
/// ```
///
/// Every read goes to disk. Writes replace the file through a temporary
/// sibling and a rename, so a crash never leaves a half-written file.
pub struct FileKvStorage {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileKvStorage {
    /// Open the store, creating its parent directory if needed. The file
    /// itself is created on the first write.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }

        debug!("FileKvStorage opened at {:?}", path);

        Ok(Self {
            path,
            write_lock: Mutex::new(()),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_all(&self) -> Result<Map<String, Value>, StorageError> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Map::new()),
            Err(e) => return Err(e.into()),
        };

        if content.trim().is_empty() {
            return Ok(Map::new());
        }

        match serde_json::from_str::<Value>(&content)? {
            Value::Object(map) => Ok(map),
            other => Err(StorageError::Corrupt {
                key: self.path.display().to_string(),
                message: format!("expected a JSON object, found {}", kind_of(&other)),
            }),
        }
    }

    async fn write_all(&self, map: Map<String, Value>) -> Result<(), StorageError> {
        let content = serde_json::to_string_pretty(&Value::Object(map))?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, content).await?;
        fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[async_trait]
impl KvStorage for FileKvStorage {
    async fn get(&self, key: &str) -> Result<Option<Value>, StorageError> {
        let mut map = self.read_all().await?;
        Ok(map.remove(key))
    }

    async fn set(&self, key: &str, value: Value) -> Result<(), StorageError> {
        let _guard = self.write_lock.lock().await;
        let mut map = self.read_all().await?;
        map.insert(key.to_string(), value);
        self.write_all(map).await
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        let _guard = self.write_lock.lock().await;
        let mut map = self.read_all().await?;
        if map.remove(key).is_none() {
            return Ok(());
        }
        self.write_all(map).await
    }
}

#[cfg(test)]
#[path = "file_tests.rs"]
mod tests;
