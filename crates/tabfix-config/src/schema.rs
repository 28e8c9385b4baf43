//! Configuration schema definitions.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

mod schema_tools;

pub use schema_tools::*;

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub browser: BrowserConfig,

    #[serde(default)]
    pub tools: ToolsConfig,

    #[serde(default)]
    pub shortcuts: ShortcutsConfig,
}

/// The `.tabfix` directory in the user's home.
pub fn tabfix_dir() -> PathBuf {
    dirs::home_dir()
        .map(|h| h.join(".tabfix"))
        .unwrap_or_else(|| PathBuf::from(".tabfix"))
}

/// Persistent storage configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Storage file; `~` is expanded.
    #[serde(default = "default_storage_path")]
    pub path: String,

    /// Key of the record holding undo payloads.
    #[serde(default = "default_namespace")]
    pub namespace: String,

    /// Key of the record holding the active tool id.
    #[serde(default = "default_active_key")]
    pub active_key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: default_storage_path(),
            namespace: default_namespace(),
            active_key: default_active_key(),
        }
    }
}

impl StorageConfig {
    pub fn resolved_path(&self) -> PathBuf {
        PathBuf::from(crate::ConfigLoader::expand_path(&self.path))
    }
}

fn default_storage_path() -> String {
    "~/.tabfix/storage.json".to_string()
}

fn default_namespace() -> String {
    "tabfix_data".to_string()
}

fn default_active_key() -> String {
    "active_tool".to_string()
}

/// Browser connection configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrowserConfig {
    /// Remote debugging endpoint.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Per-call timeout of the transport, in seconds.
    #[serde(default = "default_call_timeout")]
    pub call_timeout_seconds: u64,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            call_timeout_seconds: default_call_timeout(),
        }
    }
}

fn default_endpoint() -> String {
    "http://127.0.0.1:9222".to_string()
}

fn default_call_timeout() -> u64 {
    30
}

/// Shortcut command identifiers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShortcutsConfig {
    /// Command that runs the active tool.
    #[serde(default = "default_run_command")]
    pub run: String,

    /// Command that restores the active tool.
    #[serde(default = "default_undo_command")]
    pub undo: Option<String>,
}

impl Default for ShortcutsConfig {
    fn default() -> Self {
        Self {
            run: default_run_command(),
            undo: default_undo_command(),
        }
    }
}

fn default_run_command() -> String {
    "trigger-update".to_string()
}

fn default_undo_command() -> Option<String> {
    Some("trigger-undo".to_string())
}

#[cfg(test)]
#[path = "schema/schema_tests.rs"]
mod tests;
