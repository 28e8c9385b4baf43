//! Trigger sources: shortcut commands and UI actions.

use serde::{Deserialize, Serialize};

use tabfix_config::ShortcutsConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TriggerAction {
    Run,
    Restore,
}

/// What started an operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Trigger {
    /// A shortcut command; acts on the active tool.
    Shortcut(String),

    /// A UI action naming its tool explicitly.
    Ui { tool_id: String, action: TriggerAction },
}

/// Maps shortcut command identifiers to actions.
#[derive(Debug, Clone)]
pub struct ShortcutMap {
    run: String,
    undo: Option<String>,
}

impl ShortcutMap {
    pub fn new(config: &ShortcutsConfig) -> Self {
        Self {
            run: config.run.clone(),
            undo: config.undo.clone(),
        }
    }

    /// `None` for commands that are not bound.
    pub fn resolve(&self, command: &str) -> Option<TriggerAction> {
        if command == self.run {
            Some(TriggerAction::Run)
        } else if self.undo.as_deref() == Some(command) {
            Some(TriggerAction::Restore)
        } else {
            None
        }
    }
}

impl Default for ShortcutMap {
    fn default() -> Self {
        Self::new(&ShortcutsConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bindings() {
        let map = ShortcutMap::default();
        assert_eq!(map.resolve("trigger-update"), Some(TriggerAction::Run));
        assert_eq!(map.resolve("trigger-undo"), Some(TriggerAction::Restore));
        assert_eq!(map.resolve("_execute_action"), None);
    }

    #[test]
    fn test_undo_binding_optional() {
        let config = ShortcutsConfig {
            run: "fix".to_string(),
            undo: None,
        };
        let map = ShortcutMap::new(&config);
        assert_eq!(map.resolve("fix"), Some(TriggerAction::Run));
        assert_eq!(map.resolve("trigger-undo"), None);
    }
}
