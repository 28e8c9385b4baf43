//! Operation result type.

use serde::{Deserialize, Serialize};

use crate::payload::OriginalClasses;

/// Message returned by a restore when no undo payload is stored.
pub const NO_DATA_TO_RESTORE: &str = "no data to restore";

/// Outcome of an apply or undo, as it crosses the messaging boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationResult {
    /// Whether the operation completed.
    pub success: bool,

    /// Number of elements touched.
    #[serde(default)]
    pub count: usize,

    /// Human-readable outcome.
    #[serde(default)]
    pub message: String,

    /// Pre-mutation class strings, present only for an apply that matched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_classes: Option<OriginalClasses>,
}

impl OperationResult {
    /// A successful operation without undo state.
    pub fn success(count: usize, message: impl Into<String>) -> Self {
        Self {
            success: true,
            count,
            message: message.into(),
            original_classes: None,
        }
    }

    /// A successful apply. The recorded state is dropped when empty.
    pub fn applied(message: impl Into<String>, original: OriginalClasses) -> Self {
        let count = original.len();
        Self {
            success: true,
            count,
            message: message.into(),
            original_classes: (!original.is_empty()).then_some(original),
        }
    }

    /// Restore short-circuit when nothing was stored.
    pub fn nothing_to_restore() -> Self {
        Self::success(0, NO_DATA_TO_RESTORE)
    }

    /// A failed operation.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            count: 0,
            message: message.into(),
            original_classes: None,
        }
    }

    /// The recorded undo state, if it is worth persisting.
    pub fn undo_state(&self) -> Option<&OriginalClasses> {
        self.original_classes.as_ref().filter(|state| !state.is_empty())
    }
}

#[cfg(test)]
#[path = "result_tests.rs"]
mod tests;
