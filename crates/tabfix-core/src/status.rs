//! User-facing status derived from an operation result.

use std::fmt;

use serde::{Deserialize, Serialize};

use tabfix_protocols::tool::OperationResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusKind {
    Success,
    Info,
    Error,
}

impl fmt::Display for StatusKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusKind::Success => write!(f, "success"),
            StatusKind::Info => write!(f, "info"),
            StatusKind::Error => write!(f, "error"),
        }
    }
}

/// A status line as shown after a trigger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Status {
    pub message: String,
    pub kind: StatusKind,
}

impl Status {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: StatusKind::Error,
        }
    }
}

impl From<&OperationResult> for Status {
    fn from(result: &OperationResult) -> Self {
        let kind = match (result.success, result.count) {
            (true, 0) => StatusKind::Info,
            (true, _) => StatusKind::Success,
            (false, _) => StatusKind::Error,
        };
        Self {
            message: result.message.clone(),
            kind,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_mapping() {
        let applied = OperationResult::success(3, "Fixed 3 table elements!");
        assert_eq!(Status::from(&applied).kind, StatusKind::Success);

        let nothing = OperationResult::success(0, "No matching elements found on this page.");
        assert_eq!(Status::from(&nothing).kind, StatusKind::Info);

        let failed = OperationResult::failure("No active tab found.");
        let status = Status::from(&failed);
        assert_eq!(status.kind, StatusKind::Error);
        assert_eq!(status.message, "No active tab found.");
    }

    #[test]
    fn test_display() {
        let status = Status::from(&OperationResult::success(1, "Restored 1 element!"));
        assert_eq!(status.to_string(), "[success] Restored 1 element!");
        assert_eq!(Status::error("boom").to_string(), "[error] boom");
    }
}
