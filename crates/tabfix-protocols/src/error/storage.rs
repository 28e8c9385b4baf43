//! Storage errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// An undo payload without any recorded element.
    #[error("Refusing to store empty undo payload for tool: {0}")]
    EmptyPayload(String),

    #[error("Corrupt storage record {key}: {message}")]
    Corrupt { key: String, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_payload_error() {
        let err = StorageError::EmptyPayload("css_fixer".to_string());
        assert!(err.to_string().contains("empty undo payload"));
        assert!(err.to_string().contains("css_fixer"));
    }

    #[test]
    fn test_corrupt_error() {
        let err = StorageError::Corrupt {
            key: "tabfix_data".to_string(),
            message: "expected object".to_string(),
        };
        let display = err.to_string();
        assert!(display.contains("tabfix_data"));
        assert!(display.contains("expected object"));
    }

    #[test]
    fn test_io_error_from() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        let err: StorageError = io_err.into();
        assert!(err.to_string().contains("IO error"));
    }
}
