//! Background-side errors.

use thiserror::Error;

use tabfix_protocols::error::{StorageError, TransportError};

/// Failure of a run or restore.
#[derive(Debug, Error)]
pub enum OrchestratorError {
    #[error("No active tab found.")]
    NoActiveTab,

    /// Carries the transport diagnostic verbatim.
    #[error("Could not reach the page: {0}")]
    PageUnreachable(String),

    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

impl From<TransportError> for OrchestratorError {
    fn from(err: TransportError) -> Self {
        OrchestratorError::PageUnreachable(err.to_string())
    }
}

/// Registry errors.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Already registered: {0}")]
    AlreadyRegistered(String),
}
