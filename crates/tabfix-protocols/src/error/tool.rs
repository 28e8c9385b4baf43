//! Page-side tool errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ToolError {
    #[error("Tool not found: {0}")]
    NotFound(String),

    #[error("DOM access failed: {0}")]
    Dom(String),

    #[error("Invalid directive: {0}")]
    InvalidDirective(String),
}
