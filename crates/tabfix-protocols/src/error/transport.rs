//! Errors raised while delivering a directive to a page.

use thiserror::Error;

use super::ToolError;

/// Failure to reach the page context of a tab.
///
/// The display text is the raw diagnostic that gets surfaced to the user.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Nothing is listening in the tab.
    #[error("Could not establish connection. Receiving end does not exist. ({0})")]
    NoReceiver(String),

    /// The tab shows a page that cannot be scripted.
    #[error("Cannot access contents of url \"{0}\"")]
    RestrictedPage(String),

    /// The tab went away between resolution and delivery.
    #[error("No tab with id: {0}")]
    TabClosed(String),

    #[error("Connection failed: {0}")]
    Connection(String),

    #[error("Protocol error: {0}")]
    Protocol(String),

    #[error("Timed out: {0}")]
    Timeout(String),

    /// The page answered but the tool failed inside it.
    #[error("{0}")]
    Page(#[from] ToolError),
}
