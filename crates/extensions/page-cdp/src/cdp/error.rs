//! CDP error types.

use thiserror::Error;

use tabfix_protocols::error::TransportError;

/// CDP client errors.
#[derive(Debug, Error)]
pub enum CdpError {
    /// Failed to connect to the browser.
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Browser not running with remote debugging.
    #[error("Browser not available at {0}. Start it with: chrome --remote-debugging-port=9222")]
    BrowserNotAvailable(String),

    #[error("WebSocket error: {0}")]
    WebSocket(String),

    #[error("CDP error: {message} (code: {code})")]
    Protocol { code: i64, message: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Timeout: {0}")]
    Timeout(String),

    #[error("Session closed")]
    SessionClosed,

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl From<tokio_tungstenite::tungstenite::Error> for CdpError {
    fn from(e: tokio_tungstenite::tungstenite::Error) -> Self {
        CdpError::WebSocket(e.to_string())
    }
}

impl From<url::ParseError> for CdpError {
    fn from(e: url::ParseError) -> Self {
        CdpError::ConnectionFailed(format!("Invalid URL: {}", e))
    }
}

impl From<CdpError> for TransportError {
    fn from(e: CdpError) -> Self {
        match e {
            CdpError::Timeout(what) => TransportError::Timeout(what),
            CdpError::Protocol { .. }
            | CdpError::Serialization(_)
            | CdpError::InvalidResponse(_) => TransportError::Protocol(e.to_string()),
            CdpError::ConnectionFailed(_)
            | CdpError::BrowserNotAvailable(_)
            | CdpError::WebSocket(_)
            | CdpError::SessionClosed => TransportError::Connection(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_maps_to_transport_timeout() {
        let err: TransportError = CdpError::Timeout("DOM.getDocument".to_string()).into();
        assert!(matches!(err, TransportError::Timeout(m) if m == "DOM.getDocument"));
    }

    #[test]
    fn test_protocol_error_keeps_diagnostic() {
        let err: TransportError = CdpError::Protocol {
            code: -32000,
            message: "Could not find node with given id".to_string(),
        }
        .into();
        assert!(err.to_string().contains("Could not find node with given id"));
    }

    #[test]
    fn test_unavailable_browser_is_connection_error() {
        let err: TransportError =
            CdpError::BrowserNotAvailable("http://127.0.0.1:9222".to_string()).into();
        assert!(matches!(err, TransportError::Connection(_)));
        assert!(err.to_string().contains("remote-debugging-port"));
    }
}
