//! CDP HTTP endpoint client.

use std::time::Duration;

use tracing::debug;
use url::Url;

use super::error::CdpError;
use super::protocol::PageInfo;
use super::session::PageSession;

/// Talks to the browser's remote debugging endpoint.
///
/// Target discovery goes over HTTP; each attached page gets its own
/// WebSocket session.
pub struct CdpClient {
    /// HTTP endpoint for page discovery.
    http_endpoint: String,
    http: reqwest::Client,
    /// Per-call timeout of attached sessions.
    call_timeout: Duration,
}

impl CdpClient {
    /// Create a client for the given endpoint (e.g. "http://127.0.0.1:9222").
    pub fn new(endpoint: &str, call_timeout: Duration) -> Result<Self, CdpError> {
        let parsed = Url::parse(endpoint)?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(CdpError::ConnectionFailed(format!(
                "Unsupported endpoint scheme: {}",
                parsed.scheme()
            )));
        }

        let http = reqwest::Client::builder()
            .timeout(call_timeout)
            .build()
            .map_err(|e| CdpError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            http_endpoint: endpoint.trim_end_matches('/').to_string(),
            http,
            call_timeout,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.http_endpoint
    }

    /// List all targets, most recently focused first.
    pub async fn list_pages(&self) -> Result<Vec<PageInfo>, CdpError> {
        let url = format!("{}/json/list", self.http_endpoint);
        debug!("Listing targets from {}", url);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| CdpError::BrowserNotAvailable(format!("{}: {}", self.http_endpoint, e)))?;

        if !response.status().is_success() {
            return Err(CdpError::BrowserNotAvailable(format!(
                "{}: HTTP {}",
                self.http_endpoint,
                response.status()
            )));
        }

        response
            .json()
            .await
            .map_err(|e| CdpError::InvalidResponse(format!("target list: {}", e)))
    }

    /// Open a session on a page target.
    pub async fn attach(&self, page: &PageInfo) -> Result<PageSession, CdpError> {
        let ws_url = page.web_socket_debugger_url.as_deref().ok_or_else(|| {
            CdpError::ConnectionFailed(format!("Target {} is attached to another client", page.id))
        })?;
        PageSession::connect(&page.id, ws_url, self.call_timeout).await
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
