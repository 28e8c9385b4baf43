//! Tab resolution and directive delivery.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::TransportError;
use crate::page::PageDirective;
use crate::tool::OperationResult;

/// A browser tab as seen at resolution time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tab {
    pub id: String,
    pub url: String,
    #[serde(default)]
    pub title: String,
}

impl Tab {
    pub fn new(id: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            url: url.into(),
            title: String::new(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Whether page scripts may run in this tab.
    ///
    /// Only `http`, `https` and `file` documents accept a content handler;
    /// browser-internal pages such as `chrome://` do not.
    pub fn is_scriptable(&self) -> bool {
        self.url
            .split_once(':')
            .map(|(scheme, _)| {
                matches!(scheme.to_ascii_lowercase().as_str(), "http" | "https" | "file")
            })
            .unwrap_or(false)
    }
}

/// Resolves the tab the user is looking at.
///
/// Called fresh on every operation; implementations must not cache.
#[async_trait]
pub trait TabProvider: Send + Sync {
    /// `Ok(None)` when no tab is active.
    async fn active_tab(&self) -> Result<Option<Tab>, TransportError>;
}

/// Delivers one directive to a tab and waits for its single response.
#[async_trait]
pub trait PageTransport: Send + Sync {
    async fn send(
        &self,
        tab: &Tab,
        directive: PageDirective,
    ) -> Result<OperationResult, TransportError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scriptable_schemes() {
        assert!(Tab::new("1", "https://example.com/table").is_scriptable());
        assert!(Tab::new("1", "HTTP://example.com").is_scriptable());
        assert!(Tab::new("1", "file:///tmp/page.html").is_scriptable());
    }

    #[test]
    fn test_restricted_schemes() {
        assert!(!Tab::new("1", "chrome://extensions/").is_scriptable());
        assert!(!Tab::new("1", "about:blank").is_scriptable());
        assert!(!Tab::new("1", "devtools://devtools/bundled/inspector.html").is_scriptable());
        assert!(!Tab::new("1", "").is_scriptable());
    }
}
