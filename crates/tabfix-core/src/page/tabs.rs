//! In-process tabs backed by memory documents.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use parking_lot::RwLock;
use tracing::debug;

use tabfix_protocols::error::TransportError;
use tabfix_protocols::page::PageDirective;
use tabfix_protocols::tab::{PageTransport, Tab, TabProvider};
use tabfix_protocols::tool::OperationResult;

use super::{ContentHandler, MemoryDocument};
use crate::registry::ToolRegistry;

struct MemoryTab {
    tab: Tab,
    document: Arc<MemoryDocument>,
    /// Whether a content handler is listening in the tab.
    listening: bool,
}

/// A browser window simulated in process.
///
/// Scriptable tabs get a content handler wired to the shared tool registry.
pub struct MemoryTabs {
    handler: ContentHandler,
    tabs: RwLock<Vec<MemoryTab>>,
    active: RwLock<Option<String>>,
    next_id: AtomicU64,
}

impl MemoryTabs {
    pub fn new(registry: Arc<ToolRegistry>) -> Self {
        Self {
            handler: ContentHandler::new(registry),
            tabs: RwLock::new(Vec::new()),
            active: RwLock::new(None),
            next_id: AtomicU64::new(1),
        }
    }

    /// Open a tab showing `document` and make it active.
    pub fn open(&self, url: &str, document: Arc<MemoryDocument>) -> Tab {
        let tab = Tab::new(self.next_id().to_string(), url);
        let listening = tab.is_scriptable();
        self.insert(tab, document, listening)
    }

    /// Open a tab in which no content handler answers, e.g. a page that
    /// was loaded before the handler was installed.
    pub fn open_unlistened(&self, url: &str) -> Tab {
        let tab = Tab::new(self.next_id().to_string(), url);
        self.insert(tab, Arc::new(MemoryDocument::new()), false)
    }

    pub fn activate(&self, tab_id: &str) -> bool {
        let exists = self.tabs.read().iter().any(|t| t.tab.id == tab_id);
        if exists {
            *self.active.write() = Some(tab_id.to_string());
        }
        exists
    }

    /// Leave the window without a focused tab.
    pub fn deactivate(&self) {
        *self.active.write() = None;
    }

    /// Close a tab. The active selection is kept so that a stale tab id
    /// can be exercised.
    pub fn close(&self, tab_id: &str) -> bool {
        let mut tabs = self.tabs.write();
        let before = tabs.len();
        tabs.retain(|t| t.tab.id != tab_id);
        tabs.len() != before
    }

    /// Point a tab at another document, as a navigation does.
    pub fn navigate(&self, tab_id: &str, url: &str, document: Arc<MemoryDocument>) -> bool {
        let mut tabs = self.tabs.write();
        match tabs.iter_mut().find(|t| t.tab.id == tab_id) {
            Some(entry) => {
                entry.tab.url = url.to_string();
                entry.listening = entry.tab.is_scriptable();
                entry.document = document;
                true
            }
            None => false,
        }
    }

    pub fn document(&self, tab_id: &str) -> Option<Arc<MemoryDocument>> {
        self.tabs
            .read()
            .iter()
            .find(|t| t.tab.id == tab_id)
            .map(|t| t.document.clone())
    }

    fn next_id(&self) -> u64 {
        self.next_id.fetch_add(1, Ordering::Relaxed)
    }

    fn insert(&self, tab: Tab, document: Arc<MemoryDocument>, listening: bool) -> Tab {
        *self.active.write() = Some(tab.id.clone());
        self.tabs.write().push(MemoryTab {
            tab: tab.clone(),
            document,
            listening,
        });
        tab
    }
}

#[async_trait]
impl TabProvider for MemoryTabs {
    async fn active_tab(&self) -> Result<Option<Tab>, TransportError> {
        let Some(active) = self.active.read().clone() else {
            return Ok(None);
        };
        let tab = self
            .tabs
            .read()
            .iter()
            .find(|t| t.tab.id == active)
            .map(|t| t.tab.clone());
        // A closed tab id is still reported; delivery fails later.
        Ok(Some(tab.unwrap_or_else(|| Tab::new(active, ""))))
    }
}

#[async_trait]
impl PageTransport for MemoryTabs {
    async fn send(
        &self,
        tab: &Tab,
        directive: PageDirective,
    ) -> Result<OperationResult, TransportError> {
        let (current, document, listening) = {
            let tabs = self.tabs.read();
            let entry = tabs
                .iter()
                .find(|t| t.tab.id == tab.id)
                .ok_or_else(|| TransportError::TabClosed(tab.id.clone()))?;
            (entry.tab.clone(), entry.document.clone(), entry.listening)
        };

        if !current.is_scriptable() {
            return Err(TransportError::RestrictedPage(current.url));
        }
        if !listening {
            return Err(TransportError::NoReceiver(current.url));
        }

        debug!("Delivering {:?} to tab {}", directive, tab.id);
        Ok(self.handler.handle(directive, document.as_ref()).await?)
    }
}
