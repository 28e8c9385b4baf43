//! Browser tabs reached over CDP.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use tabfix_core::{ContentHandler, ToolRegistry};
use tabfix_protocols::error::TransportError;
use tabfix_protocols::page::PageDirective;
use tabfix_protocols::tab::{PageTransport, Tab, TabProvider};
use tabfix_protocols::tool::OperationResult;

use crate::cdp::{CdpClient, PageInfo};
use crate::dom::CdpDom;

/// Tab provider and page transport for a remote browser.
///
/// Every call re-lists the browser's targets; nothing is cached.
pub struct CdpTabs {
    client: CdpClient,
    handler: ContentHandler,
}

impl CdpTabs {
    pub fn new(client: CdpClient, registry: Arc<ToolRegistry>) -> Self {
        Self {
            client,
            handler: ContentHandler::new(registry),
        }
    }

    async fn pages(&self) -> Result<Vec<PageInfo>, TransportError> {
        Ok(self.client.list_pages().await?)
    }
}

fn to_tab(page: &PageInfo) -> Tab {
    Tab::new(&page.id, &page.url).with_title(&page.title)
}

#[async_trait]
impl TabProvider for CdpTabs {
    /// The most recently focused page target.
    async fn active_tab(&self) -> Result<Option<Tab>, TransportError> {
        let pages = self.pages().await?;
        Ok(pages.iter().find(|page| page.is_page()).map(to_tab))
    }
}

#[async_trait]
impl PageTransport for CdpTabs {
    async fn send(
        &self,
        tab: &Tab,
        directive: PageDirective,
    ) -> Result<OperationResult, TransportError> {
        let pages = self.pages().await?;
        let page = pages
            .iter()
            .find(|page| page.id == tab.id)
            .ok_or_else(|| TransportError::TabClosed(tab.id.clone()))?;

        // The tab may have navigated since it was resolved.
        let current = to_tab(page);
        if !current.is_scriptable() {
            return Err(TransportError::RestrictedPage(current.url));
        }
        if page.web_socket_debugger_url.is_none() {
            return Err(TransportError::NoReceiver(current.url));
        }

        let session = self.client.attach(page).await?;
        let dom = CdpDom::new(session);
        debug!("Delivering {:?} to {}", directive, current.url);
        Ok(self.handler.handle(directive, &dom).await?)
    }
}

#[cfg(test)]
#[path = "tabs_tests.rs"]
mod tests;
