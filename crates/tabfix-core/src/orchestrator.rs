//! Apply/restore round trips against the active tab.

use std::sync::Arc;

use tracing::{debug, info, warn};

use tabfix_protocols::page::PageDirective;
use tabfix_protocols::payload::{OriginalClasses, UndoPayload};
use tabfix_protocols::tab::{PageTransport, Tab, TabProvider};
use tabfix_protocols::tool::OperationResult;

use crate::error::OrchestratorError;
use crate::registry::ToolRegistry;
use crate::state::StateStore;

/// Decides what to send to the page and reconciles the answer with storage.
///
/// Per tool, storage moves between clean (no payload) and dirty (payload
/// stored). An apply that matched makes it dirty; an undo that restored
/// at least one element makes it clean.
pub struct Orchestrator {
    registry: Arc<ToolRegistry>,
    tabs: Arc<dyn TabProvider>,
    transport: Arc<dyn PageTransport>,
    state: Arc<StateStore>,
}

impl Orchestrator {
    pub fn new(
        registry: Arc<ToolRegistry>,
        tabs: Arc<dyn TabProvider>,
        transport: Arc<dyn PageTransport>,
        state: Arc<StateStore>,
    ) -> Self {
        Self {
            registry,
            tabs,
            transport,
            state,
        }
    }

    pub fn registry(&self) -> &Arc<ToolRegistry> {
        &self.registry
    }

    pub fn state(&self) -> &Arc<StateStore> {
        &self.state
    }

    /// Apply a tool to the active tab and persist what it recorded.
    pub async fn run_tool(&self, tool_id: &str) -> Result<OperationResult, OrchestratorError> {
        self.check_tool(tool_id)?;
        let tab = self.resolve_tab().await?;

        let directive = PageDirective::RunTool {
            tool_id: tool_id.to_string(),
        };
        let result = self.deliver(&tab, directive).await?;

        if let Some(original) = result.undo_state() {
            if let Err(e) = self
                .state
                .save(tool_id, UndoPayload::new(original.clone()))
                .await
            {
                warn!("Failed to store undo state of {}: {}", tool_id, e);
                self.revert(&tab, tool_id, original).await;
                return Err(e.into());
            }
            info!("Applied {} to {} elements on {}", tool_id, result.count, tab.url);
        } else {
            debug!("Applied {} on {} without matches", tool_id, tab.url);
        }

        Ok(result)
    }

    /// Undo the last apply of a tool using the stored payload.
    pub async fn restore_tool(&self, tool_id: &str) -> Result<OperationResult, OrchestratorError> {
        self.check_tool(tool_id)?;
        let tab = self.resolve_tab().await?;

        let Some(payload) = self.state.read(tool_id).await? else {
            debug!("No undo payload stored for {}", tool_id);
            return Ok(OperationResult::nothing_to_restore());
        };

        let directive = PageDirective::RestoreTool {
            tool_id: tool_id.to_string(),
            original_classes: payload.original_state,
        };
        let result = self.deliver(&tab, directive).await?;

        if result.success && result.count > 0 {
            self.state.clear(tool_id).await?;
            info!("Restored {} elements of {} on {}", result.count, tool_id, tab.url);
        } else {
            warn!(
                "Nothing restored for {} on {}; keeping the stored payload",
                tool_id, tab.url
            );
        }

        Ok(result)
    }

    pub async fn has_data(&self, tool_id: &str) -> Result<bool, OrchestratorError> {
        Ok(self.state.has_data(tool_id).await?)
    }

    fn check_tool(&self, tool_id: &str) -> Result<(), OrchestratorError> {
        if self.registry.contains(tool_id) {
            Ok(())
        } else {
            Err(OrchestratorError::UnknownTool(tool_id.to_string()))
        }
    }

    async fn resolve_tab(&self) -> Result<Tab, OrchestratorError> {
        match self.tabs.active_tab().await {
            Ok(Some(tab)) => Ok(tab),
            Ok(None) => Err(OrchestratorError::NoActiveTab),
            Err(e) => {
                warn!("Failed to resolve the active tab: {}", e);
                Err(e.into())
            }
        }
    }

    /// Undo an apply whose state could not be stored.
    async fn revert(&self, tab: &Tab, tool_id: &str, original: &OriginalClasses) {
        let directive = PageDirective::RestoreTool {
            tool_id: tool_id.to_string(),
            original_classes: original.clone(),
        };
        match self.deliver(tab, directive).await {
            Ok(result) if result.count == original.len() => {
                debug!("Reverted {} on {}", tool_id, tab.url);
            }
            Ok(result) => warn!(
                "Reverted {} of {} elements of {} on {}; original classes: {:?}",
                result.count,
                original.len(),
                tool_id,
                tab.url,
                original
            ),
            Err(e) => warn!(
                "Could not revert {} on {} ({}); original classes: {:?}",
                tool_id, tab.url, e, original
            ),
        }
    }

    async fn deliver(
        &self,
        tab: &Tab,
        directive: PageDirective,
    ) -> Result<OperationResult, OrchestratorError> {
        self.transport.send(tab, directive).await.map_err(|e| {
            warn!("Failed to reach tab {} ({}): {}", tab.id, tab.url, e);
            e.into()
        })
    }
}

#[cfg(test)]
#[path = "orchestrator_tests.rs"]
mod tests;
