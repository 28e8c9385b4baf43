//! Page content handler.

use std::sync::Arc;

use tracing::debug;

use tabfix_protocols::error::ToolError;
use tabfix_protocols::page::{PageDirective, PageDom};
use tabfix_protocols::tool::OperationResult;

use crate::registry::ToolRegistry;

/// Receives page directives and runs the addressed tool against the DOM.
pub struct ContentHandler {
    registry: Arc<ToolRegistry>,
}

impl ContentHandler {
    pub fn new(registry: Arc<ToolRegistry>) -> Self {
        Self { registry }
    }

    pub async fn handle(
        &self,
        directive: PageDirective,
        dom: &dyn PageDom,
    ) -> Result<OperationResult, ToolError> {
        let tool = self
            .registry
            .get(directive.tool_id())
            .ok_or_else(|| ToolError::NotFound(directive.tool_id().to_string()))?;

        match directive {
            PageDirective::RunTool { tool_id } => {
                debug!("Applying {} in page", tool_id);
                tool.apply(dom).await
            }
            PageDirective::RestoreTool {
                tool_id,
                original_classes,
            } => {
                debug!(
                    "Restoring {} in page ({} recorded elements)",
                    tool_id,
                    original_classes.len()
                );
                tool.undo(dom, &original_classes).await
            }
        }
    }
}
