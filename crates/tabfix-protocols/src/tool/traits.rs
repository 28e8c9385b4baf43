//! Tool trait definition.

use async_trait::async_trait;

use super::{OperationResult, ToolDefinition};
use crate::error::ToolError;
use crate::page::PageDom;
use crate::payload::OriginalClasses;

/// Core trait for page tools.
///
/// Both operations run inside the page context. `apply` reports the
/// pre-mutation state through [`OperationResult::original_classes`];
/// `undo` receives that state back.
#[async_trait]
pub trait PageTool: Send + Sync {
    /// Returns the tool definition.
    fn definition(&self) -> &ToolDefinition;

    /// Apply the transformation to the page.
    async fn apply(&self, dom: &dyn PageDom) -> Result<OperationResult, ToolError>;

    /// Reverse a previous apply using the state it recorded.
    async fn undo(
        &self,
        dom: &dyn PageDom,
        original: &OriginalClasses,
    ) -> Result<OperationResult, ToolError>;
}
