//! Page context protocol definitions.
//!
//! The page side answers directives from the background side. Element
//! access goes through [`PageDom`] so the same tool code runs against an
//! in-memory document or a remote browser tab.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::ToolError;
use crate::payload::OriginalClasses;

/// Opaque reference to a live element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ElementHandle(pub i64);

/// An element together with its current class attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementClass {
    pub handle: ElementHandle,
    pub class_name: String,
}

impl ElementClass {
    /// Whitespace-separated class tokens.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.class_name.split_whitespace()
    }

    /// Whether the class token set contains `token`.
    pub fn has_token(&self, token: &str) -> bool {
        self.tokens().any(|t| t == token)
    }
}

/// Element access inside a page.
#[async_trait]
pub trait PageDom: Send + Sync {
    /// Elements with the given tag that carry a `class` attribute, in
    /// document order.
    async fn elements_with_class(&self, tag: &str) -> Result<Vec<ElementClass>, ToolError>;

    /// Overwrite the class attribute of an element.
    async fn set_class(&self, element: ElementHandle, class_name: &str) -> Result<(), ToolError>;
}

/// Directive delivered to the page content handler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum PageDirective {
    #[serde(rename_all = "camelCase")]
    RunTool { tool_id: String },

    #[serde(rename_all = "camelCase")]
    RestoreTool {
        tool_id: String,
        #[serde(default)]
        original_classes: OriginalClasses,
    },
}

impl PageDirective {
    pub fn tool_id(&self) -> &str {
        match self {
            PageDirective::RunTool { tool_id } | PageDirective::RestoreTool { tool_id, .. } => {
                tool_id
            }
        }
    }
}
