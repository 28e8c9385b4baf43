//! Background message surface.
//!
//! One request, one response. Requests are tagged by `action`.

use serde::{Deserialize, Serialize};

use crate::tool::{OperationResult, ToolDefinition};

/// A message sent to the background side by a trigger or UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum ExtensionRequest {
    #[serde(rename_all = "camelCase")]
    RunTool { tool_id: String },

    /// Any `originalClasses` carried by the sender is ignored; the stored
    /// payload is authoritative.
    #[serde(rename_all = "camelCase")]
    RestoreTool { tool_id: String },

    GetTools,

    GetActiveTool,

    #[serde(rename_all = "camelCase")]
    SetActiveTool { tool_id: String },

    #[serde(rename_all = "camelCase")]
    HasToolData { tool_id: String },
}

/// The reply to an [`ExtensionRequest`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExtensionResponse {
    Operation(OperationResult),

    Tools {
        tools: Vec<ToolDefinition>,
        success: bool,
    },

    #[serde(rename_all = "camelCase")]
    ActiveTool { tool_id: String, success: bool },

    #[serde(rename_all = "camelCase")]
    ToolData { has_data: bool, success: bool },

    Ack {
        success: bool,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
}

impl ExtensionResponse {
    pub fn is_success(&self) -> bool {
        match self {
            ExtensionResponse::Operation(result) => result.success,
            ExtensionResponse::Tools { success, .. }
            | ExtensionResponse::ActiveTool { success, .. }
            | ExtensionResponse::ToolData { success, .. }
            | ExtensionResponse::Ack { success, .. } => *success,
        }
    }
}
