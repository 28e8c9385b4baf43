//! Background message router.

use std::sync::Arc;

use tracing::{debug, warn};

use tabfix_protocols::message::{ExtensionRequest, ExtensionResponse};
use tabfix_protocols::tool::OperationResult;

use crate::active::ActiveToolStore;
use crate::orchestrator::Orchestrator;
use crate::trigger::{ShortcutMap, Trigger, TriggerAction};

/// Answers every request with exactly one well-formed response.
pub struct MessageRouter {
    orchestrator: Arc<Orchestrator>,
    active: Arc<ActiveToolStore>,
    shortcuts: ShortcutMap,
}

impl MessageRouter {
    pub fn new(
        orchestrator: Arc<Orchestrator>,
        active: Arc<ActiveToolStore>,
        shortcuts: ShortcutMap,
    ) -> Self {
        Self {
            orchestrator,
            active,
            shortcuts,
        }
    }

    pub async fn handle(&self, request: ExtensionRequest) -> ExtensionResponse {
        debug!("Handling {:?}", request);

        match request {
            ExtensionRequest::RunTool { tool_id } => {
                ExtensionResponse::Operation(self.run(&tool_id, TriggerAction::Run).await)
            }
            ExtensionRequest::RestoreTool { tool_id } => {
                ExtensionResponse::Operation(self.run(&tool_id, TriggerAction::Restore).await)
            }
            ExtensionRequest::GetTools => ExtensionResponse::Tools {
                tools: self.orchestrator.registry().list(),
                success: true,
            },
            ExtensionRequest::GetActiveTool => match self.active.get().await {
                Ok(tool_id) => ExtensionResponse::ActiveTool {
                    tool_id,
                    success: true,
                },
                Err(e) => Self::nack(e.to_string()),
            },
            ExtensionRequest::SetActiveTool { tool_id } => self.set_active(&tool_id).await,
            ExtensionRequest::HasToolData { tool_id } => {
                match self.orchestrator.has_data(&tool_id).await {
                    Ok(has_data) => ExtensionResponse::ToolData {
                        has_data,
                        success: true,
                    },
                    Err(e) => {
                        warn!("Failed to read undo data for {}: {}", tool_id, e);
                        ExtensionResponse::ToolData {
                            has_data: false,
                            success: false,
                        }
                    }
                }
            }
        }
    }

    /// Parse a raw JSON message and handle it.
    pub async fn handle_json(&self, raw: &str) -> ExtensionResponse {
        match serde_json::from_str::<ExtensionRequest>(raw) {
            Ok(request) => self.handle(request).await,
            Err(e) => Self::nack(format!("Invalid message: {}", e)),
        }
    }

    /// Run a trigger. Unbound shortcut commands yield `None`.
    pub async fn trigger(&self, trigger: Trigger) -> Option<OperationResult> {
        let (tool_id, action) = match trigger {
            Trigger::Ui { tool_id, action } => (tool_id, action),
            Trigger::Shortcut(command) => {
                let Some(action) = self.shortcuts.resolve(&command) else {
                    debug!("Ignoring unbound command {}", command);
                    return None;
                };
                match self.active.get().await {
                    Ok(tool_id) => (tool_id, action),
                    Err(e) => return Some(OperationResult::failure(e.to_string())),
                }
            }
        };

        Some(self.run(&tool_id, action).await)
    }

    async fn run(&self, tool_id: &str, action: TriggerAction) -> OperationResult {
        let outcome = match action {
            TriggerAction::Run => self.orchestrator.run_tool(tool_id).await,
            TriggerAction::Restore => self.orchestrator.restore_tool(tool_id).await,
        };
        outcome.unwrap_or_else(|e| OperationResult::failure(e.to_string()))
    }

    async fn set_active(&self, tool_id: &str) -> ExtensionResponse {
        if !self.orchestrator.registry().contains(tool_id) {
            return Self::nack(format!("Unknown tool: {}", tool_id));
        }
        match self.active.set(tool_id).await {
            Ok(()) => ExtensionResponse::Ack {
                success: true,
                message: None,
            },
            Err(e) => Self::nack(e.to_string()),
        }
    }

    fn nack(message: String) -> ExtensionResponse {
        ExtensionResponse::Ack {
            success: false,
            message: Some(message),
        }
    }
}

#[cfg(test)]
#[path = "router_tests.rs"]
mod tests;
