//! Tool registry for managing available tools.

use std::sync::Arc;

use dashmap::DashMap;
use parking_lot::RwLock;

use tabfix_protocols::tool::{PageTool, ToolDefinition};

use crate::error::RegistryError;

/// Registry of page tools.
///
/// Shared by the background side (catalog, id checks) and the page-side
/// content handler (dispatch). Listing follows registration order.
pub struct ToolRegistry {
    tools: DashMap<String, Arc<dyn PageTool>>,
    order: RwLock<Vec<String>>,
}

impl ToolRegistry {
    /// Create a new tool registry.
    pub fn new() -> Self {
        Self {
            tools: DashMap::new(),
            order: RwLock::new(Vec::new()),
        }
    }

    /// Register a tool.
    ///
    /// Returns an error if a tool with the same id is already registered.
    pub fn register(&self, tool: Arc<dyn PageTool>) -> Result<(), RegistryError> {
        let id = tool.definition().id.clone();
        if self.tools.contains_key(&id) {
            return Err(RegistryError::AlreadyRegistered(id));
        }

        self.tools.insert(id.clone(), tool);
        self.order.write().push(id);
        Ok(())
    }

    /// Get a tool by id.
    pub fn get(&self, id: &str) -> Option<Arc<dyn PageTool>> {
        self.tools.get(id).map(|tool| tool.clone())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.tools.contains_key(id)
    }

    /// List all tool definitions.
    pub fn list(&self) -> Vec<ToolDefinition> {
        self.order
            .read()
            .iter()
            .filter_map(|id| self.tools.get(id).map(|t| t.definition().clone()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}
