//! Tool catalog registration.

use std::sync::Arc;

use tracing::debug;

use tabfix_config::{ToolSpec, ToolsConfig};
use tabfix_core::{RegistryError, ToolRegistry};

use crate::tools::ClassSwapTool;

/// Register every configured tool, in catalog order.
pub fn register_catalog(
    registry: &ToolRegistry,
    config: &ToolsConfig,
) -> Result<usize, RegistryError> {
    for spec in &config.catalog {
        match spec {
            ToolSpec::ClassSwap(swap) => {
                registry.register(Arc::new(ClassSwapTool::new(swap)))?;
            }
        }
        debug!("Registered tool {}", spec.id());
    }
    Ok(config.catalog.len())
}
