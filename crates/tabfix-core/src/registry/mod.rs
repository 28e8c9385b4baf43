//! Tool registry.

mod tool;

pub use tool::ToolRegistry;
