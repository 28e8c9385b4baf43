//! # tabfix Core
//!
//! Background-side logic and the page-side content handler.
//!
//! ## Components
//!
//! - [`ToolRegistry`] - Catalog of page tools
//! - [`StateStore`] - Per-tool undo payloads in persistent storage
//! - [`ActiveToolStore`] - The persisted active tool id
//! - [`Orchestrator`] - Apply/restore round trips against the active tab
//! - [`MessageRouter`] - The request/response message surface
//! - [`ContentHandler`] - Page-side dispatch of directives to tools

pub mod active;
pub mod error;
pub mod orchestrator;
pub mod page;
pub mod registry;
pub mod router;
pub mod state;
pub mod status;
pub mod storage;
pub mod trigger;

pub use active::ActiveToolStore;
pub use error::{OrchestratorError, RegistryError};
pub use orchestrator::Orchestrator;
pub use page::{ContentHandler, MemoryDocument, MemoryTabs};
pub use registry::ToolRegistry;
pub use router::MessageRouter;
pub use state::StateStore;
pub use status::{Status, StatusKind};
pub use storage::{FileKvStorage, MemoryKvStorage};
pub use trigger::{ShortcutMap, Trigger, TriggerAction};
