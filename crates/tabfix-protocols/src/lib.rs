//! # tabfix Protocols
//!
//! Core protocol definitions (traits and wire types) for tabfix.
//! Contains only interface definitions - no implementations.
//!
//! ## Core Traits
//!
//! - [`PageTool`] - A cosmetic page transformation with apply and undo
//! - [`PageDom`] - Element access inside a page context
//! - [`TabProvider`] - Resolves the active tab
//! - [`PageTransport`] - Delivers page directives to a tab
//! - [`KvStorage`] - Persistent key-value storage backend

pub mod error;
pub mod message;
pub mod page;
pub mod payload;
pub mod storage;
pub mod tab;
pub mod tool;

pub use error::{StorageError, ToolError, TransportError};
pub use message::{ExtensionRequest, ExtensionResponse};
pub use page::{ElementClass, ElementHandle, PageDirective, PageDom};
pub use payload::{OriginalClasses, UndoPayload};
pub use storage::KvStorage;
pub use tab::{PageTransport, Tab, TabProvider};
pub use tool::{OperationResult, PageTool, ToolDefinition};
