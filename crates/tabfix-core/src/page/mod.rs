//! Page side: directive dispatch and the in-process page model.

mod content;
mod memory;
mod tabs;

pub use content::ContentHandler;
pub use memory::MemoryDocument;
pub use tabs::MemoryTabs;
