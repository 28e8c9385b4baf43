//! Key-value storage backends.

mod file;
mod memory;

pub use file::FileKvStorage;
pub use memory::MemoryKvStorage;
