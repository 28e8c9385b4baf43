//! Error types for the tabfix protocol layer.

mod storage;
mod tool;
mod transport;

pub use storage::*;
pub use tool::*;
pub use transport::*;
