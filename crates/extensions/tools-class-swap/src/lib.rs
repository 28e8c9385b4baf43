//! Class swap tools for tabfix.
//!
//! A class swap tool rewrites the `class` attribute of every element that
//! carries a marker token, and puts the recorded classes back on undo.

mod catalog;
mod tools;

pub use catalog::register_catalog;
pub use tools::*;
