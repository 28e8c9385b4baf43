//! Tool protocol definitions.
//!
//! A tool is a single cosmetic transformation that can be applied to a page
//! and later undone.

mod definition;
mod result;
mod traits;

pub use definition::*;
pub use result::*;
pub use traits::*;
