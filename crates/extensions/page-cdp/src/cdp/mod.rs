//! Minimal CDP client: HTTP target discovery plus one WebSocket session
//! per attached page.

mod client;
mod error;
mod protocol;
mod session;

pub use client::CdpClient;
pub use error::CdpError;
pub use protocol::*;
pub use session::PageSession;
