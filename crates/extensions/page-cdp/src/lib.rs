//! Chrome DevTools Protocol page transport for tabfix.
//!
//! Reaches tabs of a browser started with `--remote-debugging-port` and
//! runs page directives against their live DOM.
//!
//! ## Usage
//!
//! ```rust,ignore
//! let tabs = CdpTabs::new(CdpClient::new("http://127.0.0.1:9222", timeout)?, registry);
//! let tab = tabs.active_tab().await?;
//! ```

mod cdp;
mod dom;
mod tabs;

#[cfg(test)]
mod fake_page;

pub use cdp::{CdpClient, CdpError, PageInfo, PageSession};
pub use dom::CdpDom;
pub use tabs::CdpTabs;
