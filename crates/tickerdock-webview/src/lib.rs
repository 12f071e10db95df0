//! WebView layer for embedding the quote page.
//!
//! Wraps the `wry` crate to provide:
//! - A single child WebView filling the host window
//! - Crop stylesheet/script generation and injection
//! - Page load event plumbing back to the main event loop

pub mod crop;
pub mod events;
pub mod host;

pub use events::{PageLoadState, WebViewEvent};
pub use host::{full_window_bounds, PageOptions, WebViewHandle, WebViewHost};
