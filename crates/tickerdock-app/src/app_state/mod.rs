//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop. Coordinates the window, the embedded webview, the dock
//! monitor, and settings persistence.

mod core;
mod dock;
mod event_handler;
mod init;
mod persist;
mod polling;
mod types;

pub use self::core::TickerdockApp;
