//! TickerdockApp struct definition and constructor.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use winit::window::Window;

use tickerdock_config::TickerdockConfig;
use tickerdock_webview::{WebViewHandle, WebViewHost};

use super::dock::DockMonitor;
use super::types::InjectionState;

/// Top-level application state.
pub struct TickerdockApp {
    pub(super) config: TickerdockConfig,
    /// CLI-provided config path; settings save back here when set.
    pub(super) config_path: Option<PathBuf>,

    // Windowing
    pub(super) window: Option<Arc<Window>>,

    // Embedded quote page
    pub(super) host: WebViewHost,
    pub(super) webview: Option<WebViewHandle>,

    // Collapse/expand monitor
    pub(super) dock: DockMonitor,
    pub(super) cursor_inside: bool,

    // Crop script injection
    pub(super) injection: InjectionState,

    // Settings persistence, coalesced to the poll tick
    pub(super) pending_save: bool,

    pub(super) poll_interval: Duration,
    pub(super) last_poll: Instant,
}

impl TickerdockApp {
    pub fn new(config: TickerdockConfig, config_path: Option<PathBuf>) -> Self {
        let dock = DockMonitor::new(config.dock, config.window.height);
        let poll_interval = Duration::from_millis(config.dock.poll_interval_ms);
        Self {
            config,
            config_path,
            window: None,
            host: WebViewHost::new(),
            webview: None,
            dock,
            cursor_inside: false,
            injection: InjectionState::Idle,
            pending_save: false,
            poll_interval,
            last_poll: Instant::now(),
        }
    }
}
