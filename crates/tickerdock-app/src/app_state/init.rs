//! Window and webview creation.

use std::sync::Arc;

use winit::dpi::{LogicalSize, PhysicalPosition};
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowButtons};

use tickerdock_webview::{full_window_bounds, PageOptions};

use super::core::TickerdockApp;

impl TickerdockApp {
    /// Create the window and the embedded webview.
    ///
    /// Returns `false` when window creation fails and the event loop
    /// should exit. A failed webview is tolerated: the empty window
    /// stays up so the user can still close it normally.
    pub(super) fn initialize_window(&mut self, event_loop: &ActiveEventLoop) -> bool {
        let w = &self.config.window;
        let attrs = Window::default_attributes()
            .with_title(w.title.clone())
            .with_inner_size(LogicalSize::new(f64::from(w.width), f64::from(w.height)))
            .with_min_inner_size(LogicalSize::new(
                f64::from(w.min_width),
                f64::from(w.min_height),
            ))
            .with_resizable(true);

        let window = match event_loop.create_window(attrs) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                tracing::error!("Failed to create window: {e}");
                return false;
            }
        };

        // Close-only chrome: no maximize or minimize affordances
        window.set_enabled_buttons(WindowButtons::CLOSE);

        center_window(&window);

        let options = PageOptions {
            url: self.config.page.url.clone(),
            user_agent: self.config.page.user_agent.clone(),
        };
        let bounds = full_window_bounds(f64::from(w.width), f64::from(w.height));
        match self.host.create(window.as_ref(), bounds, options) {
            Ok(handle) => {
                tracing::info!(url = %self.config.page.url, "webview created");
                self.webview = Some(handle);
            }
            Err(e) => {
                tracing::error!("Failed to create webview: {e}");
            }
        }

        self.window = Some(window);
        true
    }
}

/// Center a window on its monitor, best effort.
fn center_window(window: &Window) {
    let Some(monitor) = window.current_monitor().or_else(|| window.primary_monitor()) else {
        return;
    };
    let screen = monitor.size();
    if screen.width == 0 || screen.height == 0 {
        return;
    }
    let origin = monitor.position();
    let outer = window.outer_size();
    let x = origin.x + (screen.width.saturating_sub(outer.width) / 2) as i32;
    let y = origin.y + (screen.height.saturating_sub(outer.height) / 2) as i32;
    window.set_outer_position(PhysicalPosition::new(x, y));
}
