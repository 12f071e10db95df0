//! The poll tick: dock monitoring, webview events, coalesced saves.

use std::time::Instant;

use winit::dpi::{LogicalSize, PhysicalSize};
use winit::event_loop::{ActiveEventLoop, ControlFlow};
use winit::window::Window;

use tickerdock_webview::crop::crop_injection_js;
use tickerdock_webview::{full_window_bounds, PageLoadState, WebViewEvent};

use super::core::TickerdockApp;
use super::dock::{DockCommand, GeometrySample};
use super::types::{InjectionState, MAX_INJECTION_ATTEMPTS};

impl TickerdockApp {
    /// Run one poll tick when due and schedule the next wake-up.
    pub(super) fn poll_and_schedule(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();
        if now.duration_since(self.last_poll) >= self.poll_interval {
            self.last_poll = now;
            self.drain_webview_events();
            self.run_injection();
            self.poll_dock();
            self.flush_pending_save();
        }

        event_loop.set_control_flow(ControlFlow::WaitUntil(Instant::now() + self.poll_interval));
    }

    /// Consume queued webview events; a finished load schedules injection.
    fn drain_webview_events(&mut self) {
        for event in self.host.drain_events() {
            match event {
                WebViewEvent::PageLoad {
                    state: PageLoadState::Finished,
                    url,
                } => {
                    tracing::info!(url = %url, "page loaded");
                    self.injection = InjectionState::Pending { attempts: 0 };
                }
                WebViewEvent::PageLoad { .. } => {}
            }
        }
    }

    /// Inject the crop script if one is due, retrying once on failure.
    fn run_injection(&mut self) {
        let InjectionState::Pending { attempts } = self.injection else {
            return;
        };
        let Some(webview) = &self.webview else {
            return;
        };

        let top = self.config.crop.top;
        let bottom = self.config.crop.bottom;
        match webview.evaluate_script(&crop_injection_js(top, bottom)) {
            Ok(()) => {
                tracing::info!(top, bottom, "crop script injected");
                self.injection = InjectionState::Settled;
            }
            Err(e) => {
                let attempts = attempts + 1;
                if attempts >= MAX_INJECTION_ATTEMPTS {
                    tracing::warn!("crop injection failed, showing uncropped page: {e}");
                    self.injection = InjectionState::Settled;
                } else {
                    tracing::debug!("crop injection failed, retrying: {e}");
                    self.injection = InjectionState::Pending { attempts };
                }
            }
        }
    }

    /// Sample window geometry and feed the dock monitor.
    fn poll_dock(&mut self) {
        if !self.config.dock.enabled {
            return;
        }
        let Some(window) = self.window.clone() else {
            return;
        };

        let top_y = match window.outer_position() {
            Ok(pos) => f64::from(pos.y) / window.scale_factor(),
            // Minimized or unsupported by the platform; skip this tick
            Err(e) => {
                tracing::debug!("outer position unavailable: {e}");
                return;
            }
        };

        let sample = GeometrySample {
            top_y,
            cursor_inside: self.cursor_inside,
        };
        if let Some(cmd) = self.dock.poll(sample) {
            self.apply_dock_command(&window, cmd);
            tracing::debug!(state = ?self.dock.state(), "dock transition applied");
        }
    }

    /// Apply a collapse or expand to the real window, best effort.
    fn apply_dock_command(&mut self, window: &Window, cmd: DockCommand) {
        let scale = window.scale_factor();
        let width = f64::from(window.inner_size().width) / scale;
        let min_width = f64::from(self.config.window.min_width);

        let height = match cmd {
            DockCommand::Collapse { height } => {
                tracing::debug!(height, "collapsing to strip");
                // The strip sits below the configured minimum height
                window.set_min_inner_size(Some(LogicalSize::new(
                    min_width,
                    f64::from(self.config.dock.collapsed_height),
                )));
                height
            }
            DockCommand::Expand { height } => {
                tracing::debug!(height, "expanding");
                window.set_min_inner_size(Some(LogicalSize::new(
                    min_width,
                    f64::from(self.config.window.min_height),
                )));
                height
            }
        };

        // A synchronous resize produces no Resized event, so sync here
        if let Some(applied) = window.request_inner_size(LogicalSize::new(width, f64::from(height)))
        {
            self.sync_webview_bounds(applied);
        }
    }

    /// Keep the webview covering the whole window.
    pub(super) fn sync_webview_bounds(&mut self, size: PhysicalSize<u32>) {
        let Some(webview) = &self.webview else {
            return;
        };
        let scale = self
            .window
            .as_ref()
            .map(|w| w.scale_factor())
            .unwrap_or(1.0);
        let logical = size.to_logical::<f64>(scale);
        if let Err(e) = webview.set_bounds(full_window_bounds(logical.width, logical.height)) {
            tracing::warn!("failed to resize webview: {e}");
        }
    }
}
