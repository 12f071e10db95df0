//! WebView creation and lifecycle.
//!
//! `WebViewHost` builds the single child WebView that fills the host
//! window and collects its events into a sink the main event loop drains
//! on each poll tick.

use std::sync::{Arc, Mutex};

use tracing::{debug, warn};
use wry::raw_window_handle;
use wry::{WebView, WebViewBuilder};

use tickerdock_common::WebViewError;

use crate::events::{PageLoadState, WebViewEvent};

// =============================================================================
// SCHEME FILTER
// =============================================================================

/// Check whether a navigation target has an acceptable scheme.
///
/// The viewer hosts an arbitrary third-party page that navigates within
/// itself, so origins are not pinned; only non-web schemes are blocked.
pub fn is_scheme_allowed(url: &str) -> bool {
    url.starts_with("https://") || url.starts_with("http://") || url.starts_with("about:")
}

// =============================================================================
// TYPES
// =============================================================================

/// Options for the embedded page.
#[derive(Debug, Clone)]
pub struct PageOptions {
    /// Initial URL to load.
    pub url: String,
    /// Custom user agent string.
    pub user_agent: Option<String>,
}

/// Builds and tracks the embedded WebView.
pub struct WebViewHost {
    /// Event sink the main event loop drains on each poll tick.
    events: Arc<Mutex<Vec<WebViewEvent>>>,
}

impl WebViewHost {
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Drain all pending events.
    pub fn drain_events(&self) -> Vec<WebViewEvent> {
        match self.events.lock() {
            Ok(mut events) => std::mem::take(&mut *events),
            Err(_) => Vec::new(),
        }
    }

    /// Create the WebView as a child of the given window.
    ///
    /// The `window` must implement `raw_window_handle::HasWindowHandle`.
    /// The WebView is positioned at `bounds` within the parent window.
    pub fn create<W: raw_window_handle::HasWindowHandle>(
        &self,
        window: &W,
        bounds: wry::Rect,
        options: PageOptions,
    ) -> Result<WebViewHandle, WebViewError> {
        let events = Arc::clone(&self.events);

        let mut builder = WebViewBuilder::new()
            .with_bounds(bounds)
            .with_devtools(cfg!(debug_assertions))
            .with_focused(true);

        if let Some(ua) = &options.user_agent {
            builder = builder.with_user_agent(ua);
        }

        // Page load handler: the app injects the crop script on Finished
        builder = builder.with_on_page_load_handler(move |event, url| {
            let state = PageLoadState::from(event);
            debug!(?state, url = %url, "page load");
            if let Ok(mut evts) = events.lock() {
                evts.push(WebViewEvent::PageLoad { state, url });
            }
        });

        // Navigation handler: scheme filter only
        builder = builder.with_navigation_handler(|url| {
            if !is_scheme_allowed(&url) {
                warn!(url = %url, "navigation blocked: scheme not allowed");
                return false;
            }
            true
        });

        builder = builder.with_url(&options.url);

        let webview = builder
            .build_as_child(window)
            .map_err(|e| WebViewError::CreateError(e.to_string()))?;
        debug!(url = %options.url, "WebView created");

        Ok(WebViewHandle { webview })
    }
}

impl Default for WebViewHost {
    fn default() -> Self {
        Self::new()
    }
}

/// Handle to the embedded WebView.
pub struct WebViewHandle {
    webview: WebView,
}

impl WebViewHandle {
    /// Execute JavaScript in the WebView context.
    pub fn evaluate_script(&self, js: &str) -> Result<(), WebViewError> {
        self.webview
            .evaluate_script(js)
            .map_err(|e| WebViewError::ScriptError(e.to_string()))
    }

    /// Set the WebView bounds (position + size) within the parent window.
    pub fn set_bounds(&self, bounds: wry::Rect) -> Result<(), WebViewError> {
        self.webview
            .set_bounds(bounds)
            .map_err(|e| WebViewError::BoundsError(e.to_string()))
    }
}

// =============================================================================
// BOUNDS
// =============================================================================

/// Bounds covering the whole parent window, in logical coordinates.
pub fn full_window_bounds(width: f64, height: f64) -> wry::Rect {
    wry::Rect {
        position: wry::dpi::Position::Logical(wry::dpi::LogicalPosition::new(0.0, 0.0)),
        size: wry::dpi::Size::Logical(wry::dpi::LogicalSize::new(width, height)),
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // -- Scheme filter --

    #[test]
    fn allows_web_schemes() {
        assert!(is_scheme_allowed("https://i.jzj9999.com/quoteh5/"));
        assert!(is_scheme_allowed("http://example.com"));
        assert!(is_scheme_allowed("about:blank"));
    }

    #[test]
    fn blocks_file_protocol() {
        assert!(!is_scheme_allowed("file:///etc/passwd"));
    }

    #[test]
    fn blocks_javascript_protocol() {
        assert!(!is_scheme_allowed("javascript:alert(1)"));
    }

    #[test]
    fn blocks_data_protocol() {
        assert!(!is_scheme_allowed("data:text/html,<h1>x</h1>"));
    }

    #[test]
    fn blocks_empty_and_garbage() {
        assert!(!is_scheme_allowed(""));
        assert!(!is_scheme_allowed("not-a-url"));
        assert!(!is_scheme_allowed("ftp://files.example.com"));
    }

    // -- Bounds --

    #[test]
    fn full_window_bounds_is_origin_anchored() {
        let bounds = full_window_bounds(400.0, 600.0);

        match bounds.position {
            wry::dpi::Position::Logical(pos) => {
                assert!((pos.x).abs() < f64::EPSILON);
                assert!((pos.y).abs() < f64::EPSILON);
            }
            _ => panic!("Expected logical position"),
        }

        match bounds.size {
            wry::dpi::Size::Logical(size) => {
                assert!((size.width - 400.0).abs() < f64::EPSILON);
                assert!((size.height - 600.0).abs() < f64::EPSILON);
            }
            _ => panic!("Expected logical size"),
        }
    }

    #[test]
    fn full_window_bounds_collapsed_strip() {
        let bounds = full_window_bounds(400.0, 100.0);
        match bounds.size {
            wry::dpi::Size::Logical(size) => {
                assert!((size.height - 100.0).abs() < f64::EPSILON);
            }
            _ => panic!("Expected logical size"),
        }
    }
}
