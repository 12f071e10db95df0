//! Window configuration types.

use serde::{Deserialize, Serialize};

/// Window size and title settings.
///
/// Width and height are rewritten on resize so the window reopens at its
/// last size. The minimums bound manual resizing; the dock monitor relaxes
/// the height floor while the window is collapsed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window inner width in logical pixels.
    pub width: u32,
    /// Window inner height in logical pixels.
    pub height: u32,
    pub min_width: u32,
    pub min_height: u32,
    pub title: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 400,
            height: 600,
            min_width: 300,
            min_height: 400,
            title: "Tickerdock".into(),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
