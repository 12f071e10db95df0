//! Page crop configuration.

use serde::{Deserialize, Serialize};

/// Pixel margins hiding portions of the embedded page.
///
/// The quote page carries fixed navigation chrome at the top and an app
/// banner at the bottom; both are cropped away with injected style rules.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct CropConfig {
    /// Pixels hidden at the top of the page.
    pub top: u32,
    /// Pixels hidden at the bottom of the page.
    pub bottom: u32,
}

impl Default for CropConfig {
    fn default() -> Self {
        Self { top: 182, bottom: 88 }
    }
}
