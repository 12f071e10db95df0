//! Quote page configuration.

use serde::{Deserialize, Serialize};

/// The mobile quote page the viewer embeds.
pub const DEFAULT_QUOTE_URL: &str = "https://i.jzj9999.com/quoteh5/";

/// Embedded page settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// URL loaded into the webview.
    pub url: String,
    /// Custom user agent string (webview default when unset).
    pub user_agent: Option<String>,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_QUOTE_URL.into(),
            user_agent: None,
        }
    }
}
