//! Configuration schema types for tickerdock.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with defaults matching the stock viewer's
//! original behavior.

mod crop;
mod dock;
mod logging;
mod page;
mod window;

pub use crop::*;
pub use dock::*;
pub use logging::*;
pub use page::*;
pub use window::*;

use serde::{Deserialize, Serialize};

/// Root configuration for tickerdock.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct TickerdockConfig {
    pub window: WindowConfig,
    pub crop: CropConfig,
    pub page: PageConfig,
    pub dock: DockConfig,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_correct_window() {
        let config = TickerdockConfig::default();
        assert_eq!(config.window.width, 400);
        assert_eq!(config.window.height, 600);
        assert_eq!(config.window.min_width, 300);
        assert_eq!(config.window.min_height, 400);
        assert_eq!(config.window.title, "Tickerdock");
    }

    #[test]
    fn default_config_has_correct_crop() {
        let config = TickerdockConfig::default();
        assert_eq!(config.crop.top, 182);
        assert_eq!(config.crop.bottom, 88);
    }

    #[test]
    fn default_config_has_correct_page() {
        let config = TickerdockConfig::default();
        assert_eq!(config.page.url, "https://i.jzj9999.com/quoteh5/");
        assert!(config.page.user_agent.is_none());
    }

    #[test]
    fn default_config_has_correct_dock() {
        let config = TickerdockConfig::default();
        assert!(config.dock.enabled);
        assert_eq!(config.dock.top_threshold, 5);
        assert_eq!(config.dock.release_margin, 40);
        assert_eq!(config.dock.collapsed_height, 100);
        assert_eq!(config.dock.drag_settle_polls, 6);
        assert_eq!(config.dock.collapse_cooldown_polls, 10);
        assert_eq!(config.dock.expand_cooldown_polls, 10);
        assert_eq!(config.dock.poll_interval_ms, 50);
    }

    #[test]
    fn default_config_has_correct_logging() {
        let config = TickerdockConfig::default();
        assert_eq!(config.logging.level, LogLevel::Info);
    }

    #[test]
    fn partial_toml_deserializes_with_defaults() {
        let toml_str = r#"
[window]
width = 500

[crop]
top = 200
"#;
        let config: TickerdockConfig = toml::from_str(toml_str).unwrap();
        // Overridden values
        assert_eq!(config.window.width, 500);
        assert_eq!(config.crop.top, 200);
        // Defaults preserved
        assert_eq!(config.window.height, 600);
        assert_eq!(config.crop.bottom, 88);
        assert_eq!(config.page.url, "https://i.jzj9999.com/quoteh5/");
        assert!(config.dock.enabled);
    }

    #[test]
    fn empty_toml_gives_all_defaults() {
        let config: TickerdockConfig = toml::from_str("").unwrap();
        let default = TickerdockConfig::default();
        assert_eq!(config.window.width, default.window.width);
        assert_eq!(config.crop.top, default.crop.top);
        assert_eq!(config.page.url, default.page.url);
        assert_eq!(config.dock.collapsed_height, default.dock.collapsed_height);
    }

    #[test]
    fn toml_serialization_roundtrip() {
        let config = TickerdockConfig::default();
        let toml_str = toml::to_string(&config).unwrap();
        let deserialized: TickerdockConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(deserialized.window.width, config.window.width);
        assert_eq!(deserialized.crop.bottom, config.crop.bottom);
        assert_eq!(deserialized.page.url, config.page.url);
    }

    #[test]
    fn dock_disabled_in_toml() {
        let toml_str = r#"
[dock]
enabled = false
collapsed_height = 80
"#;
        let config: TickerdockConfig = toml::from_str(toml_str).unwrap();
        assert!(!config.dock.enabled);
        assert_eq!(config.dock.collapsed_height, 80);
        // Sibling defaults preserved
        assert_eq!(config.dock.top_threshold, 5);
    }
}
