//! Tickerdock configuration system.
//!
//! TOML-based settings with full serde defaults so partial configs work
//! out of the box. Covers window geometry, page crop offsets, the quote
//! page URL, and dock monitor tuning.

pub mod schema;
pub mod toml_loader;
pub mod toml_writer;
pub mod validation;

pub use schema::TickerdockConfig;
pub use toml_writer::{save_config, save_config_to_path};

use tickerdock_common::ConfigError;

/// Load config from the platform default path.
///
/// Loads `config.toml` from the OS config directory, creating a commented
/// default file if none exists, then validates the result. Validation
/// failures are logged and tolerated; the parsed values are used as-is.
pub fn load_config() -> Result<TickerdockConfig, ConfigError> {
    toml_loader::load_default()
}
