//! Configuration validation.
//!
//! Validates numeric ranges and the page URL scheme, collecting all
//! problems into a single `ConfigError`. Callers treat failures as
//! warnings: the viewer runs best-effort with whatever was parsed.

use crate::schema::TickerdockConfig;
use tickerdock_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &TickerdockConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_window(&mut errors, config);
    validate_crop(&mut errors, config);
    validate_page(&mut errors, config);
    validate_dock(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

fn validate_window(errors: &mut Vec<String>, config: &TickerdockConfig) {
    let w = &config.window;
    if w.width < 100 || w.width > 10_000 {
        errors.push(format!("window.width {} out of range 100-10000", w.width));
    }
    if w.height < 100 || w.height > 10_000 {
        errors.push(format!("window.height {} out of range 100-10000", w.height));
    }
    if w.min_width == 0 || w.min_height == 0 {
        errors.push("window minimum sizes must be positive".into());
    }
}

fn validate_crop(errors: &mut Vec<String>, config: &TickerdockConfig) {
    if config.crop.top > 1_000 {
        errors.push(format!("crop.top {} out of range 0-1000", config.crop.top));
    }
    if config.crop.bottom > 1_000 {
        errors.push(format!(
            "crop.bottom {} out of range 0-1000",
            config.crop.bottom
        ));
    }
}

fn validate_page(errors: &mut Vec<String>, config: &TickerdockConfig) {
    let url = &config.page.url;
    if !(url.starts_with("https://") || url.starts_with("http://")) {
        errors.push(format!("page.url must be http(s), got '{url}'"));
    }
}

fn validate_dock(errors: &mut Vec<String>, config: &TickerdockConfig) {
    let d = &config.dock;
    if d.top_threshold < 0 {
        errors.push(format!("dock.top_threshold {} must be >= 0", d.top_threshold));
    }
    if d.release_margin < 0 {
        errors.push(format!("dock.release_margin {} must be >= 0", d.release_margin));
    }
    if d.collapsed_height < 20 {
        errors.push(format!(
            "dock.collapsed_height {} too small (min 20)",
            d.collapsed_height
        ));
    }
    if d.collapsed_height >= config.window.min_height {
        errors.push(format!(
            "dock.collapsed_height {} must be below window.min_height {}",
            d.collapsed_height, config.window.min_height
        ));
    }
    if d.poll_interval_ms < 10 || d.poll_interval_ms > 1_000 {
        errors.push(format!(
            "dock.poll_interval_ms {} out of range 10-1000",
            d.poll_interval_ms
        ));
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(validate(&TickerdockConfig::default()).is_ok());
    }

    #[test]
    fn rejects_zero_window_size() {
        let mut config = TickerdockConfig::default();
        config.window.width = 0;
        let err = validate(&config).unwrap_err();
        assert!(err.to_string().contains("window.width"));
    }

    #[test]
    fn rejects_oversized_crop() {
        let mut config = TickerdockConfig::default();
        config.crop.top = 5_000;
        let err = validate(&config).unwrap_err();
        assert!(err.to_string().contains("crop.top"));
    }

    #[test]
    fn rejects_non_http_url() {
        let mut config = TickerdockConfig::default();
        config.page.url = "file:///etc/passwd".into();
        let err = validate(&config).unwrap_err();
        assert!(err.to_string().contains("page.url"));
    }

    #[test]
    fn rejects_collapsed_height_above_min_height() {
        let mut config = TickerdockConfig::default();
        config.dock.collapsed_height = 450; // min_height is 400
        let err = validate(&config).unwrap_err();
        assert!(err.to_string().contains("collapsed_height"));
    }

    #[test]
    fn rejects_extreme_poll_interval() {
        let mut config = TickerdockConfig::default();
        config.dock.poll_interval_ms = 5;
        assert!(validate(&config).is_err());

        config.dock.poll_interval_ms = 60_000;
        assert!(validate(&config).is_err());
    }

    #[test]
    fn collects_multiple_errors() {
        let mut config = TickerdockConfig::default();
        config.window.width = 0;
        config.crop.bottom = 9_999;
        config.page.url = "not-a-url".into();
        let err = validate(&config).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("window.width"));
        assert!(msg.contains("crop.bottom"));
        assert!(msg.contains("page.url"));
    }
}
