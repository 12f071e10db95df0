use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum WebViewError {
    #[error("webview creation error: {0}")]
    CreateError(String),

    #[error("script injection error: {0}")]
    ScriptError(String),

    #[error("webview bounds error: {0}")]
    BoundsError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("crop.top out of range".into());
        assert_eq!(
            err.to_string(),
            "config validation error: crop.top out of range"
        );
    }

    #[test]
    fn webview_error_display() {
        let err = WebViewError::CreateError("no display".into());
        assert_eq!(err.to_string(), "webview creation error: no display");

        let err = WebViewError::ScriptError("evaluate failed".into());
        assert_eq!(err.to_string(), "script injection error: evaluate failed");

        let err = WebViewError::BoundsError("resize rejected".into());
        assert_eq!(err.to_string(), "webview bounds error: resize rejected");
    }
}
