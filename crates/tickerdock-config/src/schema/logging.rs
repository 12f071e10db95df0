//! Logging configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// The `EnvFilter` directive for this level, scoped to our crates.
    pub fn directive(&self) -> &'static str {
        match self {
            LogLevel::Debug => "tickerdock=debug",
            LogLevel::Info => "tickerdock=info",
            LogLevel::Warn => "tickerdock=warn",
            LogLevel::Error => "tickerdock=error",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}
