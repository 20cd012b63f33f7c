//! Logging configuration.

use serde::{Deserialize, Serialize};

/// Log level.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
    Warning,
    Error,
}

impl LogLevel {
    /// `tracing-subscriber` filter directive for this level.
    pub fn directive(&self) -> &'static str {
        match self {
            LogLevel::Debug => "splitscreen=debug",
            LogLevel::Info => "splitscreen=info",
            LogLevel::Warning => "splitscreen=warn",
            LogLevel::Error => "splitscreen=error",
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_level_parses_uppercase() {
        let config: LoggingConfig = toml::from_str(r#"level = "DEBUG""#).unwrap();
        assert_eq!(config.level, LogLevel::Debug);
    }

    #[test]
    fn log_level_directives() {
        assert_eq!(LogLevel::default().directive(), "splitscreen=info");
        assert_eq!(LogLevel::Warning.directive(), "splitscreen=warn");
    }
}
