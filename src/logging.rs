//! # Logging Setup
//!
//! Installs a `tracing` subscriber for applications embedding the parser. The
//! parser itself only emits events; nothing is printed until a subscriber exists.

use anyhow::Result;
use std::env;
use tracing_subscriber::prelude::*;

/// Output format of log lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Level for this crate's events (e.g., "info", "debug", "trace")
    pub level: String,
    pub format: LogFormat,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
        }
    }
}

impl LogConfig {
    /// Read `INGREDIENT_PARSER_LOG_LEVEL` and `LOG_FORMAT` (pretty or json)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let level = env::var("INGREDIENT_PARSER_LOG_LEVEL").unwrap_or(defaults.level);
        let format = match env::var("LOG_FORMAT").as_deref() {
            Ok("json") => LogFormat::Json,
            _ => LogFormat::Pretty,
        };
        Self { level, format }
    }
}

/// Install the global subscriber
///
/// `RUST_LOG` directives are honored on top of the configured level. Calling this
/// again after a subscriber is installed returns an error and changes nothing.
pub fn init_tracing(config: &LogConfig) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(format!("ingredient_units={}", config.level).parse()?);

    match config.format {
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .pretty()
                    .with_target(true)
                    .with_thread_ids(false)
                    .with_thread_names(false),
            )
            .try_init()?,
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_thread_names(true),
            )
            .try_init()?,
    }

    tracing::info!(
        level = %config.level,
        format = ?config.format,
        "Tracing initialized with structured logging"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_log_config() {
        let config = LogConfig::default();
        assert_eq!(config.level, "info");
        assert_eq!(config.format, LogFormat::Pretty);
    }

    #[test]
    fn test_invalid_level_is_rejected() {
        let config = LogConfig {
            level: "not a level!".to_string(),
            format: LogFormat::Json,
        };
        assert!(init_tracing(&config).is_err());
    }

    #[test]
    fn test_second_init_fails_quietly() {
        let config = LogConfig {
            level: "warn".to_string(),
            format: LogFormat::Pretty,
        };
        // The first call may lose to another test; the second always finds a subscriber
        let _ = init_tracing(&config);
        assert!(init_tracing(&config).is_err());
    }
}
