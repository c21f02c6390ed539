//! Logging setup for the site binary.

use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

/// Console logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Default level (overridden by RUST_LOG)
    pub default_level: String,
    /// Human-readable multi-line output
    pub pretty: bool,
    /// Include ANSI colors
    pub ansi: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            default_level: "info".to_string(),
            pretty: false,
            ansi: true,
        }
    }
}

impl LogConfig {
    /// Verbose output for local development.
    pub fn development() -> Self {
        Self {
            default_level: "debug".to_string(),
            pretty: true,
            ansi: true,
        }
    }

    /// Minimal output for tests.
    pub fn testing() -> Self {
        Self {
            default_level: "warn".to_string(),
            pretty: false,
            ansi: false,
        }
    }

    /// Overrides the default level.
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.default_level = level.into();
        self
    }

    /// Builds the env filter: RUST_LOG wins, then `default_level`.
    ///
    /// Noisy dependency targets are capped at `warn`.
    pub fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{},hyper=warn,reqwest=warn,tao=warn,wry=warn",
                self.default_level
            ))
        })
    }

    /// Installs the global subscriber. Later calls are ignored.
    pub fn init(&self) {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(self.env_filter())
            .with_ansi(self.ansi)
            .with_target(false);

        let result = if self.pretty {
            builder.pretty().try_init()
        } else {
            builder.compact().try_init()
        };
        if result.is_err() {
            tracing::debug!("Tracing subscriber already installed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        assert_eq!(LogConfig::default().default_level, "info");
        assert!(LogConfig::development().pretty);
        assert!(!LogConfig::testing().ansi);
        assert_eq!(LogConfig::testing().with_level("trace").default_level, "trace");
    }

    #[test]
    fn test_init_twice_is_harmless() {
        LogConfig::testing().init();
        LogConfig::testing().init();
    }
}
