//! Logging configuration and initialization.

use serde::Deserialize;
use tracing_subscriber::{fmt, EnvFilter};

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl LoggingConfig {
    /// Initialize the tracing subscriber, replacing the configured level
    /// with `level` when given (CLI `-v` / `-q`).
    ///
    /// `RUST_LOG` takes precedence over both. Logs go to stderr so that
    /// command output on stdout stays machine-readable.
    pub fn init_with_level(&self, level: Option<&str>) {
        let level = level.unwrap_or(&self.level);
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

        // try_init: a second initialization (tests, repeated runs) is not fatal.
        let _ = match self.format.as_str() {
            "json" => fmt()
                .json()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .try_init(),
            _ => fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .try_init(),
        };
    }

    /// Whether `format` names a supported log format.
    #[must_use]
    pub fn is_known_format(format: &str) -> bool {
        matches!(format, "pretty" | "json")
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: "pretty".into(),
        }
    }
}
