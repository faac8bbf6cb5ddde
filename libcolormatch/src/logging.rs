//! Centralized logging configuration
//!
//! Provides consistent logging setup with support for:
//! - Text, JSON, and pretty-printed output
//! - Stderr, file, or discarded output (a full-screen terminal UI cannot
//!   share the terminal with log lines)
//! - Environment variable configuration
//!
//! # Examples
//!
//! ```no_run
//! use libcolormatch::logging::{LogFormat, LogTarget, LoggingConfig};
//!
//! // JSON lines into a file
//! let config = LoggingConfig::new(LogFormat::Json, "info".to_string(), false)
//!     .with_target(LogTarget::File("colormatch.log".into()));
//! config.init().expect("logging");
//!
//! // Or start from the environment and pick a target
//! libcolormatch::logging::config_from_env()
//!     .with_target(LogTarget::Discard)
//!     .init()
//!     .expect("logging");
//! ```

use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Mutex;

use tracing_subscriber::fmt::writer::BoxMakeWriter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable text output (no colors, for piping)
    Text,
    /// Machine-parseable JSON (one JSON object per line)
    Json,
    /// Pretty-printed with colors (for development)
    Pretty,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            "pretty" => Ok(LogFormat::Pretty),
            _ => Err(format!(
                "Invalid log format: '{}'. Valid options: text, json, pretty",
                s
            )),
        }
    }
}

impl std::fmt::Display for LogFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogFormat::Text => write!(f, "text"),
            LogFormat::Json => write!(f, "json"),
            LogFormat::Pretty => write!(f, "pretty"),
        }
    }
}

/// Where log lines go
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    /// Appended to this file (created if needed)
    File(PathBuf),
    Discard,
}

/// Configuration for logging initialization
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub format: LogFormat,
    pub level: String,
    pub verbose: bool,
    pub target: LogTarget,
}

impl LoggingConfig {
    /// Create a new logging configuration writing to stderr
    ///
    /// # Arguments
    ///
    /// * `format` - Log output format (text, json, or pretty)
    /// * `level` - Minimum log level (error, warn, info, debug, trace)
    /// * `verbose` - If true, defaults to debug level
    pub fn new(format: LogFormat, level: String, verbose: bool) -> Self {
        Self {
            format,
            level,
            verbose,
            target: LogTarget::Stderr,
        }
    }

    pub fn with_target(mut self, target: LogTarget) -> Self {
        self.target = target;
        self
    }

    /// Filter directive used when `RUST_LOG` is unset
    pub fn default_directive(&self) -> &str {
        if self.verbose {
            "debug"
        } else {
            &self.level
        }
    }

    /// Initialize logging with the configured settings
    ///
    /// Call once at program start. Fails if the log file cannot be opened or
    /// a global subscriber is already installed.
    pub fn init(&self) -> io::Result<()> {
        use tracing_subscriber::EnvFilter;

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(self.default_directive()));

        let (writer, ansi) = match &self.target {
            LogTarget::Stderr => (BoxMakeWriter::new(io::stderr), true),
            LogTarget::Discard => (BoxMakeWriter::new(io::sink), false),
            LogTarget::File(path) => {
                if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    std::fs::create_dir_all(parent)?;
                }
                let file = OpenOptions::new().create(true).append(true).open(path)?;
                (BoxMakeWriter::new(Mutex::new(file)), false)
            }
        };

        let result = match self.format {
            LogFormat::Json => {
                // One JSON object per line
                tracing_subscriber::fmt()
                    .json()
                    .with_env_filter(filter)
                    .with_writer(writer)
                    .with_current_span(true)
                    .with_span_list(true)
                    .flatten_event(true)
                    .with_target(true)
                    .with_line_number(true)
                    .with_file(true)
                    .try_init()
            }
            LogFormat::Pretty => {
                tracing_subscriber::fmt()
                    .pretty()
                    .with_env_filter(filter)
                    .with_writer(writer)
                    .with_ansi(ansi)
                    .with_target(true)
                    .with_line_number(true)
                    .with_file(true)
                    .try_init()
            }
            LogFormat::Text => {
                tracing_subscriber::fmt()
                    .with_env_filter(filter)
                    .with_writer(writer)
                    .with_ansi(false)
                    .with_target(false)
                    .with_level(true)
                    .try_init()
            }
        };

        result.map_err(|e| io::Error::new(io::ErrorKind::Other, e))
    }
}

/// Logging configuration from the environment, without installing it
///
/// Respects `COLORMATCH_LOG_FORMAT` and `COLORMATCH_LOG_LEVEL` environment
/// variables. Falls back to text format with info level on stderr.
///
/// ```bash
/// export COLORMATCH_LOG_FORMAT=json
/// export COLORMATCH_LOG_LEVEL=debug
/// ```
pub fn config_from_env() -> LoggingConfig {
    let format = std::env::var("COLORMATCH_LOG_FORMAT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(LogFormat::Text);

    let level = std::env::var("COLORMATCH_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

    LoggingConfig::new(format, level, false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_log_format_from_str() {
        assert_eq!("text".parse::<LogFormat>().unwrap(), LogFormat::Text);
        assert_eq!("json".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert_eq!("pretty".parse::<LogFormat>().unwrap(), LogFormat::Pretty);

        // Case insensitive
        assert_eq!("TEXT".parse::<LogFormat>().unwrap(), LogFormat::Text);
        assert_eq!("Json".parse::<LogFormat>().unwrap(), LogFormat::Json);
    }

    #[test]
    fn test_log_format_from_str_invalid() {
        let result = "invalid".parse::<LogFormat>();
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .contains("Invalid log format: 'invalid'"));
    }

    #[test]
    fn test_log_format_display() {
        assert_eq!(LogFormat::Text.to_string(), "text");
        assert_eq!(LogFormat::Json.to_string(), "json");
        assert_eq!(LogFormat::Pretty.to_string(), "pretty");
    }

    #[test]
    fn test_verbose_overrides_level() {
        let config = LoggingConfig::new(LogFormat::Text, "warn".to_string(), true);
        assert_eq!(config.default_directive(), "debug");

        let config = LoggingConfig::new(LogFormat::Text, "warn".to_string(), false);
        assert_eq!(config.default_directive(), "warn");
    }

    #[test]
    fn test_with_target() {
        let config = LoggingConfig::new(LogFormat::Json, "info".to_string(), false)
            .with_target(LogTarget::Discard);
        assert_eq!(config.target, LogTarget::Discard);
    }

    #[test]
    #[serial]
    fn test_config_from_env() {
        std::env::set_var("COLORMATCH_LOG_FORMAT", "json");
        std::env::set_var("COLORMATCH_LOG_LEVEL", "trace");
        let config = config_from_env();
        std::env::remove_var("COLORMATCH_LOG_FORMAT");
        std::env::remove_var("COLORMATCH_LOG_LEVEL");

        assert_eq!(config.format, LogFormat::Json);
        assert_eq!(config.level, "trace");
        assert_eq!(config.target, LogTarget::Stderr);
    }

    #[test]
    #[serial]
    fn test_config_from_env_ignores_bad_format() {
        std::env::set_var("COLORMATCH_LOG_FORMAT", "xml");
        let config = config_from_env();
        std::env::remove_var("COLORMATCH_LOG_FORMAT");

        assert_eq!(config.format, LogFormat::Text);
    }
}
