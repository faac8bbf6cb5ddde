//! Error types for colormatch-tui
//!
//! Wraps game library errors and terminal/IO errors for unified handling.

use thiserror::Error;

/// TUI-specific errors
#[derive(Error, Debug)]
pub enum TuiError {
    /// Game library error (configuration, audio setup)
    #[error("{0}")]
    Game(#[from] libcolormatch::ColorMatchError),

    /// Terminal/IO error
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),

    /// Bad command line combination
    #[error("Invalid arguments: {0}")]
    Arguments(String),
}

impl TuiError {
    pub fn exit_code(&self) -> i32 {
        match self {
            TuiError::Game(e) => e.exit_code(),
            TuiError::Terminal(_) => 1,
            TuiError::Arguments(_) => 3,
        }
    }
}

/// Result type for TUI operations
pub type Result<T> = std::result::Result<T, TuiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use libcolormatch::error::ConfigError;

    #[test]
    fn test_exit_codes() {
        let config = TuiError::Game(ConfigError::Invalid("grid".to_string()).into());
        assert_eq!(config.exit_code(), 2);

        let io = TuiError::Terminal(std::io::Error::new(std::io::ErrorKind::Other, "tty"));
        assert_eq!(io.exit_code(), 1);

        assert_eq!(TuiError::Arguments("x".to_string()).exit_code(), 3);
    }
}
