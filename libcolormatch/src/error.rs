//! Error types for Color Match

use std::path::PathBuf;

use thiserror::Error;

use crate::audio::SoundClip;

pub type Result<T> = std::result::Result<T, ColorMatchError>;

#[derive(Error, Debug)]
pub enum ColorMatchError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Audio error: {0}")]
    Audio(#[from] AudioError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl ColorMatchError {
    /// Returns the appropriate exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            ColorMatchError::InvalidInput(_) => 3,
            ColorMatchError::Config(_) => 2,
            ColorMatchError::Audio(_) => 1,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid value: {0}")]
    Invalid(String),

    #[error("Missing required field: {0}")]
    MissingField(String),
}

#[derive(Error, Debug)]
pub enum AudioError {
    #[error("Sound asset for '{clip}' not found at {}", .path.display())]
    AssetMissing { clip: SoundClip, path: PathBuf },

    #[error("Failed to read sound asset: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to decode sound: {0}")]
    Decode(String),

    #[error("Playback failed: {0}")]
    Playback(String),

    #[error("Unknown sound handle")]
    UnknownHandle,
}

/// Error returned when a color string cannot be parsed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid color '{input}': {reason}")]
pub struct ColorParseError {
    pub input: String,
    pub reason: String,
}
