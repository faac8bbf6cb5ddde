//! Configuration management for Color Match
//!
//! Settings come from a TOML file (all sections optional), then environment
//! overrides, then whatever the front-end applies from its command line.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

pub const DEFAULT_GRID_SIZE: usize = 4;
pub const DEFAULT_ROUND_SECONDS: u32 = 30;
pub const DEFAULT_BONUS_SECONDS: u32 = 1;
pub const MIN_GRID_SIZE: usize = 2;
pub const MAX_GRID_SIZE: usize = 8;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub game: GameSettings,
    pub audio: AudioConfig,
    pub ui: UiConfig,
}

/// Rules of a round
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    /// Tiles per side
    pub grid_size: usize,
    /// Seconds on the clock when a game starts
    pub round_seconds: u32,
    /// Seconds added for each correct tap
    pub bonus_seconds: u32,
    /// Re-roll decoys that equal the target
    pub unique_tiles: bool,
    /// Fixed RNG seed for reproducible games
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioConfig {
    pub enabled: bool,
    pub asset_dir: String,
    pub backend: AudioBackendKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AudioBackendKind {
    /// Terminal bell
    Bell,
    /// Decoded playback on the default output device
    Rodio,
    /// No output
    Silent,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub theme: Theme,
    /// Event poll interval in milliseconds
    pub tick_rate_ms: u64,
    pub colors_enabled: bool,
}

/// Light/dark display mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Theme::Light => "Light Mode",
            Theme::Dark => "Dark Mode",
        }
    }
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            round_seconds: DEFAULT_ROUND_SECONDS,
            bonus_seconds: DEFAULT_BONUS_SECONDS,
            unique_tiles: true,
            seed: None,
        }
    }
}

impl GameSettings {
    /// Check values are playable
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if !(MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&self.grid_size) {
            return Err(ConfigError::Invalid(format!(
                "game.grid_size must be between {} and {}, got {}",
                MIN_GRID_SIZE, MAX_GRID_SIZE, self.grid_size
            )));
        }
        if self.round_seconds == 0 {
            return Err(ConfigError::Invalid(
                "game.round_seconds must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            asset_dir: "assets/audio".to_string(),
            backend: if cfg!(feature = "rodio-audio") {
                AudioBackendKind::Rodio
            } else {
                AudioBackendKind::Bell
            },
        }
    }
}

impl AudioConfig {
    /// Asset directory with `~` expanded
    pub fn asset_path(&self) -> PathBuf {
        PathBuf::from(shellexpand::tilde(&self.asset_dir).to_string())
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            tick_rate_ms: 50,
            colors_enabled: true,
        }
    }
}

impl Config {
    /// Load configuration from the default location
    ///
    /// A missing file at the default location is not an error; defaults are
    /// used. A file named by `COLORMATCH_CONFIG` must exist.
    pub fn load() -> Result<Self> {
        let explicit = std::env::var("COLORMATCH_CONFIG").is_ok();
        let config_path = resolve_config_path()?;

        let config = if !explicit && !config_path.exists() {
            tracing::debug!(path = %config_path.display(), "No config file, using defaults");
            Self::default()
        } else {
            Self::load_from_path(&config_path)?
        };

        Ok(config.with_env_overrides())
    }

    /// Load configuration from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadError)?;
        let config = Self::parse(&content)?;
        tracing::debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// Parse and validate TOML content
    pub fn parse(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content).map_err(ConfigError::ParseError)?;
        config.game.validate()?;
        if config.ui.tick_rate_ms == 0 {
            return Err(ConfigError::Invalid("ui.tick_rate_ms must be at least 1".to_string()).into());
        }
        Ok(config)
    }

    /// Apply `NO_COLOR`, `COLORMATCH_NO_COLOR` and `COLORMATCH_TICK_MS`
    pub fn with_env_overrides(mut self) -> Self {
        if std::env::var("NO_COLOR").is_ok() || std::env::var("COLORMATCH_NO_COLOR").is_ok() {
            self.ui.colors_enabled = false;
        }

        if let Some(tick_rate_ms) = std::env::var("COLORMATCH_TICK_MS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .filter(|ms| *ms > 0)
        {
            self.ui.tick_rate_ms = tick_rate_ms;
        }

        self
    }
}

/// Resolve the configuration file path following XDG Base Directory spec
pub fn resolve_config_path() -> Result<PathBuf> {
    if let Ok(path) = std::env::var("COLORMATCH_CONFIG") {
        return Ok(PathBuf::from(shellexpand::tilde(&path).to_string()));
    }

    let config_dir = dirs::config_dir()
        .ok_or_else(|| ConfigError::MissingField("config directory".to_string()))?;

    Ok(config_dir.join("colormatch").join("config.toml"))
}

/// Resolve the data directory path following XDG Base Directory spec
pub fn resolve_data_path() -> Result<PathBuf> {
    let data_dir = dirs::data_dir()
        .ok_or_else(|| ConfigError::MissingField("data directory".to_string()))?;

    Ok(data_dir.join("colormatch"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.game.grid_size, 4);
        assert_eq!(config.game.round_seconds, 30);
        assert_eq!(config.game.bonus_seconds, 1);
        assert!(config.game.unique_tiles);
        assert_eq!(config.game.seed, None);
        assert_eq!(config.ui.theme, Theme::Light);
        assert!(config.audio.enabled);
    }

    #[test]
    fn test_empty_file_parses_to_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_sections() {
        let config = Config::parse(
            r#"
[game]
grid_size = 5
seed = 42

[ui]
theme = "dark"
"#,
        )
        .unwrap();

        assert_eq!(config.game.grid_size, 5);
        assert_eq!(config.game.seed, Some(42));
        assert_eq!(config.game.round_seconds, 30);
        assert_eq!(config.ui.theme, Theme::Dark);
        assert_eq!(config.ui.tick_rate_ms, 50);
    }

    #[test]
    fn test_audio_section() {
        let config = Config::parse(
            r#"
[audio]
enabled = false
asset_dir = "/opt/colormatch/sounds"
backend = "silent"
"#,
        )
        .unwrap();

        assert!(!config.audio.enabled);
        assert_eq!(config.audio.backend, AudioBackendKind::Silent);
        assert_eq!(config.audio.asset_path(), PathBuf::from("/opt/colormatch/sounds"));
    }

    #[test]
    fn test_rejects_grid_size_out_of_range() {
        let result = Config::parse("[game]\ngrid_size = 1\n");
        assert!(matches!(
            result,
            Err(crate::ColorMatchError::Config(ConfigError::Invalid(_)))
        ));

        assert!(Config::parse("[game]\ngrid_size = 9\n").is_err());
    }

    #[test]
    fn test_rejects_zero_round_seconds() {
        assert!(Config::parse("[game]\nround_seconds = 0\n").is_err());
    }

    #[test]
    fn test_rejects_malformed_toml() {
        let result = Config::parse("[game\ngrid_size = ");
        assert!(matches!(
            result,
            Err(crate::ColorMatchError::Config(ConfigError::ParseError(_)))
        ));
    }

    #[test]
    fn test_load_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[game]\nround_seconds = 60\nunique_tiles = false").unwrap();

        let config = Config::load_from_path(file.path()).unwrap();
        assert_eq!(config.game.round_seconds, 60);
        assert!(!config.game.unique_tiles);
    }

    #[test]
    fn test_load_from_missing_path_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = Config::load_from_path(&dir.path().join("nope.toml"));
        assert!(matches!(
            result,
            Err(crate::ColorMatchError::Config(ConfigError::ReadError(_)))
        ));
    }

    #[test]
    #[serial]
    fn test_load_uses_env_config_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[game]\ngrid_size = 6").unwrap();

        std::env::set_var("COLORMATCH_CONFIG", file.path());
        let config = Config::load();
        std::env::remove_var("COLORMATCH_CONFIG");

        assert_eq!(config.unwrap().game.grid_size, 6);
    }

    #[test]
    #[serial]
    fn test_explicit_missing_config_is_error() {
        let dir = tempfile::tempdir().unwrap();
        std::env::set_var("COLORMATCH_CONFIG", dir.path().join("missing.toml"));
        let config = Config::load();
        std::env::remove_var("COLORMATCH_CONFIG");

        assert!(config.is_err());
    }

    #[test]
    #[serial]
    fn test_no_color_env_disables_colors() {
        std::env::set_var("COLORMATCH_NO_COLOR", "1");
        let config = Config::default().with_env_overrides();
        std::env::remove_var("COLORMATCH_NO_COLOR");

        assert!(!config.ui.colors_enabled);
    }

    #[test]
    #[serial]
    fn test_tick_rate_env_override() {
        std::env::set_var("COLORMATCH_TICK_MS", "250");
        let config = Config::default().with_env_overrides();
        std::env::remove_var("COLORMATCH_TICK_MS");
        assert_eq!(config.ui.tick_rate_ms, 250);

        // Zero and garbage are ignored
        std::env::set_var("COLORMATCH_TICK_MS", "0");
        let config = Config::default().with_env_overrides();
        std::env::remove_var("COLORMATCH_TICK_MS");
        assert_eq!(config.ui.tick_rate_ms, 50);
    }

    #[test]
    fn test_theme_toggle() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Dark.label(), "Dark Mode");
    }
}
