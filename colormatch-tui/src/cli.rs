//! Command line arguments

use std::path::PathBuf;

use clap::Parser;
use libcolormatch::config::{resolve_data_path, AudioBackendKind, MAX_GRID_SIZE, MIN_GRID_SIZE};
use libcolormatch::logging::{config_from_env, LogTarget, LoggingConfig};
use libcolormatch::{Config, Theme};

use crate::error::{Result, TuiError};

/// Log file name inside the data directory
pub const LOG_FILE_NAME: &str = "colormatch.log";

#[derive(Parser, Debug)]
#[command(name = "colormatch")]
#[command(version, about = "Tap the tile that matches the target color before time runs out")]
#[command(long_about = r#"Color Match Mania - a timed color-matching puzzle for the terminal.

A target color is shown above a grid of tiles. Select the tile with the same
color and press Enter (or click it with mouse capture on). A correct tap scores
a point and adds a second to the clock; a wrong tap costs a point.

KEYS:
    Enter / s   Start game (start screen)
    t           Toggle light/dark mode (start screen)
    Arrows/hjkl Move selection
    Enter/Space Tap selected tile
    Enter / r   Restart (game over screen)
    m           Toggle mouse capture
    F1          Help
    q           Quit

CONFIGURATION:
    Settings are read from $COLORMATCH_CONFIG or
    <config dir>/colormatch/config.toml. Flags override the file.

LOGGING:
    Logs go to <data dir>/colormatch/colormatch.log unless --log-file or
    --no-log is given. COLORMATCH_LOG_FORMAT and COLORMATCH_LOG_LEVEL set
    the defaults; RUST_LOG takes precedence over both.
"#)]
pub struct Args {
    /// Config file path
    #[arg(short, long, value_name = "PATH", env = "COLORMATCH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Tiles per side
    #[arg(short, long, value_name = "N")]
    pub grid_size: Option<usize>,

    /// Seconds on the clock at the start of a game
    #[arg(short, long, value_name = "SECONDS")]
    pub seconds: Option<u32>,

    /// Seed the color generator for a reproducible game
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,

    /// Allow decoy tiles to repeat the target color
    #[arg(long)]
    pub allow_duplicates: bool,

    /// Start in dark mode
    #[arg(long)]
    pub dark: bool,

    /// Disable sound
    #[arg(long)]
    pub silent: bool,

    /// Directory holding right.mp3 and wrong.mp3
    #[arg(long, value_name = "DIR")]
    pub assets: Option<String>,

    /// Log output format (text, json, pretty)
    #[arg(long, value_name = "FORMAT")]
    pub log_format: Option<String>,

    /// Log file (defaults to colormatch.log in the data directory)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Discard logs
    #[arg(long, conflicts_with = "log_file")]
    pub no_log: bool,

    /// Debug-level logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Where logs go; the terminal itself is never an option
    pub fn log_target(&self) -> Result<LogTarget> {
        if self.no_log {
            return Ok(LogTarget::Discard);
        }
        match &self.log_file {
            Some(path) => Ok(LogTarget::File(path.clone())),
            None => Ok(LogTarget::File(resolve_data_path()?.join(LOG_FILE_NAME))),
        }
    }

    /// Environment defaults with flags on top
    pub fn logging_config(&self) -> Result<LoggingConfig> {
        let mut config = config_from_env();
        if let Some(format) = &self.log_format {
            config.format = format.parse().map_err(TuiError::Arguments)?;
        }
        config.verbose = self.verbose;

        Ok(config.with_target(self.log_target()?))
    }

    /// Apply flags on top of a loaded config
    pub fn apply(&self, mut config: Config) -> Result<Config> {
        if let Some(grid_size) = self.grid_size {
            if !(MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&grid_size) {
                return Err(TuiError::Arguments(format!(
                    "--grid-size must be between {} and {}",
                    MIN_GRID_SIZE, MAX_GRID_SIZE
                )));
            }
            config.game.grid_size = grid_size;
        }

        if let Some(seconds) = self.seconds {
            if seconds == 0 {
                return Err(TuiError::Arguments("--seconds must be at least 1".to_string()));
            }
            config.game.round_seconds = seconds;
        }

        if self.seed.is_some() {
            config.game.seed = self.seed;
        }
        if self.allow_duplicates {
            config.game.unique_tiles = false;
        }
        if self.dark {
            config.ui.theme = Theme::Dark;
        }
        if self.silent {
            config.audio.enabled = false;
            config.audio.backend = AudioBackendKind::Silent;
        }
        if let Some(assets) = &self.assets {
            config.audio.asset_dir = assets.clone();
        }

        Ok(config)
    }
}
