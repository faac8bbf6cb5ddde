//! Application state
//!
//! Single state value for the whole app. All state transitions happen
//! through the reducer (see `reducer.rs`).

use libcolormatch::config::UiConfig;
use libcolormatch::{Config, GameController, GameState, SoundClip, TapOutcome, Theme};
use ratatui::layout::Rect;

use super::actions::Route;

/// Root application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Should the application quit?
    pub should_quit: bool,

    /// Current route (the shell hosts a single screen)
    pub route: Route,

    /// Mouse capture enabled?
    pub mouse_enabled: bool,

    /// Help overlay visible?
    pub help_visible: bool,

    /// Light/dark display mode
    pub theme: Theme,

    /// Game rules, clock, score and grid
    pub game: GameController,

    /// Selected tile (row-major index)
    pub selected: usize,

    /// Result of the most recent tap in this game
    pub last_outcome: Option<TapOutcome>,

    /// Feedback sound the event loop should play next
    pub pending_sound: Option<SoundClip>,

    /// Last known terminal area, for mouse hit-testing
    pub viewport: Rect,

    /// UI configuration
    pub config: UiConfig,
}

impl Default for AppState {
    fn default() -> Self {
        Self::from_config(&Config::default().with_env_overrides())
    }
}

impl AppState {
    /// Create new application state with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &Config) -> Self {
        Self {
            should_quit: false,
            route: Route::Game,
            mouse_enabled: false,
            help_visible: false,
            theme: config.ui.theme,
            game: GameController::new(config.game.clone()),
            selected: 0,
            last_outcome: None,
            pending_sound: None,
            viewport: Rect::default(),
            config: config.ui.clone(),
        }
    }

    /// State around an existing controller (used by tests for seeded games)
    pub fn with_game(game: GameController) -> Self {
        Self {
            game,
            ..Self::default()
        }
    }

    pub fn game_state(&self) -> GameState {
        self.game.state()
    }

    /// Tiles per side of the current grid
    pub fn grid_size(&self) -> usize {
        self.game.grid().size()
    }
}
