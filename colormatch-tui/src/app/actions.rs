//! Actions for the reducer pattern
//!
//! All state transitions are triggered by actions. This module defines
//! all possible actions that can modify application state.

use crossterm::event::{KeyEvent, MouseEvent};

/// Actions that trigger state transitions
///
/// Actions describe what should happen; the reducer (see `reducer.rs`)
/// applies them to state.
#[derive(Debug, Clone)]
pub enum Action {
    // === UI Events ===
    /// Keyboard input event
    Key(KeyEvent),

    /// Mouse input event (when capture is enabled)
    Mouse(MouseEvent),

    /// Event poll timed out; nothing happened
    Tick,

    /// Terminal resize event
    Resize(u16, u16),

    // === Shell ===
    /// Quit the application
    Quit,

    /// Toggle mouse capture on/off
    ToggleMouse,

    /// Show help overlay
    ShowHelp,

    /// Hide help overlay
    HideHelp,

    /// Switch between light and dark mode
    ToggleTheme,

    // === Game ===
    /// Start a game from the start screen
    StartGame,

    /// One second of the game clock elapsed
    CountdownTick,

    /// Move the tile selection cursor
    MoveSelection(Direction),

    /// Tap the tile under the selection cursor
    TapSelected,

    /// Tap a tile by row-major index
    TapTile(usize),

    /// Return from game over to the start screen
    RestartGame,
}

/// Route hosted by the navigation shell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// The game screen
    Game,
}

impl Route {
    pub fn name(self) -> &'static str {
        match self {
            Route::Game => "Game",
        }
    }
}

/// Cursor movement on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}
