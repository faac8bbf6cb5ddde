//! Reducer function for state transitions
//!
//! `(State, Action) -> State`
//!
//! The reducer performs no I/O. Sound playback and the countdown timer are
//! driven by the event loop, which reads `pending_sound` and the game state
//! after each reduction. Randomness comes from the RNG carried inside the
//! game controller, so the same state and action always give the same
//! result.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use libcolormatch::{GameState, SoundClip, TapOutcome};
use ratatui::layout::Rect;

use super::actions::{Action, Direction};
use super::state::AppState;
use crate::ui::layout;

/// Apply `action` to `state`
pub fn reduce(state: AppState, action: Action) -> AppState {
    match action {
        // === UI Events ===
        Action::Key(key) => handle_key(state, key),
        Action::Mouse(mouse) => handle_mouse(state, mouse),
        Action::Tick => state,
        Action::Resize(width, height) => AppState {
            viewport: Rect::new(0, 0, width, height),
            ..state
        },

        // === Shell ===
        Action::Quit => AppState {
            should_quit: true,
            ..state
        },

        Action::ToggleMouse => AppState {
            mouse_enabled: !state.mouse_enabled,
            ..state
        },

        Action::ShowHelp => AppState {
            help_visible: true,
            ..state
        },

        Action::HideHelp => AppState {
            help_visible: false,
            ..state
        },

        Action::ToggleTheme => AppState {
            theme: state.theme.toggled(),
            ..state
        },

        // === Game ===
        Action::StartGame => {
            let mut game = state.game;
            if !game.start() {
                return AppState { game, ..state };
            }
            AppState {
                game,
                selected: 0,
                last_outcome: None,
                pending_sound: None,
                ..state
            }
        }

        Action::CountdownTick => {
            let mut game = state.game;
            game.tick();
            AppState { game, ..state }
        }

        Action::MoveSelection(direction) => {
            if state.game_state() != GameState::Playing {
                return state;
            }
            let selected = move_selection(state.selected, state.grid_size(), direction);
            AppState { selected, ..state }
        }

        Action::TapSelected => {
            let index = state.selected;
            reduce(state, Action::TapTile(index))
        }

        Action::TapTile(index) => {
            let mut game = state.game;
            let outcome = game.tap_tile(index);
            let pending_sound = match outcome {
                TapOutcome::Correct => Some(SoundClip::Correct),
                TapOutcome::Incorrect => Some(SoundClip::Incorrect),
                TapOutcome::Ignored => return AppState { game, ..state },
            };
            AppState {
                game,
                selected: index,
                last_outcome: Some(outcome),
                pending_sound,
                ..state
            }
        }

        Action::RestartGame => {
            let mut game = state.game;
            game.restart();
            AppState { game, ..state }
        }
    }
}

/// Wrapping cursor movement on a `size` x `size` grid
pub fn move_selection(selected: usize, size: usize, direction: Direction) -> usize {
    if size == 0 {
        return 0;
    }
    let row = selected / size;
    let col = selected % size;
    let (row, col) = match direction {
        Direction::Up => ((row + size - 1) % size, col),
        Direction::Down => ((row + 1) % size, col),
        Direction::Left => (row, (col + size - 1) % size),
        Direction::Right => (row, (col + 1) % size),
    };
    row * size + col
}

/// Handle keyboard input
///
/// Maps keys to high-level actions. This is where keybindings are defined.
fn handle_key(state: AppState, key: KeyEvent) -> AppState {
    // Global keybindings (work everywhere)
    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), KeyModifiers::NONE) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
            return reduce(state, Action::Quit);
        }

        (KeyCode::F(1), _) => {
            let action = if state.help_visible { Action::HideHelp } else { Action::ShowHelp };
            return reduce(state, action);
        }

        (KeyCode::Char('m'), KeyModifiers::NONE) => {
            return reduce(state, Action::ToggleMouse);
        }

        (KeyCode::Esc, _) if state.help_visible => {
            return reduce(state, Action::HideHelp);
        }

        _ => {}
    }

    // The help overlay swallows everything else
    if state.help_visible {
        return state;
    }

    match state.game_state() {
        GameState::Start => handle_start_key(state, key),
        GameState::Playing => handle_playing_key(state, key),
        GameState::GameOver => handle_game_over_key(state, key),
    }
}

fn handle_start_key(state: AppState, key: KeyEvent) -> AppState {
    match key.code {
        KeyCode::Enter | KeyCode::Char('s') => reduce(state, Action::StartGame),
        KeyCode::Char('t') => reduce(state, Action::ToggleTheme),
        _ => state,
    }
}

fn handle_playing_key(state: AppState, key: KeyEvent) -> AppState {
    let direction = match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(Direction::Up),
        KeyCode::Down | KeyCode::Char('j') => Some(Direction::Down),
        KeyCode::Left | KeyCode::Char('h') => Some(Direction::Left),
        KeyCode::Right | KeyCode::Char('l') => Some(Direction::Right),
        _ => None,
    };
    if let Some(direction) = direction {
        return reduce(state, Action::MoveSelection(direction));
    }

    match key.code {
        KeyCode::Enter | KeyCode::Char(' ') => reduce(state, Action::TapSelected),
        _ => state,
    }
}

fn handle_game_over_key(state: AppState, key: KeyEvent) -> AppState {
    match key.code {
        KeyCode::Enter | KeyCode::Char('r') => reduce(state, Action::RestartGame),
        _ => state,
    }
}

/// Left click on a tile taps it
fn handle_mouse(state: AppState, mouse: MouseEvent) -> AppState {
    if !state.mouse_enabled
        || state.help_visible
        || state.game_state() != GameState::Playing
        || mouse.kind != MouseEventKind::Down(MouseButton::Left)
    {
        return state;
    }

    match layout::tile_at(state.viewport, state.grid_size(), mouse.column, mouse.row) {
        Some(index) => reduce(state, Action::TapTile(index)),
        None => state,
    }
}
