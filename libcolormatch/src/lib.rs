//! Color Match - a timed color-matching puzzle
//!
//! This library provides the game logic (state machine, countdown, grid
//! generation, scoring) and the audio feedback layer. Front-ends drive a
//! [`GameController`] and render its state.

pub mod audio;
pub mod color;
pub mod config;
pub mod error;
pub mod game;
pub mod grid;
pub mod logging;
pub mod timer;

// Re-export commonly used types
pub use audio::{AudioBackend, FeedbackSounds, SoundClip, SoundHandle};
pub use color::Rgb;
pub use config::{Config, GameSettings, Theme};
pub use error::{ColorMatchError, Result};
pub use game::{GameController, GameState, TapOutcome, TickOutcome};
pub use grid::ColorGrid;
pub use timer::CountdownTimer;
