//! Application module
//!
//! Contains the core application architecture:
//! - Actions: What can happen
//! - State: What is true right now
//! - Reducer: (State, Action) -> State
//! - Event: Terminal events feeding the action stream
//! - Effects: Clock and audio driven by the state after each action

pub mod actions;
pub mod effects;
pub mod event;
pub mod reducer;
pub mod state;

// Re-export commonly used types
pub use actions::{Action, Direction, Route};
pub use reducer::reduce;
pub use state::AppState;
