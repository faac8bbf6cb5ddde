//! Side effects
//!
//! The reducer only records what should happen: a pending feedback sound,
//! whether a game is running. After every reduce the event loop calls
//! [`apply`] to act on that against the real clock and audio device.

use libcolormatch::{CountdownTimer, FeedbackSounds};

use super::{reduce, Action, AppState};

/// Run the side effects for the current state
///
/// - Feeds countdown periods that elapsed since the last call into the
///   reducer as [`Action::CountdownTick`]
/// - Plays the pending feedback sound, if any
/// - Starts the countdown when a game is running and cancels it otherwise,
///   including when the app is about to quit
///
/// Fails only if the countdown worker cannot be spawned.
pub fn apply(
    mut state: AppState,
    countdown: &mut CountdownTimer,
    sounds: &mut FeedbackSounds,
) -> std::io::Result<AppState> {
    for _ in 0..countdown.elapsed_ticks() {
        state = reduce(state, Action::CountdownTick);
    }

    if let Some(clip) = state.pending_sound.take() {
        sounds.play(clip);
    }

    countdown.sync(state.game.is_playing() && !state.should_quit)?;

    Ok(state)
}
