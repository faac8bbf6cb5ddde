//! Game state machine
//!
//! A game cycles through `Start -> Playing -> GameOver -> Start`. Every
//! operation that does not apply to the current state is ignored and leaves
//! the controller unchanged.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::color::Rgb;
use crate::config::GameSettings;
use crate::grid::ColorGrid;

/// Which screen the game is on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Start,
    Playing,
    GameOver,
}

/// Result of a tile tap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapOutcome {
    /// Tapped the target color; score and clock went up, new round dealt
    Correct,
    /// Tapped a decoy; score went down
    Incorrect,
    /// Not playing, or no such tile
    Ignored,
}

/// Result of a one-second countdown tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Clock still running with this many seconds left
    Running(u32),
    /// Clock hit zero on this tick; the game is over
    Expired,
    /// Not playing
    Ignored,
}

/// Owns all game state and the transitions between states
#[derive(Debug, Clone)]
pub struct GameController {
    settings: GameSettings,
    state: GameState,
    target: Rgb,
    grid: ColorGrid,
    score: i32,
    time_left: u32,
    rng: StdRng,
}

impl GameController {
    /// New controller in `Start`, seeded from `settings.seed` or entropy
    pub fn new(settings: GameSettings) -> Self {
        let rng = match settings.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(settings, rng)
    }

    pub fn with_rng(settings: GameSettings, mut rng: StdRng) -> Self {
        let target = Rgb::random(&mut rng);
        let time_left = settings.round_seconds;
        Self {
            settings,
            state: GameState::Start,
            target,
            grid: ColorGrid::empty(),
            score: 0,
            time_left,
            rng,
        }
    }

    /// `Start -> Playing`: fresh target, zero score, full clock, new grid
    ///
    /// Returns false (and changes nothing) outside `Start`.
    pub fn start(&mut self) -> bool {
        if self.state != GameState::Start {
            return false;
        }

        self.score = 0;
        self.time_left = self.settings.round_seconds;
        self.target = Rgb::random(&mut self.rng);
        self.state = GameState::Playing;
        self.deal();

        tracing::info!(
            target_color = %self.target,
            time_left = self.time_left,
            grid_size = self.settings.grid_size,
            "Game started"
        );
        true
    }

    /// One second of countdown
    pub fn tick(&mut self) -> TickOutcome {
        if self.state != GameState::Playing {
            return TickOutcome::Ignored;
        }

        if self.time_left <= 1 {
            self.time_left = 0;
            self.state = GameState::GameOver;
            tracing::info!(score = self.score, "Time is up");
            return TickOutcome::Expired;
        }

        self.time_left -= 1;
        TickOutcome::Running(self.time_left)
    }

    /// Tap a tile showing `color`
    pub fn tap_color(&mut self, color: Rgb) -> TapOutcome {
        if self.state != GameState::Playing {
            return TapOutcome::Ignored;
        }

        if color == self.target {
            self.score += 1;
            self.time_left = self.time_left.saturating_add(self.settings.bonus_seconds);
            self.target = Rgb::random(&mut self.rng);
            self.deal();
            tracing::debug!(score = self.score, time_left = self.time_left, "Correct tap");
            TapOutcome::Correct
        } else {
            self.score -= 1;
            tracing::debug!(score = self.score, tapped = %color, "Incorrect tap");
            TapOutcome::Incorrect
        }
    }

    /// Tap the tile at row-major `index`
    pub fn tap_tile(&mut self, index: usize) -> TapOutcome {
        if self.state != GameState::Playing {
            return TapOutcome::Ignored;
        }
        match self.grid.color_at(index) {
            Some(color) => self.tap_color(color),
            None => TapOutcome::Ignored,
        }
    }

    /// `GameOver -> Start`
    ///
    /// Returns false (and changes nothing) outside `GameOver`.
    pub fn restart(&mut self) -> bool {
        if self.state != GameState::GameOver {
            return false;
        }
        self.state = GameState::Start;
        self.grid = ColorGrid::empty();
        true
    }

    fn deal(&mut self) {
        self.grid = ColorGrid::generate(
            self.settings.grid_size,
            self.target,
            self.settings.unique_tiles,
            &mut self.rng,
        );
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn time_left(&self) -> u32 {
        self.time_left
    }

    pub fn target(&self) -> Rgb {
        self.target
    }

    pub fn grid(&self) -> &ColorGrid {
        &self.grid
    }

    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    pub fn is_playing(&self) -> bool {
        self.state == GameState::Playing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(seed: u64) -> GameController {
        GameController::with_rng(GameSettings::default(), StdRng::seed_from_u64(seed))
    }

    fn decoy_index(game: &GameController) -> usize {
        let target = game.target();
        game.grid()
            .cells()
            .iter()
            .position(|c| *c != target)
            .unwrap()
    }

    #[test]
    fn test_starts_in_start_state() {
        let game = seeded(1);
        assert_eq!(game.state(), GameState::Start);
        assert!(game.grid().is_empty());
    }

    #[test]
    fn test_start_resets_score_and_clock() {
        let mut game = seeded(2);
        assert!(game.start());
        assert_eq!(game.state(), GameState::Playing);
        assert_eq!(game.score(), 0);
        assert_eq!(game.time_left(), 30);
        assert_eq!(game.grid().len(), 16);
        assert_eq!(game.grid().count_of(game.target()), 1);
    }

    #[test]
    fn test_start_only_from_start() {
        let mut game = seeded(3);
        game.start();
        game.tick();
        assert!(!game.start());
        assert_eq!(game.time_left(), 29);
    }

    #[test]
    fn test_tick_decrements() {
        let mut game = seeded(4);
        game.start();
        assert_eq!(game.tick(), TickOutcome::Running(29));
        assert_eq!(game.tick(), TickOutcome::Running(28));
    }

    #[test]
    fn test_tick_ignored_outside_playing() {
        let mut game = seeded(5);
        assert_eq!(game.tick(), TickOutcome::Ignored);
        assert_eq!(game.time_left(), 30);
    }

    #[test]
    fn test_correct_tap() {
        let mut game = seeded(6);
        game.start();
        let old_target = game.target();
        let index = game.grid().index_of(old_target).unwrap();

        assert_eq!(game.tap_tile(index), TapOutcome::Correct);
        assert_eq!(game.score(), 1);
        assert_eq!(game.time_left(), 31);
        assert_eq!(game.grid().count_of(game.target()), 1);
    }

    #[test]
    fn test_incorrect_tap_has_no_floor() {
        let mut game = seeded(7);
        game.start();
        let target = game.target();

        for expected in 1..=5 {
            let index = decoy_index(&game);
            assert_eq!(game.tap_tile(index), TapOutcome::Incorrect);
            assert_eq!(game.score(), -expected);
        }
        assert_eq!(game.target(), target);
        assert_eq!(game.time_left(), 30);
    }

    #[test]
    fn test_tap_out_of_range_is_ignored() {
        let mut game = seeded(8);
        game.start();
        assert_eq!(game.tap_tile(16), TapOutcome::Ignored);
        assert_eq!(game.score(), 0);
    }

    #[test]
    fn test_restart_only_from_game_over() {
        let mut game = seeded(9);
        assert!(!game.restart());
        game.start();
        assert!(!game.restart());
        assert_eq!(game.state(), GameState::Playing);
    }

    #[test]
    fn test_bonus_seconds_setting() {
        let settings = GameSettings {
            bonus_seconds: 3,
            ..GameSettings::default()
        };
        let mut game = GameController::with_rng(settings, StdRng::seed_from_u64(10));
        game.start();
        let target = game.target();
        game.tap_color(target);
        assert_eq!(game.time_left(), 33);
    }

    #[test]
    fn test_same_seed_same_game() {
        let mut a = seeded(11);
        let mut b = seeded(11);
        a.start();
        b.start();
        assert_eq!(a.target(), b.target());
        assert_eq!(a.grid(), b.grid());
    }
}
