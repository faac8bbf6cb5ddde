//! Terminal input
//!
//! One blocking poll per loop turn. Whatever arrives is narrowed to the
//! events the game reacts to; a quiet poll becomes a `Tick` so the loop still
//! redraws and drains the countdown.

use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent, KeyEventKind, MouseEvent};

use crate::app::Action;

#[derive(Debug, Clone)]
pub enum TuiEvent {
    Key(KeyEvent),
    /// Only delivered while mouse capture is on
    Mouse(MouseEvent),
    Resize(u16, u16),
    Tick,
}

impl From<TuiEvent> for Action {
    fn from(event: TuiEvent) -> Self {
        match event {
            TuiEvent::Key(key) => Action::Key(key),
            TuiEvent::Mouse(mouse) => Action::Mouse(mouse),
            TuiEvent::Resize(w, h) => Action::Resize(w, h),
            TuiEvent::Tick => Action::Tick,
        }
    }
}

impl From<Event> for TuiEvent {
    fn from(event: Event) -> Self {
        match event {
            // Key releases and repeats would tap twice
            Event::Key(key) if key.kind == KeyEventKind::Press => TuiEvent::Key(key),
            Event::Mouse(mouse) => TuiEvent::Mouse(mouse),
            Event::Resize(w, h) => TuiEvent::Resize(w, h),
            _ => TuiEvent::Tick,
        }
    }
}

pub struct EventHandler {
    poll_timeout: Duration,
}

impl EventHandler {
    pub fn new(tick_rate_ms: u64) -> Self {
        Self {
            poll_timeout: Duration::from_millis(tick_rate_ms),
        }
    }

    /// Wait up to one tick for input
    pub fn next(&self) -> std::io::Result<TuiEvent> {
        if !event::poll(self.poll_timeout)? {
            return Ok(TuiEvent::Tick);
        }
        Ok(event::read()?.into())
    }
}
