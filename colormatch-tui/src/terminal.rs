//! Raw-mode screen lifecycle
//!
//! The game owns the whole terminal while it runs: raw input, alternate
//! screen, hidden cursor and, when toggled on, mouse reports. Leaving undoes
//! all of it, on a panic as well as on a normal exit.

use std::io::{self, Stdout, Write};

use crossterm::{
    cursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::error::Result;

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Raw mode on the alternate screen with the cursor hidden
pub fn setup_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    execute!(io::stdout(), EnterAlternateScreen, cursor::Hide)?;

    Ok(Terminal::new(CrosstermBackend::new(io::stdout()))?)
}

pub fn set_mouse_capture(terminal: &mut Tui, enabled: bool) -> Result<()> {
    let out = terminal.backend_mut();
    if enabled {
        execute!(out, EnableMouseCapture)?;
    } else {
        execute!(out, DisableMouseCapture)?;
    }
    Ok(())
}

/// Hand the terminal back to the shell
pub fn restore_terminal(mut terminal: Tui) -> Result<()> {
    write_leave_sequence(terminal.backend_mut())?;
    disable_raw_mode()?;
    Ok(())
}

/// Leave the game screen before the panic message prints, so it stays
/// readable
pub fn install_panic_hook() {
    let previous = std::panic::take_hook();

    std::panic::set_hook(Box::new(move |info| {
        let _ = write_leave_sequence(&mut io::stdout());
        let _ = disable_raw_mode();
        previous(info);
    }));
}

fn write_leave_sequence<W: Write>(out: &mut W) -> io::Result<()> {
    execute!(out, DisableMouseCapture, LeaveAlternateScreen, cursor::Show)
}
