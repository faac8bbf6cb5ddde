//! colormatch - Color Match Mania in the terminal
//!
//! Tap the tile that matches the target color before the clock runs out.

use clap::Parser;
use colormatch_tui::{
    app::{effects, event::EventHandler, reduce, Action, AppState, Route},
    cli::Args,
    error::Result,
    terminal::{install_panic_hook, restore_terminal, set_mouse_capture, setup_terminal, Tui},
    ui,
};
use libcolormatch::{Config, CountdownTimer, FeedbackSounds};

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}

fn run(args: Args) -> Result<()> {
    // Logs never go to the terminal while the UI owns it
    args.logging_config()?.init()?;

    let config = match &args.config {
        Some(path) => Config::load_from_path(path)?.with_env_overrides(),
        None => Config::load()?,
    };
    let config = args.apply(config)?;

    install_panic_hook();
    let mut terminal = setup_terminal()?;

    let result = run_app(&mut terminal, &config);

    restore_terminal(terminal)?;

    result
}

fn run_app(terminal: &mut Tui, config: &Config) -> Result<()> {
    let mut state = AppState::from_config(config);
    tracing::info!(route = state.route.name(), "Mounted screen");

    // Sounds live as long as the screen; dropping them releases the clips
    let mut sounds = FeedbackSounds::from_config(&config.audio);

    // Runs only while a game is being played
    let mut countdown = CountdownTimer::every_second();

    let event_handler = EventHandler::new(state.config.tick_rate_ms);
    let mut mouse_capture = false;

    let size = terminal.size()?;
    state = reduce(state, Action::Resize(size.width, size.height));

    loop {
        terminal.draw(|frame| ui::render(frame, &state))?;

        let action: Action = event_handler.next()?.into();
        state = reduce(state, action);

        state = effects::apply(state, &mut countdown, &mut sounds)?;

        if state.mouse_enabled != mouse_capture {
            set_mouse_capture(terminal, state.mouse_enabled)?;
            mouse_capture = state.mouse_enabled;
        }

        if state.should_quit {
            break;
        }
    }

    tracing::info!(route = Route::Game.name(), score = state.game.score(), "Unmounted screen");

    Ok(())
}
