//! UI rendering
//!
//! Rendering functions draw state into terminal frames and never modify it.

pub mod layout;
pub mod theme;

use libcolormatch::{GameState, Rgb, TapOutcome};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::AppState;
use layout::{centered_fixed, centered_rect, grid_tiles, playing_layout};
use theme::{label_color, theme_icon, tile_color, Palette};

const TITLE: &str = "Color Match Mania";

/// Render the application UI
///
/// Main rendering entry point; the view depends only on the game state.
pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.size();
    let palette = Palette::for_theme(state.theme, state.config.colors_enabled);

    frame.render_widget(
        Block::default().style(Style::default().bg(palette.background).fg(palette.text)),
        area,
    );

    match state.game_state() {
        GameState::Start => render_start(frame, area, state, &palette),
        GameState::Playing => render_playing(frame, area, state, &palette),
        GameState::GameOver => render_game_over(frame, area, state, &palette),
    }

    if state.help_visible {
        render_help_overlay(frame, area, &palette);
    }
}

/// Start screen: title, start button, light/dark toggle
fn render_start(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let chunks = centered_column(area, 9);

    frame.render_widget(title(TITLE, palette), chunks[0]);
    frame.render_widget(button("Start Game", palette), centered_fixed(22, 3, chunks[2]));
    frame.render_widget(
        Paragraph::new(Span::styled("Press Enter to start", Style::default().fg(palette.hint)))
            .alignment(Alignment::Center),
        chunks[3],
    );

    let toggle = Line::from(vec![
        Span::styled(state.theme.label(), Style::default().fg(palette.text)),
        Span::raw("  "),
        Span::styled(
            format!("[t] {}", theme_icon(state.theme)),
            Style::default().fg(palette.accent).add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(Paragraph::new(toggle).alignment(Alignment::Center), chunks[5]);
}

/// Playing screen: target swatch, timer, score, grid
fn render_playing(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let regions = playing_layout(area);
    let game = &state.game;

    frame.render_widget(title(TITLE, palette), regions.title);
    frame.render_widget(
        Paragraph::new(Span::styled(
            "Match this color:",
            Style::default().fg(palette.text).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        regions.subtitle,
    );

    render_swatch(frame, centered_fixed(12, 4, regions.target), game.target(), state, palette);

    frame.render_widget(
        Paragraph::new(Span::styled(
            format!("Time Left: {} s", game.time_left()),
            Style::default().fg(palette.text).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        regions.timer,
    );

    let mut score = vec![Span::styled(
        format!("Score: {}", game.score()),
        Style::default().fg(palette.text).add_modifier(Modifier::BOLD),
    )];
    match state.last_outcome {
        Some(TapOutcome::Correct) => {
            score.push(Span::raw("   "));
            score.push(Span::styled("Correct! +1", Style::default().fg(palette.correct())));
        }
        Some(TapOutcome::Incorrect) => {
            score.push(Span::raw("   "));
            score.push(Span::styled("Wrong! -1", Style::default().fg(palette.incorrect())));
        }
        _ => {}
    }
    frame.render_widget(Paragraph::new(Line::from(score)).alignment(Alignment::Center), regions.score);

    let tiles = grid_tiles(regions.grid, game.grid().size());
    for (index, (rect, color)) in tiles.iter().zip(game.grid().cells()).enumerate() {
        render_tile(frame, *rect, *color, index == state.selected, state, palette);
    }

    let mouse = if state.mouse_enabled { "on" } else { "off" };
    frame.render_widget(
        Paragraph::new(Span::styled(
            format!("Arrows: Move | Enter: Tap | m: Mouse ({}) | F1: Help | q: Quit", mouse),
            Style::default().fg(palette.hint),
        ))
        .alignment(Alignment::Center),
        regions.hints,
    );
}

/// Game over screen: final score and restart button
fn render_game_over(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let chunks = centered_column(area, 9);

    frame.render_widget(title("Game Over", palette), chunks[0]);
    frame.render_widget(
        Paragraph::new(Span::styled(
            format!("Final Score: {}", state.game.score()),
            Style::default().fg(palette.text).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        chunks[1],
    );
    frame.render_widget(button("Restart Game", palette), centered_fixed(22, 3, chunks[2]));
    frame.render_widget(
        Paragraph::new(Span::styled("Press Enter to restart", Style::default().fg(palette.hint)))
            .alignment(Alignment::Center),
        chunks[3],
    );
}

fn render_swatch(frame: &mut Frame, area: Rect, color: Rgb, state: &AppState, palette: &Palette) {
    let label = if state.config.colors_enabled {
        String::new()
    } else {
        color.to_hex()
    };

    let swatch = Paragraph::new(Span::styled(label, Style::default().fg(label_color(color))))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(palette.tile_border)),
        )
        .style(Style::default().bg(tile_color(color)));

    frame.render_widget(swatch, area);
}

fn render_tile(
    frame: &mut Frame,
    area: Rect,
    color: Rgb,
    selected: bool,
    state: &AppState,
    palette: &Palette,
) {
    let mut label = String::new();
    if !state.config.colors_enabled {
        label.push_str(&color.to_hex());
    }
    if selected && (area.height < 3 || area.width < 3) {
        label = "◆".to_string();
    }

    let mut tile = Paragraph::new(Span::styled(label, Style::default().fg(label_color(color))))
        .alignment(Alignment::Center)
        .style(Style::default().bg(tile_color(color)));

    if area.height >= 3 && area.width >= 3 {
        let (border_type, border_style) = if selected {
            (
                BorderType::Thick,
                Style::default().fg(palette.accent).add_modifier(Modifier::BOLD),
            )
        } else {
            (BorderType::Rounded, Style::default().fg(palette.tile_border))
        };
        tile = tile.block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(border_type)
                .border_style(border_style),
        );
    }

    frame.render_widget(tile, area);
}

fn title<'a>(text: &'a str, palette: &Palette) -> Paragraph<'a> {
    Paragraph::new(Span::styled(
        text,
        Style::default().fg(palette.text).add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center)
}

fn button<'a>(text: &'a str, palette: &Palette) -> Paragraph<'a> {
    Paragraph::new(Span::styled(
        text,
        Style::default()
            .fg(palette.button_text)
            .add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(palette.button)),
    )
    .style(Style::default().bg(palette.button))
}

/// Rows for a centered menu: title, line, button (3), hint, gap, footer
fn centered_column(area: Rect, height: u16) -> std::rc::Rc<[Rect]> {
    let column = centered_fixed(area.width, height, area);
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(column)
}

/// Render help overlay
fn render_help_overlay(frame: &mut Frame, area: Rect, palette: &Palette) {
    let popup_area = centered_rect(60, 70, area);

    let help_text = vec![
        Line::from(Span::styled("Keyboard Shortcuts", Style::default().add_modifier(Modifier::BOLD))),
        Line::from(""),
        Line::from("Global:"),
        Line::from("  q          - Quit"),
        Line::from("  F1         - Toggle help"),
        Line::from("  m          - Toggle mouse"),
        Line::from(""),
        Line::from("Start screen:"),
        Line::from("  Enter / s  - Start game"),
        Line::from("  t          - Light/dark mode"),
        Line::from(""),
        Line::from("Playing:"),
        Line::from("  Arrows     - Move selection (hjkl too)"),
        Line::from("  Enter      - Tap selected tile"),
        Line::from("  Click      - Tap tile (mouse on)"),
        Line::from(""),
        Line::from("Game over:"),
        Line::from("  Enter / r  - Back to start"),
        Line::from(""),
        Line::from("Press Esc or F1 to close"),
    ];

    let help = Paragraph::new(help_text)
        .block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.accent)),
        )
        .style(Style::default().bg(palette.background).fg(palette.text))
        .wrap(Wrap { trim: false });

    frame.render_widget(Clear, popup_area);
    frame.render_widget(help, popup_area);
}
