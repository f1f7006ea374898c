//! Loading screen and overlay UI drawn on top of the scene.

use std::time::Duration;

use chrono::Local;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout},
    style::{Color, Style, Stylize},
    text::Line,
    widgets::{Block, Paragraph},
};
use yule_core::AnimationSpeed;

/// Braille spinner frames for the loading screen.
const SPINNER_FRAMES: &[char] = &['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

/// Milliseconds per spinner frame.
const SPINNER_INTERVAL_MS: u128 = 80;

/// Render the loading screen shown before the scene appears.
pub fn render_loading(frame: &mut Frame, booted: Duration) {
    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Fill(1),
    ])
    .split(frame.area());

    let idx = (booted.as_millis() / SPINNER_INTERVAL_MS) as usize % SPINNER_FRAMES.len();
    let spinner = Paragraph::new(SPINNER_FRAMES[idx].to_string())
        .style(Style::new().fg(Color::White))
        .alignment(Alignment::Center);
    frame.render_widget(spinner, chunks[1]);

    let message = Paragraph::new("Preparing Your Gift...")
        .style(Style::new().fg(Color::White).bold())
        .alignment(Alignment::Center);
    frame.render_widget(message, chunks[3]);
}

/// Render the date line, greeting banner and help footer over the scene.
pub fn render_overlay(
    frame: &mut Frame,
    greeting: &str,
    accent: Color,
    speed: AnimationSpeed,
    paused: bool,
) {
    let chunks = Layout::vertical([
        Constraint::Length(1), // top margin
        Constraint::Length(1), // date
        Constraint::Fill(1),   // scene shows through
        Constraint::Length(3), // greeting banner
        Constraint::Length(1), // help footer
    ])
    .split(frame.area());

    let date = Local::now().format("%m.%d").to_string();
    let date_line = Line::from(date)
        .style(Style::new().fg(Color::Rgb(200, 200, 220)))
        .centered();
    frame.render_widget(date_line, chunks[1]);

    // Center the banner box around the greeting text.
    let banner_width = (greeting.chars().count() as u16 + 6).min(chunks[3].width);
    let banner_area = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(banner_width),
        Constraint::Fill(1),
    ])
    .split(chunks[3])[1];

    let banner = Paragraph::new(greeting)
        .style(Style::new().fg(accent).bold())
        .alignment(Alignment::Center)
        .block(Block::bordered().border_style(Style::new().fg(Color::Rgb(90, 90, 120))));
    frame.render_widget(banner, banner_area);

    let mut help = vec![
        "q".bold().fg(accent),
        " quit  ".dark_gray(),
        "←/→".bold().fg(accent),
        " orbit  ".dark_gray(),
        "↑/↓".bold().fg(accent),
        " zoom  ".dark_gray(),
        "space".bold().fg(accent),
        " pause  ".dark_gray(),
        "a".bold().fg(accent),
        " auto-rotate  ".dark_gray(),
        "s".bold().fg(accent),
        " speed".dark_gray(),
    ];
    help.push(format!(" ({})", speed.label()).dark_gray());
    if paused {
        help.push("  paused".bold().fg(Color::Rgb(255, 120, 120)));
    }
    frame.render_widget(Line::from(help).centered(), chunks[4]);
}
