//! Stats bar and key-hint footer.

use crate::currency::format_currency;
use crate::game_state::GameState;
use chrono::Utc;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draws the top bar with budget, sales tally, and session time.
pub fn draw_stats_bar(frame: &mut Frame, area: Rect, state: &GameState) {
    let session_seconds = (Utc::now().timestamp() - state.started_at).max(0);

    let line = Line::from(vec![
        Span::styled(
            format!("Budget: {}", format_currency(state.budget)),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" | "),
        Span::styled(
            format!("Sales: {}", state.sales_count),
            Style::default().fg(Color::Cyan),
        ),
        Span::raw(" | "),
        Span::styled(
            format!("Session: {}s", session_seconds),
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    let paragraph = Paragraph::new(vec![line])
        .block(Block::default().borders(Borders::ALL).title(" Showroom "))
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

/// Draws the footer with the key bindings.
pub fn draw_footer(frame: &mut Frame, area: Rect) {
    let hints = Line::from(vec![Span::styled(
        "[Up/Down] select | [Tab] switch panel | [Enter] buy/sell | [r] new offer | [n] restart | [q] quit",
        Style::default().fg(Color::DarkGray),
    )]);

    let paragraph = Paragraph::new(vec![hints])
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}
