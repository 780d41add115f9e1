//! Terminal presentation: full-frame layout and panel dispatch.

mod inventory_panel;
mod market_panel;
mod stats_panel;

use crate::game_state::GameState;
use crate::input::UiState;
use crate::messages::MessageArea;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draws the whole game screen. Called once per pass of the event loop.
pub fn draw_ui(frame: &mut Frame, state: &GameState, ui: &UiState, messages: &MessageArea) {
    let size = frame.size();

    // Split vertically: stats bar, panels, feedback message, key hints
    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Stats bar
            Constraint::Min(8),    // Market + stock panels
            Constraint::Length(3), // Feedback message
            Constraint::Length(3), // Key hints
        ])
        .split(size);

    stats_panel::draw_stats_bar(frame, v_chunks[0], state);

    // Market on the left, owned stock on the right
    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(v_chunks[1]);

    market_panel::draw_market_panel(frame, panels[0], ui);
    inventory_panel::draw_inventory_panel(frame, panels[1], state, ui);

    draw_message_area(frame, v_chunks[2], messages);
    stats_panel::draw_footer(frame, v_chunks[3]);
}

/// Draws the transient feedback message, or an empty box when none is live.
fn draw_message_area(frame: &mut Frame, area: Rect, messages: &MessageArea) {
    let text = messages.text().unwrap_or("");

    let paragraph = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .block(Block::default().borders(Borders::ALL).title(" Messages "))
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}
