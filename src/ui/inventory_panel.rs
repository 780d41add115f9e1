//! Inventory panel: the player's owned stock with asking prices.

use crate::currency::format_currency;
use crate::game_state::GameState;
use crate::input::{PanelFocus, UiState};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draws the owned-stock listing. The focused row's `(unit_id, asking
/// price)` pair is what Enter sells.
pub fn draw_inventory_panel(frame: &mut Frame, area: Rect, state: &GameState, ui: &UiState) {
    let focused = ui.focus == PanelFocus::Inventory;
    let border_style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let block = Block::default()
        .title(" Your Stock ")
        .borders(Borders::ALL)
        .border_style(border_style);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if state.inventory.is_empty() {
        let placeholder = Paragraph::new("No motorcycles in stock.")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(placeholder, inner);
        return;
    }

    let mut lines = Vec::new();
    for (row, bike) in state.inventory.iter().enumerate() {
        let selected = focused && row == ui.inventory_index;
        let marker = if selected { ">" } else { " " };

        if selected {
            lines.push(Line::from(Span::styled(
                format!(
                    "{} {} - paid {}, asking {}",
                    marker,
                    bike.model.name,
                    format_currency(bike.model.cost),
                    format_currency(bike.asking_price)
                ),
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )));
        } else {
            lines.push(Line::from(vec![
                Span::raw(format!("{} ", marker)),
                Span::styled(
                    bike.model.name.to_string(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(format!(" - paid {}", format_currency(bike.model.cost))),
                Span::styled(
                    format!(", asking {}", format_currency(bike.asking_price)),
                    Style::default().fg(Color::Green),
                ),
            ]));
        }
    }

    frame.render_widget(Paragraph::new(lines), inner);
}
