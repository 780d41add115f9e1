//! Market panel: the catalog of models available for purchase.

use crate::catalog;
use crate::currency::format_currency;
use crate::input::{PanelFocus, UiState};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draws the catalog listing. The focused row doubles as the purchase
/// trigger for Enter.
pub fn draw_market_panel(frame: &mut Frame, area: Rect, ui: &UiState) {
    let focused = ui.focus == PanelFocus::Market;
    let border_style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let block = Block::default()
        .title(" Market ")
        .borders(Borders::ALL)
        .border_style(border_style);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = Vec::new();
    for (row, model) in catalog::catalog().iter().enumerate() {
        let selected = focused && row == ui.market_index;
        let marker = if selected { ">" } else { " " };

        if selected {
            lines.push(Line::from(Span::styled(
                format!(
                    "{} [{}] {} - {} (profit up to {})",
                    marker,
                    model.id,
                    model.name,
                    format_currency(model.cost),
                    format_currency(model.max_profit)
                ),
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )));
        } else {
            lines.push(Line::from(vec![
                Span::raw(format!("{} [{}] ", marker, model.id)),
                Span::styled(
                    model.name.to_string(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!(" - {}", format_currency(model.cost)),
                    Style::default().fg(Color::Green),
                ),
                Span::styled(
                    format!(" (profit up to {})", format_currency(model.max_profit)),
                    Style::default().fg(Color::DarkGray),
                ),
            ]));
        }
    }

    frame.render_widget(Paragraph::new(lines), inner);
}
