//! Input handling for the game screen: panel focus, selection, and the
//! purchase/sale/refresh triggers.

use crate::catalog;
use crate::currency::format_currency;
use crate::game_state::GameState;
use crate::inventory::{self, SaleOutcome};
use crate::market::{self, PurchaseOutcome};
use crate::messages::MessageArea;
use crate::session;
use chrono::Utc;
use crossterm::event::{KeyCode, KeyEvent};
use rand::Rng;

/// Which panel currently has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelFocus {
    Market,
    Inventory,
}

/// Cursor state for the two panels.
pub struct UiState {
    pub focus: PanelFocus,
    pub market_index: usize,
    pub inventory_index: usize,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            focus: PanelFocus::Market,
            market_index: 0,
            inventory_index: 0,
        }
    }

    /// Keeps the inventory cursor on a valid row after removals.
    fn clamp_inventory_index(&mut self, len: usize) {
        self.inventory_index = self.inventory_index.min(len.saturating_sub(1));
    }
}

/// Result of handling one key event.
pub enum InputResult {
    /// Continue the game loop normally.
    Continue,
    /// Leave the game.
    Quit,
}

/// Dispatches a key press against the game state.
pub fn handle_game_key(
    key: KeyEvent,
    state: &mut GameState,
    ui: &mut UiState,
    messages: &mut MessageArea,
    rng: &mut impl Rng,
) -> InputResult {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return InputResult::Quit,
        KeyCode::Char('n') => {
            session::start(state, messages, Utc::now().timestamp());
            *ui = UiState::new();
        }
        KeyCode::Tab => {
            ui.focus = match ui.focus {
                PanelFocus::Market => PanelFocus::Inventory,
                PanelFocus::Inventory => PanelFocus::Market,
            };
        }
        KeyCode::Up => move_selection(ui, state, -1),
        KeyCode::Down => move_selection(ui, state, 1),
        KeyCode::Enter => match ui.focus {
            PanelFocus::Market => {
                if let Some(model) = catalog::catalog().get(ui.market_index) {
                    buy(state, model.id, messages, rng);
                }
            }
            PanelFocus::Inventory => {
                // Capture the trigger pair (unit id, asking price) from the
                // rendered selection before mutating anything.
                if let Some(bike) = state.inventory.get(ui.inventory_index) {
                    let unit_id = bike.unit_id;
                    let price = bike.asking_price;
                    sell(state, unit_id, price, ui, messages);
                }
            }
        },
        KeyCode::Char('r') => {
            if let Some(bike) = state.inventory.get(ui.inventory_index) {
                let unit_id = bike.unit_id;
                if let Some(price) = inventory::refresh_offer(state, unit_id, rng) {
                    if let Some(bike) = state.find_unit(unit_id) {
                        messages.show(format!(
                            "New offer for the {}: {}.",
                            bike.model.name,
                            format_currency(price)
                        ));
                    }
                }
            }
        }
        KeyCode::Char(c) if c.is_ascii_digit() => {
            // Quick-buy by catalog id, mirroring the numbers shown in the
            // market listing. Ids with no model fall through silently.
            if let Some(id) = c.to_digit(10) {
                buy(state, id, messages, rng);
            }
        }
        _ => {}
    }

    InputResult::Continue
}

fn buy(state: &mut GameState, model_id: u32, messages: &mut MessageArea, rng: &mut impl Rng) {
    match market::purchase(state, model_id, rng) {
        PurchaseOutcome::Purchased { name, cost } => {
            messages.show(format!(
                "You bought the {} for {}!",
                name,
                format_currency(cost)
            ));
        }
        PurchaseOutcome::InsufficientBudget { name, shortfall } => {
            messages.show(format!(
                "Not enough budget for the {}. You need another {}.",
                name,
                format_currency(shortfall)
            ));
        }
        // Stale ids fall out of the catalog lookup; nothing to report.
        PurchaseOutcome::UnknownModel => {}
    }
}

fn sell(
    state: &mut GameState,
    unit_id: u64,
    price: f64,
    ui: &mut UiState,
    messages: &mut MessageArea,
) {
    match inventory::sell(state, unit_id, price) {
        SaleOutcome::Sold {
            name,
            price,
            profit,
        } => {
            messages.show(format!(
                "The {} sold for {}! Profit: {}.",
                name,
                format_currency(price),
                format_currency(profit)
            ));
            ui.clamp_inventory_index(state.inventory.len());
        }
        SaleOutcome::UnknownUnit => {}
    }
}

fn move_selection(ui: &mut UiState, state: &GameState, delta: i64) {
    match ui.focus {
        PanelFocus::Market => {
            ui.market_index = step(ui.market_index, delta, catalog::catalog().len());
        }
        PanelFocus::Inventory => {
            ui.inventory_index = step(ui.inventory_index, delta, state.inventory.len());
        }
    }
}

fn step(index: usize, delta: i64, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    if delta < 0 {
        index.saturating_sub(1)
    } else {
        (index + 1).min(len - 1)
    }
}
