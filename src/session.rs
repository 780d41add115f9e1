//! Session lifecycle: resetting state and greeting the player.

use crate::game_state::GameState;
use crate::messages::MessageArea;

pub const WELCOME_MESSAGE: &str =
    "Welcome to the showroom! Spend your budget on motorcycles and flip them for a profit.";

/// Starts (or restarts) a session: wipes the state back to the starting
/// budget and shows the welcome message. The next draw-loop pass renders
/// the fresh state.
pub fn start(state: &mut GameState, messages: &mut MessageArea, now: i64) {
    state.reset(now);
    messages.show(WELCOME_MESSAGE);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use crate::constants::STARTING_BUDGET;
    use crate::game_state::OwnedBike;

    #[test]
    fn test_start_resets_state_and_greets() {
        let mut state = GameState::new(0);
        let mut messages = MessageArea::new();
        state.budget = 123.0;
        state.sales_count = 9;
        let unit_id = state.next_unit_id();
        state.inventory.push(OwnedBike {
            unit_id,
            model: *catalog::find_by_id(4).unwrap(),
            asking_price: 70_000.0,
        });

        start(&mut state, &mut messages, 42);

        assert_eq!(state.budget, STARTING_BUDGET);
        assert_eq!(state.sales_count, 0);
        assert!(state.inventory.is_empty());
        assert_eq!(state.started_at, 42);
        assert_eq!(messages.text(), Some(WELCOME_MESSAGE));
    }
}
