//! Session state: budget, sales tally, and the owned-bike inventory.

use crate::catalog::BikeModel;
use crate::constants::STARTING_BUDGET;

/// One motorcycle in the player's stock.
///
/// Several units of the same model may be owned at once; `unit_id` tells
/// them apart. The asking price is rolled when the unit is acquired and
/// stays fixed until the player refreshes the offer.
#[derive(Debug, Clone, PartialEq)]
pub struct OwnedBike {
    pub unit_id: u64,
    pub model: BikeModel,
    pub asking_price: f64,
}

/// Main game state for one showroom session.
///
/// Mutated only through the market and inventory actions; the UI renders
/// from a shared borrow.
#[derive(Debug, Clone)]
pub struct GameState {
    pub budget: f64,
    pub sales_count: u32,
    /// Owned units in acquisition order.
    pub inventory: Vec<OwnedBike>,
    /// Unix timestamp of the session start, for the session-time display.
    pub started_at: i64,
    // Monotonic counter backing unit identity. Never reused within a
    // session, so removals cannot cause id collisions.
    unit_seq: u64,
}

impl GameState {
    /// Creates a fresh session state with the starting budget.
    pub fn new(current_time: i64) -> Self {
        Self {
            budget: STARTING_BUDGET,
            sales_count: 0,
            inventory: Vec::new(),
            started_at: current_time,
            unit_seq: 0,
        }
    }

    /// Unconditionally restores the starting state, discarding any stock.
    pub fn reset(&mut self, current_time: i64) {
        *self = Self::new(current_time);
    }

    /// Hands out the next unit id.
    pub fn next_unit_id(&mut self) -> u64 {
        let id = self.unit_seq;
        self.unit_seq += 1;
        id
    }

    /// Looks up an owned unit by id.
    pub fn find_unit(&self, unit_id: u64) -> Option<&OwnedBike> {
        self.inventory.iter().find(|bike| bike.unit_id == unit_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    #[test]
    fn test_new_game_state() {
        let state = GameState::new(1_234_567_890);

        assert_eq!(state.budget, STARTING_BUDGET);
        assert_eq!(state.sales_count, 0);
        assert!(state.inventory.is_empty());
        assert_eq!(state.started_at, 1_234_567_890);
    }

    #[test]
    fn test_unit_ids_are_monotonic() {
        let mut state = GameState::new(0);
        let first = state.next_unit_id();
        let second = state.next_unit_id();
        let third = state.next_unit_id();

        assert_eq!(first, 0);
        assert_eq!(second, 1);
        assert_eq!(third, 2);
    }

    #[test]
    fn test_reset_restores_starting_state() {
        let mut state = GameState::new(100);
        state.budget = 1.0;
        state.sales_count = 7;
        let unit_id = state.next_unit_id();
        state.inventory.push(OwnedBike {
            unit_id,
            model: *catalog::find_by_id(2).unwrap(),
            asking_price: 17_000.0,
        });

        state.reset(200);

        assert_eq!(state.budget, STARTING_BUDGET);
        assert_eq!(state.sales_count, 0);
        assert!(state.inventory.is_empty());
        assert_eq!(state.started_at, 200);
        assert_eq!(state.next_unit_id(), 0);
    }

    #[test]
    fn test_find_unit() {
        let mut state = GameState::new(0);
        let unit_id = state.next_unit_id();
        state.inventory.push(OwnedBike {
            unit_id,
            model: *catalog::find_by_id(1).unwrap(),
            asking_price: 60_000.0,
        });

        assert_eq!(state.find_unit(unit_id).unwrap().model.name, "Yamaha XJ6");
        assert!(state.find_unit(unit_id + 1).is_none());
    }
}
