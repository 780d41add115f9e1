//! Market actions: purchasing catalog models into the session inventory.

use crate::catalog;
use crate::game_state::{GameState, OwnedBike};
use crate::inventory::roll_asking_price;
use rand::Rng;

/// Result of a purchase attempt. The input layer turns this into user
/// feedback; `UnknownModel` is deliberately silent at the call site.
#[derive(Debug, Clone, PartialEq)]
pub enum PurchaseOutcome {
    /// Budget debited and a new unit added to the inventory.
    Purchased { name: &'static str, cost: f64 },
    /// Budget too small; carries the missing amount.
    InsufficientBudget { name: &'static str, shortfall: f64 },
    /// The id matched nothing in the catalog. No state change.
    UnknownModel,
}

/// Attempts to buy the catalog model with the given id.
///
/// On success the unit's asking price is rolled immediately and stored on
/// the new `OwnedBike`, so the offer shown to the player does not drift
/// between frames. Either the purchase fully commits or the state is left
/// untouched.
pub fn purchase(state: &mut GameState, model_id: u32, rng: &mut impl Rng) -> PurchaseOutcome {
    let model = match catalog::find_by_id(model_id) {
        Some(model) => model,
        None => return PurchaseOutcome::UnknownModel,
    };

    if state.budget < model.cost {
        return PurchaseOutcome::InsufficientBudget {
            name: model.name,
            shortfall: model.cost - state.budget,
        };
    }

    state.budget -= model.cost;
    let unit_id = state.next_unit_id();
    let asking_price = roll_asking_price(model, rng);
    state.inventory.push(OwnedBike {
        unit_id,
        model: *model,
        asking_price,
    });

    PurchaseOutcome::Purchased {
        name: model.name,
        cost: model.cost,
    }
}
