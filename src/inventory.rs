//! Inventory actions: asking-price rolls and selling owned units.

use crate::catalog::BikeModel;
use crate::constants::MIN_MARKUP_RATE;
use crate::game_state::GameState;
use rand::Rng;

/// Result of a sale attempt. `UnknownUnit` is deliberately silent at the
/// call site, mirroring the purchase path.
#[derive(Debug, Clone, PartialEq)]
pub enum SaleOutcome {
    /// Budget credited, unit removed, sales tally bumped.
    Sold {
        name: &'static str,
        price: f64,
        profit: f64,
    },
    /// No owned unit has that id. No state change.
    UnknownUnit,
}

/// Rolls an asking price for one unit of the given model.
///
/// The price is the guaranteed 10% markup plus a uniformly drawn whole
/// offset, landing inclusively between `cost * 1.1` and
/// `cost + max_profit`. A `max_profit` at or below the minimum markup
/// collapses the range to the markup itself.
pub fn roll_asking_price(model: &BikeModel, rng: &mut impl Rng) -> f64 {
    let min_price = model.cost + model.cost * MIN_MARKUP_RATE;
    let max_price = model.cost + model.max_profit;

    let span = (max_price - min_price).floor();
    if span < 1.0 {
        return min_price;
    }
    min_price + rng.gen_range(0..=span as u64) as f64
}

/// Re-rolls the stored asking price of one owned unit, giving the player a
/// fresh offer. Returns the new price, or `None` for an unknown id.
pub fn refresh_offer(state: &mut GameState, unit_id: u64, rng: &mut impl Rng) -> Option<f64> {
    let bike = state
        .inventory
        .iter_mut()
        .find(|bike| bike.unit_id == unit_id)?;
    bike.asking_price = roll_asking_price(&bike.model, rng);
    Some(bike.asking_price)
}

/// Sells the owned unit with the given id at `price`.
///
/// The standard flow passes the unit's stored asking price, but any price
/// is accepted; profit simply goes negative below cost. Either the sale
/// fully commits or the state is left untouched.
pub fn sell(state: &mut GameState, unit_id: u64, price: f64) -> SaleOutcome {
    let index = match state
        .inventory
        .iter()
        .position(|bike| bike.unit_id == unit_id)
    {
        Some(index) => index,
        None => return SaleOutcome::UnknownUnit,
    };

    let bike = state.inventory.remove(index);
    state.budget += price;
    state.sales_count += 1;

    SaleOutcome::Sold {
        name: bike.model.name,
        price,
        profit: price - bike.model.cost,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use crate::game_state::OwnedBike;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn state_with_unit(model_id: u32, asking_price: f64) -> (GameState, u64) {
        let mut state = GameState::new(0);
        let unit_id = state.next_unit_id();
        state.inventory.push(OwnedBike {
            unit_id,
            model: *catalog::find_by_id(model_id).unwrap(),
            asking_price,
        });
        (state, unit_id)
    }

    #[test]
    fn test_asking_price_stays_in_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);

        for model in catalog::catalog() {
            let min_price = model.cost + model.cost * MIN_MARKUP_RATE;
            let max_price = model.cost + model.max_profit;
            for _ in 0..1_000 {
                let price = roll_asking_price(model, &mut rng);
                assert!(
                    price >= min_price && price <= max_price,
                    "{}: {} outside [{}, {}]",
                    model.name,
                    price,
                    min_price,
                    max_price
                );
            }
        }
    }

    #[test]
    fn test_asking_price_covers_both_ends_of_the_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let model = catalog::find_by_id(2).unwrap();
        let min_price = model.cost + model.cost * MIN_MARKUP_RATE;
        let max_price = model.cost + model.max_profit;

        let mut saw_min = false;
        let mut saw_max = false;
        for _ in 0..50_000 {
            let price = roll_asking_price(model, &mut rng);
            saw_min |= price == min_price;
            saw_max |= price == max_price;
        }
        assert!(saw_min, "minimum price never drawn");
        assert!(saw_max, "maximum price never drawn");
    }

    #[test]
    fn test_asking_price_collapsed_range_returns_markup() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let model = BikeModel {
            id: 90,
            name: "Test Bike",
            cost: 10_000.0,
            max_profit: 500.0,
        };

        // max_profit below the 10% markup: only the markup price is valid
        for _ in 0..100 {
            assert_eq!(roll_asking_price(&model, &mut rng), 11_000.0);
        }
    }

    #[test]
    fn test_sell_credits_budget_and_removes_unit() {
        let (mut state, unit_id) = state_with_unit(1, 60_000.0);
        let budget_before = state.budget;

        let outcome = sell(&mut state, unit_id, 60_000.0);

        assert_eq!(
            outcome,
            SaleOutcome::Sold {
                name: "Yamaha XJ6",
                price: 60_000.0,
                profit: 10_000.0,
            }
        );
        assert_eq!(state.budget, budget_before + 60_000.0);
        assert_eq!(state.sales_count, 1);
        assert!(state.inventory.is_empty());
    }

    #[test]
    fn test_sell_removes_only_the_named_unit() {
        let mut state = GameState::new(0);
        for _ in 0..3 {
            let unit_id = state.next_unit_id();
            state.inventory.push(OwnedBike {
                unit_id,
                model: *catalog::find_by_id(2).unwrap(),
                asking_price: 17_000.0,
            });
        }
        let target = state.inventory[1].unit_id;

        sell(&mut state, target, 17_000.0);

        assert_eq!(state.inventory.len(), 2);
        assert!(state.inventory.iter().all(|bike| bike.unit_id != target));
    }

    #[test]
    fn test_sell_unknown_unit_is_a_no_op() {
        let (mut state, unit_id) = state_with_unit(2, 17_000.0);
        let budget_before = state.budget;

        let outcome = sell(&mut state, unit_id + 99, 17_000.0);

        assert_eq!(outcome, SaleOutcome::UnknownUnit);
        assert_eq!(state.budget, budget_before);
        assert_eq!(state.sales_count, 0);
        assert_eq!(state.inventory.len(), 1);
    }

    #[test]
    fn test_sell_below_cost_reports_negative_profit() {
        let (mut state, unit_id) = state_with_unit(2, 17_000.0);

        let outcome = sell(&mut state, unit_id, 10_000.0);

        assert_eq!(
            outcome,
            SaleOutcome::Sold {
                name: "Honda Biz",
                price: 10_000.0,
                profit: -5_000.0,
            }
        );
    }

    #[test]
    fn test_refresh_offer_rerolls_within_bounds() {
        let (mut state, unit_id) = state_with_unit(3, 70_000.0);
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let model = *catalog::find_by_id(3).unwrap();

        let price = refresh_offer(&mut state, unit_id, &mut rng).unwrap();

        assert!(price >= model.cost + model.cost * MIN_MARKUP_RATE);
        assert!(price <= model.cost + model.max_profit);
        assert_eq!(state.inventory[0].asking_price, price);
    }

    #[test]
    fn test_refresh_offer_unknown_unit() {
        let (mut state, unit_id) = state_with_unit(3, 70_000.0);
        let mut rng = ChaCha8Rng::seed_from_u64(11);

        assert!(refresh_offer(&mut state, unit_id + 1, &mut rng).is_none());
        assert_eq!(state.inventory[0].asking_price, 70_000.0);
    }
}
