//! Main simulation runner. Plays sessions with a random buy/sell policy
//! through the real market and inventory actions.

use super::config::SimConfig;
use super::report::{SessionStats, SimReport};
use crate::catalog;
use crate::game_state::GameState;
use crate::inventory::{self, SaleOutcome};
use crate::market::{self, PurchaseOutcome};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Run the full simulation and return a report.
pub fn run_simulation(config: &SimConfig) -> SimReport {
    let mut all_sessions = Vec::with_capacity(config.num_sessions as usize);

    for session_idx in 0..config.num_sessions {
        // One RNG per session so seeded runs are reproducible
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed + session_idx as u64),
            None => StdRng::from_entropy(),
        };

        let stats = simulate_single_session(config, &mut rng);

        if config.verbosity >= 2 {
            println!(
                "Session {}/{} - Budget {:.2}, Sales {}, Stock {}, Rejected {}",
                session_idx + 1,
                config.num_sessions,
                stats.final_budget,
                stats.sales,
                stats.final_stock,
                stats.rejected_purchases
            );
        }

        all_sessions.push(stats);
    }

    SimReport::from_sessions(all_sessions)
}

/// Plays one session: each action is a purchase of a random catalog model,
/// or the sale of a random owned unit at its stored asking price. With an
/// empty inventory the only possible action is a purchase attempt.
fn simulate_single_session(config: &SimConfig, rng: &mut StdRng) -> SessionStats {
    let mut state = GameState::new(0);
    let mut stats = SessionStats::default();

    for _ in 0..config.actions_per_session {
        let buying = state.inventory.is_empty() || rng.gen_bool(0.5);

        if buying {
            let models = catalog::catalog();
            let model = &models[rng.gen_range(0..models.len())];
            match market::purchase(&mut state, model.id, rng) {
                PurchaseOutcome::Purchased { .. } => stats.purchases += 1,
                PurchaseOutcome::InsufficientBudget { .. } => stats.rejected_purchases += 1,
                PurchaseOutcome::UnknownModel => {}
            }
        } else {
            let index = rng.gen_range(0..state.inventory.len());
            let unit_id = state.inventory[index].unit_id;
            let price = state.inventory[index].asking_price;
            if let SaleOutcome::Sold { profit, .. } = inventory::sell(&mut state, unit_id, price) {
                stats.sales += 1;
                stats.total_profit += profit;
            }
        }
    }

    stats.final_budget = state.budget;
    stats.final_stock = state.inventory.len() as u32;
    stats
}
