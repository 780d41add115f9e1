//! Market balance simulator for Monte Carlo analysis.
//!
//! Runs many headless sessions with a random buy/sell policy to analyze:
//! - How fast the budget grows under the 10% minimum markup
//! - How often purchases are rejected for lack of budget
//! - Average profit per sale across the catalog
//!
//! The simulator drives the same `market`/`inventory` actions as the
//! interactive game, so its numbers match real gameplay behavior.

mod config;
mod report;
mod runner;

pub use config::SimConfig;
pub use report::SimReport;
pub use runner::run_simulation;
