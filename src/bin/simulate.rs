//! Market balance simulator CLI.
//!
//! Run Monte Carlo simulations of buy/sell sessions.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                    # Default: 1000 sessions of 50 actions
//!   cargo run --bin simulate -- -n 100 -a 20    # 100 sessions of 20 actions
//!   cargo run --bin simulate -- --seed 42       # Reproducible run

use showroom::simulator::{run_simulation, SimConfig};
use std::env;

fn main() {
    let args: Vec<String> = env::args().collect();
    let (config, json_output) = parse_args(&args);

    if !json_output {
        println!("╔═══════════════════════════════════════════════════════════════╗");
        println!("║              SHOWROOM MARKET SIMULATOR                        ║");
        println!("╚═══════════════════════════════════════════════════════════════╝");
        println!();
        println!("Configuration:");
        println!("  Sessions:       {}", config.num_sessions);
        println!("  Actions:        {} per session", config.actions_per_session);
        if let Some(seed) = config.seed {
            println!("  Seed:           {}", seed);
        }
        println!();
        println!("Running simulation...");
        println!();
    }

    let report = run_simulation(&config);

    if json_output {
        println!("{}", report.to_json());
    } else {
        println!("{}", report.to_text());
    }
}

fn parse_args(args: &[String]) -> (SimConfig, bool) {
    let mut config = SimConfig::default();
    let mut json_output = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--sessions" => {
                if i + 1 < args.len() {
                    config.num_sessions = args[i + 1].parse().unwrap_or(1_000);
                    i += 1;
                }
            }
            "-a" | "--actions" => {
                if i + 1 < args.len() {
                    config.actions_per_session = args[i + 1].parse().unwrap_or(50);
                    i += 1;
                }
            }
            "-s" | "--seed" => {
                if i + 1 < args.len() {
                    config.seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "--json" => {
                json_output = true;
                config.verbosity = 0;
            }
            "-v" | "--verbose" => {
                config.verbosity = 2;
            }
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            _ => {}
        }
        i += 1;
    }

    (config, json_output)
}

fn print_help() {
    println!("Showroom Market Simulator\n");
    println!("Usage: simulate [OPTIONS]\n");
    println!("Options:");
    println!("  -n, --sessions N   Number of sessions to simulate (default 1000)");
    println!("  -a, --actions N    Buy/sell actions per session (default 50)");
    println!("  -s, --seed SEED    Seed for reproducible runs");
    println!("      --json         Print the report as JSON instead of text");
    println!("  -v, --verbose      Print per-session results");
    println!("  -h, --help         Show this help message");
}
