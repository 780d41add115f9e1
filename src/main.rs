mod build_info;
mod catalog;
mod constants;
mod currency;
mod game_state;
mod input;
mod inventory;
mod market;
mod messages;
mod session;
mod ui;

use chrono::Utc;
use constants::POLL_INTERVAL_MS;
use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use game_state::GameState;
use input::{handle_game_key, InputResult, UiState};
use messages::MessageArea;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};
use ui::draw_ui;

fn main() -> io::Result<()> {
    // Handle CLI arguments
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        match args[1].as_str() {
            "--version" | "-v" => {
                println!(
                    "showroom {} ({})",
                    build_info::BUILD_DATE,
                    build_info::BUILD_COMMIT
                );
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("Showroom - Terminal Motorcycle-Flipping Game\n");
                println!("Usage: showroom [command]\n");
                println!("Commands:");
                println!("  --version  Show version information");
                println!("  --help     Show this help message");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown command: {}", other);
                eprintln!("Run 'showroom --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Start the session once the display surface is ready
    let mut game_state = GameState::new(Utc::now().timestamp());
    let mut ui_state = UiState::new();
    let mut message_area = MessageArea::new();
    session::start(&mut game_state, &mut message_area, Utc::now().timestamp());

    // Main loop
    loop {
        message_area.expire_stale(Instant::now());

        terminal.draw(|frame| {
            draw_ui(frame, &game_state, &ui_state, &message_area);
        })?;

        if event::poll(Duration::from_millis(POLL_INTERVAL_MS))? {
            if let Event::Key(key_event) = event::read()? {
                let result = handle_game_key(
                    key_event,
                    &mut game_state,
                    &mut ui_state,
                    &mut message_area,
                    &mut rand::thread_rng(),
                );
                if let InputResult::Quit = result {
                    break;
                }
            }
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;

    Ok(())
}
