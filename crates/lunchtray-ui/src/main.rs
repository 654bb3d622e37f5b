//! Lunch Tray - main entry point.
//!
//! Loads configuration, builds the app around the built-in catalog, and
//! reads commands from stdin until the user quits.

use std::io::{self, BufRead, Write};

use lunchtray_core::{AppConfig, DataSource};
use lunchtray_session::EventOutcome;
use lunchtray_ui::{App, Reply};
use tracing_subscriber::EnvFilter;

const HELP: &str = "Commands: start, <number>, next, back, cancel, submit, quit";

/// Load config, falling back to defaults on any error.
fn load_config() -> AppConfig {
    match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Config error: {} - using defaults", e);
            AppConfig::default()
        }
    }
}

fn prompt() {
    print!("> ");
    let _ = io::stdout().flush();
}

fn main() {
    // Logs go to stderr so screens on stdout stay readable
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    tracing::info!("Lunch Tray starting...");

    let config = load_config();
    let mut app = App::new(&config, &DataSource);

    println!("{}", app.render());
    println!("{}", HELP);
    prompt();

    for line in io::stdin().lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                tracing::error!("Failed to read input: {}", e);
                break;
            }
        };

        match app.handle_line(&line) {
            Ok(Reply::Quit) => break,
            Ok(Reply::Continue(EventOutcome::Submitted(receipt))) => {
                println!("{}", app.confirmation(&receipt));
            }
            Ok(Reply::Continue(_)) => {}
            Err(e) => println!("{}", e),
        }

        if let Some(frame) = app.poll_frame() {
            println!("{}", frame);
        }
        prompt();
    }

    tracing::info!("Lunch Tray exiting");
}
