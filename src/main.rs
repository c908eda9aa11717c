//! Address Book Bot - Main entry point
//!
//! Starts an interactive session on stdin/stdout. Logs go to stderr.

use address_book_bot::{AddressBook, Config, SystemClock};
use anyhow::Result;
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Initialize logging (stderr only so stdout carries just the conversation)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!(
        "Birthday window: {} days",
        config.birthday_window_days
    );

    let mut book = AddressBook::new();
    let stdin = io::stdin();

    if let Err(e) = address_book_bot::repl::run(
        &mut book,
        &config,
        &SystemClock,
        stdin.lock(),
        io::stdout().lock(),
    ) {
        error!("Session aborted: {}", e);
        return Err(e);
    }

    Ok(())
}
