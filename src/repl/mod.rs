//! Interactive command loop.
//!
//! Reads one command per line, runs it against the address book, and
//! prints the reply. Domain errors are reported and the loop carries on;
//! only `close`, `exit`, or end of input stops it.

pub mod command;
pub mod handlers;

pub use command::Command;

use crate::clock::Clock;
use crate::config::Config;
use crate::models::AddressBook;
use anyhow::Result;
use std::io::{BufRead, Write};

/// First line printed when a session starts.
pub const GREETING: &str = "Welcome to the assistant bot!";

/// Line printed when a session ends.
pub const FAREWELL: &str = "Good bye!";

/// Run a session until `close`/`exit` or end of input.
///
/// The book is borrowed for the whole session; it lives as long as the
/// caller keeps it.
///
/// # Errors
///
/// Only I/O failures on `input` or `output` are returned. Lines that are
/// not valid UTF-8 are decoded lossily and handled like any other input.
pub fn run<R, W>(
    book: &mut AddressBook,
    config: &Config,
    clock: &dyn Clock,
    mut input: R,
    mut output: W,
) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "{}", GREETING)?;
    tracing::info!("Session started");

    let mut buf = Vec::new();
    loop {
        write!(output, "{}", config.prompt)?;
        output.flush()?;

        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            if !config.prompt.is_empty() {
                writeln!(output)?;
            }
            writeln!(output, "{}", FAREWELL)?;
            tracing::info!("Input closed, ending session");
            break;
        }
        // Undecodable bytes become U+FFFD instead of ending the session.
        let line = String::from_utf8_lossy(&buf);

        let reply = match Command::parse(&line) {
            Ok(None) => continue,
            Ok(Some(Command::Exit)) => {
                writeln!(output, "{}", FAREWELL)?;
                break;
            }
            Ok(Some(command)) => {
                tracing::debug!(?command, "Running command");
                handlers::dispatch(command, book, clock, config)
            }
            Err(err) => Err(err),
        };

        match reply {
            Ok(text) => writeln!(output, "{}", text)?,
            Err(err) => {
                tracing::warn!(error = ?err, "Command rejected");
                writeln!(output, "{}", err)?;
            }
        }
    }

    tracing::info!(contacts = book.len(), "Session finished");
    Ok(())
}
