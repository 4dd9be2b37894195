mod bootstrap;
mod command;
mod session;

use std::io::Write;

use analyzer_core::settings::Settings;
use analyzer_data::reader::import_csv;
use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::command::AVAILABLE_COMMANDS;
use crate::session::{Outcome, Session};

fn print_message(message: &str) {
    if message.ends_with('\n') {
        print!("{}", message);
    } else {
        println!("{}", message);
    }
}

fn prompt() -> Result<()> {
    let mut stdout = std::io::stdout();
    stdout.write_all(b"> ")?;
    stdout.flush()?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let settings = Settings::load();

    bootstrap::setup_logging(settings.effective_log_level())?;
    tracing::info!("URL analyzer v{} starting", env!("CARGO_PKG_VERSION"));

    let mut session = Session::new(settings.delimiter);

    for path in &settings.imports {
        if let Err(e) = import_csv(session.store_mut(), path, settings.delimiter) {
            eprintln!("CSV import failed: {}", e);
        }
    }

    if !settings.no_banner {
        println!("URL Social Analyzer System");
        println!("Available commands: {}", AVAILABLE_COMMANDS);
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        prompt()?;

        // Ctrl+C ends the session the same way EXIT does.
        let line = tokio::select! {
            line = lines.next_line() => line?,
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Ctrl+C received; shutting down");
                println!();
                break;
            }
        };

        let Some(line) = line else {
            tracing::debug!("End of input");
            break;
        };

        match session.handle_line(&line) {
            Outcome::Continue(message) => print_message(&message),
            Outcome::Exit(message) => {
                print_message(&message);
                break;
            }
        }
    }

    tracing::info!(
        "Session ended with {} domains and {} URLs",
        session.store().len(),
        session.store().total_urls()
    );
    Ok(())
}
