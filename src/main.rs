//! Daybook - Main Entry Point
//!
//! Reads commands from standard input, one per line, until `bye` or end of
//! input. The actual implementation is in the `daybook` library.

use anyhow::Result;
use clap::Parser;
use daybook::{Config, Daybook, USAGE};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

const GREETING: &str = "Hello! What can I do for you? Type 'help' to see the available commands.";
const FAREWELL: &str = "Bye. Hope to see you again soon!";

/// Daybook - deadlines, recurring events and free-slot search in the terminal
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the task data file (overrides the config file)
    file: Option<PathBuf>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = match args.config {
        Some(ref path) => Config::from_file(path)?,
        None => Config::default(),
    };
    if let Some(file) = args.file {
        config.data_file = file;
    }

    // RUST_LOG wins over the configured filter; logs go to stderr to keep replies clean
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
        )
        .with_writer(io::stderr)
        .init();

    let mut daybook = Daybook::open(&config)?;
    info!(path = %config.data_file.display(), tasks = daybook.tasks().len(), "session started");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{}", GREETING)?;
    out.flush()?;

    for line in io::stdin().lock().lines() {
        let line = line?;
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        match input.to_lowercase().as_str() {
            "bye" => break,
            "help" => writeln!(out, "{}", USAGE)?,
            _ => match daybook.handle_line(input) {
                Ok(reply) => writeln!(out, "{}", reply)?,
                Err(e) => writeln!(out, "Error: {:#}", e)?,
            },
        }
        out.flush()?;
    }

    writeln!(out, "{}", FAREWELL)?;
    Ok(())
}
