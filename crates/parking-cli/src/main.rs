//! Parking lot CLI
//!
//! Reads parking lot commands from stdin or a command file and prints
//! one reply per command.

mod repl;

use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use tracing::Level;

use parking_core::{Session, SessionOptions, StatusFormat};

#[derive(Parser)]
#[command(name = "parking_lot")]
#[command(about = "Parking lot slot manager")]
#[command(version)]
struct Cli {
    /// Read commands from this file instead of stdin
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Print `status` as JSON
    #[arg(long)]
    json: bool,

    /// Suppress the banner and prompt
    #[arg(short, long)]
    quiet: bool,

    /// Log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn session_options(&self) -> SessionOptions {
        SessionOptions {
            status_format: if self.json {
                StatusFormat::Json
            } else {
                StatusFormat::Table
            },
        }
    }

    fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            _ => Level::DEBUG,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli.log_level())
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let mut session = Session::with_options(cli.session_options());
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match &cli.file {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open command file: {}", path.display()))?;
            tracing::info!(path = %path.display(), "reading commands from file");
            repl::run(&mut session, BufReader::new(file), &mut out, false)
        }
        None => {
            let stdin = io::stdin();
            repl::run(&mut session, stdin.lock(), &mut out, !cli.quiet)
        }
    }
}
