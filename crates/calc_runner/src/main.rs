//! Command-line front end for the damage engine.
//!
//! Reads a game-data table and a request file, runs one entry point and
//! prints the result as JSON on stdout.
//!
//! Usage:
//!   cargo run -p calc_runner -- calc --request req.json
//!   cargo run -p calc_runner -- compare --request req.json --pretty
//!   cargo run -p calc_runner -- analyze --data data/dex.json --request req.json --config cfg.json

mod cmd;
mod models;
mod utils;

use std::process::ExitCode;

use clap::{ArgAction, Parser, Subcommand};
use cmd::{analyze, calc, compare};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "calc_runner", version, about = "Pokémon damage calculator")]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Damage distribution and KO figures for one move
    Calc(calc::CalcArgs),

    /// Rank several moves against the same target
    Compare(compare::CompareArgs),

    /// One move with the full distribution and KO table
    Analyze(analyze::AnalyzeArgs),
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let outcome = match cli.command {
        Commands::Calc(args) => calc::execute(args),
        Commands::Compare(args) => compare::execute(args),
        Commands::Analyze(args) => analyze::execute(args),
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
