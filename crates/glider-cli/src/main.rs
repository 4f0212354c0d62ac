//! glider CLI - command-line interface for the local-search SAT toolkit.

mod commands;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "glider")]
#[command(author, version, about = "Local-search SAT solver with pluggable accelerators", long_about = None)]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a CNF problem
    Solve(commands::solve::SolveArgs),
    /// Print structural metrics for a CNF problem
    Metrics(commands::metrics::MetricsArgs),
    /// Solve a directory of CNF problems in parallel
    Batch(commands::batch::BatchArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    match cli.command {
        Commands::Solve(args) => commands::solve::run(args),
        Commands::Metrics(args) => commands::metrics::run(args),
        Commands::Batch(args) => commands::batch::run(args),
    }
}
