//! Solve command.

use clap::Args;
use glider_accel::SimulatedAccelerator;
use glider_kit::{solve_file, SolveOptions};
use glider_walksat::WalkSatConfig;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Args)]
pub struct SolveArgs {
    /// Input CNF file
    #[arg(required = true)]
    pub input: PathBuf,

    /// Time budget in seconds
    #[arg(short, long, default_value_t = 10.0)]
    pub timeout: f64,

    /// Maximum number of flips
    #[arg(long, default_value_t = 100_000)]
    pub max_flips: u64,

    /// Random-walk probability in [0, 1]
    #[arg(long, default_value_t = 0.5)]
    pub noise: f64,

    /// Fixed random seed for reproducible runs
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write the full JSON report to this file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print the JSON report to stdout instead of the summary lines
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: SolveArgs) -> anyhow::Result<()> {
    tracing::info!("Loading problem from {:?}", args.input);

    let mut accel = SimulatedAccelerator::new(WalkSatConfig {
        max_flips: args.max_flips,
        noise: args.noise,
    });
    if let Some(seed) = args.seed {
        accel = accel.with_seed(seed);
    }

    let options = SolveOptions {
        timeout: Duration::from_secs_f64(args.timeout),
    };
    let report = solve_file(&args.input, &mut accel, &options)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        if report.satisfiable {
            println!("s SATISFIABLE");
            println!("v {}", report.solution);
        } else {
            println!("s UNKNOWN (no model within budget)");
        }
        println!(
            "c time: {:.3}s  flips: {}  vars: {}  clauses: {}",
            report.computation_time,
            report.flips,
            report.metrics.num_vars,
            report.metrics.num_clauses
        );
    }

    if let Some(output) = &args.output {
        fs::write(output, serde_json::to_string_pretty(&report)?)?;
        tracing::info!("Report written to {:?}", output);
    }

    Ok(())
}
