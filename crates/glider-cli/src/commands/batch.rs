//! Batch command: solve a directory of CNF files in parallel.
//!
//! Every file gets its own accelerator, formula, and random source, so
//! attempts share no mutable state across worker threads.

use clap::Args;
use glider_accel::SimulatedAccelerator;
use glider_kit::{solve_file, SolveOptions, SolveReport};
use glider_walksat::WalkSatConfig;
use rayon::prelude::*;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use walkdir::WalkDir;

#[derive(Args, Debug)]
pub struct BatchArgs {
    /// Input directory containing .cnf files
    #[arg(long)]
    pub input_dir: PathBuf,

    /// Output directory for per-file JSON results
    #[arg(long)]
    pub output_dir: PathBuf,

    /// Number of parallel workers (0 = auto)
    #[arg(long, default_value_t = 0)]
    pub workers: usize,

    /// Time budget in seconds per problem
    #[arg(long, default_value_t = 10.0)]
    pub timeout: f64,

    /// Maximum number of flips per problem
    #[arg(long, default_value_t = 100_000)]
    pub max_flips: u64,

    /// Random-walk probability in [0, 1]
    #[arg(long, default_value_t = 0.5)]
    pub noise: f64,
}

#[derive(Serialize)]
struct BatchSummary {
    total_files: usize,
    solved_count: usize,
    failed_count: usize,
    average_time_s: f64,
    total_flips: u64,
}

pub fn run(args: BatchArgs) -> anyhow::Result<()> {
    tracing::info!("Starting batch processing from {:?}", args.input_dir);

    if !args.output_dir.exists() {
        fs::create_dir_all(&args.output_dir)?;
    }

    // Collect files
    let mut files = Vec::new();
    for entry in WalkDir::new(&args.input_dir) {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "cnf") {
            files.push(path.to_owned());
        }
    }

    tracing::info!("Found {} files to process", files.len());

    // Setup thread pool if workers specified
    if args.workers > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(args.workers)
            .build_global()?;
    }

    // Process in parallel; each attempt is fully independent.
    let reports: Vec<Option<SolveReport>> = files
        .par_iter()
        .map(|file_path| match process_file(file_path, &args) {
            Ok(report) => Some(report),
            Err(e) => {
                tracing::error!("Failed to process {:?}: {}", file_path, e);
                None
            }
        })
        .collect();

    let completed: Vec<&SolveReport> = reports.iter().flatten().collect();
    let summary = BatchSummary {
        total_files: files.len(),
        solved_count: completed.iter().filter(|r| r.satisfiable).count(),
        failed_count: files.len() - completed.len(),
        average_time_s: if completed.is_empty() {
            0.0
        } else {
            completed.iter().map(|r| r.computation_time).sum::<f64>() / completed.len() as f64
        },
        total_flips: completed.iter().map(|r| r.flips).sum(),
    };

    let summary_file = args.output_dir.join("summary.json");
    fs::write(&summary_file, serde_json::to_string_pretty(&summary)?)?;
    tracing::info!(
        "Batch complete: {}/{} solved, summary at {:?}",
        summary.solved_count,
        summary.total_files,
        summary_file
    );

    Ok(())
}

fn process_file(path: &Path, args: &BatchArgs) -> anyhow::Result<SolveReport> {
    let mut accel = SimulatedAccelerator::new(WalkSatConfig {
        max_flips: args.max_flips,
        noise: args.noise,
    });
    let options = SolveOptions {
        timeout: Duration::from_secs_f64(args.timeout),
    };

    let report = solve_file(path, &mut accel, &options)?;

    let file_stem = path.file_stem().unwrap_or_default();
    let result_file = args
        .output_dir
        .join(format!("{}.json", file_stem.to_string_lossy()));
    fs::write(&result_file, serde_json::to_string_pretty(&report)?)?;

    tracing::info!(
        "Finished {} [{}] in {:.3}s",
        report.filename,
        if report.satisfiable { "SAT" } else { "UNKNOWN" },
        report.computation_time
    );
    Ok(report)
}
