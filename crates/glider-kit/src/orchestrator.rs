//! Drives one solve attempt end to end.

use crate::report::{encode_solution, SolveReport};
use glider_accel::Accelerator;
use glider_base::{Error, Result};
use glider_format::Formula;
use std::path::Path;
use std::time::Duration;

/// Orchestration options.
#[derive(Debug, Clone)]
pub struct SolveOptions {
    /// Time budget handed to the accelerator.
    pub timeout: Duration,
}

impl Default for SolveOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
        }
    }
}

/// Reads a CNF file and solves it on the given accelerator.
///
/// An unreadable file short-circuits with an I/O error; no partial
/// report is produced.
pub fn solve_file(
    path: &Path,
    accelerator: &mut dyn Accelerator,
    options: &SolveOptions,
) -> Result<SolveReport> {
    let problem = std::fs::read_to_string(path)?;
    let filename = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    solve_source(&filename, &problem, accelerator, options)
}

/// Solves raw DIMACS text on the given accelerator.
///
/// Runs `initialize` then `solve`, re-verifies any reported model
/// against the clause list independently of the backend's own
/// bookkeeping, and assembles the report.
pub fn solve_source(
    name: &str,
    problem: &str,
    accelerator: &mut dyn Accelerator,
    options: &SolveOptions,
) -> Result<SolveReport> {
    tracing::info!(name, timeout = ?options.timeout, "starting solve attempt");

    accelerator.initialize(problem)?;
    let outcome = accelerator.solve(options.timeout)?;
    let metrics = accelerator.metrics()?;

    let (solution, assignment) = match (outcome.satisfiable, outcome.assignment) {
        (true, Some(model)) => {
            // Never trust the backend's verdict blindly.
            let formula = Formula::parse(problem)?;
            if !formula.is_satisfied_by(&model) {
                return Err(Error::Solve(
                    "backend reported a non-satisfying assignment".to_string(),
                ));
            }
            (encode_solution(&model), Some(model))
        }
        (true, None) => {
            return Err(Error::Solve(
                "backend reported satisfiable without an assignment".to_string(),
            ));
        }
        (false, _) => (String::new(), None),
    };

    let report = SolveReport {
        filename: name.to_string(),
        satisfiable: outcome.satisfiable,
        solution,
        assignment,
        computation_time: outcome.elapsed.as_secs_f64(),
        flips: outcome.flips,
        metrics,
    };

    tracing::info!(
        name,
        satisfiable = report.satisfiable,
        flips = report.flips,
        seconds = report.computation_time,
        "solve attempt finished"
    );
    Ok(report)
}
