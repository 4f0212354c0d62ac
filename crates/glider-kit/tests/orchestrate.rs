//! End-to-end tests for the solve pipeline.

use glider_accel::{
    Accelerator, Capabilities, DeviceAccelerator, DeviceResponse, DeviceTransport,
    SimulatedAccelerator, SolveOutcome,
};
use glider_base::{Error, Result};
use glider_kit::{solve_file, solve_source, SolveOptions};
use glider_walksat::WalkSatConfig;
use std::io::Write;
use std::time::Duration;

const SAT_PROBLEM: &str = "p cnf 2 2\n1 2 0\n-1 -2 0\n";
const UNSAT_PROBLEM: &str = "p cnf 1 2\n1 0\n-1 0\n";

fn sim() -> SimulatedAccelerator {
    SimulatedAccelerator::new(WalkSatConfig {
        max_flips: 1000,
        noise: 0.0,
    })
    .with_seed(42)
}

#[test]
fn test_end_to_end_satisfiable() {
    let mut accel = sim();
    let report = solve_source("pair.cnf", SAT_PROBLEM, &mut accel, &SolveOptions::default())
        .expect("pipeline should succeed");

    assert!(report.satisfiable);
    assert_eq!(report.solution.len(), 2);
    // Exactly one of the two variables is true.
    assert!(report.solution == "10" || report.solution == "01");
    assert_eq!(report.metrics.num_vars, 2);
    assert_eq!(report.metrics.num_clauses, 2);
    assert!(report.flips <= 1000);
    assert!(report.computation_time >= 0.0);
}

#[test]
fn test_end_to_end_contradiction_reports_unsat() {
    let mut accel = sim();
    let report = solve_source(
        "contra.cnf",
        UNSAT_PROBLEM,
        &mut accel,
        &SolveOptions::default(),
    )
    .expect("budget exhaustion is not an error");

    assert!(!report.satisfiable);
    assert!(report.solution.is_empty());
    assert!(report.assignment.is_none());
}

#[test]
fn test_solve_file_roundtrip() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(SAT_PROBLEM.as_bytes()).unwrap();

    let mut accel = sim();
    let report = solve_file(file.path(), &mut accel, &SolveOptions::default()).unwrap();
    assert!(report.satisfiable);
    assert!(!report.filename.is_empty());
}

#[test]
fn test_missing_file_short_circuits() {
    let mut accel = sim();
    let err = solve_file(
        std::path::Path::new("/nonexistent/problem.cnf"),
        &mut accel,
        &SolveOptions::default(),
    )
    .unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn test_malformed_problem_aborts_attempt() {
    let mut accel = sim();
    let err = solve_source(
        "bad.cnf",
        "p cnf x y\n1 0\n",
        &mut accel,
        &SolveOptions::default(),
    )
    .unwrap_err();
    assert!(matches!(err, Error::Format { .. }));
}

#[test]
fn test_report_serializes_to_json() {
    let mut accel = sim();
    let report =
        solve_source("pair.cnf", SAT_PROBLEM, &mut accel, &SolveOptions::default()).unwrap();
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["satisfiable"], true);
    assert_eq!(json["filename"], "pair.cnf");
    assert!(json["metrics"]["num_vars"].is_number());
}

/// Transport whose "hardware" is the software solver; exercises the
/// device path through the orchestrator.
struct LoopbackTransport;

impl DeviceTransport for LoopbackTransport {
    fn name(&self) -> &str {
        "loopback"
    }

    fn is_connected(&self) -> bool {
        true
    }

    fn solve(&mut self, problem: &str, timeout: Duration) -> Result<DeviceResponse> {
        let mut inner = SimulatedAccelerator::default().with_seed(5);
        inner.initialize(problem)?;
        let outcome: SolveOutcome = inner.solve(timeout)?;
        Ok(DeviceResponse {
            satisfiable: outcome.satisfiable,
            assignment: outcome.assignment,
            elapsed: outcome.elapsed,
            flips: outcome.flips,
        })
    }
}

#[test]
fn test_device_backend_is_interchangeable() {
    let mut accel = DeviceAccelerator::new(LoopbackTransport);
    let report =
        solve_source("pair.cnf", SAT_PROBLEM, &mut accel, &SolveOptions::default()).unwrap();
    assert!(report.satisfiable);

    let caps: Capabilities = accel.capabilities();
    assert!(caps.get("is_simulated").is_some());
}
