//! # glider-kit
//!
//! The high-level solve pipeline: read a problem, hand it to a chosen
//! accelerator, and assemble the outcome into a [`SolveReport`] that
//! external consumers (dashboards, test-run recorders) can persist or
//! display. Which backend to use is the caller's construction-time
//! choice; the pipeline itself is backend-agnostic.
//!
//! # Example
//!
//! ```
//! use glider_accel::SimulatedAccelerator;
//! use glider_kit::{solve_source, SolveOptions};
//!
//! let mut accel = SimulatedAccelerator::default().with_seed(9);
//! let report = solve_source(
//!     "toy.cnf",
//!     "p cnf 2 2\n1 2 0\n-1 -2 0\n",
//!     &mut accel,
//!     &SolveOptions::default(),
//! )
//! .unwrap();
//! assert!(report.satisfiable);
//! ```

pub mod orchestrator;
pub mod report;

pub use orchestrator::{solve_file, solve_source, SolveOptions};
pub use report::SolveReport;

pub use glider_base::{Error, Result};
