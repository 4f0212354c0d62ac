//! # glider-accel
//!
//! The execution-backend abstraction: any engine that can take a CNF
//! problem and search for a model — the in-process simulator or a
//! physical accelerator — sits behind the same [`Accelerator`]
//! contract, so callers swap backends without touching the solve path.
//!
//! ## Example
//!
//! ```
//! use std::time::Duration;
//! use glider_accel::{Accelerator, SimulatedAccelerator};
//!
//! let mut accel = SimulatedAccelerator::default().with_seed(1);
//! accel.initialize("p cnf 2 2\n1 2 0\n-1 -2 0\n").unwrap();
//! let outcome = accel.solve(Duration::from_secs(10)).unwrap();
//! assert!(outcome.satisfiable);
//! ```

pub mod capabilities;
pub mod device;
pub mod simulated;

pub use capabilities::{Capabilities, CapValue};
pub use device::{DeviceAccelerator, DeviceResponse, DeviceTransport};
pub use simulated::SimulatedAccelerator;

use glider_base::Result;
use glider_format::CnfMetrics;
use std::time::Duration;

/// What one solve attempt produced.
///
/// "No model found within budget" is a normal outcome, reported here
/// with `satisfiable = false`; it is never an `Err`.
#[derive(Debug, Clone)]
pub struct SolveOutcome {
    /// Whether a satisfying assignment was found.
    pub satisfiable: bool,
    /// The model, present only when `satisfiable` is true.
    pub assignment: Option<Vec<bool>>,
    /// Wall-clock time the backend spent solving.
    pub elapsed: Duration,
    /// Variables flipped during the search (backend-reported).
    pub flips: u64,
}

/// Contract every execution backend satisfies.
///
/// Lifecycle per attempt: [`initialize`](Accelerator::initialize) once
/// with the raw problem text, then [`solve`](Accelerator::solve) under
/// a time budget. [`metrics`](Accelerator::metrics) is only valid
/// after a solve that returned `Ok`; before that it fails with
/// [`glider_base::Error::MetricsNotReady`].
///
/// New physical backends implement this trait; nothing in the solve
/// path ever branches on backend identity.
pub trait Accelerator {
    /// Stores and validates the raw DIMACS problem for the next solve.
    fn initialize(&mut self, problem: &str) -> Result<()>;

    /// Runs the backend's search under the given time budget.
    ///
    /// The budget is authoritative: backends stop cooperatively once
    /// it elapses and report the attempt as unsatisfiable-within-budget.
    fn solve(&mut self, timeout: Duration) -> Result<SolveOutcome>;

    /// Describes the backend. Informational only; never consulted by
    /// the solve path.
    fn capabilities(&self) -> Capabilities;

    /// Reports readiness without mutating state. A physical backend
    /// returns false while disconnected.
    fn is_available(&self) -> bool;

    /// Structural metrics of the problem solved by the last `solve`.
    fn metrics(&self) -> Result<CnfMetrics>;
}
