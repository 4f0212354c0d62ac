//! # glider-walksat
//!
//! The stochastic local-search core: a WalkSAT/GSAT hybrid that flips
//! one variable at a time, steered by a noise parameter that trades
//! random walks against greedy repair steps.
//!
//! The solver is a pure algorithm over a parsed formula and a
//! caller-owned random source; it does no I/O and holds no global
//! state, so independent attempts can run on separate threads without
//! any sharing.
//!
//! # Example
//!
//! ```
//! use glider_base::XorShift64;
//! use glider_format::Formula;
//! use glider_walksat::{SearchOutcome, WalkSat, WalkSatConfig};
//!
//! let formula = Formula::parse("p cnf 2 2\n1 2 0\n-1 -2 0\n").unwrap();
//! let mut rng = XorShift64::new(1);
//! let mut search = WalkSat::new(&formula, WalkSatConfig::default());
//!
//! match search.solve(&mut rng, None) {
//!     SearchOutcome::Satisfied(model) => assert!(formula.is_satisfied_by(&model)),
//!     other => panic!("expected a model, got {other:?}"),
//! }
//! ```

pub mod solver;

pub use solver::{SearchOutcome, SearchStats, WalkSat, WalkSatConfig};
