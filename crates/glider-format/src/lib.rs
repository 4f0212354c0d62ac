//! # glider-format
//!
//! Problem input handling for glider.
//!
//! Supports:
//! - **DIMACS CNF**: standard SAT competition format
//! - **Structural metrics**: clause-length and variable-occurrence
//!   statistics derived from a parsed formula

pub mod dimacs;
pub mod metrics;

pub use dimacs::{Formula, ValidationWarning};
pub use metrics::CnfMetrics;
