//! Physical accelerator backend.
//!
//! The device wire protocol is transport-specific and lives behind
//! [`DeviceTransport`]; this module only enforces the accelerator
//! contract around it: lifecycle, availability, metrics, and
//! verification of whatever assignment the device claims to have
//! found.

use crate::{Accelerator, Capabilities, SolveOutcome};
use glider_base::{Error, Result};
use glider_format::{CnfMetrics, Formula};
use std::time::Duration;

/// Raw answer from a physical device.
#[derive(Debug, Clone)]
pub struct DeviceResponse {
    /// Whether the device claims to have found a model.
    pub satisfiable: bool,
    /// The claimed model, 0-indexed by variable.
    pub assignment: Option<Vec<bool>>,
    /// Device-reported solve time.
    pub elapsed: Duration,
    /// Device-reported flip count.
    pub flips: u64,
}

/// Link to a physical accelerator.
///
/// Implementations own the wire protocol (serial framing, firmware
/// handshake, ...); the accelerator layer never sees it.
pub trait DeviceTransport {
    /// Short identifier for capability reporting, e.g. `"teensy-3sat"`.
    fn name(&self) -> &str;

    /// Whether the device is reachable right now.
    fn is_connected(&self) -> bool;

    /// Ships the problem to the device and waits for its answer,
    /// within the given budget.
    fn solve(&mut self, problem: &str, timeout: Duration) -> Result<DeviceResponse>;
}

/// Accelerator backed by a physical device.
///
/// Device claims are not trusted: a response marked satisfiable is
/// re-checked against the parsed formula and rejected as a solve
/// error when it does not hold up.
pub struct DeviceAccelerator<T: DeviceTransport> {
    transport: T,
    problem: Option<String>,
    metrics: Option<CnfMetrics>,
}

impl<T: DeviceTransport> DeviceAccelerator<T> {
    /// Wraps a transport in the accelerator contract.
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            problem: None,
            metrics: None,
        }
    }
}

impl<T: DeviceTransport> Accelerator for DeviceAccelerator<T> {
    fn initialize(&mut self, problem: &str) -> Result<()> {
        if !self.transport.is_connected() {
            return Err(Error::Init(format!(
                "device '{}' is not connected",
                self.transport.name()
            )));
        }
        if problem.trim().is_empty() {
            return Err(Error::Init("empty problem text".to_string()));
        }
        self.problem = Some(problem.to_string());
        self.metrics = None;
        Ok(())
    }

    fn solve(&mut self, timeout: Duration) -> Result<SolveOutcome> {
        let problem = self
            .problem
            .clone()
            .ok_or_else(|| Error::Init("solve called before initialize".to_string()))?;

        let formula = Formula::parse(&problem)?;
        let metrics = CnfMetrics::of(&formula);

        tracing::debug!(device = self.transport.name(), "offloading to device");
        let response = self.transport.solve(&problem, timeout)?;

        let outcome = if response.satisfiable {
            let model = response.assignment.ok_or_else(|| {
                Error::Solve("device claimed satisfiable without an assignment".to_string())
            })?;
            if model.len() != formula.num_vars {
                return Err(Error::Solve(format!(
                    "device assignment has {} entries, formula has {} variables",
                    model.len(),
                    formula.num_vars
                )));
            }
            if !formula.is_satisfied_by(&model) {
                return Err(Error::Solve(
                    "device returned a non-satisfying assignment".to_string(),
                ));
            }
            SolveOutcome {
                satisfiable: true,
                assignment: Some(model),
                elapsed: response.elapsed,
                flips: response.flips,
            }
        } else {
            SolveOutcome {
                satisfiable: false,
                assignment: None,
                elapsed: response.elapsed,
                flips: response.flips,
            }
        };

        self.metrics = Some(metrics);
        Ok(outcome)
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities::new()
            .with("is_simulated", false)
            .with("device", self.transport.name())
    }

    fn is_available(&self) -> bool {
        self.transport.is_connected()
    }

    fn metrics(&self) -> Result<CnfMetrics> {
        self.metrics.clone().ok_or(Error::MetricsNotReady)
    }
}
