//! In-process software backend running the WalkSAT core.

use crate::{Accelerator, Capabilities, SolveOutcome};
use glider_base::{Error, Result, XorShift64};
use glider_format::{CnfMetrics, Formula};
use glider_walksat::{SearchOutcome, WalkSat, WalkSatConfig};
use std::time::Instant;

/// Software accelerator: parses the stored problem and runs the
/// local-search solver in-process.
///
/// Each attempt builds a fresh solver and random source; nothing is
/// shared between attempts, so independent instances can run on
/// independent threads.
#[derive(Debug, Default)]
pub struct SimulatedAccelerator {
    config: WalkSatConfig,
    seed: Option<u64>,
    problem: Option<String>,
    metrics: Option<CnfMetrics>,
}

impl SimulatedAccelerator {
    /// Creates a backend with the given search configuration.
    #[must_use]
    pub fn new(config: WalkSatConfig) -> Self {
        Self {
            config,
            seed: None,
            problem: None,
            metrics: None,
        }
    }

    /// Fixes the random seed, making every solve deterministic.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl Accelerator for SimulatedAccelerator {
    fn initialize(&mut self, problem: &str) -> Result<()> {
        if problem.trim().is_empty() {
            return Err(Error::Init("empty problem text".to_string()));
        }
        self.problem = Some(problem.to_string());
        self.metrics = None;
        Ok(())
    }

    fn solve(&mut self, timeout: std::time::Duration) -> Result<SolveOutcome> {
        let problem = self
            .problem
            .as_deref()
            .ok_or_else(|| Error::Init("solve called before initialize".to_string()))?;

        let start = Instant::now();
        let deadline = start + timeout;

        let formula = Formula::parse(problem)?;
        let metrics = CnfMetrics::of(&formula);
        tracing::debug!(
            vars = metrics.num_vars,
            clauses = metrics.num_clauses,
            "starting simulated search"
        );

        let mut rng = match self.seed {
            Some(seed) => XorShift64::new(seed),
            None => XorShift64::from_entropy(),
        };
        let mut search = WalkSat::new(&formula, self.config.clone());
        let outcome = search.solve(&mut rng, Some(deadline));
        let flips = search.stats().flips;
        let elapsed = start.elapsed();

        self.metrics = Some(metrics);

        let result = match outcome {
            SearchOutcome::Satisfied(model) => SolveOutcome {
                satisfiable: true,
                assignment: Some(model),
                elapsed,
                flips,
            },
            SearchOutcome::FlipsExhausted | SearchOutcome::TimedOut => SolveOutcome {
                satisfiable: false,
                assignment: None,
                elapsed,
                flips,
            },
        };
        tracing::debug!(
            satisfiable = result.satisfiable,
            flips = result.flips,
            "simulated search finished"
        );
        Ok(result)
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities::new()
            .with("max_flips", self.config.max_flips)
            .with("noise", self.config.noise)
            .with("is_simulated", true)
    }

    fn is_available(&self) -> bool {
        true
    }

    fn metrics(&self) -> Result<CnfMetrics> {
        self.metrics.clone().ok_or(Error::MetricsNotReady)
    }
}
