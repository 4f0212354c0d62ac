//! Core WalkSAT/GSAT search loop.

use glider_base::XorShift64;
use glider_format::{dimacs::literal_satisfied, Formula};
use std::time::Instant;

/// How many flips pass between cooperative deadline checks.
const DEADLINE_CHECK_INTERVAL: u64 = 64;

/// Configuration for the local-search solver.
#[derive(Debug, Clone)]
pub struct WalkSatConfig {
    /// Maximum number of flip iterations before giving up.
    pub max_flips: u64,
    /// Probability of taking a random-walk step instead of the greedy
    /// step. Expected in `[0, 1]`.
    pub noise: f64,
}

impl Default for WalkSatConfig {
    fn default() -> Self {
        Self {
            max_flips: 100_000,
            noise: 0.5,
        }
    }
}

/// The result of a search run.
///
/// Local search is incomplete: failing to find a model within budget
/// proves nothing about unsatisfiability, so there is no `Unsat` arm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Found an assignment satisfying every clause.
    Satisfied(Vec<bool>),
    /// Flip budget ran out without finding a model.
    FlipsExhausted,
    /// The wall-clock deadline passed before a model was found.
    TimedOut,
}

/// Counters recorded during one search run.
#[derive(Debug, Clone, Default)]
pub struct SearchStats {
    /// Variables actually flipped (not loop iterations).
    pub flips: u64,
    /// Unsatisfied clauses after random initialization.
    pub initial_unsat: usize,
}

/// One in-flight local-search attempt over a formula.
///
/// Owns its assignment exclusively; the formula is borrowed read-only.
pub struct WalkSat<'a> {
    formula: &'a Formula,
    config: WalkSatConfig,
    assignment: Vec<bool>,
    stats: SearchStats,
}

impl<'a> WalkSat<'a> {
    /// Creates a search over the given formula.
    pub fn new(formula: &'a Formula, config: WalkSatConfig) -> Self {
        Self {
            formula,
            config,
            assignment: vec![false; formula.num_vars],
            stats: SearchStats::default(),
        }
    }

    /// Runs the search to a model, flip exhaustion, or the deadline.
    ///
    /// Each variable starts at an independent uniform random value.
    /// Every iteration first checks for satisfaction (the only success
    /// exit), then picks a uniformly random unsatisfied clause and
    /// flips one of its variables: with probability `noise` a random
    /// one, otherwise the one whose flip leaves the fewest clauses
    /// unsatisfied (first seen wins ties).
    pub fn solve(
        &mut self,
        rng: &mut XorShift64,
        deadline: Option<Instant>,
    ) -> SearchOutcome {
        for slot in self.assignment.iter_mut() {
            *slot = rng.next_bool();
        }
        self.stats = SearchStats {
            flips: 0,
            initial_unsat: self.unsatisfied_clauses().len(),
        };

        let mut iteration: u64 = 0;
        loop {
            let unsat = self.unsatisfied_clauses();
            if unsat.is_empty() {
                return SearchOutcome::Satisfied(self.assignment.clone());
            }
            if iteration >= self.config.max_flips {
                return SearchOutcome::FlipsExhausted;
            }
            if iteration % DEADLINE_CHECK_INTERVAL == 0 {
                if let Some(limit) = deadline {
                    if Instant::now() >= limit {
                        return SearchOutcome::TimedOut;
                    }
                }
            }
            iteration += 1;

            let clause_idx = unsat[rng.next_below(unsat.len())];
            // An empty clause yields no candidate and burns the
            // iteration; the budget still bounds the loop.
            if let Some(var) = self.pick_flip_var(clause_idx, rng) {
                self.assignment[var] = !self.assignment[var];
                self.stats.flips += 1;
            }
        }
    }

    /// Returns counters from the most recent run.
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Indices of clauses the current assignment leaves unsatisfied.
    fn unsatisfied_clauses(&self) -> Vec<usize> {
        self.formula
            .clauses
            .iter()
            .enumerate()
            .filter(|(_, clause)| {
                !clause.iter().any(|&lit| literal_satisfied(lit, &self.assignment))
            })
            .map(|(idx, _)| idx)
            .collect()
    }

    /// Total number of unsatisfied clauses under the current assignment.
    fn count_unsatisfied(&self) -> usize {
        self.formula
            .clauses
            .iter()
            .filter(|clause| {
                !clause.iter().any(|&lit| literal_satisfied(lit, &self.assignment))
            })
            .count()
    }

    /// Chooses which variable of the clause to flip, or `None` for an
    /// empty clause.
    fn pick_flip_var(&mut self, clause_idx: usize, rng: &mut XorShift64) -> Option<usize> {
        let formula = self.formula;
        let clause = &formula.clauses[clause_idx];
        if clause.is_empty() {
            return None;
        }

        // Random-walk branch
        if rng.next_f64() < self.config.noise {
            let lit = clause[rng.next_below(clause.len())];
            return self.var_index(lit);
        }

        // Greedy branch: tentatively flip each candidate, count the
        // damage over the whole formula, flip back. Strictly lower
        // wins; the first candidate to reach a count keeps it.
        let mut best: Option<(usize, usize)> = None;
        for &lit in clause {
            let Some(var) = self.var_index(lit) else {
                continue;
            };
            self.assignment[var] = !self.assignment[var];
            let unsat = self.count_unsatisfied();
            self.assignment[var] = !self.assignment[var];

            match best {
                Some((_, best_unsat)) if unsat >= best_unsat => {}
                _ => best = Some((var, unsat)),
            }
        }
        best.map(|(var, _)| var)
    }

    /// Maps a literal to its 0-based variable index, rejecting
    /// literals outside the assignment (possible with malformed input,
    /// since the parser does not enforce the declared range).
    fn var_index(&self, lit: i32) -> Option<usize> {
        let var = lit.unsigned_abs() as usize;
        if var >= 1 && var <= self.assignment.len() {
            Some(var - 1)
        } else {
            None
        }
    }
}
