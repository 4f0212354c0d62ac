//! Structural metrics for a CNF formula.

use crate::dimacs::Formula;
use serde::{Deserialize, Serialize};

/// Read-only structural statistics derived from a [`Formula`].
///
/// Computed once per problem, never mutated afterwards. All counts are
/// taken over the clauses actually parsed, not the header declaration,
/// so a mismatched header cannot skew them. On a formula with no
/// clauses the ratio and size statistics are all zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CnfMetrics {
    /// Number of variables.
    pub num_vars: usize,
    /// Number of clauses.
    pub num_clauses: usize,
    /// Clause/variable ratio (zero when there are no variables).
    pub clause_var_ratio: f64,
    /// Mean clause length.
    pub avg_clause_len: f64,
    /// Shortest clause length.
    pub min_clause_len: usize,
    /// Longest clause length.
    pub max_clause_len: usize,
    /// Length of each clause, in clause order.
    pub clause_lens: Vec<usize>,
    /// Occurrence count per variable (0-indexed).
    pub var_occurrences: Vec<usize>,
}

impl CnfMetrics {
    /// Computes metrics for a formula.
    #[must_use]
    pub fn of(formula: &Formula) -> Self {
        let num_vars = formula.num_vars;
        let num_clauses = formula.clauses.len();

        let clause_lens: Vec<usize> = formula.clauses.iter().map(Vec::len).collect();

        let mut var_occurrences = vec![0usize; num_vars];
        for clause in &formula.clauses {
            for &lit in clause {
                let var = lit.unsigned_abs() as usize;
                // Out-of-range literals are a validate() concern
                if var >= 1 && var <= num_vars {
                    var_occurrences[var - 1] += 1;
                }
            }
        }

        let clause_var_ratio = if num_vars == 0 {
            0.0
        } else {
            num_clauses as f64 / num_vars as f64
        };

        let (avg_clause_len, min_clause_len, max_clause_len) = if clause_lens.is_empty() {
            (0.0, 0, 0)
        } else {
            let total: usize = clause_lens.iter().sum();
            (
                total as f64 / clause_lens.len() as f64,
                *clause_lens.iter().min().unwrap_or(&0),
                *clause_lens.iter().max().unwrap_or(&0),
            )
        };

        Self {
            num_vars,
            num_clauses,
            clause_var_ratio,
            avg_clause_len,
            min_clause_len,
            max_clause_len,
            clause_lens,
            var_occurrences,
        }
    }
}
