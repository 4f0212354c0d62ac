//! The terminal result record of a solve attempt.

use glider_format::CnfMetrics;
use serde::Serialize;

/// Everything a caller learns from one solve attempt.
///
/// Immutable once produced. The solution string holds one character
/// per variable in index order, `'1'` for true and `'0'` for false,
/// and stays empty when no model was found within budget.
#[derive(Debug, Clone, Serialize)]
pub struct SolveReport {
    /// Name of the problem source (filename or caller-supplied label).
    pub filename: String,
    /// Whether a satisfying assignment was found.
    pub satisfiable: bool,
    /// Compact solution encoding; empty unless satisfiable.
    pub solution: String,
    /// The raw model, present only when satisfiable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignment: Option<Vec<bool>>,
    /// Wall-clock solve time in seconds.
    pub computation_time: f64,
    /// Variables flipped during the search.
    pub flips: u64,
    /// Structural metrics of the problem.
    pub metrics: CnfMetrics,
}

/// Encodes an assignment as the compact `'1'`/`'0'` string.
#[must_use]
pub fn encode_solution(assignment: &[bool]) -> String {
    assignment
        .iter()
        .map(|&v| if v { '1' } else { '0' })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_solution() {
        assert_eq!(encode_solution(&[true, false, true]), "101");
        assert_eq!(encode_solution(&[]), "");
    }
}
