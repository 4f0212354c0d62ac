//! DIMACS CNF format parser.
//!
//! Standard format used in SAT competitions: `c` comment lines, one
//! `p cnf <vars> <clauses>` header, then clause lines of signed
//! integers terminated by a literal `0`.

use glider_base::{Error, Result};
use std::fmt;

/// A parsed CNF formula. Immutable once built.
///
/// Literals follow the DIMACS convention: `v` asserts variable `|v|`
/// true, `-v` asserts it false. Variables are 1-based in literal space;
/// the `0` terminator is never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formula {
    /// Number of variables declared in the header.
    pub num_vars: usize,
    /// Number of clauses declared in the header.
    ///
    /// Accepted as given; the parser does not reconcile this against
    /// the clause lines actually consumed. Use [`Formula::validate`]
    /// to surface mismatches.
    pub num_clauses: usize,
    /// Clauses as vectors of literals, in input order.
    pub clauses: Vec<Vec<i32>>,
}

impl Formula {
    /// Parses DIMACS CNF text into a formula.
    ///
    /// Blank lines and `c` comment lines are skipped. Clause lines are
    /// cut at the first `0` token; anything after it on the same line
    /// is ignored. A clause line before the header, a malformed
    /// header, or a non-integer literal token fails with
    /// [`Error::Format`] naming the offending line.
    pub fn parse(input: &str) -> Result<Self> {
        let mut num_vars = 0;
        let mut num_clauses = 0;
        let mut clauses = Vec::new();
        let mut header_found = false;

        for (idx, raw) in input.lines().enumerate() {
            let lineno = idx + 1;
            let line = raw.trim();

            // Skip empty lines and comments
            if line.is_empty() || line.starts_with('c') {
                continue;
            }

            // Parse header
            if line.starts_with('p') {
                let parts: Vec<&str> = line.split_whitespace().collect();
                if parts.len() != 4 || parts[1] != "cnf" {
                    return Err(Error::format(
                        lineno,
                        format!("invalid problem line: {line}"),
                    ));
                }
                num_vars = parts[2].parse().map_err(|_| {
                    Error::format(lineno, format!("invalid variable count: {}", parts[2]))
                })?;
                num_clauses = parts[3].parse().map_err(|_| {
                    Error::format(lineno, format!("invalid clause count: {}", parts[3]))
                })?;
                header_found = true;
                clauses.reserve(num_clauses);
                continue;
            }

            if !header_found {
                return Err(Error::format(
                    lineno,
                    "clause line before 'p cnf' header".to_string(),
                ));
            }

            // Parse clause, stopping at the 0 terminator
            let mut clause = Vec::new();
            for token in line.split_whitespace() {
                let lit: i32 = token.parse().map_err(|_| {
                    Error::format(lineno, format!("invalid literal: {token}"))
                })?;
                if lit == 0 {
                    break;
                }
                clause.push(lit);
            }
            clauses.push(clause);
        }

        Ok(Self {
            num_vars,
            num_clauses,
            clauses,
        })
    }

    /// Checks whether `assignment` satisfies every clause.
    ///
    /// Independent of any solver bookkeeping, so callers can re-verify
    /// a model an accelerator claims to have found. Literals whose
    /// variable falls outside the assignment evaluate false.
    #[must_use]
    pub fn is_satisfied_by(&self, assignment: &[bool]) -> bool {
        self.clauses
            .iter()
            .all(|clause| clause.iter().any(|&lit| literal_satisfied(lit, assignment)))
    }

    /// Scans for data-quality issues the permissive parser lets through.
    #[must_use]
    pub fn validate(&self) -> Vec<ValidationWarning> {
        let mut warnings = Vec::new();

        if self.num_clauses != self.clauses.len() {
            warnings.push(ValidationWarning::ClauseCountMismatch {
                declared: self.num_clauses,
                actual: self.clauses.len(),
            });
        }

        for (idx, clause) in self.clauses.iter().enumerate() {
            if clause.is_empty() {
                warnings.push(ValidationWarning::EmptyClause { clause: idx });
            }
            for &lit in clause {
                let var = lit.unsigned_abs() as usize;
                if var == 0 || var > self.num_vars {
                    warnings.push(ValidationWarning::LiteralOutOfRange {
                        clause: idx,
                        literal: lit,
                    });
                }
            }
        }

        warnings
    }

    /// Serializes back to DIMACS text.
    #[must_use]
    pub fn to_dimacs(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("p cnf {} {}\n", self.num_vars, self.clauses.len()));
        for clause in &self.clauses {
            for lit in clause {
                out.push_str(&format!("{lit} "));
            }
            out.push_str("0\n");
        }
        out
    }
}

/// Evaluates one literal under an assignment.
///
/// `assignment` is 0-indexed by variable; literal space is 1-indexed.
#[must_use]
pub fn literal_satisfied(lit: i32, assignment: &[bool]) -> bool {
    let var = lit.unsigned_abs() as usize;
    if var == 0 {
        return false;
    }
    match assignment.get(var - 1) {
        Some(&value) => (lit > 0) == value,
        None => false,
    }
}

/// A data-quality issue found by [`Formula::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationWarning {
    /// Header clause count disagrees with the clauses actually parsed.
    ClauseCountMismatch { declared: usize, actual: usize },
    /// A literal references a variable outside `[1, num_vars]`.
    LiteralOutOfRange { clause: usize, literal: i32 },
    /// A clause with no literals; unsatisfiable by construction.
    EmptyClause { clause: usize },
}

impl fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ClauseCountMismatch { declared, actual } => {
                write!(f, "header declares {declared} clauses, found {actual}")
            }
            Self::LiteralOutOfRange { clause, literal } => {
                write!(f, "clause {clause}: literal {literal} out of declared range")
            }
            Self::EmptyClause { clause } => {
                write!(f, "clause {clause} is empty")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dimacs() {
        let input = r"
c This is a comment
p cnf 3 2
1 -2 0
2 3 0
";
        let cnf = Formula::parse(input).unwrap();
        assert_eq!(cnf.num_vars, 3);
        assert_eq!(cnf.num_clauses, 2);
        assert_eq!(cnf.clauses.len(), 2);
        assert_eq!(cnf.clauses[0], vec![1, -2]);
        assert_eq!(cnf.clauses[1], vec![2, 3]);
    }

    #[test]
    fn test_tokens_after_terminator_ignored() {
        let cnf = Formula::parse("p cnf 3 1\n1 2 0 3 -1\n").unwrap();
        assert_eq!(cnf.clauses, vec![vec![1, 2]]);
    }

    #[test]
    fn test_header_wrong_field_count() {
        let err = Formula::parse("p cnf 3\n").unwrap_err();
        assert!(matches!(err, Error::Format { line: 1, .. }));
    }

    #[test]
    fn test_header_bad_counts() {
        let err = Formula::parse("p cnf three 2\n").unwrap_err();
        assert!(matches!(err, Error::Format { line: 1, .. }));
    }

    #[test]
    fn test_non_integer_literal() {
        let err = Formula::parse("p cnf 2 1\n1 x 0\n").unwrap_err();
        assert!(matches!(err, Error::Format { line: 2, .. }));
    }

    #[test]
    fn test_clause_before_header() {
        let err = Formula::parse("1 2 0\np cnf 2 1\n").unwrap_err();
        assert!(matches!(err, Error::Format { line: 1, .. }));
    }

    #[test]
    fn test_header_counts_accepted_as_given() {
        // Declared counts are kept even when they disagree with reality.
        let cnf = Formula::parse("p cnf 5 9\n1 -2 0\n").unwrap();
        assert_eq!(cnf.num_clauses, 9);
        assert_eq!(cnf.clauses.len(), 1);
    }

    #[test]
    fn test_parse_idempotent() {
        let input = "c hi\np cnf 4 3\n1 2 -3 0\n-1 4 0\n2 0\n";
        let a = Formula::parse(input).unwrap();
        let b = Formula::parse(input).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_is_satisfied_by() {
        let cnf = Formula::parse("p cnf 2 2\n1 2 0\n-1 -2 0\n").unwrap();
        assert!(cnf.is_satisfied_by(&[true, false]));
        assert!(cnf.is_satisfied_by(&[false, true]));
        assert!(!cnf.is_satisfied_by(&[true, true]));
        assert!(!cnf.is_satisfied_by(&[false, false]));
    }

    #[test]
    fn test_validate_flags_mismatch_and_range() {
        let cnf = Formula::parse("p cnf 2 3\n1 5 0\n0\n").unwrap();
        let warnings = cnf.validate();
        assert!(warnings.contains(&ValidationWarning::ClauseCountMismatch {
            declared: 3,
            actual: 2,
        }));
        assert!(warnings.contains(&ValidationWarning::LiteralOutOfRange {
            clause: 0,
            literal: 5,
        }));
        assert!(warnings.contains(&ValidationWarning::EmptyClause { clause: 1 }));
    }

    #[test]
    fn test_validate_clean_formula() {
        let cnf = Formula::parse("p cnf 2 2\n1 2 0\n-1 -2 0\n").unwrap();
        assert!(cnf.validate().is_empty());
    }

    #[test]
    fn test_to_dimacs_roundtrip() {
        let cnf = Formula::parse("p cnf 3 2\n1 -2 0\n2 3 0\n").unwrap();
        let again = Formula::parse(&cnf.to_dimacs()).unwrap();
        assert_eq!(cnf.clauses, again.clauses);
        assert_eq!(cnf.num_vars, again.num_vars);
    }
}
