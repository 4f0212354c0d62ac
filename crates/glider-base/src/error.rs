//! Unified error types for glider.

use thiserror::Error;

/// The main error type for glider operations.
///
/// Exhausting a flip budget without finding a solution is *not* an
/// error and is never represented here; backends report that outcome
/// as data.
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed DIMACS text.
    #[error("malformed DIMACS (line {line}): {message}")]
    Format {
        /// 1-based line number of the offending line.
        line: usize,
        /// What went wrong on that line.
        message: String,
    },

    /// Problem source unreadable.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The accelerator rejected the given problem.
    #[error("accelerator rejected problem: {0}")]
    Init(String),

    /// Backend-specific failure during search.
    #[error("solve failed: {0}")]
    Solve(String),

    /// `metrics` was called before a successful `solve`.
    #[error("metrics not yet computed; call solve first")]
    MetricsNotReady,
}

impl Error {
    /// Builds a format error for the given line.
    pub fn format(line: usize, message: impl Into<String>) -> Self {
        Self::Format {
            line,
            message: message.into(),
        }
    }
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, Error>;
