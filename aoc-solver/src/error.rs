//! Error types for the solver library

use thiserror::Error;

/// Error type for parsing input data
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Input format doesn't match expected structure
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
    /// Required data is missing from input
    #[error("Missing data: {0}")]
    MissingData(String),
    /// A single input line could not be parsed
    #[error("Invalid line {line} ({content:?}): {reason}")]
    InvalidLine {
        /// 1-based line number
        line: usize,
        /// The offending line, as read
        content: String,
        /// What was wrong with it
        reason: String,
    },
    /// Other parsing errors
    #[error("Parse error: {0}")]
    Other(String),
}

impl ParseError {
    /// Build an [`ParseError::InvalidLine`] from a 0-based line index
    pub fn invalid_line(index: usize, content: &str, reason: impl ToString) -> Self {
        ParseError::InvalidLine {
            line: index + 1,
            content: content.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Error type for solving a specific part
#[derive(Debug, Error)]
pub enum SolveError {
    /// The requested part number is out of range (only parts 1 and 2 exist)
    #[error("Part {0} is out of range")]
    PartOutOfRange(u8),
    /// The parsed input admits no answer
    #[error("Unsolvable input: {0}")]
    Unsolvable(String),
    /// An error occurred while solving the part
    #[error("Solve failed: {0}")]
    SolveFailed(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl SolveError {
    /// Wrap a day-specific error
    pub fn failed<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        SolveError::SolveFailed(Box::new(error))
    }
}

/// Error type for solver operations
#[derive(Debug, Error)]
pub enum SolverError {
    /// No solver registered for the given day
    #[error("No solver registered for day {0}")]
    NotFound(u8),
    /// The day lies outside 1..=25
    #[error("Day {0} is outside the range [1, 25]")]
    InvalidDay(u8),
    /// Error occurred during parsing
    #[error("Parse error: {0}")]
    ParseError(#[from] ParseError),
    /// Error occurred during solving
    #[error("Solve error: {0}")]
    SolveError(#[from] SolveError),
}

/// Error type for registration failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    /// Attempted to register a solver for a day that already has one
    #[error("Duplicate solver registration for day {0}")]
    DuplicateSolver(u8),
    /// The day lies outside 1..=25
    #[error("Cannot register a solver for day {0}: days run from 1 to 25")]
    InvalidDay(u8),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_line_is_one_based() {
        let err = ParseError::invalid_line(0, "1,2", "expected 3 coordinates");
        assert_eq!(
            err,
            ParseError::InvalidLine {
                line: 1,
                content: "1,2".to_string(),
                reason: "expected 3 coordinates".to_string(),
            }
        );
        assert_eq!(
            err.to_string(),
            "Invalid line 1 (\"1,2\"): expected 3 coordinates"
        );
    }

    #[test]
    fn failed_keeps_source() {
        let io = std::io::Error::other("boom");
        let err = SolveError::failed(io);
        assert!(std::error::Error::source(&err).is_some());
        assert_eq!(err.to_string(), "Solve failed: boom");
    }
}
