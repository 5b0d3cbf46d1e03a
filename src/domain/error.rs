//! Error types for the stepping engines.
//!
//! Every failure is a rejected argument: the engines do no I/O, so an
//! operation either succeeds or fails its precondition check before any
//! state is touched.

use thiserror::Error;

/// Errors returned by the automaton constructors and validators.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AutomatonError {
    /// Grid dimensions must both be positive.
    #[error("invalid dimensions: {rows}x{cols} (rows and cols must be > 0)")]
    InvalidDimensions {
        /// Requested row count.
        rows: usize,
        /// Requested column count.
        cols: usize,
    },

    /// Probability outside `[0, 1]` (or NaN).
    #[error("invalid probability: {0} (expected 0.0..=1.0)")]
    InvalidProbability(f64),

    /// Rule code outside `0..=255`.
    #[error("rule {0} out of range (expected 0..=255)")]
    RuleOutOfRange(u32),

    /// Row length must be positive.
    #[error("row length must be > 0")]
    EmptyRow,

    /// A cell value no state maps to.
    #[error("invalid cell value: {0}")]
    InvalidCellValue(u8),

    /// Snapshot rows of unequal length.
    #[error("ragged snapshot: row {row} has {got} cells, expected {expected}")]
    RaggedSnapshot {
        /// Index of the offending row.
        row: usize,
        /// Width of the first row.
        expected: usize,
        /// Width of the offending row.
        got: usize,
    },
}

impl AutomatonError {
    /// Whether this is an invalid-argument failure.
    ///
    /// Always true today; collaborators mapping errors onto their own
    /// taxonomy can rely on it rather than matching every variant.
    pub fn is_invalid_argument(&self) -> bool {
        match self {
            AutomatonError::InvalidDimensions { .. }
            | AutomatonError::InvalidProbability(_)
            | AutomatonError::RuleOutOfRange(_)
            | AutomatonError::EmptyRow
            | AutomatonError::InvalidCellValue(_)
            | AutomatonError::RaggedSnapshot { .. } => true,
        }
    }
}

/// Result alias for engine operations.
pub type Result<T> = std::result::Result<T, AutomatonError>;

/// Precondition checks shared by constructors and configs.
pub(crate) mod check {
    use super::{AutomatonError, Result};

    /// Reject zero-sized grids.
    pub fn dimensions(rows: usize, cols: usize) -> Result<()> {
        if rows == 0 || cols == 0 {
            return Err(AutomatonError::InvalidDimensions { rows, cols });
        }
        Ok(())
    }

    /// Reject probabilities outside `[0, 1]`, NaN included.
    pub fn probability(p: f64) -> Result<()> {
        if !(0.0..=1.0).contains(&p) {
            return Err(AutomatonError::InvalidProbability(p));
        }
        Ok(())
    }

    /// Reject rule codes above 255.
    pub fn rule(code: u32) -> Result<()> {
        if code > u8::MAX as u32 {
            return Err(AutomatonError::RuleOutOfRange(code));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_check() {
        assert!(check::dimensions(1, 1).is_ok());
        assert_eq!(
            check::dimensions(0, 5),
            Err(AutomatonError::InvalidDimensions { rows: 0, cols: 5 })
        );
        assert!(check::dimensions(5, 0).is_err());
    }

    #[test]
    fn test_probability_check() {
        assert!(check::probability(0.0).is_ok());
        assert!(check::probability(1.0).is_ok());
        assert!(check::probability(-0.1).is_err());
        assert!(check::probability(1.5).is_err());
        assert!(check::probability(f64::NAN).is_err());
    }

    #[test]
    fn test_rule_check() {
        assert!(check::rule(0).is_ok());
        assert!(check::rule(255).is_ok());
        assert_eq!(check::rule(256), Err(AutomatonError::RuleOutOfRange(256)));
    }

    #[test]
    fn test_messages() {
        let err = AutomatonError::RuleOutOfRange(300);
        assert_eq!(err.to_string(), "rule 300 out of range (expected 0..=255)");
        assert!(err.is_invalid_argument());
    }
}
