//! Algorithm enum for selecting the stepping implementation.
//!
//! Both engines offer a serial and a rayon-parallel step with identical
//! output; sessions dispatch on this value.

use super::{BrianGrid, ElementaryRow, History, Result, RuleTable};

/// Available stepping strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Algorithm {
    /// Cell by cell on the calling thread
    #[default]
    Serial,
    /// Cells split across the rayon thread pool
    Parallel,
}

impl Algorithm {
    /// Get all available algorithms
    pub fn all() -> Vec<Algorithm> {
        vec![Algorithm::Serial, Algorithm::Parallel]
    }

    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Serial => "Serial",
            Algorithm::Parallel => "Parallel",
        }
    }

    /// Short description for tooltips/info
    pub fn description(&self) -> &'static str {
        match self {
            Algorithm::Serial => "One cell at a time, calling thread",
            Algorithm::Parallel => "Rayon work-stealing over cells",
        }
    }

    /// Parse a name as printed by `name`, ignoring case
    pub fn from_name(name: &str) -> Option<Algorithm> {
        Self::all()
            .into_iter()
            .find(|a| a.name().eq_ignore_ascii_case(name))
    }

    /// Advance a Brian's Brain grid one tick
    pub fn step_brain(&self, grid: &BrianGrid) -> BrianGrid {
        match self {
            Algorithm::Serial => grid.step(),
            Algorithm::Parallel => grid.step_parallel(),
        }
    }

    /// Advance an elementary row one generation
    pub fn step_row(&self, row: &ElementaryRow, table: &RuleTable) -> ElementaryRow {
        match self {
            Algorithm::Serial => row.step(table),
            Algorithm::Parallel => row.step_parallel(table),
        }
    }

    /// Build a full history, stepping each row with this algorithm
    pub fn build_history(&self, table: RuleTable, total_rows: usize, row_length: usize) -> Result<History> {
        History::build_with_stepper(table, total_rows, row_length, |row, t| self.step_row(row, t))
    }
}
