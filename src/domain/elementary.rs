//! One-dimensional binary automaton and its space-time history.
//!
//! Rows wrap around at both ends: the left neighbor of cell 0 is the last
//! cell and vice versa. This differs from Brian's Brain, which clips.

use rayon::prelude::*;

use super::error::{AutomatonError, Result};
use super::{RuleTable, Snapshot};

/// A single generation of an elementary automaton
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ElementaryRow {
    cells: Vec<u8>,
}

impl ElementaryRow {
    /// Row of `length` zeros with a single 1 at `length / 2`
    pub fn seed(length: usize) -> Result<Self> {
        if length == 0 {
            return Err(AutomatonError::EmptyRow);
        }
        let mut cells = vec![0; length];
        cells[length / 2] = 1;
        Ok(Self { cells })
    }

    /// Row from explicit bits; every value must be 0 or 1
    pub fn from_bits(cells: Vec<u8>) -> Result<Self> {
        if cells.is_empty() {
            return Err(AutomatonError::EmptyRow);
        }
        if let Some(&bad) = cells.iter().find(|&&v| v > 1) {
            return Err(AutomatonError::InvalidCellValue(bad));
        }
        Ok(Self { cells })
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false: rows are built non-empty
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn get(&self, idx: usize) -> Option<u8> {
        self.cells.get(idx).copied()
    }

    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// Number of set bits
    pub fn count_ones(&self) -> usize {
        self.cells.iter().filter(|&&v| v == 1).count()
    }

    /// Output of cell `idx` with cyclic neighbors
    #[inline]
    fn next_cell(&self, idx: usize, table: &RuleTable) -> u8 {
        let len = self.cells.len();
        let left = self.cells[(idx + len - 1) % len];
        let right = self.cells[(idx + 1) % len];
        table.apply(left, self.cells[idx], right)
    }

    /// Next generation under `table` (serial)
    pub fn step(&self, table: &RuleTable) -> Self {
        let cells = (0..self.cells.len())
            .map(|idx| self.next_cell(idx, table))
            .collect();
        Self { cells }
    }

    /// Next generation computed with rayon; same output as `step`
    pub fn step_parallel(&self, table: &RuleTable) -> Self {
        let cells = (0..self.cells.len())
            .into_par_iter()
            .map(|idx| self.next_cell(idx, table))
            .collect();
        Self { cells }
    }
}

/// Space-time diagram: row 0 is the seed, row k is row k-1 stepped once.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct History {
    rule: RuleTable,
    rows: Vec<ElementaryRow>,
}

impl History {
    /// Build `total_rows` generations of width `row_length` for a rule code
    pub fn build(rule: u32, total_rows: usize, row_length: usize) -> Result<Self> {
        let table = RuleTable::from_code(rule)?;
        Self::build_with_table(table, total_rows, row_length)
    }

    /// Same as `build` with an already derived table
    pub fn build_with_table(table: RuleTable, total_rows: usize, row_length: usize) -> Result<Self> {
        Self::build_with_stepper(table, total_rows, row_length, ElementaryRow::step)
    }

    /// Build with a caller-chosen row stepper (serial or parallel)
    pub fn build_with_stepper<F>(
        table: RuleTable,
        total_rows: usize,
        row_length: usize,
        step: F,
    ) -> Result<Self>
    where
        F: Fn(&ElementaryRow, &RuleTable) -> ElementaryRow,
    {
        if total_rows == 0 || row_length == 0 {
            return Err(AutomatonError::InvalidDimensions {
                rows: total_rows,
                cols: row_length,
            });
        }

        let mut rows = Vec::with_capacity(total_rows);
        rows.push(ElementaryRow::seed(row_length)?);
        while rows.len() < total_rows {
            let next = step(&rows[rows.len() - 1], &table);
            rows.push(next);
        }

        Ok(Self { rule: table, rows })
    }

    pub fn rule(&self) -> RuleTable {
        self.rule
    }

    /// Dimensions as (rows, row length)
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows.len(), self.rows[0].len())
    }

    pub fn rows(&self) -> &[ElementaryRow] {
        &self.rows
    }

    pub fn row(&self, idx: usize) -> Option<&ElementaryRow> {
        self.rows.get(idx)
    }

    /// Last generation computed
    pub fn last(&self) -> &ElementaryRow {
        &self.rows[self.rows.len() - 1]
    }

    /// Total set bits across all generations
    pub fn live_cells(&self) -> usize {
        self.rows.iter().map(ElementaryRow::count_ones).sum()
    }

    /// Full history as plain integers
    pub fn snapshot(&self) -> Snapshot {
        let (rows, cols) = self.dimensions();
        Snapshot {
            rows,
            cols,
            cells: self.rows.iter().map(|r| r.cells.clone()).collect(),
        }
    }

    /// Centered crop of every row, `width` columns wide.
    ///
    /// The simulated rows are usually wider than what is shown so that
    /// wrap-around effects stay out of view. A `width` at least as large
    /// as the row returns the whole row.
    pub fn window(&self, width: usize) -> Snapshot {
        let (rows, len) = self.dimensions();
        let width = width.min(len);
        let offset = (len - width) / 2;

        Snapshot {
            rows,
            cols: width,
            cells: self
                .rows
                .iter()
                .map(|r| r.cells[offset..offset + width].to_vec())
                .collect(),
        }
    }
}
