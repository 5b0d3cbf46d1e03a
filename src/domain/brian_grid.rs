use rand::Rng;
use rayon::prelude::*;

use super::error::{check, AutomatonError, Result};
use super::{BrainCell, Snapshot};

/// Default chance that a freshly created cell fires
pub const DEFAULT_ON_PROBABILITY: f64 = 0.2;

/// Cell counts per state
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Population {
    pub off: usize,
    pub on: usize,
    pub dying: usize,
}

/// BrianGrid manages the 2D Brian's Brain grid.
/// Evolution is functional: every step reads this grid and writes a new one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BrianGrid {
    rows: usize,
    cols: usize,
    cells: Vec<BrainCell>,
}

impl BrianGrid {
    /// Create a grid with every cell off
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        check::dimensions(rows, cols)?;
        Ok(Self {
            rows,
            cols,
            cells: vec![BrainCell::Off; rows * cols],
        })
    }

    /// Create a random grid using the thread-local generator
    pub fn random(rows: usize, cols: usize, on_probability: f64) -> Result<Self> {
        Self::random_with_rng(rows, cols, on_probability, &mut rand::rng())
    }

    /// Create a random grid where each cell independently fires with
    /// `on_probability`. No cell starts dying.
    pub fn random_with_rng<R: Rng + ?Sized>(
        rows: usize,
        cols: usize,
        on_probability: f64,
        rng: &mut R,
    ) -> Result<Self> {
        check::dimensions(rows, cols)?;
        check::probability(on_probability)?;

        let cells = (0..rows * cols)
            .map(|_| {
                if rng.random_bool(on_probability) {
                    BrainCell::On
                } else {
                    BrainCell::Off
                }
            })
            .collect();

        Ok(Self { rows, cols, cells })
    }

    /// Rebuild a grid from a snapshot, validating shape and values
    pub fn from_snapshot(snapshot: &Snapshot) -> Result<Self> {
        let snapshot = Snapshot::from_rows(snapshot.cells.clone())?;
        check::dimensions(snapshot.rows, snapshot.cols)?;

        let cells = snapshot
            .cells
            .iter()
            .flatten()
            .map(|&v| BrainCell::try_from(v))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            rows: snapshot.rows,
            cols: snapshot.cols,
            cells,
        })
    }

    /// Get grid dimensions as (rows, cols)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Convert 2D coordinates to 1D index
    const fn get_index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Get cell at position (with bounds checking)
    pub fn get(&self, row: usize, col: usize) -> Option<BrainCell> {
        (row < self.rows && col < self.cols).then(|| self.cells[self.get_index(row, col)])
    }

    /// Set cell at position; out-of-bounds writes are ignored
    pub fn set(&mut self, row: usize, col: usize, cell: BrainCell) {
        if row < self.rows && col < self.cols {
            let idx = self.get_index(row, col);
            self.cells[idx] = cell;
        }
    }

    /// Count firing neighbors in the Moore neighborhood.
    /// Edges are clipped, not wrapped: corner cells see only 3 neighbors.
    fn count_on_neighbors(&self, row: usize, col: usize) -> u8 {
        let row_range = row.saturating_sub(1)..=(row + 1).min(self.rows - 1);
        let col_range = col.saturating_sub(1)..=(col + 1).min(self.cols - 1);

        row_range
            .flat_map(|r| col_range.clone().map(move |c| (r, c)))
            .filter(|&(r, c)| (r, c) != (row, col))
            .filter(|&(r, c)| self.cells[self.get_index(r, c)].is_on())
            .count() as u8
    }

    /// Next state of the cell at flat index `idx`
    fn next_cell(&self, idx: usize) -> BrainCell {
        let (row, col) = (idx / self.cols, idx % self.cols);
        self.cells[idx].evolve(self.count_on_neighbors(row, col))
    }

    /// Pure functional evolution - returns new grid (serial)
    pub fn step(&self) -> Self {
        let cells = (0..self.cells.len()).map(|idx| self.next_cell(idx)).collect();

        Self {
            rows: self.rows,
            cols: self.cols,
            cells,
        }
    }

    /// Parallel evolution using rayon.
    /// Identical output to `step`; worth it on large grids.
    pub fn step_parallel(&self) -> Self {
        let cells = (0..self.cells.len())
            .into_par_iter()
            .map(|idx| self.next_cell(idx))
            .collect();

        Self {
            rows: self.rows,
            cols: self.cols,
            cells,
        }
    }

    /// Count cells in each state
    pub fn population(&self) -> Population {
        self.cells.iter().fold(Population::default(), |mut p, cell| {
            match cell {
                BrainCell::Off => p.off += 1,
                BrainCell::On => p.on += 1,
                BrainCell::Dying => p.dying += 1,
            }
            p
        })
    }

    /// Iterate over all cells with their positions
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, BrainCell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, &cell)| (idx / self.cols, idx % self.cols, cell))
    }

    /// Row-major copy of the grid as plain integers
    pub fn snapshot(&self) -> Snapshot {
        let cells = self
            .cells
            .chunks(self.cols)
            .map(|row| row.iter().map(|c| c.as_u8()).collect())
            .collect();

        Snapshot {
            rows: self.rows,
            cols: self.cols,
            cells,
        }
    }
}

impl TryFrom<&Snapshot> for BrianGrid {
    type Error = AutomatonError;

    fn try_from(snapshot: &Snapshot) -> Result<Self> {
        Self::from_snapshot(snapshot)
    }
}
