use serde::{Deserialize, Serialize};

use super::error::{AutomatonError, Result};

/// Plain rectangular copy of an engine's state.
///
/// This is what collaborators render or export: row-major small integers,
/// `0..=2` for Brian's Brain and `0..=1` for elementary rows and histories.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub rows: usize,
    pub cols: usize,
    pub cells: Vec<Vec<u8>>,
}

impl Snapshot {
    /// Build a snapshot from nested rows, checking they are all the same width
    pub fn from_rows(cells: Vec<Vec<u8>>) -> Result<Self> {
        let rows = cells.len();
        let cols = cells.first().map_or(0, Vec::len);
        if let Some((row, r)) = cells.iter().enumerate().find(|(_, r)| r.len() != cols) {
            return Err(AutomatonError::RaggedSnapshot {
                row,
                expected: cols,
                got: r.len(),
            });
        }
        Ok(Self { rows, cols, cells })
    }

    /// Dimensions as (rows, cols)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Value at (row, col), if inside the snapshot
    pub fn get(&self, row: usize, col: usize) -> Option<u8> {
        self.cells.get(row)?.get(col).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows() {
        let snap = Snapshot::from_rows(vec![vec![0, 1], vec![2, 0]]).unwrap();
        assert_eq!(snap.dimensions(), (2, 2));
        assert_eq!(snap.get(1, 0), Some(2));
        assert_eq!(snap.get(2, 0), None);
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let err = Snapshot::from_rows(vec![vec![0, 1], vec![1]]).unwrap_err();
        assert_eq!(
            err,
            AutomatonError::RaggedSnapshot { row: 1, expected: 2, got: 1 }
        );
    }

    #[test]
    fn test_json_shape() {
        let snap = Snapshot::from_rows(vec![vec![1, 0, 2]]).unwrap();
        let json = serde_json::to_string(&snap).unwrap();
        assert_eq!(json, r#"{"rows":1,"cols":3,"cells":[[1,0,2]]}"#);
    }
}
