use super::error::{AutomatonError, Result};

/// BrainCell is the fundamental unit of Brian's Brain.
/// Each cell is Off, On (firing) or Dying (refractory).
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash)]
#[repr(u8)]
pub enum BrainCell {
    #[default]
    Off = 0,
    On = 1,
    Dying = 2,
}

impl BrainCell {
    /// All three states in numeric order
    pub const ALL: [BrainCell; 3] = [BrainCell::Off, BrainCell::On, BrainCell::Dying];

    /// Check if the cell is currently firing
    pub const fn is_on(self) -> bool {
        matches!(self, BrainCell::On)
    }

    /// Numeric value used in snapshots (0, 1 or 2)
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Pure function to compute the next state:
    /// 1. Off cell with exactly 2 firing neighbors fires
    /// 2. On cell starts dying, whatever its neighbors
    /// 3. Dying cell switches off, whatever its neighbors
    pub const fn evolve(self, on_neighbors: u8) -> Self {
        match (self, on_neighbors) {
            (BrainCell::Off, 2) => BrainCell::On,
            (BrainCell::Off, _) => BrainCell::Off,
            (BrainCell::On, _) => BrainCell::Dying,
            (BrainCell::Dying, _) => BrainCell::Off,
        }
    }
}

impl TryFrom<u8> for BrainCell {
    type Error = AutomatonError;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(BrainCell::Off),
            1 => Ok(BrainCell::On),
            2 => Ok(BrainCell::Dying),
            other => Err(AutomatonError::InvalidCellValue(other)),
        }
    }
}

impl From<BrainCell> for u8 {
    fn from(cell: BrainCell) -> Self {
        cell.as_u8()
    }
}
