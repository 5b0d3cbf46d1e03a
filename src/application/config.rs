//! Run parameters for both simulations.
//!
//! Defaults reproduce the classic desktop setup: a 600px Brian's Brain window
//! of 10px cells, and an 800x600 elementary view of 4px cells simulated on a
//! row twice as wide as the history is tall.

use crate::domain::{check, Algorithm, Result, DEFAULT_ON_PROBABILITY, DEFAULT_RULE};

/// Parameters for a Brian's Brain run
#[derive(Clone, Debug, PartialEq)]
pub struct BrainConfig {
    pub rows: usize,
    pub cols: usize,
    pub on_probability: f64,
    /// Snapshots kept by the frame recorder; later ticks are not recorded
    pub max_frames: usize,
    pub algorithm: Algorithm,
    /// Fixed seed for reproducible runs; `None` draws one from the OS
    pub seed: Option<u64>,
}

impl Default for BrainConfig {
    fn default() -> Self {
        Self {
            rows: 60,
            cols: 60,
            on_probability: DEFAULT_ON_PROBABILITY,
            max_frames: 100,
            algorithm: Algorithm::default(),
            seed: None,
        }
    }
}

impl BrainConfig {
    pub fn with_size(mut self, rows: usize, cols: usize) -> Self {
        self.rows = rows;
        self.cols = cols;
        self
    }

    pub fn with_on_probability(mut self, on_probability: f64) -> Self {
        self.on_probability = on_probability;
        self
    }

    pub fn with_max_frames(mut self, max_frames: usize) -> Self {
        self.max_frames = max_frames;
        self
    }

    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check every parameter before a grid is built
    pub fn validate(&self) -> Result<()> {
        check::dimensions(self.rows, self.cols)?;
        check::probability(self.on_probability)
    }
}

/// Parameters for an elementary automaton run
#[derive(Clone, Debug, PartialEq)]
pub struct ElementaryConfig {
    pub rule: u32,
    /// Generations in the history, seed included
    pub total_rows: usize,
    /// Simulated row width
    pub row_length: usize,
    /// Columns handed to the collaborator, centered in the row
    pub visible_width: usize,
    pub algorithm: Algorithm,
}

impl Default for ElementaryConfig {
    fn default() -> Self {
        Self {
            rule: DEFAULT_RULE as u32,
            total_rows: 150,
            row_length: 300,
            visible_width: 200,
            algorithm: Algorithm::default(),
        }
    }
}

impl ElementaryConfig {
    pub fn with_rule(mut self, rule: u32) -> Self {
        self.rule = rule;
        self
    }

    /// History height; the row is simulated twice as wide
    pub fn with_rows(mut self, total_rows: usize) -> Self {
        self.total_rows = total_rows;
        self.row_length = total_rows * 2;
        self
    }

    pub fn with_row_length(mut self, row_length: usize) -> Self {
        self.row_length = row_length;
        self
    }

    pub fn with_visible_width(mut self, visible_width: usize) -> Self {
        self.visible_width = visible_width;
        self
    }

    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Check every parameter before a history is built
    pub fn validate(&self) -> Result<()> {
        check::rule(self.rule)?;
        check::dimensions(self.total_rows, self.row_length)?;
        check::dimensions(self.total_rows, self.visible_width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::AutomatonError;

    #[test]
    fn test_defaults_are_valid() {
        assert!(BrainConfig::default().validate().is_ok());
        assert!(ElementaryConfig::default().validate().is_ok());
    }

    #[test]
    fn test_brain_validation() {
        let config = BrainConfig::default().with_size(0, 10);
        assert_eq!(
            config.validate(),
            Err(AutomatonError::InvalidDimensions { rows: 0, cols: 10 })
        );

        let config = BrainConfig::default().with_on_probability(2.0);
        assert_eq!(config.validate(), Err(AutomatonError::InvalidProbability(2.0)));
    }

    #[test]
    fn test_elementary_validation() {
        let config = ElementaryConfig::default().with_rule(256);
        assert_eq!(config.validate(), Err(AutomatonError::RuleOutOfRange(256)));

        let config = ElementaryConfig::default().with_visible_width(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rows_doubles_width() {
        let config = ElementaryConfig::default().with_rows(40);
        assert_eq!((config.total_rows, config.row_length), (40, 80));
    }
}
