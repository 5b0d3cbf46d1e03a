mod cell;
mod error;
mod snapshot;
mod brian_grid;
mod rules;
mod elementary;
mod algorithm;

pub use cell::BrainCell;
pub use error::{AutomatonError, Result};
pub(crate) use error::check;
pub use snapshot::Snapshot;
pub use brian_grid::{BrianGrid, Population, DEFAULT_ON_PROBABILITY};
pub use rules::{RuleTable, named_rules, DEFAULT_RULE};
pub use elementary::{ElementaryRow, History};
pub use algorithm::Algorithm;
