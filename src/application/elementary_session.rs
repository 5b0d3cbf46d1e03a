use tracing::{debug, info};

use super::ElementaryConfig;
use crate::domain::{Algorithm, History, Result, RuleTable, Snapshot};

/// ElementarySession holds the current rule and its space-time history.
/// Any rule change rebuilds the history from a fresh seed.
pub struct ElementarySession {
    config: ElementaryConfig,
    table: RuleTable,
    history: History,
}

impl ElementarySession {
    /// Validate the config and build the first history
    pub fn new(config: ElementaryConfig) -> Result<Self> {
        config.validate()?;
        let table = RuleTable::from_code(config.rule)?;
        let history = Self::build(&config, table)?;

        info!(
            rule = table.code(),
            rows = config.total_rows,
            row_length = config.row_length,
            "elementary session started"
        );

        Ok(Self { config, table, history })
    }

    fn build(config: &ElementaryConfig, table: RuleTable) -> Result<History> {
        let start = std::time::Instant::now();
        let history = config
            .algorithm
            .build_history(table, config.total_rows, config.row_length)?;
        debug!(
            rule = table.code(),
            elapsed_ms = start.elapsed().as_secs_f32() * 1000.0,
            "history built"
        );
        Ok(history)
    }

    pub fn config(&self) -> &ElementaryConfig {
        &self.config
    }

    pub fn rule(&self) -> u8 {
        self.table.code()
    }

    pub fn table(&self) -> &RuleTable {
        &self.table
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Switch to another rule code (0..=255)
    pub fn set_rule(&mut self, rule: u32) -> Result<()> {
        let table = RuleTable::from_code(rule)?;
        self.apply_table(table)
    }

    /// Move to the next rule, wrapping 255 to 0
    pub fn increment_rule(&mut self) -> Result<()> {
        self.apply_table(self.table.next())
    }

    /// Move to the previous rule, wrapping 0 to 255
    pub fn decrement_rule(&mut self) -> Result<()> {
        self.apply_table(self.table.previous())
    }

    /// Set the algorithm used for future rebuilds
    pub fn set_algorithm(&mut self, algorithm: Algorithm) {
        self.config.algorithm = algorithm;
    }

    fn apply_table(&mut self, table: RuleTable) -> Result<()> {
        self.history = Self::build(&self.config, table)?;
        self.table = table;
        self.config.rule = table.code() as u32;
        info!(rule = table.code(), "rule changed");
        Ok(())
    }

    /// The whole simulated history
    pub fn snapshot(&self) -> Snapshot {
        self.history.snapshot()
    }

    /// The centered columns meant for display
    pub fn visible(&self) -> Snapshot {
        self.history.window(self.config.visible_width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::AutomatonError;

    fn small() -> ElementaryConfig {
        ElementaryConfig::default().with_rows(20).with_visible_width(30)
    }

    #[test]
    fn test_default_session_is_rule_110() {
        let session = ElementarySession::new(small()).unwrap();
        assert_eq!(session.rule(), 110);
        assert_eq!(session.history().dimensions(), (20, 40));
        assert_eq!(session.visible().dimensions(), (20, 30));
    }

    #[test]
    fn test_rule_change_rebuilds_history() {
        let mut session = ElementarySession::new(small()).unwrap();
        session.set_rule(30).unwrap();
        assert_eq!(session.rule(), 30);
        assert_eq!(session.history(), &History::build(30, 20, 40).unwrap());
    }

    #[test]
    fn test_invalid_rule_leaves_state_untouched() {
        let mut session = ElementarySession::new(small()).unwrap();
        let before = session.snapshot();
        assert_eq!(session.set_rule(300), Err(AutomatonError::RuleOutOfRange(300)));
        assert_eq!(session.rule(), 110);
        assert_eq!(session.snapshot(), before);
    }

    #[test]
    fn test_increment_and_decrement_wrap() {
        let mut session = ElementarySession::new(small().with_rule(255)).unwrap();
        session.increment_rule().unwrap();
        assert_eq!(session.rule(), 0);
        session.decrement_rule().unwrap();
        assert_eq!(session.rule(), 255);
        assert_eq!(session.config().rule, 255);
    }

    #[test]
    fn test_parallel_build_matches_serial() {
        let serial = ElementarySession::new(small()).unwrap();
        let parallel = ElementarySession::new(small().with_algorithm(Algorithm::Parallel)).unwrap();
        assert_eq!(serial.history(), parallel.history());
    }
}
