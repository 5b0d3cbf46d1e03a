use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};

use super::{BrainConfig, FrameRecorder};
use crate::domain::{Algorithm, BrianGrid, Population, Result, Snapshot};

/// BrainSession orchestrates a Brian's Brain run.
/// The caller owns it and drives it one tick at a time.
pub struct BrainSession {
    pub grid: BrianGrid,
    pub algorithm: Algorithm,
    pub generation: u64,
    pub recorder: FrameRecorder,
    pub last_step_time_ms: f32, // Evolution performance metric
    config: BrainConfig,
    rng: StdRng,
}

impl BrainSession {
    /// Validate the config and draw the first random grid
    pub fn new(config: BrainConfig) -> Result<Self> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };
        let grid = BrianGrid::random_with_rng(config.rows, config.cols, config.on_probability, &mut rng)?;

        info!(
            rows = config.rows,
            cols = config.cols,
            on_probability = config.on_probability,
            algorithm = config.algorithm.name(),
            "brian's brain session started"
        );

        Ok(Self {
            grid,
            algorithm: config.algorithm,
            generation: 0,
            recorder: FrameRecorder::new(config.max_frames),
            last_step_time_ms: 0.0,
            config,
            rng,
        })
    }

    pub fn config(&self) -> &BrainConfig {
        &self.config
    }

    /// Set the stepping algorithm
    pub fn set_algorithm(&mut self, algorithm: Algorithm) {
        self.algorithm = algorithm;
    }

    /// Advance one generation and record the resulting frame
    pub fn tick(&mut self) -> &BrianGrid {
        let start = std::time::Instant::now();
        self.grid = self.algorithm.step_brain(&self.grid);
        self.last_step_time_ms = start.elapsed().as_secs_f32() * 1000.0;
        self.generation += 1;

        self.recorder.record(self.grid.snapshot());
        debug!(generation = self.generation, elapsed_ms = self.last_step_time_ms, "tick");
        &self.grid
    }

    /// Advance `n` generations
    pub fn run(&mut self, n: u64) -> &BrianGrid {
        for _ in 0..n {
            self.tick();
        }
        &self.grid
    }

    /// Draw a fresh random grid and forget the recorded frames
    pub fn restart(&mut self) -> Result<()> {
        self.grid = BrianGrid::random_with_rng(
            self.config.rows,
            self.config.cols,
            self.config.on_probability,
            &mut self.rng,
        )?;
        self.recorder.clear();
        self.generation = 0;
        info!("simulation restarted");
        Ok(())
    }

    pub fn population(&self) -> Population {
        self.grid.population()
    }

    pub fn snapshot(&self) -> Snapshot {
        self.grid.snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AutomatonError, BrainCell};

    fn seeded(seed: u64) -> BrainSession {
        BrainSession::new(BrainConfig::default().with_size(20, 24).with_seed(seed)).unwrap()
    }

    #[test]
    fn test_invalid_config_rejected() {
        let result = BrainSession::new(BrainConfig::default().with_on_probability(-1.0));
        assert!(matches!(result, Err(AutomatonError::InvalidProbability(_))));
    }

    #[test]
    fn test_seed_makes_runs_reproducible() {
        let mut a = seeded(11);
        let mut b = seeded(11);
        assert_eq!(a.grid, b.grid);
        a.run(10);
        b.run(10);
        assert_eq!(a.grid, b.grid);
    }

    #[test]
    fn test_tick_matches_engine_step() {
        let mut session = seeded(5);
        let expected = session.grid.step();
        session.tick();
        assert_eq!(session.grid, expected);
        assert_eq!(session.generation, 1);
    }

    #[test]
    fn test_parallel_session_matches_serial() {
        let mut serial = seeded(8);
        let mut parallel = seeded(8);
        parallel.set_algorithm(Algorithm::Parallel);
        serial.run(6);
        parallel.run(6);
        assert_eq!(serial.grid, parallel.grid);
    }

    #[test]
    fn test_recorder_keeps_first_frames() {
        let config = BrainConfig::default()
            .with_size(8, 8)
            .with_max_frames(3)
            .with_seed(1);
        let mut session = BrainSession::new(config).unwrap();

        session.tick();
        let first = session.snapshot();
        session.run(5);

        assert_eq!(session.recorder.len(), 3);
        assert_eq!(session.recorder.frames()[0], first);
    }

    #[test]
    fn test_restart_resets_run() {
        let mut session = seeded(3);
        session.run(4);
        session.restart().unwrap();

        assert_eq!(session.generation, 0);
        assert!(session.recorder.is_empty());
        assert_eq!(session.grid.dimensions(), (20, 24));
        assert!(session.grid.iter_cells().all(|(_, _, c)| c != BrainCell::Dying));
    }
}
