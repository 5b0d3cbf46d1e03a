// Domain layer - Stepping engines, pure and deterministic
pub mod domain;

// Application layer - Caller-owned sessions and run configuration
pub mod application;

// Re-exports for convenience
pub use domain::{
    Algorithm, AutomatonError, BrainCell, BrianGrid, ElementaryRow, History, RuleTable, Snapshot,
};
pub use application::{BrainConfig, BrainSession, ElementaryConfig, ElementarySession, FrameRecorder};
