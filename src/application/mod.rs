mod config;
mod recorder;
mod brain_session;
mod elementary_session;

pub use config::{BrainConfig, ElementaryConfig};
pub use recorder::FrameRecorder;
pub use brain_session::BrainSession;
pub use elementary_session::ElementarySession;
