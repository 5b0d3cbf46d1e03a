use tracing::debug;

use crate::domain::Snapshot;

/// Keeps the first `max_frames` snapshots of a run in memory.
/// Encoding them (GIF, video...) is left to the caller.
#[derive(Clone, Debug, Default)]
pub struct FrameRecorder {
    frames: Vec<Snapshot>,
    max_frames: usize,
}

impl FrameRecorder {
    pub fn new(max_frames: usize) -> Self {
        Self {
            frames: Vec::with_capacity(max_frames),
            max_frames,
        }
    }

    /// Store a frame unless the cap is reached; returns whether it was kept
    pub fn record(&mut self, frame: Snapshot) -> bool {
        if self.is_full() {
            return false;
        }
        self.frames.push(frame);
        if self.is_full() {
            debug!(frames = self.frames.len(), "frame recorder full");
        }
        true
    }

    pub fn is_full(&self) -> bool {
        self.frames.len() >= self.max_frames
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn max_frames(&self) -> usize {
        self.max_frames
    }

    pub fn frames(&self) -> &[Snapshot] {
        &self.frames
    }

    /// Hand the recorded frames over, leaving the recorder empty
    pub fn take_frames(&mut self) -> Vec<Snapshot> {
        std::mem::take(&mut self.frames)
    }

    pub fn clear(&mut self) {
        self.frames.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(v: u8) -> Snapshot {
        Snapshot::from_rows(vec![vec![v]]).unwrap()
    }

    #[test]
    fn test_stops_at_cap() {
        let mut recorder = FrameRecorder::new(3);
        for v in 0..5 {
            recorder.record(frame(v));
        }
        assert_eq!(recorder.len(), 3);
        assert!(recorder.is_full());
        assert_eq!(recorder.frames()[2], frame(2));
        assert!(!recorder.record(frame(9)));
    }

    #[test]
    fn test_zero_cap_records_nothing() {
        let mut recorder = FrameRecorder::new(0);
        assert!(!recorder.record(frame(1)));
        assert!(recorder.is_empty());
    }

    #[test]
    fn test_take_and_clear() {
        let mut recorder = FrameRecorder::new(2);
        recorder.record(frame(1));
        assert_eq!(recorder.take_frames(), vec![frame(1)]);
        assert!(recorder.is_empty());

        recorder.record(frame(2));
        recorder.clear();
        assert!(recorder.is_empty());
        assert_eq!(recorder.max_frames(), 2);
    }
}
