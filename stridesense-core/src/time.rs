//! Time handling for sample timestamps
//!
//! The pipeline itself is timestamp-agnostic: every transition is driven by
//! sample arrival, not wall-clock time. Timestamps exist so that sources can
//! stamp samples for ordering diagnostics and so that updates carry the
//! moment they were caused. Sources guarantee non-decreasing timestamps per
//! stream and nothing across streams; stamping real samples against a wall
//! clock is the host platform's job.

/// Timestamp in milliseconds since device boot (monotonic)
pub type Timestamp = u64;

/// Source of timestamps for sample stamping
pub trait TimeSource {
    /// Get current timestamp in milliseconds
    fn now(&self) -> Timestamp;
}

/// Fixed time source for tests and replay
#[derive(Debug, Clone)]
pub struct FixedTime {
    timestamp: Timestamp,
}

impl FixedTime {
    /// Create a fixed clock starting at `timestamp`
    pub fn new(timestamp: Timestamp) -> Self {
        Self { timestamp }
    }

    /// Jump to an absolute timestamp
    pub fn set(&mut self, timestamp: Timestamp) {
        self.timestamp = timestamp;
    }

    /// Advance the clock by `ms` milliseconds
    pub fn advance(&mut self, ms: u64) {
        self.timestamp += ms;
    }
}

impl TimeSource for FixedTime {
    fn now(&self) -> Timestamp {
        self.timestamp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_time_advances() {
        let mut time = FixedTime::new(1000);
        assert_eq!(time.now(), 1000);

        time.advance(500);
        assert_eq!(time.now(), 1500);

        time.set(10_000);
        assert_eq!(time.now(), 10_000);
    }
}
