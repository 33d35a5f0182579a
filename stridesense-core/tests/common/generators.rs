//! Deterministic sample-trace generators
//!
//! Builds sample sequences that mimic how the two hardware feeds actually
//! behave: the accelerometer streams steadily at a fixed rate while the
//! step counter delivers sparse, batched cumulative readings. Everything is
//! deterministic so failures replay exactly.

use stridesense_core::{
    events::SampleEvent,
    time::{FixedTime, TimeSource, Timestamp},
};

/// Accelerometer cadence used by the traces (50 Hz)
pub const ACCEL_INTERVAL_MS: u64 = 20;

/// Builds interleaved sensor traces with a running clock
pub struct MotionTraceGenerator {
    clock: FixedTime,
    /// Raw hardware counter value, survives across segments like the real
    /// device-lifetime counter
    counter: f32,
    /// Alternating magnitude state for jitter synthesis
    high_phase: bool,
}

impl MotionTraceGenerator {
    /// Start a trace at `start` milliseconds with the hardware counter
    /// already at `counter` (it counts since boot, not since app start)
    pub fn new(start: Timestamp, counter: f32) -> Self {
        Self {
            clock: FixedTime::new(start),
            counter,
            high_phase: false,
        }
    }

    /// Current trace time
    pub fn now(&self) -> Timestamp {
        self.clock.now()
    }

    /// One batched cumulative counter reading after advancing `steps` steps
    pub fn counter_reading(&mut self, steps: f32) -> SampleEvent {
        self.counter += steps;
        self.clock.advance(500);
        SampleEvent::CounterReading {
            steps: self.counter,
            timestamp: self.clock.now(),
        }
    }

    /// A burst of low-latency detector pulses, one per step
    pub fn pulses(&mut self, count: usize) -> Vec<SampleEvent> {
        let mut out = Vec::with_capacity(count);
        for _ in 0..count {
            self.clock.advance(400);
            out.push(SampleEvent::StepPulse {
                timestamp: self.clock.now(),
            });
        }
        out
    }

    /// Acceleration samples whose magnitude alternates by `jitter`,
    /// driving the classifier's smoothed signal toward `jitter`
    pub fn accel_burst(&mut self, jitter: f32, count: usize) -> Vec<SampleEvent> {
        let mut out = Vec::with_capacity(count);
        for _ in 0..count {
            self.high_phase = !self.high_phase;
            let level = if self.high_phase { jitter } else { 0.0 };
            self.clock.advance(ACCEL_INTERVAL_MS);
            out.push(SampleEvent::Acceleration {
                x: level,
                y: 0.0,
                z: 0.0,
                timestamp: self.clock.now(),
            });
        }
        out
    }

    /// Enough accelerometer samples at `jitter` intensity to fully settle
    /// the smoothed signal there (several filter windows)
    pub fn settled_activity(&mut self, jitter: f32) -> Vec<SampleEvent> {
        self.accel_burst(jitter, 400)
    }

    /// Jump the clock forward without producing samples, simulating a
    /// listener pause
    pub fn pause(&mut self, ms: u64) {
        self.clock.advance(ms);
    }
}
