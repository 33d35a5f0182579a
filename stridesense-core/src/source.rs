//! Sample Sources - Pull-Based Sensor Feeds
//!
//! ## Overview
//!
//! The platform delivers sensor data through callbacks the core cannot
//! control; this module flips that into a pull-based model the core can
//! test. A [`SampleSource`] yields [`SampleEvent`]s through `nb::Result`,
//! making "no data right now" (`WouldBlock`) distinct from a real source
//! failure, the same non-blocking idiom used across embedded Rust, with no
//! async runtime.
//!
//! ## Registration Semantics
//!
//! Sources come and go: the host pauses and resumes sensor listeners
//! freely across the process lifetime. Pipeline state lives in
//! [`MotionPipeline`](crate::pipeline::MotionPipeline), never in a source,
//! so draining a second source into the same pipeline continues from the
//! calibrated state instead of starting over.

use crate::events::SampleEvent;
use crate::pipeline::{MotionPipeline, SensorCaps};

use core::fmt;

/// Errors that can occur while pulling from a source
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceError<E> {
    /// Transport-level error from the underlying feed
    Transport(E),
    /// Source has no more samples and never will
    EndOfStream,
}

impl<E: fmt::Display> fmt::Display for SourceError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transport(e) => write!(f, "Transport error: {}", e),
            Self::EndOfStream => write!(f, "End of stream"),
        }
    }
}

/// Pull-based feed of sensor samples
///
/// ## Contract
///
/// - `poll_next` must not block; return `nb::Error::WouldBlock` when no
///   sample is ready yet
/// - samples of one channel arrive in non-decreasing timestamp order; no
///   ordering is promised across channels
/// - `EndOfStream` is sticky
pub trait SampleSource {
    /// Transport error type
    type Error;

    /// Attempt to pull the next sample
    fn poll_next(&mut self) -> nb::Result<SampleEvent, SourceError<Self::Error>>;

    /// Capability flags this source was probed with
    fn capabilities(&self) -> SensorCaps;
}

/// Memory-backed source for tests and replay
///
/// ## Use Cases
///
/// 1. **Unit Testing**: feed known sample sequences
/// 2. **Replay**: re-process recorded traces
/// 3. **Simulation**: synthetic walks and runs
pub struct MemorySource<'a> {
    /// Slice of samples to replay
    samples: &'a [SampleEvent],
    /// Current position
    position: usize,
    /// Capabilities reported to consumers
    caps: SensorCaps,
}

impl<'a> MemorySource<'a> {
    /// Create a source replaying `samples` with all capabilities present
    pub fn new(samples: &'a [SampleEvent]) -> Self {
        Self::with_capabilities(samples, SensorCaps::all())
    }

    /// Create a source replaying `samples` with explicit capabilities
    pub fn with_capabilities(samples: &'a [SampleEvent], caps: SensorCaps) -> Self {
        Self {
            samples,
            position: 0,
            caps,
        }
    }

    /// Rewind to the first sample
    pub fn reset(&mut self) {
        self.position = 0;
    }

    /// Check if every sample has been consumed
    pub fn is_exhausted(&self) -> bool {
        self.position >= self.samples.len()
    }
}

impl<'a> SampleSource for MemorySource<'a> {
    type Error = ();

    fn poll_next(&mut self) -> nb::Result<SampleEvent, SourceError<Self::Error>> {
        if self.position >= self.samples.len() {
            return Err(nb::Error::Other(SourceError::EndOfStream));
        }

        let sample = self.samples[self.position];
        self.position += 1;
        Ok(sample)
    }

    fn capabilities(&self) -> SensorCaps {
        self.caps
    }
}

/// Pump a source into a pipeline until it runs dry
///
/// Pulls until the source reports `WouldBlock` or `EndOfStream`, returning
/// how many samples were handled. Transport errors are returned to the
/// caller; the pipeline state remains valid and a later drain continues
/// where this one stopped.
pub fn drain<S: SampleSource>(
    source: &mut S,
    pipeline: &mut MotionPipeline,
) -> Result<usize, SourceError<S::Error>> {
    let mut handled = 0;
    loop {
        match source.poll_next() {
            Ok(sample) => {
                pipeline.handle(sample);
                handled += 1;
            }
            Err(nb::Error::WouldBlock) => return Ok(handled),
            Err(nb::Error::Other(SourceError::EndOfStream)) => return Ok(handled),
            Err(nb::Error::Other(err)) => return Err(err),
        }
    }
}
