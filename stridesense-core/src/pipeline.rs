//! Motion Pipeline - Composition Root
//!
//! ## Overview
//!
//! [`MotionPipeline`] owns the three state machines of the motion core and
//! routes each incoming sample to its owner:
//!
//! ```text
//! SampleEvent ──┬─ CounterReading ─→ StepCalibrator ──┐
//!               ├─ StepPulse ──────→ StepCalibrator ──┼─→ SessionAccumulator
//!               └─ Acceleration ───→ MotionClassifier ┘        │
//!                                         │                    │
//!                                         └──────→ Updates ←───┘
//! ```
//!
//! The calibrator and classifier are independent, sample-type-partitioned
//! state machines; the accumulator couples them through read access only,
//! seeing the calibrator's delta and the classifier's committed state but
//! never their internals.
//!
//! ## Concurrency Model
//!
//! The pipeline assumes the platform's guarantee that sample callbacks are
//! delivered one at a time (single logical consumer thread). Every derived
//! value has exactly one writer. No operation blocks, suspends, or performs
//! I/O. If an embedder delivers sensor callbacks from multiple threads, it
//! must serialize calls into [`MotionPipeline::handle`] itself, for
//! example behind a mutex or a single-consumer queue; that obligation lives
//! with the port, not with this crate.
//!
//! There is no shutdown handshake: a source can simply stop delivering
//! events (suspend) and resume later; calibration baseline and filter state
//! persist until process restart.
//!
//! ## Degraded Modes
//!
//! Capabilities are probed once at startup and carried as
//! [`SensorCaps`] flags. A missing channel suppresses its component for the
//! process lifetime; stray samples on a disabled channel are counted and
//! dropped, never errors.

use heapless::Vec;

use crate::{
    calibrator::StepCalibrator,
    classifier::MotionClassifier,
    constants::steps::MAX_UPDATES_PER_SAMPLE,
    events::{MotionState, SampleEvent, SensorChannel, Update},
    session::{ResetPolicy, SessionAccumulator},
    time::Timestamp,
};

// Macro for optional logging
#[cfg(feature = "log")]
macro_rules! log_debug {
    ($($arg:tt)*) => { log::debug!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_debug {
    ($($arg:tt)*) => {};
}

/// Updates produced by a single sample
///
/// Bounded fan-out: a counter reading can move the step total and the
/// session counter, an acceleration sample can flip the label and reset the
/// session. Nothing produces more than [`MAX_UPDATES_PER_SAMPLE`].
pub type Updates = Vec<Update, MAX_UPDATES_PER_SAMPLE>;

/// Hardware capability flags, probed once at startup
///
/// Absence of a capability is a permanent degraded mode, not an error:
/// the corresponding component is simply never driven.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SensorCaps {
    /// Cumulative step counter present
    pub step_counter: bool,
    /// Per-step detector present
    pub step_detector: bool,
    /// Tri-axial accelerometer present
    pub accelerometer: bool,
}

impl SensorCaps {
    /// All channels available
    pub const fn all() -> Self {
        Self {
            step_counter: true,
            step_detector: true,
            accelerometer: true,
        }
    }

    /// No channels available
    pub const fn none() -> Self {
        Self {
            step_counter: false,
            step_detector: false,
            accelerometer: false,
        }
    }

    /// Whether samples from `channel` should be accepted
    pub const fn supports(&self, channel: SensorChannel) -> bool {
        match channel {
            SensorChannel::StepCounter => self.step_counter,
            SensorChannel::StepDetector => self.step_detector,
            SensorChannel::Accelerometer => self.accelerometer,
        }
    }

    /// Whether any step source exists
    ///
    /// With neither counter nor detector the presentation layer must render
    /// its no-sensor fallback.
    pub const fn step_tracking_available(&self) -> bool {
        self.step_counter || self.step_detector
    }
}

/// Pipeline counters for monitoring
///
/// Cheap saturating counters; they never affect processing decisions.
#[derive(Debug, Clone, Copy, Default)]
pub struct PipelineStats {
    /// Samples routed to a component
    pub samples_processed: u32,
    /// Samples dropped (disabled channel or malformed payload)
    pub samples_ignored: u32,
    /// Step-total movements observed
    pub step_updates: u32,
    /// Committed activity transitions observed
    pub activity_changes: u32,
}

impl PipelineStats {
    /// Zeroed counters
    pub const fn new() -> Self {
        Self {
            samples_processed: 0,
            samples_ignored: 0,
            step_updates: 0,
            activity_changes: 0,
        }
    }
}

/// Latest derived values, always retrievable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Snapshot {
    /// Session-relative step total, truncated to whole steps
    pub steps: u32,
    /// Committed activity state
    pub activity: MotionState,
    /// Activity-gated session step count
    pub session_steps: u32,
    /// False when neither step channel exists; presentation renders a
    /// fallback instead of a zero that will never move
    pub step_tracking_available: bool,
}

/// The motion-signal processing pipeline
///
/// See the [module docs](self) for the data flow and concurrency model.
pub struct MotionPipeline {
    caps: SensorCaps,
    calibrator: StepCalibrator,
    classifier: MotionClassifier,
    session: SessionAccumulator,
    stats: PipelineStats,
}

impl MotionPipeline {
    /// Create a pipeline with the given capabilities and default policies
    pub fn new(caps: SensorCaps) -> Self {
        Self::builder().capabilities(caps).build()
    }

    /// Create a pipeline builder
    pub fn builder() -> PipelineBuilder {
        PipelineBuilder::new()
    }

    /// Handle one sample, returning the updates it caused
    ///
    /// Never fails: malformed payloads and stray samples on disabled
    /// channels are counted in [`PipelineStats`] and dropped.
    pub fn handle(&mut self, sample: SampleEvent) -> Updates {
        let mut updates = Updates::new();
        let channel = sample.channel();

        if !self.caps.supports(channel) {
            self.stats.samples_ignored = self.stats.samples_ignored.saturating_add(1);
            log_debug!("dropping sample on disabled channel {}", channel.name());
            return updates;
        }

        match sample {
            SampleEvent::CounterReading { steps, timestamp } => {
                let previous = self.calibrator.total();
                match self.calibrator.on_counter_reading(steps) {
                    Ok(total) => {
                        self.stats.samples_processed =
                            self.stats.samples_processed.saturating_add(1);
                        if total > previous {
                            self.credit_steps(previous, total, timestamp, &mut updates);
                        }
                    }
                    Err(err) => {
                        self.stats.samples_ignored = self.stats.samples_ignored.saturating_add(1);
                        log_debug!("dropping counter reading: {}", err);
                    }
                }
            }

            SampleEvent::StepPulse { timestamp } => {
                let previous = self.calibrator.total();
                let total = self.calibrator.on_step_pulse();
                self.stats.samples_processed = self.stats.samples_processed.saturating_add(1);
                self.credit_steps(previous, total, timestamp, &mut updates);
            }

            SampleEvent::Acceleration { x, y, z, timestamp } => {
                match self.classifier.on_acceleration(x, y, z) {
                    Ok(classification) => {
                        self.stats.samples_processed =
                            self.stats.samples_processed.saturating_add(1);
                        if classification.changed {
                            self.commit_activity(classification.state, timestamp, &mut updates);
                        }
                    }
                    Err(err) => {
                        self.stats.samples_ignored = self.stats.samples_ignored.saturating_add(1);
                        log_debug!("dropping acceleration sample: {}", err);
                    }
                }
            }
        }

        updates
    }

    /// Latest derived values
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            steps: self.calibrator.total() as u32,
            activity: self.classifier.state(),
            session_steps: self.session.steps(),
            step_tracking_available: self.caps.step_tracking_available(),
        }
    }

    /// Capability flags this pipeline was built with
    pub fn capabilities(&self) -> SensorCaps {
        self.caps
    }

    /// Monitoring counters
    pub fn stats(&self) -> &PipelineStats {
        &self.stats
    }

    fn credit_steps(
        &mut self,
        previous: f32,
        total: f32,
        timestamp: Timestamp,
        updates: &mut Updates,
    ) {
        self.stats.step_updates = self.stats.step_updates.saturating_add(1);

        let session_before = self.session.steps();
        let session = self
            .session
            .on_step_delta(previous, total, self.classifier.state());

        updates
            .push(Update::StepTotal {
                total: total as u32,
                timestamp,
            })
            .ok();
        if session != session_before {
            updates
                .push(Update::SessionSteps {
                    steps: session,
                    timestamp,
                })
                .ok();
        }
    }

    fn commit_activity(&mut self, state: MotionState, timestamp: Timestamp, updates: &mut Updates) {
        self.stats.activity_changes = self.stats.activity_changes.saturating_add(1);
        log_debug!("activity changed to {}", state.label());

        let session_before = self.session.steps();
        let session = self.session.on_state_change(state);

        updates.push(Update::Activity { state, timestamp }).ok();
        if session != session_before {
            updates
                .push(Update::SessionSteps {
                    steps: session,
                    timestamp,
                })
                .ok();
        }
    }
}

/// Builder for [`MotionPipeline`]
///
/// Capabilities default to all-present; the session reset policy defaults
/// to retaining the count across rest periods.
pub struct PipelineBuilder {
    caps: SensorCaps,
    reset_policy: ResetPolicy,
}

impl PipelineBuilder {
    /// Create a builder with default configuration
    pub fn new() -> Self {
        Self {
            caps: SensorCaps::all(),
            reset_policy: ResetPolicy::Retain,
        }
    }

    /// Set the probed hardware capabilities
    pub fn capabilities(mut self, caps: SensorCaps) -> Self {
        self.caps = caps;
        self
    }

    /// Set the session reset policy
    pub fn reset_policy(mut self, policy: ResetPolicy) -> Self {
        self.reset_policy = policy;
        self
    }

    /// Build the pipeline
    pub fn build(self) -> MotionPipeline {
        MotionPipeline {
            caps: self.caps,
            calibrator: StepCalibrator::new(),
            classifier: MotionClassifier::new(),
            session: SessionAccumulator::new(self.reset_policy),
            stats: PipelineStats::new(),
        }
    }
}

impl Default for PipelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults() {
        let pipeline = MotionPipeline::builder().build();
        assert_eq!(pipeline.capabilities(), SensorCaps::all());

        let snap = pipeline.snapshot();
        assert_eq!(snap.steps, 0);
        assert_eq!(snap.activity, MotionState::Resting);
        assert_eq!(snap.session_steps, 0);
        assert!(snap.step_tracking_available);
    }

    #[test]
    fn counter_readings_flow_to_snapshot() {
        let mut pipeline = MotionPipeline::new(SensorCaps::all());

        // First reading calibrates and produces no movement
        let updates = pipeline.handle(SampleEvent::CounterReading {
            steps: 900.0,
            timestamp: 1,
        });
        assert!(updates.is_empty());

        let updates = pipeline.handle(SampleEvent::CounterReading {
            steps: 912.0,
            timestamp: 2,
        });
        assert_eq!(
            updates.as_slice(),
            &[Update::StepTotal {
                total: 12,
                timestamp: 2
            }]
        );
        assert_eq!(pipeline.snapshot().steps, 12);
    }

    #[test]
    fn disabled_channel_samples_are_dropped() {
        let mut pipeline = MotionPipeline::new(SensorCaps {
            step_counter: true,
            step_detector: false,
            accelerometer: false,
        });

        assert!(pipeline
            .handle(SampleEvent::StepPulse { timestamp: 5 })
            .is_empty());
        assert!(pipeline
            .handle(SampleEvent::Acceleration {
                x: 0.0,
                y: 0.0,
                z: 20.0,
                timestamp: 6
            })
            .is_empty());

        assert_eq!(pipeline.stats().samples_ignored, 2);
        assert_eq!(pipeline.snapshot().steps, 0);
        assert_eq!(pipeline.snapshot().activity, MotionState::Resting);
    }

    #[test]
    fn malformed_payloads_are_counted_not_propagated() {
        let mut pipeline = MotionPipeline::new(SensorCaps::all());

        pipeline.handle(SampleEvent::CounterReading {
            steps: f32::NAN,
            timestamp: 1,
        });
        pipeline.handle(SampleEvent::Acceleration {
            x: f32::INFINITY,
            y: 0.0,
            z: 0.0,
            timestamp: 2,
        });

        assert_eq!(pipeline.stats().samples_ignored, 2);
        assert_eq!(pipeline.stats().samples_processed, 0);
    }

    #[test]
    fn degraded_mode_reports_unavailable() {
        let pipeline = MotionPipeline::new(SensorCaps::none());
        let snap = pipeline.snapshot();

        assert!(!snap.step_tracking_available);
        assert_eq!(snap.steps, 0);
        assert_eq!(snap.activity, MotionState::Resting);
    }
}
