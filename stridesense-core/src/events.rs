//! Sample and Update Vocabulary for the Motion Pipeline
//!
//! ## Overview
//!
//! This module defines the two event families that cross the pipeline
//! boundary: inbound [`SampleEvent`]s pushed by the hardware sample source,
//! and outbound [`Update`]s emitted whenever a derived value changes.
//!
//! ## Sample Flow
//!
//! ```text
//! Hardware → SampleEvent → MotionPipeline → Update → Presentation
//!               ↓                ↓             ↓
//!            Counter         Calibrate     StepTotal
//!            Pulse           Classify      Activity
//!            Acceleration    Accumulate    SessionSteps
//! ```
//!
//! Samples are consumed immediately and never stored; the pipeline keeps
//! only the derived state (totals, committed activity label, smoothed
//! jitter). The two sensor streams may interleave in arbitrary relative
//! order; the only ordering guarantee is non-decreasing timestamps within
//! one stream.
//!
//! ## Memory Model
//!
//! Both event types are small `Copy` values sized for delivery from an
//! interrupt or platform callback without allocation:
//! - [`SampleEvent`]: ≤32 bytes (largest variant is `Acceleration`)
//! - [`Update`]: ≤24 bytes

use crate::time::Timestamp;

/// Hardware channel a sample originates from
///
/// Maps one-to-one onto the capability flags in
/// [`SensorCaps`](crate::pipeline::SensorCaps).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum SensorChannel {
    /// Cumulative step counter (counts since device boot, batched delivery)
    StepCounter = 0,
    /// Step detector firing once per physical step, low latency
    StepDetector = 1,
    /// Tri-axial accelerometer
    Accelerometer = 2,
}

impl SensorChannel {
    /// Get human-readable name for logs
    pub const fn name(&self) -> &'static str {
        match self {
            SensorChannel::StepCounter => "step_counter",
            SensorChannel::StepDetector => "step_detector",
            SensorChannel::Accelerometer => "accelerometer",
        }
    }
}

/// Coarse activity classification
///
/// Committed by the classifier only when the freshly computed label differs
/// from the stored one, so observers see one change event per real
/// transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum MotionState {
    /// No sustained motion detected
    #[default]
    Resting = 0,
    /// Moderate, regular motion
    Walking = 1,
    /// High-intensity motion
    Running = 2,
}

impl MotionState {
    /// Get stable label for logs and presentation keys
    ///
    /// Localization happens outside the core; these are identifiers.
    pub const fn label(&self) -> &'static str {
        match self {
            MotionState::Resting => "resting",
            MotionState::Walking => "walking",
            MotionState::Running => "running",
        }
    }

    /// Whether this state counts toward the session accumulator
    pub const fn is_active(&self) -> bool {
        !matches!(self, MotionState::Resting)
    }
}

/// Raw sample pushed by the hardware sample source
///
/// Tagged union over the three channels. Payloads are reported exactly as
/// the hardware delivered them; sanity checks (finiteness, regressions)
/// belong to the consuming component.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SampleEvent {
    /// Cumulative step counter reading
    ///
    /// Counts all steps since device boot; never reset by the application.
    /// Hardware batches these, so consecutive readings can jump by several
    /// steps at once.
    CounterReading {
        /// Raw counter value (device-lifetime steps)
        steps: f32,
        /// Delivery timestamp in milliseconds
        timestamp: Timestamp,
    },

    /// Single detected step
    ///
    /// Fires once per physical step with no historical count attached.
    StepPulse {
        /// Delivery timestamp in milliseconds
        timestamp: Timestamp,
    },

    /// Tri-axial acceleration sample
    Acceleration {
        /// X-axis acceleration in m/s²
        x: f32,
        /// Y-axis acceleration in m/s²
        y: f32,
        /// Z-axis acceleration in m/s²
        z: f32,
        /// Delivery timestamp in milliseconds
        timestamp: Timestamp,
    },
}

impl SampleEvent {
    /// Get sample timestamp
    pub fn timestamp(&self) -> Timestamp {
        match self {
            SampleEvent::CounterReading { timestamp, .. } => *timestamp,
            SampleEvent::StepPulse { timestamp } => *timestamp,
            SampleEvent::Acceleration { timestamp, .. } => *timestamp,
        }
    }

    /// Get originating channel
    pub fn channel(&self) -> SensorChannel {
        match self {
            SampleEvent::CounterReading { .. } => SensorChannel::StepCounter,
            SampleEvent::StepPulse { .. } => SensorChannel::StepDetector,
            SampleEvent::Acceleration { .. } => SensorChannel::Accelerometer,
        }
    }

    /// Check that every numeric payload component is a finite number
    pub fn is_finite(&self) -> bool {
        match self {
            SampleEvent::CounterReading { steps, .. } => steps.is_finite(),
            SampleEvent::StepPulse { .. } => true,
            SampleEvent::Acceleration { x, y, z, .. } => {
                x.is_finite() && y.is_finite() && z.is_finite()
            }
        }
    }
}

/// Change notification emitted by the pipeline
///
/// One update per derived value that actually moved; values that stay put
/// produce nothing, so observers can react to every update without their
/// own change detection.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Update {
    /// Session-relative step total changed
    StepTotal {
        /// New total, truncated to whole steps
        total: u32,
        /// Timestamp of the sample that caused the change
        timestamp: Timestamp,
    },
    /// Activity-gated session counter changed
    SessionSteps {
        /// New session step count
        steps: u32,
        /// Timestamp of the sample that caused the change
        timestamp: Timestamp,
    },
    /// Committed activity label changed
    Activity {
        /// Newly committed state
        state: MotionState,
        /// Timestamp of the sample that caused the change
        timestamp: Timestamp,
    },
}

impl Update {
    /// Get update timestamp
    pub fn timestamp(&self) -> Timestamp {
        match self {
            Update::StepTotal { timestamp, .. } => *timestamp,
            Update::SessionSteps { timestamp, .. } => *timestamp,
            Update::Activity { timestamp, .. } => *timestamp,
        }
    }
}
