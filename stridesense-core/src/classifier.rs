//! Motion Classifier - Jitter-Based Activity Labels
//!
//! ## Algorithm
//!
//! Every acceleration sample goes through four steps:
//!
//! ```text
//! (x, y, z) → magnitude → |Δ magnitude| → EWMA → threshold → label
//!                jitter proxy            smooth   classify
//! ```
//!
//! 1. `magnitude = √(x² + y² + z²)`, free of device orientation
//! 2. `jitter = |magnitude - last_magnitude|`, the frame-to-frame change
//! 3. `smoothed = smoothed * 0.95 + jitter * 0.05`, a low-pass filter with
//!    an effective window of ~20 samples
//! 4. fixed thresholds split the smoothed signal into resting / walking /
//!    running
//!
//! The externally visible state changes only when the freshly computed label
//! differs from the committed one. Comparison is always against the last
//! *committed* label, never the previous raw classification, so
//! sub-threshold wobble inside one label produces no transitions
//! (debounce-by-equality).
//!
//! ## State Lifetime
//!
//! `smoothed_jitter` and `last_magnitude` persist across delivery pauses
//! within a process lifetime and are never reset; resumption after a pause
//! continues from the converged filter state instead of re-learning it.

use libm::sqrtf;

use crate::constants::motion::{JITTER_BLEND, JITTER_RETAIN, REST_MAX_JITTER, WALK_MAX_JITTER};
use crate::errors::{SampleError, SampleResult};
use crate::events::MotionState;

/// Outcome of classifying one acceleration sample
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    /// The committed activity state after this sample
    pub state: MotionState,
    /// Whether this sample caused a state transition
    pub changed: bool,
    /// Smoothed jitter after this sample, for diagnostics
    pub smoothed_jitter: f32,
}

/// Classifies acceleration samples into coarse activity states
#[derive(Debug, Clone, Default)]
pub struct MotionClassifier {
    /// Magnitude of the previous sample
    last_magnitude: f32,
    /// Exponentially weighted moving average of the magnitude jitter
    smoothed_jitter: f32,
    /// Last committed activity label
    state: MotionState,
}

impl MotionClassifier {
    /// Create a classifier in the `Resting` state with a settled filter
    pub const fn new() -> Self {
        Self {
            last_magnitude: 0.0,
            smoothed_jitter: 0.0,
            state: MotionState::Resting,
        }
    }

    /// Ingest one acceleration sample and classify
    ///
    /// Non-finite components leave every piece of state untouched; the
    /// sample simply never happened.
    pub fn on_acceleration(&mut self, x: f32, y: f32, z: f32) -> SampleResult<Classification> {
        if !(x.is_finite() && y.is_finite() && z.is_finite()) {
            return Err(SampleError::InvalidValue);
        }

        let magnitude = sqrtf(x * x + y * y + z * z);
        let jitter = (magnitude - self.last_magnitude).abs();
        self.last_magnitude = magnitude;

        self.smoothed_jitter = self.smoothed_jitter * JITTER_RETAIN + jitter * JITTER_BLEND;

        let label = Self::classify(self.smoothed_jitter);
        let changed = label != self.state;
        if changed {
            self.state = label;
        }

        Ok(Classification {
            state: self.state,
            changed,
            smoothed_jitter: self.smoothed_jitter,
        })
    }

    /// Last committed activity state
    pub fn state(&self) -> MotionState {
        self.state
    }

    /// Current smoothed jitter level
    pub fn smoothed_jitter(&self) -> f32 {
        self.smoothed_jitter
    }

    fn classify(smoothed_jitter: f32) -> MotionState {
        if smoothed_jitter < REST_MAX_JITTER {
            MotionState::Resting
        } else if smoothed_jitter < WALK_MAX_JITTER {
            MotionState::Walking
        } else {
            MotionState::Running
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Drive the filter with a constant jitter level until it settles there.
    fn saturate(classifier: &mut MotionClassifier, jitter: f32, samples: usize) {
        // Alternate magnitudes jitter apart along one axis; gravity-free
        // test signal keeps the arithmetic exact.
        let mut level = 0.0;
        for _ in 0..samples {
            level = if level == 0.0 { jitter } else { 0.0 };
            classifier.on_acceleration(level, 0.0, 0.0).unwrap();
        }
    }

    #[test]
    fn starts_resting() {
        let classifier = MotionClassifier::new();
        assert_eq!(classifier.state(), MotionState::Resting);
        assert_eq!(classifier.smoothed_jitter(), 0.0);
    }

    #[test]
    fn still_device_stays_resting() {
        let mut classifier = MotionClassifier::new();

        // Constant gravity vector: one initial jitter spike, then zero
        let mut last = Classification {
            state: MotionState::Resting,
            changed: false,
            smoothed_jitter: 0.0,
        };
        for _ in 0..200 {
            last = classifier.on_acceleration(0.0, 0.0, 9.81).unwrap();
        }

        assert_eq!(last.state, MotionState::Resting);
        assert!(last.smoothed_jitter < REST_MAX_JITTER);
    }

    #[test]
    fn sustained_jitter_reaches_walking_then_running() {
        let mut classifier = MotionClassifier::new();

        saturate(&mut classifier, 1.5, 300);
        assert_eq!(classifier.state(), MotionState::Walking);

        saturate(&mut classifier, 8.0, 300);
        assert_eq!(classifier.state(), MotionState::Running);
    }

    #[test]
    fn smoothing_follows_closed_form() {
        let mut classifier = MotionClassifier::new();

        // Constant jitter j: smoothed_n = j * (1 - 0.95^n)
        let j = 2.0_f32;
        let mut level = 0.0;
        for n in 1..=60 {
            level = if level == 0.0 { j } else { 0.0 };
            let c = classifier.on_acceleration(0.0, level, 0.0).unwrap();
            let expected = j * (1.0 - JITTER_RETAIN.powi(n));
            assert!(
                (c.smoothed_jitter - expected).abs() < 1e-4,
                "sample {}: {} vs {}",
                n,
                c.smoothed_jitter,
                expected
            );
        }

        // Converges to within epsilon of j
        saturate(&mut classifier, j, 400);
        assert!((classifier.smoothed_jitter() - j).abs() < 1e-2);
    }

    #[test]
    fn change_fires_once_per_real_transition() {
        let mut classifier = MotionClassifier::new();

        // Park the smoothed signal just under the walking threshold, then
        // nudge it across and back; only the two real crossings may report
        // a change.
        saturate(&mut classifier, 0.55, 500);
        assert_eq!(classifier.state(), MotionState::Resting);

        let mut changes = 0;
        saturate_counting(&mut classifier, 0.7, 500, &mut changes);
        assert_eq!(classifier.state(), MotionState::Walking);
        assert_eq!(changes, 1);

        changes = 0;
        saturate_counting(&mut classifier, 0.5, 500, &mut changes);
        assert_eq!(classifier.state(), MotionState::Resting);
        assert_eq!(changes, 1);
    }

    fn saturate_counting(
        classifier: &mut MotionClassifier,
        jitter: f32,
        samples: usize,
        changes: &mut u32,
    ) {
        let mut level = 0.0;
        for _ in 0..samples {
            level = if level == 0.0 { jitter } else { 0.0 };
            let c = classifier.on_acceleration(level, 0.0, 0.0).unwrap();
            if c.changed {
                *changes += 1;
            }
        }
    }

    #[test]
    fn non_finite_samples_are_rejected_without_side_effects() {
        let mut classifier = MotionClassifier::new();
        saturate(&mut classifier, 1.5, 300);
        let before = classifier.smoothed_jitter();

        assert_eq!(
            classifier.on_acceleration(f32::NAN, 0.0, 0.0),
            Err(SampleError::InvalidValue)
        );
        assert_eq!(
            classifier.on_acceleration(0.0, f32::INFINITY, 0.0),
            Err(SampleError::InvalidValue)
        );

        assert_eq!(classifier.smoothed_jitter(), before);
        assert_eq!(classifier.state(), MotionState::Walking);
    }
}
