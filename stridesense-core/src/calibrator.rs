//! Step Calibrator - Session-Relative Step Totals
//!
//! ## Overview
//!
//! The hardware step counter reports steps accumulated since device boot,
//! so its first reading is almost never zero. This module converts those
//! device-lifetime readings into an app-session-relative total by latching
//! a baseline on the first reading and subtracting it from every later one.
//!
//! Two wrinkles make this more than a subtraction:
//!
//! 1. **Pulse head start**: the step detector delivers per-step pulses with
//!    much lower latency than the counter's batched readings. If pulses have
//!    already advanced the visible total to `N` when the first counter
//!    reading `V0` arrives, the baseline must be `V0 - N`; a naive
//!    `baseline = V0` would double-count those `N` steps the moment the
//!    counter catches up.
//!
//! 2. **Monotonic ratchet**: readings can arrive duplicated, jittered, or
//!    after a hardware counter reset. A candidate total at or below the
//!    current one is silently ignored; the total only ever moves up.
//!
//! ## Degraded Modes
//!
//! With no counter capability the calibrator runs on pulses alone: a plain
//! increment-only counter with no baseline concept. With neither capability
//! it is simply never invoked and the total stays at zero.

use crate::constants::steps::PULSE_STEP;
use crate::errors::{SampleError, SampleResult};

/// Converts cumulative hardware counter readings into a session total
///
/// ## Invariants
///
/// - `total` is monotonically non-decreasing within a process lifetime
/// - `baseline` is set exactly once, on the first accepted counter reading,
///   and never changes until process restart
#[derive(Debug, Clone, Default)]
pub struct StepCalibrator {
    /// Device-lifetime counter value mapped to "zero session steps"
    baseline: Option<f32>,
    /// Session-relative step total
    total: f32,
}

impl StepCalibrator {
    /// Create an uncalibrated calibrator with a zero total
    pub const fn new() -> Self {
        Self {
            baseline: None,
            total: 0.0,
        }
    }

    /// Ingest a cumulative counter reading, returning the updated total
    ///
    /// The first accepted reading latches the baseline, crediting any steps
    /// the pulse stream already counted. Later readings pass through the
    /// monotonic ratchet: the total adopts `reading - baseline` only when
    /// that exceeds the current value, which absorbs duplicate delivery,
    /// sensor jitter, and counter resets without surfacing an error.
    pub fn on_counter_reading(&mut self, steps: f32) -> SampleResult<f32> {
        if !steps.is_finite() || steps < 0.0 {
            return Err(SampleError::InvalidValue);
        }

        let baseline = *self.baseline.get_or_insert(steps - self.total);

        let candidate = steps - baseline;
        if candidate > self.total {
            self.total = candidate;
        }

        Ok(self.total)
    }

    /// Credit one detected step, returning the updated total
    ///
    /// Pulses give low-latency feedback between batched counter readings;
    /// the next reading reconciles any discrepancy via the ratchet, which
    /// can only move the total up or leave it unchanged.
    pub fn on_step_pulse(&mut self) -> f32 {
        self.total += PULSE_STEP;
        self.total
    }

    /// Current session-relative step total
    pub fn total(&self) -> f32 {
        self.total
    }

    /// Whether the baseline has been latched
    pub fn is_calibrated(&self) -> bool {
        self.baseline.is_some()
    }
}
