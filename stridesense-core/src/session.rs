//! Session Accumulator - Activity-Gated Step Counting
//!
//! The lifetime total and the session total measure different things and
//! are allowed to diverge: the session counter only credits steps taken
//! while the classifier reports an active state. Steps walked while the
//! committed label is still `Resting` stay in the lifetime total but never
//! reach the session.
//!
//! The delta clamp is a safety net, not a correctness mechanism: the
//! calibrator already guarantees a monotonic total upstream.

use crate::events::MotionState;

/// What happens to the session counter when activity returns to rest
///
/// The shipped behavior retains the count across rest periods. Resetting on
/// rest exists as an explicit opt-in for "per workout" semantics; it is
/// never the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResetPolicy {
    /// Keep accumulating across rest periods (default)
    #[default]
    Retain,
    /// Zero the counter on every transition into `Resting`
    ResetOnRest,
}

/// Accumulates step deltas while the activity state is active
#[derive(Debug, Clone, Default)]
pub struct SessionAccumulator {
    steps: u32,
    policy: ResetPolicy,
}

impl SessionAccumulator {
    /// Create an empty accumulator with the given reset policy
    pub const fn new(policy: ResetPolicy) -> Self {
        Self { steps: 0, policy }
    }

    /// Apply a step-total movement, returning the session count
    ///
    /// Credits `floor(new_total - previous_total)` whole steps, clamped at
    /// zero, and only while `state` is active. A resting delta is discarded,
    /// not an error: those steps stay in the lifetime total.
    pub fn on_step_delta(
        &mut self,
        previous_total: f32,
        new_total: f32,
        state: MotionState,
    ) -> u32 {
        if state.is_active() {
            let delta = (new_total - previous_total).max(0.0);
            self.steps = self.steps.saturating_add(delta as u32);
        }
        self.steps
    }

    /// Apply the reset policy on a committed state transition
    pub fn on_state_change(&mut self, state: MotionState) -> u32 {
        if self.policy == ResetPolicy::ResetOnRest && state == MotionState::Resting {
            self.steps = 0;
        }
        self.steps
    }

    /// Current session step count
    pub fn steps(&self) -> u32 {
        self.steps
    }
}
