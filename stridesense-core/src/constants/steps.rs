//! Step accounting constants

/// Steps credited per detector pulse.
///
/// The step detector fires exactly once per physical step; the cumulative
/// counter later reconciles any drift through the calibrator's ratchet.
pub const PULSE_STEP: f32 = 1.0;

/// Upper bound on updates a single sample can produce.
///
/// A counter reading can move the step total and the session counter at
/// once; an acceleration sample can only flip the activity label. Four
/// leaves headroom without growing the per-sample buffer past a cache line.
pub const MAX_UPDATES_PER_SAMPLE: usize = 4;
