//! Motion classifier constants
//!
//! The classifier maps a smoothed magnitude-jitter signal through fixed
//! thresholds. Raw per-sample jitter is far too noisy at handset
//! accelerometer rates (20-100 Hz), so an exponentially weighted moving
//! average trades a little latency for stable labels.

/// Weight kept from the previous smoothed jitter value each sample.
///
/// Together with [`JITTER_BLEND`] this forms the recurrence
/// `smoothed = smoothed * RETAIN + jitter * BLEND`, an effective averaging
/// window of roughly 20 samples (1 / BLEND).
pub const JITTER_RETAIN: f32 = 0.95;

/// Weight given to the incoming jitter sample.
///
/// Must satisfy `JITTER_RETAIN + JITTER_BLEND == 1.0` so a constant input
/// converges to itself.
pub const JITTER_BLEND: f32 = 0.05;

/// Smoothed jitter below this is classified as resting.
///
/// Empirical: a handset lying on a table or riding in a still pocket stays
/// well under this even with sensor noise.
pub const REST_MAX_JITTER: f32 = 0.6;

/// Smoothed jitter below this (and at or above [`REST_MAX_JITTER`]) is
/// classified as walking; at or above it, running.
///
/// Empirical: brisk walking peaks around 2.5, jogging starts near 4.
pub const WALK_MAX_JITTER: f32 = 3.0;
