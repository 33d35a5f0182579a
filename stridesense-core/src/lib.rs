//! Core motion pipeline for StrideSense
//!
//! Turns raw hardware sensor samples into three derived values a fitness
//! UI can observe: a drift-corrected session step total, a debounced
//! activity label, and an activity-gated session step counter.
//!
//! Key constraints:
//! - Pure, synchronous, push-driven state transitions; no I/O, no blocking
//! - No heap allocation in the sample path
//! - Tolerates missing sensors, duplicate and out-of-order readings
//!
//! ```no_run
//! use stridesense_core::{MotionPipeline, SampleEvent, SensorCaps};
//!
//! let mut pipeline = MotionPipeline::new(SensorCaps::all());
//!
//! // Feed samples as the platform delivers them
//! let updates = pipeline.handle(SampleEvent::CounterReading {
//!     steps: 4821.0,
//!     timestamp: 1_000,
//! });
//! for update in updates {
//!     // React to changed values
//! }
//!
//! let snapshot = pipeline.snapshot();
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod calibrator;
pub mod classifier;
pub mod constants;
pub mod errors;
pub mod events;
pub mod pipeline;
pub mod session;
pub mod source;
pub mod time;

// Public API
pub use calibrator::StepCalibrator;
pub use classifier::{Classification, MotionClassifier};
pub use errors::{SampleError, SampleResult};
pub use events::{MotionState, SampleEvent, SensorChannel, Update};
pub use pipeline::{MotionPipeline, PipelineBuilder, SensorCaps, Snapshot, Updates};
pub use session::{ResetPolicy, SessionAccumulator};
pub use source::{MemorySource, SampleSource, SourceError};

/// Crate version string
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_exists() {
        assert!(!VERSION.is_empty());
    }
}
