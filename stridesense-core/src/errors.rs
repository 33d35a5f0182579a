//! Error Types for Sample Ingestion
//!
//! ## Design Philosophy
//!
//! The pipeline has no fatal-error path that should terminate the host
//! process. Every error in this module is a per-sample verdict that the
//! composition root absorbs: the offending sample is dropped, a statistics
//! counter ticks, and processing continues with the previous state intact.
//!
//! Errors follow the same constraints as the rest of the crate:
//!
//! 1. **Small Size**: each variant is a handful of bytes; errors travel
//!    through hot paths.
//! 2. **No Heap Allocation**: inline data only, no `String`.
//! 3. **Copy Semantics**: returned by value without move complications.
//!
//! ## What Is Not an Error
//!
//! - **Capability absence** is a permanent degraded-mode flag checked once
//!   at startup ([`SensorCaps`](crate::pipeline::SensorCaps)), reported as a
//!   boolean, never thrown.
//! - **Regressive or duplicate counter readings** are absorbed by the
//!   calibrator's monotonic ratchet and never surface at all.

use thiserror_no_std::Error;

use crate::events::SensorChannel;

/// Result type for per-sample operations
pub type SampleResult<T> = Result<T, SampleError>;

/// Per-sample ingestion errors - kept small and silent
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleError {
    /// Payload contains a non-finite or otherwise unusable number
    #[error("Sample payload is not a usable number")]
    InvalidValue,

    /// Sample arrived on a channel whose capability flag is off
    #[error("Channel {} has no capability", .channel.name())]
    ChannelUnavailable {
        /// The channel the stray sample claimed to come from
        channel: SensorChannel,
    },
}

#[cfg(feature = "defmt")]
impl defmt::Format for SampleError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::InvalidValue => defmt::write!(fmt, "Invalid sample payload"),
            Self::ChannelUnavailable { channel } => {
                defmt::write!(fmt, "Channel {} unavailable", channel.name())
            }
        }
    }
}
