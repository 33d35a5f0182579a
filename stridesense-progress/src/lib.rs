//! Progress math for StrideSense
//!
//! Pure functions over the step totals the core pipeline produces: level
//! and rank progression, unlockable milestones, and the user's daily goal.
//! Nothing here touches sensors, storage, or rendering: the presentation
//! layer reads these values and draws them, and it alone persists the
//! daily goal.
//!
//! All types are plain integers and enums so the crate stays `no_std` and
//! trivially embeddable next to the core.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod goal;
pub mod level;
pub mod milestones;

pub use goal::DailyGoal;
pub use level::{level_for_steps, level_progress, Rank, XP_PER_LEVEL};
pub use milestones::{unlocked_count, Milestone, MILESTONES};

/// Crate version string
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
