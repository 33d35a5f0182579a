//! Daily step goal
//!
//! The goal is the one piece of user configuration in the product. It is
//! persisted and edited entirely by the presentation layer; the core
//! pipeline never reads it. This module only enforces the valid range and
//! computes display fractions.

/// Lowest configurable daily goal
pub const MIN_GOAL_STEPS: u32 = 1_000;

/// Highest configurable daily goal
pub const MAX_GOAL_STEPS: u32 = 30_000;

/// Default daily goal for fresh installs
pub const DEFAULT_GOAL_STEPS: u32 = 10_000;

/// A user-configured daily step target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DailyGoal {
    steps: u32,
}

impl Default for DailyGoal {
    fn default() -> Self {
        Self {
            steps: DEFAULT_GOAL_STEPS,
        }
    }
}

impl DailyGoal {
    /// Create a goal, clamping into the configurable range
    pub fn new(steps: u32) -> Self {
        Self {
            steps: steps.clamp(MIN_GOAL_STEPS, MAX_GOAL_STEPS),
        }
    }

    /// Configured target in steps
    pub const fn steps(&self) -> u32 {
        self.steps
    }

    /// Progress toward the goal in `[0, 1]`, saturating at 1
    pub fn fraction(&self, current_steps: u32) -> f32 {
        let fraction = current_steps as f32 / self.steps as f32;
        fraction.min(1.0)
    }

    /// Whether the goal has been met
    pub const fn reached(&self, current_steps: u32) -> bool {
        current_steps >= self.steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_goal() {
        assert_eq!(DailyGoal::default().steps(), DEFAULT_GOAL_STEPS);
    }

    #[test]
    fn out_of_range_goals_clamp() {
        assert_eq!(DailyGoal::new(0).steps(), MIN_GOAL_STEPS);
        assert_eq!(DailyGoal::new(500_000).steps(), MAX_GOAL_STEPS);
        assert_eq!(DailyGoal::new(12_345).steps(), 12_345);
    }

    #[test]
    fn fraction_saturates_at_one() {
        let goal = DailyGoal::new(10_000);
        assert_eq!(goal.fraction(0), 0.0);
        assert!((goal.fraction(5_000) - 0.5).abs() < 1e-6);
        assert_eq!(goal.fraction(25_000), 1.0);
    }

    #[test]
    fn reached_at_exact_target() {
        let goal = DailyGoal::new(8_000);
        assert!(!goal.reached(7_999));
        assert!(goal.reached(8_000));
    }
}
