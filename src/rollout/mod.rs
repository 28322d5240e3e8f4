//! Trajectory rollout: candidate trajectories and the settings that seed them
pub mod params;
pub mod trajectory;

pub use self::params::{RolloutParams, MAX_STEPS};
pub use self::trajectory::TrajectorySample;
