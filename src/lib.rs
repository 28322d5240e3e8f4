//! Candidate trajectories for a trajectory-rollout local planner
//!
//! A generator seeds a [`TrajectorySample`] per velocity command and fills it
//! with simulated poses, a scorer assigns its cost, and a selector compares
//! costs across the batch.

pub mod common;
pub mod error;
pub mod rollout;

pub use crate::common::types::Pose2D;
pub use crate::error::{ParamsError, TrajectoryError};
pub use crate::rollout::{RolloutParams, TrajectorySample};
