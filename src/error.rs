//! Error types for trajectory rollout

use thiserror::Error;

/// Failures of indexed access on a [`TrajectorySample`](crate::rollout::TrajectorySample)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TrajectoryError {
    /// The index is not below the current number of points
    #[error("point index {index} out of range for trajectory with {len} points")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Rejected simulation parameters
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParamsError {
    /// A duration was zero, negative, or not finite
    #[error("{name} must be a positive finite number, got {value}")]
    NonPositive { name: &'static str, value: f64 },
    /// The step count implied by the durations exceeds the supported maximum
    #[error("sim_time {sim_time} / sim_granularity {sim_granularity} exceeds {max} steps")]
    TooManySteps {
        sim_time: f64,
        sim_granularity: f64,
        max: usize,
    },
}
