//! A single candidate trajectory produced by a rollout

use crate::common::types::Pose2D;
use crate::error::TrajectoryError;

/// Holds a trajectory generated by simulating an x, y, and theta velocity
///
/// Poses are stored at a fixed stride of `time_delta` seconds. The cost is
/// `None` until a scorer writes it, so an unscored sample is never mistaken
/// for one that scored zero.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TrajectorySample {
    /// The x velocity used to seed the trajectory
    pub xv: f64,
    /// The y velocity used to seed the trajectory
    pub yv: f64,
    /// The theta velocity used to seed the trajectory
    pub thetav: f64,
    /// The time gap between points
    pub time_delta: f64,
    /// The cost/score of the trajectory
    pub cost: Option<f64>,
    points: Vec<Pose2D>,
}

impl TrajectorySample {
    /// Create an empty trajectory with zeroed velocities and no cost
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a trajectory seeded with a velocity command
    ///
    /// `num_pts` only reserves storage; the trajectory starts with no points.
    pub fn with_command(xv: f64, yv: f64, thetav: f64, time_delta: f64, num_pts: usize) -> Self {
        TrajectorySample {
            xv,
            yv,
            thetav,
            time_delta,
            cost: None,
            points: Vec::with_capacity(num_pts),
        }
    }

    /// Get the point at `index`
    pub fn point(&self, index: usize) -> Result<Pose2D, TrajectoryError> {
        self.points
            .get(index)
            .copied()
            .ok_or(TrajectoryError::IndexOutOfRange {
                index,
                len: self.points.len(),
            })
    }

    /// Overwrite the point at `index`
    pub fn set_point(
        &mut self,
        index: usize,
        x: f64,
        y: f64,
        theta: f64,
    ) -> Result<(), TrajectoryError> {
        let len = self.points.len();
        let slot = self
            .points
            .get_mut(index)
            .ok_or(TrajectoryError::IndexOutOfRange { index, len })?;
        *slot = Pose2D::new(x, y, theta);
        Ok(())
    }

    /// Add a point to the end of the trajectory
    pub fn add_point(&mut self, x: f64, y: f64, theta: f64) {
        self.points.push(Pose2D::new(x, y, theta));
    }

    /// Get the last point of the trajectory
    pub fn endpoint(&self) -> Result<Pose2D, TrajectoryError> {
        self.points
            .last()
            .copied()
            .ok_or(TrajectoryError::IndexOutOfRange { index: 0, len: 0 })
    }

    /// Clear the trajectory's points, leaving the command and cost untouched
    pub fn reset_points(&mut self) {
        log::trace!("Resetting {} trajectory points", self.points.len());
        self.points.clear();
    }

    /// Number of points in the trajectory
    pub fn points_size(&self) -> usize {
        self.points.len()
    }

    /// Whether the trajectory has no points
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The stored poses in insertion order
    pub fn points(&self) -> &[Pose2D] {
        &self.points
    }

    /// The velocity command that seeded this trajectory
    pub fn command(&self) -> (f64, f64, f64) {
        (self.xv, self.yv, self.thetav)
    }

    /// Simulated time covered by the stored points
    pub fn duration(&self) -> f64 {
        self.time_delta * self.points.len() as f64
    }

    /// The evaluator's score, if one has been assigned
    pub fn cost(&self) -> Option<f64> {
        self.cost
    }

    /// Record the score assigned by an evaluator
    pub fn set_cost(&mut self, cost: f64) {
        self.cost = Some(cost);
    }

    /// Whether an evaluator has scored this trajectory
    pub fn is_scored(&self) -> bool {
        self.cost.is_some()
    }

    /// Forget any previous score
    pub fn clear_cost(&mut self) {
        self.cost = None;
    }
}
