//! Simulation parameters used to seed candidate trajectories

use std::collections::HashMap;

use super::trajectory::TrajectorySample;
use crate::error::ParamsError;

/// Upper bound on poses simulated per trajectory
pub const MAX_STEPS: usize = 100_000;

/// Forward simulation settings shared by every candidate in a rollout cycle
#[derive(Debug, Clone, PartialEq)]
pub struct RolloutParams {
    /// Total simulated time per trajectory, in seconds
    pub sim_time: f64,
    /// Requested step between consecutive poses, in seconds
    pub sim_granularity: f64,
}

impl Default for RolloutParams {
    fn default() -> Self {
        RolloutParams {
            sim_time: 1.0,
            sim_granularity: 0.025,
        }
    }
}

impl RolloutParams {
    /// Create parameters with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the parameters from a key/value map
    ///
    /// Unknown keys are ignored. On error the parameters are left unchanged.
    pub fn configure(&mut self, params: &HashMap<String, f64>) -> Result<(), ParamsError> {
        let mut sim_time = self.sim_time;
        let mut sim_granularity = self.sim_granularity;
        if let Some(&value) = params.get("sim_time") {
            sim_time = positive("sim_time", value)?;
        }
        if let Some(&value) = params.get("sim_granularity") {
            sim_granularity = positive("sim_granularity", value)?;
        }

        let steps = (sim_time / sim_granularity).round();
        if steps > MAX_STEPS as f64 {
            return Err(ParamsError::TooManySteps {
                sim_time,
                sim_granularity,
                max: MAX_STEPS,
            });
        }

        self.sim_time = sim_time;
        self.sim_granularity = sim_granularity;
        log::debug!(
            "Rollout configured: sim_time={}, sim_granularity={}, steps={}",
            self.sim_time,
            self.sim_granularity,
            self.num_steps()
        );
        Ok(())
    }

    /// Number of poses simulated per trajectory, rounded to the nearest whole step
    ///
    /// Always within `1..=MAX_STEPS`, even for fields set directly.
    pub fn num_steps(&self) -> usize {
        let steps = (self.sim_time / self.sim_granularity).round();
        if steps.is_nan() {
            return 1;
        }
        (steps as usize).clamp(1, MAX_STEPS)
    }

    /// Actual step between poses, so that `num_steps` steps span `sim_time` exactly
    pub fn time_delta(&self) -> f64 {
        self.sim_time / self.num_steps() as f64
    }

    /// Create an empty trajectory for a velocity command, sized for this rollout
    pub fn seed(&self, xv: f64, yv: f64, thetav: f64) -> TrajectorySample {
        TrajectorySample::with_command(xv, yv, thetav, self.time_delta(), self.num_steps())
    }
}

fn positive(name: &'static str, value: f64) -> Result<f64, ParamsError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ParamsError::NonPositive { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn default_steps() {
        let params = RolloutParams::new();
        assert_eq!(params.num_steps(), 40);
        assert!((params.time_delta() - 0.025).abs() < 1e-12);
    }

    #[rstest]
    #[case(0.9, 0.06, 15)]
    #[case(0.7, 0.1, 7)]
    #[case(1.7, 0.1, 17)]
    #[case(3.0, 0.05, 60)]
    #[case(1.0, 0.3, 3)]
    fn steps_round_to_nearest(
        #[case] sim_time: f64,
        #[case] sim_granularity: f64,
        #[case] steps: usize,
    ) {
        let mut params = RolloutParams::new();
        let mut map = HashMap::new();
        map.insert("sim_time".to_string(), sim_time);
        map.insert("sim_granularity".to_string(), sim_granularity);
        params.configure(&map).unwrap();

        assert_eq!(params.num_steps(), steps);
        assert!((params.time_delta() - sim_time / steps as f64).abs() < 1e-12);
    }

    #[test]
    fn whole_ratio_keeps_requested_step() {
        let params = RolloutParams {
            sim_time: 0.9,
            sim_granularity: 0.06,
        };
        assert!((params.time_delta() - 0.06).abs() < 1e-12);
    }

    #[test]
    fn configure_rejects_step_count_overflow() {
        let mut params = RolloutParams::new();
        let mut map = HashMap::new();
        map.insert("sim_time".to_string(), 1e300);
        map.insert("sim_granularity".to_string(), 1e-300);

        assert!(matches!(
            params.configure(&map),
            Err(ParamsError::TooManySteps { max: MAX_STEPS, .. })
        ));
        assert_eq!(params, RolloutParams::new());
        assert_eq!(params.seed(0.1, 0.0, 0.0).points_size(), 0);
    }

    #[test]
    fn oversized_fields_are_clamped() {
        let params = RolloutParams {
            sim_time: 1e300,
            sim_granularity: 1e-300,
        };
        assert_eq!(params.num_steps(), MAX_STEPS);

        let traj = params.seed(0.1, 0.0, 0.0);
        assert!(traj.is_empty());
    }

    #[test]
    fn granularity_longer_than_sim_time_gives_one_step() {
        let params = RolloutParams {
            sim_time: 0.5,
            sim_granularity: 2.0,
        };
        assert_eq!(params.num_steps(), 1);
        assert_eq!(params.time_delta(), 0.5);
    }

    #[test]
    fn configure_overrides_known_keys() {
        let mut params = RolloutParams::new();
        let mut map = HashMap::new();
        map.insert("sim_time".to_string(), 2.0);
        map.insert("sim_granularity".to_string(), 0.1);
        map.insert("max_vel_x".to_string(), 0.5);

        params.configure(&map).unwrap();
        assert_eq!(params.sim_time, 2.0);
        assert_eq!(params.sim_granularity, 0.1);
        assert_eq!(params.num_steps(), 20);
    }

    #[test]
    fn configure_rejects_non_positive() {
        let mut params = RolloutParams::new();
        let mut map = HashMap::new();
        map.insert("sim_granularity".to_string(), 0.0);

        assert_eq!(
            params.configure(&map),
            Err(ParamsError::NonPositive {
                name: "sim_granularity",
                value: 0.0
            })
        );
        assert_eq!(params.sim_granularity, 0.025);

        map.insert("sim_granularity".to_string(), f64::NAN);
        assert!(params.configure(&map).is_err());
    }

    #[test]
    fn seed_uses_derived_step() {
        let params = RolloutParams {
            sim_time: 1.0,
            sim_granularity: 0.25,
        };
        let traj = params.seed(0.4, 0.0, -0.1);
        assert_eq!(traj.command(), (0.4, 0.0, -0.1));
        assert_eq!(traj.time_delta, 0.25);
        assert!(traj.is_empty());
        assert!(!traj.is_scored());
    }
}
