//! Common utilities and types for trajectory rollout

/// Common types and utilities used across the codebase
pub mod types {
    use nalgebra::{Isometry2, Vector2};

    /// A 2D pose (x, y, theta) in the world frame
    #[derive(Debug, Clone, Copy, PartialEq, Default)]
    pub struct Pose2D {
        pub x: f64,
        pub y: f64,
        pub theta: f64,
    }

    impl Pose2D {
        /// Create a new pose
        pub fn new(x: f64, y: f64, theta: f64) -> Self {
            Pose2D { x, y, theta }
        }

        /// Rigid transform from the pose's frame to the world frame
        pub fn to_isometry(&self) -> Isometry2<f64> {
            Isometry2::new(Vector2::new(self.x, self.y), self.theta)
        }
    }

    impl From<(f64, f64, f64)> for Pose2D {
        fn from((x, y, theta): (f64, f64, f64)) -> Self {
            Pose2D { x, y, theta }
        }
    }

    impl From<Pose2D> for (f64, f64, f64) {
        fn from(pose: Pose2D) -> Self {
            (pose.x, pose.y, pose.theta)
        }
    }

    impl From<Isometry2<f64>> for Pose2D {
        fn from(iso: Isometry2<f64>) -> Self {
            Pose2D {
                x: iso.translation.vector.x,
                y: iso.translation.vector.y,
                theta: iso.rotation.angle(),
            }
        }
    }

}
