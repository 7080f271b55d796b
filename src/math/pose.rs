use crate::math::{is_finite_vector, UnitQuaternion, Vector3};

/// A 6-DoF rigid transform: world-space translation plus orientation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    /// The translation component
    pub position: Vector3,

    /// The orientation component
    pub rotation: UnitQuaternion,
}

impl Pose {
    /// Creates a pose from a translation and a scaled-axis rotation
    /// (axis direction = rotation axis, length = angle in radians)
    pub fn new(position: Vector3, axis_angle: Vector3) -> Self {
        Self {
            position,
            rotation: UnitQuaternion::from_scaled_axis(axis_angle),
        }
    }

    /// The identity pose at the world origin
    pub fn identity() -> Self {
        Self {
            position: Vector3::zeros(),
            rotation: UnitQuaternion::identity(),
        }
    }

    /// Creates a pose with the given translation and no rotation
    pub fn from_position(position: Vector3) -> Self {
        Self {
            position,
            rotation: UnitQuaternion::identity(),
        }
    }

    /// Creates a pose at the origin with the given scaled-axis rotation
    pub fn from_axis_angle(axis_angle: Vector3) -> Self {
        Self::new(Vector3::zeros(), axis_angle)
    }

    /// Maps a point from the pose's local frame into the world frame
    pub fn transform_point(&self, point: Vector3) -> Vector3 {
        self.rotation * point + self.position
    }

    /// Returns true if both translation and orientation are finite
    pub fn is_finite(&self) -> bool {
        is_finite_vector(&self.position)
            && self.rotation.quaternion().coords.iter().all(|c| c.is_finite())
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::identity()
    }
}
