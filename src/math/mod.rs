mod color;
mod pose;

pub use color::Color;
pub use pose::Pose;

/// 3D vector used for positions, directions and velocities
pub type Vector3 = nalgebra::Vector3<f32>;

/// 4D vector, mostly used for packed color values
pub type Vector4 = nalgebra::Vector4<f32>;

/// Unit quaternion used for body orientations
pub type UnitQuaternion = nalgebra::UnitQuaternion<f32>;

/// Constant for a very small number, used for comparisons
pub const EPSILON: f32 = 1.0e-6;

/// Returns true if the two floating point values are approximately equal
#[inline]
pub fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

/// Returns true if the value is approximately zero
#[inline]
pub fn approx_zero(a: f32) -> bool {
    a.abs() < EPSILON
}

/// Returns true if every component of the vector is a finite number
#[inline]
pub fn is_finite_vector(v: &Vector3) -> bool {
    v.iter().all(|c| c.is_finite())
}
