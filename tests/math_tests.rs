use approx::assert_relative_eq;
use robosim::math::{approx_eq, approx_zero, is_finite_vector, UnitQuaternion};
use robosim::{Pose, Vector3};

#[test]
fn test_pose_identity() {
    let pose = Pose::identity();
    assert_relative_eq!(pose.position.norm(), 0.0);
    assert_eq!(pose.rotation, UnitQuaternion::identity());
    assert_eq!(Pose::default(), pose);
}

#[test]
fn test_pose_from_scaled_axis() {
    // Quarter turn about +z maps +x onto +y
    let pose = Pose::new(
        Vector3::new(1.0, 2.0, 3.0),
        Vector3::new(0.0, 0.0, std::f32::consts::FRAC_PI_2),
    );
    let mapped = pose.transform_point(Vector3::new(1.0, 0.0, 0.0));
    assert_relative_eq!(mapped.x, 1.0, epsilon = 1.0e-6);
    assert_relative_eq!(mapped.y, 3.0, epsilon = 1.0e-6);
    assert_relative_eq!(mapped.z, 3.0, epsilon = 1.0e-6);
}

#[test]
fn test_pose_finiteness() {
    assert!(Pose::identity().is_finite());

    let mut pose = Pose::identity();
    pose.position.x = f32::NAN;
    assert!(!pose.is_finite());
}

#[test]
fn test_float_helpers() {
    assert!(approx_eq(1.0, 1.0 + 1.0e-7));
    assert!(!approx_eq(1.0, 1.1));
    assert!(approx_zero(1.0e-7));
    assert!(!approx_zero(0.01));

    assert!(is_finite_vector(&Vector3::new(1.0, 2.0, 3.0)));
    assert!(!is_finite_vector(&Vector3::new(1.0, f32::INFINITY, 3.0)));
}
