use std::sync::{Arc, Mutex};

use approx::assert_relative_eq;
use robosim::bodies::{Joint, JointKind, Link};
use robosim::core::Floor;
use robosim::error::SimError;
use robosim::graphics::{RenderBackend, RenderFrame};
use robosim::{
    Body, BodyRegistry, Color, FreedomMode, Mechanism, MechanismLoader, PhysicsEngine, Pose,
    Scene, SimulationConfig, Simulator, Vector3,
};

fn free_box(name: &str, height: f32) -> Body {
    Body::create_box(
        Vector3::new(0.1, 0.1, 0.1),
        Pose::from_position(Vector3::new(0.0, height, 0.0)),
        FreedomMode::Free,
        1.0,
        Color::red(1.0),
        name,
    )
    .unwrap()
}

#[test]
fn test_box_creation_validation() {
    let bad_size = Body::create_box(
        Vector3::new(0.1, -0.2, 0.1),
        Pose::identity(),
        FreedomMode::Free,
        1.0,
        Color::red(1.0),
        "box_1",
    );
    assert!(matches!(bad_size, Err(SimError::InvalidParameter(_))));

    let zero_size = Body::create_box(
        Vector3::new(0.1, 0.0, 0.1),
        Pose::identity(),
        FreedomMode::Free,
        1.0,
        Color::red(1.0),
        "box_1",
    );
    assert!(matches!(zero_size, Err(SimError::InvalidParameter(_))));

    let bad_mass = Body::create_box(
        Vector3::new(0.1, 0.1, 0.1),
        Pose::identity(),
        FreedomMode::Free,
        -1.0,
        Color::red(1.0),
        "box_1",
    );
    assert!(matches!(bad_mass, Err(SimError::InvalidParameter(_))));
}

#[test]
fn test_ellipsoid_creation_validation() {
    let bad_radii = Body::create_ellipsoid(
        Vector3::new(0.2, 0.2, -0.2),
        Pose::identity(),
        FreedomMode::Free,
        1.0,
        Color::blue(1.0),
        "sphere_1",
    );
    assert!(matches!(bad_radii, Err(SimError::InvalidParameter(_))));

    let ok = Body::create_ellipsoid(
        Vector3::new(0.2, 0.2, 0.2),
        Pose::identity(),
        FreedomMode::Free,
        1.0,
        Color::blue(1.0),
        "sphere_1",
    );
    assert!(ok.is_ok());
}

#[test]
fn test_simulator_timestep_validation() {
    assert!(matches!(
        Simulator::new(0.0),
        Err(SimError::InvalidParameter(_))
    ));
    assert!(matches!(
        Simulator::new(-0.001),
        Err(SimError::InvalidParameter(_))
    ));
    assert!(Simulator::new(0.001).is_ok());
}

#[test]
fn test_duplicate_name_rejected() {
    let mut simu = Simulator::new(0.001).unwrap();
    simu.add_robot(free_box("box_1", 1.0)).unwrap();

    let second = simu.add_robot(free_box("box_1", 2.0));
    assert!(matches!(second, Err(SimError::DuplicateName(name)) if name == "box_1"));

    // The first registration is untouched
    assert_eq!(simu.robot_count(), 1);
    assert_relative_eq!(simu.robot("box_1").unwrap().pose().position.y, 1.0);
}

#[test]
fn test_run_step_count_and_elapsed_time() {
    let time_step = 0.001f32;
    let mut simu = Simulator::new(time_step).unwrap();
    simu.add_robot(free_box("box_1", 1.0)).unwrap();

    let duration = 1.0f32;
    simu.run(duration).unwrap();

    let expected_steps = (duration / time_step).ceil() as u64;
    assert_eq!(simu.steps_taken(), expected_steps);
    assert_relative_eq!(
        simu.time(),
        expected_steps as f32 * time_step,
        epsilon = 1.0e-6
    );
    assert_relative_eq!(simu.time(), 1.0, epsilon = 1.0e-3);

    // A partial-step duration still rounds up to a whole step
    simu.run(time_step * 1.5).unwrap();
    assert_eq!(simu.steps_taken(), expected_steps + 2);
}

#[test]
fn test_run_zero_duration_is_noop() {
    let mut simu = Simulator::new(0.01).unwrap();
    simu.add_robot(free_box("box_1", 1.0)).unwrap();
    simu.run(0.0).unwrap();
    assert_eq!(simu.steps_taken(), 0);
    assert_relative_eq!(simu.time(), 0.0);
}

#[test]
fn test_run_rejects_negative_duration() {
    let mut simu = Simulator::new(0.01).unwrap();
    assert!(matches!(
        simu.run(-1.0),
        Err(SimError::InvalidParameter(_))
    ));
    assert_eq!(simu.steps_taken(), 0);
}

#[test]
fn test_free_box_falls_onto_floor() {
    let mut simu = Simulator::new(0.001).unwrap();
    simu.add_floor(10.0, 0.2).unwrap();
    simu.add_robot(free_box("box_1", 1.5)).unwrap();

    simu.run(1.0).unwrap();

    let body = simu.robot("box_1").unwrap();
    let y = body.pose().position.y;
    let half_height = body.shape().half_height();

    // Fell from its spawn height, and rests on (not inside) the slab
    assert!(y < 1.5);
    assert!(y >= simu.floor().unwrap().top() + half_height - 1.0e-4);
}

#[test]
fn test_floor_replacement_is_last_write_wins() {
    let mut simu = Simulator::new(0.001).unwrap();
    simu.add_floor(10.0, 0.2).unwrap();
    simu.add_floor(5.0, 0.1).unwrap();

    let floor = simu.floor().unwrap();
    assert_eq!(*floor, Floor { size: 5.0, thickness: 0.1 });
}

#[test]
fn test_floor_validation() {
    let mut simu = Simulator::new(0.001).unwrap();
    assert!(matches!(
        simu.add_floor(0.0, 0.2),
        Err(SimError::InvalidParameter(_))
    ));
    assert!(matches!(
        simu.add_floor(10.0, -0.2),
        Err(SimError::InvalidParameter(_))
    ));
    assert!(simu.floor().is_none());
}

#[test]
fn test_fixed_enforced_body_keeps_pose() {
    let mut simu = Simulator::new(0.001).unwrap();
    simu.add_floor(10.0, 0.2).unwrap();

    let mut fixture = free_box("fixture", 0.8);
    fixture.fix_to_world();
    fixture.set_position_enforced(true);
    let initial_pose = fixture.pose();
    simu.add_robot(fixture).unwrap();

    for _ in 0..3 {
        simu.run(0.5).unwrap();
    }

    let pose = simu.robot("fixture").unwrap().pose();
    assert_eq!(pose, initial_pose);
}

#[test]
fn test_position_enforced_free_body_keeps_pose() {
    let mut simu = Simulator::new(0.001).unwrap();

    let mut fixture = free_box("fixture", 1.2);
    fixture.set_position_enforced(true);
    let initial_pose = fixture.pose();
    simu.add_robot(fixture).unwrap();

    simu.run(1.0).unwrap();

    let body = simu.robot("fixture").unwrap();
    assert_eq!(body.pose(), initial_pose);
    assert_eq!(body.linear_velocity(), Vector3::zeros());
}

#[test]
fn test_remove_robot() {
    let mut simu = Simulator::new(0.001).unwrap();
    simu.add_robot(free_box("box_1", 1.0)).unwrap();

    let removed = simu.remove_robot("box_1").unwrap();
    assert_eq!(removed.name(), "box_1");
    assert_eq!(simu.robot_count(), 0);

    assert!(matches!(
        simu.remove_robot("box_1"),
        Err(SimError::BodyNotFound(_))
    ));
    assert!(matches!(
        simu.robot("box_1"),
        Err(SimError::BodyNotFound(_))
    ));

    // The name is free for reuse after removal
    simu.add_robot(free_box("box_1", 2.0)).unwrap();
}

#[test]
fn test_registration_order_is_preserved() {
    let mut simu = Simulator::new(0.001).unwrap();
    for name in ["c", "a", "b"] {
        simu.add_robot(free_box(name, 1.0)).unwrap();
    }
    assert_eq!(simu.robots().names(), vec!["c", "a", "b"]);
}

#[test]
fn test_deterministic_pose_sequence() {
    let run_once = || {
        let mut simu = Simulator::new(0.001).unwrap();
        simu.add_floor(10.0, 0.2).unwrap();
        simu.add_robot(free_box("box_1", 1.5)).unwrap();
        simu.add_robot(free_box("box_2", 2.5)).unwrap();
        simu.run(0.75).unwrap();
        (
            simu.robot("box_1").unwrap().pose(),
            simu.robot("box_2").unwrap().pose(),
        )
    };

    let first = run_once();
    let second = run_once();
    assert_eq!(first, second);
}

/// Engine that moves every free body at a constant velocity, for asserting
/// on step/render interleaving
#[derive(Debug)]
struct ConstantVelocity {
    velocity: Vector3,
}

impl PhysicsEngine for ConstantVelocity {
    fn step(
        &mut self,
        dt: f32,
        bodies: &mut BodyRegistry,
        _floor: Option<&Floor>,
        _config: &SimulationConfig,
    ) -> robosim::Result<()> {
        for body in bodies.iter_mut() {
            if body.is_fixed() || body.is_position_enforced() {
                continue;
            }
            let mut pose = body.pose();
            pose.position += self.velocity * dt;
            body.set_pose(pose);
        }
        Ok(())
    }
}

/// Engine that fails after a fixed number of successful steps
#[derive(Debug)]
struct FailsAfter {
    remaining: u32,
}

impl PhysicsEngine for FailsAfter {
    fn step(
        &mut self,
        _dt: f32,
        _bodies: &mut BodyRegistry,
        _floor: Option<&Floor>,
        _config: &SimulationConfig,
    ) -> robosim::Result<()> {
        if self.remaining == 0 {
            return Err(SimError::SimulationDiverged(
                "scripted failure".to_string(),
            ));
        }
        self.remaining -= 1;
        Ok(())
    }
}

/// Backend that records the first body's x coordinate of every frame
#[derive(Debug, Default)]
struct RecordingBackend {
    xs: Arc<Mutex<Vec<f32>>>,
}

impl RenderBackend for RecordingBackend {
    fn render(&mut self, frame: &RenderFrame<'_>) -> robosim::Result<()> {
        let x = frame.bodies[0].pose.position.x;
        self.xs.lock().unwrap().push(x);
        Ok(())
    }
}

#[test]
fn test_render_observes_post_integration_poses() {
    let time_step = 0.01f32;
    let mut simu = Simulator::new(time_step).unwrap();
    simu.add_robot(free_box("box_1", 1.0)).unwrap();
    simu.set_physics(Box::new(ConstantVelocity {
        velocity: Vector3::new(1.0, 0.0, 0.0),
    }));

    let xs = Arc::new(Mutex::new(Vec::new()));
    let mut scene = Scene::new(Box::new(RecordingBackend { xs: xs.clone() }));
    scene.look_at(Vector3::new(0.0, 3.0, 1.0), Vector3::zeros());
    simu.set_graphics(Some(scene));

    simu.run(time_step * 5.0).unwrap();

    let xs = xs.lock().unwrap();
    assert_eq!(xs.len(), 5);
    for (i, &x) in xs.iter().enumerate() {
        // Frame i shows the pose after step i+1's integration, never a
        // stale or future one
        assert_relative_eq!(x, (i + 1) as f32 * time_step, epsilon = 1.0e-5);
    }
}

#[test]
fn test_no_scene_means_no_frames() {
    let mut simu = Simulator::new(0.01).unwrap();
    simu.add_robot(free_box("box_1", 1.0)).unwrap();
    simu.run(0.1).unwrap();
    assert!(simu.graphics().is_none());

    simu.set_graphics(Some(Scene::headless()));
    simu.run(0.1).unwrap();
    let expected = (0.1f32 / 0.01).ceil() as u64;
    assert_eq!(simu.graphics().unwrap().frames_rendered(), expected);
}

#[test]
fn test_divergence_stops_at_last_completed_step() {
    let time_step = 0.01f32;
    let mut simu = Simulator::new(time_step).unwrap();
    simu.add_robot(free_box("box_1", 1.0)).unwrap();
    simu.set_physics(Box::new(FailsAfter { remaining: 3 }));

    let result = simu.run(0.1);
    assert!(matches!(result, Err(SimError::SimulationDiverged(_))));

    // Three steps completed before the failure; the fourth never counted
    assert_eq!(simu.steps_taken(), 3);
    assert_relative_eq!(simu.time(), 3.0 * time_step, epsilon = 1.0e-6);

    // The failed call did not corrupt the registry
    assert_eq!(simu.robot_count(), 1);
}

#[test]
fn test_non_finite_gravity_diverges_immediately() {
    let mut simu = Simulator::new(0.01).unwrap();
    simu.add_robot(free_box("box_1", 1.0)).unwrap();
    simu.config_mut().gravity = Vector3::new(0.0, f32::NAN, 0.0);

    let result = simu.run(0.1);
    assert!(matches!(result, Err(SimError::SimulationDiverged(msg)) if msg.contains("box_1")));
    assert_eq!(simu.steps_taken(), 0);

    // The atomic step left the body at its pre-step state
    assert!(simu.robot("box_1").unwrap().has_finite_state());
}

#[derive(Debug)]
struct StubLoader;

impl MechanismLoader for StubLoader {
    fn load(&self, source: &str) -> robosim::Result<Mechanism> {
        match source {
            "arm.urdf" => Ok(Mechanism {
                links: vec![
                    Link {
                        name: "base".to_string(),
                        mass: 1.0,
                        offset: Pose::identity(),
                    },
                    Link {
                        name: "forearm".to_string(),
                        mass: 0.5,
                        offset: Pose::from_position(Vector3::new(0.0, 0.3, 0.0)),
                    },
                ],
                joints: vec![Joint {
                    name: "shoulder".to_string(),
                    parent: "base".to_string(),
                    child: "forearm".to_string(),
                    kind: JointKind::Revolute {
                        axis: Vector3::new(0.0, 0.0, 1.0),
                    },
                }],
            }),
            "empty.urdf" => Ok(Mechanism {
                links: Vec::new(),
                joints: Vec::new(),
            }),
            _ => Err(SimError::Load(format!("no such description `{source}`"))),
        }
    }
}

#[test]
fn test_mechanism_loading() {
    let arm = Body::create_from_description(&StubLoader, "arm.urdf", "arm").unwrap();
    assert_eq!(arm.name(), "arm");
    assert_relative_eq!(arm.mass(), 1.5);

    match arm.shape() {
        robosim::ShapeKind::Mechanism(mechanism) => {
            assert!(mechanism.link("forearm").is_some());
            assert!(mechanism.joint("shoulder").is_some());
        }
        other => panic!("expected mechanism shape, got {}", other.shape_type()),
    }
}

#[test]
fn test_mechanism_loading_failures() {
    let missing = Body::create_from_description(&StubLoader, "missing.urdf", "arm");
    assert!(matches!(missing, Err(SimError::Load(_))));

    let empty = Body::create_from_description(&StubLoader, "empty.urdf", "arm");
    assert!(matches!(empty, Err(SimError::Load(_))));
}

#[test]
fn test_pinned_arm_survives_stepping() {
    let mut simu = Simulator::new(0.001).unwrap();
    simu.add_floor(10.0, 0.2).unwrap();

    let mut arm = Body::create_from_description(&StubLoader, "arm.urdf", "arm").unwrap();
    arm.fix_to_world();
    arm.set_position_enforced(true);
    let pinned_pose = arm.pose();
    simu.add_robot(arm).unwrap();
    simu.add_robot(free_box("box_1", 1.5)).unwrap();

    simu.run(1.0).unwrap();

    assert_eq!(simu.robot("arm").unwrap().pose(), pinned_pose);
    assert!(simu.robot("box_1").unwrap().pose().position.y < 1.5);
}
