use crate::bodies::Body;
use crate::core::{BodyRegistry, Floor, SimulationConfig};
use crate::error::SimError;
use crate::math::{approx_zero, Pose, UnitQuaternion, Vector3};
use crate::Result;

/// Advances body states by one fixed timestep.
///
/// Collision detection and constraint resolution internals live behind this
/// boundary; the stepping loop supplies the timestep, the registry, the
/// optional floor and the configuration, and expects updated poses or an
/// error on unrecoverable numerical failure. Fixed and position-enforced
/// bodies must be left untouched.
pub trait PhysicsEngine: std::fmt::Debug {
    /// Integrates all free bodies by `dt`, resolving floor contact
    fn step(
        &mut self,
        dt: f32,
        bodies: &mut BodyRegistry,
        floor: Option<&Floor>,
        config: &SimulationConfig,
    ) -> Result<()>;
}

/// Semi-implicit Euler integrator with single-plane floor contact.
///
/// Gravity and damping update the velocity first, then the velocity updates
/// the pose; contact against the floor's top surface is resolved by
/// clamping the body's support point and reflecting the vertical speed
/// through the configured restitution. A step is atomic: every new state is
/// computed and checked before any body is written, so a divergence leaves
/// the registry at the previous step's state.
#[derive(Debug, Default)]
pub struct SemiImplicitEuler;

struct BodyUpdate {
    pose: Pose,
    linear_velocity: Vector3,
    angular_velocity: Vector3,
}

impl SemiImplicitEuler {
    fn integrate(
        body: &Body,
        dt: f32,
        floor: Option<&Floor>,
        config: &SimulationConfig,
    ) -> BodyUpdate {
        let mut velocity = body.linear_velocity() + config.gravity * dt;
        velocity *= 1.0 - config.linear_damping.clamp(0.0, 1.0);

        let angular = body.angular_velocity() * (1.0 - config.angular_damping.clamp(0.0, 1.0));

        let mut pose = body.pose();
        pose.position += velocity * dt;
        if !approx_zero(angular.norm()) {
            pose.rotation = UnitQuaternion::from_scaled_axis(angular * dt) * pose.rotation;
        }

        if let Some(floor) = floor {
            let half_height = body.shape().half_height();
            let support = pose.position.y - half_height;
            if support < floor.top() && floor.covers(pose.position.x, pose.position.z) {
                pose.position.y = floor.top() + half_height;
                if velocity.y < 0.0 {
                    velocity.y = -velocity.y * config.restitution.clamp(0.0, 1.0);
                }
            }
        }

        BodyUpdate {
            pose,
            linear_velocity: velocity,
            angular_velocity: angular,
        }
    }
}

impl PhysicsEngine for SemiImplicitEuler {
    fn step(
        &mut self,
        dt: f32,
        bodies: &mut BodyRegistry,
        floor: Option<&Floor>,
        config: &SimulationConfig,
    ) -> Result<()> {
        let mut staged: Vec<Option<BodyUpdate>> = Vec::with_capacity(bodies.len());

        for body in bodies.iter() {
            if body.is_fixed() || body.is_position_enforced() {
                staged.push(None);
                continue;
            }

            let update = Self::integrate(body, dt, floor, config);
            let finite = update.pose.is_finite()
                && update.linear_velocity.iter().all(|c| c.is_finite())
                && update.angular_velocity.iter().all(|c| c.is_finite());
            if !finite {
                return Err(SimError::SimulationDiverged(format!(
                    "body `{}` reached a non-finite state",
                    body.name()
                )));
            }
            staged.push(Some(update));
        }

        for (body, update) in bodies.iter_mut().zip(staged) {
            if let Some(update) = update {
                body.set_linear_velocity(update.linear_velocity);
                body.set_angular_velocity(update.angular_velocity);
                body.set_pose(update.pose);
            }
        }
        Ok(())
    }
}
