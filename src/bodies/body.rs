use crate::bodies::{body_flags::BodyFlags, FreedomMode, MechanismLoader, ShapeKind};
use crate::error::SimError;
use crate::math::{is_finite_vector, Color, Pose, Vector3};
use crate::Result;

/// A simulated rigid or articulated entity with pose, shape and physical
/// properties.
///
/// Bodies are created standalone through the factory constructors and then
/// registered into a [`crate::Simulator`], which takes ownership; afterwards
/// they are addressed by name. Shape and freedom mode are fixed at creation
/// ([`Body::fix_to_world`] may convert a free body once, before
/// registration); the pose mutates only through the physics step or an
/// explicit [`Body::set_base_pose`].
#[derive(Debug, Clone)]
pub struct Body {
    /// The body's name, unique within a simulator
    name: String,

    /// The body's collision/render geometry
    shape: ShapeKind,

    /// The body's world-space pose
    pose: Pose,

    /// The last commanded pose, used for position enforcement and reset
    commanded_pose: Pose,

    /// The body's linear velocity
    linear_velocity: Vector3,

    /// The body's angular velocity (scaled-axis form)
    angular_velocity: Vector3,

    /// The body's mass
    mass: f32,

    /// The body's display color
    color: Color,

    /// Whether the body is free or welded to the world
    freedom: FreedomMode,

    /// The body's flags
    flags: BodyFlags,
}

impl Body {
    /// Creates a box-shaped body with the given full extents.
    ///
    /// Fails with `InvalidParameter` if any size component is not strictly
    /// positive or the mass is negative.
    pub fn create_box(
        size: Vector3,
        pose: Pose,
        freedom: FreedomMode,
        mass: f32,
        color: Color,
        name: &str,
    ) -> Result<Self> {
        if !is_finite_vector(&size) || size.iter().any(|c| *c <= 0.0) {
            return Err(SimError::InvalidParameter(format!(
                "box `{name}` size must be positive in every component, got ({}, {}, {})",
                size.x, size.y, size.z
            )));
        }
        Self::with_shape(ShapeKind::Box { size }, pose, freedom, mass, color, name)
    }

    /// Creates an ellipsoid-shaped body with the given semi-axes.
    ///
    /// Fails with `InvalidParameter` if any radius is not strictly positive
    /// or the mass is negative.
    pub fn create_ellipsoid(
        radii: Vector3,
        pose: Pose,
        freedom: FreedomMode,
        mass: f32,
        color: Color,
        name: &str,
    ) -> Result<Self> {
        if !is_finite_vector(&radii) || radii.iter().any(|c| *c <= 0.0) {
            return Err(SimError::InvalidParameter(format!(
                "ellipsoid `{name}` radii must be positive in every component, got ({}, {}, {})",
                radii.x, radii.y, radii.z
            )));
        }
        Self::with_shape(ShapeKind::Ellipsoid { radii }, pose, freedom, mass, color, name)
    }

    /// Creates an articulated body from an external mechanism description.
    ///
    /// Parsing is delegated to the loader; malformed descriptions or missing
    /// resources surface as `Load` errors. The body's mass is the sum of the
    /// mechanism's link masses.
    pub fn create_from_description(
        loader: &dyn MechanismLoader,
        source: &str,
        name: &str,
    ) -> Result<Self> {
        let mechanism = loader.load(source)?;
        if mechanism.links.is_empty() {
            return Err(SimError::Load(format!(
                "description `{source}` contains no links"
            )));
        }
        let mass = mechanism.total_mass();
        Self::with_shape(
            ShapeKind::Mechanism(mechanism),
            Pose::identity(),
            FreedomMode::Free,
            mass,
            Color::gray(),
            name,
        )
    }

    fn with_shape(
        shape: ShapeKind,
        pose: Pose,
        freedom: FreedomMode,
        mass: f32,
        color: Color,
        name: &str,
    ) -> Result<Self> {
        if name.is_empty() {
            return Err(SimError::InvalidParameter(
                "body name must not be empty".to_string(),
            ));
        }
        if !mass.is_finite() || mass < 0.0 {
            return Err(SimError::InvalidParameter(format!(
                "body `{name}` mass must be non-negative, got {mass}"
            )));
        }
        Ok(Self {
            name: name.to_string(),
            shape,
            pose,
            commanded_pose: pose,
            linear_velocity: Vector3::zeros(),
            angular_velocity: Vector3::zeros(),
            mass,
            color,
            freedom,
            flags: BodyFlags::CASTS_SHADOWS,
        })
    }

    /// Returns the body's name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the body's shape
    pub fn shape(&self) -> &ShapeKind {
        &self.shape
    }

    /// Returns the body's current world-space pose
    pub fn pose(&self) -> Pose {
        self.pose
    }

    /// Returns the last commanded pose
    pub fn commanded_pose(&self) -> Pose {
        self.commanded_pose
    }

    /// Returns the body's linear velocity
    pub fn linear_velocity(&self) -> Vector3 {
        self.linear_velocity
    }

    /// Returns the body's angular velocity
    pub fn angular_velocity(&self) -> Vector3 {
        self.angular_velocity
    }

    /// Returns the body's mass
    pub fn mass(&self) -> f32 {
        self.mass
    }

    /// Returns the body's display color
    pub fn color(&self) -> Color {
        self.color
    }

    /// Returns the body's freedom mode
    pub fn freedom(&self) -> FreedomMode {
        self.freedom
    }

    /// Returns true if the body is welded to the world frame
    pub fn is_fixed(&self) -> bool {
        self.freedom == FreedomMode::FixedToWorld
    }

    /// Welds the body to the world frame.
    ///
    /// Call before registering the body into a simulator; registration takes
    /// ownership, so a registered body's freedom mode can no longer change.
    pub fn fix_to_world(&mut self) {
        self.freedom = FreedomMode::FixedToWorld;
        self.linear_velocity = Vector3::zeros();
        self.angular_velocity = Vector3::zeros();
    }

    /// When enforced, the stepping loop clamps the body's pose and zeroes
    /// its velocities to the last commanded values every step, instead of
    /// letting them drift through free integration. Used for rigidly-mounted
    /// fixtures.
    pub fn set_position_enforced(&mut self, enforced: bool) {
        if enforced {
            self.flags.insert(BodyFlags::POSITION_ENFORCED);
        } else {
            self.flags.remove(BodyFlags::POSITION_ENFORCED);
        }
    }

    /// Returns whether position enforcement is active
    pub fn is_position_enforced(&self) -> bool {
        self.flags.contains(BodyFlags::POSITION_ENFORCED)
    }

    /// Sets whether the body participates in shadow passes
    pub fn set_casts_shadows(&mut self, casts: bool) {
        if casts {
            self.flags.insert(BodyFlags::CASTS_SHADOWS);
        } else {
            self.flags.remove(BodyFlags::CASTS_SHADOWS);
        }
    }

    /// Returns whether the body participates in shadow passes
    pub fn casts_shadows(&self) -> bool {
        self.flags.contains(BodyFlags::CASTS_SHADOWS)
    }

    /// Explicitly resets the body's pose, updating the commanded pose as
    /// well so position enforcement tracks the new target
    pub fn set_base_pose(&mut self, pose: Pose) {
        self.pose = pose;
        self.commanded_pose = pose;
    }

    /// Sets the body's pose. Integration-side mutation: physics engines call
    /// this each step; everyone else should use [`Body::set_base_pose`].
    pub fn set_pose(&mut self, pose: Pose) {
        self.pose = pose;
    }

    /// Sets the body's linear velocity (integration-side mutation)
    pub fn set_linear_velocity(&mut self, velocity: Vector3) {
        self.linear_velocity = velocity;
    }

    /// Sets the body's angular velocity (integration-side mutation)
    pub fn set_angular_velocity(&mut self, velocity: Vector3) {
        self.angular_velocity = velocity;
    }

    /// Clamps the pose to the commanded pose and zeroes both velocities
    pub(crate) fn enforce_commanded(&mut self) {
        self.pose = self.commanded_pose;
        self.linear_velocity = Vector3::zeros();
        self.angular_velocity = Vector3::zeros();
    }

    /// Returns true if pose and velocities are all finite
    pub fn has_finite_state(&self) -> bool {
        self.pose.is_finite()
            && is_finite_vector(&self.linear_velocity)
            && is_finite_vector(&self.angular_velocity)
    }
}
