use crate::bodies::Body;
use crate::core::{BodyRegistry, Floor, PhysicsEngine, SemiImplicitEuler, SimulationConfig};
use crate::error::SimError;
use crate::graphics::Scene;
use crate::Result;

/// The simulation runner: owns simulated time, the body registry and the
/// optional render scene, and advances everything in fixed-timestep order.
///
/// Elapsed time is derived from the step counter, so it only ever grows in
/// whole multiples of the timestep chosen at construction.
pub struct Simulator {
    /// The fixed timestep, set once at construction
    time_step: f32,

    /// Number of fully completed steps
    steps_taken: u64,

    /// All registered bodies, owned
    bodies: BodyRegistry,

    /// The optional render scene; `None` means physics-only stepping
    scene: Option<Scene>,

    /// The optional ground plane
    floor: Option<Floor>,

    /// Configuration handed to the physics engine each step
    config: SimulationConfig,

    /// The integration collaborator
    physics: Box<dyn PhysicsEngine>,
}

impl Simulator {
    /// Creates a simulator with the given fixed timestep and default
    /// configuration
    pub fn new(time_step: f32) -> Result<Self> {
        Self::with_config(time_step, SimulationConfig::default())
    }

    /// Creates a simulator with the given fixed timestep and configuration.
    ///
    /// Fails with `InvalidParameter` unless the timestep is positive and
    /// finite.
    pub fn with_config(time_step: f32, config: SimulationConfig) -> Result<Self> {
        if !time_step.is_finite() || time_step <= 0.0 {
            return Err(SimError::InvalidParameter(format!(
                "time step must be positive and finite, got {time_step}"
            )));
        }
        Ok(Self {
            time_step,
            steps_taken: 0,
            bodies: BodyRegistry::new(),
            scene: None,
            floor: None,
            config,
            physics: Box::new(SemiImplicitEuler),
        })
    }

    /// Swaps the integration collaborator
    pub fn set_physics(&mut self, physics: Box<dyn PhysicsEngine>) {
        self.physics = physics;
    }

    /// Returns the fixed timestep
    pub fn time_step(&self) -> f32 {
        self.time_step
    }

    /// Returns the elapsed simulated time, always a whole multiple of the
    /// timestep
    pub fn time(&self) -> f32 {
        self.steps_taken as f32 * self.time_step
    }

    /// Returns the number of fully completed steps
    pub fn steps_taken(&self) -> u64 {
        self.steps_taken
    }

    /// Returns a reference to the simulation configuration
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Returns a mutable reference to the simulation configuration
    pub fn config_mut(&mut self) -> &mut SimulationConfig {
        &mut self.config
    }

    /// Transfers ownership of a body into the registry.
    ///
    /// Fails with `DuplicateName` if a body with the same name is already
    /// registered.
    pub fn add_robot(&mut self, body: Body) -> Result<()> {
        self.bodies.add(body)
    }

    /// Removes a body from the registry and hands it back out
    pub fn remove_robot(&mut self, name: &str) -> Result<Body> {
        self.bodies.remove(name)
    }

    /// Looks up a registered body by name
    pub fn robot(&self, name: &str) -> Result<&Body> {
        self.bodies.get(name)
    }

    /// Looks up a registered body by name, mutably
    pub fn robot_mut(&mut self, name: &str) -> Result<&mut Body> {
        self.bodies.get_mut(name)
    }

    /// Returns the body registry
    pub fn robots(&self) -> &BodyRegistry {
        &self.bodies
    }

    /// Returns the number of registered bodies
    pub fn robot_count(&self) -> usize {
        self.bodies.len()
    }

    /// Adds a static ground plane of the given square size and thickness,
    /// top surface at y = 0.
    ///
    /// Calling again replaces the previous floor rather than stacking a
    /// second slab; last write wins.
    pub fn add_floor(&mut self, size: f32, thickness: f32) -> Result<()> {
        if !size.is_finite() || size <= 0.0 {
            return Err(SimError::InvalidParameter(format!(
                "floor size must be positive, got {size}"
            )));
        }
        if !thickness.is_finite() || thickness <= 0.0 {
            return Err(SimError::InvalidParameter(format!(
                "floor thickness must be positive, got {thickness}"
            )));
        }
        self.floor = Some(Floor { size, thickness });
        Ok(())
    }

    /// Returns the current floor, if one was added
    pub fn floor(&self) -> Option<&Floor> {
        self.floor.as_ref()
    }

    /// Attaches or detaches the render scene. With `None`, `run` performs
    /// physics-only stepping with no rendering cost.
    pub fn set_graphics(&mut self, scene: Option<Scene>) {
        self.scene = scene;
    }

    /// Returns the attached scene, if any
    pub fn graphics(&self) -> Option<&Scene> {
        self.scene.as_ref()
    }

    /// Returns the attached scene mutably, if any
    pub fn graphics_mut(&mut self) -> Option<&mut Scene> {
        self.scene.as_mut()
    }

    /// Advances the simulation by `ceil(duration / timestep)` steps.
    ///
    /// Each step runs in a fixed order: position-enforcement clamps, then
    /// physics integration, then the time advance, then one rendered frame
    /// if a scene is attached, so frame N always observes the poses as of
    /// the end of step N's integration. There is no partial-duration early
    /// return; on failure the step counter stays at the last fully
    /// completed step.
    pub fn run(&mut self, duration: f32) -> Result<()> {
        if !duration.is_finite() || duration < 0.0 {
            return Err(SimError::InvalidParameter(format!(
                "run duration must be non-negative and finite, got {duration}"
            )));
        }

        let steps = (duration / self.time_step).ceil() as u64;
        for _ in 0..steps {
            for body in self.bodies.iter_mut() {
                if body.is_position_enforced() {
                    body.enforce_commanded();
                }
            }

            self.physics
                .step(self.time_step, &mut self.bodies, self.floor.as_ref(), &self.config)
                .map_err(|err| match err {
                    SimError::SimulationDiverged(msg) => SimError::SimulationDiverged(
                        format!("step {}: {msg}", self.steps_taken + 1),
                    ),
                    other => other,
                })?;
            self.steps_taken += 1;

            if let Some(scene) = &mut self.scene {
                scene.render(&self.bodies)?;
            }
        }
        Ok(())
    }
}
