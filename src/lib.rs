pub mod math;
pub mod bodies;
pub mod graphics;
pub mod core;

/// Re-export common types for easier usage
pub use crate::core::{Simulator, SimulationConfig, Floor, PhysicsEngine, SemiImplicitEuler, BodyRegistry};
pub use crate::bodies::{Body, FreedomMode, ShapeKind, Mechanism, MechanismLoader};
pub use crate::graphics::{Scene, ShadowMode, LightSource, Material, Attenuation};
pub use crate::math::{Vector3, Pose, Color};

/// Error types for the simulation runner
pub mod error {
    use thiserror::Error;

    #[derive(Error, Debug)]
    pub enum SimError {
        #[error("Invalid parameter: {0}")]
        InvalidParameter(String),

        #[error("Duplicate body name: {0}")]
        DuplicateName(String),

        #[error("Body not found: {0}")]
        BodyNotFound(String),

        #[error("Failed to load mechanism description: {0}")]
        Load(String),

        #[error("Simulation diverged: {0}")]
        SimulationDiverged(String),
    }
}

/// Result type for simulation operations
pub type Result<T> = std::result::Result<T, error::SimError>;

/// Crate version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
