mod body;
mod mechanism;
mod shape;

pub use self::body::Body;
pub use self::mechanism::{Joint, JointKind, Link, Mechanism, MechanismLoader};
pub use self::shape::ShapeKind;

/// Whether a body is dynamically free or rigidly fixed to the world frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FreedomMode {
    /// The body is integrated freely by the physics engine
    Free,

    /// The body is welded to the world frame and never moves
    FixedToWorld,
}

/// Flags for controlling per-body stepping and rendering behavior
pub mod body_flags {
    use bitflags::bitflags;

    bitflags! {
        /// Flags for controlling the behavior of simulated bodies
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
        pub struct BodyFlags: u32 {
            /// Pose and velocities are clamped to the commanded values every step
            const POSITION_ENFORCED = 0x01;

            /// Body participates in shadow passes
            const CASTS_SHADOWS = 0x02;
        }
    }
}
