use crate::math::{Pose, Vector3};
use crate::Result;

/// An articulated mechanism: named links connected by joints.
///
/// Produced by a [`MechanismLoader`]; this crate stores the description and
/// steps the mechanism's base like any other body, it does not interpret the
/// source format.
#[derive(Debug, Clone)]
pub struct Mechanism {
    /// The links of the mechanism, base first
    pub links: Vec<Link>,

    /// The joints connecting the links
    pub joints: Vec<Joint>,
}

impl Mechanism {
    /// Total mass of the mechanism, summed over its links
    pub fn total_mass(&self) -> f32 {
        self.links.iter().map(|link| link.mass).sum()
    }

    /// Looks up a link by name
    pub fn link(&self, name: &str) -> Option<&Link> {
        self.links.iter().find(|link| link.name == name)
    }

    /// Looks up a joint by name
    pub fn joint(&self, name: &str) -> Option<&Joint> {
        self.joints.iter().find(|joint| joint.name == name)
    }
}

/// A single rigid link of a mechanism
#[derive(Debug, Clone)]
pub struct Link {
    /// Name of the link, unique within its mechanism
    pub name: String,

    /// Mass of the link
    pub mass: f32,

    /// Pose of the link relative to the mechanism base
    pub offset: Pose,
}

/// A joint connecting two links
#[derive(Debug, Clone)]
pub struct Joint {
    /// Name of the joint, unique within its mechanism
    pub name: String,

    /// Name of the parent link
    pub parent: String,

    /// Name of the child link
    pub child: String,

    /// The joint's degree of freedom
    pub kind: JointKind,
}

/// The degree of freedom a joint allows
#[derive(Debug, Clone)]
pub enum JointKind {
    /// No relative motion between parent and child
    Fixed,

    /// Rotation about an axis
    Revolute {
        /// Rotation axis in the parent frame
        axis: Vector3,
    },

    /// Translation along an axis
    Prismatic {
        /// Sliding axis in the parent frame
        axis: Vector3,
    },
}

/// Parses a mechanism description (URDF or similar) into link/joint form.
///
/// The description format is entirely the loader's concern; failures surface
/// as [`crate::error::SimError::Load`].
pub trait MechanismLoader {
    /// Loads the mechanism named by `source` (a path or handle)
    fn load(&self, source: &str) -> Result<Mechanism>;
}
