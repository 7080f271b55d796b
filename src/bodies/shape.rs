use crate::bodies::Mechanism;
use crate::math::Vector3;

/// Geometry carried by a simulated body
#[derive(Debug, Clone)]
pub enum ShapeKind {
    /// Axis-aligned box given by its full extents
    Box {
        /// Full width, height and depth
        size: Vector3,
    },

    /// Ellipsoid given by its three semi-axes
    Ellipsoid {
        /// Radius along each axis
        radii: Vector3,
    },

    /// Articulated mechanism loaded from an external description
    Mechanism(Mechanism),
}

impl ShapeKind {
    /// Returns the type name of the shape
    pub fn shape_type(&self) -> &'static str {
        match self {
            ShapeKind::Box { .. } => "Box",
            ShapeKind::Ellipsoid { .. } => "Ellipsoid",
            ShapeKind::Mechanism(_) => "Mechanism",
        }
    }

    /// Vertical half-extent of the shape, measured from its frame origin.
    /// Used to resolve resting contact against the floor plane.
    pub fn half_height(&self) -> f32 {
        match self {
            ShapeKind::Box { size } => size.y * 0.5,
            ShapeKind::Ellipsoid { radii } => radii.y,
            // Mechanisms carry their own link geometry; the base frame is the
            // contact reference
            ShapeKind::Mechanism(_) => 0.0,
        }
    }

    /// Returns the volume of the shape
    pub fn volume(&self) -> f32 {
        match self {
            ShapeKind::Box { size } => size.x * size.y * size.z,
            ShapeKind::Ellipsoid { radii } => {
                (4.0 / 3.0) * std::f32::consts::PI * radii.x * radii.y * radii.z
            }
            ShapeKind::Mechanism(_) => 0.0,
        }
    }
}
