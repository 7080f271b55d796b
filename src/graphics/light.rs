use std::f32::consts::FRAC_PI_2;
use std::sync::Arc;

use crate::error::SimError;
use crate::graphics::Material;
use crate::math::{is_finite_vector, Vector3, EPSILON};
use crate::Result;

/// Distance falloff terms for point and spot lights.
///
/// The light's contribution at distance `d` is scaled by
/// `1 / (constant + linear * d + quadratic * d^2)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Attenuation {
    constant: f32,
    linear: f32,
    quadratic: f32,
}

impl Attenuation {
    /// Creates attenuation terms; each must be finite and non-negative
    pub fn new(constant: f32, linear: f32, quadratic: f32) -> Result<Self> {
        for (term, value) in [
            ("constant", constant),
            ("linear", linear),
            ("quadratic", quadratic),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(SimError::InvalidParameter(format!(
                    "{term} attenuation term must be non-negative, got {value}"
                )));
            }
        }
        Ok(Self {
            constant,
            linear,
            quadratic,
        })
    }

    /// Returns the constant term
    pub fn constant(&self) -> f32 {
        self.constant
    }

    /// Returns the linear term
    pub fn linear(&self) -> f32 {
        self.linear
    }

    /// Returns the quadratic term
    pub fn quadratic(&self) -> f32 {
        self.quadratic
    }
}

impl Default for Attenuation {
    fn default() -> Self {
        Self {
            constant: 1.0,
            linear: 0.0,
            quadratic: 0.0,
        }
    }
}

/// Geometric variant of a light source
#[derive(Debug, Clone)]
pub enum LightKind {
    /// Omnidirectional light radiating from a point
    Point {
        /// World-space position of the emitter
        position: Vector3,

        /// Emission strength
        intensity: f32,

        /// Distance falloff
        attenuation: Attenuation,
    },

    /// Parallel rays from an infinitely distant source
    Directional {
        /// Direction the light travels, stored normalized
        direction: Vector3,
    },

    /// Cone of light with angular falloff
    Spot {
        /// World-space position of the emitter
        position: Vector3,

        /// Cone axis, stored normalized
        direction: Vector3,

        /// Falloff sharpness inside the cone
        exponent: f32,

        /// Half-angle of the cone, in [0, pi/2]
        cutoff: f32,

        /// Emission strength
        intensity: f32,

        /// Distance falloff
        attenuation: Attenuation,
    },
}

/// A light source: exactly one geometric kind plus a shared material.
///
/// The kind is immutable after construction; build lights through
/// [`create_point_light`], [`create_directional_light`] and
/// [`create_spot_light`], which validate the geometric parameters.
#[derive(Debug, Clone)]
pub struct LightSource {
    material: Arc<Material>,
    kind: LightKind,
}

impl LightSource {
    /// Returns the light's material
    pub fn material(&self) -> &Arc<Material> {
        &self.material
    }

    /// Returns the light's geometric kind
    pub fn kind(&self) -> &LightKind {
        &self.kind
    }

    /// The overhead point light a fresh scene starts with
    pub(crate) fn default_overhead() -> Self {
        Self {
            material: Arc::new(Material::default()),
            kind: LightKind::Point {
                position: Vector3::new(0.0, 2.0, 0.0),
                intensity: 1.0,
                attenuation: Attenuation::default(),
            },
        }
    }
}

/// Creates a point light at `position`
pub fn create_point_light(
    position: Vector3,
    material: Arc<Material>,
    intensity: f32,
    attenuation: Attenuation,
) -> Result<LightSource> {
    validate_position(position)?;
    validate_intensity(intensity)?;
    Ok(LightSource {
        material,
        kind: LightKind::Point {
            position,
            intensity,
            attenuation,
        },
    })
}

/// Creates a directional light travelling along `direction`
pub fn create_directional_light(
    direction: Vector3,
    material: Arc<Material>,
) -> Result<LightSource> {
    let direction = normalized_direction(direction)?;
    Ok(LightSource {
        material,
        kind: LightKind::Directional { direction },
    })
}

/// Creates a spot light at `position` shining along `direction`.
///
/// The cutoff is the cone's half-angle and must lie in [0, pi/2]; the
/// exponent controls falloff sharpness inside the cone and must be
/// non-negative.
pub fn create_spot_light(
    position: Vector3,
    material: Arc<Material>,
    direction: Vector3,
    exponent: f32,
    cutoff: f32,
    intensity: f32,
    attenuation: Attenuation,
) -> Result<LightSource> {
    validate_position(position)?;
    validate_intensity(intensity)?;
    let direction = normalized_direction(direction)?;
    if !exponent.is_finite() || exponent < 0.0 {
        return Err(SimError::InvalidParameter(format!(
            "spot exponent must be non-negative, got {exponent}"
        )));
    }
    if !cutoff.is_finite() || !(0.0..=FRAC_PI_2).contains(&cutoff) {
        return Err(SimError::InvalidParameter(format!(
            "spot cutoff must lie in [0, pi/2], got {cutoff}"
        )));
    }
    Ok(LightSource {
        material,
        kind: LightKind::Spot {
            position,
            direction,
            exponent,
            cutoff,
            intensity,
            attenuation,
        },
    })
}

fn validate_position(position: Vector3) -> Result<()> {
    if !is_finite_vector(&position) {
        return Err(SimError::InvalidParameter(format!(
            "light position must be finite, got ({}, {}, {})",
            position.x, position.y, position.z
        )));
    }
    Ok(())
}

fn validate_intensity(intensity: f32) -> Result<()> {
    if !intensity.is_finite() || intensity < 0.0 {
        return Err(SimError::InvalidParameter(format!(
            "light intensity must be non-negative, got {intensity}"
        )));
    }
    Ok(())
}

fn normalized_direction(direction: Vector3) -> Result<Vector3> {
    let norm = direction.norm();
    if !norm.is_finite() || norm <= EPSILON {
        return Err(SimError::InvalidParameter(format!(
            "light direction must be a non-zero finite vector, got ({}, {}, {})",
            direction.x, direction.y, direction.z
        )));
    }
    Ok(direction / norm)
}
