use crate::error::SimError;
use crate::math::Color;
use crate::Result;

/// Illumination-response descriptor attached to light sources: how surfaces
/// answer the light's ambient, diffuse and specular contributions.
///
/// Immutable once constructed. Wrap one in an `Arc` to share it across
/// several lights; its lifetime is that of the longest holder.
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    ambient: Color,
    diffuse: Color,
    specular: Color,
    shininess: f32,
}

impl Material {
    /// Creates a material.
    ///
    /// Fails with `InvalidParameter` unless the shininess is positive and
    /// finite. Color components are clamped to [0, 1] by [`Color`] itself.
    pub fn new(ambient: Color, diffuse: Color, specular: Color, shininess: f32) -> Result<Self> {
        if !shininess.is_finite() || shininess <= 0.0 {
            return Err(SimError::InvalidParameter(format!(
                "material shininess must be positive, got {shininess}"
            )));
        }
        Ok(Self {
            ambient,
            diffuse,
            specular,
            shininess,
        })
    }

    /// Returns the ambient response color
    pub fn ambient(&self) -> Color {
        self.ambient
    }

    /// Returns the diffuse response color
    pub fn diffuse(&self) -> Color {
        self.diffuse
    }

    /// Returns the specular response color
    pub fn specular(&self) -> Color {
        self.specular
    }

    /// Returns the shininess exponent
    pub fn shininess(&self) -> f32 {
        self.shininess
    }
}

impl Default for Material {
    fn default() -> Self {
        Self {
            ambient: Color::white(),
            diffuse: Color::white(),
            specular: Color::white(),
            shininess: 80.0,
        }
    }
}
