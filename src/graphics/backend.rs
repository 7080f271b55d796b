use crate::bodies::ShapeKind;
use crate::graphics::{LightSource, ShadowMode};
use crate::math::{Color, Pose, Vector3};
use crate::Result;

/// Opaque camera parameters passed through to the render backend
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// World-space eye position
    pub eye: Vector3,

    /// World-space point the camera looks at
    pub target: Vector3,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: Vector3::new(0.0, 3.0, 3.0),
            target: Vector3::zeros(),
        }
    }
}

/// Snapshot of one body handed to the render backend
#[derive(Debug, Clone)]
pub struct BodyInstance {
    /// The body's name
    pub name: String,

    /// The body's pose at the end of the current step
    pub pose: Pose,

    /// The body's geometry
    pub shape: ShapeKind,

    /// The body's display color
    pub color: Color,

    /// Whether the body participates in shadow passes
    pub casts_shadows: bool,
}

/// Everything the backend needs to draw one frame
#[derive(Debug)]
pub struct RenderFrame<'a> {
    /// Bodies in registration order
    pub bodies: &'a [BodyInstance],

    /// Lights in insertion order
    pub lights: &'a [LightSource],

    /// The scene's current shadow setting
    pub shadow_mode: ShadowMode,

    /// The scene's camera
    pub camera: Camera,
}

/// Draws frames from body poses, lights and shadow settings.
///
/// GPU resources, shader and texture management, windows and event handling
/// all live behind this boundary.
pub trait RenderBackend: std::fmt::Debug {
    /// Renders one frame
    fn render(&mut self, frame: &RenderFrame<'_>) -> Result<()>;
}

/// Backend that counts frames and discards them.
///
/// Used for physics-only pipelines that still want the render cadence, and
/// for tests asserting on frame ordering.
#[derive(Debug, Default)]
pub struct HeadlessBackend {
    frames: u64,
}

impl HeadlessBackend {
    /// Creates a backend with a zeroed frame counter
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of frames rendered so far
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl RenderBackend for HeadlessBackend {
    fn render(&mut self, _frame: &RenderFrame<'_>) -> Result<()> {
        self.frames += 1;
        Ok(())
    }
}
