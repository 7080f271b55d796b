use crate::core::BodyRegistry;
use crate::graphics::{BodyInstance, Camera, HeadlessBackend, LightSource, RenderBackend, RenderFrame};
use crate::math::Vector3;
use crate::Result;

/// Whether and how shadows are cast during rendering.
///
/// Purely a render-quality setting; it never affects physics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShadowMode {
    /// No shadow pass
    Off,

    /// Shadows cast by opaque geometry only
    OpaqueOnly,

    /// Shadows cast by opaque and transparent geometry
    OpaqueAndTransparent,
}

/// The render-side aggregate: the ordered set of lights, the shadow setting
/// and the camera, consumed once per rendered frame.
///
/// A fresh scene carries one default overhead point light and opaque
/// shadows; both can be changed at any time, including between `run` calls.
#[derive(Debug)]
pub struct Scene {
    /// Lights in insertion order; insertion order is render order
    lights: Vec<LightSource>,

    /// The current shadow setting
    shadow_mode: ShadowMode,

    /// The camera handed through to the backend
    camera: Camera,

    /// The render collaborator
    backend: Box<dyn RenderBackend>,

    /// Number of frames rendered so far
    frames_rendered: u64,
}

impl Scene {
    /// Creates a scene drawing through the given backend
    pub fn new(backend: Box<dyn RenderBackend>) -> Self {
        Self {
            lights: vec![LightSource::default_overhead()],
            shadow_mode: ShadowMode::OpaqueOnly,
            camera: Camera::default(),
            backend,
            frames_rendered: 0,
        }
    }

    /// Creates a scene whose backend counts frames and discards them
    pub fn headless() -> Self {
        Self::new(Box::new(HeadlessBackend::new()))
    }

    /// Appends a light to the scene. No deduplication, no bound on the
    /// count; keeping the set renderable is the caller's responsibility.
    pub fn add_light(&mut self, light: LightSource) {
        self.lights.push(light);
    }

    /// Removes all lights. The scene stays alive and renders with
    /// ambient-only or no illumination, at the backend's discretion.
    pub fn clear_lights(&mut self) {
        self.lights.clear();
    }

    /// Returns the lights in insertion order
    pub fn lights(&self) -> &[LightSource] {
        &self.lights
    }

    /// Sets the shadow mode: disabled, opaque-only, or opaque and
    /// transparent casters
    pub fn enable_shadows(&mut self, enabled: bool, transparent: bool) {
        self.shadow_mode = if !enabled {
            ShadowMode::Off
        } else if transparent {
            ShadowMode::OpaqueAndTransparent
        } else {
            ShadowMode::OpaqueOnly
        };
    }

    /// Returns the current shadow mode
    pub fn shadow_mode(&self) -> ShadowMode {
        self.shadow_mode
    }

    /// Places the camera at `eye` looking at `target`. Passed through to
    /// the backend untouched.
    pub fn look_at(&mut self, eye: Vector3, target: Vector3) {
        self.camera = Camera { eye, target };
    }

    /// Returns the camera
    pub fn camera(&self) -> Camera {
        self.camera
    }

    /// Returns the number of frames rendered so far
    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    /// Renders one frame from the bodies' current poses under the current
    /// lights and shadow mode
    pub(crate) fn render(&mut self, bodies: &BodyRegistry) -> Result<()> {
        let instances: Vec<BodyInstance> = bodies
            .iter()
            .map(|body| BodyInstance {
                name: body.name().to_string(),
                pose: body.pose(),
                shape: body.shape().clone(),
                color: body.color(),
                casts_shadows: body.casts_shadows(),
            })
            .collect();

        let frame = RenderFrame {
            bodies: &instances,
            lights: &self.lights,
            shadow_mode: self.shadow_mode,
            camera: self.camera,
        };
        self.backend.render(&frame)?;
        self.frames_rendered += 1;
        Ok(())
    }
}
