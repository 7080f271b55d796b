mod backend;
mod light;
mod material;
mod scene;

pub use self::backend::{BodyInstance, Camera, HeadlessBackend, RenderBackend, RenderFrame};
pub use self::light::{
    create_directional_light, create_point_light, create_spot_light, Attenuation, LightKind,
    LightSource,
};
pub use self::material::Material;
pub use self::scene::{Scene, ShadowMode};
