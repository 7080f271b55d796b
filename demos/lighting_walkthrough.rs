//! Walks through the scene lighting surface: shadow-quality toggles, then
//! one light of each kind built from a shared custom material, with short
//! simulation bursts in between.

use std::f32::consts::{FRAC_PI_8, PI};
use std::sync::Arc;

use robosim::graphics::{
    create_directional_light, create_point_light, create_spot_light,
};
use robosim::{
    Attenuation, Body, Color, FreedomMode, Material, Pose, Scene, Simulator, Vector3,
};

fn main() -> robosim::Result<()> {
    let mut simu = Simulator::new(0.001)?;
    simu.add_floor(10.0, 0.2)?;
    simu.add_robot(Body::create_box(
        Vector3::new(0.3, 0.3, 0.3),
        Pose::from_position(Vector3::new(0.0, 1.5, 0.0)),
        FreedomMode::Free,
        1.0,
        Color::red(1.0),
        "box_1",
    )?)?;

    let mut scene = Scene::headless();
    // Camera above and behind the origin, looking at the center
    scene.look_at(Vector3::new(0.0, 3.0, 1.0), Vector3::zeros());
    simu.set_graphics(Some(scene));

    // Walk through the shadow-quality settings
    if let Some(scene) = simu.graphics_mut() {
        scene.enable_shadows(false, false);
    }
    simu.run(1.0)?;
    if let Some(scene) = simu.graphics_mut() {
        scene.enable_shadows(true, false);
    }
    simu.run(1.0)?;
    if let Some(scene) = simu.graphics_mut() {
        scene.enable_shadows(true, true);
    }
    simu.run(1.0)?;

    // Swap the default illumination for custom lights, one kind at a time
    let material = Arc::new(Material::new(
        Color::white(),
        Color::white(),
        Color::white(),
        1000.0,
    )?);

    if let Some(scene) = simu.graphics_mut() {
        scene.clear_lights();
        scene.add_light(create_point_light(
            Vector3::new(0.0, 2.0, 0.0),
            material.clone(),
            1.0,
            Attenuation::new(1.0, 0.0, 0.0)?,
        )?);
    }
    simu.run(1.0)?;

    if let Some(scene) = simu.graphics_mut() {
        scene.clear_lights();
        scene.add_light(create_directional_light(
            Vector3::new(-1.0, -1.0, -1.0),
            material.clone(),
        )?);
    }
    simu.run(1.0)?;

    if let Some(scene) = simu.graphics_mut() {
        scene.clear_lights();
        scene.add_light(create_spot_light(
            Vector3::new(0.0, 1.0, 0.0),
            material,
            Vector3::new(-1.0, -1.0, -1.0),
            PI,
            FRAC_PI_8,
            1.0,
            Attenuation::new(1.0, 0.0, 0.0)?,
        )?);
    }
    simu.run(1.0)?;

    let frames = simu
        .graphics()
        .map(|scene| scene.frames_rendered())
        .unwrap_or(0);
    println!(
        "rendered {frames} frames over {} steps ({:.3}s simulated)",
        simu.steps_taken(),
        simu.time()
    );
    Ok(())
}
