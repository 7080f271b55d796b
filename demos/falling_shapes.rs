//! Drops a handful of randomly sized boxes and ellipsoids onto the floor
//! and prints where they come to rest.
//!
//! Randomness is drawn from an explicitly seeded generator so repeated runs
//! produce the same scene and the same trajectories.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use robosim::{Body, Color, FreedomMode, Pose, Simulator, Vector3};

fn random_box(rng: &mut StdRng, num: usize) -> robosim::Result<Body> {
    let size = Vector3::new(
        rng.gen_range(0.2..0.4),
        rng.gen_range(0.1..0.5),
        rng.gen_range(0.2..0.4),
    );
    // Spawn above the ground
    let position = Vector3::new(
        rng.gen_range(-1.0..1.0),
        rng.gen_range(1.0..2.5),
        rng.gen_range(-1.0..1.0),
    );
    Body::create_box(
        size,
        Pose::from_position(position),
        FreedomMode::Free,
        1.0,
        Color::red(1.0),
        &format!("box_{num}"),
    )
}

fn random_ellipsoid(rng: &mut StdRng, num: usize) -> robosim::Result<Body> {
    let radius = rng.gen_range(0.1..0.3);
    let position = Vector3::new(
        rng.gen_range(-1.0..1.0),
        rng.gen_range(1.0..2.5),
        rng.gen_range(-1.0..1.0),
    );
    Body::create_ellipsoid(
        Vector3::new(radius, radius, radius),
        Pose::from_position(position),
        FreedomMode::Free,
        1.0,
        Color::blue(1.0),
        &format!("sphere_{num}"),
    )
}

fn main() -> robosim::Result<()> {
    let mut rng = StdRng::seed_from_u64(42);

    let mut simu = Simulator::new(0.001)?;
    simu.add_floor(10.0, 0.2)?;

    for num in 0..4 {
        simu.add_robot(random_box(&mut rng, num)?)?;
        simu.add_robot(random_ellipsoid(&mut rng, num)?)?;
    }

    simu.run(2.0)?;

    println!(
        "after {:.3}s ({} steps):",
        simu.time(),
        simu.steps_taken()
    );
    for body in simu.robots().iter() {
        let position = body.pose().position;
        println!(
            "  {:<10} rests at ({:+.3}, {:+.3}, {:+.3})",
            body.name(),
            position.x,
            position.y,
            position.z
        );
    }
    Ok(())
}
