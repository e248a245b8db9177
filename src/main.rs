//! Kinetica demo entry point
//!
//! Runs an explosion to exhaustion and flies a projectile at a computed
//! launch angle, logging what happens. Pass a settings JSON path as the
//! first argument to override the defaults.

use glam::Vec2;

use kinetica::SimSettings;
use kinetica::consts::{SCREEN_HEIGHT, SIM_DT};
use kinetica::physics::{ExplosionPS, ParticleSystem, Projectile, compute_launch_angle};
use kinetica::renderer::QuadBatch;

/// Frames between two logged draws
const DRAW_LOG_INTERVAL: u64 = 5000;

fn run_explosion(settings: &SimSettings) {
    let mut rng = settings.number_theory();
    log::info!("Explosion seed: {}", rng.seed());

    let mut explosion = ExplosionPS::new(
        settings.particles,
        settings.environment,
        Vec2::new(960.0, 540.0),
        Vec2::new(120.0, -80.0),
        &mut rng,
    );

    let mut batch = QuadBatch::new();
    let mut frames: u64 = 0;
    while explosion.update(SIM_DT) {
        frames += 1;
        if frames % DRAW_LOG_INTERVAL == 0 {
            batch.clear();
            explosion.draw(&mut batch, 0.0);
            log::info!(
                "frame {}: {} particles, {} bytes of vertices",
                frames,
                explosion.n_particles(),
                batch.as_bytes().len()
            );
        }
    }
    log::info!("Explosion finished after {} frames", frames);
}

fn run_projectile(settings: &SimSettings) {
    let speed = 150.0;
    let target_range = 1500.0;
    let gravity = settings.environment.gravity().y;

    let angle = match compute_launch_angle(speed, target_range, gravity) {
        Ok(angle) => angle,
        Err(e) => {
            log::warn!("{}", e);
            return;
        }
    };

    let mut projectile = Projectile::from_ground(speed, angle).with_gravity(gravity);
    log::info!(
        "Launching at {:.2}° (range {:.1}, peak {:.1}, flight {:.2}s)",
        angle,
        projectile.range(),
        projectile.peak(),
        projectile.time_of_flight()
    );

    let mut elapsed = 0.0;
    while projectile.position().y <= SCREEN_HEIGHT && elapsed < 60.0 {
        projectile.update(SIM_DT);
        elapsed += SIM_DT;
    }
    log::info!(
        "Landed at x = {:.1} after {:.2}s",
        projectile.position().x,
        elapsed
    );
}

fn main() {
    env_logger::init();
    log::info!("Kinetica demo starting...");

    let settings = match std::env::args().nth(1) {
        Some(path) => SimSettings::load(path),
        None => SimSettings::default(),
    };

    run_explosion(&settings);
    run_projectile(&settings);
}
