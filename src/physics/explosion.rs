//! Explosion particle system
//!
//! All particles are generated at once around the blast point; the system
//! only decays afterwards. Once empty it is exhausted for good and should be
//! dropped by its owner.

use glam::Vec2;

use super::particles::{
    Environment, ParticleColour, ParticlePool, ParticleSpawn, ParticleSystem, ParticleSystemConfig,
};
use crate::math::RandomSource;

/// Half-size of the square around the blast point particles start in
pub const POSITION_JITTER: f32 = 50.0;
/// Upper bound of the randomized initial age
pub const MAX_INITIAL_AGE: f32 = 500.0;
/// Range of particle half-widths
pub const WIDTH_RANGE: (f32, f32) = (0.25, 2.5);

#[derive(Debug, Clone)]
pub struct ExplosionPS {
    pool: ParticlePool,
}

impl ExplosionPS {
    /// Blow up at `position`. Particle speeds are drawn from
    /// `±|velocity| / 2` on each axis.
    pub fn new(
        config: ParticleSystemConfig,
        environment: Environment,
        position: Vec2,
        velocity: Vec2,
        rng: &mut impl RandomSource,
    ) -> Self {
        let mut explosion = Self {
            pool: ParticlePool::new(config, environment, position),
        };

        let velo = velocity.length() * 0.5;
        let max_initial_age = MAX_INITIAL_AGE.min(config.max_life_span);

        for i in 0..config.max_particles {
            let spawn_position = Vec2::new(
                position.x + rng.random_float(-POSITION_JITTER, POSITION_JITTER),
                position.y - rng.random_float(-POSITION_JITTER, POSITION_JITTER),
            );
            let spawn_velocity = Vec2::new(rng.random_float(-velo, velo), rng.random_float(-velo, velo));
            let age = rng.random_float(0.0, max_initial_age);
            let width = rng.random_float(WIDTH_RANGE.0, WIDTH_RANGE.1);

            explosion.generate_particle(ParticleSpawn {
                position: spawn_position,
                velocity: spawn_velocity,
                acceleration: Vec2::ZERO,
                age,
                colour: ParticleColour::cycle(i),
                width,
            });
        }

        log::debug!(
            "Explosion at ({:.1}, {:.1}) with {} particles",
            position.x,
            position.y,
            explosion.n_particles()
        );
        explosion
    }
}

impl ParticleSystem for ExplosionPS {
    fn pool(&self) -> &ParticlePool {
        &self.pool
    }

    fn generate_particle(&mut self, spawn: ParticleSpawn) {
        self.pool.spawn(spawn);
    }

    fn update(&mut self, dt: f64) -> bool {
        self.pool.advance(dt);

        if self.pool.is_empty() {
            log::debug!("Explosion at {:?} exhausted", self.pool.position());
            return false;
        }
        true
    }
}
