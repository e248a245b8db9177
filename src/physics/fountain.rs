//! Fountain particle system
//!
//! Keeps emitting from a nozzle, replacing particles as they retire, until
//! stopped. It owns its random source since generation continues for the
//! lifetime of the system.

use glam::Vec2;

use super::explosion::WIDTH_RANGE;
use super::particles::{
    Environment, ParticleColour, ParticlePool, ParticleSpawn, ParticleSystem, ParticleSystemConfig,
};
use crate::math::RandomSource;

#[derive(Debug, Clone)]
pub struct FountainPS<R: RandomSource> {
    pool: ParticlePool,
    rng: R,
    /// Mean launch velocity
    nozzle_velocity: Vec2,
    /// Per-axis jitter added to the nozzle velocity
    spread: f32,
    /// Upper bound on particles emitted per update
    emission_rate: usize,
    emitted: usize,
    running: bool,
}

impl<R: RandomSource> FountainPS<R> {
    pub fn new(
        config: ParticleSystemConfig,
        environment: Environment,
        position: Vec2,
        nozzle_velocity: Vec2,
        spread: f32,
        emission_rate: usize,
        rng: R,
    ) -> Self {
        let mut fountain = Self {
            pool: ParticlePool::new(config, environment, position),
            rng,
            nozzle_velocity,
            spread,
            emission_rate,
            emitted: 0,
            running: true,
        };
        fountain.emit();
        fountain
    }

    /// Stop emitting; the fountain finishes once the remaining particles retire
    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Total particles generated so far
    pub fn emitted(&self) -> usize {
        self.emitted
    }

    fn emit(&mut self) {
        if !self.running {
            return;
        }

        let free = self.pool.config().max_particles.saturating_sub(self.pool.len());
        for _ in 0..free.min(self.emission_rate) {
            let jitter = Vec2::new(
                self.rng.random_float(-self.spread, self.spread),
                self.rng.random_float(-self.spread, self.spread),
            );
            let width = self.rng.random_float(WIDTH_RANGE.0, WIDTH_RANGE.1);

            self.generate_particle(ParticleSpawn {
                position: self.pool.position(),
                velocity: self.nozzle_velocity + jitter,
                acceleration: Vec2::ZERO,
                age: 0.0,
                colour: ParticleColour::cycle(self.emitted),
                width,
            });
        }
    }
}

impl<R: RandomSource> ParticleSystem for FountainPS<R> {
    fn pool(&self) -> &ParticlePool {
        &self.pool
    }

    fn generate_particle(&mut self, spawn: ParticleSpawn) {
        if self.pool.spawn(spawn) {
            self.emitted += 1;
        }
    }

    fn update(&mut self, dt: f64) -> bool {
        self.pool.advance(dt);
        self.emit();

        if !self.running && self.pool.is_empty() {
            log::debug!(
                "Fountain at {:?} dried up after {} particles",
                self.pool.position(),
                self.emitted
            );
            return false;
        }
        true
    }
}
