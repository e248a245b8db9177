//! Particles, their environment, and the particle system abstraction
//!
//! A particle system exclusively owns its particles. Variants (explosion,
//! fountain) differ only in how they generate particles and when they
//! consider themselves finished.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::kinematics::semi_implicit_euler;
use crate::consts::{
    DEFAULT_GRAVITY, DEFAULT_MAX_LIFE_SPAN, DEFAULT_MAX_PARTICLES, DEFAULT_WIND, PARTICLE_AGE_STEP,
};
use crate::geometry::Rectangle2D;
use crate::renderer::ParticleCanvas;

/// Named particle colours, cycled by the explosion and fountain variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ParticleColour {
    /// Drawn with the canvas' default brush
    #[default]
    Black,
    DarkGoldenrod,
    DarkRed,
}

impl ParticleColour {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParticleColour::Black => "Black",
            ParticleColour::DarkGoldenrod => "DarkGoldenrod",
            ParticleColour::DarkRed => "DarkRed",
        }
    }

    /// Brush to request from the canvas; `None` means the default brush
    pub fn brush(&self) -> Option<&'static str> {
        match self {
            ParticleColour::Black => None,
            other => Some(other.as_str()),
        }
    }

    /// Colour for the `index`-th generated particle
    pub fn cycle(index: usize) -> Self {
        match index % 3 {
            0 => ParticleColour::Black,
            1 => ParticleColour::DarkGoldenrod,
            _ => ParticleColour::DarkRed,
        }
    }
}

/// Forces acting on every particle: gravity and wind
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Environment {
    gravity: Vec2,
    wind: Vec2,
}

impl Default for Environment {
    fn default() -> Self {
        Self {
            gravity: Vec2::new(0.0, DEFAULT_GRAVITY),
            wind: Vec2::new(DEFAULT_WIND.0, DEFAULT_WIND.1),
        }
    }
}

impl Environment {
    pub fn new(gravity: Vec2, wind: Vec2) -> Self {
        Self { gravity, wind }
    }

    pub fn gravity(&self) -> Vec2 {
        self.gravity
    }

    pub fn wind(&self) -> Vec2 {
        self.wind
    }

    pub fn set_gravity(&mut self, gravity: Vec2) {
        self.gravity = gravity;
    }

    pub fn set_wind(&mut self, wind: Vec2) {
        self.wind = wind;
    }

    /// Acceleration added to every particle at construction.
    ///
    /// Wind is added to gravity; older explosion code subtracted it. A
    /// headwind is expressed through the sign of `wind` instead.
    pub fn acceleration(&self) -> Vec2 {
        self.gravity + self.wind
    }
}

/// How a particle's age advances on each update
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Aging {
    /// Constant increment per update, independent of `dt`
    FixedStep(f32),
    /// Age advances by the elapsed `dt`
    Elapsed,
}

impl Default for Aging {
    fn default() -> Self {
        Aging::FixedStep(PARTICLE_AGE_STEP)
    }
}

impl Aging {
    #[inline]
    fn increment(&self, dt: f64) -> f32 {
        match *self {
            Aging::FixedStep(step) => step,
            Aging::Elapsed => dt as f32,
        }
    }
}

/// Bounds shared by every particle system
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParticleSystemConfig {
    pub max_particles: usize,
    /// A particle is retired once its age exceeds this
    pub max_life_span: f32,
    #[serde(default)]
    pub aging: Aging,
}

impl Default for ParticleSystemConfig {
    fn default() -> Self {
        Self {
            max_particles: DEFAULT_MAX_PARTICLES,
            max_life_span: DEFAULT_MAX_LIFE_SPAN,
            aging: Aging::default(),
        }
    }
}

/// Initial state for a new particle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleSpawn {
    pub position: Vec2,
    pub velocity: Vec2,
    /// Added to the environment's acceleration
    pub acceleration: Vec2,
    pub age: f32,
    pub colour: ParticleColour,
    /// Half-width of the drawn square
    pub width: f32,
}

impl Default for ParticleSpawn {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            acceleration: Vec2::ZERO,
            age: 0.0,
            colour: ParticleColour::Black,
            width: 1.0,
        }
    }
}

/// A single particle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    position: Vec2,
    velocity: Vec2,
    acceleration: Vec2,
    age: f32,
    colour: ParticleColour,
    /// 1 at birth, falls to 0 as the particle nears the end of its life
    intensity: f32,
    width: f32,
}

impl Particle {
    pub fn new(spawn: ParticleSpawn, environment: &Environment) -> Self {
        Self {
            position: spawn.position,
            velocity: spawn.velocity,
            acceleration: spawn.acceleration + environment.acceleration(),
            age: spawn.age,
            colour: spawn.colour,
            intensity: 1.0,
            width: spawn.width,
        }
    }

    /// Advance kinematics, then age the particle and update its intensity
    pub fn update(&mut self, dt: f64, max_life_span: f32, aging: Aging) {
        semi_implicit_euler(&mut self.position, &mut self.velocity, self.acceleration, dt);

        self.age += aging.increment(dt);
        self.intensity = (max_life_span - self.age) / max_life_span;
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn acceleration(&self) -> Vec2 {
        self.acceleration
    }

    pub fn age(&self) -> f32 {
        self.age
    }

    pub fn colour(&self) -> ParticleColour {
        self.colour
    }

    pub fn intensity(&self) -> f32 {
        self.intensity
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn set_width(&mut self, width: f32) {
        self.width = width;
    }

    /// Square covered by the particle
    pub fn bounds(&self) -> Rectangle2D {
        Rectangle2D::centered(self.position, self.width)
    }
}

/// Particle storage and lifecycle common to every system
#[derive(Debug, Clone)]
pub struct ParticlePool {
    particles: Vec<Particle>,
    config: ParticleSystemConfig,
    environment: Environment,
    /// Central position of the system
    position: Vec2,
}

impl ParticlePool {
    pub fn new(config: ParticleSystemConfig, environment: Environment, position: Vec2) -> Self {
        Self {
            particles: Vec::with_capacity(config.max_particles),
            config,
            environment,
            position,
        }
    }

    /// Add a particle; ignored (returns false) once the pool is full
    pub fn spawn(&mut self, spawn: ParticleSpawn) -> bool {
        if self.particles.len() >= self.config.max_particles {
            return false;
        }
        self.particles.push(Particle::new(spawn, &self.environment));
        true
    }

    /// Update every particle and drop those older than the maximal life span.
    /// Returns the number of particles retired.
    pub fn advance(&mut self, dt: f64) -> usize {
        let ParticleSystemConfig {
            max_life_span,
            aging,
            ..
        } = self.config;

        let before = self.particles.len();
        self.particles.retain_mut(|particle| {
            particle.update(dt, max_life_span, aging);
            particle.age() <= max_life_span
        });
        before - self.particles.len()
    }

    /// Fill one square per particle, faded by its intensity
    pub fn draw(&self, canvas: &mut dyn ParticleCanvas) {
        for particle in &self.particles {
            canvas.fill_rectangle(
                &particle.bounds(),
                particle.intensity(),
                particle.colour().brush(),
            );
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn config(&self) -> &ParticleSystemConfig {
        &self.config
    }

    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }
}

/// A collection of particles driven by the kinematics integrator
///
/// Owners keep a list of active systems and discard each one as soon as
/// [`ParticleSystem::update`] returns false.
pub trait ParticleSystem {
    fn pool(&self) -> &ParticlePool;

    /// Push a new particle into the system
    fn generate_particle(&mut self, spawn: ParticleSpawn);

    /// Advance every particle by `dt`; false once nothing is left alive
    fn update(&mut self, dt: f64) -> bool;

    /// Render the particles. `far_seer` is the interpolation factor between
    /// simulation steps; particles are drawn at their last simulated position.
    fn draw(&self, canvas: &mut dyn ParticleCanvas, _far_seer: f64) {
        self.pool().draw(canvas);
    }

    fn n_particles(&self) -> usize {
        self.pool().len()
    }

    fn max_life_span(&self) -> f32 {
        self.pool().config().max_life_span
    }

    fn max_particles(&self) -> usize {
        self.pool().config().max_particles
    }

    fn position(&self) -> Vec2 {
        self.pool().position()
    }
}
