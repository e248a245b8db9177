//! Kinematics and particle simulation
//!
//! Everything here is synchronous and deterministic for a given seed:
//! - Semi-implicit Euler integration only
//! - Randomness injected through `RandomSource`
//! - Environment passed in at construction, never global

pub mod explosion;
pub mod fountain;
pub mod kinematics;
pub mod particles;
pub mod projectile;

pub use explosion::ExplosionPS;
pub use fountain::FountainPS;
pub use kinematics::{
    compute_launch_angle, compute_launch_angle_to_target, pos_um, semi_implicit_euler,
    semi_implicit_euler_1d,
};
pub use particles::{
    Aging, Environment, Particle, ParticleColour, ParticlePool, ParticleSpawn, ParticleSystem,
    ParticleSystemConfig,
};
pub use projectile::Projectile;
