//! Kinetica - 2D geometry and kinematics for small arcade games
//!
//! Core modules:
//! - `math`: Vector algebra, trigonometry helpers, random number source
//! - `geometry`: Lines, rays, segments, circles, rectangles, capsules, polygons
//! - `physics`: Semi-implicit Euler integration, projectiles, particle systems
//! - `renderer`: Canvas abstraction and a CPU quad batch for particles
//! - `settings`: Data-driven environment and particle tuning

pub mod error;
pub mod geometry;
pub mod math;
pub mod physics;
pub mod renderer;
pub mod settings;

pub use error::{GeometryError, KinematicsError, SettingsError};
pub use math::{NumberTheory, RandomSource, Vector2Ext, Vector2F};
pub use settings::SimSettings;

use glam::Vec2;

/// Simulation constants
pub mod consts {
    /// Fixed simulation timestep used by the demo loop (60 Hz)
    pub const SIM_DT: f64 = 1.0 / 60.0;

    /// Screen height in pixels; y grows downward
    pub const SCREEN_HEIGHT: f32 = 1080.0;

    /// Earth gravity in pixels per second squared (tutorial scale)
    pub const DEFAULT_GRAVITY: f32 = 9.81;
    /// Default wind acting on particles
    pub const DEFAULT_WIND: (f32, f32) = (7.5, -1.0);

    /// Particle system defaults
    pub const DEFAULT_MAX_PARTICLES: usize = 150;
    pub const DEFAULT_MAX_LIFE_SPAN: f32 = 2500.0;
    /// Age added to a particle on every update
    pub const PARTICLE_AGE_STEP: f32 = 0.1;

    /// 1 pixel = 0.000264583 meters
    pub const METERS_PER_PIXEL: f32 = 0.000264583;
    /// 1 meter = 3779.5275590551 pixels
    pub const PIXELS_PER_METER: f32 = 3779.5275590551;
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_polar_to_cartesian() {
        let p = polar_to_cartesian(2.0, FRAC_PI_2);
        assert!(p.x.abs() < 1e-6);
        assert!((p.y - 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_unit_conversions_are_inverse() {
        let product = consts::METERS_PER_PIXEL * consts::PIXELS_PER_METER;
        assert!((product - 1.0).abs() < 1e-4);
    }
}
