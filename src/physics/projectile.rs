//! A projectile with recomputable launch characteristics
//!
//! Screen coordinates: y grows downward, so gravity is positive and the
//! launch velocity has a negative y component.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::kinematics::semi_implicit_euler;
use crate::consts::{DEFAULT_GRAVITY, SCREEN_HEIGHT};
use crate::math::{deg_to_rad, rad_to_deg};

/// Launch angle adjustment per step (degrees)
pub const ANGLE_STEP: f32 = 1.25;
/// Launch speed adjustment per step (pixels per second)
pub const SPEED_STEP: f32 = 50.0;
/// Gravity adjustment per step (pixels per second squared)
pub const GRAVITY_STEP: f32 = 50.0;

/// Lower left corner of the screen, where the simplified formulas apply
pub const GROUND_ORIGIN: Vec2 = Vec2::new(0.0, SCREEN_HEIGHT);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    /// Pixels per second
    launch_speed: f32,
    /// Degrees above the horizontal
    launch_angle: f32,
    /// Pixels per second squared
    gravity: f32,
    /// Pixels
    range: f32,
    /// Pixels above the launch height
    peak: f32,
    /// Seconds
    time_of_flight: f32,

    position: Vec2,
    velocity: Vec2,
    acceleration: Vec2,
}

impl Projectile {
    /// Projectile at the origin under default gravity and no friction
    pub fn new(launch_speed: f32, launch_angle: f32) -> Self {
        let mut projectile = Self {
            launch_speed,
            launch_angle,
            gravity: DEFAULT_GRAVITY,
            range: 0.0,
            peak: 0.0,
            time_of_flight: 0.0,
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            acceleration: Vec2::new(0.0, DEFAULT_GRAVITY),
        };
        projectile.recompute();
        projectile
    }

    /// Projectile launched from [`GROUND_ORIGIN`]
    pub fn from_ground(launch_speed: f32, launch_angle: f32) -> Self {
        Self::new(launch_speed, launch_angle).at(GROUND_ORIGIN)
    }

    /// Move the launch point
    pub fn at(mut self, launch_point: Vec2) -> Self {
        self.position = launch_point;
        self.recompute();
        self
    }

    pub fn with_gravity(mut self, gravity: f32) -> Self {
        self.gravity = gravity;
        self.acceleration.y = gravity;
        self.recompute();
        self
    }

    /// Constant horizontal deceleration
    pub fn with_friction(mut self, friction_x: f32) -> Self {
        self.acceleration.x = -friction_x;
        self
    }

    /// Recompute the launch velocity, range, peak and time of flight
    fn recompute(&mut self) {
        let angle_rad = deg_to_rad(self.launch_angle);
        let (sin_angle, cos_angle) = angle_rad.sin_cos();
        let v = self.launch_speed;
        let g = self.gravity;

        self.velocity = Vec2::new(v * cos_angle, -v * sin_angle);

        if self.position == GROUND_ORIGIN {
            self.time_of_flight = (2.0 * v / g) * sin_angle;
            self.range = (v * v / g) * 2.0 * sin_angle * cos_angle;
        } else {
            let y = self.position.y;
            self.time_of_flight = (v * sin_angle + (v * v * sin_angle * sin_angle + 2.0 * g * y).sqrt()) / g;
            self.range = (v * v * (2.0 * angle_rad).sin()) / (2.0 * g)
                * (1.0 + (1.0 + (2.0 * g * y) / (v * v * sin_angle * sin_angle)).sqrt());
        }

        self.peak = (v * v * sin_angle * sin_angle) / (2.0 * g);
    }

    /// Advance position and velocity by `dt` seconds
    pub fn update(&mut self, dt: f64) {
        semi_implicit_euler(&mut self.position, &mut self.velocity, self.acceleration, dt);
    }

    pub fn set_launch_angle(&mut self, angle: f32) {
        self.launch_angle = angle;
        self.recompute();
    }

    pub fn reduce_launch_angle(&mut self) {
        self.set_launch_angle(self.launch_angle - ANGLE_STEP);
    }

    pub fn increase_launch_angle(&mut self) {
        self.set_launch_angle(self.launch_angle + ANGLE_STEP);
    }

    pub fn reduce_launch_speed(&mut self) {
        self.launch_speed -= SPEED_STEP;
        self.recompute();
    }

    pub fn increase_launch_speed(&mut self) {
        self.launch_speed += SPEED_STEP;
        self.recompute();
    }

    pub fn increase_gravity(&mut self) {
        self.gravity += GRAVITY_STEP;
        self.acceleration.y = self.gravity;
        self.recompute();
    }

    pub fn decrease_gravity(&mut self) {
        self.gravity -= GRAVITY_STEP;
        self.acceleration.y = self.gravity;
        self.recompute();
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

    pub fn launch_speed(&self) -> f32 {
        self.launch_speed
    }

    pub fn launch_angle(&self) -> f32 {
        self.launch_angle
    }

    pub fn gravity(&self) -> f32 {
        self.gravity
    }

    pub fn range(&self) -> f32 {
        self.range
    }

    pub fn peak(&self) -> f32 {
        self.peak
    }

    pub fn time_of_flight(&self) -> f32 {
        self.time_of_flight
    }

    /// Direction of movement in degrees, `atan(vy / vx)`
    pub fn movement_direction(&self) -> f32 {
        rad_to_deg((self.velocity.y / self.velocity.x).atan())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32, tolerance: f32) -> bool {
        (a - b).abs() <= tolerance
    }

    #[test]
    fn test_ground_launch_matches_classical_formulas() {
        let v = 100.0f32;
        let g = DEFAULT_GRAVITY;
        let p = Projectile::from_ground(v, 45.0);

        // R = v² sin(2θ) / g, H = v² sin²θ / 2g, T = 2 v sinθ / g
        assert!(close(p.range(), v * v / g, 0.5));
        assert!(close(p.peak(), v * v * 0.5 / (2.0 * g), 0.1));
        assert!(close(p.time_of_flight(), 2.0 * v * 0.5f32.sqrt() / g, 1e-3));
    }

    #[test]
    fn test_launch_velocity_points_up_on_screen() {
        let p = Projectile::from_ground(100.0, 30.0);
        assert!(close(p.velocity().x, 100.0 * 30f32.to_radians().cos(), 1e-3));
        assert!(close(p.velocity().y, -50.0, 1e-3));
        assert!(close(p.movement_direction(), -30.0, 1e-3));
    }

    #[test]
    fn test_flight_lands_at_range() {
        let mut p = Projectile::from_ground(100.0, 45.0);
        let dt = 1.0e-3;
        let steps = (p.time_of_flight() as f64 / dt).round() as usize;
        for _ in 0..steps {
            p.update(dt);
        }
        assert!(close(p.position().x, p.range(), p.range() * 0.005));
        assert!(close(p.position().y, SCREEN_HEIGHT, 2.0));
    }

    #[test]
    fn test_elevated_launch_uses_general_formula() {
        // Launch point 0 pixels "above" the reference: the correction vanishes
        // and the general formula reduces to the classical one
        let p = Projectile::new(100.0, 45.0);
        let classical = Projectile::from_ground(100.0, 45.0);
        assert!(close(p.range(), classical.range(), 0.5));
        assert!(close(p.time_of_flight(), classical.time_of_flight(), 1e-3));

        // Any positive height lengthens the flight
        let raised = Projectile::new(100.0, 45.0).at(Vec2::new(10.0, 200.0));
        assert!(raised.range() > classical.range());
        assert!(raised.time_of_flight() > classical.time_of_flight());
    }

    #[test]
    fn test_recalibration_recomputes_characteristics() {
        let mut p = Projectile::from_ground(100.0, 30.0);
        let range = p.range();

        p.increase_launch_angle();
        assert_eq!(p.launch_angle(), 31.25);
        assert!(p.range() > range);

        p.reduce_launch_angle();
        p.reduce_launch_angle();
        assert_eq!(p.launch_angle(), 28.75);

        p.increase_launch_speed();
        assert_eq!(p.launch_speed(), 150.0);
        p.reduce_launch_speed();
        assert_eq!(p.launch_speed(), 100.0);

        let peak = p.peak();
        p.increase_gravity();
        assert_eq!(p.acceleration().y, DEFAULT_GRAVITY + GRAVITY_STEP);
        assert!(p.peak() < peak);
        p.decrease_gravity();
        assert!(close(p.gravity(), DEFAULT_GRAVITY, 1e-4));
    }

    #[test]
    fn test_friction_slows_horizontal_motion() {
        let mut p = Projectile::from_ground(100.0, 45.0).with_friction(2.0);
        let vx = p.velocity().x;
        p.update(1.0);
        assert!(close(p.velocity().x, vx - 2.0, 1e-4));
        assert_eq!(p.acceleration().x, -2.0);
    }
}
