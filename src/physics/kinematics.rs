//! Kinematics: integration and closed-form projectile formulas
//!
//! Time steps are `f64`; positions and velocities stay `f32` and each
//! product is narrowed back after being computed in double precision.

use glam::Vec2;

use crate::error::KinematicsError;
use crate::math::{Vector2Ext, rad_to_deg};

/// Position after `dt` under uniform acceleration: x0 + v0·dt + ½·a·dt²
pub fn pos_um(x0: f32, v0: f32, a: f32, dt: f64) -> f32 {
    (x0 as f64 + v0 as f64 * dt + 0.5 * a as f64 * dt * dt) as f32
}

/// One semi-implicit (symplectic) Euler step in one dimension.
///
/// Velocity is updated first and the new velocity moves the position.
pub fn semi_implicit_euler_1d(pos: &mut f32, vel: &mut f32, acc: f32, dt: f64) {
    *vel += (acc as f64 * dt) as f32;
    *pos += (*vel as f64 * dt) as f32;
}

/// One semi-implicit (symplectic) Euler step in two dimensions.
///
/// Velocity is updated first and the new velocity moves the position.
pub fn semi_implicit_euler(pos: &mut Vec2, vel: &mut Vec2, acc: Vec2, dt: f64) {
    *vel += acc.mul_f64(dt);
    *pos += vel.mul_f64(dt);
}

/// Angle of reach in degrees: the lower launch angle that covers
/// `desired_range` on flat ground, `½·asin(g·R / v²)`
pub fn compute_launch_angle(
    launch_speed: f32,
    desired_range: f32,
    gravity: f32,
) -> Result<f32, KinematicsError> {
    if launch_speed == 0.0 || !launch_speed.is_finite() {
        return Err(KinematicsError::InvalidSpeed(launch_speed));
    }

    let ratio = (gravity * desired_range) / (launch_speed * launch_speed);
    if !(-1.0..=1.0).contains(&ratio) {
        return Err(KinematicsError::OutOfReach {
            speed: launch_speed,
            range: desired_range,
            gravity,
        });
    }

    Ok(rad_to_deg(0.5 * ratio.asin()))
}

/// Launch angle in degrees to hit `target` (relative to the launch point)
/// at speed `v`; `None` when the target is out of range
pub fn compute_launch_angle_to_target(target: Vec2, v: f32, g: f32) -> Option<f32> {
    let v2 = v * v;
    let discriminant = v2 * v2 - g * (g * target.x * target.x + 2.0 * target.y * target.y * v2);
    // Also rejects NaN
    if !(discriminant >= 0.0) {
        return None;
    }

    let root = (discriminant.sqrt() + v2) / (g * target.x);
    // 0/0 when there is no speed and no horizontal distance
    let angle = rad_to_deg(root.atan());
    angle.is_finite().then_some(angle)
}
