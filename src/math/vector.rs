//! Vector algebra on top of `glam::Vec2`
//!
//! Lengths are always computed on demand; nothing derived is cached on the
//! vector itself.

use glam::Vec2;

use crate::error::GeometryError;

/// The 2D single-precision vector used throughout the crate
pub type Vector2F = Vec2;

/// Operations glam does not provide in the shape the simulation needs
pub trait Vector2Ext: Sized {
    /// x² + y²
    fn square_length(self) -> f32;

    /// Scale by a double-precision factor, narrowing each component back to f32
    fn mul_f64(self, a: f64) -> Self;

    /// In-place variant of [`Vector2Ext::mul_f64`]
    fn mul_assign_f64(&mut self, a: f64);

    /// Divide both components by `length`, or by the computed length if `None`.
    ///
    /// Fails without touching the vector when the divisor is zero or not finite.
    fn normalize_in_place(&mut self, length: Option<f32>) -> Result<(), GeometryError>;
}

impl Vector2Ext for Vec2 {
    #[inline]
    fn square_length(self) -> f32 {
        self.x * self.x + self.y * self.y
    }

    #[inline]
    fn mul_f64(self, a: f64) -> Self {
        Vec2::new((self.x as f64 * a) as f32, (self.y as f64 * a) as f32)
    }

    #[inline]
    fn mul_assign_f64(&mut self, a: f64) {
        *self = self.mul_f64(a);
    }

    fn normalize_in_place(&mut self, length: Option<f32>) -> Result<(), GeometryError> {
        let l = length.unwrap_or_else(|| self.length());
        if l == 0.0 || !l.is_finite() {
            return Err(GeometryError::ZeroLengthVector(l));
        }
        self.x /= l;
        self.y /= l;
        Ok(())
    }
}

/// Standard euclidean scalar product
#[inline]
pub fn scalar_product(a: Vec2, b: Vec2) -> f32 {
    a.x * b.x + a.y * b.y
}

/// 2D pseudo cross product (z component of the 3D cross product)
#[inline]
pub fn cross_product(a: Vec2, b: Vec2) -> f32 {
    a.x * b.y - a.y * b.x
}

/// Reflect `incidence` about the unit `normal`: r = -2(i·n)n + i
#[inline]
pub fn reflection_vector(incidence: Vec2, normal: Vec2) -> Vec2 {
    let coef = -2.0 * scalar_product(incidence, normal);
    normal * coef + incidence
}

/// Replace `incidence` by its reflection about the unit `normal`
#[inline]
pub fn reflect_in_place(incidence: &mut Vec2, normal: Vec2) {
    let coef = -2.0 * scalar_product(*incidence, normal);
    *incidence += normal * coef;
}
