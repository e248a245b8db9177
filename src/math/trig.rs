//! Angle conversions

/// Degrees to radians
#[inline]
pub fn deg_to_rad(deg: f32) -> f32 {
    deg * std::f32::consts::PI / 180.0
}

/// Radians to degrees, computed in double precision
#[inline]
pub fn rad_to_deg(rad: f32) -> f32 {
    (rad as f64 * 180.0 / std::f64::consts::PI) as f32
}

/// Complementary angle: converts an angle measured from the vertical into
/// one measured from the horizontal (and back)
#[inline]
pub fn angle_in_standard_coordinates(deg: f32) -> f32 {
    90.0 - deg
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deg_rad_round_trip() {
        assert!((deg_to_rad(180.0) - std::f32::consts::PI).abs() < 1e-6);
        assert!((rad_to_deg(std::f32::consts::FRAC_PI_4) - 45.0).abs() < 1e-4);
        assert!((rad_to_deg(deg_to_rad(33.0)) - 33.0).abs() < 1e-4);
    }

    #[test]
    fn test_complementary_angle() {
        assert_eq!(angle_in_standard_coordinates(30.0), 60.0);
        assert_eq!(angle_in_standard_coordinates(angle_in_standard_coordinates(12.5)), 12.5);
    }
}
