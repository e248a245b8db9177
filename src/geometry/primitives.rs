//! Basic geometric objects for collision detection

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::math::{deg_to_rad, scalar_product};
use crate::polar_to_cartesian;

/// All points `p` with `p · normal == d`
///
/// `normal` should be unit length for `d` to be a distance to the origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Line2D {
    pub normal: Vec2,
    pub d: f32,
}

impl Default for Line2D {
    /// The x-axis
    fn default() -> Self {
        Self {
            normal: Vec2::Y,
            d: 0.0,
        }
    }
}

impl Line2D {
    pub fn new(normal: Vec2, d: f32) -> Self {
        Self { normal, d }
    }

    /// Whether `p` satisfies the line equation exactly
    pub fn contains(&self, p: Vec2) -> bool {
        scalar_product(p, self.normal) == self.d
    }
}

/// A point of origin and a direction
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ray2D {
    pub start_point: Vec2,
    pub direction: Vec2,
}

impl Default for Ray2D {
    fn default() -> Self {
        Self {
            start_point: Vec2::ZERO,
            direction: Vec2::X,
        }
    }
}

impl Ray2D {
    pub fn new(start_point: Vec2, direction: Vec2) -> Self {
        Self {
            start_point,
            direction,
        }
    }

    /// Point reached after following the ray for `t`; negative `t` rides backwards
    #[inline]
    pub fn ride(&self, t: f32) -> Vec2 {
        self.start_point + self.direction * t
    }
}

/// A line segment with its direction and unit normal derived at construction
///
/// Fields are private so the derived vectors can never disagree with the
/// endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSegment2D {
    start_point: Vec2,
    end_point: Vec2,
    direction_vector: Vec2,
    normal_vector: Vec2,
}

impl LineSegment2D {
    /// Segment from `start_point` to `end_point`. The normal is the direction
    /// rotated by 90° (`(-dy, dx)`) and normalized; it is zero for a
    /// degenerate segment.
    pub fn new(start_point: Vec2, end_point: Vec2) -> Self {
        let direction_vector = end_point - start_point;
        Self {
            start_point,
            end_point,
            direction_vector,
            normal_vector: direction_vector.perp().normalize_or_zero(),
        }
    }

    #[inline]
    pub fn start_point(&self) -> Vec2 {
        self.start_point
    }

    #[inline]
    pub fn end_point(&self) -> Vec2 {
        self.end_point
    }

    /// `end_point - start_point`
    #[inline]
    pub fn direction_vector(&self) -> Vec2 {
        self.direction_vector
    }

    #[inline]
    pub fn normal_vector(&self) -> Vec2 {
        self.normal_vector
    }

    /// Point at parameter `t` (0 = start, 1 = end)
    #[inline]
    pub fn point_at(&self, t: f32) -> Vec2 {
        self.start_point + self.direction_vector * t
    }
}

/// A circle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sphere2D {
    pub center: Vec2,
    pub radius: f32,
}

impl Default for Sphere2D {
    /// Unit circle at the origin
    fn default() -> Self {
        Self {
            center: Vec2::ZERO,
            radius: 1.0,
        }
    }
}

impl Sphere2D {
    pub fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Point on the circle at `angle` radians
    pub fn point(&self, angle: f32) -> Vec2 {
        self.center + polar_to_cartesian(self.radius, angle)
    }
}

/// Axis-aligned rectangle (screen coordinates: y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rectangle2D {
    pub upper_left: Vec2,
    pub lower_right: Vec2,
}

impl Default for Rectangle2D {
    /// Unit square with its upper left corner at the origin
    fn default() -> Self {
        Self {
            upper_left: Vec2::ZERO,
            lower_right: Vec2::ONE,
        }
    }
}

impl Rectangle2D {
    pub fn new(upper_left: Vec2, lower_right: Vec2) -> Self {
        Self {
            upper_left,
            lower_right,
        }
    }

    /// Square of half-width `half_extent` centred on `center`
    pub fn centered(center: Vec2, half_extent: f32) -> Self {
        let offset = Vec2::splat(half_extent);
        Self::new(center - offset, center + offset)
    }

    pub fn width(&self) -> f32 {
        self.lower_right.x - self.upper_left.x
    }

    pub fn height(&self) -> f32 {
        self.lower_right.y - self.upper_left.y
    }
}

/// A segment swept by a circle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Capsule2D {
    pub line_segment: LineSegment2D,
    pub radius: f32,
}

impl Default for Capsule2D {
    fn default() -> Self {
        Self {
            line_segment: LineSegment2D::new(Vec2::ZERO, Vec2::Y),
            radius: 0.5,
        }
    }
}

impl Capsule2D {
    pub fn new(line_segment: LineSegment2D, radius: f32) -> Self {
        Self {
            line_segment,
            radius,
        }
    }

    pub fn from_points(start_point: Vec2, end_point: Vec2, radius: f32) -> Self {
        Self::new(LineSegment2D::new(start_point, end_point), radius)
    }
}

/// Point on an axis-aligned ellipse at `angle` degrees
pub fn coordinates_on_ellipse(center: Vec2, radii: Vec2, angle: f32) -> Vec2 {
    let rad = deg_to_rad(angle);
    Vec2::new(
        center.x + radii.x * rad.cos(),
        center.y + radii.y * rad.sin(),
    )
}

/// Euclidean distance between two points
#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    square_distance(a, b).sqrt()
}

/// Squared euclidean distance between two points
#[inline]
pub fn square_distance(a: Vec2, b: Vec2) -> f32 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    dx * dx + dy * dy
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    #[test]
    fn test_defaults() {
        assert_eq!(Line2D::default(), Line2D::new(Vec2::new(0.0, 1.0), 0.0));
        assert_eq!(Ray2D::default().direction, Vec2::new(1.0, 0.0));
        assert_eq!(Sphere2D::default().radius, 1.0);
        assert_eq!(Rectangle2D::default().lower_right, Vec2::new(1.0, 1.0));

        let capsule = Capsule2D::default();
        assert_eq!(capsule.radius, 0.5);
        assert_eq!(capsule.line_segment.end_point(), Vec2::new(0.0, 1.0));
    }

    #[test]
    fn test_line_contains() {
        let line = Line2D::new(Vec2::Y, 2.0);
        assert!(line.contains(Vec2::new(-7.0, 2.0)));
        assert!(!line.contains(Vec2::new(0.0, 0.0)));
    }

    #[test]
    fn test_ray_ride() {
        let ray = Ray2D::new(Vec2::new(1.0, 1.0), Vec2::new(2.0, 0.0));
        assert_eq!(ray.ride(0.0), Vec2::new(1.0, 1.0));
        assert_eq!(ray.ride(1.5), Vec2::new(4.0, 1.0));
        // Riding backwards is allowed
        assert_eq!(ray.ride(-1.0), Vec2::new(-1.0, 1.0));
    }

    #[test]
    fn test_segment_derived_vectors() {
        let seg = LineSegment2D::new(Vec2::new(1.0, 1.0), Vec2::new(4.0, 1.0));
        assert_eq!(seg.direction_vector(), Vec2::new(3.0, 0.0));
        // (-dy, dx) normalized
        assert_eq!(seg.normal_vector(), Vec2::new(0.0, 1.0));
        assert_eq!(seg.point_at(0.5), Vec2::new(2.5, 1.0));
    }

    #[test]
    fn test_degenerate_segment_has_zero_normal() {
        let seg = LineSegment2D::new(Vec2::ONE, Vec2::ONE);
        assert_eq!(seg.normal_vector(), Vec2::ZERO);
    }

    #[test]
    fn test_circle_point() {
        let circle = Sphere2D::new(Vec2::new(10.0, 0.0), 2.0);
        let p = circle.point(PI / 2.0);
        assert!((p.x - 10.0).abs() < 1e-5);
        assert!((p.y - 2.0).abs() < 1e-5);
    }

    #[test]
    fn test_coordinates_on_ellipse() {
        let p = coordinates_on_ellipse(Vec2::new(1.0, 1.0), Vec2::new(4.0, 2.0), 90.0);
        assert!((p.x - 1.0).abs() < 1e-5);
        assert!((p.y - 3.0).abs() < 1e-5);
    }

    #[test]
    fn test_distance() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(3.0, 4.0);
        assert_eq!(square_distance(a, b), 25.0);
        assert_eq!(distance(a, b), 5.0);
    }

    #[test]
    fn test_centered_rectangle() {
        let r = Rectangle2D::centered(Vec2::new(5.0, 5.0), 1.5);
        assert_eq!(r.upper_left, Vec2::new(3.5, 3.5));
        assert_eq!(r.width(), 3.0);
        assert_eq!(r.height(), 3.0);
    }
}
