//! Intersection tests between primitives
//!
//! Segment/segment tests solve `s1 + t1·d1 = s2 + t2·d2` with Cramer's rule.
//! Parallel or colinear segments (zero determinant) never intersect here.

use glam::Vec2;

use super::primitives::{Line2D, LineSegment2D, Rectangle2D, Sphere2D};
use crate::math::{cross_product, scalar_product};

/// Parameters `(t1, t2)` at which two segments cross, both in `[0, 1]`
///
/// Endpoints count: a parameter of exactly 0 or 1 is an intersection.
pub fn segment_intersection(segment1: &LineSegment2D, segment2: &LineSegment2D) -> Option<(f32, f32)> {
    let d1 = segment1.direction_vector();
    let d2 = segment2.direction_vector();

    let det = cross_product(d1, d2);
    if det == 0.0 {
        return None;
    }

    let between = segment2.start_point() - segment1.start_point();

    let t1 = cross_product(between, d2) / det;
    if !(0.0..=1.0).contains(&t1) {
        return None;
    }

    let t2 = cross_product(between, d1) / det;
    if !(0.0..=1.0).contains(&t2) {
        return None;
    }

    Some((t1, t2))
}

/// Point where a segment meets a line
///
/// A segment running parallel to the line intersects only if it lies on it,
/// in which case the start point is reported.
pub fn intersect_segment_line(segment: &LineSegment2D, line: &Line2D) -> Option<Vec2> {
    let sp = scalar_product(segment.direction_vector(), line.normal);

    if sp != 0.0 {
        let t = (line.d - scalar_product(segment.start_point(), line.normal)) / sp;
        if (0.0..=1.0).contains(&t) {
            Some(segment.point_at(t))
        } else {
            None
        }
    } else if line.contains(segment.start_point()) {
        Some(segment.start_point())
    } else {
        None
    }
}

/// Point where two segments cross
///
/// Both parameters are bounds-checked, so a hit on the infinite extension of
/// `segment2` is not reported.
pub fn intersect_segments(segment1: &LineSegment2D, segment2: &LineSegment2D) -> Option<Vec2> {
    segment_intersection(segment1, segment2).map(|(t1, _)| segment1.point_at(t1))
}

/// Squared distance test; tangent circles do not intersect
pub fn spheres_intersect(s1: &Sphere2D, s2: &Sphere2D) -> bool {
    let center_vector = s2.center - s1.center;
    let distance_squared = scalar_product(center_vector, center_vector);
    let radii = s1.radius + s2.radius;
    distance_squared < radii * radii
}

/// Separating-axis test on the four sides; touching edges overlap
pub fn rectangles_intersect(r1: &Rectangle2D, r2: &Rectangle2D) -> bool {
    let separated = r1.lower_right.x < r2.upper_left.x
        || r2.lower_right.x < r1.upper_left.x
        || r2.lower_right.y < r1.upper_left.y
        || r1.lower_right.y < r2.upper_left.y;
    !separated
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn seg(ax: f32, ay: f32, bx: f32, by: f32) -> LineSegment2D {
        LineSegment2D::new(Vec2::new(ax, ay), Vec2::new(bx, by))
    }

    #[test]
    fn test_crossing_segments() {
        let horizontal = seg(0.0, 0.0, 2.0, 0.0);
        let vertical = seg(1.0, -1.0, 1.0, 1.0);

        assert_eq!(segment_intersection(&horizontal, &vertical), Some((0.5, 0.5)));
        assert_eq!(intersect_segments(&horizontal, &vertical), Some(Vec2::new(1.0, 0.0)));
    }

    #[test]
    fn test_parallel_segments_never_intersect() {
        let a = seg(0.0, 0.0, 2.0, 0.0);
        let b = seg(0.0, 1.0, 2.0, 1.0);
        assert_eq!(segment_intersection(&a, &b), None);

        // Colinear overlap is not special-cased
        let c = seg(1.0, 0.0, 3.0, 0.0);
        assert_eq!(segment_intersection(&a, &c), None);
    }

    #[test]
    fn test_endpoint_touch_counts() {
        let a = seg(0.0, 0.0, 2.0, 0.0);
        let b = seg(2.0, 0.0, 2.0, 4.0);
        assert_eq!(segment_intersection(&a, &b), Some((1.0, 0.0)));
    }

    #[test]
    fn test_miss_beyond_second_segment() {
        // The lines cross at (1, 0) but the vertical segment stops at y = -1
        let a = seg(0.0, 0.0, 2.0, 0.0);
        let b = seg(1.0, -3.0, 1.0, -1.0);
        assert_eq!(segment_intersection(&a, &b), None);
        assert_eq!(intersect_segments(&a, &b), None);
    }

    #[test]
    fn test_miss_beyond_first_segment() {
        let a = seg(0.0, 0.0, 0.5, 0.0);
        let b = seg(1.0, -1.0, 1.0, 1.0);
        assert_eq!(segment_intersection(&a, &b), None);
    }

    #[test]
    fn test_segment_line_crossing() {
        let line = Line2D::new(Vec2::Y, 2.0); // y = 2
        let s = seg(1.0, 0.0, 1.0, 4.0);
        assert_eq!(intersect_segment_line(&s, &line), Some(Vec2::new(1.0, 2.0)));

        let short = seg(1.0, 0.0, 1.0, 1.0);
        assert_eq!(intersect_segment_line(&short, &line), None);
    }

    #[test]
    fn test_segment_along_line() {
        let line = Line2D::new(Vec2::Y, 2.0);
        let on = seg(-1.0, 2.0, 5.0, 2.0);
        assert_eq!(intersect_segment_line(&on, &line), Some(Vec2::new(-1.0, 2.0)));

        let parallel = seg(-1.0, 3.0, 5.0, 3.0);
        assert_eq!(intersect_segment_line(&parallel, &line), None);
    }

    #[test]
    fn test_circles() {
        let a = Sphere2D::new(Vec2::new(0.0, 0.0), 1.0);
        let far = Sphere2D::new(Vec2::new(3.0, 0.0), 1.0);
        let near = Sphere2D::new(Vec2::new(1.0, 0.0), 1.0);
        let tangent = Sphere2D::new(Vec2::new(2.0, 0.0), 1.0);

        assert!(!spheres_intersect(&a, &far));
        assert!(spheres_intersect(&a, &near));
        assert!(!spheres_intersect(&a, &tangent));
    }

    #[test]
    fn test_rectangles() {
        let a = Rectangle2D::new(Vec2::new(0.0, 0.0), Vec2::new(2.0, 2.0));
        let b = Rectangle2D::new(Vec2::new(1.0, 1.0), Vec2::new(3.0, 3.0));
        assert!(rectangles_intersect(&a, &b));

        let c = Rectangle2D::new(Vec2::new(0.0, 0.0), Vec2::new(1.0, 1.0));
        let d = Rectangle2D::new(Vec2::new(2.0, 2.0), Vec2::new(3.0, 3.0));
        assert!(!rectangles_intersect(&c, &d));

        // Shared edge
        let e = Rectangle2D::new(Vec2::new(1.0, 0.0), Vec2::new(2.0, 1.0));
        assert!(rectangles_intersect(&c, &e));
    }

    proptest! {
        #[test]
        fn prop_segment_intersection_symmetric(
            ax in -100i32..100, ay in -100i32..100, bx in -100i32..100, by in -100i32..100,
            cx in -100i32..100, cy in -100i32..100, dx in -100i32..100, dy in -100i32..100,
        ) {
            let s1 = seg(ax as f32, ay as f32, bx as f32, by as f32);
            let s2 = seg(cx as f32, cy as f32, dx as f32, dy as f32);
            let forward = segment_intersection(&s1, &s2);
            let backward = segment_intersection(&s2, &s1).map(|(t2, t1)| (t1, t2));
            prop_assert_eq!(forward, backward);
        }

        #[test]
        fn prop_circle_intersection_symmetric(
            ax in -50.0f32..50.0, ay in -50.0f32..50.0, ar in 0.0f32..20.0,
            bx in -50.0f32..50.0, by in -50.0f32..50.0, br in 0.0f32..20.0,
        ) {
            let a = Sphere2D::new(Vec2::new(ax, ay), ar);
            let b = Sphere2D::new(Vec2::new(bx, by), br);
            prop_assert_eq!(spheres_intersect(&a, &b), spheres_intersect(&b, &a));
        }
    }
}
