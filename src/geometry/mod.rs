//! 2D geometry for collision detection
//!
//! Pure value types and predicates; no rendering or platform dependencies.

pub mod intersect;
pub mod polygon;
pub mod primitives;

pub use intersect::{
    intersect_segment_line, intersect_segments, rectangles_intersect, segment_intersection,
    spheres_intersect,
};
pub use polygon::{Polygon2D, compute_bounding_box, compute_centroid};
pub use primitives::{
    Capsule2D, Line2D, LineSegment2D, Ray2D, Rectangle2D, Sphere2D, coordinates_on_ellipse,
    distance, square_distance,
};
