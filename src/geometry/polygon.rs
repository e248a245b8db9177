//! Polygons: centroid, bounding box and point containment

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::primitives::Rectangle2D;
use crate::error::GeometryError;
use crate::math::cross_product;

/// A closed polygon
///
/// Vertices should be listed counter-clockwise; the centroid formula and the
/// sign of `normal` assume it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Polygon2D {
    vertices: Vec<Vec2>,
    centroid: Vec2,
    /// Pseudo cross product of the first two edges; positive when the first
    /// corner turns counter-clockwise
    normal: f32,
}

impl Polygon2D {
    /// Build a polygon, computing its centroid
    pub fn new(vertices: Vec<Vec2>) -> Result<Self, GeometryError> {
        let centroid = compute_centroid(&vertices)?;
        Self::with_centroid(vertices, centroid)
    }

    /// Build a polygon with a caller-supplied centroid
    pub fn with_centroid(vertices: Vec<Vec2>, centroid: Vec2) -> Result<Self, GeometryError> {
        if vertices.len() < 3 {
            return Err(GeometryError::TooFewVertices(vertices.len()));
        }
        let normal = cross_product(vertices[1] - vertices[0], vertices[2] - vertices[1]);
        Ok(Self {
            vertices,
            centroid,
            normal,
        })
    }

    pub fn vertices(&self) -> &[Vec2] {
        &self.vertices
    }

    pub fn centroid(&self) -> Vec2 {
        self.centroid
    }

    pub fn normal(&self) -> f32 {
        self.normal
    }

    pub fn bounding_box(&self) -> Option<Rectangle2D> {
        compute_bounding_box(&self.vertices)
    }

    /// Nonzero winding rule; works for either winding order and for concave
    /// polygons. Points exactly on an edge may land on either side.
    pub fn contains(&self, p: Vec2) -> bool {
        let n = self.vertices.len();
        if n < 3 {
            return false;
        }

        let mut winding = 0i32;
        for i in 0..n {
            let a = self.vertices[i];
            let b = self.vertices[(i + 1) % n];
            // > 0: p lies left of the edge a -> b
            let cp = cross_product(b - a, p - a);

            if a.y <= p.y {
                if b.y > p.y && cp > 0.0 {
                    winding += 1;
                }
            } else if b.y <= p.y && cp < 0.0 {
                winding -= 1;
            }
        }

        winding != 0
    }
}

/// Shoelace centroid of a closed, simple polygon
pub fn compute_centroid(vertices: &[Vec2]) -> Result<Vec2, GeometryError> {
    let n = vertices.len();
    if n < 3 {
        return Err(GeometryError::TooFewVertices(n));
    }

    let mut centroid = Vec2::ZERO;
    let mut det = 0.0;

    for i in 0..n {
        let a = vertices[i];
        let b = vertices[(i + 1) % n];

        let temp_det = a.x * b.y - b.x * a.y;
        det += temp_det;

        centroid.x += (a.x + b.x) * temp_det;
        centroid.y += (a.y + b.y) * temp_det;
    }

    // det is twice the signed area
    if det == 0.0 || !det.is_finite() {
        return Err(GeometryError::DegeneratePolygon);
    }

    Ok(centroid / (3.0 * det))
}

/// Tightest axis-aligned box around the vertices, `None` when there are none
pub fn compute_bounding_box(vertices: &[Vec2]) -> Option<Rectangle2D> {
    let (first, rest) = vertices.split_first()?;
    let (min, max) = rest
        .iter()
        .fold((*first, *first), |(min, max), v| (min.min(*v), max.max(*v)));
    Some(Rectangle2D::new(min, max))
}
