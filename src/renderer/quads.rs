//! CPU-side quad batching for particle squares

use super::ParticleCanvas;
use super::vertex::{Vertex, colors};
use crate::geometry::Rectangle2D;

/// Collects filled rectangles as triangle-list vertices, ready to upload
#[derive(Debug, Clone, Default)]
pub struct QuadBatch {
    vertices: Vec<Vertex>,
}

impl QuadBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Raw bytes for a vertex buffer upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    pub fn quad_count(&self) -> usize {
        self.vertices.len() / 6
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
    }
}

impl ParticleCanvas for QuadBatch {
    fn fill_rectangle(&mut self, rect: &Rectangle2D, opacity: f32, brush: Option<&str>) {
        let mut color = colors::brush(brush);
        color[3] *= opacity.clamp(0.0, 1.0);

        let (ul, lr) = (rect.upper_left, rect.lower_right);

        // Two triangles
        self.vertices.push(Vertex::new(ul.x, ul.y, color));
        self.vertices.push(Vertex::new(lr.x, ul.y, color));
        self.vertices.push(Vertex::new(ul.x, lr.y, color));

        self.vertices.push(Vertex::new(ul.x, lr.y, color));
        self.vertices.push(Vertex::new(lr.x, ul.y, color));
        self.vertices.push(Vertex::new(lr.x, lr.y, color));
    }
}
