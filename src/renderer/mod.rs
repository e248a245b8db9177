//! Rendering boundary
//!
//! The simulation never talks to a graphics API directly; it fills
//! rectangles on a `ParticleCanvas`.

pub mod quads;
pub mod vertex;

pub use quads::QuadBatch;
pub use vertex::Vertex;

use crate::geometry::Rectangle2D;

/// Target that particle systems draw onto
pub trait ParticleCanvas {
    /// Fill `rect` at `opacity` (1 = opaque) with a named brush, or the
    /// default brush when `brush` is `None`
    fn fill_rectangle(&mut self, rect: &Rectangle2D, opacity: f32, brush: Option<&str>);
}
