//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }
}

/// Named brush colors
pub mod colors {
    pub const BLACK: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    pub const DARK_GOLDENROD: [f32; 4] = [0.722, 0.525, 0.043, 1.0];
    pub const DARK_RED: [f32; 4] = [0.545, 0.0, 0.0, 1.0];

    /// Color for a brush name; unknown names and `None` use the default brush
    pub fn brush(name: Option<&str>) -> [f32; 4] {
        match name {
            Some("DarkGoldenrod") => DARK_GOLDENROD,
            Some("DarkRed") => DARK_RED,
            _ => BLACK,
        }
    }
}
