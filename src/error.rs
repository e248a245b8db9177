//! Error types
//!
//! Only structural failures live here. Queries that can legitimately find
//! nothing (non-intersecting shapes, unreachable targets) return `Option`.

use thiserror::Error;

/// Degenerate input to a geometric computation
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GeometryError {
    #[error("polygon needs at least 3 vertices, got {0}")]
    TooFewVertices(usize),
    /// Signed area is zero (colinear or coincident vertices)
    #[error("polygon has zero signed area")]
    DegeneratePolygon,
    #[error("cannot normalize a vector of length {0}")]
    ZeroLengthVector(f32),
}

/// Closed-form kinematics outside its domain
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum KinematicsError {
    /// `g * R / v²` left [-1, 1]: the range cannot be reached at this speed
    #[error("range {range} is out of reach at speed {speed} (g = {gravity})")]
    OutOfReach { speed: f32, range: f32, gravity: f32 },
    #[error("launch speed must be non-zero and finite, got {0}")]
    InvalidSpeed(f32),
}

/// Failure loading [`crate::settings::SimSettings`]
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
}
