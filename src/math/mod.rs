//! Linear algebra, trigonometry and randomness

pub mod random;
pub mod trig;
pub mod vector;

pub use random::{NumberTheory, RandomSource};
pub use trig::{angle_in_standard_coordinates, deg_to_rad, rad_to_deg};
pub use vector::{
    Vector2Ext, Vector2F, cross_product, reflect_in_place, reflection_vector, scalar_product,
};
