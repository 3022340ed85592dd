mod aabb;
mod color;
mod ray;
pub mod sdf;

pub use aabb::AABB;
pub use color::Rgb;
pub use ray::{intersect_aabb, intersect_sphere, Ray};
