//! Bounding volumes cached by geometries and objects.

pub use self::aabb::Aabb;
pub use self::bounding_sphere::BoundingSphere;

mod aabb;
mod bounding_sphere;
