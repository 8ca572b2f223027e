//! Shape descriptions, classification tags, and shared geometry handles.

pub use self::ball::Ball;
pub use self::capsule::Capsule;
pub use self::collision_geometry::{CollisionGeometry, SharedGeometry};
pub use self::cuboid::Cuboid;
pub use self::half_space::HalfSpace;
pub use self::shape::{NodeType, ObjectType, Shape, NODE_COUNT};

mod ball;
mod capsule;
mod collision_geometry;
mod cuboid;
mod half_space;
mod shape;
