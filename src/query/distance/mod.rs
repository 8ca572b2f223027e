pub use self::distance_ball_ball::distance_ball_ball;
pub use self::distance_ball_capsule::distance_ball_capsule;
pub use self::distance_ball_cuboid::distance_ball_cuboid;
pub use self::distance_ball_halfspace::distance_ball_halfspace;
pub use self::distance_capsule_capsule::distance_capsule_capsule;
pub use self::distance_cuboid_halfspace::distance_cuboid_halfspace;

pub(crate) use self::distance_ball_ball::dispatch_ball_ball;
pub(crate) use self::distance_ball_capsule::dispatch_ball_capsule;
pub(crate) use self::distance_ball_cuboid::dispatch_ball_cuboid;
pub(crate) use self::distance_ball_halfspace::dispatch_ball_halfspace;
pub(crate) use self::distance_capsule_capsule::dispatch_capsule_capsule;
pub(crate) use self::distance_cuboid_halfspace::dispatch_cuboid_halfspace;

pub(crate) mod distance;
mod distance_ball_ball;
mod distance_ball_capsule;
mod distance_ball_cuboid;
mod distance_ball_halfspace;
mod distance_capsule_capsule;
mod distance_cuboid_halfspace;

use crate::query::DistanceError;
use crate::shape::Shape;

/// The error reported by a dispatch wrapper whose downcast failed, i.e., the
/// registry entry does not match the actual shape kinds.
pub(crate) fn unsupported(g1: &dyn Shape, g2: &dyn Shape) -> DistanceError {
    DistanceError::Unsupported {
        node_type1: g1.node_type(),
        node_type2: g2.node_type(),
    }
}
