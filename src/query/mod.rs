//! Minimum-distance queries between pairs of shapes.
//!
//! # General cases
//! The most general entry points provided by this module are:
//!
//! * [`distance()`] to compute the minimum distance between two geometries at
//!   given positions, resolving the dispatch table on every call.
//! * [`distance_objects()`] for the same query between two
//!   [`crate::object::CollisionObject`]s.
//! * [`ComputeDistance`] to resolve the dispatch table once and reuse the
//!   resolved routine across many calls against the same two geometries.
//!
//! The `*_with_guess` variants additionally feed the solver state of the
//! result back into the request, warm-starting the next query of a closely
//! related sequence.
//!
//! # Specific cases
//! The functions exported by the `details` submodule are specialized versions
//! working on shapes known at compile-time. They have the form
//! `distance_[shape1]_[shape2]()` and skip dynamic dispatch entirely.

pub use self::compute_distance::ComputeDistance;
pub use self::dispatcher::{DistanceFn, DistanceRegistry, ResolvedDistanceFn};
pub use self::distance::distance::{
    distance, distance_objects, distance_objects_with_guess, distance_with_guess,
};
pub use self::error::{DistanceError, GeometryError};
pub use self::request::{DistanceRequest, DistanceResult};
pub use self::solver::SolverConfig;

mod compute_distance;
mod dispatcher;
mod distance;
mod error;
mod request;
mod solver;

/// Queries dedicated to specific pairs of shapes.
pub mod details {
    pub use super::distance::{
        distance_ball_ball, distance_ball_capsule, distance_ball_cuboid,
        distance_ball_halfspace, distance_capsule_capsule, distance_cuboid_halfspace,
    };
}
