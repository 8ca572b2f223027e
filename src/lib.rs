/*!
prox3d
========

**prox3d** is a 3-dimensional minimum-distance query library written with
the rust programming language. It couples abstract shape descriptions with
rigid transforms and cached bounding volumes, and dispatches each pair of
shape kinds to a specialized narrow-phase distance routine.

*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::too_many_arguments)]
#![allow(clippy::module_inception)]

#[cfg(feature = "serde-serialize")]
#[macro_use]
extern crate serde;
#[macro_use]
extern crate approx;

pub extern crate nalgebra as na;

pub mod bounding_volume;
pub mod object;
pub mod query;
pub mod shape;

/// Aliases for the mathematical types used throughout this crate.
pub mod math {
    use na::U3;

    /// The scalar type used throughout this crate.
    pub type Real = f64;

    /// The default tolerance used for geometric operations.
    pub const DEFAULT_EPSILON: Real = Real::EPSILON;

    /// The dimension of the space.
    pub const DIM: usize = 3;

    /// The dimension of the ambient space.
    pub type Dim = U3;

    /// The point type.
    pub use na::Point3 as Point;

    /// The vector type.
    pub use na::Vector3 as Vector;

    /// The unit vector type.
    pub use na::UnitVector3 as UnitVector;

    /// The matrix type.
    pub use na::Matrix3 as Matrix;

    /// The transformation matrix type.
    pub use na::Isometry3 as Isometry;

    /// The rotation type.
    pub type Rotation<N> = na::UnitQuaternion<N>;

    /// The translation type.
    pub use na::Translation3 as Translation;
}
