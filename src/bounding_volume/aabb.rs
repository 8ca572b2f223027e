//! Axis Aligned Bounding Box.

use crate::bounding_volume::BoundingSphere;
use crate::math::{Isometry, Point, Real, Vector, DIM};

/// An Axis-Aligned Bounding Box.
///
/// An Aabb is defined by its minimum and maximum corners, with edges always
/// parallel to the coordinate axes. It is the bounding volume cached by
/// geometries (in local space) and objects (in world space).
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct Aabb {
    /// The minimum coordinates of this Aabb.
    pub mins: Point<Real>,
    /// The maximum coordinates of this Aabb.
    pub maxs: Point<Real>,
}

impl Aabb {
    /// Creates a new Aabb.
    ///
    /// `mins` must be componentwise smaller than or equal to `maxs`.
    #[inline]
    pub fn new(mins: Point<Real>, maxs: Point<Real>) -> Aabb {
        Aabb { mins, maxs }
    }

    /// Creates an invalid Aabb with `mins` componentwise greater than `maxs`.
    ///
    /// This is often used as the initial value of some Aabb merging algorithms.
    #[inline]
    pub fn new_invalid() -> Self {
        Self::new(
            Point::from(Vector::repeat(Real::MAX)),
            Point::from(Vector::repeat(-Real::MAX)),
        )
    }

    /// Creates a new Aabb from its center and its half-extents.
    #[inline]
    pub fn from_half_extents(center: Point<Real>, half_extents: Vector<Real>) -> Self {
        Self::new(center - half_extents, center + half_extents)
    }

    /// The center of this Aabb.
    #[inline]
    pub fn center(&self) -> Point<Real> {
        na::center(&self.mins, &self.maxs)
    }

    /// The half extents of this Aabb.
    #[inline]
    pub fn half_extents(&self) -> Vector<Real> {
        (self.maxs - self.mins) * 0.5
    }

    /// The extents of this Aabb.
    #[inline]
    pub fn extents(&self) -> Vector<Real> {
        self.maxs - self.mins
    }

    /// Returns this Aabb translated by `translation`.
    #[inline]
    #[must_use]
    pub fn translated(&self, translation: &Vector<Real>) -> Self {
        Self::new(self.mins + translation, self.maxs + translation)
    }

    /// The smallest bounding sphere containing this Aabb.
    #[inline]
    pub fn bounding_sphere(&self) -> BoundingSphere {
        let center = self.center();
        let radius = na::distance(&self.mins, &self.maxs) * 0.5;
        BoundingSphere::new(center, radius)
    }

    /// Does this Aabb intersect `other`?
    #[inline]
    pub fn intersects(&self, other: &Aabb) -> bool {
        for i in 0..DIM {
            if self.mins[i] > other.maxs[i] || other.mins[i] > self.maxs[i] {
                return false;
            }
        }

        true
    }

    /// Is `other` fully inside of this Aabb?
    #[inline]
    pub fn contains(&self, other: &Aabb) -> bool {
        for i in 0..DIM {
            if self.mins[i] > other.mins[i] || self.maxs[i] < other.maxs[i] {
                return false;
            }
        }

        true
    }

    /// Does this Aabb contain the point `pt`?
    #[inline]
    pub fn contains_local_point(&self, pt: &Point<Real>) -> bool {
        for i in 0..DIM {
            if pt[i] < self.mins[i] || pt[i] > self.maxs[i] {
                return false;
            }
        }

        true
    }

    /// The smallest Aabb containing both `self` and `other`.
    #[inline]
    #[must_use]
    pub fn merged(&self, other: &Aabb) -> Aabb {
        Aabb::new(self.mins.inf(&other.mins), self.maxs.sup(&other.maxs))
    }

    /// The point of this Aabb closest to `pt`.
    ///
    /// Returns `pt` itself if it lies inside of this Aabb.
    #[inline]
    pub fn clamp_point(&self, pt: &Point<Real>) -> Point<Real> {
        pt.coords.sup(&self.mins.coords).inf(&self.maxs.coords).into()
    }

    /// Computes the Aabb of this Aabb transformed by `m`.
    ///
    /// The result is the tightest Aabb containing the eight transformed
    /// corners of `self`.
    #[inline]
    pub fn transform_by(&self, m: &Isometry<Real>) -> Self {
        let ls_center = self.center();
        let center = m * ls_center;
        let ws_half_extents = m.rotation.to_rotation_matrix().into_inner().abs()
            * self.half_extents();

        Aabb::from_half_extents(center, ws_half_extents)
    }
}
