//! Bounding sphere.

use crate::bounding_volume::Aabb;
use crate::math::{Isometry, Point, Real};

/// A Bounding Sphere.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct BoundingSphere {
    /// The center of this bounding sphere.
    pub center: Point<Real>,
    /// The radius of this bounding sphere.
    pub radius: Real,
}

impl BoundingSphere {
    /// Creates a new bounding sphere.
    pub fn new(center: Point<Real>, radius: Real) -> BoundingSphere {
        BoundingSphere { center, radius }
    }

    /// The bounding sphere center.
    #[inline]
    pub fn center(&self) -> &Point<Real> {
        &self.center
    }

    /// The bounding sphere radius.
    #[inline]
    pub fn radius(&self) -> Real {
        self.radius
    }

    /// Transforms this bounding sphere by `m`.
    #[inline]
    pub fn transform_by(&self, m: &Isometry<Real>) -> BoundingSphere {
        BoundingSphere::new(m * self.center, self.radius)
    }

    /// Does this bounding sphere contain `other`?
    #[inline]
    pub fn contains(&self, other: &BoundingSphere) -> bool {
        let delta_pos = other.center - self.center;
        delta_pos.norm() + other.radius <= self.radius
    }

    /// Does this bounding sphere fully contain the Aabb `aabb`?
    #[inline]
    pub fn contains_aabb(&self, aabb: &Aabb) -> bool {
        // The farthest corner of the box is enough.
        let mut farthest = self.center;
        for i in 0..3 {
            farthest[i] = if (aabb.mins[i] - self.center[i]).abs()
                > (aabb.maxs[i] - self.center[i]).abs()
            {
                aabb.mins[i]
            } else {
                aabb.maxs[i]
            };
        }

        na::distance(&self.center, &farthest) <= self.radius + crate::math::DEFAULT_EPSILON
    }
}

#[cfg(test)]
mod test {
    use super::BoundingSphere;
    use crate::bounding_volume::Aabb;
    use crate::math::{Isometry, Point};

    #[test]
    fn transform_by_moves_center_only() {
        let sphere = BoundingSphere::new(Point::new(1.0, 0.0, 0.0), 2.0);
        let m = Isometry::translation(0.0, 5.0, 0.0);
        let transformed = sphere.transform_by(&m);

        assert_eq!(transformed.center, Point::new(1.0, 5.0, 0.0));
        assert_eq!(transformed.radius, 2.0);
    }

    #[test]
    fn contains_aabb_from_itself() {
        let aabb = Aabb::new(Point::new(-1.0, -1.0, -1.0), Point::new(2.0, 1.0, 1.0));
        let sphere = aabb.bounding_sphere();
        assert!(sphere.contains_aabb(&aabb));
    }
}
