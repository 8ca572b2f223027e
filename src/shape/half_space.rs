use crate::bounding_volume::{Aabb, BoundingSphere};
use crate::math::{Point, Real, UnitVector, Vector};
use crate::shape::{NodeType, ObjectType, Shape};

/// A half-space delimited by an infinite plane.
///
/// The half-space covers every point `p` with `normal · p <= d`.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Clone, Copy)]
pub struct HalfSpace {
    /// The halfspace planar boundary's outward normal.
    pub normal: UnitVector<Real>,
    /// The signed offset of the boundary plane along its normal.
    pub d: Real,
}

impl HalfSpace {
    /// Builds a new halfspace from its boundary plane's outward normal and
    /// offset.
    #[inline]
    pub fn new(normal: UnitVector<Real>, d: Real) -> HalfSpace {
        HalfSpace { normal, d }
    }

    /// The signed distance from `pt` to the boundary plane, positive outside
    /// of the half-space.
    #[inline]
    pub fn signed_distance_to_point(&self, pt: &Point<Real>) -> Real {
        self.normal.dot(&pt.coords) - self.d
    }
}

impl Shape for HalfSpace {
    fn compute_local_aabb(&self) -> Aabb {
        // Unbounded. Half of the representable range on each side keeps
        // center and extents finite.
        let half_max = Real::MAX * 0.5;
        Aabb::from_half_extents(Point::origin(), Vector::repeat(half_max))
    }

    fn compute_local_bounding_sphere(&self) -> BoundingSphere {
        BoundingSphere::new(Point::origin(), Real::MAX * 0.5)
    }

    fn object_type(&self) -> ObjectType {
        ObjectType::BasicPrimitive
    }

    fn node_type(&self) -> NodeType {
        NodeType::HalfSpace
    }

    fn clone_dyn(&self) -> Box<dyn Shape> {
        Box::new(*self)
    }
}
