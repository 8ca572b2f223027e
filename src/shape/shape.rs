use crate::bounding_volume::{Aabb, BoundingSphere};
use crate::math::{Matrix, Point, Real};
use crate::shape::{Ball, Capsule, Cuboid, HalfSpace};
use downcast_rs::{impl_downcast, DowncastSync};
use num_derive::FromPrimitive;

/// The coarse category of an object, driving which traversal strategy applies.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ObjectType {
    /// An object of unknown category.
    Unknown,
    /// A mesh or point collection backed by a bounding-volume hierarchy.
    MeshOrPointCollection,
    /// A basic geometric primitive.
    BasicPrimitive,
    /// An octree.
    Octree,
    /// A height field.
    HeightField,
}

/// The fine shape kind used as a dispatch key for narrow-phase queries.
///
/// This set is closed and stable: it crosses the bounding-volume kinds used by
/// hierarchy leaves with the basic primitive kinds, plus the octree and
/// height-field leaf kinds.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, FromPrimitive)]
pub enum NodeType {
    /// An unknown bounding-volume node.
    BvUnknown = 0,
    /// An axis-aligned bounding-box node.
    BvAabb,
    /// An oriented bounding-box node.
    BvObb,
    /// A rectangle-swept-sphere node.
    BvRss,
    /// An intersection-of-spheres node.
    BvKios,
    /// A combined OBB/RSS node.
    BvObbRss,
    /// A 16-plane discrete-orientation polytope node.
    BvKdop16,
    /// An 18-plane discrete-orientation polytope node.
    BvKdop18,
    /// A 24-plane discrete-orientation polytope node.
    BvKdop24,
    /// A box primitive.
    Box,
    /// A sphere primitive.
    Sphere,
    /// An ellipsoid primitive.
    Ellipsoid,
    /// A capsule primitive.
    Capsule,
    /// A cone primitive.
    Cone,
    /// A cylinder primitive.
    Cylinder,
    /// A convex-hull primitive.
    Convex,
    /// A plane primitive.
    Plane,
    /// A half-space primitive.
    HalfSpace,
    /// A triangle primitive.
    Triangle,
    /// An octree cell.
    OctreeCell,
    /// A height-field leaf bounded by an AABB.
    HeightFieldAabbLeaf,
    /// A height-field leaf bounded by an OBBRSS.
    HeightFieldObbRssLeaf,
}

/// The number of fine shape kinds, i.e., the extent of the dispatch table.
pub const NODE_COUNT: usize = NodeType::HeightFieldObbRssLeaf as usize + 1;

/// Trait implemented by every shape description usable in distance queries.
///
/// A shape computes its own local bounds and, optionally, its mass
/// properties. It carries no transform: pairing a shape with an isometry is
/// the job of [`crate::object::CollisionObject`].
pub trait Shape: DowncastSync {
    /// Computes the Aabb of this shape in its local frame.
    fn compute_local_aabb(&self) -> Aabb;

    /// Computes a bounding sphere of this shape in its local frame.
    ///
    /// The sphere need not be minimal but must fully contain the shape, since
    /// conservative world bounds are derived from it under rotation. The
    /// default derives it from [`Shape::compute_local_aabb`], which also
    /// contains the local Aabb.
    fn compute_local_bounding_sphere(&self) -> BoundingSphere {
        self.compute_local_aabb().bounding_sphere()
    }

    /// The coarse category of this shape.
    fn object_type(&self) -> ObjectType {
        ObjectType::Unknown
    }

    /// The fine kind of this shape, used as a dispatch key.
    fn node_type(&self) -> NodeType {
        NodeType::BvUnknown
    }

    /// Clones this shape into a boxed trait object.
    fn clone_dyn(&self) -> Box<dyn Shape>;

    /// The center of mass of this shape.
    fn center_of_mass(&self) -> Point<Real> {
        Point::origin()
    }

    /// The volume of this shape.
    fn volume(&self) -> Real {
        0.0
    }

    /// The inertia tensor of this shape about the origin of its local frame,
    /// computed for a unit density.
    ///
    /// Shapes without a known inertia return a matrix filled with NaN. The
    /// sentinel propagates through any arithmetic using it, which keeps the
    /// composed formulas below transparent over unsupported shapes.
    fn inertia_about_origin(&self) -> Matrix<Real> {
        Matrix::from_element(Real::NAN)
    }

    /// The inertia tensor of this shape about its center of mass.
    ///
    /// Computed from [`Shape::inertia_about_origin`] by the parallel-axis
    /// (Steiner) shift. A NaN sentinel from the origin inertia propagates
    /// through the shift untouched.
    fn inertia_about_com(&self) -> Matrix<Real> {
        let i0 = self.inertia_about_origin();
        let c = self.center_of_mass();
        let v = self.volume();

        Matrix::new(
            i0.m11 - v * (c.y * c.y + c.z * c.z),
            i0.m12 + v * c.x * c.y,
            i0.m13 + v * c.x * c.z,
            i0.m21 + v * c.y * c.x,
            i0.m22 - v * (c.x * c.x + c.z * c.z),
            i0.m23 + v * c.y * c.z,
            i0.m31 + v * c.z * c.x,
            i0.m32 + v * c.z * c.y,
            i0.m33 - v * (c.x * c.x + c.y * c.y),
        )
    }
}

impl_downcast!(sync Shape);

impl dyn Shape {
    /// Converts this abstract shape to the given shape, if it is one.
    pub fn as_shape<T: Shape>(&self) -> Option<&T> {
        self.downcast_ref()
    }

    /// Converts this abstract shape to a ball, if it is one.
    pub fn as_ball(&self) -> Option<&Ball> {
        self.downcast_ref()
    }

    /// Converts this abstract shape to a cuboid, if it is one.
    pub fn as_cuboid(&self) -> Option<&Cuboid> {
        self.downcast_ref()
    }

    /// Converts this abstract shape to a capsule, if it is one.
    pub fn as_capsule(&self) -> Option<&Capsule> {
        self.downcast_ref()
    }

    /// Converts this abstract shape to a half-space, if it is one.
    pub fn as_half_space(&self) -> Option<&HalfSpace> {
        self.downcast_ref()
    }
}

#[cfg(test)]
mod test {
    use super::{NodeType, Shape, NODE_COUNT};
    use crate::bounding_volume::Aabb;
    use crate::math::{Matrix, Point, Real, Vector};
    use num_traits::FromPrimitive;

    struct InertialOnlyAtOrigin;

    impl Shape for InertialOnlyAtOrigin {
        fn compute_local_aabb(&self) -> Aabb {
            Aabb::from_half_extents(Point::origin(), Vector::repeat(1.0))
        }

        fn clone_dyn(&self) -> Box<dyn Shape> {
            Box::new(InertialOnlyAtOrigin)
        }

        fn inertia_about_origin(&self) -> Matrix<Real> {
            Matrix::identity()
        }

        fn volume(&self) -> Real {
            1.0
        }
    }

    #[test]
    fn parallel_axis_identity_at_origin() {
        // Center of mass at the origin: both tensors must match exactly.
        let shape = InertialOnlyAtOrigin;
        assert_eq!(shape.inertia_about_com(), shape.inertia_about_origin());
    }

    #[test]
    fn nan_sentinel_propagates_through_steiner_shift() {
        struct NoInertia;
        impl Shape for NoInertia {
            fn compute_local_aabb(&self) -> Aabb {
                Aabb::from_half_extents(Point::origin(), Vector::repeat(1.0))
            }
            fn clone_dyn(&self) -> Box<dyn Shape> {
                Box::new(NoInertia)
            }
        }

        let inertia = NoInertia.inertia_about_com();
        assert!(inertia.iter().all(|e| e.is_nan()));
    }

    #[test]
    fn node_type_round_trips_through_indices() {
        for i in 0..NODE_COUNT {
            let tag = NodeType::from_usize(i).unwrap();
            assert_eq!(tag as usize, i);
        }
        assert!(NodeType::from_usize(NODE_COUNT).is_none());
    }
}
