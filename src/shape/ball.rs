use crate::bounding_volume::{Aabb, BoundingSphere};
use crate::math::{Matrix, Point, Real, Vector};
use crate::shape::{NodeType, ObjectType, Shape};
use core::f64::consts::PI;

/// A Ball shape.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
#[repr(C)]
pub struct Ball {
    /// The radius of the ball.
    pub radius: Real,
}

impl Ball {
    /// Creates a new ball with the given radius.
    #[inline]
    pub fn new(radius: Real) -> Ball {
        Ball { radius }
    }
}

impl Shape for Ball {
    fn compute_local_aabb(&self) -> Aabb {
        Aabb::from_half_extents(Point::origin(), Vector::repeat(self.radius))
    }

    fn compute_local_bounding_sphere(&self) -> BoundingSphere {
        BoundingSphere::new(Point::origin(), self.radius)
    }

    fn object_type(&self) -> ObjectType {
        ObjectType::BasicPrimitive
    }

    fn node_type(&self) -> NodeType {
        NodeType::Sphere
    }

    fn clone_dyn(&self) -> Box<dyn Shape> {
        Box::new(*self)
    }

    fn volume(&self) -> Real {
        4.0 * PI * self.radius * self.radius * self.radius / 3.0
    }

    fn inertia_about_origin(&self) -> Matrix<Real> {
        let i = 0.4 * self.volume() * self.radius * self.radius;
        Matrix::from_diagonal_element(i)
    }
}
