use crate::bounding_volume::Aabb;
use crate::math::{Matrix, Point, Real, Vector};
use crate::shape::{NodeType, ObjectType, Shape};

/// A cuboid shape, defined by its half-extents along each local axis.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
#[repr(C)]
pub struct Cuboid {
    /// The half-extents of the cuboid.
    pub half_extents: Vector<Real>,
}

impl Cuboid {
    /// Creates a new cuboid from its half-extents.
    #[inline]
    pub fn new(half_extents: Vector<Real>) -> Cuboid {
        Cuboid { half_extents }
    }

    /// The point of this cuboid closest to `pt` (in the cuboid's local frame).
    ///
    /// Returns `pt` itself if it lies inside of the cuboid.
    #[inline]
    pub fn clamp_local_point(&self, pt: &Point<Real>) -> Point<Real> {
        pt.coords
            .sup(&(-self.half_extents))
            .inf(&self.half_extents)
            .into()
    }

    /// A support point of this cuboid in the given local direction.
    #[inline]
    pub fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        Point::from(self.half_extents.zip_map(dir, |he, d| he.copysign(d)))
    }
}

impl Shape for Cuboid {
    fn compute_local_aabb(&self) -> Aabb {
        Aabb::from_half_extents(Point::origin(), self.half_extents)
    }

    fn object_type(&self) -> ObjectType {
        ObjectType::BasicPrimitive
    }

    fn node_type(&self) -> NodeType {
        NodeType::Box
    }

    fn clone_dyn(&self) -> Box<dyn Shape> {
        Box::new(*self)
    }

    fn volume(&self) -> Real {
        8.0 * self.half_extents.x * self.half_extents.y * self.half_extents.z
    }

    fn inertia_about_origin(&self) -> Matrix<Real> {
        let v = self.volume();
        let he = self.half_extents;
        Matrix::from_diagonal(&Vector::new(
            v * (he.y * he.y + he.z * he.z) / 3.0,
            v * (he.x * he.x + he.z * he.z) / 3.0,
            v * (he.x * he.x + he.y * he.y) / 3.0,
        ))
    }
}

#[cfg(test)]
mod test {
    use super::Cuboid;
    use crate::math::{Point, Vector};
    use crate::shape::Shape;
    use approx::assert_relative_eq;

    #[test]
    fn clamp_and_support() {
        let cuboid = Cuboid::new(Vector::new(1.0, 2.0, 3.0));

        assert_eq!(
            cuboid.clamp_local_point(&Point::new(5.0, 0.0, -8.0)),
            Point::new(1.0, 0.0, -3.0)
        );
        assert_eq!(
            cuboid.local_support_point(&Vector::new(-0.2, 0.7, 0.0)),
            Point::new(-1.0, 2.0, 3.0)
        );
    }

    #[test]
    fn unit_cube_volume_and_inertia() {
        let cuboid = Cuboid::new(Vector::repeat(0.5));
        assert_relative_eq!(cuboid.volume(), 1.0, epsilon = 1.0e-12);
        // Unit cube, unit density: diagonal entries are 1/6.
        assert_relative_eq!(
            cuboid.inertia_about_origin().m11,
            1.0 / 6.0,
            epsilon = 1.0e-12
        );
    }
}
