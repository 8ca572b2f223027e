use crate::bounding_volume::Aabb;
use crate::math::{Isometry, Point, Real, Vector};
use crate::shape::{NodeType, ObjectType, Shape};
use core::f64::consts::PI;

/// A capsule shape defined as a round segment.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Capsule {
    /// The first endpoint of the capsule's axis.
    pub a: Point<Real>,
    /// The second endpoint of the capsule's axis.
    pub b: Point<Real>,
    /// The radius of the capsule.
    pub radius: Real,
}

impl Capsule {
    /// Creates a new capsule defined as the segment between `a` and `b` and
    /// with the given `radius`.
    pub fn new(a: Point<Real>, b: Point<Real>, radius: Real) -> Self {
        Self { a, b, radius }
    }

    /// Creates a new capsule aligned with the `y` axis and with the given
    /// half-height and radius.
    pub fn new_y(half_height: Real, radius: Real) -> Self {
        let b = Point::from(Vector::y() * half_height);
        Self::new(-b, b, radius)
    }

    /// The height of this capsule.
    pub fn height(&self) -> Real {
        (self.b - self.a).norm()
    }

    /// The center of this capsule.
    pub fn center(&self) -> Point<Real> {
        na::center(&self.a, &self.b)
    }

    /// Creates a new capsule equal to `self` with both endpoints transformed
    /// by `pos`.
    pub fn transform_by(&self, pos: &Isometry<Real>) -> Self {
        Self::new(pos * self.a, pos * self.b, self.radius)
    }
}

impl Shape for Capsule {
    fn compute_local_aabb(&self) -> Aabb {
        let r = Vector::repeat(self.radius);
        Aabb::new(
            Point::from(self.a.coords.inf(&self.b.coords) - r),
            Point::from(self.a.coords.sup(&self.b.coords) + r),
        )
    }

    fn object_type(&self) -> ObjectType {
        ObjectType::BasicPrimitive
    }

    fn node_type(&self) -> NodeType {
        NodeType::Capsule
    }

    fn clone_dyn(&self) -> Box<dyn Shape> {
        Box::new(*self)
    }

    fn center_of_mass(&self) -> Point<Real> {
        self.center()
    }

    fn volume(&self) -> Real {
        let r = self.radius;
        PI * r * r * self.height() + 4.0 * PI * r * r * r / 3.0
    }

    // inertia_about_origin deliberately stays at the NaN-sentinel default.
}

#[cfg(test)]
mod test {
    use super::Capsule;
    use crate::math::Point;
    use crate::shape::Shape;
    use approx::assert_relative_eq;
    use core::f64::consts::PI;

    #[test]
    fn aabb_covers_both_caps() {
        let capsule = Capsule::new_y(1.0, 0.5);
        let aabb = capsule.compute_local_aabb();
        assert_eq!(aabb.mins, Point::new(-0.5, -1.5, -0.5));
        assert_eq!(aabb.maxs, Point::new(0.5, 1.5, 0.5));
    }

    #[test]
    fn volume_is_cylinder_plus_ball() {
        let capsule = Capsule::new_y(2.0, 1.0);
        assert_relative_eq!(capsule.volume(), 4.0 * PI + 4.0 * PI / 3.0, epsilon = 1.0e-12);
    }

    #[test]
    fn off_center_center_of_mass() {
        let capsule = Capsule::new(Point::origin(), Point::new(0.0, 4.0, 0.0), 1.0);
        assert_eq!(capsule.center_of_mass(), Point::new(0.0, 2.0, 0.0));
    }
}
