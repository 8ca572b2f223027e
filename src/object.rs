//! Rigid objects coupling a shared geometry with a transform and a cached
//! world-space bound.

use crate::bounding_volume::Aabb;
use crate::math::{Isometry, Real, Rotation, Translation, Vector};
use crate::query::GeometryError;
use crate::shape::{NodeType, ObjectType, SharedGeometry};
use std::any::Any;

/// A rigid object: a shared geometry placed by an isometry, with a cached
/// world-space Aabb.
///
/// # Bound caching contract
///
/// The cached world bound is refreshed by the constructors and by
/// [`CollisionObject::set_geometry`] only. **Mutating the transform does not
/// refresh it**: callers batching transform updates across many objects call
/// [`CollisionObject::compute_world_aabb`] once per object afterwards. Until
/// then, [`CollisionObject::world_aabb`] returns the stale bound.
///
/// Under an identity rotation the world bound is the local Aabb exactly
/// translated; otherwise it is the conservative axis-aligned box of the
/// transformed local bounding sphere, trading tightness for an O(1),
/// rotation-independent update.
pub struct CollisionObject {
    geometry: SharedGeometry,
    position: Isometry<Real>,
    world_aabb: Aabb,
    user_data: Option<Box<dyn Any + Send + Sync>>,
}

impl CollisionObject {
    /// Creates an object at the identity position.
    ///
    /// Computes the geometry's local bound (if not already computed) and the
    /// object's world bound.
    pub fn new(geometry: SharedGeometry) -> Self {
        Self::with_position(geometry, Isometry::identity())
    }

    /// Creates an object at the given position.
    ///
    /// Computes the geometry's local bound (if not already computed) and the
    /// object's world bound.
    pub fn with_position(geometry: SharedGeometry, position: Isometry<Real>) -> Self {
        // Infallible: the local bound is computed right here.
        Self::from_parts(geometry, position, true)
            .expect("local bound was just computed")
    }

    /// Creates an object at the given position, optionally skipping the
    /// local-bound computation.
    ///
    /// With `compute_local_bound = false` the geometry's bound must already
    /// have been computed; otherwise this fails fast with
    /// [`GeometryError::NotInitialized`] instead of caching a garbage world
    /// bound.
    pub fn from_parts(
        geometry: SharedGeometry,
        position: Isometry<Real>,
        compute_local_bound: bool,
    ) -> Result<Self, GeometryError> {
        if compute_local_bound {
            geometry.compute_local_bound();
        }

        let world_aabb = world_aabb_of(&geometry, &position)?;

        Ok(CollisionObject {
            geometry,
            position,
            world_aabb,
            user_data: None,
        })
    }

    /// The coarse category of this object's geometry.
    pub fn object_type(&self) -> ObjectType {
        self.geometry.object_type()
    }

    /// The fine kind of this object's geometry.
    pub fn node_type(&self) -> NodeType {
        self.geometry.node_type()
    }

    /// The cached world-space Aabb.
    ///
    /// Stale after any transform mutation until
    /// [`CollisionObject::compute_world_aabb`] is called.
    #[inline]
    pub fn world_aabb(&self) -> &Aabb {
        &self.world_aabb
    }

    /// Recomputes the cached world-space Aabb from the current transform.
    pub fn compute_world_aabb(&mut self) {
        // The constructors guarantee an initialized local bound.
        self.world_aabb = world_aabb_of(&self.geometry, &self.position)
            .expect("object geometry always carries an initialized local bound");
    }

    /// The translation of this object.
    #[inline]
    pub fn translation(&self) -> &Vector<Real> {
        &self.position.translation.vector
    }

    /// The rotation of this object.
    #[inline]
    pub fn rotation(&self) -> &Rotation<Real> {
        &self.position.rotation
    }

    /// The position of this object.
    #[inline]
    pub fn position(&self) -> &Isometry<Real> {
        &self.position
    }

    /// Sets the translation of this object. Does not refresh the world bound.
    pub fn set_translation(&mut self, translation: Vector<Real>) {
        self.position.translation = Translation::from(translation);
    }

    /// Sets the rotation of this object. Does not refresh the world bound.
    pub fn set_rotation(&mut self, rotation: Rotation<Real>) {
        self.position.rotation = rotation;
    }

    /// Sets the position of this object. Does not refresh the world bound.
    pub fn set_position(&mut self, position: Isometry<Real>) {
        self.position = position;
    }

    /// Is this object positioned at the identity?
    pub fn is_identity_position(&self) -> bool {
        self.position == Isometry::identity()
    }

    /// Resets this object to the identity position. Does not refresh the
    /// world bound.
    pub fn set_identity_position(&mut self) {
        self.position = Isometry::identity();
    }

    /// The shared geometry of this object.
    #[inline]
    pub fn geometry(&self) -> &SharedGeometry {
        &self.geometry
    }

    /// Associates a new geometry to this object.
    ///
    /// A no-op when `geometry` references the same allocation as the current
    /// one: no bound is recomputed. Otherwise the new geometry's local bound
    /// is computed (unless `compute_local_bound` is `false`) and the world
    /// bound is refreshed.
    pub fn set_geometry(
        &mut self,
        geometry: SharedGeometry,
        compute_local_bound: bool,
    ) -> Result<(), GeometryError> {
        if self.geometry.ptr_eq(&geometry) {
            return Ok(());
        }

        if compute_local_bound {
            geometry.compute_local_bound();
        }

        self.world_aabb = world_aabb_of(&geometry, &self.position)?;
        self.geometry = geometry;
        Ok(())
    }

    /// The opaque user data attached to this object, if any.
    pub fn user_data(&self) -> Option<&(dyn Any + Send + Sync)> {
        self.user_data.as_deref()
    }

    /// Attaches opaque user data to this object, returning the previous
    /// value.
    pub fn set_user_data(
        &mut self,
        data: Option<Box<dyn Any + Send + Sync>>,
    ) -> Option<Box<dyn Any + Send + Sync>> {
        std::mem::replace(&mut self.user_data, data)
    }
}

fn world_aabb_of(
    geometry: &SharedGeometry,
    position: &Isometry<Real>,
) -> Result<Aabb, GeometryError> {
    if position.rotation == Rotation::identity() {
        // Tight and exact: the local box, translated.
        Ok(geometry
            .local_aabb()?
            .translated(&position.translation.vector))
    } else {
        // Conservative: the axis-aligned box of the transformed local sphere.
        let sphere = geometry.local_bounding_sphere()?;
        let center = position * sphere.center;
        Ok(Aabb::from_half_extents(
            center,
            Vector::repeat(sphere.radius),
        ))
    }
}

#[cfg(test)]
mod test {
    use super::CollisionObject;
    use crate::bounding_volume::Aabb;
    use crate::math::{Isometry, Point, Rotation, Vector};
    use crate::query::GeometryError;
    use crate::shape::{CollisionGeometry, NodeType, Shape, SharedGeometry};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    /// A shape double counting how many times its local bound is produced.
    struct CountingShape {
        computations: Arc<AtomicUsize>,
    }

    impl Shape for CountingShape {
        fn compute_local_aabb(&self) -> Aabb {
            let _ = self.computations.fetch_add(1, Ordering::Relaxed);
            Aabb::from_half_extents(Point::origin(), Vector::repeat(1.0))
        }

        fn node_type(&self) -> NodeType {
            NodeType::Box
        }

        fn clone_dyn(&self) -> Box<dyn Shape> {
            Box::new(CountingShape {
                computations: self.computations.clone(),
            })
        }
    }

    fn counting_geometry() -> (SharedGeometry, Arc<AtomicUsize>) {
        let computations = Arc::new(AtomicUsize::new(0));
        let geometry = SharedGeometry::new(CollisionGeometry::new(CountingShape {
            computations: computations.clone(),
        }));
        (geometry, computations)
    }

    #[test]
    fn exact_translation_bound() {
        let geometry = SharedGeometry::cuboid(1.0, 2.0, 3.0);
        let t = Vector::new(-4.0, 10.0, 0.25);
        let object = CollisionObject::with_position(geometry, Isometry::from_parts(
            t.into(),
            Rotation::identity(),
        ));

        let aabb = object.world_aabb();
        assert_eq!(aabb.mins, Point::new(-5.0, 8.0, -2.75));
        assert_eq!(aabb.maxs, Point::new(-3.0, 12.0, 3.25));
    }

    #[test]
    fn conservative_rotation_bound_matches_sphere_box() {
        let geometry = SharedGeometry::cuboid(1.0, 2.0, 3.0);
        geometry.compute_local_bound();
        let sphere = *geometry.local_bounding_sphere().unwrap();

        let rot = Rotation::from_axis_angle(&Vector::y_axis(), 0.7);
        let pos = Isometry::from_parts(Vector::new(1.0, 2.0, 3.0).into(), rot);
        let object = CollisionObject::with_position(geometry, pos);

        let expected_center = pos * sphere.center;
        let expected =
            Aabb::from_half_extents(expected_center, Vector::repeat(sphere.radius));
        assert_eq!(*object.world_aabb(), expected);
    }

    #[test]
    fn world_bound_is_stale_until_recomputed() {
        let geometry = SharedGeometry::ball(1.0);
        let mut object = CollisionObject::new(geometry);
        let before = *object.world_aabb();

        object.set_translation(Vector::new(5.0, 0.0, 0.0));
        assert_eq!(*object.world_aabb(), before);

        object.compute_world_aabb();
        assert_eq!(
            *object.world_aabb(),
            before.translated(&Vector::new(5.0, 0.0, 0.0))
        );
    }

    #[test]
    fn set_geometry_same_reference_is_a_no_op() {
        let (geometry, computations) = counting_geometry();
        let mut object = CollisionObject::new(geometry.clone());
        assert_eq!(computations.load(Ordering::Relaxed), 1);

        object.set_geometry(geometry, true).unwrap();
        assert_eq!(computations.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn set_geometry_new_reference_recomputes() {
        let (g1, count1) = counting_geometry();
        let (g2, count2) = counting_geometry();
        let mut object = CollisionObject::new(g1);
        assert_eq!(count1.load(Ordering::Relaxed), 1);

        object.set_geometry(g2.clone(), true).unwrap();
        assert_eq!(count2.load(Ordering::Relaxed), 1);
        assert!(object.geometry().ptr_eq(&g2));
    }

    #[test]
    fn from_parts_fails_fast_on_uninitialized_geometry() {
        let geometry = SharedGeometry::ball(1.0);
        let err = CollisionObject::from_parts(geometry, Isometry::identity(), false);
        assert!(matches!(err, Err(GeometryError::NotInitialized)));
    }

    #[test]
    fn identity_position_round_trip() {
        let mut object = CollisionObject::new(SharedGeometry::ball(1.0));
        assert!(object.is_identity_position());

        object.set_rotation(Rotation::from_axis_angle(&Vector::x_axis(), 1.0));
        assert!(!object.is_identity_position());

        object.set_identity_position();
        assert!(object.is_identity_position());
        let _ = object.position();
    }

    #[test]
    fn counting_shape_bound_is_computed_once_even_when_shared() {
        let (geometry, computations) = counting_geometry();
        let o1 = CollisionObject::new(geometry.clone());
        let o2 = CollisionObject::new(geometry);
        assert_eq!(computations.load(Ordering::Relaxed), 1);
        assert_eq!(o1.world_aabb(), o2.world_aabb());
    }

    #[test]
    fn object_user_data_round_trip() {
        let mut object = CollisionObject::new(SharedGeometry::ball(1.0));
        assert!(object.user_data().is_none());

        let _ = object.set_user_data(Some(Box::new(7usize)));
        let stored = object
            .user_data()
            .and_then(|data| data.downcast_ref::<usize>())
            .copied();
        assert_eq!(stored, Some(7));
    }
}
