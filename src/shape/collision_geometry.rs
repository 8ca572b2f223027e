use crate::bounding_volume::{Aabb, BoundingSphere};
use crate::math::{Point, Real, UnitVector, Vector};
use crate::query::GeometryError;
use crate::shape::{Ball, Capsule, Cuboid, HalfSpace, NodeType, ObjectType, Shape};
use std::any::Any;
use std::fmt;
use std::ops::Deref;
use std::sync::{Arc, OnceLock};

#[derive(Copy, Clone, Debug, PartialEq)]
struct LocalBound {
    aabb: Aabb,
    sphere: BoundingSphere,
}

/// A shape description coupled with its cached local bounds and occupancy
/// model.
///
/// The local bounds are **not** computed by the constructor: call
/// [`CollisionGeometry::compute_local_bound`] (or construct a
/// [`crate::object::CollisionObject`], which does it for you) before querying
/// [`CollisionGeometry::local_aabb`] or
/// [`CollisionGeometry::local_bounding_sphere`].
///
/// The occupancy model classifies the geometry from its collision cost per
/// unit volume: occupied iff `cost_density >= occupied_threshold`, free iff
/// `cost_density <= free_threshold`. No ordering between the two thresholds
/// is enforced, so a geometry may be classified as both at once.
pub struct CollisionGeometry {
    shape: Box<dyn Shape>,
    local_bound: OnceLock<LocalBound>,
    /// The collision cost per unit volume.
    pub cost_density: Real,
    /// The cost density at or above which the geometry is occupied.
    pub occupied_threshold: Real,
    /// The cost density at or below which the geometry is free.
    pub free_threshold: Real,
    user_data: Option<Box<dyn Any + Send + Sync>>,
}

impl CollisionGeometry {
    /// Creates a new geometry from a shape description.
    ///
    /// The local bounds are left uncomputed.
    pub fn new(shape: impl Shape) -> Self {
        Self::from_boxed(Box::new(shape))
    }

    /// Creates a new geometry from an already-boxed shape description.
    pub fn from_boxed(shape: Box<dyn Shape>) -> Self {
        CollisionGeometry {
            shape,
            local_bound: OnceLock::new(),
            cost_density: 1.0,
            occupied_threshold: 1.0,
            free_threshold: 0.0,
            user_data: None,
        }
    }

    /// Computes and caches the local Aabb and bounding sphere of this
    /// geometry.
    ///
    /// The shape description is immutable, so the bounds are computed at most
    /// once; further calls are no-ops. Safe to call concurrently.
    pub fn compute_local_bound(&self) {
        let _ = self.local_bound.get_or_init(|| LocalBound {
            aabb: self.shape.compute_local_aabb(),
            sphere: self.shape.compute_local_bounding_sphere(),
        });
    }

    /// The cached local Aabb of this geometry.
    ///
    /// Errors with [`GeometryError::NotInitialized`] if
    /// [`CollisionGeometry::compute_local_bound`] was never called.
    pub fn local_aabb(&self) -> Result<&Aabb, GeometryError> {
        self.local_bound
            .get()
            .map(|bound| &bound.aabb)
            .ok_or(GeometryError::NotInitialized)
    }

    /// The cached local bounding sphere of this geometry.
    ///
    /// Errors with [`GeometryError::NotInitialized`] if
    /// [`CollisionGeometry::compute_local_bound`] was never called.
    pub fn local_bounding_sphere(&self) -> Result<&BoundingSphere, GeometryError> {
        self.local_bound
            .get()
            .map(|bound| &bound.sphere)
            .ok_or(GeometryError::NotInitialized)
    }

    /// The shape description of this geometry.
    pub fn shape(&self) -> &dyn Shape {
        &*self.shape
    }

    /// Converts the shape of this geometry to the given type, if it is one.
    pub fn as_shape<T: Shape>(&self) -> Option<&T> {
        self.shape.as_shape()
    }

    /// The coarse category of this geometry's shape.
    pub fn object_type(&self) -> ObjectType {
        self.shape.object_type()
    }

    /// The fine kind of this geometry's shape, used as a dispatch key.
    pub fn node_type(&self) -> NodeType {
        self.shape.node_type()
    }

    /// Is this geometry completely occupied?
    #[inline]
    pub fn is_occupied(&self) -> bool {
        self.cost_density >= self.occupied_threshold
    }

    /// Is this geometry completely free?
    #[inline]
    pub fn is_free(&self) -> bool {
        self.cost_density <= self.free_threshold
    }

    /// Is the occupancy of this geometry uncertain?
    #[inline]
    pub fn is_uncertain(&self) -> bool {
        !self.is_occupied() && !self.is_free()
    }

    /// The opaque user data attached to this geometry, if any.
    ///
    /// Never inspected by this crate.
    pub fn user_data(&self) -> Option<&(dyn Any + Send + Sync)> {
        self.user_data.as_deref()
    }

    /// Attaches opaque user data to this geometry, returning the previous
    /// value.
    pub fn set_user_data(
        &mut self,
        data: Option<Box<dyn Any + Send + Sync>>,
    ) -> Option<Box<dyn Any + Send + Sync>> {
        std::mem::replace(&mut self.user_data, data)
    }
}

impl Clone for CollisionGeometry {
    /// Produces an independent copy with identical shape parameters, scalars,
    /// and bound-cache state.
    ///
    /// The user data is not carried over: it is type-erased and unclonable.
    fn clone(&self) -> Self {
        let local_bound = OnceLock::new();
        if let Some(bound) = self.local_bound.get() {
            let _ = local_bound.set(*bound);
        }

        CollisionGeometry {
            shape: self.shape.clone_dyn(),
            local_bound,
            cost_density: self.cost_density,
            occupied_threshold: self.occupied_threshold,
            free_threshold: self.free_threshold,
            user_data: None,
        }
    }
}

impl PartialEq for CollisionGeometry {
    /// Structural equality over the occupancy scalars and the cached local
    /// bound. Shape parameters and user data are excluded.
    fn eq(&self, other: &Self) -> bool {
        self.cost_density == other.cost_density
            && self.occupied_threshold == other.occupied_threshold
            && self.free_threshold == other.free_threshold
            && self.local_bound.get() == other.local_bound.get()
    }
}

impl fmt::Debug for CollisionGeometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CollisionGeometry")
            .field("node_type", &self.node_type())
            .field("cost_density", &self.cost_density)
            .field("occupied_threshold", &self.occupied_threshold)
            .field("free_threshold", &self.free_threshold)
            .field("local_bound", &self.local_bound.get())
            .finish()
    }
}

/// A reference-counted, shareable geometry.
///
/// Cloning a `SharedGeometry` only increments a reference count; the same
/// geometry instance may be referenced by many
/// [`crate::object::CollisionObject`]s simultaneously, which only ever read
/// its shape data and bounds.
#[derive(Clone, Debug)]
pub struct SharedGeometry(pub Arc<CollisionGeometry>);

impl SharedGeometry {
    /// Wraps the given geometry in a shareable handle.
    pub fn new(geometry: CollisionGeometry) -> Self {
        SharedGeometry(Arc::new(geometry))
    }

    /// Initializes a shared ball geometry.
    pub fn ball(radius: Real) -> Self {
        Self::new(CollisionGeometry::new(Ball::new(radius)))
    }

    /// Initializes a shared cuboid geometry.
    pub fn cuboid(hx: Real, hy: Real, hz: Real) -> Self {
        Self::new(CollisionGeometry::new(Cuboid::new(Vector::new(hx, hy, hz))))
    }

    /// Initializes a shared capsule geometry.
    pub fn capsule(a: Point<Real>, b: Point<Real>, radius: Real) -> Self {
        Self::new(CollisionGeometry::new(Capsule::new(a, b, radius)))
    }

    /// Initializes a shared half-space geometry.
    pub fn halfspace(normal: UnitVector<Real>, d: Real) -> Self {
        Self::new(CollisionGeometry::new(HalfSpace::new(normal, d)))
    }

    /// Do `self` and `other` reference the same geometry allocation?
    #[inline]
    pub fn ptr_eq(&self, other: &SharedGeometry) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Deref for SharedGeometry {
    type Target = CollisionGeometry;
    fn deref(&self) -> &CollisionGeometry {
        &self.0
    }
}

impl AsRef<CollisionGeometry> for SharedGeometry {
    fn as_ref(&self) -> &CollisionGeometry {
        &self.0
    }
}
