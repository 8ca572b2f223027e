use crate::math::{Point, Real, Vector};

/// The configuration of a distance query, including the warm-start state of
/// the underlying solver.
///
/// When solving a sequence of closely related queries (e.g., successive
/// simulation steps), call [`DistanceRequest::update_guess`] with each result
/// so the next query starts from the previous solution. The `*_with_guess`
/// entry points of [`crate::query`] do this automatically.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceRequest {
    /// Whether the nearest points on each shape should be computed.
    pub enable_nearest_points: bool,
    /// Whether the solver guess cached in this request should be used and
    /// refreshed by [`DistanceRequest::update_guess`].
    pub enable_cached_guess: bool,
    /// The initial search direction handed to iterative solvers.
    pub cached_guess: Vector<Real>,
    /// Support-function warm-start hints for each shape.
    pub cached_support_hint: [i32; 2],
    /// The absolute tolerance below which iterative solvers stop.
    pub abs_err: Real,
    /// The relative tolerance below which iterative solvers stop.
    pub rel_err: Real,
}

impl DistanceRequest {
    /// Creates a request computing nearest points, with warm starting
    /// enabled.
    pub fn with_nearest_points() -> Self {
        DistanceRequest {
            enable_nearest_points: true,
            enable_cached_guess: true,
            ..Default::default()
        }
    }

    /// Copies the solver state of `result` into this request, warm-starting
    /// the next query.
    ///
    /// A no-op unless `enable_cached_guess` is set.
    pub fn update_guess(&mut self, result: &DistanceResult) {
        if self.enable_cached_guess {
            self.cached_guess = result.cached_guess;
            self.cached_support_hint = result.cached_support_hint;
        }
    }
}

impl Default for DistanceRequest {
    fn default() -> Self {
        DistanceRequest {
            enable_nearest_points: false,
            enable_cached_guess: false,
            cached_guess: -Vector::x(),
            cached_support_hint: [0, 0],
            abs_err: 0.0,
            rel_err: 0.0,
        }
    }
}

/// The result of a distance query.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceResult {
    /// The minimum distance between the two shapes; zero or negative when
    /// they touch or penetrate.
    pub min_distance: Real,
    /// The nearest point on each shape, in world coordinates.
    ///
    /// Only populated when the request enabled nearest-point computation.
    pub nearest_points: [Point<Real>; 2],
    /// The final search direction of the solver, fed back into the next
    /// request by [`DistanceRequest::update_guess`].
    pub cached_guess: Vector<Real>,
    /// The final support-function hints of the solver.
    pub cached_support_hint: [i32; 2],
    /// The sub-shape of the first geometry realizing the distance, or -1 for
    /// non-composite geometries.
    pub primitive_id1: i32,
    /// The sub-shape of the second geometry realizing the distance, or -1 for
    /// non-composite geometries.
    pub primitive_id2: i32,
}

impl DistanceResult {
    /// Swaps the two shapes' roles in this result.
    ///
    /// Used after invoking a distance routine with its arguments reversed:
    /// the nearest-point ordering and the shape-identifying fields are
    /// swapped back, while the scalar distance is invariant.
    pub fn swap_shapes(&mut self) {
        self.nearest_points.swap(0, 1);
        core::mem::swap(&mut self.primitive_id1, &mut self.primitive_id2);
    }

    /// Resets this result to its pre-query state.
    pub fn clear(&mut self) {
        *self = DistanceResult::default();
    }
}

impl Default for DistanceResult {
    fn default() -> Self {
        DistanceResult {
            min_distance: Real::MAX,
            nearest_points: [Point::from(Vector::repeat(Real::NAN)); 2],
            cached_guess: -Vector::x(),
            cached_support_hint: [0, 0],
            primitive_id1: -1,
            primitive_id2: -1,
        }
    }
}
