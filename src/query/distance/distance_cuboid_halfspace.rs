use crate::math::{Isometry, Real};
use crate::query::distance::unsupported;
use crate::query::{DistanceError, DistanceRequest, DistanceResult, SolverConfig};
use crate::shape::{Cuboid, HalfSpace, Shape};

/// Distance between a cuboid and a half-space.
///
/// The nearest cuboid point is its support point along the inward plane
/// normal. Negative when that support point is below the plane.
#[inline]
pub fn distance_cuboid_halfspace(
    cuboid: &Cuboid,
    pos1: &Isometry<Real>,
    halfspace: &HalfSpace,
    pos2: &Isometry<Real>,
    request: &DistanceRequest,
    result: &mut DistanceResult,
) -> Real {
    let normal = pos2 * halfspace.normal;
    let plane_offset = halfspace.d + normal.dot(&pos2.translation.vector);

    // Deepest cuboid point toward the plane, in the cuboid local frame.
    let local_dir = pos1.inverse_transform_vector(&-normal);
    let support = pos1 * cuboid.local_support_point(&local_dir);

    let distance = normal.dot(&support.coords) - plane_offset;

    result.min_distance = distance;
    result.cached_guess = -normal.into_inner();
    result.cached_support_hint = [0, 0];
    result.primitive_id1 = -1;
    result.primitive_id2 = -1;

    if request.enable_nearest_points {
        result.nearest_points = [support, support - normal.into_inner() * distance];
    }

    distance
}

pub(crate) fn dispatch_cuboid_halfspace(
    g1: &dyn Shape,
    pos1: &Isometry<Real>,
    g2: &dyn Shape,
    pos2: &Isometry<Real>,
    _solver: &SolverConfig,
    request: &DistanceRequest,
    result: &mut DistanceResult,
) -> Result<Real, DistanceError> {
    match (g1.as_cuboid(), g2.as_half_space()) {
        (Some(cuboid), Some(halfspace)) => Ok(distance_cuboid_halfspace(
            cuboid, pos1, halfspace, pos2, request, result,
        )),
        _ => Err(unsupported(g1, g2)),
    }
}
