use crate::math::{Isometry, Point, Real};
use crate::query::distance::unsupported;
use crate::query::{DistanceError, DistanceRequest, DistanceResult, SolverConfig};
use crate::shape::{Ball, HalfSpace, Shape};

/// Distance between a ball and a half-space.
///
/// Negative when the ball penetrates the half-space, by the penetration
/// depth.
#[inline]
pub fn distance_ball_halfspace(
    ball: &Ball,
    pos1: &Isometry<Real>,
    halfspace: &HalfSpace,
    pos2: &Isometry<Real>,
    request: &DistanceRequest,
    result: &mut DistanceResult,
) -> Real {
    let center = Point::from(pos1.translation.vector);
    let normal = pos2 * halfspace.normal;
    let plane_offset = halfspace.d + normal.dot(&pos2.translation.vector);

    let center_to_plane = normal.dot(&center.coords) - plane_offset;
    let distance = center_to_plane - ball.radius;

    result.min_distance = distance;
    result.cached_guess = -normal.into_inner();
    result.cached_support_hint = [0, 0];
    result.primitive_id1 = -1;
    result.primitive_id2 = -1;

    if request.enable_nearest_points {
        result.nearest_points = [
            center - normal.into_inner() * ball.radius,
            center - normal.into_inner() * center_to_plane,
        ];
    }

    distance
}

pub(crate) fn dispatch_ball_halfspace(
    g1: &dyn Shape,
    pos1: &Isometry<Real>,
    g2: &dyn Shape,
    pos2: &Isometry<Real>,
    _solver: &SolverConfig,
    request: &DistanceRequest,
    result: &mut DistanceResult,
) -> Result<Real, DistanceError> {
    match (g1.as_ball(), g2.as_half_space()) {
        (Some(ball), Some(halfspace)) => Ok(distance_ball_halfspace(
            ball, pos1, halfspace, pos2, request, result,
        )),
        _ => Err(unsupported(g1, g2)),
    }
}
