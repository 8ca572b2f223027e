use crate::math::{Isometry, Point, Real, Vector, DEFAULT_EPSILON};
use crate::query::distance::unsupported;
use crate::query::{DistanceError, DistanceRequest, DistanceResult, SolverConfig};
use crate::shape::{Ball, Shape};

/// Distance between two balls.
///
/// Negative when the balls penetrate, by the penetration depth.
#[inline]
pub fn distance_ball_ball(
    b1: &Ball,
    pos1: &Isometry<Real>,
    b2: &Ball,
    pos2: &Isometry<Real>,
    request: &DistanceRequest,
    result: &mut DistanceResult,
) -> Real {
    let c1 = Point::from(pos1.translation.vector);
    let c2 = Point::from(pos2.translation.vector);
    let delta = c2 - c1;
    let center_distance = delta.norm();
    let distance = center_distance - (b1.radius + b2.radius);

    // Concentric balls have no preferred axis.
    let dir = if center_distance > DEFAULT_EPSILON {
        delta / center_distance
    } else {
        Vector::x()
    };

    result.min_distance = distance;
    result.cached_guess = dir;
    result.cached_support_hint = [0, 0];
    result.primitive_id1 = -1;
    result.primitive_id2 = -1;

    if request.enable_nearest_points {
        result.nearest_points = [c1 + dir * b1.radius, c2 - dir * b2.radius];
    }

    distance
}

pub(crate) fn dispatch_ball_ball(
    g1: &dyn Shape,
    pos1: &Isometry<Real>,
    g2: &dyn Shape,
    pos2: &Isometry<Real>,
    _solver: &SolverConfig,
    request: &DistanceRequest,
    result: &mut DistanceResult,
) -> Result<Real, DistanceError> {
    match (g1.as_ball(), g2.as_ball()) {
        (Some(b1), Some(b2)) => Ok(distance_ball_ball(b1, pos1, b2, pos2, request, result)),
        _ => Err(unsupported(g1, g2)),
    }
}
