use crate::math::{Isometry, Point, Real, Vector, DEFAULT_EPSILON};
use crate::query::distance::unsupported;
use crate::query::{DistanceError, DistanceRequest, DistanceResult, SolverConfig};
use crate::shape::{Ball, Cuboid, Shape};

/// Distance between a ball and a cuboid.
///
/// Negative when the shapes penetrate, by the penetration depth.
#[inline]
pub fn distance_ball_cuboid(
    ball: &Ball,
    pos1: &Isometry<Real>,
    cuboid: &Cuboid,
    pos2: &Isometry<Real>,
    request: &DistanceRequest,
    result: &mut DistanceResult,
) -> Real {
    // Work in the cuboid's local frame.
    let center = pos2.inverse_transform_point(&Point::from(pos1.translation.vector));
    let clamped = cuboid.clamp_local_point(&center);
    let delta = center - clamped;
    let center_depth = delta.norm();

    let (distance, local_ball_point, local_cuboid_point) = if center_depth > DEFAULT_EPSILON {
        // Ball center outside of the cuboid (possibly still overlapping it).
        let dir = delta / center_depth;
        (
            center_depth - ball.radius,
            center - dir * ball.radius,
            clamped,
        )
    } else {
        // Ball center inside: push out through the closest face.
        let mut axis = 0;
        let mut smallest = Real::MAX;
        for i in 0..3 {
            let to_face = cuboid.half_extents[i] - center[i].abs();
            if to_face < smallest {
                smallest = to_face;
                axis = i;
            }
        }

        let sign = if center[axis] >= 0.0 { 1.0 } else { -1.0 };
        let mut face_point = center;
        face_point[axis] = sign * cuboid.half_extents[axis];
        let mut dir = Vector::zeros();
        dir[axis] = sign;

        (
            -(smallest + ball.radius),
            center + dir * ball.radius,
            face_point,
        )
    };

    let p1 = pos2 * local_ball_point;
    let p2 = pos2 * local_cuboid_point;
    let separation = p2 - p1;
    let norm = separation.norm();

    result.min_distance = distance;
    result.cached_guess = if norm > DEFAULT_EPSILON {
        separation / norm
    } else {
        Vector::x()
    };
    result.cached_support_hint = [0, 0];
    result.primitive_id1 = -1;
    result.primitive_id2 = -1;

    if request.enable_nearest_points {
        result.nearest_points = [p1, p2];
    }

    distance
}

pub(crate) fn dispatch_ball_cuboid(
    g1: &dyn Shape,
    pos1: &Isometry<Real>,
    g2: &dyn Shape,
    pos2: &Isometry<Real>,
    _solver: &SolverConfig,
    request: &DistanceRequest,
    result: &mut DistanceResult,
) -> Result<Real, DistanceError> {
    match (g1.as_ball(), g2.as_cuboid()) {
        (Some(ball), Some(cuboid)) => Ok(distance_ball_cuboid(
            ball, pos1, cuboid, pos2, request, result,
        )),
        _ => Err(unsupported(g1, g2)),
    }
}
