use crate::math::{Isometry, Point, Real, Vector, DEFAULT_EPSILON};
use crate::query::distance::unsupported;
use crate::query::{DistanceError, DistanceRequest, DistanceResult, SolverConfig};
use crate::shape::{Ball, Capsule, Shape};

/// Distance between a ball and a capsule.
///
/// Negative when the shapes penetrate, by the penetration depth.
#[inline]
pub fn distance_ball_capsule(
    ball: &Ball,
    pos1: &Isometry<Real>,
    capsule: &Capsule,
    pos2: &Isometry<Real>,
    request: &DistanceRequest,
    result: &mut DistanceResult,
) -> Real {
    let center = Point::from(pos1.translation.vector);
    let world_capsule = capsule.transform_by(pos2);

    // Project the ball center onto the capsule axis.
    let axis = world_capsule.b - world_capsule.a;
    let axis_sq = axis.norm_squared();
    let t = if axis_sq > DEFAULT_EPSILON {
        na::clamp((center - world_capsule.a).dot(&axis) / axis_sq, 0.0, 1.0)
    } else {
        0.0
    };
    let on_axis = world_capsule.a + axis * t;

    let delta = on_axis - center;
    let center_distance = delta.norm();
    let distance = center_distance - (ball.radius + capsule.radius);

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
        result.nearest_points = [center + dir * ball.radius, on_axis - dir * capsule.radius];
    }

    distance
}

pub(crate) fn dispatch_ball_capsule(
    g1: &dyn Shape,
    pos1: &Isometry<Real>,
    g2: &dyn Shape,
    pos2: &Isometry<Real>,
    _solver: &SolverConfig,
    request: &DistanceRequest,
    result: &mut DistanceResult,
) -> Result<Real, DistanceError> {
    match (g1.as_ball(), g2.as_capsule()) {
        (Some(ball), Some(capsule)) => Ok(distance_ball_capsule(
            ball, pos1, capsule, pos2, request, result,
        )),
        _ => Err(unsupported(g1, g2)),
    }
}

#[cfg(test)]
mod test {
    use super::distance_ball_capsule;
    use crate::math::{Isometry, Point};
    use crate::query::{DistanceRequest, DistanceResult};
    use crate::shape::{Ball, Capsule};
    use approx::assert_relative_eq;

    #[test]
    fn ball_beside_the_cylindrical_part() {
        let ball = Ball::new(0.5);
        let capsule = Capsule::new_y(1.0, 0.5);
        let pos1 = Isometry::translation(4.0, 0.5, 0.0);
        let pos2 = Isometry::identity();
        let request = DistanceRequest::with_nearest_points();
        let mut result = DistanceResult::default();

        let distance =
            distance_ball_capsule(&ball, &pos1, &capsule, &pos2, &request, &mut result);
        assert_relative_eq!(distance, 3.0, epsilon = 1.0e-12);
        assert_relative_eq!(result.nearest_points[0], Point::new(3.5, 0.5, 0.0));
        assert_relative_eq!(result.nearest_points[1], Point::new(0.5, 0.5, 0.0));
    }

    #[test]
    fn ball_beyond_the_cap() {
        let ball = Ball::new(1.0);
        let capsule = Capsule::new_y(1.0, 0.5);
        let pos1 = Isometry::translation(0.0, 5.0, 0.0);
        let pos2 = Isometry::identity();
        let request = DistanceRequest::default();
        let mut result = DistanceResult::default();

        let distance =
            distance_ball_capsule(&ball, &pos1, &capsule, &pos2, &request, &mut result);
        // Clamped to the top endpoint (0, 1, 0).
        assert_relative_eq!(distance, 4.0 - 1.5, epsilon = 1.0e-12);
    }
}
