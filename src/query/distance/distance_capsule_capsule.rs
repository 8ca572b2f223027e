use crate::math::{Isometry, Point, Real, Vector, DEFAULT_EPSILON};
use crate::query::distance::unsupported;
use crate::query::{DistanceError, DistanceRequest, DistanceResult, SolverConfig};
use crate::shape::{Capsule, Shape};

/// Distance between two capsules.
///
/// Negative when the shapes penetrate, by the penetration depth.
#[inline]
pub fn distance_capsule_capsule(
    capsule1: &Capsule,
    pos1: &Isometry<Real>,
    capsule2: &Capsule,
    pos2: &Isometry<Real>,
    request: &DistanceRequest,
    result: &mut DistanceResult,
) -> Real {
    let world1 = capsule1.transform_by(pos1);
    let world2 = capsule2.transform_by(pos2);

    let (s, t) = closest_params_segment_segment(
        (&world1.a, &world1.b),
        (&world2.a, &world2.b),
    );
    let p1 = world1.a + (world1.b - world1.a) * s;
    let p2 = world2.a + (world2.b - world2.a) * t;

    let delta = p2 - p1;
    let axis_distance = delta.norm();
    let distance = axis_distance - (capsule1.radius + capsule2.radius);

    let dir = if axis_distance > DEFAULT_EPSILON {
        delta / axis_distance
    } else {
        Vector::x()
    };

    result.min_distance = distance;
    result.cached_guess = dir;
    result.cached_support_hint = [0, 0];
    result.primitive_id1 = -1;
    result.primitive_id2 = -1;

    if request.enable_nearest_points {
        result.nearest_points = [p1 + dir * capsule1.radius, p2 - dir * capsule2.radius];
    }

    distance
}

/// Closest-point parameters between two segments.
///
/// Inspired by Real-time collision detection by Christer Ericson.
fn closest_params_segment_segment(
    seg1: (&Point<Real>, &Point<Real>),
    seg2: (&Point<Real>, &Point<Real>),
) -> (Real, Real) {
    let d1 = seg1.1 - seg1.0;
    let d2 = seg2.1 - seg2.0;
    let r = seg1.0 - seg2.0;

    let a = d1.norm_squared();
    let e = d2.norm_squared();
    let f = d2.dot(&r);

    let mut s;
    let mut t;

    let eps = DEFAULT_EPSILON;
    if a <= eps && e <= eps {
        s = 0.0;
        t = 0.0;
    } else if a <= eps {
        s = 0.0;
        t = na::clamp(f / e, 0.0, 1.0);
    } else {
        let c = d1.dot(&r);
        if e <= eps {
            t = 0.0;
            s = na::clamp(-c / a, 0.0, 1.0);
        } else {
            let b = d1.dot(&d2);
            let ae = a * e;
            let bb = b * b;
            let denom = ae - bb;

            // Use absolute and ulps error to test collinearity.
            if denom > eps && !ulps_eq!(ae, bb) {
                s = na::clamp((b * f - c * e) / denom, 0.0, 1.0);
            } else {
                s = 0.0;
            }

            t = (b * s + f) / e;

            if t < 0.0 {
                t = 0.0;
                s = na::clamp(-c / a, 0.0, 1.0);
            } else if t > 1.0 {
                t = 1.0;
                s = na::clamp((b - c) / a, 0.0, 1.0);
            }
        }
    }

    (s, t)
}

pub(crate) fn dispatch_capsule_capsule(
    g1: &dyn Shape,
    pos1: &Isometry<Real>,
    g2: &dyn Shape,
    pos2: &Isometry<Real>,
    _solver: &SolverConfig,
    request: &DistanceRequest,
    result: &mut DistanceResult,
) -> Result<Real, DistanceError> {
    match (g1.as_capsule(), g2.as_capsule()) {
        (Some(c1), Some(c2)) => Ok(distance_capsule_capsule(
            c1, pos1, c2, pos2, request, result,
        )),
        _ => Err(unsupported(g1, g2)),
    }
}

#[cfg(test)]
mod test {
    use super::distance_capsule_capsule;
    use crate::math::{Isometry, Point};
    use crate::query::{DistanceRequest, DistanceResult};
    use crate::shape::Capsule;
    use approx::assert_relative_eq;
    use core::f64::consts::FRAC_PI_2;

    #[test]
    fn parallel_capsules() {
        let c1 = Capsule::new_y(1.0, 0.25);
        let c2 = Capsule::new_y(1.0, 0.25);
        let pos1 = Isometry::identity();
        let pos2 = Isometry::translation(2.0, 0.5, 0.0);
        let request = DistanceRequest::default();
        let mut result = DistanceResult::default();

        let distance =
            distance_capsule_capsule(&c1, &pos1, &c2, &pos2, &request, &mut result);
        assert_relative_eq!(distance, 1.5, epsilon = 1.0e-9);
    }

    #[test]
    fn crossed_capsules() {
        let c1 = Capsule::new_y(1.0, 0.25);
        let c2 = Capsule::new_y(1.0, 0.25);
        let pos1 = Isometry::identity();
        // Rotated to lie along the x axis, above the first capsule.
        let mut pos2 = Isometry::translation(0.0, 3.0, 0.0);
        pos2.rotation =
            crate::math::Rotation::from_axis_angle(&crate::math::Vector::z_axis(), FRAC_PI_2);
        let request = DistanceRequest::with_nearest_points();
        let mut result = DistanceResult::default();

        let distance =
            distance_capsule_capsule(&c1, &pos1, &c2, &pos2, &request, &mut result);
        assert_relative_eq!(distance, 1.5, epsilon = 1.0e-9);
        assert_relative_eq!(result.nearest_points[0], Point::new(0.0, 1.25, 0.0), epsilon = 1.0e-9);
        assert_relative_eq!(result.nearest_points[1], Point::new(0.0, 2.75, 0.0), epsilon = 1.0e-9);
    }
}
