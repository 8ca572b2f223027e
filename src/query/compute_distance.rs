use crate::math::{Isometry, Real};
use crate::query::{
    DistanceError, DistanceRegistry, DistanceRequest, DistanceResult, ResolvedDistanceFn,
    SolverConfig,
};
use crate::shape::SharedGeometry;

/// A distance query bound to a fixed pair of geometries.
///
/// Resolves the dispatch table once at construction and reuses the resolved
/// routine for every call, amortizing the lookup over a sequence of queries
/// against the same pair (e.g., one object tracked across simulation steps).
///
/// The bound geometries are shared handles; if one of them is swapped for a
/// geometry of a different kind, call [`ComputeDistance::rebind`] before
/// querying again. This type caches only immutable resolution state, so a
/// fully constructed value can be queried from several threads at once;
/// `rebind` requires exclusive access like any `&mut` method.
#[derive(Debug)]
pub struct ComputeDistance {
    g1: SharedGeometry,
    g2: SharedGeometry,
    resolved: ResolvedDistanceFn,
    solver: SolverConfig,
}

impl ComputeDistance {
    /// Binds a distance query to `g1` and `g2`, with the default solver
    /// configuration.
    ///
    /// Errs with [`DistanceError::Unsupported`] when no routine handles the
    /// pair.
    pub fn new(g1: &SharedGeometry, g2: &SharedGeometry) -> Result<Self, DistanceError> {
        Self::with_solver(g1, g2, SolverConfig::default())
    }

    /// Binds a distance query to `g1` and `g2` with an explicit solver
    /// configuration.
    pub fn with_solver(
        g1: &SharedGeometry,
        g2: &SharedGeometry,
        solver: SolverConfig,
    ) -> Result<Self, DistanceError> {
        let registry = DistanceRegistry::default();
        let resolved = registry.resolve(g1.node_type(), g2.node_type())?;
        Ok(ComputeDistance {
            g1: g1.clone(),
            g2: g2.clone(),
            resolved,
            solver,
        })
    }

    /// Computes the distance between the bound geometries at the given
    /// positions.
    pub fn call(
        &self,
        pos1: &Isometry<Real>,
        pos2: &Isometry<Real>,
        request: &DistanceRequest,
        result: &mut DistanceResult,
    ) -> Result<Real, DistanceError> {
        let solver = self.solver.for_request(request);
        self.resolved.call(
            self.g1.shape(),
            pos1,
            self.g2.shape(),
            pos2,
            &solver,
            request,
            result,
        )
    }

    /// Same as [`ComputeDistance::call`], but feeds the solver state of the
    /// result back into `request` afterwards.
    pub fn call_with_guess(
        &self,
        pos1: &Isometry<Real>,
        pos2: &Isometry<Real>,
        request: &mut DistanceRequest,
        result: &mut DistanceResult,
    ) -> Result<Real, DistanceError> {
        let dist = self.call(pos1, pos2, request, result)?;
        request.update_guess(result);
        Ok(dist)
    }

    /// Rebinds this query to a new pair of geometries, re-resolving the
    /// dispatch table.
    ///
    /// On error the previous binding is left untouched.
    pub fn rebind(
        &mut self,
        g1: &SharedGeometry,
        g2: &SharedGeometry,
    ) -> Result<(), DistanceError> {
        let registry = DistanceRegistry::default();
        self.resolved = registry.resolve(g1.node_type(), g2.node_type())?;
        self.g1 = g1.clone();
        self.g2 = g2.clone();
        Ok(())
    }

    /// The first bound geometry.
    pub fn geometry1(&self) -> &SharedGeometry {
        &self.g1
    }

    /// The second bound geometry.
    pub fn geometry2(&self) -> &SharedGeometry {
        &self.g2
    }
}

impl PartialEq for ComputeDistance {
    /// Two bound queries are equal when they bind the same geometry
    /// instances, resolved to the same routine, with the same solver
    /// configuration.
    fn eq(&self, other: &Self) -> bool {
        self.g1.ptr_eq(&other.g1)
            && self.g2.ptr_eq(&other.g2)
            && self.resolved.swapped == other.resolved.swapped
            && self.resolved.func as usize == other.resolved.func as usize
            && self.solver == other.solver
    }
}

#[cfg(test)]
mod test {
    use super::ComputeDistance;
    use crate::math::{Isometry, Point};
    use crate::query::{
        distance, DistanceError, DistanceRequest, DistanceResult, SolverConfig,
    };
    use crate::shape::SharedGeometry;
    use approx::assert_relative_eq;

    #[test]
    fn bound_query_matches_the_stateless_facade() {
        let ball = SharedGeometry::ball(1.0);
        let capsule = SharedGeometry::capsule(
            Point::new(0.0, -1.0, 0.0),
            Point::new(0.0, 1.0, 0.0),
            0.5,
        );
        let bound = ComputeDistance::new(&ball, &capsule).unwrap();

        let pos1 = Isometry::translation(4.0, 0.0, 0.0);
        let pos2 = Isometry::identity();
        let request = DistanceRequest::with_nearest_points();

        let mut via_bound = DistanceResult::default();
        let mut via_facade = DistanceResult::default();
        let d1 = bound.call(&pos1, &pos2, &request, &mut via_bound).unwrap();
        let d2 = distance(&ball, &pos1, &capsule, &pos2, &request, &mut via_facade).unwrap();

        assert_relative_eq!(d1, d2, epsilon = 1.0e-12);
        assert_eq!(via_bound, via_facade);
    }

    #[test]
    fn unsupported_pairs_fail_at_binding_time() {
        let c1 = SharedGeometry::cuboid(1.0, 1.0, 1.0);
        let c2 = SharedGeometry::cuboid(2.0, 2.0, 2.0);
        let err = ComputeDistance::new(&c1, &c2).unwrap_err();
        assert!(matches!(err, DistanceError::Unsupported { .. }));
    }

    #[test]
    fn equality_requires_the_same_geometry_instances() {
        let b1 = SharedGeometry::ball(1.0);
        let b2 = SharedGeometry::ball(1.0);
        let same = SharedGeometry::ball(2.0);

        let q1 = ComputeDistance::new(&b1, &same).unwrap();
        let q2 = ComputeDistance::new(&b1, &same).unwrap();
        let q3 = ComputeDistance::new(&b2, &same).unwrap();

        assert!(q1 == q2);
        assert!(q1 != q3);
    }

    #[test]
    fn rebind_replaces_the_pair_and_keeps_it_on_failure() {
        let ball = SharedGeometry::ball(1.0);
        let cuboid = SharedGeometry::cuboid(1.0, 1.0, 1.0);
        let other_ball = SharedGeometry::ball(3.0);

        let mut query = ComputeDistance::new(&ball, &cuboid).unwrap();
        query.rebind(&other_ball, &cuboid).unwrap();
        assert!(query.geometry1().ptr_eq(&other_ball));

        // A cuboid pair has no routine; the previous binding survives.
        let other_cuboid = SharedGeometry::cuboid(2.0, 2.0, 2.0);
        assert!(query.rebind(&other_cuboid, &cuboid).is_err());
        assert!(query.geometry1().ptr_eq(&other_ball));

        let mut result = DistanceResult::default();
        let dist = query
            .call(
                &Isometry::translation(10.0, 0.0, 0.0),
                &Isometry::identity(),
                &DistanceRequest::default(),
                &mut result,
            )
            .unwrap();
        assert_relative_eq!(dist, 10.0 - 3.0 - 1.0, epsilon = 1.0e-6);
    }

    #[test]
    fn solver_configuration_takes_part_in_equality() {
        let b1 = SharedGeometry::ball(1.0);
        let b2 = SharedGeometry::ball(1.0);

        let q1 = ComputeDistance::new(&b1, &b2).unwrap();
        let q2 = ComputeDistance::with_solver(
            &b1,
            &b2,
            SolverConfig {
                abs_err: 1.0e-6,
                ..Default::default()
            },
        )
        .unwrap();
        assert!(q1 != q2);
    }
}
