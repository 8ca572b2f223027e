use crate::math::{Isometry, Real};
use crate::query::distance::{
    dispatch_ball_ball, dispatch_ball_capsule, dispatch_ball_cuboid, dispatch_ball_halfspace,
    dispatch_capsule_capsule, dispatch_cuboid_halfspace,
};
use crate::query::{DistanceError, DistanceRequest, DistanceResult, SolverConfig};
use crate::shape::{NodeType, Shape, NODE_COUNT};

/// The signature of a narrow-phase distance routine.
///
/// The routine receives the two shapes with their world transforms, the
/// solver configuration, and the request; it returns the minimum distance and
/// fills `result`.
pub type DistanceFn = fn(
    &dyn Shape,
    &Isometry<Real>,
    &dyn Shape,
    &Isometry<Real>,
    &SolverConfig,
    &DistanceRequest,
    &mut DistanceResult,
) -> Result<Real, DistanceError>;

/// A dispatch-table entry resolved for an ordered pair of shape kinds.
#[derive(Copy, Clone, Debug)]
pub struct ResolvedDistanceFn {
    /// The narrow-phase routine handling the pair.
    pub func: DistanceFn,
    /// Whether the routine expects the pair in the mirrored order.
    ///
    /// When set, the routine must be invoked with its arguments reversed and
    /// [`DistanceResult::swap_shapes`] applied afterwards.
    pub swapped: bool,
}

impl ResolvedDistanceFn {
    /// Invokes the resolved routine, reversing arguments and swapping the
    /// result back when the entry was resolved through the mirrored ordering.
    pub fn call(
        &self,
        g1: &dyn Shape,
        pos1: &Isometry<Real>,
        g2: &dyn Shape,
        pos2: &Isometry<Real>,
        solver: &SolverConfig,
        request: &DistanceRequest,
        result: &mut DistanceResult,
    ) -> Result<Real, DistanceError> {
        if self.swapped {
            let distance = (self.func)(g2, pos2, g1, pos1, solver, request, result)?;
            result.swap_shapes();
            Ok(distance)
        } else {
            (self.func)(g1, pos1, g2, pos2, solver, request, result)
        }
    }
}

/// A table mapping ordered pairs of shape kinds to narrow-phase distance
/// routines.
///
/// Each unordered pair is registered under a single ordering; the mirrored
/// ordering resolves through the swap fallback of
/// [`DistanceRegistry::resolve`] rather than through a duplicate entry.
pub struct DistanceRegistry {
    table: [[Option<DistanceFn>; NODE_COUNT]; NODE_COUNT],
}

impl DistanceRegistry {
    /// Creates an empty registry with no routine registered.
    pub fn empty() -> Self {
        DistanceRegistry {
            table: [[None; NODE_COUNT]; NODE_COUNT],
        }
    }

    /// Registers `func` for the ordered pair `(kind1, kind2)`, returning the
    /// previously registered routine, if any.
    pub fn register(
        &mut self,
        kind1: NodeType,
        kind2: NodeType,
        func: DistanceFn,
    ) -> Option<DistanceFn> {
        self.table[kind1 as usize][kind2 as usize].replace(func)
    }

    /// Resolves the routine handling the pair `(kind1, kind2)`.
    ///
    /// Looks up `(kind1, kind2)` directly; if absent, looks up the mirrored
    /// `(kind2, kind1)` and marks the resolved entry as swapped. Fails with
    /// [`DistanceError::Unsupported`] when neither ordering is registered.
    pub fn resolve(
        &self,
        kind1: NodeType,
        kind2: NodeType,
    ) -> Result<ResolvedDistanceFn, DistanceError> {
        if let Some(func) = self.table[kind1 as usize][kind2 as usize] {
            Ok(ResolvedDistanceFn {
                func,
                swapped: false,
            })
        } else if let Some(func) = self.table[kind2 as usize][kind1 as usize] {
            Ok(ResolvedDistanceFn {
                func,
                swapped: true,
            })
        } else {
            log::debug!(
                "no distance routine registered for the pair {:?}/{:?}",
                kind1,
                kind2
            );
            Err(DistanceError::Unsupported {
                node_type1: kind1,
                node_type2: kind2,
            })
        }
    }
}

impl Default for DistanceRegistry {
    /// A registry with the built-in closed-form routines installed.
    fn default() -> Self {
        let mut registry = Self::empty();
        let _ = registry.register(NodeType::Sphere, NodeType::Sphere, dispatch_ball_ball);
        let _ = registry.register(NodeType::Sphere, NodeType::Box, dispatch_ball_cuboid);
        let _ = registry.register(NodeType::Sphere, NodeType::Capsule, dispatch_ball_capsule);
        let _ = registry.register(
            NodeType::Capsule,
            NodeType::Capsule,
            dispatch_capsule_capsule,
        );
        let _ = registry.register(
            NodeType::Sphere,
            NodeType::HalfSpace,
            dispatch_ball_halfspace,
        );
        let _ = registry.register(
            NodeType::Box,
            NodeType::HalfSpace,
            dispatch_cuboid_halfspace,
        );
        registry
    }
}

#[cfg(test)]
mod test {
    use super::DistanceRegistry;
    use crate::query::DistanceError;
    use crate::shape::NodeType;

    #[test]
    fn mirrored_pairs_resolve_with_the_swap_flag() {
        let registry = DistanceRegistry::default();

        let direct = registry.resolve(NodeType::Sphere, NodeType::Box).unwrap();
        assert!(!direct.swapped);

        let mirrored = registry.resolve(NodeType::Box, NodeType::Sphere).unwrap();
        assert!(mirrored.swapped);
        assert_eq!(direct.func as usize, mirrored.func as usize);
    }

    #[test]
    fn unregistered_pairs_are_surfaced() {
        let registry = DistanceRegistry::default();
        let err = registry.resolve(NodeType::Box, NodeType::Box).unwrap_err();
        assert_eq!(
            err,
            DistanceError::Unsupported {
                node_type1: NodeType::Box,
                node_type2: NodeType::Box,
            }
        );
    }

    #[test]
    fn register_overrides_and_returns_the_previous_entry() {
        let mut registry = DistanceRegistry::default();
        let previous = registry.register(
            NodeType::Sphere,
            NodeType::Sphere,
            super::dispatch_ball_ball,
        );
        assert!(previous.is_some());
    }
}
