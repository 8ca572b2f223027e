use crate::math::{Isometry, Real};
use crate::object::CollisionObject;
use crate::query::{
    DistanceError, DistanceRegistry, DistanceRequest, DistanceResult, SolverConfig,
};
use crate::shape::CollisionGeometry;

/// Computes the minimum distance between two geometries at the given
/// positions.
///
/// The distance routine handling the pair is resolved from the built-in
/// dispatch table on every call; use [`crate::query::ComputeDistance`] to
/// resolve it once and hold onto it. Returns the signed minimum distance on
/// success, zero or negative when the shapes touch or penetrate; `result` is
/// filled with the witness data the request asked for.
///
/// Errs with [`DistanceError::Unsupported`] when no routine handles the pair.
pub fn distance(
    g1: &CollisionGeometry,
    pos1: &Isometry<Real>,
    g2: &CollisionGeometry,
    pos2: &Isometry<Real>,
    request: &DistanceRequest,
    result: &mut DistanceResult,
) -> Result<Real, DistanceError> {
    let registry = DistanceRegistry::default();
    let resolved = registry.resolve(g1.node_type(), g2.node_type())?;
    let solver = SolverConfig::default().for_request(request);
    resolved.call(
        g1.shape(),
        pos1,
        g2.shape(),
        pos2,
        &solver,
        request,
        result,
    )
}

/// Computes the minimum distance between two collision objects, at their
/// current positions.
pub fn distance_objects(
    o1: &CollisionObject,
    o2: &CollisionObject,
    request: &DistanceRequest,
    result: &mut DistanceResult,
) -> Result<Real, DistanceError> {
    distance(
        o1.geometry(),
        o1.position(),
        o2.geometry(),
        o2.position(),
        request,
        result,
    )
}

/// Same as [`distance`], but feeds the solver state of the result back into
/// `request` afterwards, warm-starting the next query.
pub fn distance_with_guess(
    g1: &CollisionGeometry,
    pos1: &Isometry<Real>,
    g2: &CollisionGeometry,
    pos2: &Isometry<Real>,
    request: &mut DistanceRequest,
    result: &mut DistanceResult,
) -> Result<Real, DistanceError> {
    let dist = distance(g1, pos1, g2, pos2, request, result)?;
    request.update_guess(result);
    Ok(dist)
}

/// Same as [`distance_objects`], but feeds the solver state of the result
/// back into `request` afterwards.
pub fn distance_objects_with_guess(
    o1: &CollisionObject,
    o2: &CollisionObject,
    request: &mut DistanceRequest,
    result: &mut DistanceResult,
) -> Result<Real, DistanceError> {
    distance_with_guess(
        o1.geometry(),
        o1.position(),
        o2.geometry(),
        o2.position(),
        request,
        result,
    )
}
