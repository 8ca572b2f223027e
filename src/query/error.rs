use crate::shape::NodeType;
use thiserror::Error;

/// Error raised when a geometry's cached state is queried before it was
/// produced.
#[derive(Error, Debug, Copy, Clone, Eq, PartialEq)]
pub enum GeometryError {
    /// The local bound was queried before
    /// [`crate::shape::CollisionGeometry::compute_local_bound`] ran.
    #[error("local bound queried before it was computed")]
    NotInitialized,
}

/// Error raised when a distance query cannot be performed.
///
/// An unsupported pair is surfaced to the caller rather than defaulted to a
/// zero distance: zero would be indistinguishable from true contact.
#[derive(Error, Debug, Copy, Clone, Eq, PartialEq)]
pub enum DistanceError {
    /// No distance routine is registered for either ordering of the two shape
    /// kinds.
    #[error("distance query not supported between shapes {node_type1:?} and {node_type2:?}")]
    Unsupported {
        /// The kind of the first shape of the queried pair.
        node_type1: NodeType,
        /// The kind of the second shape of the queried pair.
        node_type2: NodeType,
    },
    /// A geometry involved in the query was not initialized.
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}
