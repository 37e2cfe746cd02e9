//! Errors raised by the physics core

use crate::body::BodyId;

/// Failure modes of the physics core
///
/// Everything else the core does is a total function over well-formed bodies,
/// so this stays small.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NbodyError {
    /// Two bodies sit at exactly the same position, so the inverse-square
    /// force between them is undefined.
    #[error("bodies {a} and {b} occupy the same position")]
    CoincidentBodies { a: BodyId, b: BodyId },

    /// An aggregate (centre of mass, totals) was requested from a system with no bodies.
    #[error("system has no bodies")]
    EmptySystem,

    /// A body was constructed with non-physical parameters.
    #[error("invalid body: {reason}")]
    InvalidBody { reason: String },
}
