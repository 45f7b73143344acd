//! Error types for planar region operations.

use thiserror::Error;

/// Why a vertex sequence is not a simple polygon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PolygonDefect {
    /// Fewer than three distinct vertices.
    TooFewVertices {
        /// Number of distinct vertices found.
        distinct: usize,
    },
    /// A vertex appears more than once.
    RepeatedVertex {
        /// Index of the second occurrence.
        index: usize,
    },
    /// Two edges meet somewhere other than a shared endpoint.
    SelfIntersection {
        /// Index of the first edge (edge `i` runs from vertex `i` to `i + 1`).
        first: usize,
        /// Index of the second edge.
        second: usize,
    },
    /// The polygon encloses no area.
    ZeroArea,
}

impl std::fmt::Display for PolygonDefect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TooFewVertices { distinct } => {
                write!(f, "only {distinct} distinct vertices")
            }
            Self::RepeatedVertex { index } => write!(f, "vertex {index} is repeated"),
            Self::SelfIntersection { first, second } => {
                write!(f, "edges {first} and {second} intersect")
            }
            Self::ZeroArea => write!(f, "zero area"),
        }
    }
}

/// Errors returned by region construction, Boolean operations and
/// visibility queries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeometryError {
    /// The input is not a simple polygon.
    #[error("invalid polygon: {0}")]
    InvalidPolygon(PolygonDefect),

    /// The candidate hole does not fit strictly inside the region.
    #[error("invalid hole: must be simple and lie strictly inside the region")]
    InvalidHole,

    /// The inputs form a configuration the operation does not handle.
    #[error("unsupported operation: {operation}: {reason}")]
    UnsupportedOperation {
        /// The operation that gave up.
        operation: &'static str,
        /// What made the input unsupported.
        reason: &'static str,
    },

    /// The visibility query point is not in the region.
    #[error("query point lies outside the region")]
    PointOutsideRegion,

    /// A floating-point coordinate was NaN or infinite.
    #[error("coordinate is not a finite number")]
    InvalidCoordinate,
}

impl GeometryError {
    pub(crate) fn unsupported(operation: &'static str, reason: &'static str) -> Self {
        Self::UnsupportedOperation { operation, reason }
    }
}

/// Result alias used throughout the crate.
pub type GeometryResult<T> = Result<T, GeometryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = GeometryError::InvalidPolygon(PolygonDefect::SelfIntersection {
            first: 0,
            second: 2,
        });
        assert_eq!(err.to_string(), "invalid polygon: edges 0 and 2 intersect");

        let err = GeometryError::unsupported("symmetric difference", "operands only touch");
        assert_eq!(
            err.to_string(),
            "unsupported operation: symmetric difference: operands only touch"
        );
    }
}
