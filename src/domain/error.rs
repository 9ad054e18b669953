//! Errors reported by cube operations

use thiserror::Error;

use crate::domain::core::FaceDirection;
use crate::domain::topology::Axis;
use crate::domain::validation::ShapeViolation;

/// Errors that can occur while generating or turning a cube
///
/// Every operation either succeeds with a complete cube or fails with one of
/// these; there is no partial result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CubeError {
    /// Requested edge length is outside the supported range
    #[error("Invalid cube size. The cube must be between 3 and 10 rows.")]
    InvalidSize { length: i32 },

    /// Submitted cube does not have the shape of a cube of the given length
    #[error("Invalid cube: {0}")]
    InvalidCube(#[from] ShapeViolation),

    /// Start and end faces are not neighbours on any axis ring
    #[error("Unrecognized swipe from {start} to {end}")]
    UnrecognizedGesture { start: FaceDirection, end: FaceDirection },

    /// Pivot cell does not address a slice on the resolved axis
    #[error("Pivot cell does not address a slice on axis {axis}")]
    InvalidPivot { axis: Axis },
}
