//! Structural validation of client-submitted cubes
//!
//! A turn request carries the whole cube, so nothing about its shape can be
//! assumed. Validation runs before any mutation and rejects cubes whose faces
//! do not form complete `L x L` grids.
//!
//! The default structural mode deliberately ignores axis coordinates: a cube
//! with tampered coordinates but a sound grid passes. [`ValidationMode::Strict`]
//! closes that gap by recomputing every coordinate from the cell's position.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::core::{Cube, FaceDirection};
use crate::domain::topology::{self, Axis};

/// Reasons a submitted cube is rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeViolation {
    #[error("length {length} is outside the supported range")]
    LengthOutOfRange { length: i32 },

    #[error("expected 6 faces, found {found}")]
    WrongFaceCount { found: usize },

    #[error("face {0} appears more than once")]
    DuplicateFace(FaceDirection),

    #[error("face {0} is missing")]
    MissingFace(FaceDirection),

    #[error("face {face} has {found} cells, expected {expected}")]
    CellCount { face: FaceDirection, expected: usize, found: usize },

    #[error("cell ({row}, {col}) on face {face} is outside the grid")]
    CellOutOfBounds { face: FaceDirection, row: i32, col: i32 },

    #[error("cell ({row}, {col}) on face {face} appears more than once")]
    DuplicateCell { face: FaceDirection, row: i32, col: i32 },

    #[error("cell ({row}, {col}) on face {face} is missing")]
    GapInGrid { face: FaceDirection, row: i32, col: i32 },

    #[error("cell ({row}, {col}) on face {face} has a wrong coordinate on axis {axis}")]
    CoordinateMismatch { face: FaceDirection, row: i32, col: i32, axis: Axis },

    #[error("face {face} has no cell with coordinate {coordinate} on axis {axis}")]
    MissingRingCell { face: FaceDirection, axis: Axis, coordinate: u32 },
}

/// How thoroughly submitted cubes are checked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ValidationMode {
    /// Grid shape only
    #[default]
    Structural,
    /// Grid shape plus recomputed axis coordinates
    Strict,
}

/// Returns true if `cube` is a structurally valid cube of edge `length`
pub fn is_valid(cube: &Cube, length: i32) -> bool {
    validate(cube, length, ValidationMode::Structural).is_ok()
}

/// Checks that `cube` has the shape of a cube of edge `length`
///
/// # Returns
/// Ok(()) if the cube is valid, or the first violation found
pub fn validate(cube: &Cube, length: i32, mode: ValidationMode) -> Result<(), ShapeViolation> {
    if !Cube::supports_length(length) {
        return Err(ShapeViolation::LengthOutOfRange { length });
    }

    check_directions(cube)?;

    let size = length as usize;
    for face in &cube.faces {
        if face.cells.len() != size * size {
            return Err(ShapeViolation::CellCount {
                face: face.direction,
                expected: size * size,
                found: face.cells.len(),
            });
        }

        let mut covered = vec![false; size * size];
        for cell in &face.cells {
            if cell.row < 0 || cell.row >= length || cell.col < 0 || cell.col >= length {
                return Err(ShapeViolation::CellOutOfBounds {
                    face: face.direction,
                    row: cell.row,
                    col: cell.col,
                });
            }

            let slot = &mut covered[cell.row as usize * size + cell.col as usize];
            if *slot {
                return Err(ShapeViolation::DuplicateCell {
                    face: face.direction,
                    row: cell.row,
                    col: cell.col,
                });
            }
            *slot = true;

            if mode == ValidationMode::Strict {
                let expected = topology::coordinates(face.direction, cell.row as usize, cell.col as usize, size);
                if let Some(axis) = Axis::ALL
                    .into_iter()
                    .find(|&axis| cell.coordinate(axis) != expected[axis as usize])
                {
                    return Err(ShapeViolation::CoordinateMismatch {
                        face: face.direction,
                        row: cell.row,
                        col: cell.col,
                        axis,
                    });
                }
            }
        }

        if let Some(index) = covered.iter().position(|&seen| !seen) {
            return Err(ShapeViolation::GapInGrid {
                face: face.direction,
                row: (index / size) as i32,
                col: (index % size) as i32,
            });
        }
    }

    Ok(())
}

fn check_directions(cube: &Cube) -> Result<(), ShapeViolation> {
    if cube.faces.len() != FaceDirection::ALL.len() {
        return Err(ShapeViolation::WrongFaceCount {
            found: cube.faces.len(),
        });
    }

    for (index, face) in cube.faces.iter().enumerate() {
        if cube.faces[..index].iter().any(|other| other.direction == face.direction) {
            return Err(ShapeViolation::DuplicateFace(face.direction));
        }
    }

    // Six faces with no duplicates means every direction is present.
    Ok(())
}
