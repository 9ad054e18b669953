//! Solved cube generation
//!
//! Builds the six faces of a solved cube and stamps every cell with its
//! three axis coordinates. Those coordinates travel to the client and back
//! with every turn request, so they are computed once here from the
//! [`topology`](crate::domain::topology) table and never re-derived by the
//! rotation engine.

use crate::domain::core::{Cell, Cube, Face, FaceDirection};
use crate::domain::error::CubeError;
use crate::domain::topology;

/// Generates a solved cube with `length` cells per edge
///
/// # Arguments
/// * `length` - Edge length, must lie in `Cube::MIN_LENGTH..=Cube::MAX_LENGTH`
///
/// # Returns
/// Six faces in the order Front, Right, Up, Bottom, Left, Down, each holding
/// `length²` cells in row-major order, or `CubeError::InvalidSize`
///
/// # Example
/// ```rust
/// use cube_swipe::domain::generator::generate;
///
/// let cube = generate(3).unwrap();
/// assert_eq!(cube.faces.len(), 6);
/// assert_eq!(cube.faces[0].cells.len(), 9);
/// ```
pub fn generate(length: i32) -> Result<Cube, CubeError> {
    if !Cube::supports_length(length) {
        return Err(CubeError::InvalidSize { length });
    }

    let size = length as usize;
    let faces = FaceDirection::ALL
        .into_iter()
        .map(|direction| solved_face(direction, size))
        .collect();

    Ok(Cube::from_faces(faces))
}

fn solved_face(direction: FaceDirection, length: usize) -> Face {
    let color = direction.solved_color();
    let mut face = Face::new(direction);
    face.cells.reserve(length * length);

    for row in 0..length {
        for col in 0..length {
            let coordinates = topology::coordinates(direction, row, col, length);
            face.cells.push(Cell::new(row as i32, col as i32, color, coordinates));
        }
    }

    face
}
