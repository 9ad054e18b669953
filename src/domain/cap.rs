//! Cap face rotation
//!
//! When the outermost slice of an axis turns, the cap face glued to it spins
//! a quarter turn. A quarter turn of a grid cycles four cells at a time, so it
//! is computed from a snapshot of the face and committed by replacing the
//! whole cell collection; no cell is read after being overwritten.
//!
//! Directions are given in the face's own grid, rows running down and columns
//! running right.

use crate::domain::core::{Color, Face};
use crate::domain::gesture::Turn;
use crate::domain::validation::ShapeViolation;

/// Direction of a quarter turn within a face's grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Spin {
    Clockwise,
    CounterClockwise,
}

/// Which cap of an axis sits next to the turning slice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapSide {
    /// Next to layer 0
    Near,
    /// Next to layer `L - 1`
    Far,
}

impl Spin {
    pub fn reversed(self) -> Self {
        match self {
            Spin::Clockwise => Spin::CounterClockwise,
            Spin::CounterClockwise => Spin::Clockwise,
        }
    }

    /// Spin of the cap on `side` when its adjacent slice turns by `turn`
    ///
    /// A forward turn spins the near cap counter-clockwise. The far cap is
    /// seen from the opposite side of the cube, so it spins the other way.
    pub fn for_cap(turn: Turn, side: CapSide) -> Self {
        let forward = match side {
            CapSide::Near => Spin::CounterClockwise,
            CapSide::Far => Spin::Clockwise,
        };
        if turn.is_inverted() { forward.reversed() } else { forward }
    }

    /// Returns the cell whose color lands on `(row, col)`
    fn source(self, row: usize, col: usize, length: usize) -> (usize, usize) {
        match self {
            Spin::Clockwise => (length - 1 - col, row),
            Spin::CounterClockwise => (col, length - 1 - row),
        }
    }
}

/// Rotates the colors of `face` a quarter turn
///
/// Cell order, positions and axis coordinates are preserved; only colors move.
pub fn spin_face(face: &mut Face, length: usize, spin: Spin) -> Result<(), ShapeViolation> {
    let grid = snapshot(face, length)?;

    let rotated = face
        .cells
        .iter()
        .map(|cell| {
            let (row, col) = spin.source(cell.row as usize, cell.col as usize, length);
            let mut moved = *cell;
            moved.color = grid[row * length + col];
            moved
        })
        .collect();

    face.cells = rotated;
    Ok(())
}

fn snapshot(face: &Face, length: usize) -> Result<Vec<Color>, ShapeViolation> {
    let mut grid: Vec<Option<Color>> = vec![None; length * length];

    for cell in &face.cells {
        let in_bounds = (0..length as i32).contains(&cell.row) && (0..length as i32).contains(&cell.col);
        if !in_bounds {
            return Err(ShapeViolation::CellOutOfBounds {
                face: face.direction,
                row: cell.row,
                col: cell.col,
            });
        }
        grid[cell.row as usize * length + cell.col as usize] = Some(cell.color);
    }

    grid.into_iter()
        .enumerate()
        .map(|(index, color)| {
            color.ok_or(ShapeViolation::GapInGrid {
                face: face.direction,
                row: (index / length) as i32,
                col: (index % length) as i32,
            })
        })
        .collect()
}
