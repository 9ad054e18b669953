//! Ring permutation engine
//!
//! Turning a slice moves one strip of `L` colors from each ring face onto the
//! next ring face. The strips are located purely by ring coordinate: on ring
//! position `p` the cell with offset `k` has coordinate
//! `layer * 4L + p * L + k`.
//!
//! The 4-cycle is applied as three pairwise swaps between neighbouring ring
//! positions. Forward turns walk the pairs from the back of the ring to the
//! front (`(2,3)`, `(1,2)`, `(0,1)`), inverted turns walk them front to back.
//! Walking them in the other order would realise a different permutation.

use crate::domain::core::{Cube, Face};
use crate::domain::gesture::Turn;
use crate::domain::topology::{self, Axis, RING_LEN};
use crate::domain::validation::ShapeViolation;

/// The cells of one ring face that belong to the turning slice
#[derive(Debug, Clone, PartialEq, Eq)]
struct StripHandle {
    face_index: usize,
    /// Cell index for each offset `0..L`
    cells: Vec<usize>,
}

/// Cycles the colors of one slice around the ring of `axis`
///
/// Every cell of the slice is located before any color moves, so a cube
/// missing a ring cell is reported without being modified.
///
/// # Arguments
/// * `cube` - Cube to mutate in place
/// * `axis` - Axis whose ring is turned
/// * `layer` - Slice index in `0..length`
/// * `length` - Edge length of the cube
/// * `turn` - Direction of the cycle
pub fn permute_ring(
    cube: &mut Cube,
    axis: Axis,
    layer: usize,
    length: usize,
    turn: Turn,
) -> Result<(), ShapeViolation> {
    let topology = axis.topology();
    let mut strips = Vec::with_capacity(RING_LEN);

    for (position, slot) in topology.ring.iter().enumerate() {
        let face_index = cube
            .face_index(slot.face)
            .ok_or(ShapeViolation::MissingFace(slot.face))?;
        let start = topology::slice_start(layer, position, length);
        let cells = locate_strip(&cube.faces[face_index], axis, start, length)?;
        strips.push(StripHandle { face_index, cells });
    }

    for step in 0..RING_LEN - 1 {
        let pair = match turn {
            Turn::Forward => RING_LEN - 2 - step,
            Turn::Inverted => step,
        };
        swap_strips(cube, &strips[pair], &strips[pair + 1]);
    }

    Ok(())
}

fn locate_strip(face: &Face, axis: Axis, start: u32, length: usize) -> Result<Vec<usize>, ShapeViolation> {
    (0..length as u32)
        .map(|offset| {
            let coordinate = start + offset;
            face.cells
                .iter()
                .position(|cell| cell.coordinate(axis) == Some(coordinate))
                .ok_or(ShapeViolation::MissingRingCell {
                    face: face.direction,
                    axis,
                    coordinate,
                })
        })
        .collect()
}

fn swap_strips(cube: &mut Cube, first: &StripHandle, second: &StripHandle) {
    for (&a, &b) in first.cells.iter().zip(&second.cells) {
        let color_a = cube.faces[first.face_index].cells[a].color;
        let color_b = cube.faces[second.face_index].cells[b].color;
        cube.faces[first.face_index].cells[a].color = color_b;
        cube.faces[second.face_index].cells[b].color = color_a;
    }
}
