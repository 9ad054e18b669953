//! Turn requests and their execution
//!
//! A request carries the whole cube, its edge length, a pivot cell picking
//! the slice and a swipe picking the axis and direction. Execution is
//! validate → resolve → permute ring → spin cap (outermost slices only), all
//! on the cube value the request owns.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::cap::{self, CapSide, Spin};
use crate::domain::core::{Cell, Cube, Face, FaceDirection};
use crate::domain::error::CubeError;
use crate::domain::gesture::{GesturePolicy, ResolvedSwipe, Swipe, Turn};
use crate::domain::ring;
use crate::domain::topology::{self, Axis};
use crate::domain::validation::{self, ShapeViolation, ValidationMode};

/// A single quarter-turn request as sent by clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RotateRequest {
    /// The six faces of the current cube
    pub cube_data: Vec<Face>,
    /// Edge length of the cube
    pub length: i32,
    /// Any ring cell of the slice to turn
    #[serde(alias = "cell")]
    pub pivot_cell: Cell,
    #[serde(alias = "startSwipeDirection")]
    pub start_direction: FaceDirection,
    #[serde(alias = "endSwipeDirection")]
    pub end_direction: FaceDirection,
}

impl RotateRequest {
    pub fn new(cube: Cube, length: i32, pivot_cell: Cell, swipe: Swipe) -> Self {
        Self {
            cube_data: cube.into_faces(),
            length,
            pivot_cell,
            start_direction: swipe.start,
            end_direction: swipe.end,
        }
    }

    pub fn swipe(&self) -> Swipe {
        Swipe::new(self.start_direction, self.end_direction)
    }
}

/// Applies the turn described by `request` and returns the turned cube
///
/// # Arguments
/// * `request` - Cube, length, pivot and swipe
/// * `validation` - How strictly the submitted cube is checked
/// * `gestures` - What to do with a swipe that matches no axis ring
///
/// # Returns
/// The request's own cube with colors moved, or the reason it was rejected
pub fn rotate(
    request: RotateRequest,
    validation: ValidationMode,
    gestures: GesturePolicy,
) -> Result<Cube, CubeError> {
    let swipe = request.swipe();
    let RotateRequest {
        cube_data,
        length,
        pivot_cell,
        ..
    } = request;
    let mut cube = Cube::from_faces(cube_data);

    validation::validate(&cube, length, validation)?;

    let Some(ResolvedSwipe { axis, turn }) = swipe.resolve() else {
        return match gestures {
            GesturePolicy::Reject => Err(CubeError::UnrecognizedGesture {
                start: swipe.start,
                end: swipe.end,
            }),
            GesturePolicy::Ignore => {
                debug!(start = %swipe.start, end = %swipe.end, "swipe matches no ring, cube left unchanged");
                Ok(cube)
            }
        };
    };

    let size = length as usize;
    let layer = pivot_layer(&pivot_cell, axis, size)?;
    debug!(%axis, ?turn, layer, "resolved swipe");

    turn_slice(&mut cube, size, axis, layer, turn)?;
    Ok(cube)
}

/// Returns the slice of `axis` the pivot cell lies in
pub fn pivot_layer(pivot: &Cell, axis: Axis, length: usize) -> Result<usize, CubeError> {
    let coordinate = pivot.coordinate(axis).ok_or(CubeError::InvalidPivot { axis })?;
    let layer = topology::layer_of(coordinate, length);
    if layer >= length {
        return Err(CubeError::InvalidPivot { axis });
    }
    Ok(layer)
}

/// Turns slice `layer` of `axis` a quarter turn in place
///
/// Moves the slice's ring colors and, when the slice is outermost, spins the
/// adjacent cap. The cube is assumed to have passed validation.
pub fn turn_slice(cube: &mut Cube, length: usize, axis: Axis, layer: usize, turn: Turn) -> Result<(), CubeError> {
    ring::permute_ring(cube, axis, layer, length, turn)?;

    if let Some((direction, side)) = adjacent_cap(axis, layer, length) {
        let spin = Spin::for_cap(turn, side);
        debug!(cap = %direction, ?spin, "spinning cap face");
        let face = cube
            .face_mut(direction)
            .ok_or(ShapeViolation::MissingFace(direction))?;
        cap::spin_face(face, length, spin)?;
    }

    Ok(())
}

/// Returns the cap glued to `layer`, if the layer is outermost
pub fn adjacent_cap(axis: Axis, layer: usize, length: usize) -> Option<(FaceDirection, CapSide)> {
    let topology = axis.topology();
    if layer == 0 {
        Some((topology.near_cap, CapSide::Near))
    } else if layer + 1 == length {
        Some((topology.far_cap, CapSide::Far))
    } else {
        None
    }
}
