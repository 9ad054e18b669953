//! Cube topology and the flat per-cell coordinate scheme
//!
//! The cube turns around three axes. Each axis has a ring of four faces that
//! exchange colors when one of its slices turns, and two cap faces that only
//! spin in place. The table below is the single source of truth for ring
//! order, cap placement and how a cell's (row, col) maps onto a ring
//! coordinate.
//!
//! A ring coordinate packs three values into one integer. With `M = 4 * L`:
//!
//! ```text
//! coordinate = layer * M + position * L + offset
//! ```
//!
//! `layer` selects one of the `L` parallel slices, `position` is the face's
//! index within the ring and `offset` walks along the slice. Matching
//! `layer` and `offset` values on the four ring faces always refer to the
//! same physical slice and the same position along it, which is what lets
//! the permutation engine swap colors by coordinate alone.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::core::FaceDirection;

/// Number of faces in every axis ring
pub const RING_LEN: usize = 4;

/// One of the three rotation axes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    /// Horizontal layers, capped by Up and Down
    A,
    /// Layers parallel to Front, capped by Front and Bottom
    B,
    /// Layers parallel to Left, capped by Left and Right
    C,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::A, Axis::B, Axis::C];

    /// Returns the static topology for this axis
    pub fn topology(self) -> &'static AxisTopology {
        &AXES[self as usize]
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// How a ring coordinate component is read off a cell's grid position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Index {
    Row,
    Col,
    RowReversed,
    ColReversed,
}

impl Index {
    fn resolve(self, row: usize, col: usize, length: usize) -> usize {
        match self {
            Index::Row => row,
            Index::Col => col,
            Index::RowReversed => length - 1 - row,
            Index::ColReversed => length - 1 - col,
        }
    }
}

/// A face's membership in an axis ring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RingSlot {
    pub face: FaceDirection,
    /// Which grid index selects the slice
    pub layer: Index,
    /// Which grid index walks along the slice
    pub offset: Index,
}

/// Ring order and cap placement for one axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisTopology {
    pub axis: Axis,
    /// Ring faces in cyclic order; a forward turn carries colors from
    /// `ring[p]` to `ring[p + 1]`
    pub ring: [RingSlot; RING_LEN],
    /// Cap adjacent to layer 0
    pub near_cap: FaceDirection,
    /// Cap adjacent to layer `L - 1`
    pub far_cap: FaceDirection,
}

const fn slot(face: FaceDirection, layer: Index, offset: Index) -> RingSlot {
    RingSlot { face, layer, offset }
}

/// The fixed topology table, indexed by [`Axis`]
pub static AXES: [AxisTopology; 3] = [
    AxisTopology {
        axis: Axis::A,
        ring: [
            slot(FaceDirection::Front, Index::Row, Index::Col),
            slot(FaceDirection::Right, Index::Row, Index::Col),
            slot(FaceDirection::Bottom, Index::Row, Index::Col),
            slot(FaceDirection::Left, Index::Row, Index::Col),
        ],
        near_cap: FaceDirection::Up,
        far_cap: FaceDirection::Down,
    },
    AxisTopology {
        axis: Axis::B,
        ring: [
            slot(FaceDirection::Right, Index::Col, Index::RowReversed),
            slot(FaceDirection::Up, Index::RowReversed, Index::ColReversed),
            slot(FaceDirection::Left, Index::ColReversed, Index::Row),
            slot(FaceDirection::Down, Index::Row, Index::Col),
        ],
        near_cap: FaceDirection::Front,
        far_cap: FaceDirection::Bottom,
    },
    AxisTopology {
        axis: Axis::C,
        ring: [
            slot(FaceDirection::Front, Index::Col, Index::RowReversed),
            slot(FaceDirection::Up, Index::Col, Index::RowReversed),
            slot(FaceDirection::Bottom, Index::ColReversed, Index::Row),
            slot(FaceDirection::Down, Index::Col, Index::RowReversed),
        ],
        near_cap: FaceDirection::Left,
        far_cap: FaceDirection::Right,
    },
];

impl AxisTopology {
    /// Returns the ring position of `face`, or `None` for a cap
    pub fn position_of(&self, face: FaceDirection) -> Option<usize> {
        self.ring.iter().position(|slot| slot.face == face)
    }

    pub fn is_cap(&self, face: FaceDirection) -> bool {
        face == self.near_cap || face == self.far_cap
    }

    /// Ring faces in cyclic order
    pub fn ring_faces(&self) -> [FaceDirection; RING_LEN] {
        self.ring.map(|slot| slot.face)
    }
}

/// Distance between two consecutive layers in coordinate space (`4 * L`)
pub fn layer_stride(length: usize) -> u32 {
    (RING_LEN * length) as u32
}

/// Returns the layer a ring coordinate belongs to
pub fn layer_of(coordinate: u32, length: usize) -> usize {
    (coordinate / layer_stride(length)) as usize
}

/// Returns the coordinate of the first cell of `layer` at ring `position`
pub fn slice_start(layer: usize, position: usize, length: usize) -> u32 {
    (layer * RING_LEN * length + position * length) as u32
}

/// Computes the coordinate of the cell at `(row, col)` on `face` for `axis`
///
/// Returns `None` when `face` caps `axis`.
pub fn ring_coordinate(axis: Axis, face: FaceDirection, row: usize, col: usize, length: usize) -> Option<u32> {
    let topology = axis.topology();
    let position = topology.position_of(face)?;
    let slot = topology.ring[position];
    let layer = slot.layer.resolve(row, col, length);
    let offset = slot.offset.resolve(row, col, length);
    Some(slice_start(layer, position, length) + offset as u32)
}

/// Computes all three axis coordinates of the cell at `(row, col)` on `face`
pub fn coordinates(face: FaceDirection, row: usize, col: usize, length: usize) -> [Option<u32>; 3] {
    Axis::ALL.map(|axis| ring_coordinate(axis, face, row, col, length))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn table_is_indexed_by_axis() {
        for axis in Axis::ALL {
            assert_eq!(axis.topology().axis, axis);
        }
    }

    #[test]
    fn each_face_caps_exactly_one_axis() {
        for face in FaceDirection::ALL {
            let caps: Vec<Axis> = Axis::ALL
                .into_iter()
                .filter(|axis| axis.topology().is_cap(face))
                .collect();
            let rings: Vec<Axis> = Axis::ALL
                .into_iter()
                .filter(|axis| axis.topology().position_of(face).is_some())
                .collect();

            assert_eq!(caps.len(), 1, "{} caps {:?}", face, caps);
            assert_eq!(rings.len(), 2, "{} rings {:?}", face, rings);
        }
    }

    #[test]
    fn caps_are_opposite_faces() {
        for axis in Axis::ALL {
            let topology = axis.topology();
            assert_eq!(topology.near_cap.opposite(), topology.far_cap);
        }
    }

    #[test]
    fn ring_neighbours_are_never_opposite() {
        for axis in Axis::ALL {
            let ring = axis.topology().ring_faces();
            for p in 0..RING_LEN {
                let next = ring[(p + 1) % RING_LEN];
                assert_ne!(ring[p].opposite(), next);
            }
            assert_eq!(ring[0].opposite(), ring[2]);
            assert_eq!(ring[1].opposite(), ring[3]);
        }
    }

    #[test]
    fn coordinates_match_closed_form() {
        // Closed-form encoding the wire contract was established with.
        for l in 3..=10usize {
            let m = 4 * l;
            for row in 0..l {
                for col in 0..l {
                    let expected = [
                        (FaceDirection::Front, [Some(row * m + col), None, Some(col * m + l - row - 1)]),
                        (FaceDirection::Right, [Some(row * m + l + col), Some(col * m + l - row - 1), None]),
                        (
                            FaceDirection::Up,
                            [None, Some((l - row - 1) * m + 2 * l - col - 1), Some(col * m + 2 * l - row - 1)],
                        ),
                        (
                            FaceDirection::Bottom,
                            [Some(row * m + 2 * l + col), None, Some((l - col - 1) * m + 2 * l + row)],
                        ),
                        (
                            FaceDirection::Left,
                            [Some(row * m + 3 * l + col), Some((l - col - 1) * m + 2 * l + row), None],
                        ),
                        (FaceDirection::Down, [None, Some(row * m + 3 * l + col), Some(col * m + 4 * l - row - 1)]),
                    ];

                    for (face, coords) in expected {
                        let coords = coords.map(|c| c.map(|v| v as u32));
                        assert_eq!(coordinates(face, row, col, l), coords, "{} ({}, {}) L={}", face, row, col, l);
                    }
                }
            }
        }
    }

    #[test]
    fn coordinates_are_unique_and_in_range_per_axis() {
        for l in 3..=10usize {
            for axis in Axis::ALL {
                let mut seen = HashSet::new();
                for face in axis.topology().ring_faces() {
                    for row in 0..l {
                        for col in 0..l {
                            let coordinate = ring_coordinate(axis, face, row, col, l).unwrap();
                            assert!(coordinate < (4 * l * l) as u32);
                            assert!(seen.insert(coordinate), "duplicate {} on {}", coordinate, axis);
                        }
                    }
                }
                assert_eq!(seen.len(), 4 * l * l);
            }
        }
    }

    #[test]
    fn layer_helpers() {
        assert_eq!(layer_stride(3), 12);
        assert_eq!(layer_of(0, 3), 0);
        assert_eq!(layer_of(11, 3), 0);
        assert_eq!(layer_of(12, 3), 1);
        assert_eq!(layer_of(35, 3), 2);
        assert_eq!(slice_start(2, 3, 3), 33);
    }
}
