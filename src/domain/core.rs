//! Core domain types and operations
//!
//! This module defines the plain cube records exchanged with clients: colors,
//! face directions, cells, faces and the cube itself. These types carry no
//! rotation logic; they are the value the engine mutates in place.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::topology::Axis;

/// One of the six sticker colors of a solved cube
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Green,
    Red,
    White,
    Blue,
    Orange,
    Yellow,
}

impl Color {
    pub const ALL: [Color; 6] = [
        Color::Green,
        Color::Red,
        Color::White,
        Color::Blue,
        Color::Orange,
        Color::Yellow,
    ];
}

/// Direction a face points to
///
/// `Bottom` is the face opposite `Front`; `Up` and `Down` form the remaining
/// vertical pair. The same values key the axis rings in
/// [`topology`](crate::domain::topology).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FaceDirection {
    Front,
    Right,
    Up,
    Bottom,
    Left,
    Down,
}

impl FaceDirection {
    /// All directions in generation order
    pub const ALL: [FaceDirection; 6] = [
        FaceDirection::Front,
        FaceDirection::Right,
        FaceDirection::Up,
        FaceDirection::Bottom,
        FaceDirection::Left,
        FaceDirection::Down,
    ];

    /// Returns the face on the other side of the cube
    pub fn opposite(self) -> Self {
        match self {
            FaceDirection::Front => FaceDirection::Bottom,
            FaceDirection::Bottom => FaceDirection::Front,
            FaceDirection::Right => FaceDirection::Left,
            FaceDirection::Left => FaceDirection::Right,
            FaceDirection::Up => FaceDirection::Down,
            FaceDirection::Down => FaceDirection::Up,
        }
    }

    /// Returns the color this face carries on a solved cube
    pub fn solved_color(self) -> Color {
        match self {
            FaceDirection::Front => Color::Green,
            FaceDirection::Right => Color::Red,
            FaceDirection::Up => Color::White,
            FaceDirection::Bottom => Color::Blue,
            FaceDirection::Left => Color::Orange,
            FaceDirection::Down => Color::Yellow,
        }
    }
}

impl fmt::Display for FaceDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// A single sticker on a face
///
/// Row, column and the three axis coordinates are fixed when the cube is
/// generated and must be echoed back unchanged by the client. Only `color`
/// changes when the cube is turned. An axis coordinate is `None` when the
/// face is a cap for that axis; on the wire this is the sentinel `-1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cell {
    pub row: i32,
    #[serde(alias = "column")]
    pub col: i32,
    pub color: Color,
    #[serde(with = "sentinel", alias = "firstRotationNumber")]
    pub axis_a: Option<u32>,
    #[serde(with = "sentinel", alias = "secondRotationNumber")]
    pub axis_b: Option<u32>,
    #[serde(with = "sentinel", alias = "thirdRotationNumber")]
    pub axis_c: Option<u32>,
}

impl Cell {
    pub fn new(row: i32, col: i32, color: Color, coordinates: [Option<u32>; 3]) -> Self {
        let [axis_a, axis_b, axis_c] = coordinates;
        Self {
            row,
            col,
            color,
            axis_a,
            axis_b,
            axis_c,
        }
    }

    /// Returns the ring coordinate of this cell on the given axis
    pub fn coordinate(&self, axis: Axis) -> Option<u32> {
        match axis {
            Axis::A => self.axis_a,
            Axis::B => self.axis_b,
            Axis::C => self.axis_c,
        }
    }

    pub fn coordinates(&self) -> [Option<u32>; 3] {
        [self.axis_a, self.axis_b, self.axis_c]
    }
}

/// One face (square) of the cube
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Face {
    pub direction: FaceDirection,
    pub cells: Vec<Cell>,
}

impl Face {
    pub fn new(direction: FaceDirection) -> Self {
        Self {
            direction,
            cells: Vec::new(),
        }
    }

    /// Returns the cell at `(row, col)`, if present
    pub fn cell_at(&self, row: i32, col: i32) -> Option<&Cell> {
        self.cells.iter().find(|cell| cell.row == row && cell.col == col)
    }

    /// Returns true if every cell on this face has the same color
    pub fn is_solid(&self) -> bool {
        match self.cells.first() {
            Some(first) => self.cells.iter().all(|cell| cell.color == first.color),
            None => true,
        }
    }
}

/// A full cube: six faces sharing the same edge length
///
/// The cube does not record its own length; callers pass it alongside the
/// faces, exactly as the wire format does.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cube {
    pub faces: Vec<Face>,
}

impl Cube {
    /// Smallest supported edge length
    pub const MIN_LENGTH: i32 = 3;
    /// Largest supported edge length
    pub const MAX_LENGTH: i32 = 10;

    pub fn from_faces(faces: Vec<Face>) -> Self {
        Self { faces }
    }

    /// Returns true if `length` lies in the supported range
    pub fn supports_length(length: i32) -> bool {
        (Self::MIN_LENGTH..=Self::MAX_LENGTH).contains(&length)
    }

    pub fn face(&self, direction: FaceDirection) -> Option<&Face> {
        self.faces.iter().find(|face| face.direction == direction)
    }

    pub fn face_mut(&mut self, direction: FaceDirection) -> Option<&mut Face> {
        self.faces.iter_mut().find(|face| face.direction == direction)
    }

    /// Returns the position of the face pointing to `direction`
    pub fn face_index(&self, direction: FaceDirection) -> Option<usize> {
        self.faces.iter().position(|face| face.direction == direction)
    }

    pub fn into_faces(self) -> Vec<Face> {
        self.faces
    }
}

/// Serde adapter mapping `None` to the wire sentinel `-1`
mod sentinel {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    const SENTINEL: i64 = -1;

    pub fn serialize<S: Serializer>(value: &Option<u32>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(coordinate) => serializer.serialize_i64(i64::from(*coordinate)),
            None => serializer.serialize_i64(SENTINEL),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u32>, D::Error> {
        let raw = i64::deserialize(deserializer)?;
        if raw == SENTINEL {
            return Ok(None);
        }
        u32::try_from(raw)
            .map(Some)
            .map_err(|_| D::Error::custom(format!("axis coordinate {} is neither -1 nor a ring index", raw)))
    }
}
