//! Domain logic and core data structures
//!
//! This module contains the pure cube model and rotation engine. Nothing in
//! here performs I/O; every operation works on a cube value owned by the
//! caller.

pub mod cap;
pub mod core;
pub mod error;
pub mod generator;
pub mod gesture;
pub mod ring;
pub mod rotation;
pub mod topology;
pub mod validation;

pub use self::core::{Cell, Color, Cube, Face, FaceDirection};
pub use self::error::CubeError;
pub use self::gesture::{GesturePolicy, Swipe, Turn};
pub use self::rotation::RotateRequest;
pub use self::topology::Axis;
pub use self::validation::{ShapeViolation, ValidationMode};
