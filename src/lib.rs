//! cube-swipe: a stateless N×N×N cube turned by swipe gestures
//!
//! Clients hold the cube. [`generate`](domain::generator::generate) hands out
//! a solved cube whose cells carry per-axis ring coordinates, and every turn
//! request sends the whole cube back together with a pivot cell and a swipe.
//! The engine resolves the swipe to an axis, cycles the slice's colors around
//! the axis ring, spins the cap face when the slice is outermost, and returns
//! the same cube.
//!
//! ```rust
//! use cube_swipe::{CubeService, FaceDirection, RotateRequest, Swipe};
//!
//! let service = CubeService::default();
//! let cube = service.generate(3).unwrap();
//! let pivot = *cube.face(FaceDirection::Front).unwrap().cell_at(0, 0).unwrap();
//! let swipe = Swipe::new(FaceDirection::Front, FaceDirection::Right);
//!
//! let turned = service.rotate(RotateRequest::new(cube, 3, pivot, swipe)).unwrap();
//! assert_eq!(turned.faces.len(), 6);
//! ```

pub mod app;
pub mod config;
pub mod domain;

pub use app::{CubeService, ServiceResult};
pub use config::EngineConfig;
pub use domain::{
    Axis, Cell, Color, Cube, CubeError, Face, FaceDirection, GesturePolicy, RotateRequest, ShapeViolation, Swipe,
    Turn, ValidationMode,
};
