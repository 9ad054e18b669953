//! Configuration module for cube-swipe
//!
//! Engine behaviour that callers may tune: how strictly submitted cubes are
//! validated and what happens with swipes that match no axis ring.

pub mod engine;

pub use engine::{ConfigError, EngineConfig};
