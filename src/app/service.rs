//! Cube service façade
//!
//! Holds the engine configuration and exposes the two operations callers
//! use: generate a solved cube and apply one swipe. The service keeps no
//! state between calls; each call works on the cube value it is given.

use tracing::{info, instrument, warn};

use crate::config::EngineConfig;
use crate::domain::core::Cube;
use crate::domain::error::CubeError;
use crate::domain::generator;
use crate::domain::rotation::{self, RotateRequest};

/// Entry point for cube operations
///
/// Only immutable configuration lives here, so a single service can be
/// shared between threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CubeService {
    config: EngineConfig,
}

impl CubeService {
    /// Creates a service with the given configuration
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Generates a solved cube with `length` cells per edge
    #[instrument(level = "info", skip(self))]
    pub fn generate(&self, length: i32) -> Result<Cube, CubeError> {
        match generator::generate(length) {
            Ok(cube) => {
                info!(faces = cube.faces.len(), "generated solved cube");
                Ok(cube)
            }
            Err(err) => {
                warn!(%err, "rejected generate request");
                Err(err)
            }
        }
    }

    /// Applies the swipe in `request` to the cube it carries
    #[instrument(
        level = "info",
        skip(self, request),
        fields(
            length = request.length,
            start = %request.start_direction,
            end = %request.end_direction,
        )
    )]
    pub fn rotate(&self, request: RotateRequest) -> Result<Cube, CubeError> {
        match rotation::rotate(request, self.config.validation, self.config.gestures) {
            Ok(cube) => {
                info!("applied swipe");
                Ok(cube)
            }
            Err(err) => {
                warn!(%err, "rejected rotate request");
                Err(err)
            }
        }
    }
}
