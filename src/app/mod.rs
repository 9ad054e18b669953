//! Application orchestration layer
//!
//! This module sits between callers (the CLI, or any transport wrapped
//! around the crate) and the pure domain. It applies engine configuration,
//! logs every request and shapes results into the wire envelope.

pub mod response;
pub mod service;

pub use response::ServiceResult;
pub use service::CubeService;
