//! Error types for Planscape raster services.

use thiserror::Error;

/// Result type alias using PlanscapeError.
pub type PlanscapeResult<T> = Result<T, PlanscapeError>;

/// Primary error type for loading, configuring and encoding rasters.
///
/// Pixel coloring itself never fails; these errors only surface at the
/// edges (reading descriptors, validating config, writing images).
#[derive(Debug, Error)]
pub enum PlanscapeError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Rendering failed: {0}")]
    RenderError(String),
}

impl From<std::io::Error> for PlanscapeError {
    fn from(err: std::io::Error) -> Self {
        PlanscapeError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for PlanscapeError {
    fn from(err: serde_json::Error) -> Self {
        PlanscapeError::Parse(format!("JSON error: {}", err))
    }
}
