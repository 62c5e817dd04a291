//! Configuration for the raster renderer.

use planscape_common::{PlanscapeError, PlanscapeResult};
use serde::{Deserialize, Serialize};

use crate::cache::DEFAULT_CAPACITY;
use crate::pixel::{DEFAULT_MAX_PIXELS, DEFAULT_PARALLEL_THRESHOLD};

/// Configuration for the raster renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RendererConfig {
    /// Maximum number of style descriptors with a cached color mapping.
    pub color_cache_capacity: usize,

    /// Pixel count at which raster coloring switches to the rayon pool.
    pub parallel_threshold: usize,

    /// Largest grid (width * height) a single render may allocate.
    pub max_pixels: usize,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            color_cache_capacity: DEFAULT_CAPACITY,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
            max_pixels: DEFAULT_MAX_PIXELS,
        }
    }
}

impl RendererConfig {
    /// Load configuration from environment variables.
    ///
    /// Unset or unparseable variables keep their defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(val) = std::env::var("COLOR_CACHE_CAPACITY") {
            if let Ok(capacity) = val.trim().parse() {
                config.color_cache_capacity = capacity;
            }
        }

        if let Ok(val) = std::env::var("RENDER_PARALLEL_THRESHOLD") {
            if let Ok(threshold) = val.trim().parse() {
                config.parallel_threshold = threshold;
            }
        }

        if let Ok(val) = std::env::var("RENDER_MAX_PIXELS") {
            if let Ok(max) = val.trim().parse() {
                config.max_pixels = max;
            }
        }

        config
    }

    /// Validate the configuration.
    pub fn validate(&self) -> PlanscapeResult<()> {
        if self.color_cache_capacity == 0 {
            return Err(PlanscapeError::InvalidConfig(
                "color_cache_capacity must be > 0".to_string(),
            ));
        }
        if self.max_pixels == 0 {
            return Err(PlanscapeError::InvalidConfig(
                "max_pixels must be > 0".to_string(),
            ));
        }
        Ok(())
    }
}
