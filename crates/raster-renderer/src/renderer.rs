//! Raster rendering pipeline: style lookup, pixel coloring, encoding.

use planscape_common::{PlanscapeError, PlanscapeResult, StyleDescriptor};
use std::sync::Arc;
use tracing::debug;

use crate::cache::{CacheStats, ColorMapperCache};
use crate::config::RendererConfig;
use crate::factory::ColorMapping;
use crate::pixel::render_raster;
use crate::png::{encode_png, MAX_DIMENSION};

/// Owns the color mapping cache shared by every render it performs.
///
/// `RasterRenderer` is `Sync`; wrap it in an `Arc` to render tiles from
/// several threads against the same cache.
#[derive(Debug)]
pub struct RasterRenderer {
    cache: ColorMapperCache,
    config: RendererConfig,
}

impl RasterRenderer {
    pub fn new(config: RendererConfig) -> PlanscapeResult<Self> {
        config.validate()?;
        Ok(Self {
            cache: ColorMapperCache::new(config.color_cache_capacity),
            config,
        })
    }

    pub fn config(&self) -> &RendererConfig {
        &self.config
    }

    /// Cached (or freshly built) mapping for a style.
    pub fn mapping(&self, style: &Arc<StyleDescriptor>) -> Arc<ColorMapping> {
        self.cache.get_or_build(style)
    }

    /// Reject grids past the PNG dimension limit or the configured pixel cap.
    pub fn check_size(&self, width: usize, height: usize) -> PlanscapeResult<()> {
        if width > MAX_DIMENSION || height > MAX_DIMENSION {
            return Err(PlanscapeError::RenderError(format!(
                "Raster dimensions {}x{} exceed the PNG limit of {}",
                width, height, MAX_DIMENSION
            )));
        }
        match width.checked_mul(height) {
            Some(pixels) if pixels <= self.config.max_pixels => Ok(()),
            _ => Err(PlanscapeError::RenderError(format!(
                "Raster {}x{} exceeds the {} pixel limit",
                width, height, self.config.max_pixels
            ))),
        }
    }

    /// Color a row-major `width * height` grid into RGBA bytes.
    pub fn render(
        &self,
        style: &Arc<StyleDescriptor>,
        data: &[f32],
        width: usize,
        height: usize,
    ) -> PlanscapeResult<Vec<u8>> {
        self.check_size(width, height)?;
        let mapping = self.mapping(style);
        debug!(
            width,
            height,
            values = data.len(),
            mapper = mapping.mapper.kind(),
            "Rendering raster"
        );
        render_raster(data, width, height, &mapping, self.config.parallel_threshold)
    }

    /// Color a grid and encode it as PNG.
    pub fn render_png(
        &self,
        style: &Arc<StyleDescriptor>,
        data: &[f32],
        width: usize,
        height: usize,
    ) -> PlanscapeResult<Vec<u8>> {
        let pixels = self.render(style, data, width, height)?;
        encode_png(&pixels, width, height)
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }
}

impl Default for RasterRenderer {
    fn default() -> Self {
        let config = RendererConfig::default();
        Self {
            cache: ColorMapperCache::new(config.color_cache_capacity),
            config,
        }
    }
}
