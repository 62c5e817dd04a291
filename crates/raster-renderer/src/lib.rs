//! Style-driven raster rendering for Planscape data layers.
//!
//! Turns a layer's style descriptor into a per-pixel color function:
//! - Color parsing (hex, rgb/hsl functions, named colors)
//! - VALUES / INTERVALS / RAMP mappers
//! - LRU cache of built mappings keyed by descriptor identity
//! - RGBA pixel writing, PNG encoding and legends
//!
//! Coloring is total: any value that can't be resolved renders transparent.

pub mod cache;
pub mod color;
pub mod config;
pub mod factory;
pub mod legend;
pub mod mapper;
pub mod pixel;
pub mod png;
pub mod renderer;

pub use cache::{CacheStats, ColorMapperCache};
pub use color::{parse_color, Rgba};
pub use config::RendererConfig;
pub use factory::{build_color_mapping, ColorMapping, NoDataSet};
pub use legend::{extract_legend, Legend, LegendEntry};
pub use mapper::ColorMapper;
pub use pixel::{render_raster, write_color_to_buffer};
pub use renderer::RasterRenderer;
