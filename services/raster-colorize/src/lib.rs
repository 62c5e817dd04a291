//! Apply a Planscape layer style to a raw raster.
//!
//! Reads a grid of little-endian `f32` values, colors it through a style
//! descriptor, and writes a PNG and/or the layer legend.

use anyhow::{bail, Context, Result};
use planscape_common::{DataLayer, StyleDescriptor};
use raster_renderer::{extract_legend, Legend, RasterRenderer};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};

/// Where the styling comes from.
#[derive(Debug, Clone)]
pub enum StyleSource {
    /// A bare style descriptor JSON file
    Style(PathBuf),
    /// A data layer JSON file (style plus legend metadata)
    Layer(PathBuf),
}

/// A colorize job, as assembled from CLI arguments.
#[derive(Debug, Clone)]
pub struct ColorizeJob {
    pub source: StyleSource,
    pub input: Option<PathBuf>,
    pub width: usize,
    pub height: usize,
    pub output: Option<PathBuf>,
    pub legend: bool,
}

/// Result of running a job.
#[derive(Debug, Default)]
pub struct ColorizeOutput {
    pub png_size: Option<usize>,
    pub legend: Option<Legend>,
}

/// Loaded styling: the descriptor, plus the layer when one was given.
struct LoadedStyle {
    style: Arc<StyleDescriptor>,
    layer: Option<DataLayer>,
}

fn load_style(source: &StyleSource) -> Result<LoadedStyle> {
    match source {
        StyleSource::Style(path) => {
            let style = StyleDescriptor::from_file(path)
                .with_context(|| format!("Failed to load style from {}", path.display()))?;
            Ok(LoadedStyle {
                style: Arc::new(style),
                layer: None,
            })
        }
        StyleSource::Layer(path) => {
            let layer = DataLayer::from_file(path)
                .with_context(|| format!("Failed to load data layer from {}", path.display()))?;
            Ok(LoadedStyle {
                style: Arc::new(layer.style.clone()),
                layer: Some(layer),
            })
        }
    }
}

/// Read a row-major grid of little-endian `f32` values.
pub fn read_raster(path: &Path, width: usize, height: usize) -> Result<Vec<f32>> {
    let bytes =
        std::fs::read(path).with_context(|| format!("Failed to read raster {}", path.display()))?;

    if bytes.len() % 4 != 0 {
        bail!(
            "Raster {} is {} bytes, not a whole number of f32 values",
            path.display(),
            bytes.len()
        );
    }

    let values: Vec<f32> = bytes
        .chunks_exact(4)
        .map(|b| f32::from_le_bytes([b[0], b[1], b[2], b[3]]))
        .collect();

    let expected = width
        .checked_mul(height)
        .with_context(|| format!("Raster size {}x{} overflows", width, height))?;
    if values.len() < expected {
        warn!(
            values = values.len(),
            expected, "Raster is shorter than requested size; missing pixels stay transparent"
        );
    } else if values.len() > expected {
        bail!(
            "Raster has {} values but {}x{} needs {}",
            values.len(),
            width,
            height,
            expected
        );
    }

    Ok(values)
}

/// Run one job against `renderer`.
pub fn run(job: &ColorizeJob, renderer: &RasterRenderer) -> Result<ColorizeOutput> {
    let loaded = load_style(&job.source)?;
    let mut output = ColorizeOutput::default();

    info!(
        map_type = %loaded.style.map_type,
        entries = loaded.style.entries.len(),
        "Loaded style"
    );

    if job.legend {
        match &loaded.layer {
            Some(layer) => output.legend = Some(extract_legend(layer)),
            None => bail!("A legend needs a data layer (--layer), not a bare style"),
        }
    }

    if let Some(out_path) = &job.output {
        let input = job
            .input
            .as_ref()
            .context("Writing a PNG requires an input raster (--input)")?;
        if job.width == 0 || job.height == 0 {
            bail!("Width and height must be non-zero");
        }
        renderer.check_size(job.width, job.height)?;

        let data = read_raster(input, job.width, job.height)?;
        let png = renderer.render_png(&loaded.style, &data, job.width, job.height)?;

        std::fs::write(out_path, &png)
            .with_context(|| format!("Failed to write {}", out_path.display()))?;

        info!(
            path = %out_path.display(),
            size = png.len(),
            width = job.width,
            height = job.height,
            "Wrote PNG"
        );
        output.png_size = Some(png.len());
    }

    Ok(output)
}
