//! Writing colors into RGBA byte buffers.

use planscape_common::{PlanscapeError, PlanscapeResult};
use rayon::prelude::*;

use crate::color::Rgba;
use crate::factory::ColorMapping;

/// Minimum pixel count before rows are colored in parallel
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 4096; // 64x64 or larger

/// Default cap on pixels per render (1 GiB of RGBA)
pub const DEFAULT_MAX_PIXELS: usize = 1 << 28;

/// Write `color` as 4 RGBA bytes at the start of `out`.
///
/// Alpha becomes `round(a * 255)` clamped to [0, 255]. Buffers shorter
/// than 4 bytes are left untouched.
#[inline]
pub fn write_color_to_buffer(color: Rgba, out: &mut [u8]) {
    if let Some(px) = out.get_mut(..4) {
        px[0] = color.r;
        px[1] = color.g;
        px[2] = color.b;
        px[3] = (color.a * 255.0).round().clamp(0.0, 255.0) as u8;
    }
}

/// Color a row-major grid of raw values into an RGBA buffer.
///
/// Pixels with no corresponding value in `data` stay transparent. Rows are
/// split across the rayon pool once the grid reaches `parallel_threshold`
/// pixels. Fails when the buffer size overflows or cannot be allocated.
pub fn render_raster(
    data: &[f32],
    width: usize,
    height: usize,
    mapping: &ColorMapping,
    parallel_threshold: usize,
) -> PlanscapeResult<Vec<u8>> {
    let len = rgba_len(width, height).ok_or_else(|| {
        PlanscapeError::RenderError(format!("Raster size {}x{} overflows", width, height))
    })?;

    let mut pixels = Vec::new();
    pixels.try_reserve_exact(len).map_err(|e| {
        PlanscapeError::RenderError(format!(
            "Cannot allocate {} bytes for {}x{} raster: {}",
            len, width, height, e
        ))
    })?;
    pixels.resize(len, 0);

    if len == 0 {
        return Ok(pixels);
    }

    let color_row = |(y, row): (usize, &mut [u8])| {
        let start = y * width;
        let values = data.get(start..).unwrap_or(&[]);
        for (px, &value) in row.chunks_exact_mut(4).zip(values.iter()) {
            mapping.write_pixel(value as f64, px);
        }
    };

    if width * height >= parallel_threshold {
        pixels
            .par_chunks_mut(width * 4)
            .enumerate()
            .for_each(color_row);
    } else {
        pixels.chunks_mut(width * 4).enumerate().for_each(color_row);
    }

    Ok(pixels)
}

/// Byte length of a `width` x `height` RGBA buffer, `None` on overflow.
pub fn rgba_len(width: usize, height: usize) -> Option<usize> {
    width.checked_mul(height)?.checked_mul(4)
}
