//! PNG encoding for colored rasters.
//!
//! Styled rasters usually contain few distinct colors (one per VALUES or
//! INTERVALS entry), so [`encode_png`] writes an indexed PNG (color type 3)
//! whenever the image has at most 256 colors and falls back to RGBA
//! (color type 6) otherwise.

use planscape_common::{PlanscapeError, PlanscapeResult};
use std::collections::HashMap;
use std::io::Write;

use crate::pixel::rgba_len;

/// Maximum colors for indexed PNG (PNG8)
const MAX_PALETTE_SIZE: usize = 256;

/// Largest width or height an IHDR chunk may carry (2^31 - 1)
pub const MAX_DIMENSION: usize = (1 << 31) - 1;

const PNG_SIGNATURE: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];

const COLOR_TYPE_INDEXED: u8 = 3;
const COLOR_TYPE_RGBA: u8 = 6;

/// Encode an RGBA buffer, choosing indexed or truecolor output.
pub fn encode_png(pixels: &[u8], width: usize, height: usize) -> PlanscapeResult<Vec<u8>> {
    check_dimensions(pixels, width, height)?;

    match extract_palette(pixels) {
        Some((palette, indices)) => encode_indexed(width, height, &palette, &indices),
        None => encode_rgba(pixels, width, height),
    }
}

/// Encode an RGBA buffer as a truecolor PNG.
pub fn encode_rgba(pixels: &[u8], width: usize, height: usize) -> PlanscapeResult<Vec<u8>> {
    check_dimensions(pixels, width, height)?;

    let mut png = Vec::with_capacity(pixels.len() / 2 + 64);
    png.extend_from_slice(&PNG_SIGNATURE);
    write_chunk(&mut png, b"IHDR", &ihdr(width, height, COLOR_TYPE_RGBA));

    let idat = deflate_scanlines(pixels, width * 4, height)?;
    write_chunk(&mut png, b"IDAT", &idat);
    write_chunk(&mut png, b"IEND", &[]);

    Ok(png)
}

fn encode_indexed(
    width: usize,
    height: usize,
    palette: &[[u8; 4]],
    indices: &[u8],
) -> PlanscapeResult<Vec<u8>> {
    let mut png = Vec::with_capacity(indices.len() / 4 + palette.len() * 4 + 64);
    png.extend_from_slice(&PNG_SIGNATURE);
    write_chunk(&mut png, b"IHDR", &ihdr(width, height, COLOR_TYPE_INDEXED));

    let plte: Vec<u8> = palette.iter().flat_map(|c| [c[0], c[1], c[2]]).collect();
    write_chunk(&mut png, b"PLTE", &plte);

    // tRNS only when some palette entry isn't opaque
    if palette.iter().any(|c| c[3] < 255) {
        let trns: Vec<u8> = palette.iter().map(|c| c[3]).collect();
        write_chunk(&mut png, b"tRNS", &trns);
    }

    let idat = deflate_scanlines(indices, width, height)?;
    write_chunk(&mut png, b"IDAT", &idat);
    write_chunk(&mut png, b"IEND", &[]);

    Ok(png)
}

fn check_dimensions(pixels: &[u8], width: usize, height: usize) -> PlanscapeResult<()> {
    if width == 0 || height == 0 {
        return Err(PlanscapeError::RenderError(format!(
            "Image dimensions must be non-zero, got {}x{}",
            width, height
        )));
    }
    if width > MAX_DIMENSION || height > MAX_DIMENSION {
        return Err(PlanscapeError::RenderError(format!(
            "Image dimensions {}x{} exceed PNG limits",
            width, height
        )));
    }

    let expected = rgba_len(width, height);
    if expected != Some(pixels.len()) {
        return Err(PlanscapeError::RenderError(format!(
            "Expected {} RGBA bytes for {}x{}, got {}",
            expected.map_or_else(|| "more than usize::MAX".to_string(), |n| n.to_string()),
            width,
            height,
            pixels.len()
        )));
    }
    Ok(())
}

/// Palette and per-pixel indices, or `None` past 256 colors.
fn extract_palette(pixels: &[u8]) -> Option<(Vec<[u8; 4]>, Vec<u8>)> {
    let mut lookup: HashMap<[u8; 4], u8> = HashMap::with_capacity(MAX_PALETTE_SIZE);
    let mut palette: Vec<[u8; 4]> = Vec::with_capacity(MAX_PALETTE_SIZE);
    let mut indices = Vec::with_capacity(pixels.len() / 4);

    for px in pixels.chunks_exact(4) {
        let color = [px[0], px[1], px[2], px[3]];
        let index = match lookup.get(&color) {
            Some(&idx) => idx,
            None => {
                if palette.len() >= MAX_PALETTE_SIZE {
                    return None;
                }
                let idx = palette.len() as u8;
                palette.push(color);
                lookup.insert(color, idx);
                idx
            }
        };
        indices.push(index);
    }

    Some((palette, indices))
}

fn ihdr(width: usize, height: usize, color_type: u8) -> Vec<u8> {
    let mut data = Vec::with_capacity(13);
    data.extend_from_slice(&(width as u32).to_be_bytes());
    data.extend_from_slice(&(height as u32).to_be_bytes());
    data.push(8); // bit depth
    data.push(color_type);
    data.push(0); // compression method
    data.push(0); // filter method
    data.push(0); // interlace method
    data
}

/// Prefix each row with filter type 0 and zlib-compress.
fn deflate_scanlines(data: &[u8], row_bytes: usize, height: usize) -> PlanscapeResult<Vec<u8>> {
    let mut raw = Vec::with_capacity(height * (row_bytes + 1));
    for row in data.chunks_exact(row_bytes).take(height) {
        raw.push(0);
        raw.extend_from_slice(row);
    }

    let compress = |raw: &[u8]| -> std::io::Result<Vec<u8>> {
        let mut encoder =
            flate2::write::ZlibEncoder::new(Vec::new(), flate2::Compression::fast());
        encoder.write_all(raw)?;
        encoder.finish()
    };

    compress(&raw)
        .map_err(|e| PlanscapeError::RenderError(format!("IDAT compression failed: {}", e)))
}

fn write_chunk(png: &mut Vec<u8>, chunk_type: &[u8; 4], data: &[u8]) {
    png.extend_from_slice(&(data.len() as u32).to_be_bytes());
    png.extend_from_slice(chunk_type);
    png.extend_from_slice(data);

    let mut hasher = crc32fast::Hasher::new();
    hasher.update(chunk_type);
    hasher.update(data);
    png.extend_from_slice(&hasher.finalize().to_be_bytes());
}
