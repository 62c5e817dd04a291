//! End-to-end tests for colorize jobs.

use raster_colorize::{read_raster, run, ColorizeJob, StyleSource};
use raster_renderer::RasterRenderer;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const STYLE: &str = r##"{
    "map_type": "INTERVALS",
    "entries": [
        {"value": 10, "color": "#ff0000"},
        {"value": 20, "color": "#00ff00"}
    ],
    "no_data": {"values": [-9999]}
}"##;

const LAYER: &str = r##"{
    "id": 11,
    "name": "Stand Age",
    "style": {
        "map_type": "INTERVALS",
        "entries": [
            {"value": 20, "color": "#00ff00", "label": "Old"},
            {"value": 10, "color": "#ff0000", "label": "Young"}
        ]
    },
    "metadata": {"units": "years"}
}"##;

fn write_file(dir: &TempDir, name: &str, contents: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

fn raster_bytes(values: &[f32]) -> Vec<u8> {
    values.iter().flat_map(|v| v.to_le_bytes()).collect()
}

fn job(source: StyleSource, input: Option<PathBuf>, output: Option<&Path>) -> ColorizeJob {
    ColorizeJob {
        source,
        input,
        width: 2,
        height: 2,
        output: output.map(Path::to_path_buf),
        legend: false,
    }
}

#[test]
fn test_read_raster_little_endian() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "grid.f32", &raster_bytes(&[1.5, -2.0, 0.0, 1e6]));

    let values = read_raster(&path, 2, 2).unwrap();
    assert_eq!(values, vec![1.5, -2.0, 0.0, 1e6]);
}

#[test]
fn test_read_raster_rejects_partial_values() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "grid.f32", &[0u8; 7]);
    assert!(read_raster(&path, 1, 1).is_err());
}

#[test]
fn test_read_raster_rejects_oversized_grid() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "grid.f32", &raster_bytes(&[1.0; 5]));
    assert!(read_raster(&path, 2, 2).is_err());
}

#[test]
fn test_read_raster_allows_short_grid() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "grid.f32", &raster_bytes(&[1.0; 3]));
    assert_eq!(read_raster(&path, 2, 2).unwrap().len(), 3);
}

#[test]
fn test_read_raster_overflowing_size() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "grid.f32", &raster_bytes(&[1.0]));

    let err = read_raster(&path, usize::MAX, 2).unwrap_err();
    assert!(err.to_string().contains("overflows"));
}

#[test]
fn test_style_to_png() {
    let dir = TempDir::new().unwrap();
    let style = write_file(&dir, "style.json", STYLE.as_bytes());
    let input = write_file(&dir, "grid.f32", &raster_bytes(&[5.0, 15.0, -9999.0, 50.0]));
    let output = dir.path().join("out.png");

    let renderer = RasterRenderer::default();
    let result = run(
        &job(StyleSource::Style(style), Some(input), Some(&output)),
        &renderer,
    )
    .unwrap();

    let png = std::fs::read(&output).unwrap();
    assert_eq!(result.png_size, Some(png.len()));
    assert_eq!(&png[0..8], &[137, 80, 78, 71, 13, 10, 26, 10]);
    assert!(result.legend.is_none());
}

#[test]
fn test_layer_legend() {
    let dir = TempDir::new().unwrap();
    let layer = write_file(&dir, "layer.json", LAYER.as_bytes());

    let mut job = job(StyleSource::Layer(layer), None, None);
    job.legend = true;

    let result = run(&job, &RasterRenderer::default()).unwrap();
    let legend = result.legend.unwrap();

    assert_eq!(legend.title, "Stand Age (years)");
    assert_eq!(legend.entries[0].entry_label, "Young");
    assert_eq!(legend.entries[1].entry_label, "Old");

    let json: serde_json::Value = serde_json::from_str(&legend.to_json().unwrap()).unwrap();
    assert_eq!(json["entries"][0]["colorHex"], "#ff0000");
    assert!(result.png_size.is_none());
}

#[test]
fn test_legend_requires_layer() {
    let dir = TempDir::new().unwrap();
    let style = write_file(&dir, "style.json", STYLE.as_bytes());

    let mut job = job(StyleSource::Style(style), None, None);
    job.legend = true;

    assert!(run(&job, &RasterRenderer::default()).is_err());
}

#[test]
fn test_png_requires_input() {
    let dir = TempDir::new().unwrap();
    let style = write_file(&dir, "style.json", STYLE.as_bytes());
    let output = dir.path().join("out.png");

    let err = run(
        &job(StyleSource::Style(style), None, Some(&output)),
        &RasterRenderer::default(),
    )
    .unwrap_err();
    assert!(err.to_string().contains("--input"));
    assert!(!output.exists());
}

#[test]
fn test_missing_style_file() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.json");

    let err = run(
        &job(StyleSource::Style(missing), None, None),
        &RasterRenderer::default(),
    )
    .unwrap_err();
    assert!(err.to_string().contains("Failed to load style"));
}

#[test]
fn test_oversized_dimensions_rejected_before_render() {
    let dir = TempDir::new().unwrap();
    let style = write_file(&dir, "style.json", STYLE.as_bytes());
    let input = write_file(&dir, "grid.f32", &raster_bytes(&[5.0]));
    let output = dir.path().join("out.png");

    let renderer = RasterRenderer::default();
    for (width, height) in [(100_000, 100_000), (usize::MAX, usize::MAX), (1 << 31, 1)] {
        let mut job = job(
            StyleSource::Style(style.clone()),
            Some(input.clone()),
            Some(&output),
        );
        job.width = width;
        job.height = height;

        assert!(run(&job, &renderer).is_err(), "{}x{}", width, height);
    }

    assert!(!output.exists());
    assert_eq!(renderer.cache_stats().misses, 0);
}
