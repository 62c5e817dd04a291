//! Tests for renderer configuration.
//!
//! Kept in their own test binary because they mutate process environment.

use raster_renderer::cache::DEFAULT_CAPACITY;
use raster_renderer::pixel::{DEFAULT_MAX_PIXELS, DEFAULT_PARALLEL_THRESHOLD};
use raster_renderer::RendererConfig;

#[test]
fn test_default_config() {
    let config = RendererConfig::default();
    assert_eq!(config.color_cache_capacity, DEFAULT_CAPACITY);
    assert_eq!(config.color_cache_capacity, 10_000);
    assert_eq!(config.parallel_threshold, DEFAULT_PARALLEL_THRESHOLD);
    assert_eq!(config.max_pixels, DEFAULT_MAX_PIXELS);
    assert!(config.validate().is_ok());
}

#[test]
fn test_validate_zero_capacity() {
    let config = RendererConfig {
        color_cache_capacity: 0,
        ..RendererConfig::default()
    };
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("color_cache_capacity"));
}

#[test]
fn test_validate_zero_max_pixels() {
    let config = RendererConfig {
        max_pixels: 0,
        ..RendererConfig::default()
    };
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("max_pixels"));
}

#[test]
fn test_from_env() {
    std::env::set_var("COLOR_CACHE_CAPACITY", " 250 ");
    std::env::set_var("RENDER_PARALLEL_THRESHOLD", "not-a-number");

    let config = RendererConfig::from_env();
    assert_eq!(config.color_cache_capacity, 250);
    assert_eq!(config.parallel_threshold, DEFAULT_PARALLEL_THRESHOLD);

    std::env::set_var("RENDER_PARALLEL_THRESHOLD", "0");
    assert_eq!(RendererConfig::from_env().parallel_threshold, 0);

    std::env::set_var("RENDER_MAX_PIXELS", "65536");
    assert_eq!(RendererConfig::from_env().max_pixels, 65536);
    std::env::remove_var("RENDER_MAX_PIXELS");

    std::env::remove_var("COLOR_CACHE_CAPACITY");
    std::env::remove_var("RENDER_PARALLEL_THRESHOLD");
    assert_eq!(RendererConfig::from_env(), RendererConfig::default());
}
