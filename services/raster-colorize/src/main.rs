//! raster-colorize: render a raw raster through a Planscape layer style.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use raster_colorize::{run, ColorizeJob, StyleSource};
use raster_renderer::{RasterRenderer, RendererConfig};

#[derive(Parser, Debug)]
#[command(name = "raster-colorize")]
#[command(about = "Color a raw f32 raster with a layer style and write a PNG or legend")]
struct Args {
    /// Style descriptor JSON file
    #[arg(long, conflicts_with = "layer", required_unless_present = "layer")]
    style: Option<PathBuf>,

    /// Data layer JSON file (style plus metadata)
    #[arg(long)]
    layer: Option<PathBuf>,

    /// Raw little-endian f32 raster, row-major
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Raster width in pixels
    #[arg(long, default_value = "256")]
    width: usize,

    /// Raster height in pixels
    #[arg(long, default_value = "256")]
    height: usize,

    /// Output PNG path
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the layer legend as JSON
    #[arg(long)]
    legend: bool,

    /// Log level or filter directive, overridden by RUST_LOG
    #[arg(long, default_value = "info", env = "LOG_LEVEL")]
    log_level: String,

    /// Emit logs as JSON lines
    #[arg(long, env = "LOG_JSON")]
    log_json: bool,
}

fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    // Logs go to stderr so legend JSON on stdout stays clean
    let logger = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr);
    if args.log_json {
        logger.json().init();
    } else {
        logger.init();
    }

    let config = RendererConfig::from_env();
    info!(
        cache_capacity = config.color_cache_capacity,
        parallel_threshold = config.parallel_threshold,
        max_pixels = config.max_pixels,
        "Starting raster-colorize"
    );
    let renderer = RasterRenderer::new(config)?;

    // clap guarantees exactly one of --style / --layer
    let source = match args.style {
        Some(path) => StyleSource::Style(path),
        None => StyleSource::Layer(args.layer.unwrap_or_default()),
    };

    let job = ColorizeJob {
        source,
        input: args.input,
        width: args.width,
        height: args.height,
        output: args.output,
        legend: args.legend,
    };

    let output = run(&job, &renderer)?;

    if let Some(legend) = output.legend {
        println!("{}", legend.to_json()?);
    }

    let stats = renderer.cache_stats();
    info!(
        hits = stats.hits,
        misses = stats.misses,
        "Done"
    );

    Ok(())
}
