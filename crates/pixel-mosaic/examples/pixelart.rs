//! Example: pixel-art grid generation from an image file.
//!
//! Loads an image, trims its black margins, averages the content into a
//! block grid and writes the grid as JSON next to the input. The stages run
//! individually here so each intermediate result can be printed; the
//! one-call equivalent is `pixel_mosaic::pixelate`.
//!
//! Run from the workspace root:
//!   cargo run -p pixel-mosaic --example pixelart -- --help
//!   cargo run -p pixel-mosaic --example pixelart -- --input photo.png --target-count 256

use std::time::Instant;

use anyhow::{Context, Result, bail};
use clap::Parser;
use image::ImageReader;
use pixel_mosaic::{BlockSpec, PixelBuffer, average_blocks, fit_block_size, trim_black_margins};
use serde::Serialize;

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(about = "Average an image into a pixel-art color grid")]
struct Args {
    /// Path to the input image (default: data/input.png)
    #[arg(long, default_value = "data/input.png")]
    input: String,

    /// Fixed block edge length in pixels
    #[arg(long)]
    block_size: Option<usize>,

    /// Approximate number of blocks to aim for; mutually exclusive with
    /// --block-size (default: 256 when neither is given)
    #[arg(long)]
    target_count: Option<usize>,

    /// Output JSON path (default: <input stem>_grid.json next to input)
    #[arg(long)]
    out: Option<String>,
}

// ── JSON DTOs ─────────────────────────────────────────────────────────────────

#[derive(Serialize)]
struct ColorDto {
    r: u8,
    g: u8,
    b: u8,
    a: u8,
}

#[derive(Serialize)]
struct RegionDto {
    x: usize,
    y: usize,
    width: usize,
    height: usize,
}

#[derive(Serialize)]
struct GridResult {
    source_width: usize,
    source_height: usize,
    region: RegionDto,
    block_size: usize,
    columns: usize,
    rows: usize,
    /// Wall-clock time for the whole transform, in milliseconds.
    elapsed_ms: f64,
    colors: Vec<ColorDto>,
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let args = Args::parse();

    let spec = match (args.block_size, args.target_count) {
        (Some(size), None) => BlockSpec::Fixed(size),
        (None, Some(count)) => BlockSpec::FitToCount(count),
        (None, None) => BlockSpec::FitToCount(256),
        (Some(_), Some(_)) => bail!("--block-size and --target-count are mutually exclusive"),
    };

    let img_path = &args.input;
    let out_path = args.out.unwrap_or_else(|| {
        let p = std::path::Path::new(img_path);
        let stem = p.file_stem().unwrap_or_default().to_string_lossy();
        let dir = p.parent().unwrap_or(std::path::Path::new("."));
        dir.join(format!("{stem}_grid.json"))
            .to_string_lossy()
            .into_owned()
    });

    let rgba = ImageReader::open(img_path)
        .with_context(|| format!("opening {img_path}"))?
        .decode()
        .with_context(|| format!("decoding {img_path}"))?
        .into_rgba8();

    let width = rgba.width() as usize;
    let height = rgba.height() as usize;
    let buf = PixelBuffer::from_rgba_bytes(width, height, rgba.as_raw())
        .context("building pixel buffer")?;

    println!("loaded {img_path}: {width}x{height}");

    let t0 = Instant::now();
    let view = buf.as_view();

    let region = trim_black_margins(&view);
    println!(
        "content region: {}x{} at ({}, {})",
        region.width, region.height, region.x, region.y
    );

    let block_size = match spec {
        BlockSpec::Fixed(size) => size,
        BlockSpec::FitToCount(target) => {
            if region.is_empty() {
                bail!("{img_path} trimmed to nothing; no region to fit a block size against");
            }
            fit_block_size(region.width, region.height, target)?
        }
    };
    println!("block size: {block_size}");

    let grid = average_blocks(&view, region, block_size)?;
    let elapsed_ms = t0.elapsed().as_secs_f64() * 1e3;
    println!(
        "grid: {}x{} ({} blocks)  ({elapsed_ms:.2} ms)",
        grid.columns(),
        grid.rows(),
        grid.len()
    );

    let colors = grid
        .colors()
        .iter()
        .map(|c| ColorDto {
            r: c.r,
            g: c.g,
            b: c.b,
            a: c.a,
        })
        .collect();

    let result = GridResult {
        source_width: width,
        source_height: height,
        region: RegionDto {
            x: region.x,
            y: region.y,
            width: region.width,
            height: region.height,
        },
        block_size: grid.block_size(),
        columns: grid.columns(),
        rows: grid.rows(),
        elapsed_ms,
        colors,
    };

    let out_file =
        std::fs::File::create(&out_path).with_context(|| format!("creating {out_path}"))?;
    serde_json::to_writer_pretty(out_file, &result)
        .with_context(|| format!("writing JSON to {out_path}"))?;

    println!("results written to {out_path}");
    Ok(())
}
