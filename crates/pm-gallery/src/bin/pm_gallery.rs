use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use image::RgbaImage;
use pixel_mosaic::{BlockSpec, pixelate};
use pm_core::{PixelBuffer, PixelView, Rect};
use pm_mosaic::{ColorGrid, average_blocks};
use pm_trim::{black_margins, trim_black_margins};
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(name = "pm_gallery")]
#[command(about = "Run pixel-mosaic transforms on external fixtures")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    #[command(name = "trim")]
    Trim(TrimArgs),
    #[command(name = "mosaic")]
    Mosaic(MosaicArgs),
    #[command(name = "pixelate")]
    Pixelate(PixelateArgs),
}

#[derive(Args, Debug, Clone)]
struct CommonArgs {
    #[arg(long, required = true)]
    input: PathBuf,
    #[arg(long, default_value = "docs/fig/raw")]
    out: PathBuf,
}

#[derive(Args, Debug, Clone)]
struct TrimArgs {
    #[command(flatten)]
    common: CommonArgs,
}

#[derive(Args, Debug, Clone)]
struct MosaicArgs {
    #[command(flatten)]
    common: CommonArgs,
    #[arg(long, default_value_t = 8)]
    block_size: usize,
}

#[derive(Args, Debug, Clone)]
struct PixelateArgs {
    #[command(flatten)]
    common: CommonArgs,
    #[arg(long)]
    block_size: Option<usize>,
    #[arg(long)]
    target_count: Option<usize>,
}

#[derive(Debug, Clone, Copy, Serialize)]
struct RectDto {
    x: usize,
    y: usize,
    width: usize,
    height: usize,
}

#[derive(Debug, Clone, Copy, Serialize)]
struct MarginsDto {
    left: usize,
    right: usize,
    top: usize,
    bottom: usize,
}

#[derive(Debug, Clone, Serialize)]
struct MetaTrim {
    width: usize,
    height: usize,
    margins: Option<MarginsDto>,
    region: RectDto,
    pixel_rule: &'static str,
}

#[derive(Debug, Clone, Serialize)]
struct MetaMosaic {
    width: usize,
    height: usize,
    block_size: usize,
    columns: usize,
    rows: usize,
    policy: &'static str,
}

#[derive(Debug, Clone, Serialize)]
struct MetaPixelate {
    width: usize,
    height: usize,
    region: RectDto,
    requested_block_size: Option<usize>,
    requested_target_count: Option<usize>,
    block_size: usize,
    columns: usize,
    rows: usize,
}

#[derive(Debug, Clone, Serialize)]
struct GridDto {
    columns: usize,
    rows: usize,
    block_size: usize,
    colors: Vec<[u8; 4]>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.cmd {
        Command::Trim(args) => run_trim(args),
        Command::Mosaic(args) => run_mosaic(args),
        Command::Pixelate(args) => run_pixelate(args),
    }
}

fn run_trim(args: TrimArgs) -> Result<()> {
    let case_dir = prepare_case(&args.common, "trim")?;
    let buf = load_input_rgba(&args.common.input)?;
    let view = buf.as_view();

    let margins = black_margins(&view);
    let region = trim_black_margins(&view);

    if !region.is_empty() {
        let cropped = crop_rgba(&view, region);
        save_rgba_raw(
            case_dir.join("trimmed.png"),
            region.width,
            region.height,
            cropped,
        )?;
    }

    write_json(
        case_dir.join("meta.json"),
        &MetaTrim {
            width: buf.width(),
            height: buf.height(),
            margins: margins.map(|m| MarginsDto {
                left: m.left,
                right: m.right,
                top: m.top,
                bottom: m.bottom,
            }),
            region: rect_dto(region),
            pixel_rule: "black iff all color channels are zero; alpha ignored",
        },
    )?;

    Ok(())
}

fn run_mosaic(args: MosaicArgs) -> Result<()> {
    let case_dir = prepare_case(&args.common, "mosaic")?;
    let buf = load_input_rgba(&args.common.input)?;
    let frame = Rect {
        x: 0,
        y: 0,
        width: buf.width(),
        height: buf.height(),
    };

    let grid = average_blocks(&buf.as_view(), frame, args.block_size)
        .context("averaging the full frame")?;

    if !grid.is_empty() {
        let (w, h, data) = render_grid_rgba(&grid);
        save_rgba_raw(case_dir.join("mosaic.png"), w, h, data)?;
    }

    write_json(case_dir.join("grid.json"), &grid_dto(&grid))?;
    write_json(
        case_dir.join("meta.json"),
        &MetaMosaic {
            width: buf.width(),
            height: buf.height(),
            block_size: args.block_size,
            columns: grid.columns(),
            rows: grid.rows(),
            policy: "tiles clipped to the image; partial tiles average their covered pixels",
        },
    )?;

    Ok(())
}

fn run_pixelate(args: PixelateArgs) -> Result<()> {
    let spec = match (args.block_size, args.target_count) {
        (Some(size), None) => BlockSpec::Fixed(size),
        (None, Some(count)) => BlockSpec::FitToCount(count),
        (None, None) => BlockSpec::FitToCount(256),
        (Some(_), Some(_)) => bail!("--block-size and --target-count are mutually exclusive"),
    };

    let case_dir = prepare_case(&args.common, "pixelate")?;
    let buf = load_input_rgba(&args.common.input)?;
    let view = buf.as_view();

    let region = trim_black_margins(&view);
    let grid = pixelate(&view, spec).context("running the pixelate pipeline")?;

    if !grid.is_empty() {
        let (w, h, data) = render_grid_rgba(&grid);
        save_rgba_raw(case_dir.join("mosaic.png"), w, h, data)?;
    }

    write_json(case_dir.join("grid.json"), &grid_dto(&grid))?;
    write_json(
        case_dir.join("meta.json"),
        &MetaPixelate {
            width: buf.width(),
            height: buf.height(),
            region: rect_dto(region),
            requested_block_size: args.block_size,
            requested_target_count: args.target_count,
            block_size: grid.block_size(),
            columns: grid.columns(),
            rows: grid.rows(),
        },
    )?;

    Ok(())
}

fn prepare_case(common: &CommonArgs, case_name: &str) -> Result<PathBuf> {
    ensure_file_exists(&common.input, "input")?;

    let case_dir = common.out.join(case_name);
    fs::create_dir_all(&case_dir)
        .with_context(|| format!("creating output directory {}", case_dir.display()))?;

    fs::copy(&common.input, case_dir.join("input.png")).with_context(|| {
        format!(
            "copying input {} -> {}",
            common.input.display(),
            case_dir.join("input.png").display()
        )
    })?;

    Ok(case_dir)
}

fn load_input_rgba(path: &Path) -> Result<PixelBuffer> {
    let dyn_img =
        image::open(path).with_context(|| format!("opening input image {}", path.display()))?;
    let rgba = dyn_img.to_rgba8();
    let (w, h) = rgba.dimensions();

    PixelBuffer::from_rgba_bytes(w as usize, h as usize, rgba.as_raw())
        .with_context(|| format!("constructing pixel buffer from {}", path.display()))
}

fn crop_rgba(view: &PixelView<'_>, region: Rect) -> Vec<u8> {
    let mut out = Vec::with_capacity(region.area() * 4);
    for y in region.y..region.bottom() {
        for px in &view.row(y)[region.x..region.right()] {
            out.extend_from_slice(&px.to_array());
        }
    }
    out
}

/// Expands each grid cell into a `block_size`-square of output pixels.
fn render_grid_rgba(grid: &ColorGrid) -> (usize, usize, Vec<u8>) {
    let width = grid.columns() * grid.block_size();
    let height = grid.rows() * grid.block_size();
    let mut out = Vec::with_capacity(width * height * 4);

    for row in 0..grid.rows() {
        for _ in 0..grid.block_size() {
            for col in 0..grid.columns() {
                let px = grid.get(col, row).expect("in-range grid cell").to_array();
                for _ in 0..grid.block_size() {
                    out.extend_from_slice(&px);
                }
            }
        }
    }

    (width, height, out)
}

fn save_rgba_raw(path: PathBuf, width: usize, height: usize, data: Vec<u8>) -> Result<()> {
    let rgba = RgbaImage::from_raw(width as u32, height as u32, data)
        .context("constructing RgbaImage from raw bytes")?;
    rgba.save(&path)
        .with_context(|| format!("saving image {}", path.display()))
}

fn write_json(path: PathBuf, value: &impl Serialize) -> Result<()> {
    let bytes = serde_json::to_vec_pretty(value).context("serializing json")?;
    fs::write(&path, bytes).with_context(|| format!("writing json {}", path.display()))
}

fn rect_dto(r: Rect) -> RectDto {
    RectDto {
        x: r.x,
        y: r.y,
        width: r.width,
        height: r.height,
    }
}

fn grid_dto(grid: &ColorGrid) -> GridDto {
    GridDto {
        columns: grid.columns(),
        rows: grid.rows(),
        block_size: grid.block_size(),
        colors: grid.colors().iter().map(|c| c.to_array()).collect(),
    }
}

fn ensure_file_exists(path: &Path, what: &str) -> Result<()> {
    if !path.exists() {
        bail!("{} file does not exist: {}", what, path.display());
    }
    if !path.is_file() {
        bail!("{} path is not a file: {}", what, path.display());
    }
    Ok(())
}
