use pm_core::{Error, PixelView, Rect, Rgba8};

use crate::grid::ColorGrid;

#[inline]
fn grid_dims(region: Rect, block_size: usize) -> (usize, usize) {
    (
        region.width.div_ceil(block_size),
        region.height.div_ceil(block_size),
    )
}

/// Averages `block_size`-square tiles of `region` into a [`ColorGrid`].
///
/// Tiles anchor at the region origin and advance in whole `block_size`
/// steps per axis; partial tiles at the far edges are kept. Sampling bounds
/// and arithmetic follow the crate-level policies. Emission is row-major.
pub fn average_blocks(
    src: &PixelView<'_>,
    region: Rect,
    block_size: usize,
) -> Result<ColorGrid, Error> {
    if block_size == 0 {
        return Err(Error::InvalidConfig {
            what: "block size must be positive",
        });
    }

    if !region.fits_within(src.width(), src.height()) {
        return Err(Error::OutOfBounds);
    }

    if region.is_empty() {
        return Ok(ColorGrid::new(0, 0, block_size, Vec::new()));
    }

    let (columns, rows) = grid_dims(region, block_size);
    let mut colors = Vec::with_capacity(columns * rows);

    for by in 0..rows {
        let y0 = region.y + by * block_size;
        for bx in 0..columns {
            let x0 = region.x + bx * block_size;
            let tile = Rect {
                x: x0,
                y: y0,
                width: block_size,
                height: block_size,
            }
            .clip(src.width(), src.height());
            colors.push(mean_color(src, tile));
        }
    }

    Ok(ColorGrid::new(columns, rows, block_size, colors))
}

fn mean_color(src: &PixelView<'_>, tile: Rect) -> Rgba8 {
    let count = tile.area() as u64;
    if count == 0 {
        return Rgba8::TRANSPARENT;
    }

    let mut r = 0u64;
    let mut g = 0u64;
    let mut b = 0u64;
    let mut a = 0u64;
    for y in tile.y..tile.bottom() {
        for &px in &src.row(y)[tile.x..tile.right()] {
            r += px.r as u64;
            g += px.g as u64;
            b += px.b as u64;
            a += px.a as u64;
        }
    }

    Rgba8::new(
        (r / count) as u8,
        (g / count) as u8,
        (b / count) as u8,
        (a / count) as u8,
    )
}
