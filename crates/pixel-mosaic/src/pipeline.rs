//! Strict transform pipeline: trim, resolve the block size, average.
//!
//! Each stage's output feeds the next explicitly; no state is shared
//! between stages or across calls.

use pm_core::{Error, PixelView};
use pm_mosaic::{ColorGrid, average_blocks, fit_block_size};
use pm_trim::trim_black_margins;

/// Block size selection for [`pixelate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockSpec {
    /// Use the given edge length as-is.
    Fixed(usize),
    /// Search for an edge that tiles the trimmed region evenly, aiming for
    /// roughly this many blocks.
    FitToCount(usize),
}

/// Runs the full transform: trims black margins, resolves the block size,
/// then averages the trimmed region into a grid.
///
/// With [`BlockSpec::Fixed`] an input that trims to nothing produces an
/// empty grid. [`BlockSpec::FitToCount`] needs a non-empty trimmed region
/// to fit against and fails with [`Error::EmptyRegion`] otherwise.
pub fn pixelate(src: &PixelView<'_>, spec: BlockSpec) -> Result<ColorGrid, Error> {
    let region = trim_black_margins(src);

    let block_size = match spec {
        BlockSpec::Fixed(size) => size,
        BlockSpec::FitToCount(target) => {
            if region.is_empty() {
                return Err(Error::EmptyRegion);
            }
            fit_block_size(region.width, region.height, target)?
        }
    };

    average_blocks(src, region, block_size)
}

#[cfg(test)]
mod tests {
    use pm_core::{Error, PixelBuffer, Rgba8};

    use crate::pipeline::{BlockSpec, pixelate};

    fn framed_square(size: usize, margin: usize, color: Rgba8) -> PixelBuffer {
        let mut buf = PixelBuffer::new_fill(size, size, Rgba8::BLACK);
        for y in margin..(size - margin) {
            for x in margin..(size - margin) {
                buf.pixels_mut()[y * size + x] = color;
            }
        }
        buf
    }

    #[test]
    fn fixed_spec_trims_then_averages() {
        // Red 4x4 at (2, 2) in an 8x8 black frame trims to a region at
        // (3, 3): the origin shift makes the right and bottom tiles take in
        // black frame pixels.
        let buf = framed_square(8, 2, Rgba8::new(200, 0, 0, 255));

        let grid = pixelate(&buf.as_view(), BlockSpec::Fixed(2)).expect("valid grid");
        assert_eq!(grid.columns(), 2);
        assert_eq!(grid.rows(), 2);
        assert_eq!(
            grid.colors(),
            &[
                Rgba8::new(200, 0, 0, 255),
                Rgba8::new(100, 0, 0, 255),
                Rgba8::new(100, 0, 0, 255),
                Rgba8::new(50, 0, 0, 255),
            ]
        );
    }

    #[test]
    fn fit_spec_tiles_trimmed_region() {
        // 8x8 content in a 12x12 frame; aiming for 16 blocks fits a block
        // edge of 4 and the grid tiles the region exactly.
        let buf = framed_square(12, 2, Rgba8::new(0, 120, 0, 255));

        let grid = pixelate(&buf.as_view(), BlockSpec::FitToCount(16)).expect("valid grid");
        assert_eq!(grid.block_size(), 4);
        assert_eq!(grid.columns(), 2);
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.len(), 4);
    }

    #[test]
    fn fixed_spec_on_all_black_gives_empty_grid() {
        let buf = PixelBuffer::new_fill(6, 6, Rgba8::BLACK);
        let grid = pixelate(&buf.as_view(), BlockSpec::Fixed(3)).expect("empty grid");

        assert!(grid.is_empty());
        assert_eq!(grid.block_size(), 3);
    }

    #[test]
    fn fit_spec_on_all_black_is_an_error() {
        let buf = PixelBuffer::new_fill(6, 6, Rgba8::BLACK);
        assert_eq!(
            pixelate(&buf.as_view(), BlockSpec::FitToCount(9)),
            Err(Error::EmptyRegion)
        );
    }

    #[test]
    fn fixed_zero_block_size_is_invalid() {
        let buf = PixelBuffer::new_fill(6, 6, Rgba8::WHITE);
        assert!(matches!(
            pixelate(&buf.as_view(), BlockSpec::Fixed(0)),
            Err(Error::InvalidConfig { .. })
        ));
    }
}
