//! Block averaging into pixel-art color grids.
//!
//! ## Tiling policy
//! Tiles anchor at the region origin and advance in whole `block_size`
//! steps per axis. Partial tiles at the right and bottom edges are kept and
//! averaged over the pixels they cover, so the grid spans
//! `ceil(region_extent / block_size)` cells per axis.
//!
//! ## Sampling bounds
//! Tiles are clipped to the image, never to the region: a tile overrunning
//! the region edge picks up neighboring image pixels, while nothing is ever
//! read outside the image. A tile left with no pixel averages to
//! transparent black.
//!
//! ## Arithmetic
//! Channels accumulate in `u64` and divide by the sampled pixel count with
//! floor division. Identical inputs produce identical grids.

mod average;
mod fit;
mod grid;

pub use average::average_blocks;
pub use fit::fit_block_size;
pub use grid::ColorGrid;
