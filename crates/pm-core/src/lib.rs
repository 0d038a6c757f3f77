//! Foundational types for pixel-art mosaic generation.
//!
//! ## Pixel Buffers
//! Buffers are tightly packed row-major RGBA with no row padding. Views are
//! borrowed and read-only; transform stages never mutate caller pixels.
//!
//! ## Regions
//! Sub-areas travel as [`Rect`] values validated against the target buffer
//! by the consuming operation, not as borrowed subviews.
//!
//! ## Blackness
//! A pixel counts as black when all three color channels are zero. Alpha
//! takes no part in the test.

mod buffer;
mod color;
mod error;
mod rect;

pub use buffer::{PixelBuffer, PixelView};
pub use color::Rgba8;
pub use error::Error;
pub use rect::Rect;
