//! Umbrella crate for the `pixel-mosaic` workspace.
//!
//! Re-exports the foundational crates and hosts the strict transform
//! pipeline that chains them.

mod pipeline;

pub use pipeline::{BlockSpec, pixelate};
pub use pm_core::*;
pub use pm_mosaic::*;
pub use pm_trim::*;
