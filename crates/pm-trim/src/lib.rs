//! Black-margin detection and trimming.
//!
//! A pixel counts as black when all three color channels are zero; alpha is
//! ignored. Scans walk inward from each edge and stop at the first row or
//! column containing any non-black pixel.
//!
//! Origin placement policy: per axis the returned origin is
//! `near_margin + far_margin / 2` (floor division), so the rectangle keeps
//! the exact content size but sits shifted toward the far margin by half its
//! width. `origin + size` never exceeds the image bounds. Images with no
//! non-black pixel trim to a zero-area rectangle at the origin.

use pm_core::{PixelView, Rect};

/// Widths of the all-black bands at each image edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Margins {
    pub left: usize,
    pub right: usize,
    pub top: usize,
    pub bottom: usize,
}

/// Measures the all-black band at each edge. `None` when the image holds no
/// non-black pixel at all (margins would cover the image twice over).
pub fn black_margins(src: &PixelView<'_>) -> Option<Margins> {
    let width = src.width();
    let height = src.height();

    let mut left = 0;
    while left < width && column_is_black(src, left) {
        left += 1;
    }

    if left == width {
        return None;
    }

    // A non-black column exists, so each remaining scan stops before
    // crossing it.
    let mut right = 0;
    while column_is_black(src, width - 1 - right) {
        right += 1;
    }

    let mut top = 0;
    while row_is_black(src, top) {
        top += 1;
    }

    let mut bottom = 0;
    while row_is_black(src, height - 1 - bottom) {
        bottom += 1;
    }

    Some(Margins {
        left,
        right,
        top,
        bottom,
    })
}

/// Trims the black margins off an image, returning the content rectangle
/// with the origin placement described in the module docs.
pub fn trim_black_margins(src: &PixelView<'_>) -> Rect {
    let Some(m) = black_margins(src) else {
        return Rect::ZERO;
    };

    Rect {
        x: m.left + m.right / 2,
        y: m.top + m.bottom / 2,
        width: src.width() - m.left - m.right,
        height: src.height() - m.top - m.bottom,
    }
}

fn row_is_black(src: &PixelView<'_>, y: usize) -> bool {
    src.row(y).iter().all(|px| px.is_black())
}

fn column_is_black(src: &PixelView<'_>, x: usize) -> bool {
    for y in 0..src.height() {
        let px = src.get(x, y).expect("in-bounds column access");
        if !px.is_black() {
            return false;
        }
    }
    true
}
