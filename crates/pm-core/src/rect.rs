/// Axis-aligned pixel rectangle with a top-left origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

impl Rect {
    /// Zero-area rectangle at the origin.
    pub const ZERO: Self = Self {
        x: 0,
        y: 0,
        width: 0,
        height: 0,
    };

    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn area(self) -> usize {
        self.width * self.height
    }

    /// One past the rightmost column.
    pub fn right(self) -> usize {
        self.x + self.width
    }

    /// One past the bottommost row.
    pub fn bottom(self) -> usize {
        self.y + self.height
    }

    /// True when the rectangle lies fully inside a `width x height` area.
    pub fn fits_within(self, width: usize, height: usize) -> bool {
        self.x <= width
            && self.y <= height
            && self.width <= width - self.x
            && self.height <= height - self.y
    }

    /// Intersection with `[0, width) x [0, height)`. Empty when the
    /// rectangle lies entirely outside.
    pub fn clip(self, width: usize, height: usize) -> Rect {
        let x0 = self.x.min(width);
        let y0 = self.y.min(height);
        let x1 = self.x.saturating_add(self.width).min(width);
        let y1 = self.y.saturating_add(self.height).min(height);

        Rect {
            x: x0,
            y: y0,
            width: x1 - x0,
            height: y1 - y0,
        }
    }
}
