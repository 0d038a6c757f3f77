use pm_core::Rgba8;

/// Row-major grid of averaged block colors.
///
/// Holds `columns * rows` entries; entry `(col, row)` is the mean color of
/// the source tile anchored `col * block_size` right of and
/// `row * block_size` below the averaged region's origin. A grid may be
/// empty when the region it was averaged from had zero area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorGrid {
    columns: usize,
    rows: usize,
    block_size: usize,
    colors: Vec<Rgba8>,
}

impl ColorGrid {
    pub(crate) fn new(columns: usize, rows: usize, block_size: usize, colors: Vec<Rgba8>) -> Self {
        debug_assert_eq!(colors.len(), columns * rows);
        Self {
            columns,
            rows,
            block_size,
            colors,
        }
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Edge length, in source pixels, of the tiles the grid was averaged
    /// from.
    pub fn block_size(&self) -> usize {
        self.block_size
    }

    pub fn colors(&self) -> &[Rgba8] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn get(&self, col: usize, row: usize) -> Option<Rgba8> {
        if col >= self.columns || row >= self.rows {
            return None;
        }
        self.colors.get(row * self.columns + col).copied()
    }
}

#[cfg(test)]
mod tests {
    use pm_core::Rgba8;

    use crate::grid::ColorGrid;

    #[test]
    fn get_respects_row_major_layout() {
        let colors = vec![
            Rgba8::new(1, 0, 0, 255),
            Rgba8::new(2, 0, 0, 255),
            Rgba8::new(3, 0, 0, 255),
            Rgba8::new(4, 0, 0, 255),
            Rgba8::new(5, 0, 0, 255),
            Rgba8::new(6, 0, 0, 255),
        ];
        let grid = ColorGrid::new(3, 2, 4, colors);

        assert_eq!(grid.len(), 6);
        assert_eq!(grid.get(0, 0).map(|c| c.r), Some(1));
        assert_eq!(grid.get(2, 0).map(|c| c.r), Some(3));
        assert_eq!(grid.get(0, 1).map(|c| c.r), Some(4));
        assert_eq!(grid.get(2, 1).map(|c| c.r), Some(6));
        assert_eq!(grid.get(3, 0), None);
        assert_eq!(grid.get(0, 2), None);
    }

    #[test]
    fn empty_grid_keeps_block_size() {
        let grid = ColorGrid::new(0, 0, 7, Vec::new());
        assert!(grid.is_empty());
        assert_eq!(grid.block_size(), 7);
        assert_eq!(grid.get(0, 0), None);
    }
}
