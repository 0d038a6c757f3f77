use crate::{Error, Rgba8};

#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    data: Vec<Rgba8>,
}

impl PixelBuffer {
    pub fn from_vec(width: usize, height: usize, data: Vec<Rgba8>) -> Result<Self, Error> {
        let expected = width.checked_mul(height).ok_or(Error::SizeMismatch {
            expected: usize::MAX,
            actual: data.len(),
        })?;

        if data.len() != expected {
            return Err(Error::SizeMismatch {
                expected,
                actual: data.len(),
            });
        }

        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Builds a buffer from tightly packed RGBA bytes, four per pixel in
    /// row-major order. This is the seam to image decoders.
    pub fn from_rgba_bytes(width: usize, height: usize, bytes: &[u8]) -> Result<Self, Error> {
        let pixels = width.checked_mul(height).ok_or(Error::SizeMismatch {
            expected: usize::MAX,
            actual: bytes.len(),
        })?;
        let expected = pixels.checked_mul(4).ok_or(Error::SizeMismatch {
            expected: usize::MAX,
            actual: bytes.len(),
        })?;

        if bytes.len() != expected {
            return Err(Error::SizeMismatch {
                expected,
                actual: bytes.len(),
            });
        }

        let mut data = Vec::with_capacity(pixels);
        for px in bytes.chunks_exact(4) {
            data.push(Rgba8::new(px[0], px[1], px[2], px[3]));
        }

        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn new_fill(width: usize, height: usize, value: Rgba8) -> Self {
        let len = width.checked_mul(height).expect("buffer size overflow");
        Self {
            width,
            height,
            data: vec![value; len],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixels(&self) -> &[Rgba8] {
        &self.data
    }

    pub fn pixels_mut(&mut self) -> &mut [Rgba8] {
        &mut self.data
    }

    /// Flattens the buffer back into tightly packed RGBA bytes.
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.data.len() * 4);
        for px in &self.data {
            out.extend_from_slice(&px.to_array());
        }
        out
    }

    pub fn as_view(&self) -> PixelView<'_> {
        PixelView {
            width: self.width,
            height: self.height,
            data: &self.data,
        }
    }
}

/// Borrowed read-only view over a tightly packed RGBA buffer.
#[derive(Debug, Clone, Copy)]
pub struct PixelView<'a> {
    width: usize,
    height: usize,
    data: &'a [Rgba8],
}

impl<'a> PixelView<'a> {
    pub fn from_slice(width: usize, height: usize, data: &'a [Rgba8]) -> Result<Self, Error> {
        let expected = width.checked_mul(height).ok_or(Error::SizeMismatch {
            expected: usize::MAX,
            actual: data.len(),
        })?;

        if data.len() != expected {
            return Err(Error::SizeMismatch {
                expected,
                actual: data.len(),
            });
        }

        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn row(&self, y: usize) -> &'a [Rgba8] {
        assert!(y < self.height, "row index out of bounds");
        let start = y * self.width;
        &self.data[start..start + self.width]
    }

    pub fn get(&self, x: usize, y: usize) -> Option<Rgba8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.data.get(y * self.width + x).copied()
    }

    pub fn pixels(&self) -> &'a [Rgba8] {
        self.data
    }
}

#[cfg(test)]
mod tests {
    use super::{PixelBuffer, PixelView};
    use crate::{Error, Rgba8};

    #[test]
    fn from_vec_rejects_wrong_len() {
        let err = PixelBuffer::from_vec(2, 2, vec![Rgba8::BLACK; 3]).unwrap_err();
        assert_eq!(
            err,
            Error::SizeMismatch {
                expected: 4,
                actual: 3
            }
        );
    }

    #[test]
    fn from_rgba_bytes_unpacks_pixels() {
        let bytes = [
            1u8, 2, 3, 4, // (0, 0)
            5, 6, 7, 8, // (1, 0)
            9, 10, 11, 12, // (0, 1)
            13, 14, 15, 16, // (1, 1)
        ];
        let buf = PixelBuffer::from_rgba_bytes(2, 2, &bytes).expect("valid buffer");

        assert_eq!(buf.pixels()[0], Rgba8::new(1, 2, 3, 4));
        assert_eq!(buf.pixels()[3], Rgba8::new(13, 14, 15, 16));
        assert_eq!(buf.to_rgba_bytes(), bytes);
    }

    #[test]
    fn from_rgba_bytes_rejects_ragged_input() {
        let err = PixelBuffer::from_rgba_bytes(2, 2, &[0u8; 15]).unwrap_err();
        assert_eq!(
            err,
            Error::SizeMismatch {
                expected: 16,
                actual: 15
            }
        );
    }

    #[test]
    fn view_rows_and_gets() {
        let data = vec![
            Rgba8::new(1, 0, 0, 255),
            Rgba8::new(2, 0, 0, 255),
            Rgba8::new(3, 0, 0, 255),
            Rgba8::new(4, 0, 0, 255),
            Rgba8::new(5, 0, 0, 255),
            Rgba8::new(6, 0, 0, 255),
        ];
        let view = PixelView::from_slice(3, 2, &data).expect("valid view");

        assert_eq!(view.row(0)[2].r, 3);
        assert_eq!(view.row(1)[0].r, 4);
        assert_eq!(view.get(2, 1), Some(Rgba8::new(6, 0, 0, 255)));
        assert_eq!(view.get(3, 0), None);
        assert_eq!(view.get(0, 2), None);
    }

    #[test]
    fn view_requires_exact_len() {
        let data = vec![Rgba8::TRANSPARENT; 5];
        assert!(PixelView::from_slice(3, 2, &data).is_err());
    }
}
