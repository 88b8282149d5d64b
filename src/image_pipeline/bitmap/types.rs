//! Decoded bitmap types

/// Represents a decoded bitmap reduced to the channel the sampler reads
#[derive(Debug, Clone)]
pub struct MonochromeBitmap {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
    /// Bits per pixel declared by the source file (1 for monochrome)
    pub bits_per_pixel: u16,
    /// Red channel intensity, row-major with the top row first
    pub data: Vec<u8>,
}

impl MonochromeBitmap {
    /// Builds a 1 bpp bitmap where `is_black(x, y)` decides each pixel.
    pub fn from_fn(width: usize, height: usize, is_black: impl Fn(usize, usize) -> bool) -> Self {
        let mut data = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                data.push(if is_black(x, y) { 0 } else { u8::MAX });
            }
        }

        Self {
            width,
            height,
            bits_per_pixel: 1,
            data,
        }
    }

    /// A pixel is black when its red channel is zero. Coordinates outside
    /// the buffer read as white.
    pub fn is_black(&self, x: usize, y: usize) -> bool {
        if x >= self.width {
            return false;
        }
        matches!(self.data.get(y * self.width + x), Some(0))
    }

    pub fn is_square(&self) -> bool {
        self.width == self.height
    }

    pub fn is_monochrome(&self) -> bool {
        self.bits_per_pixel == 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_fn_layout_is_row_major() {
        let bitmap = MonochromeBitmap::from_fn(3, 2, |x, y| x == 2 && y == 1);

        assert_eq!(bitmap.data, vec![255, 255, 255, 255, 255, 0]);
        assert!(bitmap.is_black(2, 1));
        assert!(!bitmap.is_black(1, 2));
        assert!(bitmap.is_monochrome());
        assert!(!bitmap.is_square());
    }

    #[test]
    fn test_out_of_buffer_reads_white() {
        let bitmap = MonochromeBitmap::from_fn(2, 2, |_, _| true);

        assert!(bitmap.is_black(1, 1));
        assert!(!bitmap.is_black(2, 0));
        assert!(!bitmap.is_black(0, 2));
    }
}
