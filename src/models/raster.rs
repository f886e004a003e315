/// Pixel value used for background (paper) samples.
pub const BACKGROUND: u8 = 255;

/// Pixel value used for fully inked samples.
pub const INK: u8 = 0;

/// Owned 8-bit grayscale raster, row-major.
///
/// Dimensions are fixed at creation; only sample values mutate. Ink is
/// dark: 0 = black, 255 = background.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrayRaster {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl GrayRaster {
    /// Create a raster filled with the given value
    pub fn new(width: usize, height: usize, fill: u8) -> Self {
        Self {
            width,
            height,
            data: vec![fill; width * height],
        }
    }

    /// Wrap an existing row-major sample buffer
    ///
    /// # Panics
    /// Panics if `data.len() != width * height`.
    pub fn from_raw(width: usize, height: usize, data: Vec<u8>) -> Self {
        assert_eq!(data.len(), width * height, "sample buffer size mismatch");
        Self {
            width,
            height,
            data,
        }
    }

    /// Get raster width
    pub fn width(&self) -> usize {
        self.width
    }

    /// Get raster height
    pub fn height(&self) -> usize {
        self.height
    }

    /// Get sample at (x, y); out-of-bounds reads as background
    pub fn get(&self, x: usize, y: usize) -> u8 {
        if x >= self.width || y >= self.height {
            return BACKGROUND;
        }
        self.data[y * self.width + x]
    }

    /// Set sample at (x, y); out-of-bounds writes are ignored
    pub fn set(&mut self, x: usize, y: usize, value: u8) {
        if x >= self.width || y >= self.height {
            return;
        }
        self.data[y * self.width + x] = value;
    }

    /// Fill a rectangle with one value, clipped to the raster bounds
    pub fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32, value: u8) {
        let x0 = x.max(0) as usize;
        let y0 = y.max(0) as usize;
        let x1 = ((x + width as i32).max(0) as usize).min(self.width);
        let y1 = ((y + height as i32).max(0) as usize).min(self.height);
        for yy in y0..y1 {
            let row = yy * self.width;
            self.data[row + x0..row + x1].fill(value);
        }
    }

    /// Raw samples, row-major
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Mutable raw samples, row-major
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }
}

/// Compact bit-packed binary raster; `true` = foreground (dark ink)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitRaster {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl BitRaster {
    /// Create a new binary raster, all background
    pub fn new(width: usize, height: usize) -> Self {
        let bytes_needed = (width * height + 7) / 8;
        Self {
            width,
            height,
            data: vec![0; bytes_needed],
        }
    }

    /// Get raster width
    pub fn width(&self) -> usize {
        self.width
    }

    /// Get raster height
    pub fn height(&self) -> usize {
        self.height
    }

    /// Get bit at (x, y); out-of-bounds reads as background
    pub fn get(&self, x: usize, y: usize) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        let index = y * self.width + x;
        (self.data[index / 8] >> (index % 8)) & 1 == 1
    }

    /// Set bit at (x, y); out-of-bounds writes are ignored
    pub fn set(&mut self, x: usize, y: usize, value: bool) {
        if x >= self.width || y >= self.height {
            return;
        }
        let index = y * self.width + x;
        if value {
            self.data[index / 8] |= 1 << (index % 8);
        } else {
            self.data[index / 8] &= !(1 << (index % 8));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gray_raster_roundtrip() {
        let mut raster = GrayRaster::new(8, 6, BACKGROUND);
        assert_eq!(raster.width(), 8);
        assert_eq!(raster.height(), 6);
        assert_eq!(raster.get(3, 4), BACKGROUND);

        raster.set(3, 4, INK);
        assert_eq!(raster.get(3, 4), INK);
        // Out of bounds reads background, writes are dropped
        assert_eq!(raster.get(8, 0), BACKGROUND);
        raster.set(20, 20, INK);
        assert_eq!(raster.get(20, 20), BACKGROUND);
    }

    #[test]
    fn test_fill_rect_clipped() {
        let mut raster = GrayRaster::new(10, 10, BACKGROUND);
        raster.fill_rect(-2, -2, 5, 5, INK);
        assert_eq!(raster.get(0, 0), INK);
        assert_eq!(raster.get(2, 2), INK);
        assert_eq!(raster.get(3, 3), BACKGROUND);

        raster.fill_rect(8, 8, 10, 10, 7);
        assert_eq!(raster.get(9, 9), 7);
        assert_eq!(raster.get(7, 9), BACKGROUND);
    }

    #[test]
    fn test_bit_raster() {
        let mut bits = BitRaster::new(8, 8);
        bits.set(3, 4, true);
        assert!(bits.get(3, 4));
        assert!(!bits.get(3, 3));
        bits.set(3, 4, false);
        assert!(!bits.get(3, 4));
        bits.set(10, 10, true); // should not panic
        assert!(!bits.get(10, 10));
    }
}
