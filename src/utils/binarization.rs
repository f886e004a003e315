//! Global-threshold binarization of grayscale rasters.

use crate::models::{BitRaster, GrayRaster};

/// Convert a grayscale raster to binary with a fixed global threshold
///
/// Returns a BitRaster where true = foreground (dark ink): samples
/// strictly below the threshold are foreground, samples at or above it
/// are background. This polarity is the single convention shared with
/// the run scanner; spots come out of closing as dark blobs on a light
/// page, so no illumination compensation is needed here.
pub fn global_binarize(gray: &GrayRaster, threshold: u8) -> BitRaster {
    let width = gray.width();
    let height = gray.height();
    let mut binary = BitRaster::new(width, height);

    for y in 0..height {
        for x in 0..width {
            let is_ink = gray.get(x, y) < threshold;
            binary.set(x, y, is_ink);
        }
    }

    binary
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polarity_dark_is_foreground() {
        let gray = GrayRaster::from_raw(2, 2, vec![100, 150, 200, 50]);
        let binary = global_binarize(&gray, 140);

        assert!(binary.get(0, 0)); // 100 < 140
        assert!(!binary.get(1, 0)); // 150 >= 140
        assert!(!binary.get(0, 1)); // 200 >= 140
        assert!(binary.get(1, 1)); // 50 < 140
    }

    #[test]
    fn test_threshold_is_background() {
        // A sample exactly at the threshold is background
        let gray = GrayRaster::from_raw(1, 1, vec![140]);
        let binary = global_binarize(&gray, 140);
        assert!(!binary.get(0, 0));
    }
}
