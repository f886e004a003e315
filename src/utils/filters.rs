//! Raster smoothing filters used by the buffer preparation stage.

use rayon::prelude::*;

use crate::models::GrayRaster;

/// Apply a 3x3 median filter, removing isolated noise without blurring edges
///
/// Border pixels take the median of their in-bounds neighborhood.
pub fn median_filter(src: &GrayRaster) -> GrayRaster {
    let width = src.width();
    let height = src.height();
    let mut out = vec![0u8; width * height];

    out.par_chunks_mut(width.max(1))
        .enumerate()
        .for_each(|(y, row)| {
            for (x, slot) in row.iter_mut().enumerate() {
                let mut window = [0u8; 9];
                let mut count = 0;
                for dy in -1i32..=1 {
                    for dx in -1i32..=1 {
                        let nx = x as i32 + dx;
                        let ny = y as i32 + dy;
                        if nx >= 0 && ny >= 0 && (nx as usize) < width && (ny as usize) < height {
                            window[count] = src.get(nx as usize, ny as usize);
                            count += 1;
                        }
                    }
                }
                window[..count].sort_unstable();
                *slot = window[count / 2];
            }
        });

    GrayRaster::from_raw(width, height, out)
}

/// Binomial approximation of a gaussian kernel, radius 2
const GAUSS_KERNEL: [u16; 5] = [1, 4, 6, 4, 1];
const GAUSS_NORM: u16 = 16;

/// Apply a separable gaussian filter (radius 2) with edge replication
pub fn gaussian_filter(src: &GrayRaster) -> GrayRaster {
    let width = src.width();
    let height = src.height();
    if width == 0 || height == 0 {
        return src.clone();
    }

    // Horizontal pass
    let mut tmp = vec![0u8; width * height];
    tmp.par_chunks_mut(width).enumerate().for_each(|(y, row)| {
        for (x, slot) in row.iter_mut().enumerate() {
            let mut acc = 0u32;
            for (k, &w) in GAUSS_KERNEL.iter().enumerate() {
                let nx = (x as i32 + k as i32 - 2).clamp(0, width as i32 - 1) as usize;
                acc += w as u32 * src.get(nx, y) as u32;
            }
            *slot = ((acc + GAUSS_NORM as u32 / 2) / GAUSS_NORM as u32) as u8;
        }
    });
    let tmp = GrayRaster::from_raw(width, height, tmp);

    // Vertical pass
    let mut out = vec![0u8; width * height];
    out.par_chunks_mut(width).enumerate().for_each(|(y, row)| {
        for (x, slot) in row.iter_mut().enumerate() {
            let mut acc = 0u32;
            for (k, &w) in GAUSS_KERNEL.iter().enumerate() {
                let ny = (y as i32 + k as i32 - 2).clamp(0, height as i32 - 1) as usize;
                acc += w as u32 * tmp.get(x, ny) as u32;
            }
            *slot = ((acc + GAUSS_NORM as u32 / 2) / GAUSS_NORM as u32) as u8;
        }
    });

    GrayRaster::from_raw(width, height, out)
}
