//! Flat-disk morphology on dark-ink grayscale rasters.
//!
//! Ink is dark (low intensity), so dilating ink is a minimum filter and
//! eroding ink is a maximum filter. Closing = dilation then erosion with
//! the same element; it merges nearby dark pixels into solid blobs and
//! is idempotent.

use rayon::prelude::*;

use crate::error::SpotError;
use crate::models::{GrayRaster, PointI};

/// Flat disk structuring element with a real radius and integer anchor
///
/// Immutable once constructed; the pixel neighborhood is precomputed.
#[derive(Debug, Clone)]
pub struct StructureElement {
    offsets: Vec<PointI>,
}

impl StructureElement {
    /// Build a disk of the given radius, anchored at `anchor`
    ///
    /// The neighborhood holds every integer offset within euclidean
    /// distance `radius` of the anchor. A non-positive radius is
    /// rejected: it means the upstream thickness estimate is unusable,
    /// and a silent no-op would hide that.
    pub fn disk(radius: f32, anchor: PointI) -> Result<Self, SpotError> {
        if radius <= 0.0 || !radius.is_finite() {
            return Err(SpotError::InvalidRadius(radius));
        }
        let reach = radius.floor() as i32;
        let mut offsets = Vec::new();
        for dy in -reach..=reach {
            for dx in -reach..=reach {
                if ((dx * dx + dy * dy) as f32) <= radius * radius {
                    offsets.push(PointI::new(dx + anchor.x, dy + anchor.y));
                }
            }
        }
        Ok(Self { offsets })
    }

    /// Number of pixels in the neighborhood
    pub fn size(&self) -> usize {
        self.offsets.len()
    }
}

/// Grow ink by the structuring element (minimum filter)
fn dilate(src: &GrayRaster, se: &StructureElement) -> GrayRaster {
    rank_pass(src, se, false)
}

/// Shrink ink by the structuring element (maximum filter)
///
/// Uses the reflected neighborhood so that dilate/erode form an
/// adjunction even with a non-centered anchor.
fn erode(src: &GrayRaster, se: &StructureElement) -> GrayRaster {
    rank_pass(src, se, true)
}

fn rank_pass(src: &GrayRaster, se: &StructureElement, reflect: bool) -> GrayRaster {
    let width = src.width();
    let height = src.height();
    let sign = if reflect { -1 } else { 1 };
    let mut out = vec![0u8; width * height];

    out.par_chunks_mut(width.max(1))
        .enumerate()
        .for_each(|(y, row)| {
            for (x, slot) in row.iter_mut().enumerate() {
                let mut value = src.get(x, y);
                for off in &se.offsets {
                    let nx = x as i32 + sign * off.x;
                    let ny = y as i32 + sign * off.y;
                    if nx < 0 || ny < 0 || nx as usize >= width || ny as usize >= height {
                        continue;
                    }
                    let sample = src.get(nx as usize, ny as usize);
                    value = if reflect {
                        value.max(sample)
                    } else {
                        value.min(sample)
                    };
                }
                *slot = value;
            }
        });

    GrayRaster::from_raw(width, height, out)
}

/// Morphological closing in place: dilate ink, then erode it back
pub fn close(raster: &mut GrayRaster, se: &StructureElement) {
    let dilated = dilate(raster, se);
    *raster = erode(&dilated, se);
}
