use std::path::PathBuf;

use image::{GrayImage, Luma};

use crate::error::SpotError;
use crate::models::GrayRaster;

/// Sink for optional debug raster images
///
/// The pipeline calls into a sink only when one was injected and the
/// matching keep flag is set; sink failures are logged by the caller
/// and never abort the pipeline.
pub trait ArtifactSink: Send + Sync {
    /// Persist a raster under a deterministic name (no extension)
    fn save_raster(&self, name: &str, raster: &GrayRaster) -> Result<(), SpotError>;
}

/// Sink writing grayscale PNG files into a directory
#[derive(Debug, Clone)]
pub struct DiskSink {
    dir: PathBuf,
}

impl DiskSink {
    /// Sink writing `<dir>/<name>.png`
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl ArtifactSink for DiskSink {
    fn save_raster(&self, name: &str, raster: &GrayRaster) -> Result<(), SpotError> {
        if let Err(err) = std::fs::create_dir_all(&self.dir) {
            return Err(SpotError::Artifact(image::ImageError::IoError(err)));
        }
        let img = GrayImage::from_fn(raster.width() as u32, raster.height() as u32, |x, y| {
            Luma([raster.get(x as usize, y as usize)])
        });
        img.save(self.dir.join(format!("{name}.png")))?;
        Ok(())
    }
}
