/// Errors raised by the spot extraction pipeline
///
/// The whole-page entry point catches these at its boundary; the cue
/// entry point surfaces them to the caller.
#[derive(Debug, thiserror::Error)]
pub enum SpotError {
    /// The source raster has zero width or height.
    #[error("source raster is empty")]
    EmptySource,

    /// The structuring element radius is non-positive, meaning the
    /// upstream beam-thickness estimate is unusable.
    #[error("invalid structuring element radius: {0}")]
    InvalidRadius(f32),

    /// The page scale estimates cannot drive the pipeline.
    #[error("unusable scale estimate: {0}")]
    MissingScale(&'static str),

    /// A debug artifact could not be written. Never aborts the
    /// pipeline; only the artifact write itself fails.
    #[error("failed to write debug artifact: {0}")]
    Artifact(#[from] image::ImageError),
}
