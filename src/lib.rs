//! beamspot - Morphological spot extraction for beam candidates
//!
//! Extracts compact dark regions ("spots") out of a scanned page by
//! closing it with a disk derived from the beam thickness, then turns
//! the binarized result into glyphs via run-length scanning and a
//! junction-ratio section graph, and dispatches each glyph to the
//! region ("system") it belongs to.

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// Pipeline configuration value object
pub mod config;
/// Page-level context consumed and produced by one invocation
pub mod context;
/// Debug artifact sinks (injectable, optional)
pub mod debug;
/// Extraction stages (runs, sections, glyphs, dispatch)
pub mod detector;
/// Pipeline errors
pub mod error;
/// Core data structures (rasters, runs, sections, glyphs, regions)
pub mod models;
/// Pipeline orchestration and entry points
pub mod pipeline;
/// Raster-level processing (filters, morphology, binarization)
pub mod utils;

pub use config::SpotsConfig;
pub use context::{PageContext, Scale};
pub use error::SpotError;
pub use models::{
    BitRaster, Glyph, GlyphLayer, GrayRaster, Orientation, Point, PointI, Rect, Region, RunTable,
    SpotShape, StaffHeader,
};
pub use pipeline::{SPOT_ORIENTATION, SpotsBuilder};

/// Retrieve and dispatch all spots of a page with the given configuration
///
/// Convenience wrapper over [`SpotsBuilder::build_page_spots`]; returns
/// the number of registered glyphs and never fails (fail-soft page
/// boundary).
pub fn build_page_spots(ctx: &mut PageContext, config: SpotsConfig) -> usize {
    SpotsBuilder::new(config).build_page_spots(ctx)
}

/// Build spots out of a cue snapshot with the given configuration
///
/// Convenience wrapper over [`SpotsBuilder::build_cue_spots`]; errors
/// propagate to the caller.
pub fn build_cue_spots(
    buffer: &mut GrayRaster,
    offset: PointI,
    beam: f64,
    page_id: &str,
    cue_id: &str,
    config: SpotsConfig,
) -> Result<Vec<Glyph>, SpotError> {
    SpotsBuilder::new(config).build_cue_spots(buffer, offset, beam, page_id, cue_id)
}
