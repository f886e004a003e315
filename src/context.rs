use crate::models::{GrayRaster, Region, RunTable};

/// Page scale estimates, in pixel units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scale {
    /// Main interline distance
    pub interline: u32,
    /// Typical beam thickness
    pub main_beam: f64,
    /// Maximum stem thickness
    pub max_stem: u32,
}

/// Page-level state consumed and produced by one pipeline invocation
///
/// The context is exclusively owned by the invocation for its
/// duration; concurrent invocations against the same page must be
/// serialized by the caller.
#[derive(Debug, Clone)]
pub struct PageContext {
    /// Page identifier, used for debug artifact names
    pub id: String,
    /// Source raster (staff lines already removed)
    pub source: GrayRaster,
    /// Scale estimates supplied by the scale service
    pub scale: Scale,
    /// Regions supplied by the layout service
    pub regions: Vec<Region>,
    /// Slot for the note-oriented run table side artifact
    pub note_runs: Option<RunTable>,
}

impl PageContext {
    /// Create a fresh context with an empty side-artifact slot
    pub fn new(
        id: impl Into<String>,
        source: GrayRaster,
        scale: Scale,
        regions: Vec<Region>,
    ) -> Self {
        Self {
            id: id.into(),
            source,
            scale,
            regions,
            note_runs: None,
        }
    }
}
