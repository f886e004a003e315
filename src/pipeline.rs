//! Pipeline orchestration: from a page (or cue snapshot) raster to
//! dispatched beam-candidate glyphs.

use std::time::Instant;

use tracing::{debug, warn};

use crate::config::SpotsConfig;
use crate::context::PageContext;
use crate::debug::ArtifactSink;
use crate::detector::dispatch::dispatch_spots;
use crate::detector::glyphs::build_glyphs;
use crate::detector::runs::RunTableFactory;
use crate::detector::sections::{JunctionRatioPolicy, SectionFactory};
use crate::error::SpotError;
use crate::models::{BACKGROUND, Glyph, GlyphLayer, GrayRaster, Orientation, PointI, Region};
use crate::utils::binarization::global_binarize;
use crate::utils::filters::{gaussian_filter, median_filter};
use crate::utils::morphology::{StructureElement, close};

/// Orientation chosen for spot runs
pub const SPOT_ORIENTATION: Orientation = Orientation::Vertical;

/// Threshold splitting the two-level source raster into ink/background
const SOURCE_THRESHOLD: u8 = 128;

/// Performs morphology analysis to retrieve the major spots that
/// compose beams
///
/// It can work on a whole page or on a cue snapshot. Configuration is
/// fixed at construction; an optional artifact sink receives debug
/// images when the matching keep flags are set.
pub struct SpotsBuilder {
    config: SpotsConfig,
    sink: Option<Box<dyn ArtifactSink>>,
}

impl SpotsBuilder {
    /// Builder with the given configuration and no artifact sink
    pub fn new(config: SpotsConfig) -> Self {
        Self { config, sink: None }
    }

    /// Builder persisting debug images through the given sink
    pub fn with_sink(config: SpotsConfig, sink: Box<dyn ArtifactSink>) -> Self {
        Self {
            config,
            sink: Some(sink),
        }
    }

    /// Retrieve all spots from a page and dispatch them among their
    /// containing region(s)
    ///
    /// Fail-soft boundary: any pipeline error is caught here, logged,
    /// and yields zero registrations; region state committed by prior,
    /// unrelated stages is left untouched. Returns the number of
    /// registered glyphs.
    pub fn build_page_spots(&self, ctx: &mut PageContext) -> usize {
        match self.try_build_page_spots(ctx) {
            Ok(count) => count,
            Err(err) => {
                warn!(page = %ctx.id, error = %err, "error building spots");
                0
            }
        }
    }

    fn try_build_page_spots(&self, ctx: &mut PageContext) -> Result<usize, SpotError> {
        if ctx.scale.main_beam <= 0.0 {
            return Err(SpotError::MissingScale("beam thickness estimate"));
        }

        let started = Instant::now();
        let mut buffer = self.prepare_buffer(&ctx.source, ctx.scale.max_stem)?;
        self.erase_headers(&mut buffer, &ctx.regions, ctx.scale.interline);

        self.close_spots(&mut buffer, ctx.scale.main_beam)?;
        if self.config.keep_page_spots {
            self.save_artifact(&format!("{}.spot", ctx.id), &buffer);
        }

        self.save_note_runs(&buffer, ctx);

        let glyphs = self.extract_glyphs(&buffer, None);
        let count = dispatch_spots(glyphs, &mut ctx.regions);
        debug!(
            page = %ctx.id,
            count,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "spots retrieved"
        );
        Ok(count)
    }

    /// Build spots out of a cue snapshot
    ///
    /// The buffer is a small cropped raster already prepared by the
    /// caller; `offset` re-expresses its coordinates in page space.
    /// No header erasure and no note-runs side artifact apply here.
    /// Fail-hard: errors propagate to the caller unmodified.
    pub fn build_cue_spots(
        &self,
        buffer: &mut GrayRaster,
        offset: PointI,
        beam: f64,
        page_id: &str,
        cue_id: &str,
    ) -> Result<Vec<Glyph>, SpotError> {
        if buffer.width() == 0 || buffer.height() == 0 {
            return Err(SpotError::EmptySource);
        }
        self.close_spots(buffer, beam)?;
        if self.config.keep_cue_spots {
            self.save_artifact(&format!("{page_id}.{cue_id}.spot"), buffer);
        }
        Ok(self.extract_glyphs(buffer, Some(offset)))
    }

    /// Prepare the working raster for beam retrieval
    ///
    /// Stems could lead to artificially larger beam candidates, so
    /// horizontal runs not longer than the stem thickness are removed
    /// before smoothing.
    fn prepare_buffer(&self, source: &GrayRaster, max_stem: u32) -> Result<GrayRaster, SpotError> {
        if source.width() == 0 || source.height() == 0 {
            return Err(SpotError::EmptySource);
        }
        let binary = global_binarize(source, SOURCE_THRESHOLD);
        let table =
            RunTableFactory::with_min_length(Orientation::Horizontal, max_stem).create(&binary);
        let buffer = table.render();
        let buffer = median_filter(&buffer);
        Ok(gaussian_filter(&buffer))
    }

    /// Blank the header zone of every region
    ///
    /// The erased rectangle spans from the region's left bound to the
    /// header stop, from the first staff's top line to the last staff's
    /// bottom line, extended vertically by the configured margin.
    /// Idempotent; cue snapshots carry no header and skip this.
    fn erase_headers(&self, buffer: &mut GrayRaster, regions: &[Region], interline: u32) {
        let margin = (self.config.header_margin_fraction * interline as f64).round() as i32;

        for region in regions {
            let start = region.left;
            let stop = region.header.stop;
            let top = region.header.first_line_y - margin;
            let bottom = region.header.last_line_y + margin;
            if stop < start || bottom < top {
                continue;
            }
            buffer.fill_rect(
                start,
                top,
                (stop - start + 1) as u32,
                (bottom - top + 1) as u32,
                BACKGROUND,
            );
        }
    }

    /// Close the buffer with a disk derived from the beam thickness
    fn close_spots(&self, buffer: &mut GrayRaster, beam: f64) -> Result<(), SpotError> {
        let diameter = beam * self.config.diameter_ratio;
        let radius = ((diameter - 1.0) / 2.0) as f32;
        debug!(beam, diameter, radius, "spots retrieval");
        let se = StructureElement::disk(radius, PointI::default())?;
        close(buffer, &se);
        Ok(())
    }

    /// Save the runs of the note-binarized buffer into the page context
    ///
    /// To ease the later note detection step, a separate copy of the
    /// closed buffer is binarized with the note threshold and stored as
    /// a run table side artifact.
    fn save_note_runs(&self, buffer: &GrayRaster, ctx: &mut PageContext) {
        let binary = global_binarize(buffer, self.config.note_threshold);
        let runs = RunTableFactory::new(SPOT_ORIENTATION).create(&binary);
        if self.config.keep_note_spots {
            self.save_artifact(&format!("{}.notespot", ctx.id), &runs.render());
        }
        ctx.note_runs = Some(runs);
    }

    /// Binarize the closed buffer and assemble glyphs
    fn extract_glyphs(&self, buffer: &GrayRaster, offset: Option<PointI>) -> Vec<Glyph> {
        let binary = global_binarize(buffer, self.config.beam_threshold);
        let table = RunTableFactory::new(SPOT_ORIENTATION).create(&binary);
        let factory = SectionFactory::new(JunctionRatioPolicy::new(self.config.junction_ratio));
        let arena = factory.create(&table);
        debug!(
            sections = arena.sections.len(),
            junctions = arena.edges.len(),
            "sections built"
        );
        build_glyphs(arena, offset, GlyphLayer::Spot)
    }

    /// Write a debug artifact; failures are logged, never propagated
    fn save_artifact(&self, name: &str, raster: &GrayRaster) {
        if let Some(sink) = &self.sink {
            if let Err(err) = sink.save_raster(name, raster) {
                warn!(artifact = name, error = %err, "failed to save debug artifact");
            }
        }
    }
}
