/// Tunable parameters of the spot extraction pipeline
///
/// A plain value object passed to the pipeline entry points; defaults
/// carry the tuning that works for typical scanned scores.
#[derive(Debug, Clone)]
pub struct SpotsConfig {
    /// Diameter of the closing disk, as a ratio of beam thickness. Default: 0.8.
    pub diameter_ratio: f64,
    /// Global binarization threshold for beam spots. Default: 140.
    pub beam_threshold: u8,
    /// Global binarization threshold for the note-oriented side artifact. Default: 170.
    pub note_threshold: u8,
    /// Margin erased above and below the staff header area, in interline fractions. Default: 2.0.
    pub header_margin_fraction: f64,
    /// Minimum overlap ratio connecting runs of adjacent scan lines. Default: 0.8.
    pub junction_ratio: f64,
    /// Whether to persist the page spot image. Default: false.
    pub keep_page_spots: bool,
    /// Whether to persist the note spot image. Default: false.
    pub keep_note_spots: bool,
    /// Whether to persist cue spot images. Default: false.
    pub keep_cue_spots: bool,
}

impl Default for SpotsConfig {
    fn default() -> Self {
        Self {
            diameter_ratio: 0.8,
            beam_threshold: 140,
            note_threshold: 170,
            header_margin_fraction: 2.0,
            junction_ratio: 0.8,
            keep_page_spots: false,
            keep_note_spots: false,
            keep_cue_spots: false,
        }
    }
}
