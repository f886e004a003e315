use super::point::PointI;
use super::raster::{BACKGROUND, GrayRaster, INK};

/// Scan orientation for run-length encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Scan lines are image rows; runs extend along x
    Horizontal,
    /// Scan lines are image columns; runs extend along y
    Vertical,
}

impl Orientation {
    /// Number of scan lines for a raster of the given size
    pub fn line_count(self, width: usize, height: usize) -> usize {
        match self {
            Orientation::Horizontal => height,
            Orientation::Vertical => width,
        }
    }

    /// Number of positions along one scan line
    pub fn pos_count(self, width: usize, height: usize) -> usize {
        match self {
            Orientation::Horizontal => width,
            Orientation::Vertical => height,
        }
    }

    /// Map (scan line, position) to absolute (x, y) coordinates
    pub fn absolute(self, line: i32, pos: i32) -> PointI {
        match self {
            Orientation::Horizontal => PointI::new(pos, line),
            Orientation::Vertical => PointI::new(line, pos),
        }
    }
}

/// Maximal contiguous foreground segment along one scan line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    /// Starting position along the scan axis
    pub start: u32,
    /// Number of foreground pixels, always >= 1
    pub length: u32,
}

impl Run {
    /// Create a new run
    pub fn new(start: u32, length: u32) -> Self {
        debug_assert!(length >= 1);
        Self { start, length }
    }

    /// Exclusive end position
    pub fn stop(&self) -> u32 {
        self.start + self.length
    }
}

/// Ordered collection of runs grouped by scan line
///
/// Per line, runs are sorted by start and non-overlapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunTable {
    orientation: Orientation,
    width: usize,
    height: usize,
    lines: Vec<Vec<Run>>,
}

impl RunTable {
    /// Create an empty table for a raster of the given size
    pub fn new(orientation: Orientation, width: usize, height: usize) -> Self {
        let lines = vec![Vec::new(); orientation.line_count(width, height)];
        Self {
            orientation,
            width,
            height,
            lines,
        }
    }

    /// Scan orientation this table was built with
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Raster width
    pub fn width(&self) -> usize {
        self.width
    }

    /// Raster height
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of scan lines
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Runs of one scan line
    pub fn line_runs(&self, line: usize) -> &[Run] {
        &self.lines[line]
    }

    /// Append a run to a scan line, keeping per-line ordering
    pub fn push_run(&mut self, line: usize, run: Run) {
        debug_assert!(
            self.lines[line]
                .last()
                .is_none_or(|last| last.stop() <= run.start),
            "runs must be appended in order without overlap"
        );
        self.lines[line].push(run);
    }

    /// Total foreground pixel count
    pub fn weight(&self) -> u64 {
        self.lines
            .iter()
            .flatten()
            .map(|run| run.length as u64)
            .sum()
    }

    /// Whether the table holds no run at all
    pub fn is_empty(&self) -> bool {
        self.lines.iter().all(|line| line.is_empty())
    }

    /// Re-render the table into a fresh raster: run pixels become ink,
    /// everything else background
    pub fn render(&self) -> GrayRaster {
        let mut raster = GrayRaster::new(self.width, self.height, BACKGROUND);
        for (line, runs) in self.lines.iter().enumerate() {
            for run in runs {
                for pos in run.start..run.stop() {
                    let p = self.orientation.absolute(line as i32, pos as i32);
                    raster.set(p.x as usize, p.y as usize, INK);
                }
            }
        }
        raster
    }
}
