use super::point::{Point, PointI, Rect};
use super::run::Orientation;

/// One run as held by a section, with translatable coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionRun {
    /// Starting position along the scan axis
    pub start: i32,
    /// Number of foreground pixels
    pub length: u32,
}

impl SectionRun {
    /// Exclusive end position
    pub fn stop(&self) -> i32 {
        self.start + self.length as i32
    }
}

/// Maximal branch-free stack of runs from consecutive scan lines
///
/// Runs of a section span consecutive scan lines, each consecutive pair
/// passing the junction policy that built the section. Sections live in
/// a per-invocation arena; adjacency between sections is recorded as
/// index pairs next to the arena rather than inside the sections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    orientation: Orientation,
    first_line: i32,
    runs: Vec<SectionRun>,
}

impl Section {
    /// Create an empty section starting at the given scan line
    pub fn new(orientation: Orientation, first_line: i32) -> Self {
        Self {
            orientation,
            first_line,
            runs: Vec::new(),
        }
    }

    /// Append the run of the next scan line
    pub fn push(&mut self, run: SectionRun) {
        self.runs.push(run);
    }

    /// Scan orientation of the member runs
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// First scan line covered by this section
    pub fn first_line(&self) -> i32 {
        self.first_line
    }

    /// Member runs, one per consecutive scan line
    pub fn runs(&self) -> &[SectionRun] {
        &self.runs
    }

    /// Foreground pixel count
    pub fn weight(&self) -> u64 {
        self.runs.iter().map(|run| run.length as u64).sum()
    }

    /// Bounding rectangle in absolute coordinates
    pub fn bounds(&self) -> Rect {
        debug_assert!(!self.runs.is_empty());
        let min_pos = self.runs.iter().map(|r| r.start).min().unwrap_or(0);
        let max_pos = self.runs.iter().map(|r| r.stop()).max().unwrap_or(0);
        let top_left = self.orientation.absolute(self.first_line, min_pos);
        let extent = max_pos - min_pos;
        match self.orientation {
            Orientation::Vertical => Rect::new(
                top_left.x,
                top_left.y,
                self.runs.len() as u32,
                extent as u32,
            ),
            Orientation::Horizontal => Rect::new(
                top_left.x,
                top_left.y,
                extent as u32,
                self.runs.len() as u32,
            ),
        }
    }

    /// First-order moments: (sum of x, sum of y, pixel count)
    ///
    /// Integer sums, exact; shared by section and glyph centroids.
    pub(crate) fn moments(&self) -> (i64, i64, u64) {
        let mut sum_line = 0i64;
        let mut sum_pos = 0i64;
        let mut weight = 0u64;
        for (i, run) in self.runs.iter().enumerate() {
            let line = (self.first_line + i as i32) as i64;
            let len = run.length as i64;
            sum_line += line * len;
            // sum of start..stop
            sum_pos += len * run.start as i64 + len * (len - 1) / 2;
            weight += run.length as u64;
        }
        match self.orientation {
            Orientation::Vertical => (sum_line, sum_pos, weight),
            Orientation::Horizontal => (sum_pos, sum_line, weight),
        }
    }

    /// Centroid of the member pixels
    pub fn centroid(&self) -> Point {
        let (sum_x, sum_y, weight) = self.moments();
        Point::new(sum_x as f64 / weight as f64, sum_y as f64 / weight as f64)
    }

    /// Translate all geometry by an absolute (x, y) offset
    pub fn translate(&mut self, offset: PointI) {
        let (d_line, d_pos) = match self.orientation {
            Orientation::Vertical => (offset.x, offset.y),
            Orientation::Horizontal => (offset.y, offset.x),
        };
        self.first_line += d_line;
        for run in &mut self.runs {
            run.start += d_pos;
        }
    }
}
