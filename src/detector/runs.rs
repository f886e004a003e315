use crate::models::{BitRaster, Orientation, Rect, Run, RunTable};

/// Converts a binary raster into run-length runs along one orientation
///
/// An optional minimum length drops runs that are too short: scanning
/// horizontally with the stem thickness as minimum removes thin
/// vertical strokes, since a stem crosses a row as a short run.
#[derive(Debug, Clone)]
pub struct RunTableFactory {
    orientation: Orientation,
    min_length: u32,
}

impl RunTableFactory {
    /// Factory keeping every run
    pub fn new(orientation: Orientation) -> Self {
        Self {
            orientation,
            min_length: 0,
        }
    }

    /// Factory keeping only runs strictly longer than `min_length`
    pub fn with_min_length(orientation: Orientation, min_length: u32) -> Self {
        Self {
            orientation,
            min_length,
        }
    }

    /// Scan the whole raster
    pub fn create(&self, binary: &BitRaster) -> RunTable {
        let full = Rect::new(0, 0, binary.width() as u32, binary.height() as u32);
        self.create_roi(binary, full)
    }

    /// Scan only within the given region, clipped to the raster bounds
    ///
    /// Emitted coordinates stay absolute.
    pub fn create_roi(&self, binary: &BitRaster, roi: Rect) -> RunTable {
        let width = binary.width();
        let height = binary.height();
        let mut table = RunTable::new(self.orientation, width, height);

        let (line_lo, line_hi, pos_lo, pos_hi) = match self.orientation {
            Orientation::Horizontal => (roi.y, roi.bottom(), roi.x, roi.right()),
            Orientation::Vertical => (roi.x, roi.right(), roi.y, roi.bottom()),
        };
        let line_lo = line_lo.max(0) as usize;
        let line_hi = (line_hi.max(0) as usize).min(self.orientation.line_count(width, height));
        let pos_lo = pos_lo.max(0) as usize;
        let pos_hi = (pos_hi.max(0) as usize).min(self.orientation.pos_count(width, height));

        for line in line_lo..line_hi {
            let mut run_start: Option<usize> = None;
            for pos in pos_lo..=pos_hi {
                let is_ink = pos < pos_hi && {
                    let p = self.orientation.absolute(line as i32, pos as i32);
                    binary.get(p.x as usize, p.y as usize)
                };
                match (run_start, is_ink) {
                    (None, true) => run_start = Some(pos),
                    (Some(start), false) => {
                        let length = (pos - start) as u32;
                        if length > self.min_length {
                            table.push_run(line, Run::new(start as u32, length));
                        }
                        run_start = None;
                    }
                    _ => {}
                }
            }
        }

        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raster_from_rows(rows: &[&str]) -> BitRaster {
        let height = rows.len();
        let width = rows[0].len();
        let mut binary = BitRaster::new(width, height);
        for (y, row) in rows.iter().enumerate() {
            for (x, c) in row.chars().enumerate() {
                binary.set(x, y, c == '#');
            }
        }
        binary
    }

    #[test]
    fn test_horizontal_runs() {
        let binary = raster_from_rows(&[
            "..##..#.", //
            "########", //
            "........",
        ]);
        let table = RunTableFactory::new(Orientation::Horizontal).create(&binary);
        assert_eq!(table.line_runs(0), &[Run::new(2, 2), Run::new(6, 1)]);
        assert_eq!(table.line_runs(1), &[Run::new(0, 8)]);
        assert!(table.line_runs(2).is_empty());
    }

    #[test]
    fn test_vertical_runs() {
        let binary = raster_from_rows(&[
            "#.", //
            "#.", //
            ".#",
        ]);
        let table = RunTableFactory::new(Orientation::Vertical).create(&binary);
        assert_eq!(table.line_runs(0), &[Run::new(0, 2)]);
        assert_eq!(table.line_runs(1), &[Run::new(2, 1)]);
    }

    #[test]
    fn test_length_filter_drops_short_runs() {
        let binary = raster_from_rows(&["##..####", "#......."]);
        let table =
            RunTableFactory::with_min_length(Orientation::Horizontal, 2).create(&binary);
        // Runs of length <= 2 are dropped
        assert_eq!(table.line_runs(0), &[Run::new(4, 4)]);
        assert!(table.line_runs(1).is_empty());
    }

    #[test]
    fn test_runs_sorted_and_disjoint() {
        let binary = raster_from_rows(&["#.##.###.#"]);
        let table = RunTableFactory::new(Orientation::Horizontal).create(&binary);
        let runs = table.line_runs(0);
        for pair in runs.windows(2) {
            assert!(pair[0].stop() <= pair[1].start);
        }
        assert_eq!(runs.len(), 4);
    }

    #[test]
    fn test_roi_restriction() {
        let binary = raster_from_rows(&[
            "########", //
            "########", //
            "########",
        ]);
        let table = RunTableFactory::new(Orientation::Horizontal)
            .create_roi(&binary, Rect::new(2, 1, 4, 1));
        assert!(table.line_runs(0).is_empty());
        assert_eq!(table.line_runs(1), &[Run::new(2, 4)]);
        assert!(table.line_runs(2).is_empty());
    }

    #[test]
    fn test_run_touching_raster_edge() {
        let binary = raster_from_rows(&["...##"]);
        let table = RunTableFactory::new(Orientation::Horizontal).create(&binary);
        assert_eq!(table.line_runs(0), &[Run::new(3, 2)]);
    }
}
