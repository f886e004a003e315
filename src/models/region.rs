use super::glyph::Glyph;

/// Header geometry of a region's staff set
///
/// `stop` is the abscissa where the first staff's header zone ends;
/// the two ordinates locate the first staff's top line and the last
/// staff's bottom line at that abscissa.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaffHeader {
    /// Abscissa where the header zone ends (inclusive)
    pub stop: i32,
    /// Ordinate of the first staff's top line at `stop`
    pub first_line_y: i32,
    /// Ordinate of the last staff's bottom line at `stop`
    pub last_line_y: i32,
}

/// Externally supplied spatial region ("system") owning dispatched glyphs
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    /// Left bound (inclusive)
    pub left: i32,
    /// Right bound (inclusive)
    pub right: i32,
    /// Top of the vertical span (inclusive)
    pub top: i32,
    /// Bottom of the vertical span (inclusive)
    pub bottom: i32,
    /// Header geometry reported by the staff set
    pub header: StaffHeader,
    glyphs: Vec<Glyph>,
}

impl Region {
    /// Create a region with empty glyph collection
    pub fn new(left: i32, right: i32, top: i32, bottom: i32, header: StaffHeader) -> Self {
        Self {
            left,
            right,
            top,
            bottom,
            header,
            glyphs: Vec::new(),
        }
    }

    /// Whether an ordinate falls inside the vertical span (closed interval)
    pub fn contains_y(&self, y: f64) -> bool {
        y >= self.top as f64 && y <= self.bottom as f64
    }

    /// Whether an abscissa falls inside [left, right] (closed interval)
    pub fn contains_x(&self, x: f64) -> bool {
        x >= self.left as f64 && x <= self.right as f64
    }

    /// Register a glyph into this region
    pub fn register_glyph(&mut self, glyph: Glyph) {
        self.glyphs.push(glyph);
    }

    /// Glyphs registered so far
    pub fn glyphs(&self) -> &[Glyph] {
        &self.glyphs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn region() -> Region {
        Region::new(
            10,
            90,
            20,
            60,
            StaffHeader {
                stop: 25,
                first_line_y: 24,
                last_line_y: 56,
            },
        )
    }

    #[test]
    fn test_closed_intervals() {
        let r = region();
        assert!(r.contains_x(10.0));
        assert!(r.contains_x(90.0));
        assert!(!r.contains_x(90.5));
        assert!(r.contains_y(20.0));
        assert!(r.contains_y(60.0));
        assert!(!r.contains_y(19.9));
    }
}
