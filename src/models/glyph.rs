use super::point::{Point, Rect};
use super::section::Section;

/// Shape identity assigned to a dispatched glyph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpotShape {
    /// Candidate occurrence of a beam stroke
    BeamSpot,
}

/// Layer tag distinguishing glyph producers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlyphLayer {
    /// Glyphs produced by morphological spot extraction
    Spot,
}

/// Connected cluster of sections treated as one shape
#[derive(Debug, Clone, PartialEq)]
pub struct Glyph {
    sections: Vec<Section>,
    layer: GlyphLayer,
    shape: Option<SpotShape>,
}

impl Glyph {
    /// Assemble a glyph from its member sections
    ///
    /// # Panics
    /// Panics if `sections` is empty.
    pub(crate) fn new(sections: Vec<Section>, layer: GlyphLayer) -> Self {
        assert!(!sections.is_empty(), "a glyph needs at least one section");
        Self {
            sections,
            layer,
            shape: None,
        }
    }

    /// Member sections
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Producer layer tag
    pub fn layer(&self) -> GlyphLayer {
        self.layer
    }

    /// Assigned shape, if any
    pub fn shape(&self) -> Option<SpotShape> {
        self.shape
    }

    /// Assign the shape identity
    pub fn set_shape(&mut self, shape: SpotShape) {
        self.shape = Some(shape);
    }

    /// Foreground pixel count over all sections
    pub fn weight(&self) -> u64 {
        self.sections.iter().map(Section::weight).sum()
    }

    /// Union of the member sections' bounding rectangles
    pub fn bounds(&self) -> Rect {
        let mut bounds = self.sections[0].bounds();
        for section in &self.sections[1..] {
            bounds = bounds.union(&section.bounds());
        }
        bounds
    }

    /// Pixel-weighted centroid over all sections
    pub fn centroid(&self) -> Point {
        let mut sum_x = 0i64;
        let mut sum_y = 0i64;
        let mut weight = 0u64;
        for section in &self.sections {
            let (sx, sy, w) = section.moments();
            sum_x += sx;
            sum_y += sy;
            weight += w;
        }
        Point::new(sum_x as f64 / weight as f64, sum_y as f64 / weight as f64)
    }
}
