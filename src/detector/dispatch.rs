use tracing::debug;

use crate::models::{Glyph, Region, SpotShape};

/// Dispatch spots among their containing region(s)
///
/// A glyph is offered to every region whose vertical span contains its
/// centroid, and registered (with the beam-candidate tag) into each of
/// those whose closed horizontal interval [left, right] contains the
/// centroid abscissa. A glyph can land in several regions but counts
/// once; a glyph matching no region is silently dropped. An empty
/// region list yields zero registrations.
pub fn dispatch_spots(spots: Vec<Glyph>, regions: &mut [Region]) -> usize {
    let mut count = 0;

    for glyph in spots {
        let center = glyph.centroid();
        let mut registered = false;

        for region in regions.iter_mut() {
            if !region.contains_y(center.y) {
                continue;
            }
            // Check glyph is within region abscissa boundaries
            if region.contains_x(center.x) {
                let mut tagged = glyph.clone();
                tagged.set_shape(SpotShape::BeamSpot);
                region.register_glyph(tagged);
                registered = true;
            }
        }

        if registered {
            count += 1;
        }
    }

    debug!(count, "spots dispatched");
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GlyphLayer, Orientation, Section, SectionRun, StaffHeader};

    /// Square blob glyph whose centroid is at (cx, cy), both ending in .5
    /// for even sizes or exact integers for odd sizes
    fn blob(left: i32, top: i32, size: u32) -> Glyph {
        let mut section = Section::new(Orientation::Vertical, left);
        for _ in 0..size {
            section.push(SectionRun {
                start: top,
                length: size,
            });
        }
        Glyph::new(vec![section], GlyphLayer::Spot)
    }

    fn region(left: i32, right: i32, top: i32, bottom: i32) -> Region {
        Region::new(
            left,
            right,
            top,
            bottom,
            StaffHeader {
                stop: left,
                first_line_y: top,
                last_line_y: bottom,
            },
        )
    }

    #[test]
    fn test_boundary_abscissa_is_registered() {
        // 3x3 blob centered at x = 20 = region.right
        let glyph = blob(19, 10, 3);
        assert_eq!(glyph.centroid().x, 20.0);
        let mut regions = vec![region(0, 20, 0, 40)];
        let count = dispatch_spots(vec![glyph], &mut regions);
        assert_eq!(count, 1);
        assert_eq!(regions[0].glyphs().len(), 1);
        assert_eq!(regions[0].glyphs()[0].shape(), Some(SpotShape::BeamSpot));

        // Same at the left bound
        let mut regions = vec![region(20, 40, 0, 40)];
        let count = dispatch_spots(vec![blob(19, 10, 3)], &mut regions);
        assert_eq!(count, 1);
    }

    #[test]
    fn test_outside_abscissa_is_dropped() {
        // Centroid x = 50, inside the vertical span but right of the region
        let glyph = blob(49, 10, 3);
        let mut regions = vec![region(0, 40, 0, 40)];
        let count = dispatch_spots(vec![glyph], &mut regions);
        assert_eq!(count, 0);
        assert!(regions[0].glyphs().is_empty());
    }

    #[test]
    fn test_shared_vertical_span_counts_once() {
        // Two vertically overlapping regions both contain the centroid
        let glyph = blob(9, 19, 3);
        let mut regions = vec![region(0, 40, 0, 25), region(0, 40, 15, 40)];
        let count = dispatch_spots(vec![glyph], &mut regions);
        assert_eq!(count, 1);
        assert_eq!(regions[0].glyphs().len(), 1);
        assert_eq!(regions[1].glyphs().len(), 1);
    }

    #[test]
    fn test_empty_region_list() {
        let mut regions: Vec<Region> = Vec::new();
        let count = dispatch_spots(vec![blob(0, 0, 3)], &mut regions);
        assert_eq!(count, 0);
    }
}
