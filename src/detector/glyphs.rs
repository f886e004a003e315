use super::sections::SectionArena;
use crate::models::{Glyph, GlyphLayer, PointI};

/// Union-Find over section indices
///
/// Iterative find with path halving plus union by rank, so arbitrarily
/// long junction chains stay cheap and never recurse.
pub struct UnionFind {
    parent: Vec<u32>,
    rank: Vec<u8>,
}

impl UnionFind {
    /// Disjoint sets over `n` elements
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n as u32).collect(),
            rank: vec![0; n],
        }
    }

    /// Representative of the set holding `x`
    pub fn find(&mut self, mut x: u32) -> u32 {
        while self.parent[x as usize] != x {
            let grandparent = self.parent[self.parent[x as usize] as usize];
            self.parent[x as usize] = grandparent;
            x = grandparent;
        }
        x
    }

    /// Merge the sets holding `x` and `y`
    pub fn union(&mut self, x: u32, y: u32) {
        let mut root_x = self.find(x);
        let mut root_y = self.find(y);
        if root_x == root_y {
            return;
        }
        if self.rank[root_x as usize] < self.rank[root_y as usize] {
            std::mem::swap(&mut root_x, &mut root_y);
        }
        self.parent[root_y as usize] = root_x;
        if self.rank[root_x as usize] == self.rank[root_y as usize] {
            self.rank[root_x as usize] += 1;
        }
    }
}

/// Merge an arena's sections into glyphs, one per weakly-connected
/// cluster under the recorded junction edges
///
/// If an offset is supplied, every section's geometry is translated
/// first, so cue-snapshot coordinates come out re-expressed in page
/// coordinates. Output order follows the arena's section order, which
/// keeps repeated invocations bit-identical.
pub fn build_glyphs(arena: SectionArena, offset: Option<PointI>, layer: GlyphLayer) -> Vec<Glyph> {
    let SectionArena {
        mut sections,
        edges,
    } = arena;

    if let Some(offset) = offset {
        for section in &mut sections {
            section.translate(offset);
        }
    }

    let mut uf = UnionFind::new(sections.len());
    for (a, b) in edges {
        uf.union(a, b);
    }

    // Cluster slots in first-seen section order for determinism
    let mut slot_of_root = vec![usize::MAX; sections.len()];
    let mut clusters: Vec<Vec<crate::models::Section>> = Vec::new();
    for (index, section) in sections.into_iter().enumerate() {
        let root = uf.find(index as u32) as usize;
        if slot_of_root[root] == usize::MAX {
            slot_of_root[root] = clusters.len();
            clusters.push(Vec::new());
        }
        clusters[slot_of_root[root]].push(section);
    }

    clusters
        .into_iter()
        .map(|sections| Glyph::new(sections, layer))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detector::runs::RunTableFactory;
    use crate::detector::sections::{JunctionRatioPolicy, SectionFactory};
    use crate::models::{BitRaster, Orientation, Rect};

    fn arena_from_rows(rows: &[&str]) -> SectionArena {
        let height = rows.len();
        let width = rows[0].len();
        let mut binary = BitRaster::new(width, height);
        for (y, row) in rows.iter().enumerate() {
            for (x, c) in row.chars().enumerate() {
                binary.set(x, y, c == '#');
            }
        }
        let table = RunTableFactory::new(Orientation::Vertical).create(&binary);
        SectionFactory::new(JunctionRatioPolicy::default()).create(&table)
    }

    #[test]
    fn test_branch_rejoins_into_one_glyph() {
        // The branch splits sections, but the junction edges pull the
        // cluster back together into a single glyph
        let arena = arena_from_rows(&[
            "##", //
            "##", //
            "#.", //
            "##", //
            "##",
        ]);
        assert_eq!(arena.sections.len(), 3);
        let glyphs = build_glyphs(arena, None, GlyphLayer::Spot);
        assert_eq!(glyphs.len(), 1);
        assert_eq!(glyphs[0].weight(), 9);
        assert_eq!(glyphs[0].bounds(), Rect::new(0, 0, 2, 5));
    }

    #[test]
    fn test_disjoint_blobs_stay_apart() {
        let arena = arena_from_rows(&[
            "##..##", //
            "##..##",
        ]);
        let glyphs = build_glyphs(arena, None, GlyphLayer::Spot);
        assert_eq!(glyphs.len(), 2);
        assert_eq!(glyphs[0].bounds(), Rect::new(0, 0, 2, 2));
        assert_eq!(glyphs[1].bounds(), Rect::new(4, 0, 2, 2));
    }

    #[test]
    fn test_offset_translates_geometry() {
        let make = || {
            arena_from_rows(&[
                "###", //
                "###",
            ])
        };
        let offset = PointI::new(100, 50);
        let base = build_glyphs(make(), None, GlyphLayer::Spot);
        let moved = build_glyphs(make(), Some(offset), GlyphLayer::Spot);
        assert_eq!(moved[0].bounds(), base[0].bounds().translated(offset));
        assert_eq!(moved[0].centroid().x, base[0].centroid().x + 100.0);
        assert_eq!(moved[0].centroid().y, base[0].centroid().y + 50.0);
    }

    #[test]
    fn test_long_union_chain() {
        // A degenerate arena where every section joins the next; the
        // chain is far deeper than any stack could recurse through
        let n = 200_000u32;
        let mut uf = UnionFind::new(n as usize);
        for i in 0..n - 1 {
            uf.union(i, i + 1);
        }
        let root = uf.find(0);
        assert_eq!(uf.find(n - 1), root);
        assert_eq!(uf.find(n / 2), root);
    }

    #[test]
    fn test_offset_round_trip() {
        let offset = PointI::new(-7, 13);
        let base = build_glyphs(arena_from_rows(&["####"]), None, GlyphLayer::Spot);
        let there = build_glyphs(arena_from_rows(&["####"]), Some(offset), GlyphLayer::Spot);
        let mut sections = there[0].sections().to_vec();
        for section in &mut sections {
            section.translate(offset.negated());
        }
        let back = Glyph::new(sections, GlyphLayer::Spot);
        assert_eq!(back.bounds(), base[0].bounds());
        assert_eq!(back.centroid(), base[0].centroid());
    }
}
