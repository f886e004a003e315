use crate::models::{Run, RunTable, Section, SectionRun};

/// Junction policy connecting runs of adjacent scan lines
///
/// Two runs connect iff their positional overlap, divided by the
/// shorter run's length, meets the ratio. Runs that merely graze each
/// other (noise) stay apart while genuine stroke continuations join.
#[derive(Debug, Clone, Copy)]
pub struct JunctionRatioPolicy {
    min_overlap_ratio: f64,
}

impl JunctionRatioPolicy {
    /// Policy with the given minimum overlap ratio
    pub fn new(min_overlap_ratio: f64) -> Self {
        Self { min_overlap_ratio }
    }

    /// Whether two runs of adjacent scan lines are connected
    pub fn connected(&self, a: &Run, b: &Run) -> bool {
        let overlap = a.stop().min(b.stop()).saturating_sub(a.start.max(b.start));
        if overlap == 0 {
            return false;
        }
        let shorter = a.length.min(b.length);
        overlap as f64 / shorter as f64 >= self.min_overlap_ratio
    }
}

impl Default for JunctionRatioPolicy {
    fn default() -> Self {
        Self::new(0.8)
    }
}

/// Per-invocation graph of sections built from one run table
///
/// Sections are stored in an arena; `edges` records junctions between
/// them by index. Every run of the source table belongs to exactly one
/// section.
#[derive(Debug, Clone)]
pub struct SectionArena {
    /// The sections, indexed by creation order
    pub sections: Vec<Section>,
    /// Junction edges between section indices
    pub edges: Vec<(u32, u32)>,
}

/// Builds sections out of a run table under a junction policy
#[derive(Debug, Clone)]
pub struct SectionFactory {
    policy: JunctionRatioPolicy,
}

impl SectionFactory {
    /// Factory using the given junction policy
    pub fn new(policy: JunctionRatioPolicy) -> Self {
        Self { policy }
    }

    /// Build the section arena for a run table
    ///
    /// A run extends the previous line's section only in the one-to-one
    /// case: exactly one connected predecessor which itself has exactly
    /// one connected successor. Any branching starts a fresh section
    /// and records junction edges to the predecessors' sections.
    pub fn create(&self, table: &RunTable) -> SectionArena {
        let mut sections: Vec<Section> = Vec::new();
        let mut edges: Vec<(u32, u32)> = Vec::new();
        // Runs of the previous scan line with their owning section
        let mut prev: Vec<(Run, u32)> = Vec::new();

        for line in 0..table.line_count() {
            let runs = table.line_runs(line);
            let mut successor_counts = vec![0usize; prev.len()];
            let mut predecessors: Vec<Vec<usize>> = vec![Vec::new(); runs.len()];
            for (pi, (prev_run, _)) in prev.iter().enumerate() {
                for (ci, run) in runs.iter().enumerate() {
                    if self.policy.connected(prev_run, run) {
                        successor_counts[pi] += 1;
                        predecessors[ci].push(pi);
                    }
                }
            }

            let mut next_prev = Vec::with_capacity(runs.len());
            for (ci, run) in runs.iter().enumerate() {
                let preds = &predecessors[ci];
                let section_run = SectionRun {
                    start: run.start as i32,
                    length: run.length,
                };
                let id = if preds.len() == 1 && successor_counts[preds[0]] == 1 {
                    // Straight continuation
                    let id = prev[preds[0]].1;
                    sections[id as usize].push(section_run);
                    id
                } else {
                    let id = sections.len() as u32;
                    let mut section = Section::new(table.orientation(), line as i32);
                    section.push(section_run);
                    sections.push(section);
                    for &pi in preds {
                        edges.push((prev[pi].1, id));
                    }
                    id
                };
                next_prev.push((*run, id));
            }
            prev = next_prev;
        }

        SectionArena { sections, edges }
    }
}
