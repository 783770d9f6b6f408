use std::collections::BTreeMap;

use tracing::warn;

use crate::algorithms::regions::RegionCandidates;
use crate::core::region::MappingRegion;

/// Result of path selection: one region per story step, contiguous and
/// non-overlapping across the trace.
#[derive(Debug, Clone)]
pub struct MappingPath {
    pub regions: Vec<MappingRegion>,
    /// Story steps that had no usable candidate and received a synthesized
    /// zero-length region instead.
    pub degraded_steps: Vec<usize>,
}

impl MappingPath {
    /// True if every adjacent pair shares exactly its boundary index.
    pub fn is_contiguous(&self) -> bool {
        self.regions
            .windows(2)
            .all(|pair| pair[0].end == pair[1].start)
    }
}

/// Greedily select one region per story step from the candidate lists.
///
/// Works on private copies of the candidates, so the extraction results stay
/// intact for reporting. Synthetic anchors pin the path to the trace
/// boundaries: `(0, 0, 0)` for the first story step and
/// `(last, traceLen-1, traceLen-1)` for the last.
///
/// Walking story steps left to right, the candidate with `end > current.start`
/// and the smallest center distance to the current region is chosen (first
/// encountered wins a tie), then overlaps are reconciled:
///
/// - no intersection: the current region extends forward to meet the next;
/// - next fully inside current: current cedes its tail, ending where next starts;
/// - partial overlap: next cedes its head, starting where current ends.
///
/// A story step whose candidate list yields nothing gets a zero-length region
/// at the current region's end and is recorded in `degraded_steps`; the rest
/// of the batch is unaffected.
pub fn select_path(candidates: &RegionCandidates, trace_len: usize) -> MappingPath {
    let story_count = candidates.len();
    assert!(story_count > 0, "no story steps");
    assert!(trace_len > 0, "empty trace");

    // Private, mutable copies of every candidate list.
    let mut lists: Vec<Vec<MappingRegion>> = (0..story_count)
        .map(|i| candidates.get(&i).cloned().unwrap_or_default())
        .collect();

    let first = MappingRegion::new(0, 0, 0);
    lists[0].push(first);
    let last_anchor = MappingRegion::new(story_count - 1, trace_len - 1, trace_len - 1);
    lists[story_count - 1].push(last_anchor);

    let mut path = vec![first];
    let mut degraded_steps = Vec::new();

    for (i, list) in lists.iter().enumerate().skip(1) {
        let current = *path.last().expect("path is never empty");

        let mut next = match nearest_rightward(list, &current) {
            Some(region) => region,
            None => {
                warn!(
                    story_step = i,
                    "no rightward candidate region; degrading to a zero-length region"
                );
                degraded_steps.push(i);
                MappingRegion::new(i, current.end, current.end)
            }
        };

        let current = path.last_mut().expect("path is never empty");
        if !next.intersects(current) {
            // Gap: extend the current region forward to meet the next one.
            current.end = next.start;
        } else if next.is_inside(current) {
            // Next is swallowed by current: truncate current's tail.
            current.end = next.intersection(current).start;
        } else {
            // Partial overlap: next cedes its head to current.
            next.start = next.intersection(current).end;
        }

        path.push(next);
    }

    MappingPath {
        regions: path,
        degraded_steps,
    }
}

/// The candidate at least partially right of `current.start` with the
/// smallest center distance. Strict improvement only, so the first candidate
/// encountered wins ties.
fn nearest_rightward(
    candidates: &[MappingRegion],
    current: &MappingRegion,
) -> Option<MappingRegion> {
    let mut best: Option<MappingRegion> = None;
    for region in candidates {
        if region.end <= current.start {
            continue;
        }
        match best {
            None => best = Some(*region),
            Some(chosen) => {
                if region.distance(current) < chosen.distance(current) {
                    best = Some(*region);
                }
            }
        }
    }
    best
}

/// Build the ground-truth path from a manual story-step -> trace-step map
/// (both sides 1-based). Each story step spans from its mapped trace step to
/// the next mapped step, or to the trace's end for the last entry.
pub fn ground_truth_path(
    mapping: &BTreeMap<usize, usize>,
    trace_len: usize,
) -> Vec<MappingRegion> {
    let entries: Vec<(usize, usize)> = mapping.iter().map(|(&s, &t)| (s, t)).collect();

    entries
        .iter()
        .enumerate()
        .map(|(i, &(story, trace))| {
            let end = entries
                .get(i + 1)
                .map_or(trace_len - 1, |&(_, next_trace)| next_trace - 1);
            MappingRegion::new(story - 1, trace - 1, end)
        })
        .collect()
}
