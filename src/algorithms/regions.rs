use std::collections::BTreeMap;

use crate::core::matrix::NumMatrix;
use crate::core::region::MappingRegion;
use crate::core::vector::NumVector;

/// Candidate regions per story step, keyed 0-based. Every story step has an
/// entry, possibly empty — the interior-only policies leave the first and
/// last rows without candidates.
pub type RegionCandidates = BTreeMap<usize, Vec<MappingRegion>>;

/// Policy 1 — absolute threshold.
///
/// Per row, the trigger starts at the row mean and is lifted halfway toward
/// the maximum possible score of 100; every trace step scoring at or above it
/// enters the mask. Applied to the TF-IDF score matrix, all rows.
pub fn regions_absolute_threshold(score: &NumMatrix) -> RegionCandidates {
    let mut candidates = empty_candidates(score.rows());
    for i in 0..score.rows() {
        let row = score.row(i);
        let trigger = lifted_trigger(&row);
        let mask = threshold_mask(&row, trigger);
        candidates.insert(i, mask_to_regions(i, &mask));
    }
    candidates
}

/// Policy 2 — plain mean threshold, no lift. All rows.
pub fn regions_mean_threshold(score: &NumMatrix) -> RegionCandidates {
    let mut candidates = empty_candidates(score.rows());
    for i in 0..score.rows() {
        let row = score.row(i);
        let trigger = row.l1_norm() / row.len() as f64;
        let mask = threshold_mask(&row, trigger);
        candidates.insert(i, mask_to_regions(i, &mask));
    }
    candidates
}

/// Policy 3 — neighbor differential over the disambiguated score matrix.
///
/// Only interior story steps have both neighbors, so rows 0 and n-1 stay
/// empty. A trace step is inside the region when the score was higher at the
/// previous story step (enter) and does not increase at the next one (exit):
/// a local-plateau detector.
pub fn regions_differential(score2: &NumMatrix) -> RegionCandidates {
    let mut candidates = empty_candidates(score2.rows());
    for i in interior_rows(score2.rows()) {
        let mask = differential_mask(score2, i);
        candidates.insert(i, mask_to_regions(i, &mask));
    }
    candidates
}

/// Policy 4 — combined: differential mask first, TF-IDF mask as fallback.
///
/// For cells the differential mask excludes, the policy falls back to the
/// policy-1 binarization of the TF-IDF row (`invert` zeroes cells the
/// differential mask already set). Interior rows only. This is the policy
/// that feeds path selection.
pub fn regions_combined(score1: &NumMatrix, score2: &NumMatrix) -> RegionCandidates {
    assert_eq!(
        (score1.rows(), score1.cols()),
        (score2.rows(), score2.cols()),
        "score matrix dimension mismatch"
    );

    let mut candidates = empty_candidates(score1.rows());
    for i in interior_rows(score1.rows()) {
        let tfidf_row = score1.row(i);
        let tfidf_mask = threshold_mask(&tfidf_row, lifted_trigger(&tfidf_row));
        let triplet_mask = differential_mask(score2, i);

        let mask = triplet_mask.add(&tfidf_mask.mul(&triplet_mask.invert()));
        candidates.insert(i, mask_to_regions(i, &mask));
    }
    candidates
}

/// Convert a 0/1 mask into contiguous-run regions for one story step.
///
/// A run opens on the first 1 and closes at the next 0 or at the vector's
/// last index; the closing index is the region end.
pub fn mask_to_regions(story_index: usize, mask: &NumVector) -> Vec<MappingRegion> {
    let mut regions = Vec::new();
    let mut start = 0;
    let mut capturing = false;

    for j in 0..mask.len() {
        if !capturing && mask.get(j) == 1.0 {
            capturing = true;
            start = j;
        }
        if capturing && (mask.get(j) == 0.0 || j == mask.len() - 1) {
            regions.push(MappingRegion::new(story_index, start, j));
            capturing = false;
        }
    }

    regions
}

fn empty_candidates(rows: usize) -> RegionCandidates {
    (0..rows).map(|i| (i, Vec::new())).collect()
}

fn interior_rows(rows: usize) -> std::ops::Range<usize> {
    1..rows.saturating_sub(1)
}

/// Row mean lifted halfway toward the maximum possible score of 100.
fn lifted_trigger(row: &NumVector) -> f64 {
    let mean = row.l1_norm() / row.len() as f64;
    mean + (100.0 - mean) / 2.0
}

fn threshold_mask(row: &NumVector, trigger: f64) -> NumVector {
    let mut mask = NumVector::zeros(row.len());
    for j in 0..row.len() {
        mask.set(j, if row.get(j) < trigger { 0.0 } else { 1.0 });
    }
    mask
}

fn differential_mask(score2: &NumMatrix, i: usize) -> NumVector {
    let previous = score2.row(i - 1);
    let current = score2.row(i);
    let next = score2.row(i + 1);

    let enter = previous.sub(&current);
    let exit = next.sub(&current);

    let mut enter_mask = NumVector::zeros(score2.cols());
    let mut exit_mask = NumVector::zeros(score2.cols());
    for j in 0..score2.cols() {
        enter_mask.set(j, if enter.get(j) < 0.0 { 1.0 } else { 0.0 });
        exit_mask.set(j, if exit.get(j) <= 0.0 { 1.0 } else { 0.0 });
    }

    enter_mask.mul(&exit_mask)
}
