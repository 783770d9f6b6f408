use std::collections::BTreeSet;

use crate::algorithms::presence::PresenceMatrices;
use crate::algorithms::smoothing::sma;
use crate::core::matrix::NumMatrix;
use crate::core::vector::NumVector;

/// Default sliding-window size for score reduction.
pub const DEFAULT_WINDOW_SIZE: usize = 7;

/// TF-IDF score matrix ("score matrix 1"): story steps x trace steps.
///
/// For every story step, each trace step's column of the matching matrix is
/// `storyRow ⊙ traceRow ⊙ idf`, reduced by the centered window mean and
/// rescaled so the row maximum is 100. Rows are independent; no neighbor
/// information is used.
pub fn tfidf_score_matrix(
    presence: &PresenceMatrices,
    idf: &NumVector,
    window_size: usize,
) -> NumMatrix {
    score_matrix(presence, idf, window_size, false)
}

/// Same-origin-disambiguated score matrix ("score matrix 2").
///
/// Identical to [`tfidf_score_matrix`] except that, per trace step, vocabulary
/// terms stemming from a shared original surface word are collapsed to a
/// single cell before the window reduction, so one real token never counts
/// twice. The differential region policies consume adjacent rows of this
/// matrix.
pub fn disambiguated_score_matrix(
    presence: &PresenceMatrices,
    idf: &NumVector,
    window_size: usize,
) -> NumMatrix {
    score_matrix(presence, idf, window_size, true)
}

fn score_matrix(
    presence: &PresenceMatrices,
    idf: &NumVector,
    window_size: usize,
    collapse_origins: bool,
) -> NumMatrix {
    let story_steps = presence.story.rows();
    let trace_steps = presence.trace.rows();
    let mut output = NumMatrix::zeros(story_steps, trace_steps);

    for i in 0..story_steps {
        let story_row = presence.story.row(i);
        let matching = matching_matrix(
            &story_row,
            &presence.trace,
            idf,
            collapse_origins.then_some(&presence.origin_words),
        );
        let scores = score_vector(&matching, window_size);
        output.set_row(i, &scores.normalize(100.0));
    }

    output
}

/// Matching matrix for one story step: vocabulary x trace steps.
///
/// Column `t` holds `storyRow ⊙ traceRow(t) ⊙ idf`, optionally with
/// same-origin collapse applied.
fn matching_matrix(
    story_row: &NumVector,
    trace: &NumMatrix,
    idf: &NumVector,
    origin_words: Option<&Vec<BTreeSet<String>>>,
) -> NumMatrix {
    let mut matching = NumMatrix::zeros(story_row.len(), trace.rows());

    for t in 0..trace.rows() {
        let mut column = story_row.mul(&trace.row(t)).mul(idf);
        if let Some(origins) = origin_words {
            collapse_same_origin(&mut column, origins);
        }
        matching.set_column(t, &column);
    }

    matching
}

/// Collapse vocabulary cells that trace back to a shared original word.
///
/// Pairs are visited in stable left-to-right order (`k` outer, `l` inner over
/// all ordered pairs); both cells must still be positive when compared. The
/// larger weight survives at `k`, the other cell is zeroed. A cell zeroed by
/// an earlier pair is no longer positive and drops out of later comparisons.
fn collapse_same_origin(column: &mut NumVector, origin_words: &[BTreeSet<String>]) {
    for k in 0..column.len() {
        for l in 0..column.len() {
            if k == l || column.get(k) <= 0.0 || column.get(l) <= 0.0 {
                continue;
            }
            if !origin_words[k].is_disjoint(&origin_words[l]) {
                let weight = column.get(k).max(column.get(l));
                column.set(k, weight);
                column.set(l, 0.0);
            }
        }
    }
}

/// Reduce a matching matrix to one score per trace step.
///
/// The score at trace step `t` is the mean of all cells in the zero-padded
/// window of columns `[t-h, t+h]`, divided by `vocabulary x window`. Computed
/// as a column-sum vector pushed through [`sma`] and scaled by the row count.
fn score_vector(matching: &NumMatrix, window_size: usize) -> NumVector {
    let trace_steps = matching.cols();
    let vocab = matching.rows();
    if vocab == 0 {
        // No shared vocabulary: all scores are zero, not NaN.
        return NumVector::zeros(trace_steps);
    }

    let mut column_sums = NumVector::zeros(trace_steps);
    for t in 0..trace_steps {
        column_sums.set(t, matching.column(t).as_slice().iter().sum());
    }

    sma(&column_sums, window_size).scale(1.0 / vocab as f64)
}
