use std::collections::BTreeSet;

use crate::core::dictionary::{intersection_keys, step_count, TermDictionary};
use crate::core::matrix::NumMatrix;

/// Presence matrices for a story/trace pair over their shared vocabulary.
#[derive(Debug, Clone)]
pub struct PresenceMatrices {
    /// Shared vocabulary, sorted lexicographically on `"{tag}:{stem}"` keys.
    pub vocabulary: Vec<String>,
    /// Story steps x vocabulary, cell (i, j) = 1 iff term j occurs in step i+1.
    pub story: NumMatrix,
    /// Trace steps x vocabulary, same convention.
    pub trace: NumMatrix,
    /// Per vocabulary term: the original story surface words behind it.
    /// Consumed by same-origin disambiguation during scoring.
    pub origin_words: Vec<BTreeSet<String>>,
}

/// Build 0/1 presence matrices from the two term dictionaries.
///
/// The vocabulary is the sorted intersection of the dictionaries' term keys.
/// Step numbers are 1-based in the dictionaries and 0-based as matrix rows;
/// this shift must be exact, since every downstream region index inherits it.
pub fn build_presence_matrices(
    story_dict: &TermDictionary,
    trace_dict: &TermDictionary,
) -> PresenceMatrices {
    let vocabulary = intersection_keys(story_dict, trace_dict);

    let story = presence_matrix(story_dict, &vocabulary, step_count(story_dict));
    let trace = presence_matrix(trace_dict, &vocabulary, step_count(trace_dict));

    // Vocabulary terms come from the key intersection, so the story dictionary
    // is guaranteed to hold every one of them.
    let origin_words = vocabulary
        .iter()
        .map(|key| story_dict[key].surface_words())
        .collect();

    PresenceMatrices {
        vocabulary,
        story,
        trace,
        origin_words,
    }
}

fn presence_matrix(dict: &TermDictionary, vocabulary: &[String], steps: usize) -> NumMatrix {
    let mut matrix = NumMatrix::zeros(steps, vocabulary.len());
    for (j, key) in vocabulary.iter().enumerate() {
        let entry = &dict[key];
        for i in 0..steps {
            if entry.occurs_in_step(i + 1) {
                matrix.set(i, j, 1.0);
            }
        }
    }
    matrix
}
