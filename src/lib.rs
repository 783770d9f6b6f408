pub mod algorithms;
pub mod core;
pub mod io;

pub use crate::algorithms::evaluate::{evaluate, EvaluationReport};
pub use crate::algorithms::path::{ground_truth_path, select_path, MappingPath};
pub use crate::algorithms::presence::{build_presence_matrices, PresenceMatrices};
pub use crate::algorithms::regions::{
    regions_absolute_threshold, regions_combined, regions_differential, regions_mean_threshold,
    RegionCandidates,
};
pub use crate::algorithms::scoring::{
    disambiguated_score_matrix, tfidf_score_matrix, DEFAULT_WINDOW_SIZE,
};
pub use crate::algorithms::weighting::trace_idf_vector;
pub use crate::core::dictionary::{TermDictionary, TermEntry, WordKind};
pub use crate::core::error::AlignError;
pub use crate::core::matrix::NumMatrix;
pub use crate::core::region::MappingRegion;
pub use crate::core::vector::NumVector;

use std::collections::BTreeMap;

use tracing::debug;

/// Tunable knobs of the alignment pipeline.
#[derive(Debug, Clone)]
pub struct AlignmentConfig {
    /// Sliding-window size for score reduction; forced odd downstream.
    pub window_size: usize,
}

impl AlignmentConfig {
    pub fn new(window_size: usize) -> Self {
        Self { window_size }
    }
}

impl Default for AlignmentConfig {
    fn default() -> Self {
        Self {
            window_size: DEFAULT_WINDOW_SIZE,
        }
    }
}

/// Everything the pipeline produces for one story/trace pair.
#[derive(Debug, Clone)]
pub struct AlignmentResult {
    pub presence: PresenceMatrices,
    /// Trace-side inverse document frequency per vocabulary term.
    pub idf: NumVector,
    /// TF-IDF score matrix, story steps x trace steps.
    pub tfidf_scores: NumMatrix,
    /// Same-origin-disambiguated score matrix, same shape.
    pub disambiguated_scores: NumMatrix,
    /// Candidate regions from the combined extraction policy.
    pub candidates: RegionCandidates,
    /// The selected story-to-trace path, one region per story step.
    pub path: MappingPath,
}

/// High-level facade running the full story-to-trace alignment pipeline.
///
/// # Examples
///
/// ```
/// use storytrace_rs::{AlignmentConfig, AlignmentEngine};
/// use storytrace_rs::io::dictionary::parse_dictionary;
///
/// let story = parse_dictionary("s:user:(user,1)\na:open:(opens,2)\na:close:(closes,3)\n");
/// let trace = parse_dictionary("s:user:(user,1,2)\na:open:(open,4,5)\na:close:(close,9)\n");
///
/// let engine = AlignmentEngine::new(AlignmentConfig::default());
/// let result = engine.align(&story, &trace);
/// assert_eq!(result.path.regions.len(), 3);
/// assert!(result.path.is_contiguous());
/// ```
#[derive(Debug, Clone, Default)]
pub struct AlignmentEngine {
    config: AlignmentConfig,
}

impl AlignmentEngine {
    /// Create a new engine with the given configuration.
    pub fn new(config: AlignmentConfig) -> Self {
        Self { config }
    }

    /// Run the full pipeline: presence matrices, IDF weighting, both score
    /// matrices, combined region extraction and greedy path selection.
    ///
    /// Panics if either dictionary references no steps, since a path over an
    /// empty story or trace is meaningless.
    pub fn align(
        &self,
        story_dict: &TermDictionary,
        trace_dict: &TermDictionary,
    ) -> AlignmentResult {
        let presence = build_presence_matrices(story_dict, trace_dict);
        debug!(
            story_steps = presence.story.rows(),
            trace_steps = presence.trace.rows(),
            vocabulary = presence.vocabulary.len(),
            "built presence matrices"
        );

        let idf = trace_idf_vector(&presence.trace);
        let tfidf_scores = tfidf_score_matrix(&presence, &idf, self.config.window_size);
        let disambiguated_scores =
            disambiguated_score_matrix(&presence, &idf, self.config.window_size);

        let candidates = regions_combined(&tfidf_scores, &disambiguated_scores);
        let path = select_path(&candidates, presence.trace.rows());
        debug!(
            regions = path.regions.len(),
            degraded = path.degraded_steps.len(),
            "selected mapping path"
        );

        AlignmentResult {
            presence,
            idf,
            tfidf_scores,
            disambiguated_scores,
            candidates,
            path,
        }
    }

    /// Score an alignment result against a manual story-to-trace mapping
    /// (1-based on both sides, as parsed by [`io::mapping::load_mapping`]).
    pub fn evaluate(
        &self,
        result: &AlignmentResult,
        mapping: &BTreeMap<usize, usize>,
    ) -> EvaluationReport {
        let truth = ground_truth_path(mapping, result.presence.trace.rows());
        evaluate(&truth, &result.path.regions)
    }
}
