use std::path::Path;

use storytrace_rs::io::dictionary::load_dictionary;
use storytrace_rs::io::mapping::load_mapping;
use storytrace_rs::{
    regions_absolute_threshold, regions_differential, regions_mean_threshold, AlignmentConfig,
    AlignmentEngine, TermDictionary,
};

fn load_fixture_dict(name: &str) -> TermDictionary {
    let path = format!("tests/fixtures/{name}");
    load_dictionary(Path::new(&path))
        .unwrap_or_else(|e| panic!("fixture dictionary {path} failed to load: {e}"))
}

#[test]
fn test_login_scenario_end_to_end() {
    let story = load_fixture_dict("login_story.dict");
    let trace = load_fixture_dict("login_trace.dict");
    assert_eq!(story.len(), 12);
    assert_eq!(trace.len(), 14);

    let engine = AlignmentEngine::new(AlignmentConfig::default());
    let result = engine.align(&story, &trace);

    // Trace-only terms never enter the shared vocabulary.
    assert_eq!(result.presence.vocabulary.len(), 12);
    assert!(!result.presence.vocabulary.contains(&"c:buffer".to_string()));

    assert_eq!(result.tfidf_scores.rows(), 6);
    assert_eq!(result.tfidf_scores.cols(), 20);
    assert_eq!(result.disambiguated_scores.rows(), 6);
    assert_eq!(result.disambiguated_scores.cols(), 20);

    for i in 0..6 {
        let row = result.tfidf_scores.row(i);
        let max = row.max();
        assert!(
            max == 0.0 || (max - 100.0).abs() < 1e-9,
            "row {i} should be rescaled to peak at 100, got {max}"
        );
        for t in 0..20 {
            assert!((0.0..=100.0 + 1e-9).contains(&row.get(t)));
        }
    }

    for j in 0..result.idf.len() {
        assert!((0.0..=1.0).contains(&result.idf.get(j)));
    }
}

#[test]
fn test_login_scenario_path_shape() {
    let story = load_fixture_dict("login_story.dict");
    let trace = load_fixture_dict("login_trace.dict");

    let result = AlignmentEngine::default().align(&story, &trace);
    let path = &result.path;

    assert_eq!(path.regions.len(), 6);
    assert!(path.is_contiguous(), "path has gaps or overlaps: {path:?}");
    assert_eq!(path.regions[0].start, 0);
    assert_eq!(path.regions[5].end, 19);
    for (i, region) in path.regions.iter().enumerate() {
        assert_eq!(region.story_index, i);
        assert!(region.start <= region.end);
    }
}

#[test]
fn test_login_scenario_evaluation() {
    let story = load_fixture_dict("login_story.dict");
    let trace = load_fixture_dict("login_trace.dict");
    let mapping = load_mapping(Path::new("tests/fixtures/login_mapping.map")).unwrap();
    assert_eq!(mapping.len(), 6);

    let engine = AlignmentEngine::default();
    let result = engine.align(&story, &trace);
    let report = engine.evaluate(&result, &mapping);

    assert_eq!(report.story_steps, 6);
    assert!(report.matching_steps <= 6);
    assert!((0.0..=1.0).contains(&report.precision));
    assert!((0.0..=1.0).contains(&report.recall));
    assert!((0.0..=1.0).contains(&report.f_measure));
    assert!(!report.f_measure.is_nan());
}

#[test]
fn test_extraction_policies_cover_every_story_step() {
    let story = load_fixture_dict("login_story.dict");
    let trace = load_fixture_dict("login_trace.dict");

    let result = AlignmentEngine::default().align(&story, &trace);

    // Row-local policies produce an entry for every story step.
    for candidates in [
        regions_absolute_threshold(&result.tfidf_scores),
        regions_mean_threshold(&result.tfidf_scores),
    ] {
        assert_eq!(candidates.len(), 6);
        for i in 0..6 {
            assert!(candidates.contains_key(&i));
        }
    }

    // Neighbor-based policies leave the boundary rows without candidates.
    for candidates in [
        regions_differential(&result.disambiguated_scores),
        result.candidates.clone(),
    ] {
        assert_eq!(candidates.len(), 6);
        assert!(candidates[&0].is_empty());
        assert!(candidates[&5].is_empty());
    }

    // The mean trigger admits at least as many cells as the lifted one.
    let absolute = regions_absolute_threshold(&result.tfidf_scores);
    let mean = regions_mean_threshold(&result.tfidf_scores);
    for i in 0..6 {
        let absolute_len: i64 = absolute[&i].iter().map(|r| r.length()).sum();
        let mean_len: i64 = mean[&i].iter().map(|r| r.length()).sum();
        assert!(mean_len >= absolute_len, "story step {i}");
    }
}
