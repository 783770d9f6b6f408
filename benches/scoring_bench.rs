use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use storytrace_rs::{
    build_presence_matrices, disambiguated_score_matrix, regions_combined, select_path,
    tfidf_score_matrix, trace_idf_vector, AlignmentEngine, TermDictionary, TermEntry, WordKind,
    DEFAULT_WINDOW_SIZE,
};

/// Synthetic dictionary: `vocab` terms spread over `steps` steps, each term
/// occurring every `vocab / 4 + 1` steps at a term-specific phase.
fn synthetic_dict(vocab: usize, steps: usize) -> TermDictionary {
    let kinds = [WordKind::Subject, WordKind::Action, WordKind::Complement];
    let mut dict = TermDictionary::new();
    for term in 0..vocab {
        let mut entry = TermEntry::new(kinds[term % 3], &format!("term{term:04}"));
        let stride = vocab / 4 + 1;
        let mut step = term % stride + 1;
        while step <= steps {
            entry.add_occurrence(&format!("word{term:04}"), step);
            step += stride;
        }
        dict.insert(entry.key(), entry);
    }
    dict
}

fn bench_score_matrices(c: &mut Criterion) {
    let mut group = c.benchmark_group("score_matrices");
    group.sample_size(20);
    for trace_steps in [100, 500, 1_000] {
        let story = synthetic_dict(200, 50);
        let trace = synthetic_dict(200, trace_steps);
        let presence = build_presence_matrices(&story, &trace);
        let idf = trace_idf_vector(&presence.trace);

        group.bench_with_input(BenchmarkId::new("tfidf", trace_steps), &trace_steps, |b, _| {
            b.iter(|| tfidf_score_matrix(black_box(&presence), black_box(&idf), DEFAULT_WINDOW_SIZE))
        });
        group.bench_with_input(
            BenchmarkId::new("disambiguated", trace_steps),
            &trace_steps,
            |b, _| {
                b.iter(|| {
                    disambiguated_score_matrix(
                        black_box(&presence),
                        black_box(&idf),
                        DEFAULT_WINDOW_SIZE,
                    )
                })
            },
        );
    }
    group.finish();
}

fn bench_path_selection(c: &mut Criterion) {
    let mut group = c.benchmark_group("path_selection");
    for trace_steps in [500, 1_000, 5_000] {
        let story = synthetic_dict(200, 50);
        let trace = synthetic_dict(200, trace_steps);
        let presence = build_presence_matrices(&story, &trace);
        let idf = trace_idf_vector(&presence.trace);
        let sm1 = tfidf_score_matrix(&presence, &idf, DEFAULT_WINDOW_SIZE);
        let sm2 = disambiguated_score_matrix(&presence, &idf, DEFAULT_WINDOW_SIZE);
        let candidates = regions_combined(&sm1, &sm2);

        group.bench_with_input(
            BenchmarkId::from_parameter(trace_steps),
            &trace_steps,
            |b, &trace_steps| b.iter(|| select_path(black_box(&candidates), trace_steps)),
        );
    }
    group.finish();
}

fn bench_full_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_pipeline");
    group.sample_size(10);
    for trace_steps in [100, 500] {
        let story = synthetic_dict(200, 50);
        let trace = synthetic_dict(200, trace_steps);
        let engine = AlignmentEngine::default();

        group.bench_with_input(
            BenchmarkId::from_parameter(trace_steps),
            &trace_steps,
            |b, _| b.iter(|| engine.align(black_box(&story), black_box(&trace))),
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_score_matrices,
    bench_path_selection,
    bench_full_pipeline,
);
criterion_main!(benches);
