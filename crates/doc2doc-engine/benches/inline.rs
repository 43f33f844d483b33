use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use doc2doc_engine::text_to_runs;
mod common;

fn bench_text_to_runs(c: &mut Criterion) {
    let mut group = c.benchmark_group("inline");

    for repeats in [1, 10, 100] {
        let line = common::generate_inline_line(repeats);
        group.bench_with_input(BenchmarkId::from_parameter(repeats), &line, |b, text| {
            b.iter(|| std::hint::black_box(text_to_runs(std::hint::black_box(text)).unwrap()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_text_to_runs);
criterion_main!(benches);
