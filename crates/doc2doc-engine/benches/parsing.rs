use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use doc2doc_engine::{markdown_to_blocks, markdown_to_html_node};
use pulldown_cmark::{Parser, html};
mod common;

fn bench_document_conversion(c: &mut Criterion) {
    let mut group = c.benchmark_group("document");
    group.sample_size(10);

    for size in [10, 100] {
        let content = common::generate_markdown_content(size);
        group.bench_with_input(BenchmarkId::new("doc2doc", size), &content, |b, md| {
            b.iter(|| {
                let root = markdown_to_html_node(std::hint::black_box(md)).unwrap();
                std::hint::black_box(root.to_html().unwrap());
            });
        });
        group.bench_with_input(BenchmarkId::new("pulldown_cmark", size), &content, |b, md| {
            b.iter(|| {
                let mut out = String::new();
                html::push_html(&mut out, Parser::new(std::hint::black_box(md)));
                std::hint::black_box(out);
            });
        });
    }

    group.finish();
}

fn bench_segmentation(c: &mut Criterion) {
    let content = common::generate_complex_markdown(50, 5);
    c.bench_function("segment_complex", |b| {
        b.iter(|| std::hint::black_box(markdown_to_blocks(std::hint::black_box(&content))));
    });
}

criterion_group!(benches, bench_document_conversion, bench_segmentation);
criterion_main!(benches);
