//! Benchmarks for identifier generation
//!
//! Generation sits on entity-creation paths, so it should stay in the
//! sub-microsecond range even with every thread sharing one source.

use criterion::{criterion_group, criterion_main, Criterion};
use ocpi_locations::domain::{Emi3Id, IdentifierGenerator, SequentialTokenSource};
use std::hint::black_box;
use std::sync::Arc;

fn bench_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("identifier_generation");
    let generator = IdentifierGenerator::process_wide();

    group.bench_function("unique", |b| {
        b.iter(|| black_box(generator.generate_unique_identifier()));
    });

    group.bench_function("compliant_without_type", |b| {
        b.iter(|| {
            black_box(generator.generate_compliant_identifier(
                black_box("NL"),
                black_box("ABC"),
                None,
            ))
        });
    });

    group.bench_function("compliant_with_type_rendered", |b| {
        b.iter(|| {
            black_box(
                generator
                    .generate_compliant_identifier(black_box("NL"), black_box("ABC"), Some("E"))
                    .map(|id| id.to_string()),
            )
        });
    });

    group.bench_function("sequential_source", |b| {
        let generator = IdentifierGenerator::with_source(SequentialTokenSource::default());
        b.iter(|| black_box(generator.generate_unique_identifier()));
    });

    group.finish();
}

fn bench_contended_generation(c: &mut Criterion) {
    c.bench_function("unique_4_threads_x_1000", |b| {
        let generator = Arc::new(IdentifierGenerator::process_wide());
        b.iter(|| {
            let handles: Vec<_> = (0..4)
                .map(|_| {
                    let generator = Arc::clone(&generator);
                    std::thread::spawn(move || {
                        for _ in 0..1000 {
                            let _ = black_box(generator.generate_unique_identifier());
                        }
                    })
                })
                .collect();
            for handle in handles {
                handle.join().unwrap();
            }
        });
    });
}

fn bench_parsing(c: &mut Criterion) {
    let rendered = IdentifierGenerator::process_wide()
        .generate_compliant_identifier("DE", "ALD", Some("E"))
        .unwrap()
        .to_string();

    c.bench_function("parse_emi3_id", |b| {
        b.iter(|| black_box(black_box(rendered.as_str()).parse::<Emi3Id>()));
    });
}

criterion_group!(
    benches,
    bench_generation,
    bench_contended_generation,
    bench_parsing
);
criterion_main!(benches);
