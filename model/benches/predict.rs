//! Prediction throughput per model.
//!
//! The cost model sits inside the compiler's blocking search, so a single
//! prediction has to stay in the nanosecond range.
//!
//! Run with: `cargo bench -p tenmo-model`

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use strum::IntoEnumIterator;
use tenmo_descriptor::{ContractionDescriptor, PrimitiveKind, PrimitiveShape};
use tenmo_model::{ModelSelector, Predictor, PredictorConfig, predict};

fn bench_predict_shape(c: &mut Criterion) {
    let mut group = c.benchmark_group("predict_shape");

    // Off-grid extents so every axis interpolates.
    for (m, n, k) in [(20, 7, 40), (200, 100, 300), (1000, 1000, 1000)] {
        let shape = PrimitiveShape::gemm(m, n, k).with_transpose(true, false);
        for selector in ModelSelector::iter() {
            group.bench_with_input(BenchmarkId::new(selector.to_string(), format!("{m}x{n}x{k}")), &shape, |b, shape| {
                b.iter(|| predict(black_box(shape), selector, 1000.0, 16).expect("valid shape"));
            });
        }
    }

    group.finish();
}

fn bench_predictor_report(c: &mut Criterion) {
    let predictor =
        Predictor::new(PredictorConfig::builder().model(ModelSelector::A76).build()).expect("table model needs no parameters");
    let desc = ContractionDescriptor::gemm(123, 45, 67);

    c.bench_function("predictor_report_a76", |b| {
        b.iter(|| predictor.report(black_box(&desc), PrimitiveKind::Gemm).expect("valid descriptor"));
    });
}

criterion_group!(benches, bench_predict_shape, bench_predictor_report);
criterion_main!(benches);
