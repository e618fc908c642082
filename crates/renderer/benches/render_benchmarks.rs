//! Benchmarks for the renderer crate - scales and full chart rendering.
//!
//! Run with: cargo bench --package renderer --bench render_benchmarks

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use heatmap_common::{Dataset, ValidationMode};
use renderer::palette::default_palette;
use renderer::scale::QuantileScale;
use renderer::{Chart, ChartLayout, TooltipState};
use test_utils::{create_seasonal_records, dataset_json, synthetic_dataset_json};

/// Dataset roughly the size of the real one (1753-2015).
fn full_size_dataset(years: usize) -> Dataset {
    let json = dataset_json(8.66, &create_seasonal_records(1753, years));
    Dataset::from_json(&json, ValidationMode::Strict).expect("synthetic dataset is valid")
}

// =============================================================================
// SCALE BENCHMARKS
// =============================================================================

fn bench_quantile_scale(c: &mut Criterion) {
    let mut group = c.benchmark_group("quantile_scale");

    for years in [50, 263] {
        let json = synthetic_dataset_json(1753, years, 8.66, -7.0, 7.0);
        let ds = Dataset::from_json(&json, ValidationMode::Strict).expect("synthetic dataset is valid");
        group.throughput(Throughput::Elements(ds.len() as u64));
        group.bench_with_input(BenchmarkId::new("build", years), &ds, |b, ds| {
            b.iter(|| QuantileScale::new(black_box(ds.temperatures()), default_palette()));
        });
    }

    group.finish();
}

// =============================================================================
// FULL PIPELINE BENCHMARKS
// =============================================================================

fn bench_full_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_pipeline");
    let json = dataset_json(8.66, &create_seasonal_records(1753, 263));

    group.bench_function("parse_enrich_render_svg", |b| {
        b.iter(|| {
            let ds = Dataset::from_json(black_box(&json), ValidationMode::Lenient)
                .expect("valid dataset");
            let chart = Chart::new(&ds, ChartLayout::default()).expect("valid layout");
            chart.to_svg(&TooltipState::Idle)
        });
    });

    let ds = full_size_dataset(263);
    let chart = Chart::new(&ds, ChartLayout::default()).expect("valid layout");
    group.bench_function("render_svg_only", |b| {
        b.iter(|| chart.to_svg(black_box(&TooltipState::Idle)));
    });

    group.finish();
}

criterion_group!(benches, bench_quantile_scale, bench_full_pipeline);
criterion_main!(benches);
