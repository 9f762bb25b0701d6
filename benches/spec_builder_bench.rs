use chart_spec::api::{ChartDataModel, ChartSpecBuilder, ChartSpecConfig, SeriesDescriptor};
use chart_spec::core::DataPoint;
use chart_spec::extensions::AnnotationMarker;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn simulation_model(series: usize, points: usize) -> ChartDataModel {
    let visible = (0..series)
        .map(|s| {
            let data = (0..points)
                .map(|i| {
                    let t = i as f64;
                    DataPoint::new(t, (t * 0.05 + s as f64).sin() * 100.0 + t * 0.3)
                })
                .collect();
            SeriesDescriptor::new(format!("series-{s}"), data)
        })
        .collect();
    let labels: Vec<String> = (0..points).map(|i| i.to_string()).collect();

    ChartDataModel::new(visible)
        .with_name("Fire spread")
        .with_labels(labels)
        .with_annotations(vec![
            AnnotationMarker::vertical_line("ignition", 10.0),
            AnnotationMarker::horizontal_line("limit", 50.0),
        ])
}

fn bench_build_sparse_4x60(c: &mut Criterion) {
    let builder = ChartSpecBuilder::new(ChartSpecConfig::default()).expect("builder");
    let model = simulation_model(4, 60);

    c.bench_function("build_sparse_4x60", |b| {
        b.iter(|| {
            let _ = builder.build(black_box(&model)).expect("build");
        })
    });
}

fn bench_build_dense_8x2k(c: &mut Criterion) {
    let builder = ChartSpecBuilder::new(ChartSpecConfig::default()).expect("builder");
    let model = simulation_model(8, 2_000);

    c.bench_function("build_dense_8x2k", |b| {
        b.iter(|| {
            let _ = builder.build(black_box(&model)).expect("build");
        })
    });
}

fn bench_contract_json_2k(c: &mut Criterion) {
    let builder = ChartSpecBuilder::new(ChartSpecConfig::default()).expect("builder");
    let model = simulation_model(2, 2_000);

    c.bench_function("contract_json_2k", |b| {
        b.iter(|| {
            let _ = builder
                .build_json_contract_v1_pretty(black_box(&model))
                .expect("contract json");
        })
    });
}

criterion_group!(
    benches,
    bench_build_sparse_4x60,
    bench_build_dense_8x2k,
    bench_contract_json_2k
);
criterion_main!(benches);
