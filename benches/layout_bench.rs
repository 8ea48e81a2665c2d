use barchart_rs::api::BarChart;
use barchart_rs::core::{
    ChartConfig, DataPoint, MeasuredExtents, PaintPhase, layout_chart, plan_animation,
};
use barchart_rs::render::{EstimatedTextMeasurer, NullRenderer};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn dataset(len: usize) -> Vec<DataPoint> {
    (0..len)
        .map(|i| {
            let t = i as f64;
            DataPoint::new(format!("b{i}"), 50.0 + (t * 0.37).sin() * 40.0)
        })
        .collect()
}

fn bench_layout_10k(c: &mut Criterion) {
    let data = dataset(10_000);
    let config = ChartConfig::default()
        .with_size(1920.0, 1080.0)
        .with_window(0, 10_000)
        .with_bars_spacing(0.0);
    let extents = MeasuredExtents::new(14.0, 14.4, 12.0);

    c.bench_function("layout_10k", |b| {
        b.iter(|| {
            let _ = layout_chart(black_box(&data), black_box(&config), extents)
                .expect("layout");
        })
    });
}

fn bench_animation_plan_10k(c: &mut Criterion) {
    let data = dataset(10_000);
    let config = ChartConfig::default()
        .with_size(1920.0, 1080.0)
        .with_window(0, 10_000);
    let layout = layout_chart(&data, &config, MeasuredExtents::ZERO).expect("layout");

    c.bench_function("animation_plan_10k", |b| {
        b.iter(|| {
            let _ = plan_animation(black_box(&layout), &config, PaintPhase::BeforeFirstPaint);
        })
    });
}

fn bench_two_pass_window(c: &mut Criterion) {
    let data = dataset(10_000);

    c.bench_function("two_pass_window_200", |b| {
        b.iter(|| {
            let config = ChartConfig::default().with_window(4_000, 200);
            let mut chart = BarChart::new(NullRenderer::default(), config);
            chart.set_data(data.clone());
            chart
                .measure_labels(&mut EstimatedTextMeasurer)
                .expect("measure");
            let _ = chart.build_frame(black_box(0.0)).expect("frame");
        })
    });
}

criterion_group!(
    benches,
    bench_layout_10k,
    bench_animation_plan_10k,
    bench_two_pass_window
);
criterion_main!(benches);
