use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use radar_core::data::{ChartItem, DataSet};
use radar_core::layout::RadarLayout;
use radar_core::surface::Recorder;
use radar_core::{RadarChart, RenderOptions};

fn gen_items(n: usize) -> Vec<ChartItem> {
    (0..n)
        .map(|i| ChartItem {
            label: format!("axis-{i}"),
            value: Some((i % 9 + 1) as f64),
        })
        .collect()
}

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout");
    for &n in &[3usize, 12, 64] {
        let data = DataSet::new(&gen_items(n)).unwrap();
        let values: Vec<f64> = data.values().collect();
        let divisor = data.divisor(false).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| {
                let layout = RadarLayout::new(500.0, n);
                let _ = black_box(layout.polygon(&values, divisor));
            });
        });
    }
    group.finish();
}

fn bench_render_recorded(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_recorded");
    for &n in &[3usize, 12, 64] {
        let chart = RadarChart::new(DataSet::new(&gen_items(n)).unwrap());
        let opts = RenderOptions::default();
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| {
                let mut recorder = Recorder::new();
                chart.render(&opts, &mut recorder);
                black_box(recorder.commands().len())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_layout, bench_render_recorded);
criterion_main!(benches);
