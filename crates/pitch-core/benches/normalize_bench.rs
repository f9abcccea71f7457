use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use pitch_core::normalize::normalize_values;
use pitch_core::types::ViewBox;

fn gen_values(n: usize) -> Vec<f64> {
    let mut v = Vec::with_capacity(n);
    for i in 0..n {
        // simple waveform with drift
        v.push((i as f64 * 0.01).sin() * 10.0 + (i as f64 * 0.0001));
    }
    v
}

fn bench_normalize(c: &mut Criterion) {
    let view = ViewBox::try_new(300.0, 100.0, 8.0, 8.0).unwrap();
    let mut group = c.benchmark_group("normalize");
    for &n in &[1_000usize, 50_000usize, 500_000usize] {
        let data = gen_values(n);
        group.bench_with_input(BenchmarkId::from_parameter(format!("n{n}")), &n, |b, _| {
            b.iter_batched(
                || data.clone(),
                |d| {
                    let _ = black_box(normalize_values(&d, &view));
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_normalize);
criterion_main!(benches);
