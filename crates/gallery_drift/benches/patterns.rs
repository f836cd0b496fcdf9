mod common;

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use gallery_drift::prelude::*;

const CAPACITIES: [usize; 3] = [50, 200, 500];

fn bench_pattern<P: PatternGenerator>(c: &mut Criterion, name: &str, mut pattern: P) {
    let mut group = c.benchmark_group(format!("patterns/{name}"));

    for &capacity in &CAPACITIES {
        let settings = LayoutSettings::default()
            .with_capacity(capacity)
            .with_rotation_enabled(true);
        group.throughput(common::elements_throughput(capacity));

        group.bench_with_input(BenchmarkId::from_parameter(capacity), &capacity, |b, _| {
            let mut t = 0.0f32;
            b.iter(|| {
                t += 1.0 / 60.0;
                let out = pattern.generate(&settings, t).expect("pattern generates");
                black_box(out.len());
            });
        });
    }

    group.finish();
}

fn pattern_benches(c: &mut Criterion) {
    bench_pattern(c, "grid", GridPattern);
    bench_pattern(c, "float", FloatPattern::new());
    bench_pattern(c, "wave", WavePattern);
    bench_pattern(c, "spiral", SpiralPattern);
}

criterion_group! {
    name = benches;
    config = common::default_criterion();
    targets = pattern_benches
}
criterion_main!(benches);
