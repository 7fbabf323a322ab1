// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Size, Vec2};
use vista_ruler::{GridMetrics, GridSettings, RulerLayout, RulerOptions, tick_spacing};
use vista_view::Transform;

fn bench_rulers(c: &mut Criterion) {
    let mut group = c.benchmark_group("vista_ruler");
    let options = RulerOptions::default();

    group.bench_function("tick_spacing_sweep", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for i in 1..=1_000_u32 {
                acc += tick_spacing(black_box(f64::from(i) * 7.3), black_box(1280.0));
            }
            acc
        });
    });

    for &scale in &[0.05_f64, 1.0, 80.0] {
        let view = Transform::new(scale, Vec2::new(-1234.5, 678.9));
        group.bench_function(format!("layout(scale={scale})"), |b| {
            b.iter(|| {
                RulerLayout::compute(
                    black_box(&view),
                    Size::new(1920.0, 1080.0),
                    &options,
                    true,
                )
            });
        });
    }

    group.bench_function("grid_metrics", |b| {
        b.iter(|| {
            GridMetrics::compute(
                black_box(0.013),
                black_box(Vec2::new(-4321.0, 987.0)),
                GridSettings::default(),
            )
        });
    });

    group.finish();
}

criterion_group!(benches, bench_rulers);
criterion_main!(benches);
