// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size, Vec2};
use vista::{Surface, Transform, Viewport, ViewportConfig};
use vista_gesture::wheel::classify;
use vista_gesture::{DeltaMode, Modifiers, PointerButton, PointerInput, WheelInput};
use vista_view::{ZoomLimits, zoom_by_factor};

#[derive(Clone)]
struct Lcg(u64);

impl Lcg {
    fn next_f64(&mut self) -> f64 {
        // Numerical Recipes LCG parameters.
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        f64::from((self.0 >> 32) as u32) / f64::from(u32::MAX)
    }
}

struct Null;

impl Surface for Null {
    fn viewport_size(&self) -> Size {
        Size::new(1920.0, 1080.0)
    }

    fn apply_transform(&mut self, transform: &Transform) {
        black_box(transform);
    }

    fn request_frame(&mut self) -> bool {
        true
    }
}

fn wheel_events(n: usize) -> Vec<WheelInput> {
    let mut rng = Lcg(0x5EED_0000_0000_0001);
    (0..n)
        .map(|i| WheelInput {
            position: Point::new(rng.next_f64() * 1920.0, rng.next_f64() * 1080.0),
            delta: if i % 2 == 0 {
                Vec2::new(rng.next_f64() * 4.0, rng.next_f64() * 20.0 - 10.0)
            } else {
                Vec2::new(0.0, if rng.next_f64() < 0.5 { -120.0 } else { 120.0 })
            },
            delta_mode: DeltaMode::Pixel,
            modifiers: if i % 7 == 0 {
                Modifiers::CTRL
            } else {
                Modifiers::empty()
            },
        })
        .collect()
}

fn bench_viewport(c: &mut Criterion) {
    let mut group = c.benchmark_group("vista");
    let events = wheel_events(1_024);

    group.bench_function("classify_1024", |b| {
        b.iter(|| {
            events
                .iter()
                .filter(|e| classify(black_box(e)).is_zoom_gesture)
                .count()
        });
    });

    group.bench_function("zoom_by_factor_1024", |b| {
        let limits = ZoomLimits::new(0.05, 80.0);
        b.iter(|| {
            let mut t = Transform::IDENTITY;
            for e in &events {
                let factor = if e.delta.y < 0.0 { 1.1 } else { 1.0 / 1.1 };
                t = zoom_by_factor(t, e.position, factor, limits);
            }
            t
        });
    });

    group.bench_function("wheel_stream_1024", |b| {
        b.iter_batched(
            || Viewport::new(Null, ViewportConfig::default()).unwrap(),
            |mut view| {
                for e in &events {
                    view.on_wheel(e);
                }
                view.on_frame();
                black_box(view.transform())
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("drag_frames_1024", |b| {
        b.iter_batched(
            || Viewport::new(Null, ViewportConfig::default()).unwrap(),
            |mut view| {
                let at = |x: f64, time_ms: u64| PointerInput {
                    position: Point::new(x, 300.0),
                    button: PointerButton::Primary,
                    modifiers: Modifiers::empty(),
                    time_ms,
                };
                view.on_pointer_down(&at(100.0, 0));
                for i in 0..1_024_u32 {
                    view.on_pointer_move(&at(100.0 + f64::from(i), u64::from(i)));
                    if i % 4 == 0 {
                        view.on_frame();
                    }
                }
                view.on_pointer_up(&at(1_124.0, 2_000));
                black_box(view.transform())
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_viewport);
criterion_main!(benches);
