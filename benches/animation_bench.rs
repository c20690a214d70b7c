use std::sync::Arc;
use web_time::Duration;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use glam::Vec2;
use quanto_view::animation::{ManualClock, SmoothLayout};
use quanto_view::layout::StaticLayout;
use quanto_view::options::{AnimationOptions, RelaxOptions};
use quanto_view::util::easing::EasingFunction;

fn easing_benchmark(c: &mut Criterion) {
    let f = EasingFunction::EASE_OUT;
    c.bench_function("cubic_hermite_easing", |b| {
        b.iter(|| black_box(f.evaluate(black_box(0.5))))
    });
}

fn advance_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("smooth_advance");

    for count in [10_u32, 100, 1_000, 10_000] {
        let layout = Arc::new(StaticLayout::new(Vec2::new(1000.0, 1000.0)));
        for v in 0..count {
            layout.set_location(v, Vec2::ZERO);
        }
        let clock = Arc::new(ManualClock::new());
        let smooth = SmoothLayout::with_clock(
            Arc::clone(&layout),
            &AnimationOptions {
                approach_rate: 0.001,
                ..AnimationOptions::default()
            },
            &RelaxOptions::default(),
            Arc::clone(&clock),
        );
        for v in 0..count {
            layout.set_location(v, Vec2::new(v as f32, 1000.0 - v as f32));
        }

        group.bench_function(format!("{count}_vertices"), |b| {
            b.iter(|| {
                clock.advance(Duration::from_micros(100));
                black_box(smooth.advance())
            })
        });
    }
    group.finish();
}

fn position_query_benchmark(c: &mut Criterion) {
    let layout = Arc::new(StaticLayout::with_targets(
        Vec2::splat(100.0),
        (0..1_000_u32).map(|v| (v, Vec2::splat(v as f32))),
    ));
    let smooth = SmoothLayout::new(layout);

    c.bench_function("position_query", |b| {
        b.iter(|| black_box(smooth.position(black_box(&500))))
    });
}

criterion_group!(
    benches,
    easing_benchmark,
    advance_benchmark,
    position_query_benchmark
);
criterion_main!(benches);
