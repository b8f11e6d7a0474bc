// Copyright 2025 the Slide Confirm Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::Point;
use slide_confirm::{NoFeedback, SlideConfig, SlideMachine, SlideManager, compute_drag};

const TRACK: f64 = 356.0;

/// Pointer translations for one drag, sweeping past the end of travel.
fn sweep(steps: u32) -> Vec<f64> {
    (0..steps)
        .map(|i| f64::from(i) * 360.0 / f64::from(steps))
        .collect()
}

fn ready_machine() -> SlideMachine<NoFeedback> {
    let mut m = SlideMachine::new(SlideConfig::DEFAULT, NoFeedback);
    m.set_enabled(true, Duration::ZERO);
    m.set_track_width(TRACK);
    m
}

fn bench_compute_drag(c: &mut Criterion) {
    let xs = sweep(1_024);
    c.bench_function("compute_drag(1024)", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for &x in &xs {
                acc += compute_drag(black_box(x), 300.0).progress;
            }
            black_box(acc)
        });
    });
}

fn bench_machine(c: &mut Criterion) {
    let mut group = c.benchmark_group("slide_machine");

    for &steps in &[16_u32, 128, 1_024] {
        let xs = sweep(steps);
        group.bench_function(format!("drag_and_commit(steps={steps})"), |b| {
            b.iter_batched(
                ready_machine,
                |mut m| {
                    for &x in &xs {
                        black_box(m.drag_move(x));
                    }
                    black_box(m.drag_end(Duration::ZERO));
                    m
                },
                BatchSize::SmallInput,
            );
        });
        group.bench_function(format!("pointer_moves(steps={steps})"), |b| {
            b.iter_batched(
                ready_machine,
                |mut m| {
                    m.drag_start(Point::new(20.0, 28.0));
                    for &x in &xs {
                        black_box(m.pointer_move(Point::new(20.0 + x, 28.0)));
                    }
                    m
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_manager(c: &mut Criterion) {
    let xs = sweep(128);
    c.bench_function("manager_session(steps=128)", |b| {
        b.iter_batched(
            || {
                let mut manager = SlideManager::new(SlideConfig::DEFAULT, NoFeedback);
                manager.on_state_change(|state| {
                    black_box(state);
                });
                manager.set_enabled(true, Duration::ZERO);
                manager.set_track_width(TRACK);
                manager
            },
            |mut manager| {
                for &x in &xs {
                    manager.drag_move(x);
                }
                manager.drag_end(Duration::ZERO);
                manager.tick(Duration::from_secs(2));
                manager
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_compute_drag, bench_machine, bench_manager);
criterion_main!(benches);
