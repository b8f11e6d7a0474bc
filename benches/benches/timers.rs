// Copyright 2025 the Slide Confirm Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use slide_confirm_timing::TimerQueue;

#[derive(Clone)]
struct Lcg(u64);

impl Lcg {
    fn next_u32(&mut self) -> u32 {
        // Numerical Recipes LCG parameters.
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 32) as u32
    }
}

fn filled(n: u32, seed: u64) -> TimerQueue<u32> {
    let mut rng = Lcg(seed);
    let mut queue = TimerQueue::new();
    for i in 0..n {
        let delay = Duration::from_millis(u64::from(rng.next_u32() % 10_000));
        queue.schedule_after(delay, i);
    }
    queue
}

fn bench_timers(c: &mut Criterion) {
    let mut group = c.benchmark_group("timer_queue");

    for &n in &[16_u32, 256, 4_096] {
        group.bench_function(format!("schedule(n={n})"), |b| {
            b.iter(|| black_box(filled(n, 0x51DE_0000_0000_0001)));
        });
        group.bench_function(format!("drain(n={n})"), |b| {
            b.iter_batched(
                || filled(n, 0x51DE_0000_0000_0002),
                |mut queue| {
                    queue.advance(Duration::from_secs(10));
                    while let Some(entry) = queue.pop_due() {
                        black_box(entry);
                    }
                },
                BatchSize::SmallInput,
            );
        });
        group.bench_function(format!("reschedule_one(n={n})"), |b| {
            b.iter_batched(
                || {
                    let mut queue = filled(n, 0x51DE_0000_0000_0003);
                    let id = queue.schedule_after(Duration::from_secs(2), u32::MAX);
                    (queue, id)
                },
                |(mut queue, id)| {
                    queue.cancel(id);
                    black_box(queue.schedule_after(Duration::from_secs(2), u32::MAX));
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_timers);
criterion_main!(benches);
