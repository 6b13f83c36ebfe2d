//! Benchmarks for observable notification fan-out.
//!
//! Run with: cargo bench -p rill-reactive --bench notify_bench

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rill_reactive::Observable;
use std::hint::black_box;

fn bench_notify_fanout(c: &mut Criterion) {
    let mut group = c.benchmark_group("observable/notify");

    for subscribers in [1usize, 16, 256] {
        group.throughput(Throughput::Elements(subscribers as u64));
        let obs = Observable::new(0u64);
        let subs: Vec<_> = (0..subscribers)
            .map(|_| obs.subscribe(|v| drop(black_box(*v))))
            .collect();
        group.bench_with_input(
            BenchmarkId::new("fanout", subscribers),
            &(),
            |b, ()| {
                let mut n = 0u64;
                b.iter(|| {
                    n = n.wrapping_add(1);
                    obs.val(n);
                });
            },
        );
        drop(subs);
    }

    group.finish();
}

fn bench_subscribe_unsubscribe(c: &mut Criterion) {
    let mut group = c.benchmark_group("observable/subscribe");

    group.bench_function("subscribe_drop", |b| {
        let obs = Observable::new(0u64);
        b.iter(|| {
            let sub = obs.subscribe(|v| drop(black_box(*v)));
            drop(sub);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_notify_fanout, bench_subscribe_unsubscribe);
criterion_main!(benches);
