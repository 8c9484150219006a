//! Priority queue throughput benchmarks.
//!
//! Measures the three hot paths individually and in a mixed workload:
//!   - insert: grows through repeated `step_size` resizes
//!   - drain: pop-heavy, exercises sink and the shrink hysteresis
//!   - churn: steady-state insert/pop mix at a fixed occupancy
//!
//! All groups enforce warm_up_time(2s) + measurement_time(5s) +
//! sample_size(20) to keep total runtime bounded.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput};
use std::time::Duration;

use pq::pqueue::PriorityQueue;

/// Element counts benchmarked for each path.
const SIZES: &[usize] = &[1_000, 10_000, 100_000];

/// Apply standard timeout caps to a benchmark group.
fn cap(group: &mut criterion::BenchmarkGroup<criterion::measurement::WallTime>) {
    group.warm_up_time(Duration::from_secs(2));
    group.measurement_time(Duration::from_secs(5));
    group.sample_size(20);
}

/// Deterministic pseudo-shuffled priority for element `i`.
fn pseudo_priority(i: usize) -> i32 {
    ((i.wrapping_mul(997)) % 1000) as i32 - 500
}

/// Build a queue holding `size` pseudo-shuffled elements.
fn filled_queue(size: usize) -> PriorityQueue<usize> {
    let mut q = PriorityQueue::new();
    for i in 0..size {
        q.insert(i, pseudo_priority(i)).unwrap();
    }
    q
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");
    cap(&mut group);
    for &size in SIZES {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("shuffled", size), &size, |b, &size| {
            b.iter(|| filled_queue(size));
        });
        group.bench_with_input(BenchmarkId::new("ascending", size), &size, |b, &size| {
            // Worst case for swim: every insert bubbles to the root.
            b.iter(|| {
                let mut q = PriorityQueue::new();
                for i in 0..size {
                    q.insert(i, i as i32).unwrap();
                }
                q
            });
        });
    }
    group.finish();
}

fn bench_drain(c: &mut Criterion) {
    let mut group = c.benchmark_group("drain");
    cap(&mut group);
    for &size in SIZES {
        let q = filled_queue(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("pop_all", size), &q, |b, q| {
            b.iter_batched(
                || q.clone(),
                |mut q| {
                    while !q.is_empty() {
                        q.pop();
                    }
                    q
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_churn(c: &mut Criterion) {
    let mut group = c.benchmark_group("churn");
    cap(&mut group);
    for &size in SIZES {
        let q = filled_queue(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("pop_insert", size), &q, |b, q| {
            b.iter_batched(
                || q.clone(),
                |mut q| {
                    // One full turnover of the queue's contents.
                    for i in 0..size {
                        q.pop();
                        q.insert(i, pseudo_priority(i ^ 0x5555)).unwrap();
                    }
                    q
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_insert, bench_drain, bench_churn);
criterion_main!(benches);
