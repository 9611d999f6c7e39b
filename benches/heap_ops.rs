//! Core operation benchmarks
//!
//! ```bash
//! cargo bench --bench heap_ops
//! ```

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use linked_heap::MinHeap;

fn shuffled(n: usize) -> Vec<u64> {
    let mut rng = StdRng::seed_from_u64(0xbe5c);
    let mut values: Vec<u64> = (0..n as u64).collect();
    values.shuffle(&mut rng);
    values
}

fn bench_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("construction");
    for &n in &[1_000usize, 16_000] {
        group.bench_function(format!("incremental/{n}"), |b| {
            b.iter_batched(
                || shuffled(n),
                |values| {
                    let mut heap = MinHeap::new();
                    for value in values {
                        heap.add(value);
                    }
                    black_box(heap.len())
                },
                BatchSize::SmallInput,
            )
        });
        group.bench_function(format!("bulk/{n}"), |b| {
            b.iter_batched(
                || shuffled(n),
                |values| black_box(MinHeap::from_vec(values).len()),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_remove_min(c: &mut Criterion) {
    let mut group = c.benchmark_group("remove_min");
    for &n in &[1_000usize, 16_000] {
        group.bench_function(format!("drain/{n}"), |b| {
            b.iter_batched(
                || MinHeap::from_vec(shuffled(n)),
                |mut heap| {
                    while let Some(value) = heap.remove_min() {
                        black_box(value);
                    }
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_sorted_traversal(c: &mut Criterion) {
    let mut group = c.benchmark_group("sorted");
    for &n in &[1_000usize, 16_000] {
        let heap = MinHeap::from_vec(shuffled(n));
        group.bench_function(format!("traverse/{n}"), |b| {
            b.iter(|| {
                let sum: u64 = heap.sorted().sum();
                black_box(sum)
            })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_construction,
    bench_remove_min,
    bench_sorted_traversal
);
criterion_main!(benches);
