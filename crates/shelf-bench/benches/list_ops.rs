//! Criterion micro-benchmarks for list append, access, and removal.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::prelude::*;
use shelf_array::ArrayList;
use shelf_bench::filled_list;
use shelf_core::{List, ListView};

/// Benchmark: append 10K elements into a default-capacity list.
///
/// Exercises the full 3/2 growth sequence from capacity 10.
fn bench_push_10k(c: &mut Criterion) {
    c.bench_function("push_10k", |b| {
        b.iter(|| {
            let mut list = ArrayList::new();
            for v in 0..10_000usize {
                list.push(v);
            }
            black_box(&list);
        });
    });
}

/// Benchmark: append 10K elements into a pre-sized list (no growth).
fn bench_push_10k_presized(c: &mut Criterion) {
    c.bench_function("push_10k_presized", |b| {
        b.iter(|| {
            let mut list = ArrayList::with_capacity(10_000);
            for v in 0..10_000usize {
                list.push(v);
            }
            black_box(&list);
        });
    });
}

/// Benchmark: read all 10K slots in a shuffled, deterministic order.
fn bench_get_shuffled_10k(c: &mut Criterion) {
    let list = filled_list(10_000);
    let mut indices: Vec<usize> = (0..10_000).collect();
    let mut rng = StdRng::seed_from_u64(42);
    indices.shuffle(&mut rng);

    c.bench_function("get_shuffled_10k", |b| {
        b.iter(|| {
            for &i in &indices {
                black_box(list.get(i).unwrap());
            }
        });
    });
}

/// Benchmark: 1K front insertions (worst-case suffix shifting).
fn bench_insert_front_1k(c: &mut Criterion) {
    c.bench_function("insert_front_1k", |b| {
        b.iter(|| {
            let mut list = ArrayList::new();
            for v in 0..1_000usize {
                list.insert(0, v).unwrap();
            }
            black_box(&list);
        });
    });
}

/// Benchmark: value-based removal scanning into the back half of a 1K list.
fn bench_remove_value_scan_1k(c: &mut Criterion) {
    c.bench_function("remove_value_scan_1k", |b| {
        b.iter(|| {
            let mut list = filled_list(1_000);
            for target in (500..1_000usize).rev() {
                black_box(list.remove_value(&target).unwrap());
            }
        });
    });
}

criterion_group!(
    benches,
    bench_push_10k,
    bench_push_10k_presized,
    bench_get_shuffled_10k,
    bench_insert_front_1k,
    bench_remove_value_scan_1k
);
criterion_main!(benches);
