//! Basic benchmarks for the `index_allocator` crate.
#![allow(
    missing_docs,
    reason = "No need for API documentation in benchmark code"
)]

use std::hint::black_box;
use std::iter;
use std::time::Instant;

use criterion::{Criterion, criterion_group, criterion_main};
use index_allocator::IndexAllocator;

criterion_group!(benches, entrypoint);
criterion_main!(benches);

fn entrypoint(c: &mut Criterion) {
    let mut group = c.benchmark_group("ia_basic");

    group.bench_function("allocate_fresh", |b| {
        b.iter_custom(|iters| {
            let mut allocators = iter::repeat_with(IndexAllocator::<u64>::new)
                .take(usize::try_from(iters).unwrap())
                .collect::<Vec<_>>();

            let start = Instant::now();

            for allocator in &mut allocators {
                _ = black_box(allocator.allocate());
            }

            start.elapsed()
        });
    });

    group.bench_function("allocate_recycled", |b| {
        b.iter_custom(|iters| {
            let mut allocators = iter::repeat_with(|| {
                let mut allocator = IndexAllocator::<u64>::new();

                // Pre-warm the free list with one recyclable index.
                let mut handle = allocator.allocate().unwrap();
                allocator.free(&mut handle);

                allocator
            })
            .take(usize::try_from(iters).unwrap())
            .collect::<Vec<_>>();

            let start = Instant::now();

            for allocator in &mut allocators {
                _ = black_box(allocator.allocate());
            }

            start.elapsed()
        });
    });

    group.bench_function("free_one", |b| {
        b.iter_custom(|iters| {
            let mut allocators = iter::repeat_with(IndexAllocator::<u64>::new)
                .take(usize::try_from(iters).unwrap())
                .collect::<Vec<_>>();

            let mut handles = allocators
                .iter_mut()
                .map(|allocator| allocator.allocate().unwrap())
                .collect::<Vec<_>>();

            let start = Instant::now();

            for (allocator, handle) in allocators.iter_mut().zip(handles.iter_mut()) {
                allocator.free(handle);
            }

            start.elapsed()
        });
    });

    group.bench_function("current_max", |b| {
        b.iter_custom(|iters| {
            let mut allocator = IndexAllocator::<u64>::new();

            // Pre-populate so the accessor reads a non-trivial state.
            for _ in 0..10_000 {
                _ = allocator.allocate().unwrap();
            }

            let start = Instant::now();

            for _ in 0..iters {
                _ = black_box(allocator.current_max());
            }

            start.elapsed()
        });
    });

    group.bench_function("free_count", |b| {
        b.iter_custom(|iters| {
            let mut allocator = IndexAllocator::<u64>::new();

            let mut handles = (0..10_000)
                .map(|_| allocator.allocate().unwrap())
                .collect::<Vec<_>>();

            for handle in &mut handles {
                allocator.free(handle);
            }

            let start = Instant::now();

            for _ in 0..iters {
                _ = black_box(allocator.free_count());
            }

            start.elapsed()
        });
    });

    group.finish();
}
