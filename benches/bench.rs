use collection_concurrency::prelude::*;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use futures_lite::future::{block_on, yield_now};

fn criterion_benchmark(c: &mut Criterion) {
    map_bench(c);
    filter_bench(c);
    try_map_bench(c);
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

/// An element operation which suspends `n % 4` times before completing, so
/// neighbouring elements finish out of order.
async fn op(n: usize) -> usize {
    for _ in 0..n % 4 {
        yield_now().await;
    }
    n * 2
}

fn map_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("map");
    for max in [10, 100, 1000] {
        group.bench_with_input(BenchmarkId::new("async_map", max), &max, |b, &max| {
            b.iter(|| block_on(async { (0..black_box(max)).async_map(op).await }))
        });
        group.bench_with_input(BenchmarkId::new("concurrent_map", max), &max, |b, &max| {
            b.iter(|| block_on(async { (0..black_box(max)).concurrent_map(op).await }))
        });
    }
    group.finish();
}

fn filter_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter");
    for max in [10, 100, 1000] {
        let input: Vec<usize> = (0..max).collect();
        group.bench_with_input(BenchmarkId::new("async_filter", max), &input, |b, input| {
            b.iter(|| {
                block_on(async {
                    input
                        .iter()
                        .async_filter(|&&n| async move { op(n).await % 3 == 0 })
                        .await
                })
            })
        });
        group.bench_with_input(
            BenchmarkId::new("concurrent_filter", max),
            &input,
            |b, input| {
                b.iter(|| {
                    block_on(async {
                        input
                            .iter()
                            .concurrent_filter(|&&n| async move { op(n).await % 3 == 0 })
                            .await
                    })
                })
            },
        );
    }
    group.finish();
}

fn try_map_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("try_map");
    for max in [10, 100, 1000] {
        group.bench_with_input(
            BenchmarkId::new("try_concurrent_map", max),
            &max,
            |b, &max| {
                b.iter(|| {
                    block_on(async {
                        (0..black_box(max))
                            .try_concurrent_map(|n| async move { Ok::<_, ()>(op(n).await) })
                            .await
                    })
                })
            },
        );
    }
    group.finish();
}
