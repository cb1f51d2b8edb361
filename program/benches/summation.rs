use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use sum_native::{checked_sum, sum, INITIAL_ACCUMULATOR, SEQUENCE};

fn bench_fixed(c: &mut Criterion) {
    c.bench_function("sum/fixed-9", |b| {
        b.iter(|| sum(black_box(&SEQUENCE), black_box(INITIAL_ACCUMULATOR)))
    });
}

fn bench_checked(c: &mut Criterion) {
    let mut group = c.benchmark_group("sum/checked");
    for n in [9i64, 1_000, 100_000] {
        let nums: Vec<i64> = (0..n).collect();
        group.bench_with_input(BenchmarkId::from_parameter(n), &nums, |b, nums| {
            b.iter(|| checked_sum(black_box(nums), 0).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_fixed, bench_checked);
criterion_main!(benches);
