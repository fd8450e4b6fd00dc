//! Criterion benchmark: naive i-j-k vs transpose-based multiplication.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use matbench::{generate_random_matrix, multiply_naive, multiply_transpose};

fn bench_multiply(c: &mut Criterion) {
    let mut group = c.benchmark_group("matmul");
    let mut rng = StdRng::seed_from_u64(0xB000);

    for n in [32, 64, 128, 256] {
        let a = generate_random_matrix(n, &mut rng);
        let b = generate_random_matrix(n, &mut rng);

        group.bench_with_input(BenchmarkId::new("naive", n), &n, |bench, _| {
            bench.iter(|| multiply_naive(black_box(&a), black_box(&b)))
        });
        group.bench_with_input(BenchmarkId::new("transpose", n), &n, |bench, _| {
            bench.iter(|| multiply_transpose(black_box(&a), black_box(&b)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_multiply);
criterion_main!(benches);
