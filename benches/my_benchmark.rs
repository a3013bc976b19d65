use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use twosat_nexus::solver::solve;
use twosat_nexus_test_utils::{chain_cnf, planted_cnf};

fn my_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("Kosaraju");

    for n in [1_000, 10_000, 50_000] {
        let cnf = chain_cnf(n);
        group.bench_with_input(BenchmarkId::new("chain", n), &cnf, |b, cnf| b.iter(|| solve(cnf).unwrap()));
    }

    let mut rng = StdRng::seed_from_u64(42);
    for n in [1_000, 10_000] {
        let (cnf, _) = planted_cnf(&mut rng, n, 3 * n);
        group.bench_with_input(BenchmarkId::new("planted", n), &cnf, |b, cnf| b.iter(|| solve(cnf).unwrap()));
    }

    group.finish();
}

criterion_group!(benches, my_benches);
criterion_main!(benches);
