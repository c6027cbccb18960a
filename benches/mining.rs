use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use patmine::{encode, fpgrowth_mine, fpgrowth_mine_parallel, relim_mine, sam_mine};

/// Generate random transactions over a `universe_size` item universe.
///
/// Each transaction draws up to `max_items` items; duplicates collapse, so
/// the effective sizes vary. A fixed seed keeps runs comparable.
fn random_transactions(
    seed: u64,
    transaction_number: usize,
    universe_size: u64,
    max_items: usize,
) -> Vec<Vec<u64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..transaction_number)
        .map(|_| {
            let len = rng.gen_range(0..=max_items);
            let mut items: Vec<u64> = (0..len).map(|_| rng.gen_range(0..universe_size)).collect();
            items.sort_unstable();
            items.dedup();
            items
        })
        .collect()
}

fn bench_engines(c: &mut Criterion, name: &str, transactions: Vec<Vec<u64>>, min_support: u64) {
    let mut group = c.benchmark_group(name);

    group.bench_function(BenchmarkId::from_parameter("sam"), |b| {
        b.iter(|| {
            let (encoded, _) = encode(black_box(&transactions));
            sam_mine(&encoded, black_box(min_support))
        });
    });
    group.bench_function(BenchmarkId::from_parameter("relim"), |b| {
        b.iter(|| {
            let (encoded, _) = encode(black_box(&transactions));
            relim_mine(&encoded, black_box(min_support))
        });
    });
    group.bench_function(BenchmarkId::from_parameter("fpgrowth"), |b| {
        b.iter(|| fpgrowth_mine(black_box(&transactions), black_box(min_support), false));
    });
    group.bench_function(BenchmarkId::from_parameter("fpgrowth_pruning"), |b| {
        b.iter(|| fpgrowth_mine(black_box(&transactions), black_box(min_support), true));
    });
    group.bench_function(BenchmarkId::from_parameter("fpgrowth_parallel"), |b| {
        b.iter(|| fpgrowth_mine_parallel(black_box(&transactions), black_box(min_support), true));
    });

    group.finish();
}

/// Sparse shape: large universe, most items rare.
fn bench_sparse(c: &mut Criterion) {
    let transactions = random_transactions(7, 500, 2000, 100);
    bench_engines(c, "mining_sparse", transactions, 10);
}

/// Dense shape: small universe, some items in almost every transaction.
fn bench_dense(c: &mut Criterion) {
    let transactions = random_transactions(11, 75, 110, 50);
    bench_engines(c, "mining_dense", transactions, 25);
}

criterion_group!(benches, bench_sparse, bench_dense);
criterion_main!(benches);
