//! B-tree benchmarks: insert patterns, lookups, traversal.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pagetree::{BTree, Order};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

const N: u64 = 10_000;

fn shuffled_keys() -> Vec<u64> {
    let mut keys: Vec<u64> = (0..N).collect();
    keys.shuffle(&mut StdRng::seed_from_u64(42));
    keys
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");
    let random = shuffled_keys();

    for k in [1, 4, 16] {
        let order = Order::new(k).unwrap();

        group.bench_with_input(BenchmarkId::new("ascending", k), &order, |b, &order| {
            b.iter(|| {
                let mut tree = BTree::new(order);
                for key in 0..N {
                    tree.insert(key, key);
                }
                black_box(tree.len())
            })
        });

        group.bench_with_input(BenchmarkId::new("random", k), &order, |b, &order| {
            b.iter(|| {
                let mut tree = BTree::new(order);
                for &key in &random {
                    tree.insert(key, key);
                }
                black_box(tree.len())
            })
        });
    }
    group.finish();
}

fn bench_find(c: &mut Criterion) {
    let mut group = c.benchmark_group("find");
    let keys = shuffled_keys();

    for k in [1, 4, 16] {
        let mut tree = BTree::new(Order::new(k).unwrap());
        for &key in &keys {
            tree.insert(key, key);
        }

        group.bench_with_input(BenchmarkId::from_parameter(k), &tree, |b, tree| {
            b.iter(|| {
                let mut hits = 0;
                for key in &keys {
                    if tree.find(key).is_some() {
                        hits += 1;
                    }
                }
                black_box(hits)
            })
        });
    }
    group.finish();
}

fn bench_for_each(c: &mut Criterion) {
    let tree: BTree<u64, u64> = shuffled_keys().into_iter().map(|k| (k, k)).collect();

    c.bench_function("for_each", |b| {
        b.iter(|| {
            let mut sum = 0u64;
            tree.for_each(|_, value| sum = sum.wrapping_add(*value));
            black_box(sum)
        })
    });
}

criterion_group!(benches, bench_insert, bench_find, bench_for_each);
criterion_main!(benches);
