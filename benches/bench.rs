use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};

use ordered_tree::merge::{k_way_merge, merge_sorted_slices};
use ordered_tree::tree::Tree;

/// Returns how many nodes are needed to fill a binary tree with `num_levels` levels.
fn num_nodes_in_full_tree(num_levels: usize) -> usize {
    2usize.pow(num_levels as u32) - 1
}

/// Returns keys in an insert order that keeps the (non-self-balancing) tree balanced: the middle
/// of each range first, then both halves.
fn balanced_insert_order(num_levels: usize) -> Vec<i32> {
    fn fill(keys: &mut Vec<i32>, range: &[i32]) {
        if !range.is_empty() {
            let mid = range.len() / 2;
            keys.push(range[mid]);
            fill(keys, &range[..mid]);
            fill(keys, &range[mid + 1..]);
        }
    }

    let sorted: Vec<i32> = (0..num_nodes_in_full_tree(num_levels) as i32).collect();
    let mut keys = Vec::with_capacity(sorted.len());
    fill(&mut keys, &sorted);
    keys
}

fn build_tree(keys: &[i32]) -> Tree<i32, i32> {
    let mut tree = Tree::new();
    for &key in keys {
        tree.insert(key, key);
    }
    tree
}

/// Helper to bench a mutating function on the tree.
/// It creates a group for the given name and closure and runs tests for various sizes of
/// trees before finishing the group. The tree is rebuilt per batch since it cannot be cloned.
fn bench_mutation(c: &mut Criterion, name: &str, f: impl Fn(&mut Tree<i32, i32>, i32)) {
    let mut group = c.benchmark_group(name);

    for num_levels in [3, 7, 11, 15] {
        let keys = balanced_insert_order(num_levels);
        let largest_element_in_tree = (num_nodes_in_full_tree(num_levels) - 1) as i32;
        let id = BenchmarkId::new("balanced", largest_element_in_tree);

        group.bench_function(id, |b| {
            b.iter_batched(
                || build_tree(&keys),
                |mut tree| f(&mut tree, black_box(largest_element_in_tree)),
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

/// Like [`bench_mutation`] but for read-only functions, so one tree per size is enough.
fn bench_lookup(c: &mut Criterion, name: &str, f: impl Fn(&Tree<i32, i32>, i32)) {
    let mut group = c.benchmark_group(name);

    for num_levels in [3, 7, 11, 15] {
        let tree = build_tree(&balanced_insert_order(num_levels));
        let largest_element_in_tree = (num_nodes_in_full_tree(num_levels) - 1) as i32;
        let id = BenchmarkId::new("balanced", largest_element_in_tree);

        group.bench_function(id, |b| {
            b.iter(|| f(&tree, black_box(largest_element_in_tree)))
        });
    }

    group.finish();
}

fn bench_merges(c: &mut Criterion) {
    let mut group = c.benchmark_group("merge");

    let lists: Vec<Vec<i32>> = (0..8)
        .map(|list| (0..1024).map(|i| i * 8 + list).collect())
        .collect();
    let slices: Vec<&[i32]> = lists.iter().map(Vec::as_slice).collect();

    group.bench_function("min-heap", |b| b.iter(|| k_way_merge(black_box(&lists))));
    group.bench_function("std-binary-heap", |b| {
        b.iter(|| merge_sorted_slices(black_box(&slices)))
    });

    group.finish();
}

pub fn criterion_benchmark(c: &mut Criterion) {
    bench_lookup(c, "find", |tree, i| {
        let _value = black_box(tree.get(&i));
    });
    bench_lookup(c, "find-miss", |tree, i| {
        let _value = black_box(tree.get(&(i + 1)));
    });
    bench_lookup(c, "iterate", |tree, _| {
        let _count = black_box(tree.iter().count());
    });

    bench_mutation(c, "insert", |tree, i| {
        tree.insert(i + 1, i + 1);
    });
    bench_mutation(c, "remove", |tree, i| {
        tree.remove(&i);
    });
    bench_mutation(c, "remove-miss", |tree, i| {
        tree.remove(&(i + 1));
    });

    bench_merges(c);
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
