//! Cross-structure tests: the tree, the heap, and the merges all produce the same ascending
//! sequence for the same input, so they can check each other.

use ordered_tree::heap::MinHeap;
use ordered_tree::merge::{k_way_merge, merge_sorted_slices};
use ordered_tree::tree::Tree;

fn tree_sort(xs: &[i32]) -> Vec<i32> {
    let mut tree = Tree::new();
    for &x in xs {
        tree.insert(x, ());
    }
    tree.iter().map(|(&k, _)| k).collect()
}

fn heap_sort(xs: &[i32]) -> Vec<i32> {
    let mut heap: MinHeap<i32> = xs.iter().copied().collect();
    let mut out = Vec::with_capacity(heap.len());
    while let Ok(min) = heap.extract_min() {
        out.push(min);
    }
    out
}

#[test]
fn tree_and_heap_sort_alike() {
    let xs = [8, 3, 10, 1, 6, 14, 4, 7, 13, 3, 8];

    assert_eq!(tree_sort(&xs), heap_sort(&xs));
}

#[test]
fn merged_lists_match_a_tree_of_everything() {
    let lists = vec![
        vec![4, 5, 17, 18],
        vec![1, 7, 8, 9],
        vec![6, 11, 13, 15],
        vec![2, 12, 14, 20],
        vec![3, 16, 21, 34],
        vec![10, 19, 22, 26],
    ];

    let all: Vec<i32> = lists.iter().flatten().copied().collect();

    assert_eq!(k_way_merge(&lists), tree_sort(&all));
}

#[test]
fn cursor_drain_matches_heap_extraction_order() {
    let xs = [5, 1, 4, 1, 3, 2];

    let mut tree = Tree::new();
    for &x in &xs {
        tree.insert(x, ());
    }
    let mut drained = Vec::new();
    let mut cursor = tree.find_mut(&1);
    while let Some((key, ())) = cursor.remove_current() {
        drained.push(key);
    }

    assert!(tree.is_empty());
    assert_eq!(drained, heap_sort(&xs));
}

quickcheck::quickcheck! {
    fn all_structures_sort_alike(xs: Vec<i32>) -> bool {
        let mut expected = xs.clone();
        expected.sort_unstable();

        // Feed the merges one single pre-sorted list.
        let lists = vec![expected.clone()];
        let slices = vec![expected.as_slice()];

        tree_sort(&xs) == expected
            && heap_sort(&xs) == expected
            && k_way_merge(&lists) == expected
            && merge_sorted_slices(&slices) == expected
    }
}
