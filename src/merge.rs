//! K-way merge of sorted sequences.
//!
//! Both routines produce one globally sorted sequence by repeatedly extracting the smallest
//! pending head element: [`k_way_merge`] drives this crate's own [`MinHeap`] with explicit
//! (list, position) bookkeeping, while [`merge_sorted_slices`] leans on the standard library's
//! [`BinaryHeap`] over slice cursors. Cost is `O(n log k)` for `n` total elements across `k`
//! sequences either way.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use crate::heap::MinHeap;

/// One pending head element in [`k_way_merge`]: the value plus where it came from, so the next
/// element of the same list can be pushed after it is extracted.
struct MergeEntry<T> {
    head: T,
    list: usize,
    position: usize,
}

// Ordering looks at the head value only; which list it came from must not influence the heap
// order.
impl<T: Ord> PartialEq for MergeEntry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.head == other.head
    }
}
impl<T: Ord> Eq for MergeEntry<T> {}
impl<T: Ord> PartialOrd for MergeEntry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl<T: Ord> Ord for MergeEntry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.head.cmp(&other.head)
    }
}

/// Merges `k` individually sorted lists into one sorted `Vec` using a [`MinHeap`] of the current
/// head of every list.
///
/// Empty input lists are skipped; an empty input slice yields an empty output.
///
/// # Examples
///
/// ```
/// use ordered_tree::merge::k_way_merge;
///
/// let lists = vec![vec![4, 5, 17], vec![1, 7, 8], vec![6, 11]];
/// assert_eq!(k_way_merge(&lists), vec![1, 4, 5, 6, 7, 8, 11, 17]);
/// ```
pub fn k_way_merge<T: Ord + Clone>(lists: &[Vec<T>]) -> Vec<T> {
    let mut heap = MinHeap::new();
    for (list, values) in lists.iter().enumerate() {
        if let Some(head) = values.first() {
            heap.push(MergeEntry {
                head: head.clone(),
                list,
                position: 0,
            });
        }
    }

    let mut merged = Vec::with_capacity(lists.iter().map(Vec::len).sum());
    while let Ok(entry) = heap.extract_min() {
        let MergeEntry {
            head,
            list,
            position,
        } = entry;
        merged.push(head);
        if let Some(next) = lists[list].get(position + 1) {
            heap.push(MergeEntry {
                head: next.clone(),
                list,
                position: position + 1,
            });
        }
    }
    merged
}

/// The current head of one slice in [`merge_sorted_slices`], carrying the rest of the slice so
/// the next head can be pushed after extraction.
struct SliceHead<'a, T> {
    head: &'a T,
    rest: &'a [T],
}

impl<T: Ord> PartialEq for SliceHead<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.head == other.head
    }
}
impl<T: Ord> Eq for SliceHead<'_, T> {}
impl<T: Ord> PartialOrd for SliceHead<'_, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl<T: Ord> Ord for SliceHead<'_, T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.head.cmp(other.head)
    }
}

/// Merges `k` individually sorted slices into one sorted `Vec` using the standard library's
/// max-heap flipped around with [`Reverse`].
///
/// Same result as [`k_way_merge`]; kept as the `std`-collections rendition of the algorithm.
///
/// # Examples
///
/// ```
/// use ordered_tree::merge::merge_sorted_slices;
///
/// let merged = merge_sorted_slices(&[&[57, 131, 493][..], &[339, 418, 452], &[190, 442]]);
/// assert_eq!(merged, vec![57, 131, 190, 339, 418, 442, 452, 493]);
/// ```
pub fn merge_sorted_slices<T: Ord + Clone>(lists: &[&[T]]) -> Vec<T> {
    let mut heap = BinaryHeap::new();
    for list in lists {
        if let Some((head, rest)) = list.split_first() {
            heap.push(Reverse(SliceHead { head, rest }));
        }
    }

    let mut merged = Vec::with_capacity(lists.iter().map(|list| list.len()).sum());
    while let Some(Reverse(SliceHead { head, rest })) = heap.pop() {
        merged.push(head.clone());
        if let Some((next, rest)) = rest.split_first() {
            heap.push(Reverse(SliceHead { head: next, rest }));
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merges_six_lists() {
        let lists = vec![
            vec![4, 5, 17, 18],
            vec![1, 7, 8, 9],
            vec![6, 11, 13, 15],
            vec![2, 12, 14, 20],
            vec![3, 16, 21, 34],
            vec![10, 19, 22, 26],
        ];

        let merged = k_way_merge(&lists);

        let mut expected: Vec<i32> = lists.iter().flatten().copied().collect();
        expected.sort_unstable();
        assert_eq!(merged, expected);
    }

    #[test]
    fn both_merges_agree() {
        let lists = vec![vec![57, 131, 493], vec![339, 418, 452], vec![190, 442]];
        let slices: Vec<&[i32]> = lists.iter().map(Vec::as_slice).collect();

        assert_eq!(k_way_merge(&lists), merge_sorted_slices(&slices));
    }

    #[test]
    fn empty_inputs() {
        assert_eq!(k_way_merge::<i32>(&[]), Vec::<i32>::new());
        assert_eq!(merge_sorted_slices::<i32>(&[]), Vec::<i32>::new());

        // Empty lists among non-empty ones are skipped.
        let lists = vec![vec![], vec![1, 2], vec![]];
        assert_eq!(k_way_merge(&lists), vec![1, 2]);
    }

    #[test]
    fn duplicate_values_survive() {
        let lists = vec![vec![1, 3, 3], vec![3, 4], vec![1]];

        assert_eq!(k_way_merge(&lists), vec![1, 1, 3, 3, 3, 4]);
    }

    quickcheck::quickcheck! {
        fn merge_equals_sort(lists: Vec<Vec<i16>>) -> bool {
            let mut lists = lists;
            for list in &mut lists {
                list.sort_unstable();
            }

            let mut expected: Vec<i16> = lists.iter().flatten().copied().collect();
            expected.sort_unstable();

            let slices: Vec<&[i16]> = lists.iter().map(Vec::as_slice).collect();
            k_way_merge(&lists) == expected && merge_sorted_slices(&slices) == expected
        }
    }
}
