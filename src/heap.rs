//! A binary min-heap priority queue over a flat `Vec`.
//!
//! The heap keeps the smallest key at index 0; every element at `i` is no larger than its
//! children at `2i + 1` and `2i + 2`. Underflow and invalid key decreases are reported as
//! [`HeapError`]s instead of panics so callers can drive the heap to exhaustion with a plain
//! `while let` loop.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::heap::MinHeap;
//!
//! let mut heap = MinHeap::new();
//! heap.push(3);
//! heap.push(1);
//! heap.push(2);
//!
//! assert_eq!(heap.min(), Ok(&1));
//! assert_eq!(heap.extract_min(), Ok(1));
//! assert_eq!(heap.extract_min(), Ok(2));
//! assert_eq!(heap.extract_min(), Ok(3));
//! assert!(heap.extract_min().is_err());
//! ```

use thiserror::Error;

/// Errors reported by [`MinHeap`] operations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// [`min`][MinHeap::min] or [`extract_min`][MinHeap::extract_min] on an empty heap.
    #[error("heap underflow")]
    Underflow,
    /// [`decrease_key`][MinHeap::decrease_key] with an index past the end of the heap.
    #[error("index {0} is out of range")]
    IndexOutOfRange(usize),
    /// [`decrease_key`][MinHeap::decrease_key] with a key that is not smaller than the current
    /// one. Increasing a key would need a sift in the other direction, which the operation does
    /// not do, so it refuses rather than quietly breaking the heap order.
    #[error("new key is not smaller than the current key")]
    KeyNotDecreased,
}

/// A binary min-heap. This can be used for pushing keys and extracting them smallest-first.
#[derive(Debug, Clone)]
pub struct MinHeap<T> {
    heap: Vec<T>,
}

impl<T> Default for MinHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> MinHeap<T> {
    /// Generate a new, empty heap.
    pub fn new() -> Self {
        Self { heap: Vec::new() }
    }

    /// The number of keys in the heap.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether the heap has no keys.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl<T: Ord> MinHeap<T> {
    /// Pushes a key onto the heap: append at the end, then float it up to its place.
    pub fn push(&mut self, key: T) {
        self.heap.push(key);
        self.sift_up(self.heap.len() - 1);
    }

    /// The smallest key, or [`HeapError::Underflow`] on an empty heap.
    pub fn min(&self) -> Result<&T, HeapError> {
        self.heap.first().ok_or(HeapError::Underflow)
    }

    /// Removes and returns the smallest key, or [`HeapError::Underflow`] on an empty heap.
    ///
    /// The last key moves into the hole at the top and sinks down until both its children are
    /// larger.
    pub fn extract_min(&mut self) -> Result<T, HeapError> {
        if self.heap.is_empty() {
            return Err(HeapError::Underflow);
        }
        let last = self.heap.len() - 1;
        self.heap.swap(0, last);
        let min = self.heap.pop().expect("heap was checked non-empty");
        self.sift_down(0);
        Ok(min)
    }

    /// Replaces the key at `index` with a smaller one and floats it up. The index refers to the
    /// heap's internal layout (0 is the minimum), the same order [`len`][Self::len] counts.
    ///
    /// Fails with [`HeapError::IndexOutOfRange`] for a bad index and
    /// [`HeapError::KeyNotDecreased`] when the new key is not strictly smaller; the heap is left
    /// untouched in both cases.
    pub fn decrease_key(&mut self, index: usize, new_key: T) -> Result<(), HeapError> {
        let slot = self
            .heap
            .get_mut(index)
            .ok_or(HeapError::IndexOutOfRange(index))?;
        if new_key >= *slot {
            return Err(HeapError::KeyNotDecreased);
        }
        *slot = new_key;
        self.sift_up(index);
        Ok(())
    }

    /// Moves the key at `index` up until its parent is no larger.
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.heap[index] < self.heap[parent] {
                self.heap.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    /// Moves the key at `index` down, swapping with its smallest child, until neither child is
    /// smaller.
    fn sift_down(&mut self, mut index: usize) {
        loop {
            let left = 2 * index + 1;
            let right = left + 1;
            let mut smallest = index;
            if left < self.heap.len() && self.heap[left] < self.heap[smallest] {
                smallest = left;
            }
            if right < self.heap.len() && self.heap[right] < self.heap[smallest] {
                smallest = right;
            }
            if smallest == index {
                break;
            }
            self.heap.swap(index, smallest);
            index = smallest;
        }
    }
}

impl<T: Ord> From<Vec<T>> for MinHeap<T> {
    fn from(keys: Vec<T>) -> Self {
        keys.into_iter().collect()
    }
}

impl<T: Ord> std::iter::FromIterator<T> for MinHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(keys: I) -> Self {
        let mut heap = Self::new();
        for key in keys {
            heap.push(key);
        }
        heap
    }
}
