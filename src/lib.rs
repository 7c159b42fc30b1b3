//! This crate exposes a small family of classic ordered data structures built
//! around repeated extraction of a minimum.
//!
//! ## Ordered tree
//!
//! The centrepiece is [`tree::Tree`], an ordered map implemented as a Binary
//! Search Tree whose nodes carry a parent back-reference. The most important
//! invariants are:
//!
//! 1. For every node, all the keys in its left subtree are strictly less than
//!    its own key, and all the keys in its right subtree are greater or equal
//!    (equal keys are allowed and always land to the right, so the map accepts
//!    duplicates).
//! 2. For every non-root node, its parent's matching child link points back at
//!    it. The parent/child relation is mutually consistent after every public
//!    operation.
//!
//! The parent links are what make the tree interesting: in-order cursors and
//! iterators walk the sequence with no auxiliary stack, and deletion relinks a
//! node's successor into its place with `O(1)` pointer surgery once the node
//! is found. There is no rebalancing, so every `O(height)` bound degrades to
//! `O(n)` on adversarial insert orders.
//!
//! ## Collaborators
//!
//! [`heap::MinHeap`] is a binary min-heap priority queue and [`merge`] holds
//! two k-way merge routines layered on top of it; they share the tree's
//! "extract the minimum, repeat" theme and the test suites cross-check the
//! structures against each other.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod heap;
pub mod merge;
pub mod tree;

#[cfg(test)]
mod test;
