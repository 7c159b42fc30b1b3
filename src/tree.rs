//! An ordered map backed by an unbalanced Binary Search Tree whose nodes keep a parent
//! back-reference. The parent links let cursors and iterators walk the in-order sequence without
//! any auxiliary stack, and let deletion relink nodes in place.
//!
//! Unlike a typical map, equal keys are *not* rejected or overwritten: an insert with an existing
//! key lands in the right subtree of the existing node, so the tree behaves like a multimap.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::tree::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.get(&1), None);
//!
//! tree.insert(1, 2);
//! assert_eq!(tree.get(&1), Some(&2));
//!
//! // Inserting the same key again keeps both entries.
//! tree.insert(1, 3);
//! assert_eq!(tree.len(), 2);
//!
//! // Removing a key removes exactly one entry and returns its value.
//! let removed = tree.remove(&1);
//! assert_eq!(removed, Some(2));
//! assert_eq!(tree.get(&1), Some(&3));
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;
use std::ptr::NonNull;

/// An ordered map implemented as an unbalanced BST with parent links. This can be used for
/// inserting, finding, iterating over, and removing keys and values.
///
/// There is no rebalancing, so the height (and with it the cost of every `O(height)` operation)
/// degrades to `O(n)` on adversarial insert orders such as already-sorted keys.
///
/// The tree is move-only. Cloning it would require either deep-copying every node or sharing
/// them, and sharing would break the one-owner-per-node rule the deletion surgery relies on.
pub struct Tree<K, V> {
    // This is a `Link` instead of an `Option<Box<Node>>` so that the tree can be moved around
    // without the children's parent pointers breaking.
    root: Link<K, V>,
    len: usize,
}

impl<K, V> Default for Tree<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Drop for Tree<K, V> {
    fn drop(&mut self) {
        // Explicit stack instead of recursion: a degenerate tree is as tall as it is big.
        let mut stack = Vec::new();
        stack.extend(self.root.take().0);
        while let Some(node) = stack.pop() {
            // SAFETY: Every node is owned by exactly one slot and reaches this loop exactly once:
            // the root through `self.root.take()`, everyone else through their parent's child
            // link just before that parent is freed. Nodes were allocated with `Box::new` in
            // `Node::new_boxed` so they are well aligned, etc.
            let node = unsafe { Box::from_raw(node.as_ptr()) };
            stack.extend(node.left.0);
            stack.extend(node.right.0);
        }
    }
}

impl<K, V> fmt::Debug for Tree<K, V>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V> Tree<K, V> {
    /// Generate a new, empty `Tree`.
    pub fn new() -> Self {
        Self {
            root: Link(None),
            len: 0,
        }
    }

    /// The number of entries in the tree. Duplicate keys count once per entry.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree has no entries.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Inserts the given key and value. The new node always becomes a leaf and this never fails:
    /// an existing equal key is not overwritten, the new entry goes into its right subtree.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// tree.insert(1, 2);
    /// assert_eq!(tree.get(&1), Some(&2));
    ///
    /// tree.insert(1, 3);
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn insert(&mut self, key: K, value: V)
    where
        K: Ord,
    {
        let mut parent = None;
        let mut went_left = false;
        let mut current = self.root.0;
        while let Some(node) = current {
            parent = Some(node);
            // SAFETY: `node` is a live node of this tree and we hold `&mut self`, so no other
            // reference to it exists while this shared borrow is alive.
            let node = unsafe { node.as_ref() };
            if key < node.key {
                current = node.left.0;
                went_left = true;
            } else {
                current = node.right.0;
                went_left = false;
            }
        }

        let mut leaf = Node::new_boxed(key, value);
        leaf.parent = Link(parent);
        let leaf = NonNull::from(Box::leak(leaf));
        match parent {
            None => self.root = Link(Some(leaf)),
            // SAFETY: `p` is a live node and nothing else borrows the tree right now.
            Some(mut p) => unsafe {
                if went_left {
                    p.as_mut().left = Link(Some(leaf));
                } else {
                    p.as_mut().right = Link(Some(leaf));
                }
            },
        }
        self.len += 1;
    }

    /// Potentially finds the value associated with the given key. If several entries share the
    /// key, this returns the one closest to the root.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1, 2);
    ///
    /// assert_eq!(tree.get(&1), Some(&2));
    /// assert_eq!(tree.get(&42), None);
    /// ```
    pub fn get(&self, key: &K) -> Option<&V>
    where
        K: Ord,
    {
        // SAFETY: `find_node` returns a live node of this tree; the returned borrow is tied to
        // `&self` so the node cannot be removed while it is alive.
        self.find_node(key)
            .map(|node| unsafe { &(*node.as_ptr()).value })
    }

    /// Like [`get`][Self::get] but the value can be mutated.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V>
    where
        K: Ord,
    {
        // SAFETY: As in `get`, plus `&mut self` guarantees exclusivity.
        self.find_node(key)
            .map(|node| unsafe { &mut (*node.as_ptr()).value })
    }

    /// Returns a [`Cursor`] at the entry with the given key, or the end cursor if the key is
    /// absent. The cursor can be walked forward through the in-order sequence.
    pub fn find(&self, key: &K) -> Cursor<'_, K, V>
    where
        K: Ord,
    {
        Cursor {
            current: self.find_node(key),
            _tree: PhantomData,
        }
    }

    /// Returns a [`CursorMut`] at the entry with the given key, or the end cursor if the key is
    /// absent. The cursor can mutate values and remove entries.
    pub fn find_mut(&mut self, key: &K) -> CursorMut<'_, K, V>
    where
        K: Ord,
    {
        CursorMut {
            current: self.find_node(key),
            tree: self,
        }
    }

    /// A cursor at the entry with the smallest key, or the end cursor if the tree is empty.
    pub fn first(&self) -> Cursor<'_, K, V> {
        Cursor {
            current: self.min_from_root(),
            _tree: PhantomData,
        }
    }

    /// A cursor at the entry with the largest key, or the end cursor if the tree is empty.
    pub fn last(&self) -> Cursor<'_, K, V> {
        // SAFETY: The root is a live node of this tree.
        Cursor {
            current: self.root.0.map(|root| unsafe { Self::max_node(root) }),
            _tree: PhantomData,
        }
    }

    /// Removes one entry with the given key and returns its value. Nothing happens if the key is
    /// absent. If several entries share the key, the one closest to the root is removed; the
    /// others stay discoverable.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1, 2);
    ///
    /// assert_eq!(tree.remove(&1), Some(2));
    /// assert_eq!(tree.remove(&1), None);
    /// ```
    pub fn remove(&mut self, key: &K) -> Option<V>
    where
        K: Ord,
    {
        let node = self.find_node(key)?;
        // SAFETY: `find_node` returned a live node of this tree and we hold `&mut self`.
        let dead = unsafe { self.detach(node) };
        let Node { value, .. } = *dead;
        Some(value)
    }

    /// An in-order iterator over the entries, smallest key first.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            next: self.min_from_root(),
            remaining: self.len,
            _tree: PhantomData,
        }
    }

    /// An in-order iterator over the entries with mutable values.
    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        IterMut {
            next: self.min_from_root(),
            remaining: self.len,
            _tree: PhantomData,
        }
    }

    /// Standard BST descent. Stops at the first node with an equal key, which for duplicate keys
    /// is the one closest to the root.
    fn find_node(&self, key: &K) -> Option<NonNull<Node<K, V>>>
    where
        K: Ord,
    {
        let mut current = self.root.0;
        while let Some(node) = current {
            // SAFETY: `node` is a live node of this tree; the borrow ends within this iteration.
            let node_ref = unsafe { node.as_ref() };
            match key.cmp(&node_ref.key) {
                Ordering::Less => current = node_ref.left.0,
                Ordering::Equal => return Some(node),
                Ordering::Greater => current = node_ref.right.0,
            }
        }
        None
    }

    fn min_from_root(&self) -> Option<NonNull<Node<K, V>>> {
        // SAFETY: The root is a live node of this tree.
        self.root.0.map(|root| unsafe { Self::min_node(root) })
    }

    /// The leftmost node of the subtree rooted at `from`. Deletion reuses this to locate the
    /// in-order successor of a node's right subtree.
    ///
    /// # Safety
    ///
    /// `from` must point at a live node and no mutable reference into the tree may be alive.
    unsafe fn min_node(mut from: NonNull<Node<K, V>>) -> NonNull<Node<K, V>> {
        while let Some(left) = from.as_ref().left.0 {
            from = left;
        }
        from
    }

    /// The rightmost node of the subtree rooted at `from`.
    ///
    /// # Safety
    ///
    /// As for [`min_node`][Self::min_node].
    unsafe fn max_node(mut from: NonNull<Node<K, V>>) -> NonNull<Node<K, V>> {
        while let Some(right) = from.as_ref().right.0 {
            from = right;
        }
        from
    }

    /// The next node of the in-order sequence: the minimum of the right subtree if there is one,
    /// otherwise the first ancestor reached through a left-child edge. `None` past the maximum.
    ///
    /// # Safety
    ///
    /// `node` must point at a live node and no mutable reference into the tree may be alive.
    unsafe fn successor(node: NonNull<Node<K, V>>) -> Option<NonNull<Node<K, V>>> {
        if let Some(right) = node.as_ref().right.0 {
            return Some(Self::min_node(right));
        }
        let mut current = node;
        let mut parent = current.as_ref().parent.0;
        while let Some(p) = parent {
            if p.as_ref().left.0 == Some(current) {
                return Some(p);
            }
            current = p;
            parent = p.as_ref().parent.0;
        }
        None
    }

    /// The slot that owns `node`: the matching child link of its parent, or the root link.
    ///
    /// # Safety
    ///
    /// `node` must point at a live node of this tree.
    unsafe fn owning_slot(&mut self, node: NonNull<Node<K, V>>) -> &mut Link<K, V> {
        match node.as_ref().parent.0 {
            None => &mut self.root,
            Some(mut parent) => {
                let parent = parent.as_mut();
                if parent.left.0 == Some(node) {
                    &mut parent.left
                } else {
                    &mut parent.right
                }
            }
        }
    }

    /// The relinking primitive: detaches `u` from its position and installs `v` there. The
    /// detached node is returned to the caller with both child links cleared, so dropping it
    /// never takes the rest of the subtree with it.
    ///
    /// # Safety
    ///
    /// `u` must point at a live node of this tree and `v`, if present, must be one of `u`'s
    /// children.
    unsafe fn transplant(
        &mut self,
        u: NonNull<Node<K, V>>,
        v: Option<NonNull<Node<K, V>>>,
    ) -> Box<Node<K, V>> {
        // The parent link is read before any surgery; `u` is about to leave the tree.
        let u_parent = u.as_ref().parent;
        let slot = self.owning_slot(u);
        let detached = slot.take().0.expect("a live node is owned by its slot");
        debug_assert_eq!(detached, u);
        let mut detached = Box::from_raw(detached.as_ptr());
        if let Some(mut v) = v {
            // `v` is one of `u`'s children; its ownership moves from `u` into `u`'s old slot.
            if detached.right.0 == Some(v) {
                detached.right = Link(None);
            } else {
                debug_assert_eq!(detached.left.0, Some(v));
                detached.left = Link(None);
            }
            slot.0 = Some(v);
            v.as_mut().parent = u_parent;
        }
        detached.parent = Link(None);
        detached
    }

    /// Removes `node` from the tree, relinking around it. Returns the detached node, which owns
    /// nothing: its key and value can be moved out and the allocation dropped.
    ///
    /// # Safety
    ///
    /// `node` must point at a live node of this tree.
    unsafe fn detach(&mut self, node: NonNull<Node<K, V>>) -> Box<Node<K, V>> {
        self.len -= 1;
        let (left, right) = {
            let node_ref = node.as_ref();
            (node_ref.left.0, node_ref.right.0)
        };
        match (left, right) {
            // At most one child: that child (or nothing) takes the node's place.
            (None, _) => self.transplant(node, right),
            (_, None) => self.transplant(node, left),
            (Some(_), Some(right)) => {
                let successor = Self::min_node(right);
                if successor.as_ref().parent.0 == Some(node) {
                    // The successor is the immediate right child. It already owns the right
                    // subtree, so it just slides up and adopts the left subtree.
                    let left = (*node.as_ptr()).left.take();
                    let dead = self.transplant(node, Some(successor));
                    (*successor.as_ptr()).left = left;
                    if let Some(l) = left.0 {
                        (*l.as_ptr()).parent = Link(Some(successor));
                    }
                    dead
                } else {
                    // The successor sits deeper in the right subtree. Free it from its own
                    // position first (it has no left child by minimality, so its right child
                    // fills in), then give it the dead node's place, parent, and subtrees.
                    let successor_right = (*successor.as_ptr()).right.0;
                    let mut lifted = self.transplant(successor, successor_right);

                    let slot = self.owning_slot(node);
                    let detached = slot.take().0.expect("a live node is owned by its slot");
                    let mut dead = Box::from_raw(detached.as_ptr());
                    lifted.left = dead.left.take();
                    lifted.right = dead.right.take();
                    lifted.parent = dead.parent.take();
                    let lifted = NonNull::from(Box::leak(lifted));
                    slot.0 = Some(lifted);

                    // The adopted children still point at the dead node.
                    if let Some(l) = (*lifted.as_ptr()).left.0 {
                        (*l.as_ptr()).parent = Link(Some(lifted));
                    }
                    if let Some(r) = (*lifted.as_ptr()).right.0 {
                        (*r.as_ptr()).parent = Link(Some(lifted));
                    }
                    dead
                }
            }
        }
    }

    /// Walks the whole tree asserting the structural invariants: in-order keys are
    /// non-decreasing, the entry count matches `len`, and every child's parent link points back
    /// at the node that owns it.
    #[cfg(test)]
    fn check_invariants(&self)
    where
        K: Ord,
    {
        let keys: Vec<&K> = self.iter().map(|(k, _)| k).collect();
        assert!(keys.windows(2).all(|pair| pair[0] <= pair[1]));
        assert_eq!(keys.len(), self.len);

        if let Some(root) = self.root.0 {
            unsafe { assert!(root.as_ref().parent.0.is_none()) };
        }
        let mut stack = Vec::new();
        stack.extend(self.root.0);
        while let Some(node) = stack.pop() {
            unsafe {
                let node_ref = node.as_ref();
                for &child in [node_ref.left.0, node_ref.right.0].iter().flatten() {
                    assert_eq!(child.as_ref().parent.0, Some(node));
                    stack.push(child);
                }
            }
        }
    }
}

impl<'a, K, V> IntoIterator for &'a Tree<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, K, V> IntoIterator for &'a mut Tree<K, V> {
    type Item = (&'a K, &'a mut V);
    type IntoIter = IterMut<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

struct Link<K, V>(Option<NonNull<Node<K, V>>>);

impl<K, V> Clone for Link<K, V> {
    fn clone(&self) -> Self {
        Self(self.0)
    }
}
impl<K, V> Copy for Link<K, V> {}

impl<K, V> Link<K, V> {
    fn take(&mut self) -> Self {
        Link(self.0.take())
    }
}

struct Node<K, V> {
    key: K,
    value: V,
    left: Link<K, V>,
    right: Link<K, V>,
    // The parent link observes, it never owns: ownership of a node always sits in exactly one
    // child link (or the root link), which is what makes teardown and relinking cycle-free.
    parent: Link<K, V>,
}

impl<K, V> Node<K, V> {
    fn new_boxed(key: K, value: V) -> Box<Self> {
        Box::new(Node {
            key,
            value,
            left: Link(None),
            right: Link(None),
            parent: Link(None),
        })
    }
}

/// A read-only in-order cursor into a [`Tree`]. Either points at an entry or is the end cursor.
///
/// Cursors compare equal when they point at the same entry or are both the end cursor, so
/// "did `find` hit anything" is just [`is_end`][Cursor::is_end].
///
/// The borrow rules make stale cursors unrepresentable: while any `Cursor` is alive the tree
/// cannot be mutated, so the node it points at cannot be removed out from under it.
pub struct Cursor<'a, K, V> {
    current: Option<NonNull<Node<K, V>>>,
    _tree: PhantomData<&'a Tree<K, V>>,
}

impl<K, V> Clone for Cursor<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            current: self.current,
            _tree: PhantomData,
        }
    }
}
impl<K, V> Copy for Cursor<'_, K, V> {}

impl<K, V> PartialEq for Cursor<'_, K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.current == other.current
    }
}
impl<K, V> Eq for Cursor<'_, K, V> {}

impl<'a, K, V> Cursor<'a, K, V> {
    /// Whether this is the end cursor, one past the entry with the largest key.
    pub fn is_end(&self) -> bool {
        self.current.is_none()
    }

    /// The key of the current entry, or `None` on the end cursor.
    pub fn key(&self) -> Option<&'a K> {
        // SAFETY: The cursor borrows the tree for 'a, so the node stays alive that long.
        self.current.map(|node| unsafe { &(*node.as_ptr()).key })
    }

    /// The value of the current entry, or `None` on the end cursor.
    pub fn value(&self) -> Option<&'a V> {
        // SAFETY: As in `key`.
        self.current.map(|node| unsafe { &(*node.as_ptr()).value })
    }

    /// The current entry, or `None` on the end cursor.
    pub fn key_value(&self) -> Option<(&'a K, &'a V)> {
        // SAFETY: As in `key`.
        self.current
            .map(|node| unsafe { (&(*node.as_ptr()).key, &(*node.as_ptr()).value) })
    }

    /// Advances to the in-order successor. On the last entry this becomes the end cursor;
    /// advancing the end cursor is a no-op.
    pub fn move_next(&mut self) {
        if let Some(node) = self.current {
            // SAFETY: The cursor borrows the tree, so the node is alive.
            self.current = unsafe { Tree::successor(node) };
        }
    }
}

impl<K, V> fmt::Debug for Cursor<'_, K, V>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Cursor").field(&self.key_value()).finish()
    }
}

/// An in-order cursor that borrows the [`Tree`] mutably. On top of what [`Cursor`] can do, it
/// can mutate values and remove the current entry.
pub struct CursorMut<'a, K, V> {
    current: Option<NonNull<Node<K, V>>>,
    tree: &'a mut Tree<K, V>,
}

impl<K, V> CursorMut<'_, K, V> {
    /// Whether this is the end cursor.
    pub fn is_end(&self) -> bool {
        self.current.is_none()
    }

    /// The key of the current entry, or `None` on the end cursor. Keys are never mutable; editing
    /// one in place could silently break the ordering invariant.
    pub fn key(&self) -> Option<&K> {
        // SAFETY: The cursor borrows the tree exclusively, so the node is alive and unaliased.
        self.current.map(|node| unsafe { &(*node.as_ptr()).key })
    }

    /// The value of the current entry, or `None` on the end cursor.
    pub fn value(&self) -> Option<&V> {
        // SAFETY: As in `key`.
        self.current.map(|node| unsafe { &(*node.as_ptr()).value })
    }

    /// The value of the current entry, mutably, or `None` on the end cursor.
    pub fn value_mut(&mut self) -> Option<&mut V> {
        // SAFETY: As in `key`, and `&mut self` forbids a second live reference.
        self.current
            .map(|node| unsafe { &mut (*node.as_ptr()).value })
    }

    /// Advances to the in-order successor. Advancing the end cursor is a no-op.
    pub fn move_next(&mut self) {
        if let Some(node) = self.current {
            // SAFETY: The cursor borrows the tree, so the node is alive.
            self.current = unsafe { Tree::successor(node) };
        }
    }

    /// Removes the current entry and returns its key and value, leaving the cursor on the
    /// removed entry's in-order successor. Returns `None` on the end cursor: removing through
    /// an exhausted cursor is a checked no-op, not undefined behaviour.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1, 'a');
    /// tree.insert(2, 'b');
    ///
    /// let mut cursor = tree.find_mut(&1);
    /// assert_eq!(cursor.remove_current(), Some((1, 'a')));
    ///
    /// // The cursor moved on to the next entry.
    /// assert_eq!(cursor.key(), Some(&2));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn remove_current(&mut self) -> Option<(K, V)> {
        let node = self.current.take()?;
        // SAFETY: The cursor points at a live node of `self.tree` and holds the only borrow of
        // the tree. The successor is read before the surgery; it survives `detach` because only
        // `node` itself is freed (the successor node may be relinked but stays live).
        unsafe {
            self.current = Tree::successor(node);
            let dead = self.tree.detach(node);
            let Node { key, value, .. } = *dead;
            Some((key, value))
        }
    }
}

impl<K, V> fmt::Debug for CursorMut<'_, K, V>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CursorMut")
            .field(&self.key().map(|k| (k, self.value().expect("key implies value"))))
            .finish()
    }
}

/// An in-order iterator over a [`Tree`]'s entries. Created by [`Tree::iter`].
pub struct Iter<'a, K, V> {
    next: Option<NonNull<Node<K, V>>>,
    remaining: usize,
    _tree: PhantomData<&'a Tree<K, V>>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        // SAFETY: The iterator borrows the tree for 'a, so every node it walks stays alive and
        // unmutated for 'a.
        unsafe {
            self.next = Tree::successor(node);
            self.remaining -= 1;
            let node = node.as_ptr();
            Some((&(*node).key, &(*node).value))
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}
impl<K, V> std::iter::FusedIterator for Iter<'_, K, V> {}

/// An in-order iterator with mutable values. Created by [`Tree::iter_mut`].
pub struct IterMut<'a, K, V> {
    next: Option<NonNull<Node<K, V>>>,
    remaining: usize,
    _tree: PhantomData<&'a mut Tree<K, V>>,
}

impl<'a, K, V> Iterator for IterMut<'a, K, V> {
    type Item = (&'a K, &'a mut V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        // SAFETY: The iterator borrows the tree exclusively for 'a and visits each node exactly
        // once, so handing out one `&mut` per value never aliases. The key stays shared: mutating
        // it could break the ordering.
        unsafe {
            self.next = Tree::successor(node);
            self.remaining -= 1;
            let node = node.as_ptr();
            Some((&(*node).key, &mut (*node).value))
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for IterMut<'_, K, V> {}
impl<K, V> std::iter::FusedIterator for IterMut<'_, K, V> {}
