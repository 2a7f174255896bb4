use std::fmt::{self, Debug};
use std::iter::FusedIterator;

use crate::compare::{Compare, KeyOf};
use crate::error::Result;
use crate::index::{IndexType, NodeIndex};
use crate::tree::{Insertion, RbTree};

/// A read-only bidirectional cursor over a [`RbTree`].
///
/// The cursor rests either on a node or on the end position (the sentinel).
/// Moving forward from the maximum reaches the end; moving forward from the
/// end restarts at the minimum. Backward moves mirror this.
pub struct Cursor<'a, T, P, C, Ix> {
    /// Reference to the tree
    pub(crate) tree_ref: &'a RbTree<T, P, C, Ix>,
    /// Current node
    pub(crate) node: NodeIndex<Ix>,
}

impl<T, P, C, Ix: Copy> Clone for Cursor<'_, T, P, C, Ix> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, P, C, Ix: Copy> Copy for Cursor<'_, T, P, C, Ix> {}

impl<T, P, C, Ix: PartialEq> PartialEq for Cursor<'_, T, P, C, Ix> {
    /// Cursors are equal when they rest on the same node of the same tree.
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.tree_ref, other.tree_ref) && self.node == other.node
    }
}

impl<T, P, C, Ix: Eq> Eq for Cursor<'_, T, P, C, Ix> {}

impl<T: Debug, P, C, Ix: IndexType> Debug for Cursor<'_, T, P, C, Ix> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Cursor").field(&self.get()).finish()
    }
}

impl<'a, T, P, C, Ix> Cursor<'a, T, P, C, Ix>
where
    Ix: IndexType,
{
    /// A cursor on `node`. An index that holds no payload in `tree_ref` gives
    /// the end position.
    pub fn new(tree_ref: &'a RbTree<T, P, C, Ix>, node: NodeIndex<Ix>) -> Self {
        let node = if tree_ref.get(node).is_some() {
            node
        } else {
            NodeIndex::sentinel()
        };
        Cursor { tree_ref, node }
    }

    /// The node the cursor rests on.
    #[inline]
    pub fn index(&self) -> NodeIndex<Ix> {
        self.node
    }

    /// Returns `true` at the end position.
    #[inline]
    pub fn is_end(&self) -> bool {
        self.node.is_sentinel()
    }

    /// The payload under the cursor, `None` at the end position.
    #[inline]
    pub fn get(&self) -> Option<&'a T> {
        self.tree_ref.get(self.node)
    }

    #[inline]
    pub fn move_next(&mut self) {
        self.node = self.tree_ref.increment(self.node);
    }

    #[inline]
    pub fn move_prev(&mut self) {
        self.node = self.tree_ref.decrement(self.node);
    }

    /// The payload after the cursor, without moving it.
    pub fn peek_next(&self) -> Option<&'a T> {
        self.tree_ref.get(self.tree_ref.increment(self.node))
    }

    /// The payload before the cursor, without moving it.
    pub fn peek_prev(&self) -> Option<&'a T> {
        self.tree_ref.get(self.tree_ref.decrement(self.node))
    }
}

impl<'a, T, P, C, Ix> Cursor<'a, T, P, C, Ix>
where
    P: KeyOf<T>,
    C: Compare<P::Key>,
    Ix: IndexType,
{
    /// The key under the cursor, `None` at the end position.
    #[inline]
    pub fn key(&self) -> Option<&'a P::Key> {
        self.tree_ref.key(self.node)
    }
}

/// A bidirectional cursor with mutable access to a [`RbTree`].
pub struct CursorMut<'a, T, P, C, Ix> {
    /// Mutable reference to the tree
    pub(crate) tree_ref: &'a mut RbTree<T, P, C, Ix>,
    /// Current node
    pub(crate) node: NodeIndex<Ix>,
}

impl<T: Debug, P, C, Ix: IndexType> Debug for CursorMut<'_, T, P, C, Ix> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CursorMut").field(&self.get()).finish()
    }
}

impl<'a, T, P, C, Ix> CursorMut<'a, T, P, C, Ix>
where
    Ix: IndexType,
{
    /// A mutable cursor on `node`, clamped to the end position like [`Cursor::new`].
    pub fn new(tree_ref: &'a mut RbTree<T, P, C, Ix>, node: NodeIndex<Ix>) -> Self {
        let node = if tree_ref.get(node).is_some() {
            node
        } else {
            NodeIndex::sentinel()
        };
        CursorMut { tree_ref, node }
    }

    #[inline]
    pub fn index(&self) -> NodeIndex<Ix> {
        self.node
    }

    #[inline]
    pub fn is_end(&self) -> bool {
        self.node.is_sentinel()
    }

    #[inline]
    pub fn get(&self) -> Option<&T> {
        self.tree_ref.get(self.node)
    }

    /// Mutable access to the payload under the cursor.
    ///
    /// The part of the payload the tree is ordered by must not be changed.
    #[inline]
    pub fn get_mut(&mut self) -> Option<&mut T> {
        self.tree_ref.get_mut(self.node)
    }

    #[inline]
    pub fn move_next(&mut self) {
        self.node = self.tree_ref.increment(self.node);
    }

    #[inline]
    pub fn move_prev(&mut self) {
        self.node = self.tree_ref.decrement(self.node);
    }

    /// A read-only cursor at the same position.
    #[inline]
    pub fn as_cursor(&self) -> Cursor<'_, T, P, C, Ix> {
        Cursor::new(self.tree_ref, self.node)
    }

    /// Remove the payload under the cursor and move to its successor.
    ///
    /// Returns `None` and stays put at the end position.
    pub fn remove_current(&mut self) -> Option<T> {
        if self.tree_ref.get(self.node).is_none() {
            return None;
        }
        let next = self.tree_ref.increment(self.node);
        let removed = self.tree_ref.remove_at(self.node);
        self.node = next;
        removed
    }
}

impl<'a, T, P, C, Ix> CursorMut<'a, T, P, C, Ix>
where
    P: KeyOf<T>,
    C: Compare<P::Key>,
    Ix: IndexType,
{
    #[inline]
    pub fn key(&self) -> Option<&P::Key> {
        self.tree_ref.key(self.node)
    }

    /// Insert a payload into the tree, leaving the cursor where it is.
    ///
    /// # Errors
    ///
    /// Fails like [`RbTree::insert`].
    #[inline]
    pub fn insert(&mut self, payload: T) -> Result<Insertion<T, Ix>> {
        self.tree_ref.insert(payload)
    }
}

/// An iterator over the payloads of a [`RbTree`] in key order.
pub struct Iter<'a, T, P, C, Ix> {
    /// Reference to the tree
    tree_ref: &'a RbTree<T, P, C, Ix>,
    /// Next node from the front
    front: NodeIndex<Ix>,
    /// Next node from the back
    back: NodeIndex<Ix>,
    /// Number of payloads not yet yielded
    remaining: usize,
}

impl<T, P, C, Ix: Copy> Clone for Iter<'_, T, P, C, Ix> {
    fn clone(&self) -> Self {
        Iter { ..*self }
    }
}

impl<T: Debug, P, C, Ix: IndexType> Debug for Iter<'_, T, P, C, Ix> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, T, P, C, Ix> Iter<'a, T, P, C, Ix>
where
    Ix: IndexType,
{
    pub fn new(tree_ref: &'a RbTree<T, P, C, Ix>) -> Self {
        Iter {
            tree_ref,
            front: tree_ref.first(),
            back: tree_ref.last(),
            remaining: tree_ref.len(),
        }
    }
}

impl<'a, T, P, C, Ix> Iterator for Iter<'a, T, P, C, Ix>
where
    Ix: IndexType,
{
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let x = self.front;
        self.front = self.tree_ref.increment(x);
        self.remaining -= 1;
        self.tree_ref.get(x)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T, P, C, Ix> DoubleEndedIterator for Iter<'_, T, P, C, Ix>
where
    Ix: IndexType,
{
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let x = self.back;
        self.back = self.tree_ref.decrement(x);
        self.remaining -= 1;
        self.tree_ref.get(x)
    }
}

impl<T, P, C, Ix: IndexType> ExactSizeIterator for Iter<'_, T, P, C, Ix> {}

impl<T, P, C, Ix: IndexType> FusedIterator for Iter<'_, T, P, C, Ix> {}

/// An owning iterator over the payloads of a [`RbTree`] in key order.
#[derive(Debug)]
pub struct IntoIter<T, P, C, Ix> {
    tree: RbTree<T, P, C, Ix>,
    front: NodeIndex<Ix>,
    back: NodeIndex<Ix>,
    remaining: usize,
}

impl<T, P, C, Ix> IntoIter<T, P, C, Ix>
where
    Ix: IndexType,
{
    pub fn new(tree: RbTree<T, P, C, Ix>) -> Self {
        IntoIter {
            front: tree.first(),
            back: tree.last(),
            remaining: tree.len(),
            tree,
        }
    }

    /// Move the payload out of `x`. Links are left intact for traversal.
    fn take(&mut self, x: NodeIndex<Ix>) -> Option<T> {
        self.tree
            .nodes
            .get_mut(x.index())
            .and_then(|node| node.payload.take())
    }
}

impl<T, P, C, Ix> Iterator for IntoIter<T, P, C, Ix>
where
    Ix: IndexType,
{
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let x = self.front;
        self.front = self.tree.increment(x);
        self.remaining -= 1;
        self.take(x)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T, P, C, Ix> DoubleEndedIterator for IntoIter<T, P, C, Ix>
where
    Ix: IndexType,
{
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let x = self.back;
        self.back = self.tree.decrement(x);
        self.remaining -= 1;
        self.take(x)
    }
}

impl<T, P, C, Ix: IndexType> ExactSizeIterator for IntoIter<T, P, C, Ix> {}

impl<T, P, C, Ix: IndexType> FusedIterator for IntoIter<T, P, C, Ix> {}

impl<T, P, C, Ix> RbTree<T, P, C, Ix>
where
    Ix: IndexType,
{
    /// Get an iterator over the payloads, sorted by key.
    #[inline]
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T, P, C, Ix> {
        Iter::new(self)
    }

    /// A cursor resting on `node`.
    #[inline]
    pub fn cursor(&self, node: NodeIndex<Ix>) -> Cursor<'_, T, P, C, Ix> {
        Cursor::new(self, node)
    }

    /// A cursor on the smallest key, or the end position when empty.
    #[inline]
    pub fn cursor_front(&self) -> Cursor<'_, T, P, C, Ix> {
        Cursor::new(self, self.first())
    }

    /// A cursor on the largest key, or the end position when empty.
    #[inline]
    pub fn cursor_back(&self) -> Cursor<'_, T, P, C, Ix> {
        Cursor::new(self, self.last())
    }

    /// A cursor at the end position.
    #[inline]
    pub fn end(&self) -> Cursor<'_, T, P, C, Ix> {
        Cursor::new(self, NodeIndex::sentinel())
    }

    /// A mutable cursor resting on `node`.
    #[inline]
    pub fn cursor_mut(&mut self, node: NodeIndex<Ix>) -> CursorMut<'_, T, P, C, Ix> {
        CursorMut::new(self, node)
    }

    /// A mutable cursor on the smallest key.
    #[inline]
    pub fn cursor_front_mut(&mut self) -> CursorMut<'_, T, P, C, Ix> {
        let first = self.first();
        CursorMut::new(self, first)
    }
}

impl<T, P, C, Ix: IndexType> IntoIterator for RbTree<T, P, C, Ix> {
    type Item = T;
    type IntoIter = IntoIter<T, P, C, Ix>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

impl<'a, T, P, C, Ix: IndexType> IntoIterator for &'a RbTree<T, P, C, Ix> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T, P, C, Ix>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
