//! Successor and predecessor computation over the node arena.
//!
//! These helpers only read links. Descents test for the sentinel by index
//! rather than by payload, so they keep working on a tree whose payloads are
//! being moved out (see `IntoIter`); only the starting node of `increment` and
//! `decrement` must still hold its payload.

use crate::index::{IndexType, NodeIndex};
use crate::node::Node;
use crate::tree::RbTree;

impl<T, P, C, Ix> RbTree<T, P, C, Ix>
where
    Ix: IndexType,
{
    /// Leftmost node of the subtree rooted at `x`.
    ///
    /// The sentinel or an index outside the arena give the sentinel.
    pub fn minimum(&self, mut x: NodeIndex<Ix>) -> NodeIndex<Ix> {
        if x.is_sentinel() || !self.in_arena(x) {
            return NodeIndex::sentinel();
        }
        while !self.node_ref(x, Node::left).is_sentinel() {
            x = self.node_ref(x, Node::left);
        }
        x
    }

    /// Rightmost node of the subtree rooted at `x`.
    pub fn maximum(&self, mut x: NodeIndex<Ix>) -> NodeIndex<Ix> {
        if x.is_sentinel() || !self.in_arena(x) {
            return NodeIndex::sentinel();
        }
        while !self.node_ref(x, Node::right).is_sentinel() {
            x = self.node_ref(x, Node::right);
        }
        x
    }

    /// The node with the smallest key, or the sentinel when empty.
    #[inline]
    pub fn first(&self) -> NodeIndex<Ix> {
        self.minimum(self.root)
    }

    /// The node with the largest key, or the sentinel when empty.
    #[inline]
    pub fn last(&self) -> NodeIndex<Ix> {
        self.maximum(self.root)
    }

    /// The in-order successor of `n`.
    ///
    /// The successor of the maximum is the sentinel. Starting from the sentinel
    /// restarts at the minimum, found through the sentinel's parent link. A
    /// freed slot or an index outside the arena gives the sentinel.
    pub fn increment(&self, n: NodeIndex<Ix>) -> NodeIndex<Ix> {
        if n.is_sentinel() {
            return self.minimum(self.node_ref(n, Node::parent));
        }
        if self.get(n).is_none() {
            return NodeIndex::sentinel();
        }
        let right = self.node_ref(n, Node::right);
        if !right.is_sentinel() {
            return self.minimum(right);
        }
        let mut x = n;
        let mut y = self.node_ref(x, Node::parent);
        while !y.is_sentinel() && x == self.node_ref(y, Node::right) {
            x = y;
            y = self.node_ref(y, Node::parent);
        }
        y
    }

    /// The in-order predecessor of `n`.
    ///
    /// The predecessor of the minimum is the sentinel. Starting from the
    /// sentinel restarts at the maximum. A freed slot or an index outside the
    /// arena gives the sentinel.
    pub fn decrement(&self, n: NodeIndex<Ix>) -> NodeIndex<Ix> {
        if n.is_sentinel() {
            return self.maximum(self.node_ref(n, Node::parent));
        }
        if self.get(n).is_none() {
            return NodeIndex::sentinel();
        }
        let left = self.node_ref(n, Node::left);
        if !left.is_sentinel() {
            return self.maximum(left);
        }
        let mut x = n;
        let mut y = self.node_ref(x, Node::parent);
        while !y.is_sentinel() && x == self.node_ref(y, Node::left) {
            x = y;
            y = self.node_ref(y, Node::parent);
        }
        y
    }

    /// Returns `true` if `x` addresses a slot of this tree's arena.
    #[inline]
    fn in_arena(&self, x: NodeIndex<Ix>) -> bool {
        x.index() < self.nodes.len()
    }
}
