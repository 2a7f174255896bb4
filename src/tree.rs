use log::{debug, trace, warn};

use crate::compare::{Compare, KeyOf};
use crate::error::{Error, Result};
use crate::index::{DefaultIx, IndexType, NodeIndex};
use crate::node::{Color, Node};

/// An arena-backed red-black tree over payloads of type `T`.
///
/// Payloads are ordered by the key that `P` projects out of them, using the
/// strict weak order `C`. Every key is unique. Slot `0` of the arena is the
/// sentinel: it stands in for every missing child and for the position one
/// past the maximum, and its parent link always points at the root.
///
/// A node keeps its slot for as long as it is stored. Removing a key frees its
/// slot for a later insertion and leaves every other [`NodeIndex`] valid.
#[derive(Debug)]
pub struct RbTree<T, P, C, Ix = DefaultIx> {
    /// Vector that stores nodes
    pub(crate) nodes: Vec<Node<T, Ix>>,
    /// Root of the tree
    pub(crate) root: NodeIndex<Ix>,
    /// Number of real nodes in the tree
    pub(crate) len: usize,
    /// Head of the freed slots, chained through `left`; the sentinel when none
    pub(crate) free: NodeIndex<Ix>,
    /// Projection from payload to key
    key_of: P,
    /// Key order
    compare: C,
}

/// Outcome of [`RbTree::insert`].
#[derive(Debug, PartialEq, Eq)]
pub enum Insertion<T, Ix = DefaultIx> {
    /// The payload was linked into the tree at this node.
    Inserted(NodeIndex<Ix>),
    /// A node with an equivalent key already exists; the rejected payload is
    /// handed back untouched.
    Occupied(NodeIndex<Ix>, T),
}

impl<T, Ix: IndexType> Insertion<T, Ix> {
    /// The node holding the key after the call.
    #[inline]
    pub fn index(&self) -> NodeIndex<Ix> {
        match self {
            Insertion::Inserted(idx) | Insertion::Occupied(idx, _) => *idx,
        }
    }

    #[inline]
    pub fn is_inserted(&self) -> bool {
        matches!(self, Insertion::Inserted(_))
    }
}

impl<T, P, C, Ix> RbTree<T, P, C, Ix>
where
    Ix: IndexType,
{
    /// Creates an empty tree ordered by `compare` over the keys `key_of` projects.
    #[inline]
    #[must_use]
    pub fn new(key_of: P, compare: C) -> Self {
        Self::with_capacity(key_of, compare, 0)
    }

    /// Creates an empty tree with room for `capacity` nodes.
    #[inline]
    #[must_use]
    pub fn with_capacity(key_of: P, compare: C, capacity: usize) -> Self {
        let mut nodes = Vec::with_capacity(capacity.saturating_add(1));
        nodes.push(Node::new_sentinel());
        RbTree {
            nodes,
            root: NodeIndex::sentinel(),
            len: 0,
            free: NodeIndex::sentinel(),
            key_of,
            compare,
        }
    }

    /// Return the number of keys in the tree.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Return `true` if the tree holds no keys.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The sentinel, which also serves as the end position.
    #[inline]
    pub fn sentinel(&self) -> NodeIndex<Ix> {
        NodeIndex::sentinel()
    }

    /// The root node, or the sentinel when empty.
    #[inline]
    pub fn root(&self) -> NodeIndex<Ix> {
        self.root
    }

    /// The payload stored at `node`, `None` for the sentinel.
    #[inline]
    pub fn get(&self, node: NodeIndex<Ix>) -> Option<&T> {
        self.nodes.get(node.index()).and_then(Node::payload)
    }

    /// Mutable access to the payload stored at `node`.
    ///
    /// Changing the ordering key through this reference breaks the tree's
    /// ordering; only non-key parts of the payload may be modified.
    #[inline]
    pub fn get_mut(&mut self, node: NodeIndex<Ix>) -> Option<&mut T> {
        self.nodes.get_mut(node.index()).and_then(Node::payload_mut)
    }

    /// The key order of this tree.
    #[inline]
    pub fn comparator(&self) -> &C {
        &self.compare
    }

    /// The key projection of this tree.
    #[inline]
    pub fn projection(&self) -> &P {
        &self.key_of
    }

    /// Remove every node. The sentinel is kept.
    #[inline]
    pub fn clear(&mut self) {
        debug!("clearing tree of {} nodes", self.len);
        self.nodes.clear();
        self.nodes.push(Node::new_sentinel());
        self.root = NodeIndex::sentinel();
        self.len = 0;
        self.free = NodeIndex::sentinel();
    }

    /// Exchange the contents of two trees, comparators included.
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(self, other);
    }

    /// Every payload, mutably, in key order.
    ///
    /// Walks the whole tree and allocates two buffers of `O(n)` up front,
    /// whatever part of the result the caller ends up using.
    pub(crate) fn payloads_in_order_mut(&mut self) -> Vec<&mut T> {
        let mut order = Vec::with_capacity(self.len);
        let mut x = self.first();
        while !x.is_sentinel() {
            order.push(x.index());
            x = self.increment(x);
        }
        let mut slots: Vec<Option<&mut T>> =
            self.nodes.iter_mut().map(Node::payload_mut).collect();
        order
            .into_iter()
            .filter_map(|i| slots.get_mut(i).and_then(Option::take))
            .collect()
    }

    /// Point the sentinel's parent link back at the root.
    fn sync_sentinel(&mut self) {
        let root = self.root;
        self.node_mut(NodeIndex::sentinel(), Node::set_parent(root));
    }
}

impl<T, P, C, Ix> RbTree<T, P, C, Ix>
where
    P: KeyOf<T>,
    C: Compare<P::Key>,
    Ix: IndexType,
{
    /// Key of the payload stored at `node`, `None` for the sentinel.
    #[inline]
    pub fn key(&self, node: NodeIndex<Ix>) -> Option<&P::Key> {
        self.get(node).map(|payload| self.key_of.key_of(payload))
    }

    /// Find the node whose key is equivalent to `key`, or the sentinel.
    pub fn search(&self, key: &P::Key) -> NodeIndex<Ix> {
        let mut x = self.root;
        while let Some(xk) = self.key(x) {
            if self.compare.less(key, xk) {
                x = self.node_ref(x, Node::left);
            } else if self.compare.less(xk, key) {
                x = self.node_ref(x, Node::right);
            } else {
                return x;
            }
        }
        x
    }

    /// Returns `true` if a key equivalent to `key` is stored.
    #[inline]
    pub fn contains(&self, key: &P::Key) -> bool {
        !self.search(key).is_sentinel()
    }

    /// First node whose key is not less than `key`, or the sentinel.
    pub fn lower_bound(&self, key: &P::Key) -> NodeIndex<Ix> {
        let mut x = self.root;
        let mut y = NodeIndex::sentinel();
        while let Some(xk) = self.key(x) {
            if self.compare.less(xk, key) {
                x = self.node_ref(x, Node::right);
            } else {
                y = x;
                x = self.node_ref(x, Node::left);
            }
        }
        y
    }

    /// First node whose key is greater than `key`, or the sentinel.
    pub fn upper_bound(&self, key: &P::Key) -> NodeIndex<Ix> {
        let mut x = self.root;
        let mut y = NodeIndex::sentinel();
        while let Some(xk) = self.key(x) {
            if self.compare.less(key, xk) {
                y = x;
                x = self.node_ref(x, Node::left);
            } else {
                x = self.node_ref(x, Node::right);
            }
        }
        y
    }

    /// Insert a payload into the tree.
    ///
    /// If a node with an equivalent key exists, nothing is allocated and the
    /// payload is returned in [`Insertion::Occupied`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::AllocationFailed`] if the arena cannot grow and
    /// [`Error::CapacityExceeded`] if the index type is exhausted. The tree is
    /// unchanged in both cases.
    ///
    /// # Example
    /// ```rust
    /// use rb_ordered_map::{Identity, Insertion, Natural, RbTree};
    ///
    /// let mut tree: RbTree<i32, _, _> = RbTree::new(Identity, Natural);
    /// assert!(tree.insert(3).unwrap().is_inserted());
    /// assert!(matches!(tree.insert(3).unwrap(), Insertion::Occupied(_, 3)));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, payload: T) -> Result<Insertion<T, Ix>> {
        let mut y = NodeIndex::sentinel();
        let mut x = self.root;
        let mut go_left = false;
        let key = self.key_of.key_of(&payload);
        while let Some(xk) = self.key(x) {
            y = x;
            if self.compare.less(key, xk) {
                go_left = true;
                x = self.node_ref(x, Node::left);
            } else if self.compare.less(xk, key) {
                go_left = false;
                x = self.node_ref(x, Node::right);
            } else {
                return Ok(Insertion::Occupied(x, payload));
            }
        }

        let mut node = Node::new_leaf(payload);
        node.parent = y;
        let z = if self.free.is_sentinel() {
            let z = NodeIndex::new(self.nodes.len());
            // check for max capacity, except if we use usize
            if <Ix as IndexType>::max().index() != !0 && NodeIndex::end() == z {
                warn!("tree reached the maximum of {} nodes", z.index());
                return Err(Error::CapacityExceeded);
            }
            if let Err(err) = self.nodes.try_reserve(1) {
                warn!("failed to reserve a tree node: {err}");
                return Err(err.into());
            }
            self.nodes.push(node);
            z
        } else {
            let z = self.free;
            self.free = self.node_ref(z, Node::left);
            self.nodes[z.index()] = node;
            z
        };

        if y.is_sentinel() {
            self.root = z;
        } else if go_left {
            self.node_mut(y, Node::set_left(z));
        } else {
            self.node_mut(y, Node::set_right(z));
        }
        self.insert_fixup(z);

        self.len = self.len.wrapping_add(1);
        self.sync_sentinel();
        Ok(Insertion::Inserted(z))
    }

    /// Remove the node whose key is equivalent to `key`, returning its payload.
    ///
    /// Removing an absent key leaves the tree untouched.
    ///
    /// # Example
    /// ```rust
    /// use rb_ordered_map::{Identity, Natural, RbTree};
    ///
    /// let mut tree: RbTree<i32, _, _> = RbTree::new(Identity, Natural);
    /// tree.insert(1).unwrap();
    /// tree.insert(2).unwrap();
    /// assert_eq!(tree.remove(&5), None);
    /// assert_eq!(tree.remove(&2), Some(2));
    /// assert_eq!(tree.len(), 1);
    /// ```
    #[inline]
    pub fn remove(&mut self, key: &P::Key) -> Option<T> {
        let node_idx = self.search(key);
        self.remove_at(node_idx)
    }

    /// Remove every node with a key in `[low, high)`, returning how many were removed.
    pub fn remove_range(&mut self, low: &P::Key, high: &P::Key) -> usize {
        let start = self.lower_bound(low);
        let mut cursor = self.cursor_mut(start);
        let mut removed = 0;
        while let Some(key) = cursor.key() {
            if !cursor.tree_ref.compare.less(key, high) {
                break;
            }
            let _ignore = cursor.remove_current();
            removed += 1;
        }
        removed
    }
}

impl<T, P, C, Ix> RbTree<T, P, C, Ix>
where
    Ix: IndexType,
{
    /// Remove the node at `node`, returning its payload.
    ///
    /// The slot is freed for a later insertion; every other node keeps its
    /// index. Returns `None` for the sentinel, a freed slot or an index
    /// outside the arena.
    pub fn remove_at(&mut self, node_idx: NodeIndex<Ix>) -> Option<T> {
        if node_idx.is_sentinel() || self.get(node_idx).is_none() {
            return None;
        }
        self.remove_inner(node_idx);
        self.sync_sentinel();
        let next_free = self.free;
        self.free = node_idx;
        self.nodes[node_idx.index()].vacate(next_free)
    }

    /// Unlink a node from the tree.
    fn remove_inner(&mut self, z: NodeIndex<Ix>) {
        let mut y_orig_color = self.node_ref(z, Node::color);
        let x;
        if self.node_ref(z, Node::left).is_sentinel() {
            x = self.node_ref(z, Node::right);
            self.transplant(z, x);
        } else if self.node_ref(z, Node::right).is_sentinel() {
            x = self.node_ref(z, Node::left);
            self.transplant(z, x);
        } else {
            let y = self.minimum(self.node_ref(z, Node::right));
            y_orig_color = self.node_ref(y, Node::color);
            x = self.node_ref(y, Node::right);
            if self.node_ref(y, Node::parent) == z {
                self.node_mut(x, Node::set_parent(y));
            } else {
                self.transplant(y, x);
                self.node_mut(y, Node::set_right(self.node_ref(z, Node::right)));
                self.right_mut(y, Node::set_parent(y));
            }
            self.transplant(z, y);
            self.node_mut(y, Node::set_left(self.node_ref(z, Node::left)));
            self.left_mut(y, Node::set_parent(y));
            self.node_mut(y, Node::set_color(self.node_ref(z, Node::color)));
        }

        if matches!(y_orig_color, Color::Black) {
            self.remove_fixup(x);
        }
        self.node_mut(self.root, Node::set_color(Color::Black));

        self.len = self.len.wrapping_sub(1);
    }

    /// Restore red-black tree properties after an insert.
    fn insert_fixup(&mut self, mut z: NodeIndex<Ix>) {
        while self.parent_ref(z, Node::is_red) {
            if self.is_left_child(self.node_ref(z, Node::parent)) {
                let y = self.grand_parent_ref(z, Node::right);
                if self.node_ref(y, Node::is_red) {
                    trace!("insert fixup: red uncle at {y:?}");
                    self.parent_mut(z, Node::set_color(Color::Black));
                    self.node_mut(y, Node::set_color(Color::Black));
                    self.grand_parent_mut(z, Node::set_color(Color::Red));
                    z = self.parent_ref(z, Node::parent);
                } else {
                    if self.is_right_child(z) {
                        z = self.node_ref(z, Node::parent);
                        self.left_rotate(z);
                    }
                    self.parent_mut(z, Node::set_color(Color::Black));
                    self.grand_parent_mut(z, Node::set_color(Color::Red));
                    self.right_rotate(self.parent_ref(z, Node::parent));
                }
            } else {
                let y = self.grand_parent_ref(z, Node::left);
                if self.node_ref(y, Node::is_red) {
                    trace!("insert fixup: red uncle at {y:?}");
                    self.parent_mut(z, Node::set_color(Color::Black));
                    self.node_mut(y, Node::set_color(Color::Black));
                    self.grand_parent_mut(z, Node::set_color(Color::Red));
                    z = self.parent_ref(z, Node::parent);
                } else {
                    if self.is_left_child(z) {
                        z = self.node_ref(z, Node::parent);
                        self.right_rotate(z);
                    }
                    self.parent_mut(z, Node::set_color(Color::Black));
                    self.grand_parent_mut(z, Node::set_color(Color::Red));
                    self.left_rotate(self.parent_ref(z, Node::parent));
                }
            }
        }
        self.node_mut(self.root, Node::set_color(Color::Black));
    }

    /// Restore red-black tree properties after a remove.
    ///
    /// `x` may be the sentinel, in which case its parent link was set by the
    /// preceding transplant.
    fn remove_fixup(&mut self, mut x: NodeIndex<Ix>) {
        while x != self.root && self.node_ref(x, Node::is_black) {
            let mut w;
            if self.is_left_child(x) {
                w = self.parent_ref(x, Node::right);
                if self.node_ref(w, Node::is_red) {
                    trace!("remove fixup: red sibling at {w:?}");
                    self.node_mut(w, Node::set_color(Color::Black));
                    self.parent_mut(x, Node::set_color(Color::Red));
                    self.left_rotate(self.node_ref(x, Node::parent));
                    w = self.parent_ref(x, Node::right);
                }
                if self.left_ref(w, Node::is_black) && self.right_ref(w, Node::is_black) {
                    self.node_mut(w, Node::set_color(Color::Red));
                    x = self.node_ref(x, Node::parent);
                } else {
                    if self.right_ref(w, Node::is_black) {
                        self.left_mut(w, Node::set_color(Color::Black));
                        self.node_mut(w, Node::set_color(Color::Red));
                        self.right_rotate(w);
                        w = self.parent_ref(x, Node::right);
                    }
                    self.node_mut(w, Node::set_color(self.parent_ref(x, Node::color)));
                    self.parent_mut(x, Node::set_color(Color::Black));
                    self.right_mut(w, Node::set_color(Color::Black));
                    self.left_rotate(self.node_ref(x, Node::parent));
                    x = self.root;
                }
            } else {
                w = self.parent_ref(x, Node::left);
                if self.node_ref(w, Node::is_red) {
                    trace!("remove fixup: red sibling at {w:?}");
                    self.node_mut(w, Node::set_color(Color::Black));
                    self.parent_mut(x, Node::set_color(Color::Red));
                    self.right_rotate(self.node_ref(x, Node::parent));
                    w = self.parent_ref(x, Node::left);
                }
                if self.right_ref(w, Node::is_black) && self.left_ref(w, Node::is_black) {
                    self.node_mut(w, Node::set_color(Color::Red));
                    x = self.node_ref(x, Node::parent);
                } else {
                    if self.left_ref(w, Node::is_black) {
                        self.right_mut(w, Node::set_color(Color::Black));
                        self.node_mut(w, Node::set_color(Color::Red));
                        self.left_rotate(w);
                        w = self.parent_ref(x, Node::left);
                    }
                    self.node_mut(w, Node::set_color(self.parent_ref(x, Node::color)));
                    self.parent_mut(x, Node::set_color(Color::Black));
                    self.left_mut(w, Node::set_color(Color::Black));
                    self.right_rotate(self.node_ref(x, Node::parent));
                    x = self.root;
                }
            }
        }
        self.node_mut(x, Node::set_color(Color::Black));
    }

    /// Binary tree left rotate.
    fn left_rotate(&mut self, x: NodeIndex<Ix>) {
        if self.node_ref(x, Node::right).is_sentinel() {
            return;
        }
        trace!("rotate left at {x:?}");
        let y = self.node_ref(x, Node::right);
        self.node_mut(x, Node::set_right(self.node_ref(y, Node::left)));
        if !self.node_ref(y, Node::left).is_sentinel() {
            self.left_mut(y, Node::set_parent(x));
        }

        self.replace_parent(x, y);
        self.node_mut(y, Node::set_left(x));
    }

    /// Binary tree right rotate.
    fn right_rotate(&mut self, x: NodeIndex<Ix>) {
        if self.node_ref(x, Node::left).is_sentinel() {
            return;
        }
        trace!("rotate right at {x:?}");
        let y = self.node_ref(x, Node::left);
        self.node_mut(x, Node::set_left(self.node_ref(y, Node::right)));
        if !self.node_ref(y, Node::right).is_sentinel() {
            self.right_mut(y, Node::set_parent(x));
        }

        self.replace_parent(x, y);
        self.node_mut(y, Node::set_right(x));
    }

    /// Replace parent during a rotation.
    fn replace_parent(&mut self, x: NodeIndex<Ix>, y: NodeIndex<Ix>) {
        self.node_mut(y, Node::set_parent(self.node_ref(x, Node::parent)));
        if self.node_ref(x, Node::parent).is_sentinel() {
            self.root = y;
        } else if self.is_left_child(x) {
            self.parent_mut(x, Node::set_left(y));
        } else {
            self.parent_mut(x, Node::set_right(y));
        }
        self.node_mut(x, Node::set_parent(y));
    }

    /// Replace one subtree as a child of its parent with another subtree.
    fn transplant(&mut self, u: NodeIndex<Ix>, v: NodeIndex<Ix>) {
        if self.node_ref(u, Node::parent).is_sentinel() {
            self.root = v;
        } else if self.is_left_child(u) {
            self.parent_mut(u, Node::set_left(v));
        } else {
            self.parent_mut(u, Node::set_right(v));
        }
        self.node_mut(v, Node::set_parent(self.node_ref(u, Node::parent)));
    }

    /// Check if a node is a left child of its parent.
    fn is_left_child(&self, node: NodeIndex<Ix>) -> bool {
        self.parent_ref(node, Node::left) == node
    }

    /// Check if a node is a right child of its parent.
    fn is_right_child(&self, node: NodeIndex<Ix>) -> bool {
        self.parent_ref(node, Node::right) == node
    }
}

impl<T, P, C, Ix> RbTree<T, P, C, Ix>
where
    T: Clone,
    P: KeyOf<T> + Clone,
    C: Compare<P::Key> + Clone,
    Ix: IndexType,
{
    /// Build a copy of the tree by re-inserting every payload in key order.
    ///
    /// # Errors
    ///
    /// Fails like [`RbTree::insert`]; the partially built copy is dropped.
    pub fn try_clone(&self) -> Result<Self> {
        debug!("cloning tree of {} nodes", self.len);
        let mut tree = Self::new(self.key_of.clone(), self.compare.clone());
        tree.nodes.try_reserve(self.len)?;
        for payload in self.iter() {
            let _ignore = tree.insert(payload.clone())?;
        }
        Ok(tree)
    }
}

impl<T, P, C, Ix> Clone for RbTree<T, P, C, Ix>
where
    T: Clone,
    P: KeyOf<T> + Clone,
    C: Compare<P::Key> + Clone,
    Ix: IndexType,
{
    /// # Panics
    ///
    /// Panics if a node cannot be allocated, like the std collections.
    fn clone(&self) -> Self {
        match self.try_clone() {
            Ok(tree) => tree,
            Err(err) => panic!("{err}"),
        }
    }

    /// Builds the copy first, so `self` is untouched if cloning panics.
    fn clone_from(&mut self, source: &Self) {
        match source.try_clone() {
            Ok(tree) => *self = tree,
            Err(err) => panic!("{err}"),
        }
    }
}

// Convenient methods for reference or mutate current/parent/left/right node
impl<'a, T, P, C, Ix> RbTree<T, P, C, Ix>
where
    Ix: IndexType,
{
    pub(crate) fn node_ref<F, R>(&'a self, node: NodeIndex<Ix>, op: F) -> R
    where
        R: 'a,
        F: FnOnce(&'a Node<T, Ix>) -> R,
    {
        op(&self.nodes[node.index()])
    }

    pub(crate) fn node_mut<F, R>(&'a mut self, node: NodeIndex<Ix>, op: F) -> R
    where
        R: 'a,
        F: FnOnce(&'a mut Node<T, Ix>) -> R,
    {
        op(&mut self.nodes[node.index()])
    }

    pub(crate) fn left_ref<F, R>(&'a self, node: NodeIndex<Ix>, op: F) -> R
    where
        R: 'a,
        F: FnOnce(&'a Node<T, Ix>) -> R,
    {
        let idx = self.nodes[node.index()].left().index();
        op(&self.nodes[idx])
    }

    pub(crate) fn right_ref<F, R>(&'a self, node: NodeIndex<Ix>, op: F) -> R
    where
        R: 'a,
        F: FnOnce(&'a Node<T, Ix>) -> R,
    {
        let idx = self.nodes[node.index()].right().index();
        op(&self.nodes[idx])
    }

    fn parent_ref<F, R>(&'a self, node: NodeIndex<Ix>, op: F) -> R
    where
        R: 'a,
        F: FnOnce(&'a Node<T, Ix>) -> R,
    {
        let idx = self.nodes[node.index()].parent().index();
        op(&self.nodes[idx])
    }

    fn grand_parent_ref<F, R>(&'a self, node: NodeIndex<Ix>, op: F) -> R
    where
        R: 'a,
        F: FnOnce(&'a Node<T, Ix>) -> R,
    {
        let parent_idx = self.nodes[node.index()].parent().index();
        let grand_parent_idx = self.nodes[parent_idx].parent().index();
        op(&self.nodes[grand_parent_idx])
    }

    fn left_mut<F, R>(&'a mut self, node: NodeIndex<Ix>, op: F) -> R
    where
        R: 'a,
        F: FnOnce(&'a mut Node<T, Ix>) -> R,
    {
        let idx = self.nodes[node.index()].left().index();
        op(&mut self.nodes[idx])
    }

    fn right_mut<F, R>(&'a mut self, node: NodeIndex<Ix>, op: F) -> R
    where
        R: 'a,
        F: FnOnce(&'a mut Node<T, Ix>) -> R,
    {
        let idx = self.nodes[node.index()].right().index();
        op(&mut self.nodes[idx])
    }

    fn parent_mut<F, R>(&'a mut self, node: NodeIndex<Ix>, op: F) -> R
    where
        R: 'a,
        F: FnOnce(&'a mut Node<T, Ix>) -> R,
    {
        let idx = self.nodes[node.index()].parent().index();
        op(&mut self.nodes[idx])
    }

    fn grand_parent_mut<F, R>(&'a mut self, node: NodeIndex<Ix>, op: F) -> R
    where
        R: 'a,
        F: FnOnce(&'a mut Node<T, Ix>) -> R,
    {
        let parent_idx = self.nodes[node.index()].parent().index();
        let grand_parent_idx = self.nodes[parent_idx].parent().index();
        op(&mut self.nodes[grand_parent_idx])
    }
}
