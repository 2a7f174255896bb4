use std::cmp::Ordering;
use std::fmt::{self, Debug};

use crate::compare::{Compare, Identity, Natural};
use crate::cursor::{self, Cursor};
use crate::error::Result;
use crate::index::{DefaultIx, IndexType};
use crate::tree::RbTree;

/// A cursor over the keys of an [`OrderedSet`].
pub type SetCursor<'a, T, C = Natural, Ix = DefaultIx> = Cursor<'a, T, Identity, C, Ix>;

/// An iterator over the keys of an [`OrderedSet`] in ascending order.
pub type Iter<'a, T, C = Natural, Ix = DefaultIx> = cursor::Iter<'a, T, Identity, C, Ix>;

/// An owning iterator over the keys of an [`OrderedSet`] in ascending order.
pub type IntoIter<T, C = Natural, Ix = DefaultIx> = cursor::IntoIter<T, Identity, C, Ix>;

/// An ordered set of unique keys backed by a red-black tree.
pub struct OrderedSet<T, C = Natural, Ix = DefaultIx> {
    tree: RbTree<T, Identity, C, Ix>,
}

impl<T> OrderedSet<T>
where
    T: Ord,
{
    /// Create an empty `OrderedSet` ordered by `T: Ord`.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_comparator(Natural)
    }

    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_comparator(capacity, Natural)
    }
}

impl<T, C, Ix> OrderedSet<T, C, Ix>
where
    Ix: IndexType,
{
    /// Create an empty `OrderedSet` ordered by `compare`.
    #[inline]
    #[must_use]
    pub fn with_comparator(compare: C) -> Self {
        Self::with_capacity_and_comparator(0, compare)
    }

    #[inline]
    #[must_use]
    pub fn with_capacity_and_comparator(capacity: usize, compare: C) -> Self {
        OrderedSet {
            tree: RbTree::with_capacity(Identity, compare, capacity),
        }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    #[inline]
    pub fn clear(&mut self) {
        self.tree.clear();
    }

    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        self.tree.swap(&mut other.tree);
    }

    #[inline]
    pub fn key_comp(&self) -> &C {
        self.tree.comparator()
    }

    /// Keys in ascending order.
    #[inline]
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T, C, Ix> {
        self.tree.iter()
    }

    #[inline]
    pub fn cursor_front(&self) -> SetCursor<'_, T, C, Ix> {
        self.tree.cursor_front()
    }

    #[inline]
    pub fn cursor_back(&self) -> SetCursor<'_, T, C, Ix> {
        self.tree.cursor_back()
    }

    #[inline]
    pub fn end(&self) -> SetCursor<'_, T, C, Ix> {
        self.tree.end()
    }

    /// The smallest key.
    #[inline]
    pub fn first(&self) -> Option<&T> {
        self.tree.get(self.tree.first())
    }

    /// The largest key.
    #[inline]
    pub fn last(&self) -> Option<&T> {
        self.tree.get(self.tree.last())
    }

    #[inline]
    pub fn pop_first(&mut self) -> Option<T> {
        let first = self.tree.first();
        self.tree.remove_at(first)
    }

    #[inline]
    pub fn pop_last(&mut self) -> Option<T> {
        let last = self.tree.last();
        self.tree.remove_at(last)
    }
}

impl<T, C, Ix> OrderedSet<T, C, Ix>
where
    C: Compare<T>,
    Ix: IndexType,
{
    /// Add a key, returning `false` if an equivalent key was already present.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AllocationFailed`](crate::Error::AllocationFailed) or
    /// [`Error::CapacityExceeded`](crate::Error::CapacityExceeded) when no node
    /// can be created; the set is unchanged.
    ///
    /// # Example
    /// ```rust
    /// use rb_ordered_map::OrderedSet;
    ///
    /// let mut set = OrderedSet::new();
    /// assert_eq!(set.insert(10), Ok(true));
    /// assert_eq!(set.insert(10), Ok(false));
    /// assert_eq!(set.len(), 1);
    /// ```
    #[inline]
    pub fn insert(&mut self, value: T) -> Result<bool> {
        Ok(self.tree.insert(value)?.is_inserted())
    }

    #[inline]
    pub fn contains(&self, value: &T) -> bool {
        self.tree.contains(value)
    }

    /// Number of keys equivalent to `value`: `0` or `1`.
    #[inline]
    pub fn count(&self, value: &T) -> usize {
        usize::from(self.contains(value))
    }

    /// The stored key equivalent to `value`.
    #[inline]
    pub fn get(&self, value: &T) -> Option<&T> {
        self.tree.get(self.tree.search(value))
    }

    /// Remove `value`, returning whether it was present.
    #[inline]
    pub fn remove(&mut self, value: &T) -> bool {
        self.tree.remove(value).is_some()
    }

    /// Remove and return the stored key equivalent to `value`.
    #[inline]
    pub fn take(&mut self, value: &T) -> Option<T> {
        self.tree.remove(value)
    }

    /// Remove every key in `[low, high)`, returning how many were removed.
    #[inline]
    pub fn remove_range(&mut self, low: &T, high: &T) -> usize {
        self.tree.remove_range(low, high)
    }

    #[inline]
    pub fn find(&self, value: &T) -> SetCursor<'_, T, C, Ix> {
        self.tree.cursor(self.tree.search(value))
    }

    /// A cursor on the first key not less than `value`.
    ///
    /// # Example
    /// ```rust
    /// use rb_ordered_map::OrderedSet;
    ///
    /// let set: OrderedSet<i32> = [10, 20, 5, 15, 3].into_iter().collect();
    /// assert_eq!(set.lower_bound(&12).get(), Some(&15));
    /// assert_eq!(set.upper_bound(&10).get(), Some(&15));
    /// ```
    #[inline]
    pub fn lower_bound(&self, value: &T) -> SetCursor<'_, T, C, Ix> {
        self.tree.cursor(self.tree.lower_bound(value))
    }

    /// A cursor on the first key greater than `value`.
    #[inline]
    pub fn upper_bound(&self, value: &T) -> SetCursor<'_, T, C, Ix> {
        self.tree.cursor(self.tree.upper_bound(value))
    }

    #[inline]
    pub fn equal_range(&self, value: &T) -> (SetCursor<'_, T, C, Ix>, SetCursor<'_, T, C, Ix>) {
        (self.lower_bound(value), self.upper_bound(value))
    }

    /// Draw the tree shape to a Graphviz dot file.
    ///
    /// # Errors
    ///
    /// Returns the I/O error from creating or writing the file.
    #[cfg(feature = "graphviz")]
    #[inline]
    pub fn draw(&self, path: impl AsRef<std::path::Path>) -> std::io::Result<()>
    where
        T: Debug,
    {
        self.tree.draw(path)
    }
}

impl<T, C, Ix> Default for OrderedSet<T, C, Ix>
where
    C: Default,
    Ix: IndexType,
{
    #[inline]
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<T, C, Ix> Clone for OrderedSet<T, C, Ix>
where
    T: Clone,
    C: Compare<T> + Clone,
    Ix: IndexType,
{
    /// # Panics
    ///
    /// Panics if a node cannot be allocated.
    fn clone(&self) -> Self {
        OrderedSet {
            tree: self.tree.clone(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.tree.clone_from(&source.tree);
    }
}

impl<T: Debug, C, Ix: IndexType> Debug for OrderedSet<T, C, Ix> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T: PartialEq, C, Ix: IndexType> PartialEq for OrderedSet<T, C, Ix> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq, C, Ix: IndexType> Eq for OrderedSet<T, C, Ix> {}

impl<T: PartialOrd, C, Ix: IndexType> PartialOrd for OrderedSet<T, C, Ix> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<T: Ord, C, Ix: IndexType> Ord for OrderedSet<T, C, Ix> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<T, C, Ix> Extend<T> for OrderedSet<T, C, Ix>
where
    C: Compare<T>,
    Ix: IndexType,
{
    /// # Panics
    ///
    /// Panics if a node cannot be allocated.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            if let Err(err) = self.insert(value) {
                panic!("{err}");
            }
        }
    }
}

impl<T, C, Ix> FromIterator<T> for OrderedSet<T, C, Ix>
where
    C: Compare<T> + Default,
    Ix: IndexType,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::default();
        set.extend(iter);
        set
    }
}

impl<T, C, Ix: IndexType> IntoIterator for OrderedSet<T, C, Ix> {
    type Item = T;
    type IntoIter = IntoIter<T, C, Ix>;

    fn into_iter(self) -> Self::IntoIter {
        self.tree.into_iter()
    }
}

impl<'a, T, C, Ix: IndexType> IntoIterator for &'a OrderedSet<T, C, Ix> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T, C, Ix>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
