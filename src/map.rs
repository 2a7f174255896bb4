use std::cmp::Ordering;
use std::fmt::{self, Debug};
use std::iter::FusedIterator;
use std::ops::Index;

use crate::compare::{Compare, First, Natural};
use crate::cursor::{self, Cursor};
use crate::entry::{Entry, OccupiedEntry, VacantEntry};
use crate::error::{Error, Result};
use crate::index::{DefaultIx, IndexType};
use crate::tree::{Insertion, RbTree};

/// A cursor over the `(key, value)` entries of an [`OrderedMap`].
pub type MapCursor<'a, K, V, C = Natural, Ix = DefaultIx> = Cursor<'a, (K, V), First, C, Ix>;

/// An ordered key-value map with unique keys.
///
/// Entries are kept in a red-black tree ordered by `C`; lookups, insertions
/// and removals take `O(log n)`.
pub struct OrderedMap<K, V, C = Natural, Ix = DefaultIx> {
    pub(crate) tree: RbTree<(K, V), First, C, Ix>,
}

impl<K, V> OrderedMap<K, V>
where
    K: Ord,
{
    /// Create an empty `OrderedMap` ordered by `K: Ord`.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_comparator(Natural)
    }

    /// Create an empty `OrderedMap` with room for `capacity` entries.
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_comparator(capacity, Natural)
    }
}

impl<K, V, C, Ix> OrderedMap<K, V, C, Ix>
where
    Ix: IndexType,
{
    /// Create an empty `OrderedMap` ordered by `compare`.
    ///
    /// # Example
    /// ```rust
    /// use rb_ordered_map::OrderedMap;
    ///
    /// let mut map: OrderedMap<i32, &str, _> = OrderedMap::with_comparator(|a: &i32, b: &i32| b < a);
    /// map.insert(1, "a").unwrap();
    /// map.insert(2, "b").unwrap();
    /// assert_eq!(map.keys().copied().collect::<Vec<_>>(), vec![2, 1]);
    /// ```
    #[inline]
    #[must_use]
    pub fn with_comparator(compare: C) -> Self {
        Self::with_capacity_and_comparator(0, compare)
    }

    /// Creates a new `OrderedMap` with estimated capacity.
    #[inline]
    #[must_use]
    pub fn with_capacity_and_comparator(capacity: usize, compare: C) -> Self {
        OrderedMap {
            tree: RbTree::with_capacity(First, compare, capacity),
        }
    }

    /// Return the number of elements in the map.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Return `true` if the map contains no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Remove all elements from the map
    #[inline]
    pub fn clear(&mut self) {
        self.tree.clear();
    }

    /// Exchange the contents of two maps.
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        self.tree.swap(&mut other.tree);
    }

    /// The key order of this map.
    #[inline]
    pub fn key_comp(&self) -> &C {
        self.tree.comparator()
    }

    /// Get an iterator over the entries of the map, sorted by key.
    #[inline]
    #[must_use]
    pub fn iter(&self) -> Iter<'_, K, V, C, Ix> {
        Iter {
            inner: self.tree.iter(),
        }
    }

    /// Get an iterator over the entries of the map with mutable values, sorted by key.
    ///
    /// Creating the iterator walks the whole map and allocates `O(n)` space
    /// up front, even if only a few entries are visited. Prefer
    /// [`OrderedMap::get_mut`] or a cursor for a handful of edits.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        IterMut {
            inner: self.tree.payloads_in_order_mut().into_iter(),
        }
    }

    /// Keys in ascending order.
    #[inline]
    pub fn keys(&self) -> impl DoubleEndedIterator<Item = &K> + ExactSizeIterator {
        self.iter().map(|(k, _)| k)
    }

    /// Values in ascending key order.
    #[inline]
    pub fn values(&self) -> impl DoubleEndedIterator<Item = &V> + ExactSizeIterator {
        self.iter().map(|(_, v)| v)
    }

    /// Mutable values in ascending key order.
    ///
    /// Same `O(n)` setup cost as [`OrderedMap::iter_mut`].
    #[inline]
    pub fn values_mut(&mut self) -> impl DoubleEndedIterator<Item = &mut V> + ExactSizeIterator {
        self.iter_mut().map(|(_, v)| v)
    }

    /// A cursor on the first entry, or the end position when empty.
    #[inline]
    pub fn cursor_front(&self) -> MapCursor<'_, K, V, C, Ix> {
        self.tree.cursor_front()
    }

    /// A cursor on the last entry, or the end position when empty.
    #[inline]
    pub fn cursor_back(&self) -> MapCursor<'_, K, V, C, Ix> {
        self.tree.cursor_back()
    }

    /// A cursor at the end position.
    #[inline]
    pub fn end(&self) -> MapCursor<'_, K, V, C, Ix> {
        self.tree.end()
    }

    /// The first entry.
    #[inline]
    pub fn first_key_value(&self) -> Option<(&K, &V)> {
        self.tree.get(self.tree.first()).map(|(k, v)| (k, v))
    }

    /// The last entry.
    #[inline]
    pub fn last_key_value(&self) -> Option<(&K, &V)> {
        self.tree.get(self.tree.last()).map(|(k, v)| (k, v))
    }

    /// Remove and return the first entry.
    #[inline]
    pub fn pop_first(&mut self) -> Option<(K, V)> {
        let first = self.tree.first();
        self.tree.remove_at(first)
    }

    /// Remove and return the last entry.
    #[inline]
    pub fn pop_last(&mut self) -> Option<(K, V)> {
        let last = self.tree.last();
        self.tree.remove_at(last)
    }
}

impl<K, V, C, Ix> OrderedMap<K, V, C, Ix>
where
    C: Compare<K>,
    Ix: IndexType,
{
    /// Insert a key-value pair if the key is absent.
    ///
    /// Returns `false` and leaves the stored value alone if the key exists.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AllocationFailed`] or [`Error::CapacityExceeded`] when
    /// no node can be created; the map is unchanged.
    ///
    /// # Example
    /// ```rust
    /// use rb_ordered_map::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// assert_eq!(map.insert("CPU", 10), Ok(true));
    /// assert_eq!(map.insert("CPU", 25), Ok(false));
    /// assert_eq!(map.get(&"CPU"), Some(&10));
    /// ```
    #[inline]
    pub fn insert(&mut self, key: K, value: V) -> Result<bool> {
        Ok(self.tree.insert((key, value))?.is_inserted())
    }

    /// Insert a key-value pair, overwriting and returning the previous value.
    ///
    /// # Errors
    ///
    /// Fails like [`OrderedMap::insert`].
    ///
    /// # Example
    /// ```rust
    /// use rb_ordered_map::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// assert_eq!(map.insert_or_assign(1, 1), Ok(None));
    /// assert_eq!(map.insert_or_assign(1, 2), Ok(Some(1)));
    /// assert_eq!(map.insert_or_assign(1, 3), Ok(Some(2)));
    /// ```
    pub fn insert_or_assign(&mut self, key: K, value: V) -> Result<Option<V>> {
        match self.tree.insert((key, value))? {
            Insertion::Inserted(_) => Ok(None),
            Insertion::Occupied(node_idx, (_, value)) => Ok(self
                .tree
                .get_mut(node_idx)
                .map(|(_, old)| std::mem::replace(old, value))),
        }
    }

    /// Return reference to the value corresponding to the key.
    #[inline]
    pub fn get(&self, key: &K) -> Option<&V> {
        self.tree.get(self.tree.search(key)).map(|(_, v)| v)
    }

    /// Return the stored key and value for `key`.
    #[inline]
    pub fn get_key_value(&self, key: &K) -> Option<(&K, &V)> {
        self.tree.get(self.tree.search(key)).map(|(k, v)| (k, v))
    }

    /// Return a mutable reference to the value corresponding to the key.
    ///
    /// # Example
    /// ```rust
    /// use rb_ordered_map::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.insert(3, 0).unwrap();
    /// map.get_mut(&3).map(|v| *v += 1);
    /// assert_eq!(map.get(&3), Some(&1));
    /// ```
    #[inline]
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let node_idx = self.tree.search(key);
        self.tree.get_mut(node_idx).map(|(_, v)| v)
    }

    /// Checked access to the value for `key`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::KeyNotFound`] if the key is absent.
    #[inline]
    pub fn at(&self, key: &K) -> Result<&V> {
        self.get(key).ok_or(Error::KeyNotFound)
    }

    /// Checked mutable access to the value for `key`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::KeyNotFound`] if the key is absent.
    #[inline]
    pub fn at_mut(&mut self, key: &K) -> Result<&mut V> {
        self.get_mut(key).ok_or(Error::KeyNotFound)
    }

    /// The value for `key`, inserting `V::default()` first if absent.
    ///
    /// # Errors
    ///
    /// Fails like [`OrderedMap::insert`].
    ///
    /// # Example
    /// ```rust
    /// use rb_ordered_map::OrderedMap;
    ///
    /// let mut map: OrderedMap<&str, i32> = OrderedMap::new();
    /// *map.get_or_insert_default("SSD").unwrap() = 30;
    /// assert_eq!(map.get_or_insert_default("UPS"), Ok(&mut 0));
    /// assert_eq!(map.len(), 2);
    /// ```
    #[inline]
    pub fn get_or_insert_default(&mut self, key: K) -> Result<&mut V>
    where
        V: Default,
    {
        self.entry(key).or_default()
    }

    /// Get the given key's corresponding entry in the map for in-place manipulation.
    #[inline]
    pub fn entry(&mut self, key: K) -> Entry<'_, K, V, C, Ix> {
        let node_idx = self.tree.search(&key);
        if node_idx.is_sentinel() {
            Entry::Vacant(VacantEntry { map_ref: self, key })
        } else {
            Entry::Occupied(OccupiedEntry {
                map_ref: self,
                node_idx,
            })
        }
    }

    /// Returns `true` if the map contains `key`.
    #[inline]
    pub fn contains_key(&self, key: &K) -> bool {
        self.tree.contains(key)
    }

    /// Number of entries with `key`: `0` or `1`.
    #[inline]
    pub fn count(&self, key: &K) -> usize {
        usize::from(self.contains_key(key))
    }

    /// Remove a key from the map, returning its value if the key existed.
    ///
    /// # Example
    /// ```rust
    /// use rb_ordered_map::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.insert(1, 1).unwrap();
    /// map.insert(2, 2).unwrap();
    /// assert_eq!(map.remove(&3), None);
    /// assert_eq!(map.remove(&2), Some(2));
    /// assert_eq!(map.len(), 1);
    /// ```
    #[inline]
    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.tree.remove(key).map(|(_, v)| v)
    }

    /// Remove a key from the map, returning the stored entry.
    #[inline]
    pub fn remove_entry(&mut self, key: &K) -> Option<(K, V)> {
        self.tree.remove(key)
    }

    /// Remove a key, returning how many entries were removed (`0` or `1`).
    #[inline]
    pub fn erase(&mut self, key: &K) -> usize {
        usize::from(self.tree.remove(key).is_some())
    }

    /// Remove every entry with a key in `[low, high)`, returning how many were removed.
    ///
    /// # Example
    /// ```rust
    /// use rb_ordered_map::OrderedMap;
    ///
    /// let mut map: OrderedMap<i32, ()> = (0..10).map(|k| (k, ())).collect();
    /// assert_eq!(map.remove_range(&3, &7), 4);
    /// assert_eq!(map.keys().copied().collect::<Vec<_>>(), vec![0, 1, 2, 7, 8, 9]);
    /// ```
    #[inline]
    pub fn remove_range(&mut self, low: &K, high: &K) -> usize {
        self.tree.remove_range(low, high)
    }

    /// A cursor on the entry for `key`, or the end position.
    #[inline]
    pub fn find(&self, key: &K) -> MapCursor<'_, K, V, C, Ix> {
        self.tree.cursor(self.tree.search(key))
    }

    /// A cursor on the first entry whose key is not less than `key`.
    ///
    /// # Example
    /// ```rust
    /// use rb_ordered_map::OrderedMap;
    ///
    /// let map: OrderedMap<i32, char> = [(10, 'a'), (20, 'b')].into_iter().collect();
    /// assert_eq!(map.lower_bound(&10).key(), Some(&10));
    /// assert_eq!(map.lower_bound(&11).key(), Some(&20));
    /// assert!(map.lower_bound(&21).is_end());
    /// ```
    #[inline]
    pub fn lower_bound(&self, key: &K) -> MapCursor<'_, K, V, C, Ix> {
        self.tree.cursor(self.tree.lower_bound(key))
    }

    /// A cursor on the first entry whose key is greater than `key`.
    #[inline]
    pub fn upper_bound(&self, key: &K) -> MapCursor<'_, K, V, C, Ix> {
        self.tree.cursor(self.tree.upper_bound(key))
    }

    /// The pair `(lower_bound(key), upper_bound(key))`.
    #[inline]
    pub fn equal_range(&self, key: &K) -> (MapCursor<'_, K, V, C, Ix>, MapCursor<'_, K, V, C, Ix>) {
        (self.lower_bound(key), self.upper_bound(key))
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
        K: Debug,
        V: Debug,
    {
        self.tree.draw(path)
    }
}

impl<K, V, C, Ix> Default for OrderedMap<K, V, C, Ix>
where
    C: Default,
    Ix: IndexType,
{
    #[inline]
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<K, V, C, Ix> Clone for OrderedMap<K, V, C, Ix>
where
    K: Clone,
    V: Clone,
    C: Compare<K> + Clone,
    Ix: IndexType,
{
    /// # Panics
    ///
    /// Panics if a node cannot be allocated.
    fn clone(&self) -> Self {
        OrderedMap {
            tree: self.tree.clone(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.tree.clone_from(&source.tree);
    }
}

impl<K, V, C, Ix> Debug for OrderedMap<K, V, C, Ix>
where
    K: Debug,
    V: Debug,
    Ix: IndexType,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V, C, Ix> PartialEq for OrderedMap<K, V, C, Ix>
where
    K: PartialEq,
    V: PartialEq,
    Ix: IndexType,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<K: Eq, V: Eq, C, Ix: IndexType> Eq for OrderedMap<K, V, C, Ix> {}

impl<K, V, C, Ix> PartialOrd for OrderedMap<K, V, C, Ix>
where
    K: PartialOrd,
    V: PartialOrd,
    Ix: IndexType,
{
    /// Lexicographic comparison of the entry sequences.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<K: Ord, V: Ord, C, Ix: IndexType> Ord for OrderedMap<K, V, C, Ix> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<K, V, C, Ix> Index<&K> for OrderedMap<K, V, C, Ix>
where
    C: Compare<K>,
    Ix: IndexType,
{
    type Output = V;

    /// # Panics
    ///
    /// Panics if the key is not present in the map.
    #[inline]
    fn index(&self, key: &K) -> &V {
        match self.get(key) {
            Some(value) => value,
            None => panic!("{}", Error::KeyNotFound),
        }
    }
}

impl<K, V, C, Ix> Extend<(K, V)> for OrderedMap<K, V, C, Ix>
where
    C: Compare<K>,
    Ix: IndexType,
{
    /// Inserts every pair whose key is absent; existing keys keep their value.
    ///
    /// # Panics
    ///
    /// Panics if a node cannot be allocated.
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            if let Err(err) = self.insert(key, value) {
                panic!("{err}");
            }
        }
    }
}

impl<K, V, C, Ix> FromIterator<(K, V)> for OrderedMap<K, V, C, Ix>
where
    C: Compare<K> + Default,
    Ix: IndexType,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::default();
        map.extend(iter);
        map
    }
}

impl<K, V, C, Ix: IndexType> IntoIterator for OrderedMap<K, V, C, Ix> {
    type Item = (K, V);
    type IntoIter = cursor::IntoIter<(K, V), First, C, Ix>;

    fn into_iter(self) -> Self::IntoIter {
        self.tree.into_iter()
    }
}

impl<'a, K, V, C, Ix: IndexType> IntoIterator for &'a OrderedMap<K, V, C, Ix> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V, C, Ix>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, K, V, C, Ix: IndexType> IntoIterator for &'a mut OrderedMap<K, V, C, Ix> {
    type Item = (&'a K, &'a mut V);
    type IntoIter = IterMut<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// An iterator over the entries of a `OrderedMap`.
pub struct Iter<'a, K, V, C, Ix> {
    inner: cursor::Iter<'a, (K, V), First, C, Ix>,
}

impl<K, V, C, Ix: Copy> Clone for Iter<'_, K, V, C, Ix> {
    fn clone(&self) -> Self {
        Iter {
            inner: self.inner.clone(),
        }
    }
}

impl<K: Debug, V: Debug, C, Ix: IndexType> Debug for Iter<'_, K, V, C, Ix> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, K, V, C, Ix: IndexType> Iterator for Iter<'a, K, V, C, Ix> {
    type Item = (&'a K, &'a V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (k, v))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V, C, Ix: IndexType> DoubleEndedIterator for Iter<'_, K, V, C, Ix> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(k, v)| (k, v))
    }
}

impl<K, V, C, Ix: IndexType> ExactSizeIterator for Iter<'_, K, V, C, Ix> {}

impl<K, V, C, Ix: IndexType> FusedIterator for Iter<'_, K, V, C, Ix> {}

/// An iterator over the entries of a `OrderedMap` with mutable values.
#[derive(Debug)]
pub struct IterMut<'a, K, V> {
    inner: std::vec::IntoIter<&'a mut (K, V)>,
}

/// Split a stored pair into a shared key and a mutable value.
fn split_entry<K, V>(entry: &mut (K, V)) -> (&K, &mut V) {
    let (k, v) = entry;
    (k, v)
}

impl<'a, K, V> Iterator for IterMut<'a, K, V> {
    type Item = (&'a K, &'a mut V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(split_entry)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for IterMut<'_, K, V> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(split_entry)
    }
}

impl<K, V> ExactSizeIterator for IterMut<'_, K, V> {}

impl<K, V> FusedIterator for IterMut<'_, K, V> {}
