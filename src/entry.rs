use std::fmt::{self, Debug};

use crate::compare::Compare;
use crate::error::{Error, Result};
use crate::index::{IndexType, NodeIndex};
use crate::map::OrderedMap;

/// A view into a single entry in a map, which may either be vacant or occupied.
pub enum Entry<'a, K, V, C, Ix> {
    /// An occupied entry.
    Occupied(OccupiedEntry<'a, K, V, C, Ix>),
    /// A vacant entry.
    Vacant(VacantEntry<'a, K, V, C, Ix>),
}

/// A view into an occupied entry in a `OrderedMap`.
/// It is part of the [`Entry`] enum.
pub struct OccupiedEntry<'a, K, V, C, Ix> {
    /// Reference to the map
    pub(crate) map_ref: &'a mut OrderedMap<K, V, C, Ix>,
    /// The entry node
    pub(crate) node_idx: NodeIndex<Ix>,
}

/// A view into a vacant entry in a `OrderedMap`.
/// It is part of the [`Entry`] enum.
pub struct VacantEntry<'a, K, V, C, Ix> {
    /// Mutable reference to the map
    pub(crate) map_ref: &'a mut OrderedMap<K, V, C, Ix>,
    /// The key of this entry
    pub(crate) key: K,
}

/// The value stored at `node_idx`.
fn value_at<K, V, C, Ix>(
    map_ref: &mut OrderedMap<K, V, C, Ix>,
    node_idx: NodeIndex<Ix>,
) -> Result<&mut V>
where
    Ix: IndexType,
{
    map_ref
        .tree
        .get_mut(node_idx)
        .map(|(_, v)| v)
        .ok_or(Error::KeyNotFound)
}

impl<'a, K, V, C, Ix> Entry<'a, K, V, C, Ix>
where
    C: Compare<K>,
    Ix: IndexType,
{
    /// Ensures a value is in the entry by inserting the default if empty, and returns
    /// a mutable reference to the value in the entry.
    ///
    /// # Errors
    ///
    /// Fails like [`OrderedMap::insert`] when a node cannot be allocated.
    ///
    /// # Example
    /// ```rust
    /// use rb_ordered_map::{Entry, OrderedMap};
    ///
    /// let mut map = OrderedMap::new();
    /// assert!(matches!(map.entry(1), Entry::Vacant(_)));
    /// map.entry(1).or_insert(3).unwrap();
    /// assert!(matches!(map.entry(1), Entry::Occupied(_)));
    /// assert_eq!(map.get(&1), Some(&3));
    /// ```
    #[inline]
    pub fn or_insert(self, default: V) -> Result<&'a mut V> {
        self.or_insert_with(|| default)
    }

    /// Like [`Entry::or_insert`], computing the value only when the entry is vacant.
    ///
    /// # Errors
    ///
    /// Fails like [`OrderedMap::insert`] when a node cannot be allocated.
    #[inline]
    pub fn or_insert_with<F>(self, default: F) -> Result<&'a mut V>
    where
        F: FnOnce() -> V,
    {
        match self {
            Entry::Occupied(entry) => value_at(entry.map_ref, entry.node_idx),
            Entry::Vacant(entry) => entry.insert(default()),
        }
    }

    /// Like [`Entry::or_insert`] with `V::default()`.
    ///
    /// # Errors
    ///
    /// Fails like [`OrderedMap::insert`] when a node cannot be allocated.
    #[inline]
    pub fn or_default(self) -> Result<&'a mut V>
    where
        V: Default,
    {
        self.or_insert_with(V::default)
    }

    /// Provides in-place mutable access to an occupied entry before any
    /// potential inserts into the map.
    ///
    /// # Example
    /// ```rust
    /// use rb_ordered_map::{Entry, OrderedMap};
    ///
    /// let mut map = OrderedMap::new();
    ///
    /// map.insert(6, 3).unwrap();
    /// assert!(matches!(map.entry(6), Entry::Occupied(_)));
    /// map.entry(6).and_modify(|v| *v += 1);
    /// assert_eq!(map.get(&6), Some(&4));
    /// ```
    #[inline]
    #[must_use]
    pub fn and_modify<F>(self, f: F) -> Self
    where
        F: FnOnce(&mut V),
    {
        match self {
            Entry::Occupied(entry) => {
                if let Ok(value) = value_at(entry.map_ref, entry.node_idx) {
                    f(value);
                }
                Self::Occupied(entry)
            }
            Entry::Vacant(entry) => Self::Vacant(entry),
        }
    }
}

impl<'a, K, V, C, Ix> VacantEntry<'a, K, V, C, Ix>
where
    C: Compare<K>,
    Ix: IndexType,
{
    /// The key that would be inserted.
    #[inline]
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Insert `value` under the entry's key.
    ///
    /// # Errors
    ///
    /// Fails like [`OrderedMap::insert`] when a node cannot be allocated.
    #[inline]
    pub fn insert(self, value: V) -> Result<&'a mut V> {
        let node_idx = self.map_ref.tree.insert((self.key, value))?.index();
        value_at(self.map_ref, node_idx)
    }
}

impl<K: Debug, V: Debug, C, Ix: IndexType> Debug for Entry<'_, K, V, C, Ix> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entry::Occupied(entry) => f
                .debug_tuple("Occupied")
                .field(&entry.map_ref.tree.get(entry.node_idx))
                .finish(),
            Entry::Vacant(entry) => f.debug_tuple("Vacant").field(&entry.key).finish(),
        }
    }
}
