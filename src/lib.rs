//! `rb_ordered_map` provides an ordered map and an ordered set built on one
//! red-black tree engine.
//!
//! The engine fully implements the insertion and deletion functionality of a
//! red-black tree, so every search, insertion and removal takes at most
//! O(logN) time, and cursors can walk the keys in both directions.
//!
//! Nodes live in a vector and refer to each other by index. Slot 0 is a black
//! sentinel that stands in for every missing child and for the end position.
//! Its parent link tracks the root, so a cursor at the end can step back to the
//! maximum without any extra bookkeeping. Because the tree holds no pointers it
//! is `Send` and `Unpin` whenever its payload is.
//!
//! The engine is generic over a key projection ([`KeyOf`]) and a strict weak
//! order ([`Compare`]); [`OrderedMap`] and [`OrderedSet`] are thin wrappers that
//! fix the projection.
//!
//! # Example
//!
//! ```rust
//! use rb_ordered_map::OrderedMap;
//!
//! let mut map = OrderedMap::new();
//! map.insert("GPU", 15).unwrap();
//! map.insert("CPU", 10).unwrap();
//! assert_eq!(map.get(&"CPU"), Some(&10));
//! assert_eq!(map.keys().collect::<Vec<_>>(), vec![&"CPU", &"GPU"]);
//! ```
//!

mod compare;
mod cursor;
#[cfg(feature = "graphviz")]
mod draw;
mod entry;
mod error;
mod index;
mod map;
mod node;
mod set;
mod traverse;
mod tree;

#[cfg(test)]
mod tests;

pub use compare::{Compare, First, Identity, KeyOf, Natural};
pub use cursor::{Cursor, CursorMut, IntoIter, Iter};
pub use entry::{Entry, OccupiedEntry, VacantEntry};
pub use error::{Error, Result};
pub use index::{DefaultIx, IndexType, NodeIndex};
pub use map::{MapCursor, OrderedMap};
pub use node::Color;
pub use set::{OrderedSet, SetCursor};
pub use tree::{Insertion, RbTree};

/// Iterator types of [`OrderedMap`].
pub mod map_iter {
    pub use crate::map::{Iter, IterMut};
}

/// Iterator types of [`OrderedSet`].
pub mod set_iter {
    pub use crate::set::{IntoIter, Iter};
}
