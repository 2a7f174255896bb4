//! Key ordering and key projection used by the tree engine.
//!
//! The engine never compares payloads directly. It projects every payload to
//! its key with a [`KeyOf`] and orders keys with a [`Compare`]:
//! - a set stores bare keys and uses [`Identity`];
//! - a map stores `(key, value)` pairs and uses [`First`].

/// A strict weak order over keys.
///
/// Two keys are equivalent when neither is less than the other. The order must
/// not change while keys are stored in a tree.
pub trait Compare<K: ?Sized> {
    /// Returns `true` if `a` is ordered strictly before `b`.
    fn less(&self, a: &K, b: &K) -> bool;

    /// Returns `true` if neither key is ordered before the other.
    #[inline]
    fn equivalent(&self, a: &K, b: &K) -> bool {
        !self.less(a, b) && !self.less(b, a)
    }
}

/// Orders keys by their [`Ord`] implementation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Natural;

impl<K: Ord + ?Sized> Compare<K> for Natural {
    #[inline]
    fn less(&self, a: &K, b: &K) -> bool {
        a < b
    }
}

impl<K: ?Sized, F> Compare<K> for F
where
    F: Fn(&K, &K) -> bool,
{
    #[inline]
    fn less(&self, a: &K, b: &K) -> bool {
        self(a, b)
    }
}

/// Projects a stored payload to the key it is ordered by.
pub trait KeyOf<T> {
    /// The key type.
    type Key;

    /// Returns the key of `payload`.
    fn key_of<'a>(&self, payload: &'a T) -> &'a Self::Key;
}

/// The payload is its own key.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Identity;

impl<T> KeyOf<T> for Identity {
    type Key = T;

    #[inline]
    fn key_of<'a>(&self, payload: &'a T) -> &'a T {
        payload
    }
}

/// The key is the first component of a pair.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct First;

impl<K, V> KeyOf<(K, V)> for First {
    type Key = K;

    #[inline]
    fn key_of<'a>(&self, payload: &'a (K, V)) -> &'a K {
        &payload.0
    }
}
