//! Errors reported by the tree engine and the ordered containers.

use thiserror::Error;

/// Result type used across the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Failure kinds of the ordered containers.
///
/// A failed insertion never links a partial node: the tree is left exactly
/// as it was before the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum Error {
    /// The node arena could not grow.
    #[error("allocation of a tree node failed")]
    AllocationFailed,
    /// The index type cannot address another node.
    #[error("reached maximum number of nodes for the index type")]
    CapacityExceeded,
    /// A checked lookup asked for a key that is not stored.
    #[error("key not found")]
    KeyNotFound,
}

impl From<std::collections::TryReserveError> for Error {
    #[inline]
    fn from(_: std::collections::TryReserveError) -> Self {
        Error::AllocationFailed
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn reserve_failure_maps_to_allocation_failed() {
        let mut v: Vec<u64> = Vec::new();
        let err = v.try_reserve(usize::MAX).unwrap_err();
        assert_eq!(Error::from(err), Error::AllocationFailed);
        assert_eq!(Error::KeyNotFound.to_string(), "key not found");
    }
}
