//! Construction errors.

/// Reasons a [`HashTable`](crate::HashTable) cannot be built.
///
/// Lookups never fail: a missing key is reported through
/// [`Lookup::NotFound`](crate::Lookup::NotFound).
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("capacity must be positive; index reduction divides by it")]
    ZeroCapacity,

    #[error("could not allocate {capacity} buckets")]
    AllocationFailed { capacity: usize },
}
