//! Construction-time configuration.

use crate::error::TableError;
use core::num::NonZeroUsize;

/// Capacity used by [`TableConfig::default`].
pub const DEFAULT_CAPACITY: usize = 10;

/// When bucket chains are allocated.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum BucketPolicy {
    /// A bucket gets its chain when the first entry hashes into it.
    #[default]
    Lazy,
    /// Every bucket gets an empty chain at construction.
    Eager,
}

/// Settings for [`HashTable::with_config`](crate::HashTable::with_config).
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct TableConfig {
    /// Number of buckets. Fixed for the table's lifetime; must be positive.
    pub capacity: usize,
    pub bucket_policy: BucketPolicy,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            bucket_policy: BucketPolicy::Lazy,
        }
    }
}

impl TableConfig {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            ..Self::default()
        }
    }

    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn with_bucket_policy(mut self, policy: BucketPolicy) -> Self {
        self.bucket_policy = policy;
        self
    }

    /// Check the capacity precondition, returning it as a non-zero count.
    pub fn validate(&self) -> Result<NonZeroUsize, TableError> {
        NonZeroUsize::new(self.capacity).ok_or(TableError::ZeroCapacity)
    }
}
