//! Buckets: fixed-length slot array with on-demand chain materialization.

use crate::chain::Chain;
use crate::config::BucketPolicy;
use crate::error::TableError;
use core::num::NonZeroUsize;

#[derive(Debug, Clone)]
pub(crate) struct Buckets {
    slots: Box<[Option<Chain>]>,
}

impl Buckets {
    /// Allocate `capacity` slots. Under `Lazy` every slot starts
    /// unmaterialized; under `Eager` each holds an empty chain.
    pub(crate) fn allocate(
        capacity: NonZeroUsize,
        policy: BucketPolicy,
    ) -> Result<Self, TableError> {
        let n = capacity.get();
        let mut slots: Vec<Option<Chain>> = Vec::new();
        slots
            .try_reserve_exact(n)
            .map_err(|_| TableError::AllocationFailed { capacity: n })?;
        match policy {
            BucketPolicy::Lazy => slots.resize_with(n, || None),
            BucketPolicy::Eager => slots.resize_with(n, || Some(Chain::new())),
        }
        Ok(Self {
            slots: slots.into_boxed_slice(),
        })
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.slots.len()
    }

    /// The chain at `index`, or `None` if nothing was ever stored there.
    pub(crate) fn chain(&self, index: usize) -> Option<&Chain> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    /// The chain at `index`, creating an empty one on first use.
    ///
    /// Panics if `index` is out of range; callers only pass reduced indices.
    pub(crate) fn materialize(&mut self, index: usize) -> &mut Chain {
        self.slots[index].get_or_insert_with(|| {
            log::trace!("materializing bucket {}", index);
            Chain::new()
        })
    }

    pub(crate) fn is_materialized(&self, index: usize) -> bool {
        self.chain(index).is_some()
    }

    pub(crate) fn materialized(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }
}
