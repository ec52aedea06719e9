//! HashTable: public put/get surface over the bucket array.

use crate::buckets::Buckets;
use crate::chain::{self, Entry};
use crate::config::TableConfig;
use crate::digest::{reduce, CodePointSum, KeyDigest};
use crate::error::TableError;
use crate::lookup::Lookup;
use core::num::NonZeroUsize;

/// Fixed-capacity separate-chaining table from `String` keys to `String`
/// values.
///
/// The bucket for a key is `digest(key) % capacity`, recomputed on every
/// access. Capacity never changes after construction, so chains grow
/// without bound as entries accumulate.
#[derive(Debug, Clone)]
pub struct HashTable<S = CodePointSum> {
    digest: S,
    capacity: NonZeroUsize,
    buckets: Buckets,
    len: usize,
}

impl HashTable<CodePointSum> {
    /// Build a lazily-bucketed table with the code-point-sum digest.
    pub fn new(capacity: usize) -> Result<Self, TableError> {
        Self::with_config(TableConfig::new(capacity))
    }

    pub fn with_config(config: TableConfig) -> Result<Self, TableError> {
        Self::with_config_and_digest(config, CodePointSum)
    }
}

impl<S> HashTable<S>
where
    S: KeyDigest,
{
    pub fn with_digest(capacity: usize, digest: S) -> Result<Self, TableError> {
        Self::with_config_and_digest(TableConfig::new(capacity), digest)
    }

    pub fn with_config_and_digest(config: TableConfig, digest: S) -> Result<Self, TableError> {
        let capacity = config.validate()?;
        let buckets = Buckets::allocate(capacity, config.bucket_policy)?;
        log::debug!(
            "hash table created: capacity={}, policy={:?}",
            capacity,
            config.bucket_policy
        );
        Ok(Self {
            digest,
            capacity,
            buckets,
            len: 0,
        })
    }

    /// Number of buckets, as given at construction.
    pub fn capacity(&self) -> usize {
        self.capacity.get()
    }

    /// Number of distinct keys stored.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn digest_of(&self, key: &str) -> u64 {
        self.digest.digest(key)
    }

    /// Bucket index `key` maps to; always in `[0, capacity)`.
    pub fn bucket_index(&self, key: &str) -> usize {
        reduce(self.digest_of(key), self.capacity)
    }

    /// Insert `key` or overwrite its value in place.
    ///
    /// A new key is appended to the tail of its bucket's chain, creating the
    /// chain if this is the bucket's first entry. An existing key keeps its
    /// position; only the value changes.
    pub fn put(&mut self, key: &str, value: impl Into<String>) {
        let index = self.bucket_index(key);
        let value = value.into();
        let chain = self.buckets.materialize(index);
        match chain.search_mut(key) {
            Some(entry) => {
                log::trace!("updating key {:?} in bucket {}", key, index);
                entry.set_value(value);
            }
            None => {
                log::trace!("inserting key {:?} into bucket {}", key, index);
                chain.push(Entry::new(key, value));
                self.len += 1;
            }
        }
    }

    /// Look up `key`. A miss is [`Lookup::NotFound`], never an error.
    pub fn get(&self, key: &str) -> Lookup<'_> {
        let index = self.bucket_index(key);
        chain::search(self.buckets.chain(index), key)
            .map(Entry::value)
            .into()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_found()
    }

    /// Entries in the chain at `index`; 0 for unmaterialized or
    /// out-of-range buckets.
    pub fn chain_len(&self, index: usize) -> usize {
        self.buckets.chain(index).map_or(0, |c| c.len())
    }

    /// Whether the bucket at `index` holds a chain. Always true under
    /// [`BucketPolicy::Eager`](crate::BucketPolicy::Eager).
    pub fn is_materialized(&self, index: usize) -> bool {
        self.buckets.is_materialized(index)
    }

    pub fn materialized_buckets(&self) -> usize {
        self.buckets.materialized()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BucketPolicy;

    #[derive(Clone, Default)]
    struct ConstDigest;
    impl KeyDigest for ConstDigest {
        fn digest(&self, _key: &str) -> u64 {
            0
        }
    }

    /// Invariant: a value put under a key is returned by get.
    #[test]
    fn put_then_get() {
        let mut t = HashTable::new(10).unwrap();
        t.put("one", "first post");
        assert_eq!(t.get("one"), Lookup::Found("first post"));
        assert_eq!(t.get("two"), Lookup::NotFound);
        assert_eq!(t.get("two").or_no_data(), "==no data==");
    }

    /// Invariant: get before any put is NotFound, and touches no bucket.
    #[test]
    fn get_on_fresh_table() {
        let t = HashTable::new(10).unwrap();
        assert!(t.get("anything").is_not_found());
        assert!(t.get("").is_not_found());
        assert_eq!(t.materialized_buckets(), 0);
        assert!(t.is_empty());
    }

    /// Invariant: a second put overwrites in place without growing the chain.
    #[test]
    fn overwrite_does_not_duplicate() {
        let mut t = HashTable::new(10).unwrap();
        t.put("k", "v1");
        let idx = t.bucket_index("k");
        assert_eq!(t.chain_len(idx), 1);
        t.put("k", "v2");
        assert_eq!(t.chain_len(idx), 1);
        assert_eq!(t.len(), 1);
        assert_eq!(t.get("k"), Lookup::Found("v2"));
    }

    /// Invariant: anagram keys share a bucket and stay independently retrievable.
    #[test]
    fn anagram_collision_resolved() {
        let mut t = HashTable::new(10).unwrap();
        assert_eq!(t.digest_of("ab"), t.digest_of("ba"));
        t.put("ab", "first");
        t.put("ba", "second");
        let idx = t.bucket_index("ab");
        assert_eq!(idx, t.bucket_index("ba"));
        assert_eq!(t.chain_len(idx), 2);
        assert_eq!(t.get("ab"), Lookup::Found("first"));
        assert_eq!(t.get("ba"), Lookup::Found("second"));
    }

    /// Invariant: updating one colliding key leaves its neighbours alone.
    #[test]
    fn update_in_shared_chain() {
        let mut t = HashTable::with_digest(4, ConstDigest).unwrap();
        t.put("a", "1");
        t.put("b", "2");
        t.put("c", "3");
        t.put("b", "22");
        assert_eq!(t.chain_len(0), 3);
        assert_eq!(t.get("a").value(), Some("1"));
        assert_eq!(t.get("b").value(), Some("22"));
        assert_eq!(t.get("c").value(), Some("3"));
    }

    /// Invariant: with capacity 1 every key shares bucket 0 and nothing is lost.
    #[test]
    fn capacity_one_chains_everything() {
        let mut t = HashTable::new(1).unwrap();
        t.put("alpha", "A");
        t.put("beta", "B");
        t.put("gamma", "G");
        assert_eq!(t.chain_len(0), 3);
        assert_eq!(t.materialized_buckets(), 1);
        assert_eq!(t.get("alpha").value(), Some("A"));
        assert_eq!(t.get("beta").value(), Some("B"));
        assert_eq!(t.get("gamma").value(), Some("G"));
    }

    /// Invariant: a bucket is materialized only by the first put into it.
    #[test]
    fn lazy_materialization_on_first_put() {
        let mut t = HashTable::new(10).unwrap();
        let idx = t.bucket_index("one");
        assert!(!t.is_materialized(idx));
        t.put("one", "x");
        assert!(t.is_materialized(idx));
        assert_eq!(t.materialized_buckets(), 1);
        // Misses in other buckets do not materialize them.
        let _ = t.get("zz");
        assert_eq!(t.materialized_buckets(), 1);
    }

    /// Invariant: the eager policy behaves identically for put/get.
    #[test]
    fn eager_policy_same_behavior() {
        let cfg = TableConfig::new(5).with_bucket_policy(BucketPolicy::Eager);
        let mut t = HashTable::with_config(cfg).unwrap();
        assert_eq!(t.materialized_buckets(), 5);
        assert!(t.get("k").is_not_found());
        t.put("k", "v");
        assert_eq!(t.get("k").value(), Some("v"));
        assert_eq!(t.materialized_buckets(), 5);
    }

    /// Invariant: zero capacity is refused at construction.
    #[test]
    fn zero_capacity_rejected() {
        assert!(matches!(HashTable::new(0), Err(TableError::ZeroCapacity)));
        assert!(matches!(
            HashTable::with_digest(0, ConstDigest),
            Err(TableError::ZeroCapacity)
        ));
    }

    /// Invariant: an unallocatable bucket array is an error, not an abort.
    #[test]
    fn oversized_capacity_rejected() {
        match HashTable::new(usize::MAX) {
            Err(TableError::AllocationFailed { capacity }) => assert_eq!(capacity, usize::MAX),
            other => panic!("unexpected result: {:?}", other.map(|t| t.capacity())),
        }
    }

    /// Invariant: the empty key is stored in bucket 0 like any other key.
    #[test]
    fn empty_key_round_trip() {
        let mut t = HashTable::new(7).unwrap();
        assert_eq!(t.bucket_index(""), 0);
        t.put("", "nothing");
        assert_eq!(t.get(""), Lookup::Found("nothing"));
        assert!(t.contains_key(""));
    }

    /// Invariant: stored placeholder text is still reported as Found.
    #[test]
    fn placeholder_value_stays_distinguishable() {
        let mut t = HashTable::new(3).unwrap();
        t.put("k", crate::NO_DATA);
        assert!(t.get("k").is_found());
        assert!(t.get("other").is_not_found());
    }

    /// Invariant: chain_len is 0 for buckets out of range.
    #[test]
    fn chain_len_out_of_range() {
        let t = HashTable::new(2).unwrap();
        assert_eq!(t.chain_len(5), 0);
        assert!(!t.is_materialized(5));
    }
}
