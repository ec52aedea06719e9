//! chain-table: a fixed-capacity hash table over string keys and values,
//! resolving collisions by separate chaining.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: keep the hashing, indexing and collision-resolution steps small
//!   and separately testable.
//! - Layers:
//!   - `digest`: `KeyDigest` turns a key into a `u64`; the default
//!     `CodePointSum` adds up the key's Unicode code points. `reduce` maps
//!     a digest onto `[0, capacity)` by remainder.
//!   - `chain`: insertion-ordered `Vec` of entries for one bucket, with a
//!     front-to-back exact-match search.
//!   - `buckets`: fixed-length array of `Option<Chain>`. A slot is `None`
//!     until the first entry lands in it (or filled up front under
//!     `BucketPolicy::Eager`).
//!   - `HashTable`: public `put`/`get` surface.
//!
//! Constraints
//! - Capacity is fixed at construction and must be positive. There is no
//!   rehashing; chains simply grow.
//! - At most one entry per key. `put` on an existing key overwrites the
//!   value in place; the entry keeps its chain position.
//! - The bucket index is recomputed from the digest on every access and
//!   never stored on the entry.
//! - Lookups never reorder a chain.
//! - Single-threaded, no interior mutability; wrap in a lock to share.
//!
//! Lookup results
//! - `get` returns `Lookup::Found(&str)` or `Lookup::NotFound`. Callers
//!   that want a bare string can flatten with `Lookup::or_no_data`, which
//!   yields `NO_DATA` on a miss; that form cannot tell a stored
//!   `"==no data=="` from a missing key.
//!
//! Notes and non-goals
//! - No removal, iteration, resizing or persistence.
//! - The default digest is deliberately weak: anagrams collide. Supply a
//!   different `KeyDigest` through `HashTable::with_digest` if needed.
//!
//! ```
//! use chain_table::{HashTable, Lookup};
//!
//! let mut table = HashTable::new(10)?;
//! table.put("one", "first post");
//! assert_eq!(table.get("one"), Lookup::Found("first post"));
//! assert_eq!(table.get("two"), Lookup::NotFound);
//! # Ok::<(), chain_table::TableError>(())
//! ```

mod buckets;
mod chain;
pub mod config;
pub mod digest;
mod error;
mod lookup;
mod table;
mod table_proptest;

// Public surface
pub use config::{BucketPolicy, TableConfig};
pub use digest::{CodePointSum, KeyDigest};
pub use error::TableError;
pub use lookup::{Lookup, NO_DATA};
pub use table::HashTable;
