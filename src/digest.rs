//! Key digests and index reduction.

use core::num::NonZeroUsize;

/// Turns a key into the integer used to pick its bucket.
///
/// Implementations must be deterministic: the same key always yields the
/// same digest for the lifetime of a table, since bucket indices are never
/// cached on entries.
pub trait KeyDigest {
    fn digest(&self, key: &str) -> u64;
}

/// Sum of the Unicode code points of every character in the key.
///
/// Order-insensitive and unseeded: anagrams such as `"ab"` and `"ba"` land
/// on the same digest. Chaining keeps those collisions correct, only
/// slower. The empty key digests to 0.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct CodePointSum;

impl KeyDigest for CodePointSum {
    #[inline]
    fn digest(&self, key: &str) -> u64 {
        key.chars()
            .fold(0u64, |acc, c| acc.wrapping_add(u64::from(u32::from(c))))
    }
}

impl<D: KeyDigest + ?Sized> KeyDigest for &D {
    fn digest(&self, key: &str) -> u64 {
        (**self).digest(key)
    }
}

/// Reduce a digest to a bucket index in `[0, capacity)`.
#[inline]
pub fn reduce(digest: u64, capacity: NonZeroUsize) -> usize {
    // capacity fits in u64 on every supported target; the remainder is
    // strictly below capacity and therefore fits back into usize.
    (digest % capacity.get() as u64) as usize
}
