//! Integer key strategy.

use core::fmt;

use crate::strategy::KeyStrategy;

/// Key strategy for `i64` keys: modular hashing, integer equality.
#[derive(Clone, Copy, Debug, Default)]
pub struct IntKeys;

impl KeyStrategy for IntKeys {
    type Borrowed = i64;
    type Owned = i64;

    fn clone_key(&self, key: &i64) -> i64 {
        *key
    }

    fn release_key(&self, _key: i64) {}

    // key mod bucket_count, normalized into [0, bucket_count) for
    // negative keys.
    fn hash(&self, key: &i64, bucket_count: usize) -> usize {
        key.rem_euclid(bucket_count as i64) as usize
    }

    fn eq(&self, a: &i64, b: &i64) -> bool {
        a == b
    }

    fn write_key(&self, key: &i64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", key)
    }
}
