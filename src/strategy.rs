//! KeyStrategy: the caller-supplied behavior bundle the table is generic
//! over.

use core::borrow::Borrow;
use core::fmt;

/// Per-key-type behavior supplied to a [`Table`](crate::Table) at creation.
///
/// A strategy bundles the five operations the engine needs for keys whose
/// shape it does not know: cloning a caller's key into the owned form the
/// table keeps, releasing that owned form, hashing into a logical bucket,
/// equality, and diagnostic printing. The table routes every key disposal
/// through [`release_key`](Self::release_key), so a strategy that tracks
/// its clones observes an exact mint/release balance.
///
/// Keys come in two forms: [`Borrowed`](Self::Borrowed) is the query form
/// callers pass to `find`/`insert`/`remove` (for example `str`), and
/// [`Owned`](Self::Owned) is the stored clone (for example `String`). The
/// `Owned: Borrow<Borrowed>` bound lets the engine compare stored clones
/// against queries without allocating.
pub trait KeyStrategy {
    /// Borrowed query form of the key.
    type Borrowed: ?Sized;
    /// Owned form stored inside the table.
    type Owned: Borrow<Self::Borrowed>;

    /// Clone a caller's key into the owned form the table will keep.
    fn clone_key(&self, key: &Self::Borrowed) -> Self::Owned;

    /// Release an owned clone. Inverse of [`clone_key`](Self::clone_key);
    /// called exactly once per clone the table disposes of.
    fn release_key(&self, key: Self::Owned);

    /// Hash `key` into a logical bucket. Must return a value in
    /// `[0, bucket_count)`.
    fn hash(&self, key: &Self::Borrowed, bucket_count: usize) -> usize;

    /// Whether two keys are logically equal.
    fn eq(&self, a: &Self::Borrowed, b: &Self::Borrowed) -> bool;

    /// Write a printable representation of `key`. No format contract
    /// beyond being human readable.
    fn write_key(&self, key: &Self::Borrowed, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}
