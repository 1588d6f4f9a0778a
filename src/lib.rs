//! range-hashmap: a single-threaded hash table whose logical buckets
//! address contiguous ranges of fixed-capacity groups, and which grows by
//! doubling its physical array instead of rehashing entries.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: one reusable key -> data store, parameterized over key behavior
//!   through a strategy object so the engine never needs per-key-type code.
//! - Pieces:
//!   - `KeyStrategy`: the five-operation behavior bundle (clone, release,
//!     hash, compare, print) a table is generic over. `IntKeys` and
//!     `StrKeys` are the two provided implementations.
//!   - `Table<S, D, E, C>`: the engine. A `Vec` of groups, each with `C`
//!     slots (default [`GROUP_SLOTS`]). Logical bucket `h` occupies the
//!     physical group range `[d*h, d*h + d)` where
//!     `d = group_count / bucket_count`.
//!   - `ErrorSink`: the allocation-failure report collaborator;
//!     `StderrSink` by default.
//!
//! Storage and growth
//! - The logical bucket count is fixed at creation. Growth doubles the
//!   physical array: group `i` moves verbatim to `2*i` and an empty group
//!   is minted at `2*i + 1`. Every bucket's range doubles in place, so no
//!   entry is ever rehashed or moved relative to its range.
//! - `d` is derived from the current physical size on every operation and
//!   never cached.
//! - An insert that finds its whole range full grows the table, then places
//!   the entry at slot 0 of group `2*index + 1` (the empty twin of the
//!   range's first group). This placement is a fixed policy, not a
//!   free-slot scan.
//!
//! Ownership
//! - Two domains. Key clones are fully managed by the table: minted with
//!   `KeyStrategy::clone_key` and disposed with `KeyStrategy::release_key`
//!   on overwrite, on removal, and on drop. Never with a bare drop.
//! - Data handles (`D`) are not managed: the table stores them, returns
//!   them from `remove`, and discards the handles themselves on drop.
//!   Callers keep ownership of the payloads for their entire lifetime, so
//!   `D` should be a non-owning handle type (a shared reference, an index).
//!
//! Failure model
//! - Every fallible operation returns a `Result`; no panic crosses the
//!   public boundary. Allocation goes through `Vec::try_reserve_exact`; a
//!   failure is reported to the table's `ErrorSink` and the operation
//!   leaves no partial state. Creation and growth either fully apply or
//!   leave the table exactly as it was.
//!
//! Contract assumptions
//! - `KeyStrategy::hash` must return a value in `[0, bucket_count)`. A
//!   strategy violating this is a contract bug; it is debug-asserted and
//!   not guarded in release builds.
//!
//! Notes and non-goals
//! - Single-threaded. Mutation requires `&mut Table`; there is no internal
//!   locking.
//! - No shrink on delete, and no slot compaction beyond clearing.
//! - Iteration follows physical layout order; no other order is promised.
//! - Per-group occupancy counters exist for the diagnostic `Display`
//!   surface only; lookups always scan all `C` slots of the range.

mod int_keys;
mod report;
mod str_keys;
mod strategy;
mod table;

// Public surface
pub use int_keys::IntKeys;
pub use report::{ErrorSink, StderrSink};
pub use str_keys::StrKeys;
pub use strategy::KeyStrategy;
pub use table::{Iter, Location, Table, TableError, GROUP_SLOTS};
