//! The block store contract the ingest engine writes through.

use larch_types::Digest;

use crate::error::StoreResult;

/// A put-only, content-addressed key-value sink.
///
/// Keys are digest bytes of whatever width the injected algorithm produces;
/// values are arbitrary byte sequences. Implementations must satisfy:
///
/// - `put` is idempotent: the same digest/value pair may be written any
///   number of times without changing observable state beyond the first.
/// - Blocks are immutable once written. A key is a deterministic function of
///   its value, so a second write under an existing key carries the same
///   bytes by construction.
/// - No existence check is required before a write; callers never perform one.
pub trait BlockStore: Send + Sync {
    /// Store `value` under `key`.
    fn put(&self, key: Digest, value: &[u8]) -> StoreResult<()>;
}
