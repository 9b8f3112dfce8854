use std::collections::HashMap;
use std::sync::RwLock;

use larch_types::Digest;
use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::traits::BlockStore;

/// In-memory, HashMap-based block store.
///
/// Intended for tests and embedding. Blocks are held behind an `RwLock`; the
/// inherent read helpers (`get`, `contains`, `len`, ...) exist so callers can
/// inspect what a traversal wrote -- the [`BlockStore`] contract itself stays
/// write-only.
pub struct InMemoryBlockStore {
    blocks: RwLock<HashMap<Digest, Vec<u8>>>,
}

impl InMemoryBlockStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            blocks: RwLock::new(HashMap::new()),
        }
    }

    /// Number of blocks currently stored.
    pub fn len(&self) -> usize {
        self.blocks.read().expect("lock poisoned").len()
    }

    /// Returns `true` if the store holds no blocks.
    pub fn is_empty(&self) -> bool {
        self.blocks.read().expect("lock poisoned").is_empty()
    }

    /// Total bytes across all stored blocks.
    pub fn total_bytes(&self) -> u64 {
        self.blocks
            .read()
            .expect("lock poisoned")
            .values()
            .map(|v| v.len() as u64)
            .sum()
    }

    /// The block stored under `key`, if any.
    pub fn get(&self, key: &Digest) -> Option<Vec<u8>> {
        self.blocks.read().expect("lock poisoned").get(key).cloned()
    }

    /// Returns `true` if a block exists under `key`.
    pub fn contains(&self, key: &Digest) -> bool {
        self.blocks.read().expect("lock poisoned").contains_key(key)
    }

    /// Remove all blocks.
    pub fn clear(&self) {
        self.blocks.write().expect("lock poisoned").clear();
    }

    /// Return a sorted list of all keys in the store.
    pub fn all_keys(&self) -> Vec<Digest> {
        let map = self.blocks.read().expect("lock poisoned");
        let mut keys: Vec<Digest> = map.keys().cloned().collect();
        keys.sort();
        keys
    }
}

impl Default for InMemoryBlockStore {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockStore for InMemoryBlockStore {
    fn put(&self, key: Digest, value: &[u8]) -> StoreResult<()> {
        if key.is_empty() {
            return Err(StoreError::EmptyKey);
        }
        let mut map = self.blocks.write().expect("lock poisoned");
        // Idempotent: first write wins. Content-addressing guarantees a
        // repeated key carries identical bytes.
        if let std::collections::hash_map::Entry::Vacant(slot) = map.entry(key) {
            debug!(key = %slot.key().short_hex(), bytes = value.len(), "stored block");
            slot.insert(value.to_vec());
        }
        Ok(())
    }
}

impl std::fmt::Debug for InMemoryBlockStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryBlockStore")
            .field("block_count", &self.len())
            .finish()
    }
}
