//! A [`BlockStore`] wrapper that fails writes once a budget is exhausted.
//!
//! `FailAfter` forwards `put` to an inner store for the first `n` calls,
//! then answers every further call with [`StoreError::FaultInjected`].
//! Deterministic by construction, so failure-path tests can pin the exact
//! write at which a traversal aborts.
//!
//! # Example
//!
//! ```ignore
//! let store = FailAfter::new(InMemoryBlockStore::new(), 2);
//! // puts 1 and 2 succeed, put 3 fails
//! ```

use std::sync::atomic::{AtomicUsize, Ordering};

use larch_types::Digest;

use crate::error::{StoreError, StoreResult};
use crate::traits::BlockStore;

/// A [`BlockStore`] wrapper with a finite write budget.
pub struct FailAfter<S> {
    inner: S,
    remaining: AtomicUsize,
}

impl<S> FailAfter<S> {
    /// Wrap `inner`, allowing `budget` successful writes before failing.
    pub fn new(inner: S, budget: usize) -> Self {
        Self {
            inner,
            remaining: AtomicUsize::new(budget),
        }
    }

    /// Writes still allowed before the fault engages.
    pub fn remaining(&self) -> usize {
        self.remaining.load(Ordering::SeqCst)
    }

    /// The wrapped store.
    pub fn inner(&self) -> &S {
        &self.inner
    }
}

impl<S: BlockStore> BlockStore for FailAfter<S> {
    fn put(&self, key: Digest, value: &[u8]) -> StoreResult<()> {
        let spent = self
            .remaining
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1));
        match spent {
            Ok(_) => self.inner.put(key, value),
            Err(_) => Err(StoreError::FaultInjected),
        }
    }
}
