/// Errors from block store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Attempted to store a value under the empty key.
    ///
    /// The empty digest identifies nothing (it is the result of hashing zero
    /// chunks, not of hashing anything) and must never become a store key.
    #[error("cannot store a block under an empty key")]
    EmptyKey,

    /// The backend rejected the write.
    #[error("write rejected for {key}: {reason}")]
    WriteRejected { key: String, reason: String },

    /// A fault-injecting backend exhausted its write budget.
    #[error("injected fault: write budget exhausted")]
    FaultInjected,

    /// I/O error from the underlying storage backend.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
