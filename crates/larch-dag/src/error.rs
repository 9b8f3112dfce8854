//! Error types for the ingest engine.

/// Errors from DAG object handling.
///
/// The recursive store walk itself reports failure as an absent result, not
/// an error value; `DagError` covers the collaborator seams underneath it.
#[derive(Debug, thiserror::Error)]
pub enum DagError {
    /// Object encoding or decoding failure.
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Convenience alias for DAG results.
pub type DagResult<T> = Result<T, DagError>;
