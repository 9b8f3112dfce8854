//! Merkle DAG ingest engine for Larch.
//!
//! Builds a content-addressed representation of a file/directory tree and
//! persists every node of it into a [`BlockStore`](larch_store::BlockStore),
//! keyed by the digest of its serialized bytes. The single entry point is
//! [`add`]: hand it a root [`Node`](larch_types::Node), a store, and a
//! digester, and it returns the root identifier for the whole tree.
//!
//! - Files at the root are split into [`BLOCK_SIZE`] chunks by the
//!   [`Chunker`]; each chunk is stored under its own digest and the returned
//!   identifier concatenates the chunk digests in order.
//! - Directories become [`Object`]s -- an ordered list of [`Link`]s to their
//!   stored children -- serialized, hashed, and stored; the object digest is
//!   the directory's identifier.
//! - File children of a directory are always stored whole, never chunked.
//!
//! Any storage or serialization failure aborts the enclosing operation and
//! surfaces as `None`; blocks written earlier in the same traversal stay in
//! the store (content-addressed writes are idempotent, so orphans are
//! harmless, not corruption).

pub mod chunker;
pub mod error;
pub mod ingest;
pub mod memtree;
pub mod object;

pub use chunker::{Chunker, BLOCK_SIZE};
pub use error::{DagError, DagResult};
pub use ingest::{add, store_dir, store_file, FileClass};
pub use memtree::{MemDir, MemFile, MemSymlink};
pub use object::{Link, Object};
