//! The recursive store walk: dispatch, file storage, directory storage.
//!
//! [`add`] is the only entry point callers should use for a root node. It
//! walks the tree depth-first and synchronously, threading one digester
//! through every hash computation and pushing every artifact through the
//! store's `put`.
//!
//! Failure handling is binary and shallow: any rejected `put` (or a
//! serializer error) aborts the enclosing storage operation and surfaces as
//! `None`. Nothing is retried and nothing already written is rolled back --
//! blocks stored before the failure point are idempotent content-addressed
//! writes and stay where they are.

use tracing::debug;

use larch_hash::{digest_data, Digester};
use larch_store::BlockStore;
use larch_types::{Digest, DirNode, FileNode, Node, NodeKind};

use crate::chunker::{Chunker, BLOCK_SIZE};
use crate::object::{Link, Object};

/// Storage classification for a file, by whether it fits in one block.
///
/// The class does not change the storage path today; it names what the
/// returned identifier is (a single chunk digest vs. a concatenated list of
/// them) and feeds the log line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileClass {
    /// Content fits in a single block.
    Blob,
    /// Content spans multiple blocks.
    List,
}

impl FileClass {
    /// Classify a file by its byte length.
    pub fn for_size(size: u64) -> Self {
        if size > BLOCK_SIZE as u64 {
            Self::List
        } else {
            Self::Blob
        }
    }
}

impl std::fmt::Display for FileClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Blob => write!(f, "blob"),
            Self::List => write!(f, "list"),
        }
    }
}

/// Store a tree rooted at `node` and return its identifying value.
///
/// Dispatches on the node's kind: files go through [`store_file`],
/// directories through [`store_dir`]. Any other kind is not ingested and
/// yields `None` -- a silent sentinel, deliberately indistinguishable from a
/// downstream storage failure.
pub fn add<S, D>(store: &S, node: &dyn Node, digester: &mut D) -> Option<Digest>
where
    S: BlockStore + ?Sized,
    D: Digester + ?Sized,
{
    match node.kind() {
        NodeKind::File => store_file(store, node.as_file()?, digester),
        NodeKind::Dir => store_dir(store, node.as_dir()?, digester),
        other => {
            debug!(kind = %other, "skipping node with no storage path");
            None
        }
    }
}

/// Chunk, hash, and store a file's content; return its identifying value.
///
/// The content is split into [`BLOCK_SIZE`] chunks and each chunk is stored
/// under its own digest. The returned value is the in-order concatenation of
/// the chunk digests: for a [`FileClass::Blob`] that is exactly one digest;
/// for a [`FileClass::List`] it is wider than one digest and is itself
/// stored under no key.
///
/// An empty file stores nothing and returns the empty [`Digest`]; callers
/// must not use it for lookup (`Digest::is_empty` is the check).
pub fn store_file<S, D>(store: &S, file: &dyn FileNode, digester: &mut D) -> Option<Digest>
where
    S: BlockStore + ?Sized,
    D: Digester + ?Sized,
{
    let class = FileClass::for_size(file.size());
    let data = file.bytes();
    let chunks = Chunker::new(BLOCK_SIZE).chunk(&data);
    let chunk_count = chunks.len();

    let mut root = Vec::new();
    for chunk in chunks {
        let hash = digest_data(digester, chunk);
        if let Err(err) = store.put(hash.clone(), chunk) {
            debug!(key = %hash.short_hex(), error = %err, "chunk write failed, aborting file");
            return None;
        }
        root.extend_from_slice(hash.as_bytes());
    }

    debug!(class = %class, chunks = chunk_count, bytes = data.len(), "stored file");
    Some(Digest::from_raw(root))
}

/// Store a directory and everything beneath it; return the object's digest.
///
/// One pass over the children in the directory's native order:
///
/// - A file child is stored whole -- one digest over the full content, one
///   `put`, no chunking regardless of size -- and linked with its byte length.
/// - A directory child recurses through [`add`]; its returned digest is
///   linked with size 0.
/// - Children of any other kind get no link.
///
/// The accumulated [`Object`] is then serialized, hashed, and stored; its
/// digest is the directory's identifier. Every fallible step aborts the
/// whole call with `None`, including a failed child recursion -- a link must
/// never point at content that was not stored.
pub fn store_dir<S, D>(store: &S, dir: &dyn DirNode, digester: &mut D) -> Option<Digest>
where
    S: BlockStore + ?Sized,
    D: Digester + ?Sized,
{
    let mut obj = Object::new();

    for child in dir.children() {
        match child.kind() {
            NodeKind::File => {
                let file = child.as_file()?;
                let data = file.bytes();
                let hash = digest_data(digester, &data);
                if let Err(err) = store.put(hash.clone(), &data) {
                    debug!(key = %hash.short_hex(), error = %err, "child write failed, aborting directory");
                    return None;
                }
                obj.push(Link::file(hash, file.size()));
            }
            NodeKind::Dir => {
                let hash = add(store, child, digester)?;
                obj.push(Link::dir(hash));
            }
            other => {
                debug!(kind = %other, "child has no storage path, no link");
            }
        }
    }

    let serialized = match obj.to_bytes() {
        Ok(bytes) => bytes,
        Err(err) => {
            debug!(error = %err, "object serialization failed, aborting directory");
            return None;
        }
    };

    let hash = digest_data(digester, &serialized);
    if let Err(err) = store.put(hash.clone(), &serialized) {
        debug!(key = %hash.short_hex(), error = %err, "object write failed, aborting directory");
        return None;
    }

    debug!(key = %hash.short_hex(), links = obj.len(), "stored directory object");
    Some(hash)
}
