//! The serializable directory object and its links.

use serde::{Deserialize, Serialize};

use larch_types::Digest;

use crate::error::{DagError, DagResult};

/// A named, sized reference from a directory object to a stored child.
///
/// `hash` must equal the digest the referenced content was stored under;
/// every link in the DAG depends on that equality holding.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    /// Display label for the child. Not part of lookup identity.
    pub name: String,
    /// Digest of the child's stored content.
    pub hash: Digest,
    /// Byte length of the child's raw content; 0 when not tracked.
    pub size: u64,
}

impl Link {
    /// Create a link with an explicit label.
    pub fn new(name: impl Into<String>, hash: Digest, size: u64) -> Self {
        Self {
            name: name.into(),
            hash,
            size,
        }
    }

    /// Convenience constructor for a stored file child.
    pub fn file(hash: Digest, size: u64) -> Self {
        Self::new("file", hash, size)
    }

    /// Convenience constructor for a stored sub-directory child.
    ///
    /// Directory sizes are not tracked; the link carries 0.
    pub fn dir(hash: Digest) -> Self {
        Self::new("dir", hash, 0)
    }
}

/// The serializable representation of one directory node.
///
/// Links are kept strictly in insertion order -- the order the source
/// directory yielded its children. The object is never sorted or
/// deduplicated: its serialized bytes, and therefore its store key, depend
/// on the sequence as given.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Object {
    /// One link per direct child, in iteration order.
    pub links: Vec<Link>,
    /// Auxiliary raw bytes. Unused by directory construction; reserved for
    /// object variants that embed content alongside links.
    pub data: Vec<u8>,
}

impl Object {
    /// Create an empty object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a link, preserving insertion order.
    pub fn push(&mut self, link: Link) {
        self.links.push(link);
    }

    /// Number of links.
    pub fn len(&self) -> usize {
        self.links.len()
    }

    /// Returns `true` if the object has no links.
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Serialize to the stable byte encoding used for hashing and storage.
    ///
    /// Deterministic: the same links sequence always yields byte-identical
    /// output, which is what makes the object's store key stable.
    pub fn to_bytes(&self) -> DagResult<Vec<u8>> {
        bincode::serialize(self).map_err(|e| DagError::Serialization(e.to_string()))
    }

    /// Decode an object from its serialized bytes.
    ///
    /// The ingest path never reads objects back; this is the format's
    /// inverse for verification and embedding.
    pub fn from_bytes(data: &[u8]) -> DagResult<Self> {
        bincode::deserialize(data).map_err(|e| DagError::Serialization(e.to_string()))
    }
}
