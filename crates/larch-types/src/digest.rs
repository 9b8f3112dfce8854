use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Content-derived identifier for a stored value.
///
/// A `Digest` holds the raw output bytes of a hash computation. The width is
/// not fixed: it depends on the digest algorithm the caller injects, and the
/// identifier returned for a multi-chunk file is a concatenation of several
/// single-chunk digests. Identical content always produces the same `Digest`,
/// making stored values deduplicatable and verifiable.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Digest(Vec<u8>);

impl Digest {
    /// Wrap raw digest bytes.
    pub fn from_raw(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    /// The empty digest. Identifies nothing; produced for zero-length input
    /// (e.g. an empty file yields no chunks and therefore no digest bytes).
    pub const fn empty() -> Self {
        Self(Vec::new())
    }

    /// Returns `true` if this digest has no bytes.
    ///
    /// An empty digest is never a store key; callers must check this before
    /// using a returned digest for lookup.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of raw bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// The raw digest bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Hex-encoded string representation.
    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }

    /// Short hex representation (first 4 bytes, or fewer if the digest is shorter).
    pub fn short_hex(&self) -> String {
        hex::encode(&self.0[..self.0.len().min(4)])
    }

    /// Parse from a hex string.
    pub fn from_hex(s: &str) -> Result<Self, TypeError> {
        let bytes = hex::decode(s).map_err(|e| TypeError::InvalidHex(e.to_string()))?;
        Ok(Self(bytes))
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({})", self.short_hex())
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl From<Vec<u8>> for Digest {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl From<Digest> for Vec<u8> {
    fn from(digest: Digest) -> Self {
        digest.0
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
