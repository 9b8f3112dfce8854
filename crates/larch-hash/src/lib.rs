//! Digest computation for Larch.
//!
//! The ingest engine threads a single mutable hash object through an entire
//! traversal. [`Digester`] is the contract that object satisfies, and
//! [`digest_data`] is the one way the engine uses it: reset, write the input,
//! finish. The reset-before-use discipline makes every computation
//! independent of prior calls even though the underlying state is shared.
//!
//! [`blake3::Hasher`] implements `Digester` and is the stack's default
//! algorithm.

pub mod digester;

pub use digester::{digest_data, Digester};
