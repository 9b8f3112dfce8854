//! Foundation types for Larch.
//!
//! This crate provides the types shared by every other Larch crate: the
//! content [`Digest`] used as a store key, and the [`Node`] family of traits
//! describing the file/directory trees the engine ingests.
//!
//! # Key Types
//!
//! - [`Digest`] — Content-derived identifier (raw hash bytes, algorithm-agnostic)
//! - [`Node`], [`FileNode`], [`DirNode`] — Contracts for caller-owned trees
//! - [`NodeKind`] — Tag for dispatching on a node's capability

pub mod digest;
pub mod error;
pub mod node;

pub use digest::Digest;
pub use error::TypeError;
pub use node::{DirNode, FileNode, Node, NodeKind};
