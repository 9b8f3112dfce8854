//! In-memory tree nodes for tests and embedding.
//!
//! The engine only sees trees through the [`Node`] traits; these are the
//! simplest implementations of that contract. Directory children keep their
//! insertion order, which is therefore the link order in the stored object.

use larch_types::{DirNode, FileNode, Node, NodeKind};

/// An in-memory file: owned bytes.
pub struct MemFile {
    data: Vec<u8>,
}

impl MemFile {
    /// Create a file from its content.
    pub fn new(data: impl Into<Vec<u8>>) -> Self {
        Self { data: data.into() }
    }
}

impl Node for MemFile {
    fn kind(&self) -> NodeKind {
        NodeKind::File
    }

    fn as_file(&self) -> Option<&dyn FileNode> {
        Some(self)
    }
}

impl FileNode for MemFile {
    fn size(&self) -> u64 {
        self.data.len() as u64
    }

    fn bytes(&self) -> Vec<u8> {
        self.data.clone()
    }
}

/// An in-memory directory: ordered, heterogeneous children.
#[derive(Default)]
pub struct MemDir {
    children: Vec<Box<dyn Node>>,
}

impl MemDir {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a child node.
    pub fn push(&mut self, child: impl Node + 'static) {
        self.children.push(Box::new(child));
    }

    /// Builder-style [`push`](Self::push).
    pub fn with(mut self, child: impl Node + 'static) -> Self {
        self.push(child);
        self
    }

    /// Number of direct children.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Returns `true` if the directory has no children.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl Node for MemDir {
    fn kind(&self) -> NodeKind {
        NodeKind::Dir
    }

    fn as_dir(&self) -> Option<&dyn DirNode> {
        Some(self)
    }
}

impl DirNode for MemDir {
    fn children(&self) -> Box<dyn Iterator<Item = &dyn Node> + '_> {
        Box::new(self.children.iter().map(|c| c.as_ref()))
    }
}

/// An in-memory symbolic link. Carries a target for realism but exposes no
/// storable capability; the engine never ingests it.
pub struct MemSymlink {
    target: String,
}

impl MemSymlink {
    /// Create a symlink pointing at `target`.
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
        }
    }

    /// The link target.
    pub fn target(&self) -> &str {
        &self.target
    }
}

impl Node for MemSymlink {
    fn kind(&self) -> NodeKind {
        NodeKind::Symlink
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_exposes_size_and_bytes() {
        let file = MemFile::new(b"content".to_vec());
        assert_eq!(file.kind(), NodeKind::File);
        assert_eq!(file.size(), 7);
        assert_eq!(file.bytes(), b"content");
        assert!(file.as_file().is_some());
        assert!(file.as_dir().is_none());
    }

    #[test]
    fn dir_yields_children_in_insertion_order() {
        let dir = MemDir::new()
            .with(MemFile::new(b"b".to_vec()))
            .with(MemFile::new(b"a".to_vec()));
        assert_eq!(dir.kind(), NodeKind::Dir);
        assert_eq!(dir.len(), 2);

        let kinds: Vec<NodeKind> = dir
            .as_dir()
            .unwrap()
            .children()
            .map(|c| c.kind())
            .collect();
        assert_eq!(kinds, vec![NodeKind::File, NodeKind::File]);

        let first = dir.as_dir().unwrap().children().next().unwrap();
        assert_eq!(first.as_file().unwrap().bytes(), b"b");
    }

    #[test]
    fn empty_dir_iterates_nothing() {
        let dir = MemDir::new();
        assert!(dir.is_empty());
        assert_eq!(dir.as_dir().unwrap().children().count(), 0);
    }

    #[test]
    fn symlink_has_no_storable_capability() {
        let link = MemSymlink::new("../elsewhere");
        assert_eq!(link.kind(), NodeKind::Symlink);
        assert_eq!(link.target(), "../elsewhere");
        assert!(link.as_file().is_none());
        assert!(link.as_dir().is_none());
    }

    #[test]
    fn dirs_nest() {
        let tree = MemDir::new().with(MemDir::new().with(MemFile::new(b"leaf".to_vec())));
        let inner = tree.as_dir().unwrap().children().next().unwrap();
        assert_eq!(inner.kind(), NodeKind::Dir);
        assert_eq!(inner.as_dir().unwrap().children().count(), 1);
    }
}
