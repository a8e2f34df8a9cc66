use indexmap::IndexMap;
use serde::Serialize;

/// Children of a folder, keyed by segment name.
///
/// Insertion order is kept for diagnostics only; presentation order is
/// decided by the view engine.
pub type Children = IndexMap<String, Node>;

/// Whether a node is a leaf or a folder with children
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    File,
    Folder(Children),
}

/// Kind tag without the children, for output and comparisons
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum KindTag {
    // Declared first so folders order before files
    Folder,
    File,
}

/// One entry in the hierarchy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// The last segment of `path`
    pub name: String,
    /// Slash-joined segments from the root down to this node
    pub path: String,
    pub kind: NodeKind,
}

impl Node {
    pub fn file(name: &str, path: String) -> Self {
        Node {
            name: name.to_string(),
            path,
            kind: NodeKind::File,
        }
    }

    pub fn folder(name: &str, path: String) -> Self {
        Node {
            name: name.to_string(),
            path,
            kind: NodeKind::Folder(Children::new()),
        }
    }

    pub fn is_folder(&self) -> bool {
        matches!(self.kind, NodeKind::Folder(_))
    }

    pub fn is_file(&self) -> bool {
        matches!(self.kind, NodeKind::File)
    }

    pub fn tag(&self) -> KindTag {
        match self.kind {
            NodeKind::File => KindTag::File,
            NodeKind::Folder(_) => KindTag::Folder,
        }
    }

    pub fn children(&self) -> Option<&Children> {
        match &self.kind {
            NodeKind::Folder(children) => Some(children),
            NodeKind::File => None,
        }
    }

    /// Turn a file into an empty folder. Folders are left untouched.
    ///
    /// Returns true if the node changed.
    pub fn promote(&mut self) -> bool {
        if self.is_file() {
            self.kind = NodeKind::Folder(Children::new());
            true
        } else {
            false
        }
    }

    /// Mutable children, promoting a file first if needed.
    pub fn children_mut(&mut self) -> &mut Children {
        self.promote();
        match &mut self.kind {
            NodeKind::Folder(children) => children,
            NodeKind::File => unreachable!("node was promoted to a folder"),
        }
    }
}

/// The whole hierarchy: the children of an implicit root folder
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tree {
    pub root: Children,
}

impl Tree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Look up a node by its slash-joined path.
    pub fn get(&self, path: &str) -> Option<&Node> {
        let mut segments = path.split('/').map(str::trim).filter(|s| !s.is_empty());
        let first = segments.next()?;
        let mut node = self.root.get(first)?;
        for segment in segments {
            node = node.children()?.get(segment)?;
        }
        Some(node)
    }

    /// Visit every node depth-first, parents before children.
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a Node)) {
        fn walk_children<'a>(children: &'a Children, visit: &mut impl FnMut(&'a Node)) {
            for node in children.values() {
                visit(node);
                if let Some(sub) = node.children() {
                    walk_children(sub, visit);
                }
            }
        }
        walk_children(&self.root, visit);
    }
}
