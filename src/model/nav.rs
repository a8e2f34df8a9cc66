use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use crate::model::node::{Children, Node, Tree};

/// The currently viewed folder, as a stack of segment names.
///
/// An empty stack is the root.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavPath {
    segments: Vec<String>,
}

impl NavPath {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Enter the folder child `name` of the current folder.
    ///
    /// Leaves the state unchanged and returns false when `name` is missing
    /// or is a file.
    pub fn descend(&mut self, tree: &Tree, name: &str) -> bool {
        let is_folder = self
            .resolve(tree)
            .get(name)
            .is_some_and(Node::is_folder);
        if is_folder {
            self.segments.push(name.to_string());
        }
        is_folder
    }

    /// Truncate to the first `depth` segments. Deeper values are a no-op.
    pub fn ascend(&mut self, depth: usize) {
        self.segments.truncate(depth);
    }

    /// Go home.
    pub fn reset(&mut self) {
        self.segments.clear();
    }

    /// Walk the tree from the root. Any missing segment, or a segment that
    /// names a file, yields an empty folder.
    pub fn resolve<'t>(&self, tree: &'t Tree) -> FolderView<'t> {
        let mut current = &tree.root;
        for segment in &self.segments {
            match current.get(segment).and_then(Node::children) {
                Some(children) => current = children,
                None => return FolderView { children: None },
            }
        }
        FolderView {
            children: Some(current),
        }
    }

    /// `(depth, name)` for each crumb; `ascend(depth)` returns to it.
    pub fn breadcrumbs(&self) -> impl Iterator<Item = (usize, &str)> {
        self.segments
            .iter()
            .enumerate()
            .map(|(i, name)| (i + 1, name.as_str()))
    }

    /// Parse a shareable address. Empty segments are dropped, so leading,
    /// trailing and doubled slashes are harmless.
    pub fn from_address(address: &str) -> Self {
        NavPath {
            segments: address
                .split('/')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }

    /// The slash-joined address (empty string for the root).
    pub fn to_address(&self) -> String {
        self.segments.join("/")
    }
}

impl fmt::Display for NavPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_address())
    }
}

impl FromStr for NavPath {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(NavPath::from_address(s))
    }
}

impl<S: Into<String>> FromIterator<S> for NavPath {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        NavPath {
            segments: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// A resolved folder. Unresolvable navigation gives an empty view.
#[derive(Debug, Clone, Copy)]
pub struct FolderView<'t> {
    children: Option<&'t Children>,
}

impl<'t> FolderView<'t> {
    pub fn of(children: &'t Children) -> Self {
        FolderView {
            children: Some(children),
        }
    }

    pub fn empty() -> Self {
        FolderView { children: None }
    }

    /// False when navigation failed to resolve.
    pub fn exists(&self) -> bool {
        self.children.is_some()
    }

    pub fn get(&self, name: &str) -> Option<&'t Node> {
        self.children.and_then(|c| c.get(name))
    }

    pub fn len(&self) -> usize {
        self.children.map_or(0, Children::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Immediate children, in insertion order.
    pub fn entries(self) -> impl Iterator<Item = &'t Node> {
        self.children.into_iter().flat_map(|c| c.values())
    }
}
