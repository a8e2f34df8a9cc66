use crate::model::node::Tree;
use crate::ops::hierarchy::build_tree;
use crate::parse::{ParsedManifest, parse_manifest};

/// A loaded manifest: the parsed paths and the tree built from them.
///
/// Built in one step and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub tree: Tree,
    pub manifest: ParsedManifest,
}

impl Catalog {
    /// Parse manifest text and build the tree.
    pub fn from_text(text: &str) -> Self {
        let manifest = parse_manifest(text);
        let tree = build_tree(&manifest.paths);
        Catalog { tree, manifest }
    }
}
