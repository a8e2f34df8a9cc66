use std::collections::HashSet;

use serde::Serialize;

use crate::model::catalog::Catalog;
use crate::model::node::Tree;
use crate::parse::ParsedManifest;

/// Maximum number of missing paths listed in a report.
pub const MISSING_PREVIEW_LIMIT: usize = 10;

/// Structured result from `pdx check`, suitable for --json output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IntegrityReport {
    /// Distinct leaf paths reachable in the tree
    pub files_in_tree: usize,
    /// Accepted manifest records (duplicates included)
    pub manifest_paths: usize,
    /// Manifest records whose path is not a leaf in the tree
    pub missing: usize,
    /// The first few missing paths, in manifest order
    pub missing_preview: Vec<String>,
    /// Lines the parser could not interpret
    pub malformed_lines: usize,
}

impl IntegrityReport {
    /// True when every manifest path is reachable as a leaf.
    pub fn is_consistent(&self) -> bool {
        self.missing == 0
    }
}

/// Collect the full path of every file node in the tree.
pub fn leaf_paths(tree: &Tree) -> HashSet<&str> {
    let mut leaves = HashSet::new();
    tree.walk(&mut |node| {
        if node.is_file() {
            leaves.insert(node.path.as_str());
        }
    });
    leaves
}

/// Compare the manifest against the tree built from it.
///
/// This is a read-only operation. A path goes missing when a longer path
/// turned it into a folder.
pub fn check_integrity(tree: &Tree, manifest: &ParsedManifest) -> IntegrityReport {
    let leaves = leaf_paths(tree);

    let missing: Vec<&str> = manifest
        .path_strings()
        .filter(|path| !leaves.contains(path))
        .collect();

    let report = IntegrityReport {
        files_in_tree: leaves.len(),
        manifest_paths: manifest.paths.len(),
        missing: missing.len(),
        missing_preview: missing
            .iter()
            .take(MISSING_PREVIEW_LIMIT)
            .map(|p| p.to_string())
            .collect(),
        malformed_lines: manifest.malformed_count(),
    };

    if report.is_consistent() {
        tracing::info!(
            files = report.files_in_tree,
            manifest = report.manifest_paths,
            "all manifest paths are present in the tree"
        );
    } else {
        tracing::warn!(
            missing = report.missing,
            preview = ?report.missing_preview,
            "manifest paths missing from the tree"
        );
    }

    report
}

/// Check a loaded catalog.
pub fn check_catalog(catalog: &Catalog) -> IntegrityReport {
    check_integrity(&catalog.tree, &catalog.manifest)
}
