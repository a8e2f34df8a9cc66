use crate::model::node::{Node, Tree};
use crate::parse::ManifestPath;

/// What inserting one path did to the tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InsertOutcome {
    /// Nodes created for this path
    pub created: usize,
    /// Files turned into folders because this path runs through them
    pub promoted: usize,
    /// The leaf already existed (as a file or as a folder)
    pub existing_leaf: bool,
}

/// Build the tree from manifest paths, one segment at a time.
///
/// The result's shape and node kinds do not depend on input order: a node
/// that is both a listed leaf and an ancestor of another leaf is a folder.
pub fn build_tree(paths: &[ManifestPath]) -> Tree {
    let mut tree = Tree::new();
    let mut created = 0;
    let mut promoted = 0;
    let mut existing = 0;

    for entry in paths {
        let outcome = insert_path(&mut tree, &entry.segments);
        created += outcome.created;
        promoted += outcome.promoted;
        if outcome.existing_leaf {
            existing += 1;
        }
    }

    tracing::debug!(
        paths = paths.len(),
        nodes = created,
        promoted,
        existing_leaves = existing,
        "built tree"
    );
    tree
}

/// Insert a single path (non-empty segments) into the tree.
///
/// Missing segments are created as folders, except the last which is a
/// file. A file met before the last segment is promoted to a folder. An
/// existing node at the last segment is left as it is, so folder status
/// always wins over leaf status.
pub fn insert_path(tree: &mut Tree, segments: &[String]) -> InsertOutcome {
    let mut outcome = InsertOutcome::default();
    let Some(last) = segments.len().checked_sub(1) else {
        return outcome;
    };

    let mut current = &mut tree.root;
    for (idx, segment) in segments.iter().enumerate() {
        let is_last = idx == last;
        let mut made = false;
        let node = current.entry(segment.clone()).or_insert_with(|| {
            made = true;
            let path = segments[..=idx].join("/");
            if is_last {
                Node::file(segment, path)
            } else {
                Node::folder(segment, path)
            }
        });
        if made {
            outcome.created += 1;
        }

        if is_last {
            outcome.existing_leaf = !made;
            break;
        }

        if node.promote() {
            outcome.promoted += 1;
        }
        current = node.children_mut();
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::node::NodeKind;
    use crate::parse::parse_manifest;

    fn build(text: &str) -> Tree {
        build_tree(&parse_manifest(text).paths)
    }

    fn kind_at(tree: &Tree, path: &str) -> Option<&'static str> {
        tree.get(path).map(|n| match n.kind {
            NodeKind::File => "file",
            NodeKind::Folder(_) => "folder",
        })
    }

    #[test]
    fn builds_nested_folders_and_files() {
        let tree = build("2023/w/paper1_qp.pdf\n2023/w/paper1_ms.pdf\n2022/s/paper2_qp.pdf\n");
        assert_eq!(kind_at(&tree, "2023"), Some("folder"));
        assert_eq!(kind_at(&tree, "2023/w"), Some("folder"));
        assert_eq!(kind_at(&tree, "2023/w/paper1_qp.pdf"), Some("file"));
        assert_eq!(kind_at(&tree, "2023/w/paper1_ms.pdf"), Some("file"));
        assert_eq!(kind_at(&tree, "2022/s/paper2_qp.pdf"), Some("file"));
        assert_eq!(tree.get("2023/w").unwrap().children().unwrap().len(), 2);
    }

    #[test]
    fn node_paths_join_ancestors() {
        let tree = build("a/b/c.pdf\n");
        let c = tree.get("a/b/c.pdf").unwrap();
        assert_eq!(c.name, "c.pdf");
        assert_eq!(c.path, "a/b/c.pdf");
        assert_eq!(tree.get("a/b").unwrap().path, "a/b");
    }

    #[test]
    fn file_promoted_when_longer_path_follows() {
        let tree = build("a/b\na/b/c\n");
        assert_eq!(kind_at(&tree, "a"), Some("folder"));
        assert_eq!(kind_at(&tree, "a/b"), Some("folder"));
        assert_eq!(kind_at(&tree, "a/b/c"), Some("file"));
    }

    #[test]
    fn folder_kept_when_leaf_follows() {
        let tree = build("a/b/c\na/b\n");
        assert_eq!(kind_at(&tree, "a/b"), Some("folder"));
        assert_eq!(kind_at(&tree, "a/b/c"), Some("file"));
    }

    #[test]
    fn promotion_is_order_independent() {
        assert_eq!(build("a/b\na/b/c\n"), build("a/b/c\na/b\n"));
    }

    #[test]
    fn insert_reports_outcome() {
        let mut tree = Tree::new();
        let seg = |s: &str| s.split('/').map(str::to_string).collect::<Vec<_>>();

        let first = insert_path(&mut tree, &seg("a/b"));
        assert_eq!(first.created, 2);
        assert!(!first.existing_leaf);

        let promote = insert_path(&mut tree, &seg("a/b/c"));
        assert_eq!(promote.created, 1);
        assert_eq!(promote.promoted, 1);

        let again = insert_path(&mut tree, &seg("a/b"));
        assert_eq!(again.created, 0);
        assert!(again.existing_leaf);
        assert_eq!(kind_at(&tree, "a/b"), Some("folder"));

        assert_eq!(insert_path(&mut tree, &[]), InsertOutcome::default());
    }

    #[test]
    fn duplicate_lines_are_harmless() {
        let tree = build("x/y.pdf\nx/y.pdf\n");
        assert_eq!(tree.get("x").unwrap().children().unwrap().len(), 1);
    }
}
