use std::cmp::Ordering;

use feruca::Collator;

use crate::model::filter::FilterState;
use crate::model::nav::FolderView;
use crate::model::node::Node;
use crate::ops::tokens;

/// Compute the visible entries of a folder.
///
/// Stages run in a fixed order: search, then filter, then sort. The same
/// folder, search string and filter always give the same result.
pub fn compute_view<'t>(
    folder: FolderView<'t>,
    search: &str,
    filter: &FilterState,
) -> Vec<&'t Node> {
    let mut entries: Vec<&'t Node> = folder.entries().collect();
    search_in_place(&mut entries, search);
    filter_in_place(&mut entries, filter);
    sort_in_place(&mut entries);
    entries
}

/// Keep entries whose name or path contains `search`, ignoring case.
///
/// A blank search keeps everything.
pub fn search_in_place(entries: &mut Vec<&Node>, search: &str) {
    if search.trim().is_empty() {
        return;
    }
    let needle = search.to_lowercase();
    entries.retain(|node| {
        node.name.to_lowercase().contains(&needle) || node.path.to_lowercase().contains(&needle)
    });
}

/// Apply the session and year filter to files. Folders always pass.
///
/// The default filter is the identity and is skipped.
pub fn filter_in_place(entries: &mut Vec<&Node>, filter: &FilterState) {
    if filter.is_default() {
        return;
    }
    entries.retain(|node| node.is_folder() || tokens::file_matches(&node.path, filter));
}

/// Folders first, then by name.
pub fn sort_in_place(entries: &mut [&Node]) {
    let mut collator = Collator::default();
    entries.sort_by(|a, b| compare_entries(&mut collator, a, b));
}

pub fn compare_entries(collator: &mut Collator, a: &Node, b: &Node) -> Ordering {
    a.tag()
        .cmp(&b.tag())
        .then_with(|| compare_names(collator, &a.name, &b.name))
}

/// Unicode collation order (CLDR root). Names the collator calls equal
/// fall back to the raw strings so the order is total.
pub fn compare_names(collator: &mut Collator, a: &str, b: &str) -> Ordering {
    collator.collate(a, b).then_with(|| a.cmp(b))
}
