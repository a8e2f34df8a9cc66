//! Terminal column math for listing names.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

const ELLIPSIS: char = '\u{2026}';

/// Terminal cells a name occupies.
pub fn cell_width(name: &str) -> usize {
    UnicodeWidthStr::width(name)
}

/// Clip `name` to at most `cells` cells, ending in `…` when clipped.
/// Never splits a grapheme cluster.
pub fn clip(name: &str, cells: usize) -> String {
    if cell_width(name) <= cells {
        return name.to_string();
    }
    let Some(room) = cells.checked_sub(1) else {
        return String::new();
    };

    let mut used = 0;
    let mut clipped: String = name
        .graphemes(true)
        .take_while(|g| {
            used += cell_width(g);
            used <= room
        })
        .collect();
    clipped.push(ELLIPSIS);
    clipped
}

/// A fixed-width column: clipped when long, space-padded when short.
pub fn column(name: &str, cells: usize) -> String {
    let clipped = clip(name, cells);
    let pad = cells.saturating_sub(cell_width(&clipped));
    format!("{}{}", clipped, " ".repeat(pad))
}
