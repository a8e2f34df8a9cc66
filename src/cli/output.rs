use chrono::{DateTime, Local};
use serde::Serialize;

use crate::model::filter::FilterState;
use crate::model::node::{KindTag, Node};
use crate::ops::links::action_url;
use crate::ops::paper::{self, PaperKind};
use crate::util::unicode;

/// Column width for file names in text listings.
const NAME_COLUMN: usize = 48;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct EntryJson {
    pub name: String,
    pub path: String,
    pub kind: KindTag,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paper: Option<PaperKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub favorite: bool,
}

#[derive(Serialize)]
pub struct ViewJson {
    pub address: String,
    pub breadcrumbs: Vec<String>,
    /// False when the address does not resolve to a folder
    pub found: bool,
    pub search: String,
    pub filter: FilterState,
    /// Entries in the folder before search and filter
    pub total: usize,
    pub entries: Vec<EntryJson>,
}

#[derive(Serialize)]
pub struct UrlJson {
    pub path: String,
    pub url: String,
}

#[derive(Serialize)]
pub struct FavoriteToggleJson {
    pub path: String,
    pub favorite: bool,
}

// ---------------------------------------------------------------------------
// Conversions
// ---------------------------------------------------------------------------

pub fn entry_to_json(node: &Node, base_url: &str, favorite: bool) -> EntryJson {
    let is_file = node.is_file();
    EntryJson {
        name: node.name.clone(),
        path: node.path.clone(),
        kind: node.tag(),
        display_name: is_file.then(|| paper::display_name(&node.name).to_string()),
        paper: is_file.then(|| paper::classify(&node.name)),
        url: is_file.then(|| action_url(base_url, &node.path)),
        favorite,
    }
}

// ---------------------------------------------------------------------------
// Text formatting
// ---------------------------------------------------------------------------

/// `Home / 2023 / w`
pub fn format_breadcrumbs(segments: &[String]) -> String {
    let mut out = String::from("Home");
    for seg in segments {
        out.push_str(" / ");
        out.push_str(seg);
    }
    out
}

/// One line of a folder listing.
pub fn format_entry(node: &Node, favorite: bool) -> String {
    if node.is_folder() {
        return format!("  {}/", node.name);
    }
    let kind = paper::classify(&node.name);
    let star = if favorite { " \u{2605}" } else { "" };
    format!(
        "  {} {:<2}{}",
        unicode::column(paper::display_name(&node.name), NAME_COLUMN),
        kind.badge(),
        star
    )
    .trim_end()
    .to_string()
}

/// Local date and time for an epoch-milliseconds timestamp.
pub fn format_timestamp(millis: i64) -> String {
    match DateTime::from_timestamp_millis(millis) {
        Some(utc) => utc
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M")
            .to_string(),
        None => "-".to_string(),
    }
}
