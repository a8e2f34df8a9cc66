use serde::{Deserialize, Serialize};

/// Maximum number of recent entries kept.
pub const RECENT_LIMIT: usize = 10;

/// A favorited file. Unique by `path`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteEntry {
    pub name: String,
    pub path: String,
    /// Unix epoch milliseconds
    pub added_at: i64,
}

/// A recently opened file. Unique by `path`, newest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentEntry {
    pub name: String,
    pub path: String,
    /// Unix epoch milliseconds
    pub accessed_at: i64,
}
