use std::collections::HashSet;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use tempfile::NamedTempFile;

use crate::model::library::{FavoriteEntry, RECENT_LIMIT, RecentEntry};

const FAVORITES_FILE: &str = "favorites.json";
const RECENT_FILE: &str = "recent.json";

/// Error type for store writes. Reads never fail.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("could not write {path}: {source}")]
    WriteError { path: PathBuf, source: io::Error },
    #[error("could not serialize {path}: {source}")]
    SerializeError {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Favorites and recently opened files, persisted as two JSON arrays.
///
/// Loaded once with [`LibraryStore::open`]; every mutation is written back
/// before the method returns.
#[derive(Debug, Clone)]
pub struct LibraryStore {
    dir: PathBuf,
    favorites: Vec<FavoriteEntry>,
    recents: Vec<RecentEntry>,
}

impl LibraryStore {
    /// Load both collections from `dir`. Missing or corrupt files load as
    /// empty collections. Repeated paths keep their first entry.
    pub fn open(dir: &Path) -> Self {
        let mut favorites: Vec<FavoriteEntry> = read_list(&dir.join(FAVORITES_FILE));
        keep_first_per_path(&mut favorites, |f| f.path.as_str());

        let mut recents: Vec<RecentEntry> = read_list(&dir.join(RECENT_FILE));
        keep_first_per_path(&mut recents, |r| r.path.as_str());
        recents.truncate(RECENT_LIMIT);

        LibraryStore {
            dir: dir.to_path_buf(),
            favorites,
            recents,
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Favorites in the order they were added
    pub fn favorites(&self) -> &[FavoriteEntry] {
        &self.favorites
    }

    /// Recent files, newest first
    pub fn recents(&self) -> &[RecentEntry] {
        &self.recents
    }

    pub fn is_favorite(&self, path: &str) -> bool {
        self.favorites.iter().any(|f| f.path == path)
    }

    /// Add `path` to the favorites, or remove it if already there.
    ///
    /// Returns true if the path is a favorite afterwards.
    pub fn toggle_favorite(&mut self, path: &str, name: &str) -> Result<bool, StoreError> {
        self.toggle_favorite_at(path, name, now_millis())
    }

    pub fn toggle_favorite_at(
        &mut self,
        path: &str,
        name: &str,
        now: i64,
    ) -> Result<bool, StoreError> {
        let added = if self.is_favorite(path) {
            self.favorites.retain(|f| f.path != path);
            false
        } else {
            self.favorites.push(FavoriteEntry {
                name: name.to_string(),
                path: path.to_string(),
                added_at: now,
            });
            true
        };
        write_list(&self.dir.join(FAVORITES_FILE), &self.favorites)?;
        Ok(added)
    }

    /// Move `path` to the front of the recent list, evicting the oldest
    /// entry past the limit.
    pub fn record_recent(&mut self, path: &str, name: &str) -> Result<(), StoreError> {
        self.record_recent_at(path, name, now_millis())
    }

    pub fn record_recent_at(&mut self, path: &str, name: &str, now: i64) -> Result<(), StoreError> {
        self.recents.retain(|r| r.path != path);
        self.recents.insert(
            0,
            RecentEntry {
                name: name.to_string(),
                path: path.to_string(),
                accessed_at: now,
            },
        );
        self.recents.truncate(RECENT_LIMIT);
        write_list(&self.dir.join(RECENT_FILE), &self.recents)
    }
}

fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Read a JSON array. Missing → empty. Corrupt → backed up as `.bak`, empty.
fn read_list<T: DeserializeOwned>(path: &Path) -> Vec<T> {
    let Ok(content) = fs::read_to_string(path) else {
        return Vec::new();
    };
    match serde_json::from_str(&content) {
        Ok(list) => list,
        Err(e) => {
            let bak = path.with_extension("json.bak");
            let _ = fs::copy(path, &bak);
            tracing::warn!(
                path = %path.display(),
                backup = %bak.display(),
                error = %e,
                "could not parse stored list, starting empty"
            );
            Vec::new()
        }
    }
}

fn keep_first_per_path<T>(list: &mut Vec<T>, path: impl Fn(&T) -> &str) {
    let mut seen = HashSet::new();
    list.retain(|entry| seen.insert(path(entry).to_string()));
}

/// Overwrite `path` with the list, atomically.
fn write_list<T: Serialize>(path: &Path, list: &[T]) -> Result<(), StoreError> {
    let content = serde_json::to_string_pretty(list).map_err(|e| StoreError::SerializeError {
        path: path.to_path_buf(),
        source: e,
    })?;
    atomic_write(path, content.as_bytes()).map_err(|e| StoreError::WriteError {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Write `content` to `path` atomically using a temp file + rename.
fn atomic_write(path: &Path, content: &[u8]) -> io::Result<()> {
    let dir = path.parent().unwrap_or(Path::new("."));
    fs::create_dir_all(dir)?;
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
