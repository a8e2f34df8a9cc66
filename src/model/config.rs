use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration from config.toml
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub store: StoreConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Manifest file, relative to the working directory
    #[serde(default = "default_manifest")]
    pub manifest: PathBuf,
    /// Delivery base address that file paths are appended to
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        SourceConfig {
            manifest: default_manifest(),
            base_url: default_base_url(),
        }
    }
}

fn default_manifest() -> PathBuf {
    PathBuf::from("list_of_all_in_bucket.csv")
}

fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Directory holding favorites.json and recent.json.
    /// If absent, the platform data directory is used.
    #[serde(default)]
    pub dir: Option<PathBuf>,
}
