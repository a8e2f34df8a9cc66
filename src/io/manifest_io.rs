use std::fs;
use std::path::{Path, PathBuf};

use crate::model::catalog::Catalog;

/// Error type for loading a manifest file
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("could not read manifest {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Read a manifest file as text. Invalid UTF-8 is replaced rather than
/// rejected, so bad bytes only spoil the lines they appear on.
pub fn read_manifest(path: &Path) -> Result<String, ManifestError> {
    let bytes = fs::read(path).map_err(|e| ManifestError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Read, parse and build a catalog from a manifest file.
pub fn load_catalog(path: &Path) -> Result<Catalog, ManifestError> {
    let text = read_manifest(path)?;
    let catalog = Catalog::from_text(&text);
    tracing::info!(
        path = %path.display(),
        paths = catalog.manifest.paths.len(),
        malformed = catalog.manifest.malformed_count(),
        "loaded manifest"
    );
    Ok(catalog)
}
