//! Read-only catalog and settings sources.

use std::fs;
use std::path::{Path, PathBuf};

use catalog_core::{Catalog, Settings};
use thiserror::Error;
use tracing::{debug, info};

const SAMPLE_CATALOG: &str = include_str!("../data/sample_catalog.json");

pub type StorageResult<T> = Result<T, StorageError>;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

pub fn load_catalog(path: impl AsRef<Path>) -> StorageResult<Catalog> {
    let path = path.as_ref();
    let catalog: Catalog = read_json(path)?;
    info!(
        path = %path.display(),
        books = catalog.books.len(),
        authors = catalog.authors.len(),
        genres = catalog.genres.len(),
        "loaded catalog"
    );
    Ok(catalog)
}

/// The catalog bundled with the binary, used when no catalog file is configured.
pub fn sample_catalog() -> StorageResult<Catalog> {
    serde_json::from_str(SAMPLE_CATALOG).map_err(|source| StorageError::Parse {
        path: PathBuf::from("<bundled sample catalog>"),
        source,
    })
}

/// Missing files yield defaults; anything present must parse.
pub fn load_settings(path: impl AsRef<Path>) -> StorageResult<Settings> {
    let path = path.as_ref();
    if !path.exists() {
        debug!(path = %path.display(), "no settings file, using defaults");
        return Ok(Settings::default());
    }

    let mut settings: Settings = read_json(path)?;
    settings.normalize();
    Ok(settings)
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> StorageResult<T> {
    let contents = fs::read_to_string(path).map_err(|source| StorageError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| StorageError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
