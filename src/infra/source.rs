//! Content source port and the snapshot-file adapter.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::domain::ContentSnapshot;

/// Errors while loading a content snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("I/O error for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid YAML in {path}: {source}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("unsupported snapshot format for {path} (expected .json, .yml or .yaml)")]
    UnsupportedFormat { path: PathBuf },
}

/// Provides the content graph for one export run.
pub trait ContentSource {
    /// Loads a complete snapshot.
    fn load(&self) -> Result<ContentSnapshot, SnapshotError>;
}

/// An already-loaded snapshot is its own source.
impl ContentSource for ContentSnapshot {
    fn load(&self) -> Result<ContentSnapshot, SnapshotError> {
        Ok(self.clone())
    }
}

/// A snapshot dumped from the CMS to a JSON or YAML file.
#[derive(Debug, Clone)]
pub struct SnapshotFile {
    path: PathBuf,
}

impl SnapshotFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ContentSource for SnapshotFile {
    fn load(&self) -> Result<ContentSnapshot, SnapshotError> {
        let path = &self.path;
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        let contents = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => SnapshotError::NotFound { path: path.clone() },
            _ => SnapshotError::Io {
                path: path.clone(),
                source: e,
            },
        })?;

        let snapshot = match extension.as_deref() {
            Some("json") => serde_json::from_str(&contents).map_err(|e| SnapshotError::Json {
                path: path.clone(),
                source: e,
            })?,
            Some("yml" | "yaml") => {
                serde_yaml::from_str(&contents).map_err(|e| SnapshotError::Yaml {
                    path: path.clone(),
                    source: e,
                })?
            }
            _ => return Err(SnapshotError::UnsupportedFormat { path: path.clone() }),
        };

        log::info!("loaded snapshot from {}", path.display());
        Ok(snapshot)
    }
}
