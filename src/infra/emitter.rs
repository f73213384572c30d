//! File emission port.
//!
//! The export never touches the filesystem directly: every effect goes through
//! an [`Emitter`]. Paths are relative to the emitter's root.

use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

use crate::infra::format::{DataFormat, FormatError};

/// Errors while emitting files.
#[derive(Debug, Error)]
pub enum EmitError {
    #[error("I/O error for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("atomic write failed for {path}: {source}")]
    AtomicWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to encode {path}: {source}")]
    Format {
        path: PathBuf,
        #[source]
        source: FormatError,
    },
}

impl EmitError {
    pub(crate) fn io(path: &Path, source: io::Error) -> Self {
        EmitError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn format(path: &Path, source: FormatError) -> Self {
        EmitError::Format {
            path: path.into(),
            source,
        }
    }
}

/// Destination for generated files.
pub trait Emitter {
    /// Shallow-merges `patch` into an existing structured file, creating it if
    /// missing. Keys not named by the patch are preserved.
    fn merge_into_data_file<T: Serialize + ?Sized>(
        &mut self,
        path: &Path,
        format: DataFormat,
        patch: &T,
    ) -> Result<(), EmitError>;

    /// Writes a structured data file wholesale.
    fn create_data_file<T: Serialize + ?Sized>(
        &mut self,
        path: &Path,
        format: DataFormat,
        content: &T,
    ) -> Result<(), EmitError>;

    /// Writes a document: a frontmatter block followed by a raw body.
    fn create_document<T: Serialize + ?Sized>(
        &mut self,
        path: &Path,
        format: DataFormat,
        frontmatter: &T,
        content: &str,
    ) -> Result<(), EmitError>;

    /// Ensures `path` exists as an empty directory, removing prior contents.
    fn clear_directory(&mut self, path: &Path) -> Result<(), EmitError>;

    /// Clears `path` and runs `f` with an emitter rooted at that directory.
    fn with_directory<F>(&mut self, path: &Path, f: F) -> Result<(), EmitError>
    where
        Self: Sized,
        F: FnOnce(&mut Scoped<'_, Self>) -> Result<(), EmitError>,
    {
        self.clear_directory(path)?;
        let mut scoped = Scoped {
            inner: self,
            prefix: path.to_path_buf(),
        };
        f(&mut scoped)
    }
}

/// An emitter whose paths are resolved inside a directory of another emitter.
pub struct Scoped<'a, E> {
    inner: &'a mut E,
    prefix: PathBuf,
}

impl<E> Scoped<'_, E> {
    /// Directory this emitter writes into, relative to the parent's root.
    pub fn prefix(&self) -> &Path {
        &self.prefix
    }
}

impl<E: Emitter> Emitter for Scoped<'_, E> {
    fn merge_into_data_file<T: Serialize + ?Sized>(
        &mut self,
        path: &Path,
        format: DataFormat,
        patch: &T,
    ) -> Result<(), EmitError> {
        let path = self.prefix.join(path);
        self.inner.merge_into_data_file(&path, format, patch)
    }

    fn create_data_file<T: Serialize + ?Sized>(
        &mut self,
        path: &Path,
        format: DataFormat,
        content: &T,
    ) -> Result<(), EmitError> {
        let path = self.prefix.join(path);
        self.inner.create_data_file(&path, format, content)
    }

    fn create_document<T: Serialize + ?Sized>(
        &mut self,
        path: &Path,
        format: DataFormat,
        frontmatter: &T,
        content: &str,
    ) -> Result<(), EmitError> {
        let path = self.prefix.join(path);
        self.inner.create_document(&path, format, frontmatter, content)
    }

    fn clear_directory(&mut self, path: &Path) -> Result<(), EmitError> {
        let path = self.prefix.join(path);
        self.inner.clear_directory(&path)
    }
}
