//! Filesystem emitter with atomic writes.

use std::io::{self, Write as IoWrite};
use std::path::{Path, PathBuf};

use serde::Serialize;
use tempfile::NamedTempFile;

use crate::infra::emitter::{EmitError, Emitter};
use crate::infra::format::DataFormat;
use crate::infra::frontmatter::render_document;

/// Writes generated files below a project root.
///
/// Every file is written to a temporary sibling and renamed into place, so a
/// failed run never leaves a half-written file behind. Parent directories are
/// created as needed.
#[derive(Debug, Clone)]
pub struct FsEmitter {
    root: PathBuf,
    written: Vec<PathBuf>,
}

impl FsEmitter {
    /// Creates an emitter rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            written: Vec::new(),
        }
    }

    /// Returns the project root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Files written so far, relative to the root, in write order.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        self.root.join(path)
    }
}

impl Emitter for FsEmitter {
    fn merge_into_data_file<T: Serialize + ?Sized>(
        &mut self,
        path: &Path,
        format: DataFormat,
        patch: &T,
    ) -> Result<(), EmitError> {
        let full_path = self.resolve(path);
        let existing = match std::fs::read_to_string(&full_path) {
            Ok(contents) => Some(contents),
            Err(e) if e.kind() == io::ErrorKind::NotFound => None,
            Err(e) => return Err(EmitError::io(&full_path, e)),
        };

        let merged = format
            .merge(existing.as_deref(), patch)
            .map_err(|e| EmitError::format(&full_path, e))?;
        write_atomic(&full_path, &merged)?;
        self.written.push(path.to_path_buf());
        log::debug!("merged {} into {}", format, full_path.display());
        Ok(())
    }

    fn create_data_file<T: Serialize + ?Sized>(
        &mut self,
        path: &Path,
        format: DataFormat,
        content: &T,
    ) -> Result<(), EmitError> {
        let full_path = self.resolve(path);
        let encoded = format
            .encode(content)
            .map_err(|e| EmitError::format(&full_path, e))?;
        write_atomic(&full_path, &encoded)?;
        self.written.push(path.to_path_buf());
        log::debug!("wrote {}", full_path.display());
        Ok(())
    }

    fn create_document<T: Serialize + ?Sized>(
        &mut self,
        path: &Path,
        format: DataFormat,
        frontmatter: &T,
        content: &str,
    ) -> Result<(), EmitError> {
        let full_path = self.resolve(path);
        let document = render_document(format, frontmatter, content)
            .map_err(|e| EmitError::format(&full_path, e))?;
        write_atomic(&full_path, &document)?;
        self.written.push(path.to_path_buf());
        log::debug!("wrote {}", full_path.display());
        Ok(())
    }

    fn clear_directory(&mut self, path: &Path) -> Result<(), EmitError> {
        let full_path = self.resolve(path);
        match std::fs::remove_dir_all(&full_path) {
            Ok(()) => log::debug!("cleared {}", full_path.display()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => return Err(EmitError::io(&full_path, e)),
        }
        std::fs::create_dir_all(&full_path).map_err(|e| EmitError::io(&full_path, e))
    }
}

/// Writes `contents` to `path` through a temporary file and atomic rename.
fn write_atomic(path: &Path, contents: &str) -> Result<(), EmitError> {
    let parent = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(parent).map_err(|e| EmitError::io(parent, e))?;

    let mut temp = NamedTempFile::new_in(parent).map_err(|e| EmitError::io(path, e))?;
    temp.write_all(contents.as_bytes())
        .map_err(|e| EmitError::io(path, e))?;

    temp.persist(path).map_err(|e| EmitError::AtomicWrite {
        path: path.into(),
        source: e.error,
    })?;

    Ok(())
}
