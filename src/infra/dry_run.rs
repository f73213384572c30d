//! Emitter that records operations instead of writing them.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::infra::emitter::{EmitError, Emitter};
use crate::infra::format::DataFormat;
use crate::infra::frontmatter::render_document;

/// What an emitter was asked to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    ClearDirectory {
        path: PathBuf,
    },
    MergeDataFile {
        path: PathBuf,
        format: DataFormat,
        /// The patch as it would be merged.
        patch: String,
    },
    CreateDataFile {
        path: PathBuf,
        format: DataFormat,
        contents: String,
    },
    CreateDocument {
        path: PathBuf,
        format: DataFormat,
        contents: String,
    },
}

impl Operation {
    /// Path the operation targets.
    pub fn path(&self) -> &Path {
        match self {
            Operation::ClearDirectory { path }
            | Operation::MergeDataFile { path, .. }
            | Operation::CreateDataFile { path, .. }
            | Operation::CreateDocument { path, .. } => path,
        }
    }

    /// Short verb describing the operation.
    pub fn action(&self) -> &'static str {
        match self {
            Operation::ClearDirectory { .. } => "clear",
            Operation::MergeDataFile { .. } => "merge",
            Operation::CreateDataFile { .. } => "write",
            Operation::CreateDocument { .. } => "write",
        }
    }
}

/// Records every operation in order, encoding content exactly as the
/// filesystem emitter would, without touching disk.
#[derive(Debug, Default)]
pub struct DryRunEmitter {
    operations: Vec<Operation>,
}

impl DryRunEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Operations recorded so far, in call order.
    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    /// Returns the contents recorded for a created file, if any.
    pub fn contents(&self, path: impl AsRef<Path>) -> Option<&str> {
        let path = path.as_ref();
        self.operations.iter().rev().find_map(|op| match op {
            Operation::CreateDataFile { path: p, contents, .. }
            | Operation::CreateDocument { path: p, contents, .. }
                if p == path =>
            {
                Some(contents.as_str())
            }
            _ => None,
        })
    }
}

impl Emitter for DryRunEmitter {
    fn merge_into_data_file<T: Serialize + ?Sized>(
        &mut self,
        path: &Path,
        format: DataFormat,
        patch: &T,
    ) -> Result<(), EmitError> {
        let patch = format.encode(patch).map_err(|e| EmitError::format(path, e))?;
        self.operations.push(Operation::MergeDataFile {
            path: path.to_path_buf(),
            format,
            patch,
        });
        Ok(())
    }

    fn create_data_file<T: Serialize + ?Sized>(
        &mut self,
        path: &Path,
        format: DataFormat,
        content: &T,
    ) -> Result<(), EmitError> {
        let contents = format.encode(content).map_err(|e| EmitError::format(path, e))?;
        self.operations.push(Operation::CreateDataFile {
            path: path.to_path_buf(),
            format,
            contents,
        });
        Ok(())
    }

    fn create_document<T: Serialize + ?Sized>(
        &mut self,
        path: &Path,
        format: DataFormat,
        frontmatter: &T,
        content: &str,
    ) -> Result<(), EmitError> {
        let contents =
            render_document(format, frontmatter, content).map_err(|e| EmitError::format(path, e))?;
        self.operations.push(Operation::CreateDocument {
            path: path.to_path_buf(),
            format,
            contents,
        });
        Ok(())
    }

    fn clear_directory(&mut self, path: &Path) -> Result<(), EmitError> {
        self.operations.push(Operation::ClearDirectory {
            path: path.to_path_buf(),
        });
        Ok(())
    }
}
