//! Isolated site directory for a test.

#![allow(dead_code)]

use super::CmsCommand;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated test environment with a temporary site root.
///
/// The directory is removed when the `TestEnv` is dropped. A separate empty
/// directory stands in for the user config directory so a developer's own
/// configuration never leaks into a test.
pub struct TestEnv {
    root: TempDir,
    config_home: TempDir,
}

impl TestEnv {
    /// Creates a new, empty site root.
    pub fn new() -> Self {
        Self {
            root: TempDir::new().expect("Failed to create temp directory"),
            config_home: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a site root with `fixture` copied in as `snapshot.json`
    /// (or `snapshot.yml` for YAML fixtures).
    pub fn with_snapshot(fixture: &Path) -> Self {
        let env = Self::new();
        let name = match fixture.extension().and_then(|e| e.to_str()) {
            Some("yml") | Some("yaml") => "snapshot.yml",
            _ => "snapshot.json",
        };
        std::fs::copy(fixture, env.path(name)).expect("Failed to copy fixture");
        env
    }

    /// Returns the site root.
    pub fn root(&self) -> &Path {
        self.root.path()
    }

    /// Returns the absolute path of `name` inside the root.
    pub fn path(&self, name: &str) -> PathBuf {
        self.root().join(name)
    }

    /// Creates a command with `--root` set to this environment.
    pub fn cmd(&self) -> CmsCommand {
        CmsCommand::new()
            .config_home(self.config_home.path())
            .root(self.root())
    }

    /// Writes a file inside the root, creating parent directories.
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.path(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directory");
        }
        std::fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Reads a file inside the root.
    pub fn read_file(&self, name: &str) -> String {
        std::fs::read_to_string(self.path(name))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", name, e))
    }

    /// Returns the sorted file names in a directory inside the root.
    pub fn list_dir(&self, name: &str) -> Vec<String> {
        let mut names: Vec<_> = std::fs::read_dir(self.path(name))
            .unwrap_or_else(|e| panic!("Failed to list {}: {}", name, e))
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
