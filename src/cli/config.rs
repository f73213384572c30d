//! Configuration file support.

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::domain::SpaceRuns;
use crate::export::ExportOptions;
use crate::infra::DataFormat;

/// Name of the per-project configuration file, looked up in the project root.
pub const PROJECT_CONFIG_FILE: &str = "cms-export.toml";

/// Snapshot file used when neither the CLI nor the config names one.
pub const DEFAULT_SNAPSHOT: &str = "snapshot.json";

/// Application configuration loaded from config file.
#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Snapshot file, relative to the project root
    pub snapshot: Option<PathBuf>,

    /// Locale to export
    pub locale: Option<String>,

    /// Hugo config files to merge the site title and language into
    pub hugo_configs: Option<Vec<PathBuf>>,

    /// Frontmatter format for content documents
    pub frontmatter: Option<DataFormat>,

    /// Hyphenate every run of spaces in social profile types, not just the first
    pub hyphenate_all_spaces: bool,
}

impl Config {
    /// Load configuration for a project.
    ///
    /// Lookup order:
    /// 1. `explicit` path (must exist)
    /// 2. `<root>/cms-export.toml`
    /// 3. `~/.config/cms-export/config.toml`
    ///
    /// Returns default config if no file is found.
    pub fn load(explicit: Option<&Path>, root: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            if !path.exists() {
                bail!("config file not found: {}", path.display());
            }
            return Self::load_from(path);
        }

        let project = root.join(PROJECT_CONFIG_FILE);
        if project.exists() {
            return Self::load_from(&project);
        }

        let global = Self::config_path();
        if global.exists() {
            return Self::load_from(&global);
        }

        Ok(Self::default())
    }

    fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;

        let config = toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", path.display()))?;
        log::info!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Returns the path to the user-wide config file.
    ///
    /// Default: `~/.config/cms-export/config.toml`
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("cms-export")
            .join("config.toml")
    }

    /// Resolve the snapshot path, with CLI argument taking precedence.
    ///
    /// Precedence order:
    /// 1. CLI `--snapshot` argument (as given)
    /// 2. Config file `snapshot` setting (relative to the root)
    /// 3. `<root>/snapshot.json`
    pub fn snapshot_path(&self, cli_snapshot: Option<&PathBuf>, root: &Path) -> PathBuf {
        cli_snapshot.cloned().unwrap_or_else(|| {
            root.join(
                self.snapshot
                    .as_deref()
                    .unwrap_or_else(|| Path::new(DEFAULT_SNAPSHOT)),
            )
        })
    }

    /// Resolve the requested locale, with CLI argument taking precedence.
    pub fn locale(&self, cli_locale: Option<&String>) -> Option<String> {
        cli_locale.cloned().or_else(|| self.locale.clone())
    }

    /// Build export options, with the CLI frontmatter format taking precedence.
    pub fn export_options(&self, cli_frontmatter: Option<DataFormat>) -> ExportOptions {
        let defaults = ExportOptions::default();
        ExportOptions {
            hugo_configs: self.hugo_configs.clone().unwrap_or(defaults.hugo_configs),
            frontmatter_format: cli_frontmatter
                .or(self.frontmatter)
                .unwrap_or(defaults.frontmatter_format),
            space_runs: if self.hyphenate_all_spaces {
                SpaceRuns::All
            } else {
                SpaceRuns::First
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_has_no_snapshot() {
        let config = Config::default();
        assert!(config.snapshot.is_none());
        assert!(!config.hyphenate_all_spaces);
    }

    #[test]
    fn parses_all_keys() {
        let config: Config = toml::from_str(
            r#"
            snapshot = "dump/content.yml"
            locale = "it"
            hugo_configs = ["hugo.toml"]
            frontmatter = "toml"
            hyphenate_all_spaces = true
            "#,
        )
        .unwrap();

        assert_eq!(config.snapshot, Some(PathBuf::from("dump/content.yml")));
        assert_eq!(config.locale.as_deref(), Some("it"));
        assert_eq!(config.hugo_configs, Some(vec![PathBuf::from("hugo.toml")]));
        assert_eq!(config.frontmatter, Some(DataFormat::Toml));
        assert!(config.hyphenate_all_spaces);
    }

    #[test]
    fn snapshot_prefers_cli_arg() {
        let config = Config {
            snapshot: Some(PathBuf::from("from-config.json")),
            ..Default::default()
        };
        let cli = PathBuf::from("/cli/dump.json");
        assert_eq!(
            config.snapshot_path(Some(&cli), Path::new("/site")),
            PathBuf::from("/cli/dump.json")
        );
    }

    #[test]
    fn snapshot_falls_back_to_config_then_default() {
        let config = Config {
            snapshot: Some(PathBuf::from("from-config.json")),
            ..Default::default()
        };
        assert_eq!(
            config.snapshot_path(None, Path::new("/site")),
            PathBuf::from("/site/from-config.json")
        );
        assert_eq!(
            Config::default().snapshot_path(None, Path::new("/site")),
            PathBuf::from("/site/snapshot.json")
        );
    }

    #[test]
    fn locale_prefers_cli_arg() {
        let config = Config {
            locale: Some("it".to_string()),
            ..Default::default()
        };
        assert_eq!(config.locale(Some(&"fr".to_string())), Some("fr".to_string()));
        assert_eq!(config.locale(None), Some("it".to_string()));
        assert_eq!(Config::default().locale(None), None);
    }

    #[test]
    fn export_options_from_config() {
        let config = Config {
            hugo_configs: Some(vec![PathBuf::from("hugo.toml")]),
            frontmatter: Some(DataFormat::Json),
            hyphenate_all_spaces: true,
            ..Default::default()
        };
        let options = config.export_options(None);
        assert_eq!(options.hugo_configs, vec![PathBuf::from("hugo.toml")]);
        assert_eq!(options.frontmatter_format, DataFormat::Json);
        assert_eq!(options.space_runs, SpaceRuns::All);

        let options = config.export_options(Some(DataFormat::Toml));
        assert_eq!(options.frontmatter_format, DataFormat::Toml);
    }

    #[test]
    fn export_options_defaults() {
        assert_eq!(Config::default().export_options(None), ExportOptions::default());
    }

    #[test]
    fn loads_project_config() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join(PROJECT_CONFIG_FILE), "locale = \"de\"\n").unwrap();

        let config = Config::load(None, temp.path()).unwrap();
        assert_eq!(config.locale.as_deref(), Some("de"));
    }

    #[test]
    fn explicit_config_must_exist() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("nope.toml");
        let err = Config::load(Some(&missing), temp.path()).unwrap_err();
        assert!(err.to_string().contains("config file not found"));
    }

    #[test]
    fn invalid_config_reports_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("bad.toml");
        std::fs::write(&path, "locale = [").unwrap();
        let err = Config::load(Some(&path), temp.path()).unwrap_err();
        assert!(format!("{err:#}").contains("bad.toml"));
    }

    #[test]
    fn config_path_is_in_config_dir() {
        let path = Config::config_path();
        assert!(path.ends_with("cms-export/config.toml"));
    }
}
