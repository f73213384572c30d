//! The export run: load the snapshot, map every record, hand results to the emitter.

use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

use crate::domain::{Collection, ImageResolver, Page, SiteSettings, SpaceRuns};
use crate::export::transforms::{entry_document, hugo_config_patch, page_document, settings_data};
use crate::infra::{ContentSource, DataFormat, EmitError, Emitter, SnapshotError};

/// Locale used when neither the caller nor the site names one.
pub const FALLBACK_LOCALE: &str = "en";

/// Path of the site-wide data file, relative to the project root.
pub const SETTINGS_DATA_PATH: &str = "data/settings.yml";

/// Hugo configuration files patched with the site title and language.
pub const DEFAULT_HUGO_CONFIGS: [&str; 2] = ["config.dev.toml", "config.prod.toml"];

/// Errors that abort an export run.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error(transparent)]
    Snapshot(#[from] SnapshotError),

    #[error(transparent)]
    Emit(#[from] EmitError),

    #[error("invalid image host '{host}': {source}")]
    ImageHost {
        host: String,
        #[source]
        source: url::ParseError,
    },
}

/// Selects the locale content is exported for.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocaleContext {
    requested: Option<String>,
}

impl LocaleContext {
    /// Uses `locale` when given, otherwise the site's primary locale.
    pub fn new(locale: Option<String>) -> Self {
        Self { requested: locale }
    }

    /// Returns the locale in effect for `site`.
    pub fn current<'a>(&'a self, site: &'a SiteSettings) -> &'a str {
        self.requested
            .as_deref()
            .or_else(|| site.primary_locale())
            .unwrap_or(FALLBACK_LOCALE)
    }
}

/// Settings that shape an export run.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportOptions {
    /// Hugo config files (relative to the root) to merge the site title into.
    pub hugo_configs: Vec<PathBuf>,
    /// Format of the frontmatter block in content documents.
    pub frontmatter_format: DataFormat,
    /// How spaces in social profile types become hyphens.
    pub space_runs: SpaceRuns,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            hugo_configs: DEFAULT_HUGO_CONFIGS.iter().map(PathBuf::from).collect(),
            frontmatter_format: DataFormat::Yaml,
            space_runs: SpaceRuns::First,
        }
    }
}

/// What an export run produced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExportSummary {
    /// Locale the run used.
    pub locale: String,
    /// Structured files that received a merge patch.
    pub data_files_merged: usize,
    /// Structured files written wholesale.
    pub data_files_written: usize,
    /// Singleton page documents written.
    pub pages_written: usize,
    /// Collections exported, in export order.
    pub collections: Vec<CollectionSummary>,
}

impl ExportSummary {
    /// Total number of markdown documents written.
    pub fn documents_written(&self) -> usize {
        self.pages_written + self.collections.iter().map(|c| c.entries).sum::<usize>()
    }
}

/// One exported collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CollectionSummary {
    pub name: String,
    pub directory: String,
    pub entries: usize,
}

/// Runs a full, stateless export.
///
/// Steps run in a fixed order: Hugo config patches, the settings data file,
/// singleton pages, then each collection into a freshly cleared directory.
/// The first failure aborts the run; nothing is retried.
///
/// # Errors
///
/// Returns `ExportError` if the snapshot cannot be loaded, the image host is
/// not a valid URL host, or any file cannot be emitted.
pub fn export<S, E>(
    source: &S,
    emitter: &mut E,
    locale: &LocaleContext,
    options: &ExportOptions,
) -> Result<ExportSummary, ExportError>
where
    S: ContentSource + ?Sized,
    E: Emitter,
{
    let snapshot = source.load()?;
    let host = snapshot.site.image_host();
    let images = ImageResolver::new(host).map_err(|source| ExportError::ImageHost {
        host: host.to_string(),
        source,
    })?;
    let current_locale = locale.current(&snapshot.site);

    let mut summary = ExportSummary {
        locale: current_locale.to_string(),
        ..Default::default()
    };

    let patch = hugo_config_patch(&snapshot.site, current_locale);
    for config in &options.hugo_configs {
        emitter.merge_into_data_file(config, DataFormat::Toml, &patch)?;
        log::debug!("patched {}", config.display());
        summary.data_files_merged += 1;
    }

    let settings = settings_data(&snapshot, options.space_runs);
    emitter.create_data_file(Path::new(SETTINGS_DATA_PATH), DataFormat::Yaml, &settings)?;
    log::debug!("wrote {}", SETTINGS_DATA_PATH);
    summary.data_files_written += 1;

    for page in Page::ALL {
        let Some(record) = snapshot.page(page) else {
            log::info!("no record for {}, skipping", page.path());
            continue;
        };
        let document = page_document(record, page, &images);
        emitter.create_document(
            Path::new(page.path()),
            options.frontmatter_format,
            &document.frontmatter,
            document.content,
        )?;
        log::debug!("wrote {}", page.path());
        summary.pages_written += 1;
    }

    for collection in Collection::ALL {
        let Some(entries) = snapshot.collection(collection) else {
            log::info!("no {} in snapshot, skipping", collection.name());
            continue;
        };

        emitter.with_directory(Path::new(collection.directory()), |dir| {
            for (position, entry) in entries.iter().enumerate() {
                let document = entry_document(entry, position, &images);
                dir.create_document(
                    Path::new(&entry.file_name()),
                    options.frontmatter_format,
                    &document.frontmatter,
                    document.content,
                )?;
                log::debug!("wrote {}/{}", collection.directory(), entry.file_name());
            }
            Ok(())
        })?;

        summary.collections.push(CollectionSummary {
            name: collection.name().to_string(),
            directory: collection.directory().to_string(),
            entries: entries.len(),
        });
    }

    log::info!(
        "exported {} documents and {} data files for locale {}",
        summary.documents_written(),
        summary.data_files_merged + summary.data_files_written,
        summary.locale
    );
    Ok(summary)
}
