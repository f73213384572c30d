//! Content export: field mappings and the export driver.
//!
//! One run reads a snapshot, maps each record to the structure its target
//! file expects, and writes everything through an [`Emitter`](crate::infra::Emitter):
//!
//! ```text
//! config.dev.toml, config.prod.toml   ← merge {title, languageCode}
//! data/settings.yml                   ← site name, locale, footer, social profiles
//! content/{about,donate,newsletter,contact}.md
//! content/services/{slug}.md          ← one per entry, weight = position
//! content/works/{slug}.md
//! content/posts/{slug}.md
//! ```

mod driver;
pub mod transforms;

pub use driver::{
    CollectionSummary, DEFAULT_HUGO_CONFIGS, ExportError, ExportOptions, ExportSummary,
    FALLBACK_LOCALE, LocaleContext, SETTINGS_DATA_PATH, export,
};
