//! Content records as they appear in a CMS snapshot.
//!
//! Every field the CMS may leave blank is optional. Records are read-only and
//! live for a single export run.

use serde::{Deserialize, Deserializer};

use crate::domain::{DEFAULT_IMAGE_HOST, ImageRef, MetaTag};

/// Reads a field the CMS may send as `null`, treating `null` like an absent key.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Global SEO settings configured on the CMS site.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GlobalSeo {
    pub site_name: Option<String>,
}

/// Site-wide settings, read once per run.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SiteSettings {
    #[serde(deserialize_with = "null_as_default")]
    pub global_seo: GlobalSeo,
    #[serde(deserialize_with = "null_as_default")]
    pub locales: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub favicon_meta_tags: Vec<MetaTag>,
    pub image_host: Option<String>,
}

impl SiteSettings {
    /// Returns the configured site name.
    pub fn site_name(&self) -> Option<&str> {
        self.global_seo.site_name.as_deref()
    }

    /// Returns the primary locale (the first one configured).
    pub fn primary_locale(&self) -> Option<&str> {
        self.locales.first().map(String::as_str)
    }

    /// Returns the image CDN host, falling back to the CMS default.
    pub fn image_host(&self) -> &str {
        self.image_host.as_deref().unwrap_or(DEFAULT_IMAGE_HOST)
    }
}

/// The home page singleton, carrying the site intro and footer text.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HomePage {
    pub intro_text: Option<String>,
    pub copyright: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub seo_meta_tags: Vec<MetaTag>,
}

/// A named singleton page such as "about" or "donate".
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageRecord {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub photo: Option<ImageRef>,
    pub bio: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub seo_meta_tags: Vec<MetaTag>,
}

/// One entry of an ordered collection (a service, a work, a blog post).
///
/// The entry's position in its collection is its navigation weight.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CollectionEntry {
    #[serde(deserialize_with = "null_as_default")]
    pub slug: String,
    pub title: Option<String>,
    pub cover_image: Option<ImageRef>,
    pub excerpt: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub gallery: Vec<ImageRef>,
    pub description: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub seo_meta_tags: Vec<MetaTag>,
}

impl CollectionEntry {
    /// Returns the document file name for this entry: `{slug}.md`.
    pub fn file_name(&self) -> String {
        format!("{}.md", self.slug)
    }
}

/// A link to the organisation's profile on a social network.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SocialProfile {
    #[serde(deserialize_with = "null_as_default")]
    pub profile_type: String,
    pub url: Option<String>,
}
