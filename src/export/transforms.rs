//! Field mappings from content records to the documents the site consumes.
//!
//! Each function is pure: it takes one record (or the site settings) and
//! returns a serializable structure whose field order is the key order of the
//! emitted file. Nothing here validates; a missing value is left out of the
//! output rather than written as null.

use serde::Serialize;

use crate::domain::{
    CollectionEntry, ContentSnapshot, ImageParams, ImageResolver, Page, PageRecord,
    SiteSettings, SocialProfile, SpaceRuns, normalize_profile_type, to_html,
};

/// Keys merged into each Hugo configuration file.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HugoConfigPatch<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<&'a str>,
    pub language_code: &'a str,
}

/// Contents of `data/settings.yml`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsData<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intro: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copyright: Option<&'a str>,
    pub social_profiles: Vec<SocialProfileData<'a>>,
    pub favicon_meta_tags: String,
    pub seo_meta_tags: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SocialProfileData<'a> {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<&'a str>,
}

/// Frontmatter of a singleton page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageFrontmatter<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    pub seo_meta_tags: String,
    pub menu: Menu,
}

/// Hugo menu registration: `menu.main.weight`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Menu {
    pub main: MenuEntry,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MenuEntry {
    pub weight: u32,
}

/// Frontmatter of one collection entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryFrontmatter<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<&'a str>,
    pub seo_meta_tags: String,
    pub extra_images: Vec<String>,
    pub weight: usize,
}

/// A frontmatter structure paired with the document body.
#[derive(Debug, Clone, PartialEq)]
pub struct Document<'a, F> {
    pub frontmatter: F,
    pub content: &'a str,
}

/// Maps site settings to the Hugo config patch.
pub fn hugo_config_patch<'a>(site: &'a SiteSettings, locale: &'a str) -> HugoConfigPatch<'a> {
    HugoConfigPatch {
        title: site.site_name(),
        language_code: locale,
    }
}

/// Maps global settings, the home page and social profiles to the site data file.
pub fn settings_data(snapshot: &ContentSnapshot, runs: SpaceRuns) -> SettingsData<'_> {
    SettingsData {
        name: snapshot.site.site_name(),
        language: snapshot.site.primary_locale(),
        intro: snapshot.home.intro_text.as_deref(),
        copyright: snapshot.home.copyright.as_deref(),
        social_profiles: snapshot
            .social_profiles
            .iter()
            .map(|profile| social_profile(profile, runs))
            .collect(),
        favicon_meta_tags: to_html(&snapshot.site.favicon_meta_tags),
        seo_meta_tags: to_html(&snapshot.home.seo_meta_tags),
    }
}

/// Maps a social profile to `{type, url}`, normalizing the type label.
pub fn social_profile(profile: &SocialProfile, runs: SpaceRuns) -> SocialProfileData<'_> {
    SocialProfileData {
        kind: normalize_profile_type(&profile.profile_type, runs),
        url: profile.url.as_deref(),
    }
}

/// Maps a singleton page to its document.
pub fn page_document<'a>(
    record: &'a PageRecord,
    page: Page,
    images: &ImageResolver,
) -> Document<'a, PageFrontmatter<'a>> {
    Document {
        frontmatter: PageFrontmatter {
            title: record.title.as_deref(),
            subtitle: record.subtitle.as_deref(),
            photo: images.resolve_opt(record.photo.as_ref(), &ImageParams::PAGE_PHOTO),
            seo_meta_tags: to_html(&record.seo_meta_tags),
            menu: Menu {
                main: MenuEntry {
                    weight: page.menu_weight(),
                },
            },
        },
        content: record.bio.as_deref().unwrap_or_default(),
    }
}

/// Maps the collection entry at `position` to its document.
pub fn entry_document<'a>(
    entry: &'a CollectionEntry,
    position: usize,
    images: &ImageResolver,
) -> Document<'a, EntryFrontmatter<'a>> {
    let cover = entry.cover_image.as_ref();
    Document {
        frontmatter: EntryFrontmatter {
            title: entry.title.as_deref(),
            cover_image: images.resolve_opt(cover, &ImageParams::COVER),
            image: images.resolve_opt(cover, &ImageParams::FULL),
            detail_image: images.resolve_opt(cover, &ImageParams::DETAIL),
            excerpt: entry.excerpt.as_deref(),
            seo_meta_tags: to_html(&entry.seo_meta_tags),
            extra_images: entry
                .gallery
                .iter()
                .map(|item| images.resolve(item, &ImageParams::GALLERY_ITEM))
                .collect(),
            weight: position,
        },
        content: entry.description.as_deref().unwrap_or_default(),
    }
}
