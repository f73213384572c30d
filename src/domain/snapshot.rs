//! The full set of records retrieved for one export run.

use serde::Deserialize;

use crate::domain::records::null_as_default;
use crate::domain::{CollectionEntry, HomePage, PageRecord, SiteSettings, SocialProfile};

/// Snapshot of the CMS content graph.
///
/// Absent singleton pages and absent collections are skipped by the export;
/// an empty collection still clears its output directory.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContentSnapshot {
    #[serde(deserialize_with = "null_as_default")]
    pub site: SiteSettings,
    #[serde(deserialize_with = "null_as_default")]
    pub home: HomePage,
    pub about_page: Option<PageRecord>,
    pub donate_page: Option<PageRecord>,
    pub newsletter_page: Option<PageRecord>,
    pub contact_page: Option<PageRecord>,
    #[serde(deserialize_with = "null_as_default")]
    pub social_profiles: Vec<SocialProfile>,
    pub services: Option<Vec<CollectionEntry>>,
    pub works: Option<Vec<CollectionEntry>>,
    pub blog_posts: Option<Vec<CollectionEntry>>,
}

impl ContentSnapshot {
    /// Returns the record for a singleton page, if the snapshot has one.
    pub fn page(&self, page: Page) -> Option<&PageRecord> {
        match page {
            Page::About => self.about_page.as_ref(),
            Page::Donate => self.donate_page.as_ref(),
            Page::Newsletter => self.newsletter_page.as_ref(),
            Page::Contact => self.contact_page.as_ref(),
        }
    }

    /// Returns the entries of a collection, if the snapshot has it.
    pub fn collection(&self, collection: Collection) -> Option<&[CollectionEntry]> {
        match collection {
            Collection::Services => self.services.as_deref(),
            Collection::Works => self.works.as_deref(),
            Collection::BlogPosts => self.blog_posts.as_deref(),
        }
    }
}

/// Singleton pages exported as top-level content documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    About,
    Donate,
    Newsletter,
    Contact,
}

impl Page {
    pub const ALL: [Page; 4] = [Page::About, Page::Donate, Page::Newsletter, Page::Contact];

    /// Document path relative to the project root.
    pub fn path(&self) -> &'static str {
        match self {
            Page::About => "content/about.md",
            Page::Donate => "content/donate.md",
            Page::Newsletter => "content/newsletter.md",
            Page::Contact => "content/contact.md",
        }
    }

    /// Position in the site's main menu.
    pub fn menu_weight(&self) -> u32 {
        match self {
            Page::Contact => 101,
            _ => 100,
        }
    }
}

/// Ordered collections exported as one document per entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Services,
    Works,
    BlogPosts,
}

impl Collection {
    pub const ALL: [Collection; 3] = [
        Collection::Services,
        Collection::Works,
        Collection::BlogPosts,
    ];

    /// Directory, relative to the project root, that holds the entries.
    pub fn directory(&self) -> &'static str {
        match self {
            Collection::Services => "content/services",
            Collection::Works => "content/works",
            Collection::BlogPosts => "content/posts",
        }
    }

    /// Name of the collection in the snapshot.
    pub fn name(&self) -> &'static str {
        match self {
            Collection::Services => "services",
            Collection::Works => "works",
            Collection::BlogPosts => "blogPosts",
        }
    }
}
