//! Core types: content records, meta tags, image references

mod image;
mod meta_tag;
mod records;
mod snapshot;
mod social;
mod validation;

pub use image::{DEFAULT_IMAGE_HOST, ImageFormat, ImageParams, ImageRef, ImageResolver};
pub use meta_tag::{AttributeValue, MetaTag, to_html};
pub use records::{CollectionEntry, GlobalSeo, HomePage, PageRecord, SiteSettings, SocialProfile};
pub use snapshot::{Collection, ContentSnapshot, Page};
pub use social::{SpaceRuns, normalize_profile_type};
pub use validation::{
    Severity, ValidationIssue, ValidationKind, ValidationSummary, validate_snapshot,
};
