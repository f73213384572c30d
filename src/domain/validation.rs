//! Validation of a content snapshot for the check command.
//!
//! The export itself never validates: a missing value simply goes missing in
//! the output. These checks exist so editors can find problems in the CMS
//! before they show up on the site.

use std::collections::HashMap;
use std::fmt;

use crate::domain::{Collection, ContentSnapshot, Page};

/// A validation issue found in a snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// Where in the snapshot the issue was found (`services[2]`, `aboutPage`).
    pub location: String,
    /// The kind of validation issue.
    pub kind: ValidationKind,
}

impl ValidationIssue {
    /// Creates a new validation issue.
    pub fn new(location: impl Into<String>, kind: ValidationKind) -> Self {
        Self {
            location: location.into(),
            kind,
        }
    }

    /// Returns the severity of this issue.
    pub fn severity(&self) -> Severity {
        self.kind.severity()
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.location, self.kind)
    }
}

/// The kind of validation issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationKind {
    /// Entry has no slug, so its document would be named `.md`.
    EmptySlug,

    /// Slug is a path (`a/b`, `..`), so its document would land outside the
    /// collection directory.
    UnsafeSlug {
        /// The offending slug.
        slug: String,
    },

    /// Another entry in the same collection already uses this slug.
    DuplicateSlug {
        /// The duplicated slug.
        slug: String,
        /// Index of the first entry with this slug.
        first_index: usize,
    },

    /// Record has no title.
    MissingTitle,

    /// Collection entry has no cover image.
    MissingCoverImage,

    /// Site has no locales configured.
    NoLocales,
}

impl ValidationKind {
    /// Returns the severity of this kind of issue.
    pub fn severity(&self) -> Severity {
        match self {
            ValidationKind::EmptySlug => Severity::Error,
            ValidationKind::UnsafeSlug { .. } => Severity::Error,
            ValidationKind::DuplicateSlug { .. } => Severity::Error,
            ValidationKind::MissingTitle => Severity::Warning,
            ValidationKind::MissingCoverImage => Severity::Warning,
            ValidationKind::NoLocales => Severity::Warning,
        }
    }
}

impl fmt::Display for ValidationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationKind::EmptySlug => write!(f, "empty slug"),
            ValidationKind::UnsafeSlug { slug } => {
                write!(f, "slug '{}' is not a plain file name", slug)
            }
            ValidationKind::DuplicateSlug { slug, first_index } => {
                write!(f, "duplicate slug '{}' (first used by entry {})", slug, first_index)
            }
            ValidationKind::MissingTitle => write!(f, "missing title"),
            ValidationKind::MissingCoverImage => write!(f, "missing cover image"),
            ValidationKind::NoLocales => write!(f, "no locales configured"),
        }
    }
}

/// Severity level of a validation issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Output will be incomplete.
    Warning,
    /// Output will be wrong.
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// Summary of validation results.
#[derive(Debug, Clone, Default)]
pub struct ValidationSummary {
    /// All issues found during validation.
    pub issues: Vec<ValidationIssue>,
}

impl ValidationSummary {
    /// Adds an issue to the summary.
    pub fn add(&mut self, issue: ValidationIssue) {
        self.issues.push(issue);
    }

    /// Returns the number of errors.
    pub fn error_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| i.severity() == Severity::Error)
            .count()
    }

    /// Returns the number of warnings.
    pub fn warning_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| i.severity() == Severity::Warning)
            .count()
    }

    /// Returns true if there are no issues.
    pub fn is_ok(&self) -> bool {
        self.issues.is_empty()
    }

    /// Returns true if there are any errors.
    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    /// Returns issues grouped by severity, errors first.
    pub fn issues_by_severity(&self) -> impl Iterator<Item = &ValidationIssue> {
        let mut sorted: Vec<_> = self.issues.iter().collect();
        sorted.sort_by_key(|i| std::cmp::Reverse(i.severity()));
        sorted.into_iter()
    }
}

/// Runs every check against a snapshot.
pub fn validate_snapshot(snapshot: &ContentSnapshot) -> ValidationSummary {
    let mut summary = ValidationSummary::default();

    if snapshot.site.locales.is_empty() {
        summary.add(ValidationIssue::new("site", ValidationKind::NoLocales));
    }

    for page in Page::ALL {
        if let Some(record) = snapshot.page(page)
            && record.title.is_none()
        {
            summary.add(ValidationIssue::new(page.path(), ValidationKind::MissingTitle));
        }
    }

    for collection in Collection::ALL {
        let Some(entries) = snapshot.collection(collection) else {
            continue;
        };

        let mut seen: HashMap<&str, usize> = HashMap::new();
        for (index, entry) in entries.iter().enumerate() {
            let location = format!("{}[{}]", collection.name(), index);

            if entry.slug.is_empty() {
                summary.add(ValidationIssue::new(&location, ValidationKind::EmptySlug));
            } else if is_path_like(&entry.slug) {
                summary.add(ValidationIssue::new(
                    &location,
                    ValidationKind::UnsafeSlug {
                        slug: entry.slug.clone(),
                    },
                ));
            } else if let Some(&first_index) = seen.get(entry.slug.as_str()) {
                summary.add(ValidationIssue::new(
                    &location,
                    ValidationKind::DuplicateSlug {
                        slug: entry.slug.clone(),
                        first_index,
                    },
                ));
            } else {
                seen.insert(&entry.slug, index);
            }

            if entry.title.is_none() {
                summary.add(ValidationIssue::new(&location, ValidationKind::MissingTitle));
            }
            if entry.cover_image.is_none() {
                summary.add(ValidationIssue::new(&location, ValidationKind::MissingCoverImage));
            }
        }
    }

    summary
}

/// True when a slug would not stay a single file name inside its directory.
fn is_path_like(slug: &str) -> bool {
    slug == "." || slug == ".." || slug.contains(['/', '\\'])
}
