//! Normalization of social profile type labels.

use std::sync::LazyLock;

use regex::Regex;

static SPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(" +").expect("space-run pattern is valid"));

/// How runs of spaces in a profile type label become hyphens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SpaceRuns {
    /// Only the first run is replaced. Matches output of earlier exports.
    #[default]
    First,
    /// Every run is replaced.
    All,
}

/// Turns a profile type label into the identifier used by site templates.
///
/// # Examples
///
/// ```
/// use cms_export::domain::{SpaceRuns, normalize_profile_type};
///
/// assert_eq!(normalize_profile_type("Media Partner", SpaceRuns::First), "media-partner");
/// assert_eq!(normalize_profile_type("A  B C", SpaceRuns::First), "a-b c");
/// assert_eq!(normalize_profile_type("A  B C", SpaceRuns::All), "a-b-c");
/// ```
pub fn normalize_profile_type(label: &str, runs: SpaceRuns) -> String {
    let lower = label.to_lowercase();
    match runs {
        SpaceRuns::First => SPACE_RUN.replacen(&lower, 1, "-").into_owned(),
        SpaceRuns::All => SPACE_RUN.replace_all(&lower, "-").into_owned(),
    }
}
