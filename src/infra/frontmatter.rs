//! Rendering of markdown documents with a structured frontmatter block.

use serde::Serialize;

use crate::infra::format::{DataFormat, FormatError};

/// Serializes frontmatter and body into a single document.
///
/// # Format
/// ```text
/// ---
/// title: About us
/// menu:
///   main:
///     weight: 100
/// ---
/// Body content here...
/// ```
///
/// TOML frontmatter is fenced with `+++`; JSON frontmatter is a bare object
/// followed by a blank line, which is what Hugo expects for each format.
///
/// # Errors
///
/// Returns `FormatError` if the frontmatter cannot be encoded.
pub fn render_document<T: Serialize + ?Sized>(
    format: DataFormat,
    frontmatter: &T,
    body: &str,
) -> Result<String, FormatError> {
    let encoded = format.encode(frontmatter)?;
    let document = match format {
        DataFormat::Yaml => format!("---\n{}---\n{}", encoded, body),
        DataFormat::Toml => format!("+++\n{}+++\n{}", encoded, body),
        DataFormat::Json => format!("{}\n{}", encoded, body),
    };
    Ok(document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[derive(Serialize)]
    struct Frontmatter {
        title: &'static str,
        #[serde(skip_serializing_if = "Option::is_none")]
        photo: Option<&'static str>,
        weight: u32,
    }

    fn frontmatter() -> Frontmatter {
        Frontmatter {
            title: "About",
            photo: None,
            weight: 3,
        }
    }

    #[test]
    fn yaml_document() {
        let doc = render_document(DataFormat::Yaml, &frontmatter(), "Hello.\n").unwrap();
        assert_eq!(doc, "---\ntitle: About\nweight: 3\n---\nHello.\n");
    }

    #[test]
    fn toml_document() {
        let doc = render_document(DataFormat::Toml, &frontmatter(), "Hello.\n").unwrap();
        assert_eq!(doc, "+++\ntitle = \"About\"\nweight = 3\n+++\nHello.\n");
    }

    #[test]
    fn json_document() {
        let doc = render_document(DataFormat::Json, &frontmatter(), "Hello.").unwrap();
        assert_eq!(doc, "{\n  \"title\": \"About\",\n  \"weight\": 3\n}\n\nHello.");
    }

    #[test]
    fn empty_body() {
        let doc = render_document(DataFormat::Yaml, &frontmatter(), "").unwrap();
        assert!(doc.ends_with("---\n"));
    }

    #[test]
    fn body_is_written_verbatim() {
        let body = "---\nnot frontmatter\n\n# Heading";
        let doc = render_document(DataFormat::Yaml, &frontmatter(), body).unwrap();
        assert!(doc.ends_with(body));
    }
}
