//! Declarative HTML tag descriptors and their markup serialization.
//!
//! The CMS describes SEO and favicon tags as plain data:
//!
//! ```text
//! [{ tagName: meta, attributes: { name: description, content: foobar } }]
//! ```
//!
//! [`to_html`] turns such a list into markup suitable for pasting into a
//! template head: `<meta name="description" content="foobar" />`.

use std::borrow::Cow;
use std::fmt;

use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::Deserialize;

/// Elements that never carry content and are always written self-closing.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// One HTML element described as data.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaTag {
    tag_name: String,
    #[serde(default)]
    attributes: Option<Attributes>,
    #[serde(default)]
    content: Option<String>,
}

impl MetaTag {
    /// Creates a tag with no attributes and no content.
    pub fn new(tag_name: impl Into<String>) -> Self {
        Self {
            tag_name: tag_name.into(),
            attributes: None,
            content: None,
        }
    }

    /// Appends an attribute, keeping insertion order.
    pub fn attribute(mut self, name: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
        self.attributes
            .get_or_insert_with(Attributes::default)
            .0
            .push((name.into(), Some(value.into())));
        self
    }

    /// Sets the inner content.
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Returns the element name.
    pub fn tag_name(&self) -> &str {
        &self.tag_name
    }

    /// Returns true if this element is written in self-closing form.
    pub fn is_self_closing(&self) -> bool {
        self.content.is_none() || is_void_element(&self.tag_name)
    }

    fn attributes(&self) -> impl Iterator<Item = &(String, Option<AttributeValue>)> {
        self.attributes.iter().flat_map(|attrs| attrs.0.iter())
    }
}

impl fmt::Display for MetaTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.tag_name)?;
        for (name, value) in self.attributes() {
            match value {
                Some(AttributeValue::Flag(true)) => write!(f, " {}", name)?,
                Some(AttributeValue::Flag(false)) | None => {}
                Some(value) => write!(f, " {}=\"{}\"", name, escape_attribute(&value.to_string()))?,
            }
        }

        match &self.content {
            Some(content) if !is_void_element(&self.tag_name) => {
                write!(f, ">{}</{}>", escape_text(content), self.tag_name)
            }
            _ => write!(f, " />"),
        }
    }
}

/// Serializes tags to concatenated markup, in input order, with no separators.
///
/// # Examples
///
/// ```
/// use cms_export::domain::{MetaTag, to_html};
///
/// let tags = vec![
///     MetaTag::new("title").content("Home"),
///     MetaTag::new("meta").attribute("name", "description").attribute("content", "foobar"),
/// ];
/// assert_eq!(
///     to_html(&tags),
///     r#"<title>Home</title><meta name="description" content="foobar" />"#
/// );
/// assert_eq!(to_html(&[]), "");
/// ```
pub fn to_html(tags: &[MetaTag]) -> String {
    tags.iter().map(ToString::to_string).collect()
}

fn is_void_element(tag_name: &str) -> bool {
    VOID_ELEMENTS
        .iter()
        .any(|void| void.eq_ignore_ascii_case(tag_name))
}

fn escape_attribute(value: &str) -> Cow<'_, str> {
    escape(value, |c| matches!(c, '&' | '"' | '<' | '>'))
}

fn escape_text(value: &str) -> Cow<'_, str> {
    escape(value, |c| matches!(c, '&' | '<' | '>'))
}

fn escape(value: &str, needs_escape: impl Fn(char) -> bool) -> Cow<'_, str> {
    if !value.chars().any(&needs_escape) {
        return Cow::Borrowed(value);
    }

    let mut escaped = String::with_capacity(value.len() + 8);
    for c in value.chars() {
        match c {
            '&' if needs_escape(c) => escaped.push_str("&amp;"),
            '"' if needs_escape(c) => escaped.push_str("&quot;"),
            '<' if needs_escape(c) => escaped.push_str("&lt;"),
            '>' if needs_escape(c) => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

/// A single attribute value as the CMS delivers it.
///
/// `true` renders as a bare attribute, `false` and null drop the attribute.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Flag(bool),
    Integer(i64),
    Float(f64),
    Text(String),
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeValue::Flag(flag) => write!(f, "{}", flag),
            AttributeValue::Integer(n) => write!(f, "{}", n),
            AttributeValue::Float(n) => write!(f, "{}", n),
            AttributeValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        AttributeValue::Text(value.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        AttributeValue::Text(value)
    }
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        AttributeValue::Flag(value)
    }
}

impl From<i64> for AttributeValue {
    fn from(value: i64) -> Self {
        AttributeValue::Integer(value)
    }
}

/// Attribute mapping that remembers the order keys appeared in the source.
#[derive(Debug, Clone, Default, PartialEq)]
struct Attributes(Vec<(String, Option<AttributeValue>)>);

impl<'de> Deserialize<'de> for Attributes {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct AttributesVisitor;

        impl<'de> Visitor<'de> for AttributesVisitor {
            type Value = Attributes;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of attribute names to values")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((name, value)) =
                    map.next_entry::<String, Option<AttributeValue>>()?
                {
                    entries.push((name, value));
                }
                Ok(Attributes(entries))
            }

            fn visit_unit<E>(self) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(Attributes::default())
            }
        }

        deserializer.deserialize_map(AttributesVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    // ===========================================
    // Element rendering
    // ===========================================

    #[test]
    fn renders_void_element_self_closing() {
        let tag = MetaTag::new("meta")
            .attribute("name", "description")
            .attribute("content", "foobar");
        assert_eq!(tag.to_string(), r#"<meta name="description" content="foobar" />"#);
    }

    #[test]
    fn renders_content_element() {
        let tag = MetaTag::new("title").content("About us");
        assert_eq!(tag.to_string(), "<title>About us</title>");
    }

    #[test]
    fn renders_contentless_element_self_closing() {
        let tag = MetaTag::new("script").attribute("src", "/app.js");
        assert_eq!(tag.to_string(), r#"<script src="/app.js" />"#);
    }

    #[test]
    fn void_element_ignores_content() {
        let tag = MetaTag::new("LINK").attribute("rel", "icon").content("ignored");
        assert_eq!(tag.to_string(), r#"<LINK rel="icon" />"#);
        assert!(tag.is_self_closing());
    }

    #[test]
    fn renders_tag_without_attributes() {
        assert_eq!(MetaTag::new("meta").to_string(), "<meta />");
        assert_eq!(MetaTag::new("title").content("x").to_string(), "<title>x</title>");
    }

    #[test]
    fn escapes_attribute_values() {
        let tag = MetaTag::new("meta").attribute("content", r#"Tom & "Jerry" <3"#);
        assert_eq!(
            tag.to_string(),
            r#"<meta content="Tom &amp; &quot;Jerry&quot; &lt;3" />"#
        );
    }

    #[test]
    fn escapes_text_content() {
        let tag = MetaTag::new("title").content("Fish & \"Chips\"");
        assert_eq!(tag.to_string(), "<title>Fish &amp; \"Chips\"</title>");
    }

    #[test]
    fn boolean_attributes() {
        let tag = MetaTag::new("link")
            .attribute("rel", "preload")
            .attribute("crossorigin", true)
            .attribute("hidden", false);
        assert_eq!(tag.to_string(), r#"<link rel="preload" crossorigin />"#);
    }

    #[test]
    fn numeric_attributes() {
        let tag = MetaTag::new("link").attribute("sizes", 32_i64);
        assert_eq!(tag.to_string(), r#"<link sizes="32" />"#);
    }

    // ===========================================
    // Sequence serialization
    // ===========================================

    #[test]
    fn empty_sequence_is_empty_string() {
        assert_eq!(to_html(&[]), "");
    }

    #[test]
    fn concatenates_in_input_order_without_separators() {
        let tags = vec![
            MetaTag::new("title").content("One"),
            MetaTag::new("meta").attribute("property", "og:title"),
            MetaTag::new("title").content("Three"),
        ];
        let html = to_html(&tags);

        assert_eq!(
            html,
            r#"<title>One</title><meta property="og:title" /><title>Three</title>"#
        );
        assert_eq!(html.matches("<title>").count() + html.matches("<meta").count(), 3);
    }

    // ===========================================
    // Deserialization
    // ===========================================

    #[test]
    fn deserializes_attributes_in_source_order() {
        let json = r#"{"tagName":"meta","attributes":{"property":"og:image","content":"x.jpg","name":"z"}}"#;
        let tag: MetaTag = serde_json::from_str(json).unwrap();
        assert_eq!(
            tag.to_string(),
            r#"<meta property="og:image" content="x.jpg" name="z" />"#
        );
    }

    #[test]
    fn deserializes_null_attributes_and_content() {
        let json = r#"{"tagName":"title","attributes":null,"content":"Home"}"#;
        let tag: MetaTag = serde_json::from_str(json).unwrap();
        assert_eq!(tag.to_string(), "<title>Home</title>");
    }

    #[test]
    fn deserializes_null_attribute_value_as_omitted() {
        let json = r#"{"tagName":"meta","attributes":{"name":"robots","content":null}}"#;
        let tag: MetaTag = serde_json::from_str(json).unwrap();
        assert_eq!(tag.to_string(), r#"<meta name="robots" />"#);
    }

    #[test]
    fn deserializes_from_yaml() {
        let yaml = "tagName: link\nattributes:\n  sizes: 16x16\n  rel: icon\n  href: /favicon.png\n";
        let tag: MetaTag = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(
            tag.to_string(),
            r#"<link sizes="16x16" rel="icon" href="/favicon.png" />"#
        );
    }
}
