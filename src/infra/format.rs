//! Structured data formats for emitted files.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors while encoding or merging structured data.
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("TOML encoding failed: {0}")]
    TomlEncode(#[from] toml::ser::Error),

    #[error("invalid TOML: {0}")]
    TomlDecode(#[from] toml::de::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{format} document is not a table of keys")]
    NotATable { format: DataFormat },
}

/// Serialization format of a data file or frontmatter block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataFormat {
    Toml,
    #[default]
    #[serde(alias = "yml")]
    Yaml,
    Json,
}

impl DataFormat {
    /// Encodes a value as a complete document in this format.
    ///
    /// The result always ends with a newline.
    pub fn encode<T: Serialize + ?Sized>(&self, value: &T) -> Result<String, FormatError> {
        let mut encoded = match self {
            DataFormat::Toml => toml::to_string(value)?,
            DataFormat::Yaml => serde_yaml::to_string(value)?,
            DataFormat::Json => serde_json::to_string_pretty(value)?,
        };
        if !encoded.ends_with('\n') {
            encoded.push('\n');
        }
        Ok(encoded)
    }

    /// Shallow-merges `patch` into an existing document and returns the result.
    ///
    /// Top-level keys of the patch replace those of the document; every other
    /// key keeps its value and position. A missing or blank document is
    /// treated as empty.
    pub fn merge<T: Serialize + ?Sized>(
        &self,
        existing: Option<&str>,
        patch: &T,
    ) -> Result<String, FormatError> {
        let existing = existing.filter(|s| !s.trim().is_empty());
        match self {
            DataFormat::Toml => {
                let mut table: toml::Table = match existing {
                    Some(s) => s.parse()?,
                    None => toml::Table::new(),
                };
                let toml::Value::Table(patch) = toml::Value::try_from(patch)? else {
                    return Err(FormatError::NotATable { format: *self });
                };
                table.extend(patch);
                self.encode(&table)
            }
            DataFormat::Yaml => {
                let mut mapping = match existing
                    .map(|s| serde_yaml::from_str::<serde_yaml::Value>(s))
                    .transpose()?
                {
                    None | Some(serde_yaml::Value::Null) => serde_yaml::Mapping::new(),
                    Some(serde_yaml::Value::Mapping(m)) => m,
                    Some(_) => return Err(FormatError::NotATable { format: *self }),
                };
                let serde_yaml::Value::Mapping(patch) = serde_yaml::to_value(patch)? else {
                    return Err(FormatError::NotATable { format: *self });
                };
                mapping.extend(patch);
                self.encode(&mapping)
            }
            DataFormat::Json => {
                let mut object = match existing
                    .map(|s| serde_json::from_str::<serde_json::Value>(s))
                    .transpose()?
                {
                    None => serde_json::Map::new(),
                    Some(serde_json::Value::Object(m)) => m,
                    Some(_) => return Err(FormatError::NotATable { format: *self }),
                };
                let serde_json::Value::Object(patch) = serde_json::to_value(patch)? else {
                    return Err(FormatError::NotATable { format: *self });
                };
                object.extend(patch);
                self.encode(&object)
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DataFormat::Toml => "toml",
            DataFormat::Yaml => "yaml",
            DataFormat::Json => "json",
        }
    }
}

impl fmt::Display for DataFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DataFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "toml" => Ok(DataFormat::Toml),
            "yaml" | "yml" => Ok(DataFormat::Yaml),
            "json" => Ok(DataFormat::Json),
            other => Err(format!("unknown data format '{}'", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct Patch {
        title: &'static str,
        language_code: &'static str,
    }

    fn patch() -> Patch {
        Patch {
            title: "Atelier",
            language_code: "en",
        }
    }

    // ===========================================
    // Encoding
    // ===========================================

    #[test]
    fn encodes_with_trailing_newline() {
        for format in [DataFormat::Toml, DataFormat::Yaml, DataFormat::Json] {
            let encoded = format.encode(&patch()).unwrap();
            assert!(encoded.ends_with('\n'), "{} output: {:?}", format, encoded);
        }
    }

    #[test]
    fn encodes_yaml_in_field_order() {
        let encoded = DataFormat::Yaml.encode(&patch()).unwrap();
        assert_eq!(encoded, "title: Atelier\nlanguageCode: en\n");
    }

    // ===========================================
    // Merging
    // ===========================================

    #[test]
    fn toml_merge_preserves_unrelated_keys_and_order() {
        let existing = "baseURL = \"https://example.org/\"\ntitle = \"Old\"\n\n[params]\ncolor = \"red\"\n";
        let merged = DataFormat::Toml.merge(Some(existing), &patch()).unwrap();
        let table: toml::Table = merged.parse().unwrap();

        let keys: Vec<_> = table.keys().map(String::as_str).collect();
        assert_eq!(keys[..2], ["baseURL", "title"]);
        assert_eq!(keys.len(), 4);
        assert_eq!(table["title"].as_str(), Some("Atelier"));
        assert_eq!(table["languageCode"].as_str(), Some("en"));
        assert_eq!(table["params"]["color"].as_str(), Some("red"));
    }

    #[test]
    fn toml_merge_into_missing_file() {
        let merged = DataFormat::Toml.merge(None, &patch()).unwrap();
        assert_eq!(merged, "title = \"Atelier\"\nlanguageCode = \"en\"\n");
    }

    #[test]
    fn toml_merge_is_shallow() {
        let existing = "[params]\ncolor = \"red\"\nsize = 2\n";
        let mut patch = toml::Table::new();
        let mut params = toml::Table::new();
        params.insert("color".into(), "blue".into());
        patch.insert("params".into(), toml::Value::Table(params));

        let merged = DataFormat::Toml.merge(Some(existing), &patch).unwrap();
        let table: toml::Table = merged.parse().unwrap();
        assert_eq!(table["params"]["color"].as_str(), Some("blue"));
        assert!(table["params"].get("size").is_none());
    }

    #[test]
    fn toml_merge_rejects_invalid_document() {
        let err = DataFormat::Toml.merge(Some("not = [valid"), &patch()).unwrap_err();
        assert!(matches!(err, FormatError::TomlDecode(_)));
    }

    #[test]
    fn yaml_merge_keeps_existing_keys() {
        let existing = "copyright: old\nname: Old\n";
        let merged = DataFormat::Yaml.merge(Some(existing), &patch()).unwrap();
        assert_eq!(merged, "copyright: old\nname: Old\ntitle: Atelier\nlanguageCode: en\n");
    }

    #[test]
    fn yaml_merge_rejects_non_mapping() {
        let err = DataFormat::Yaml.merge(Some("- a\n- b\n"), &patch()).unwrap_err();
        assert!(matches!(err, FormatError::NotATable { format: DataFormat::Yaml }));
    }

    #[test]
    fn json_merge_blank_document() {
        let merged = DataFormat::Json.merge(Some("  \n"), &patch()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&merged).unwrap();
        assert_eq!(value["title"], "Atelier");
    }

    #[test]
    fn patch_must_be_a_table() {
        let err = DataFormat::Json.merge(None, &vec![1, 2]).unwrap_err();
        assert!(matches!(err, FormatError::NotATable { .. }));
    }

    // ===========================================
    // Parsing
    // ===========================================

    #[test]
    fn parses_format_names() {
        assert_eq!("TOML".parse::<DataFormat>(), Ok(DataFormat::Toml));
        assert_eq!("yml".parse::<DataFormat>(), Ok(DataFormat::Yaml));
        assert_eq!("json".parse::<DataFormat>(), Ok(DataFormat::Json));
        assert!("xml".parse::<DataFormat>().is_err());
    }
}
