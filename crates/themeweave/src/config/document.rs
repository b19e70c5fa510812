//! Validated theme documents.

use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::error::{Result, ThemeError, REQUIRED_KEYS};
use crate::util::{deep_merge, value_kind};

/// A theme document that carries every required top-level key.
///
/// The document is kept as raw JSON so `basedOn` ancestry can be merged
/// structurally before it is mapped onto [`Theme`](crate::Theme).
///
/// # Example
///
/// ```rust
/// use themeweave::ThemingConfig;
///
/// let config = ThemingConfig::from_yaml(r#"
/// name: dark
/// basedOn: base
/// version: "1.0"
/// globals: {}
/// sets: {}
/// components: {}
/// "#).unwrap();
///
/// assert_eq!(config.name(), "dark");
/// assert_eq!(config.based_on(), Some("base"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ThemingConfig {
    name: String,
    source_path: Option<PathBuf>,
    document: Map<String, Value>,
}

impl ThemingConfig {
    /// Validates a parsed document.
    ///
    /// # Errors
    ///
    /// - [`ThemeError::MissingConfig`] for `null`
    /// - [`ThemeError::InvalidDocument`] for anything but a mapping, or a
    ///   mapping whose `name` or `basedOn` is not a string
    /// - [`ThemeError::MissingKeys`] when a required key is absent
    pub fn from_value(value: Value) -> Result<Self> {
        let document = match value {
            Value::Null => return Err(ThemeError::MissingConfig),
            Value::Object(document) => document,
            other => {
                return Err(ThemeError::invalid_document(
                    None,
                    format!("expected a mapping, got {}", value_kind(&other)),
                ))
            }
        };

        let name = match document.get("name") {
            Some(Value::String(name)) => Some(name.clone()),
            Some(other) => {
                return Err(ThemeError::invalid_document(
                    None,
                    format!("'name' must be a string, got {}", value_kind(other)),
                ))
            }
            None => None,
        };

        let missing: Vec<&'static str> = REQUIRED_KEYS
            .iter()
            .copied()
            .filter(|key| !document.contains_key(*key))
            .collect();
        let name = match name {
            Some(name) if missing.is_empty() => name,
            name => {
                return Err(ThemeError::MissingKeys {
                    theme: name.unwrap_or_else(|| "unnamed theme".to_string()),
                    missing,
                })
            }
        };

        match document.get("basedOn") {
            None | Some(Value::Null) | Some(Value::String(_)) => {}
            Some(other) => {
                return Err(ThemeError::invalid_document(
                    Some(&name),
                    format!("'basedOn' must be a string, got {}", value_kind(other)),
                ))
            }
        }

        Ok(Self {
            name,
            source_path: None,
            document,
        })
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Self::from_value(serde_json::from_str(json)?)
    }

    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Self::from_value(serde_yaml::from_str(yaml)?)
    }

    /// Loads a document from a `.json`, `.yaml` or `.yml` file.
    ///
    /// Files with any other extension are parsed as YAML, which also accepts
    /// JSON.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ThemeError::Load {
            path: path.to_path_buf(),
            source,
        })?;

        let mut config = match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json(&content)?,
            _ => Self::from_yaml(&content)?,
        };
        config.source_path = Some(path.to_path_buf());
        Ok(config)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The ancestor theme's name. Empty strings count as unset.
    pub fn based_on(&self) -> Option<&str> {
        self.document
            .get("basedOn")
            .and_then(Value::as_str)
            .filter(|name| !name.is_empty())
    }

    pub fn version(&self) -> Option<&Value> {
        self.document.get("version")
    }

    /// The file this document was loaded from, if any.
    pub fn source_path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }

    pub fn document(&self) -> &Map<String, Value> {
        &self.document
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.document)
    }

    /// Returns this document deep-merged over `ancestor`.
    pub(crate) fn merged_over(&self, ancestor: &ThemingConfig) -> ThemingConfig {
        let mut merged = Value::Object(ancestor.document.clone());
        deep_merge(&mut merged, Value::Object(self.document.clone()));
        let document = match merged {
            Value::Object(document) => document,
            _ => self.document.clone(),
        };
        ThemingConfig {
            name: self.name.clone(),
            source_path: self.source_path.clone(),
            document,
        }
    }
}
