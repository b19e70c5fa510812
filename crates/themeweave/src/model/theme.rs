//! The typed view of a resolved theme document.

use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::{Map, Value};

use super::boxes::BoxDefinition;
use super::component::ComponentDefinition;
use super::sets::{BorderSet, ColorSet, FontSet};
use crate::config::ThemingConfig;
use crate::error::{Result, ThemeError};

/// A theme ready for resolution.
///
/// Built from a [`ThemingConfig`] once its `basedOn` ancestry has been merged
/// in. Everything the resolvers read lives here; `$$` tokens are still
/// unresolved.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use themeweave::{Theme, ThemingConfig};
///
/// let config = ThemingConfig::from_value(json!({
///     "name": "dark",
///     "version": "1",
///     "globals": { "colors": { "bg": "black" } },
///     "sets": { "colorSets": { "base": { "background": "$$colors.bg" } } },
///     "components": {}
/// }))
/// .unwrap();
///
/// let theme = Theme::from_config(&config).unwrap();
/// assert_eq!(theme.name, "dark");
/// assert!(theme.sets.color_sets.contains_key("base"));
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Theme {
    pub name: String,
    pub version: Value,
    #[serde(rename = "basedOn", default)]
    pub based_on: Option<String>,
    pub globals: Map<String, Value>,
    pub sets: ThemeSets,
    pub components: IndexMap<String, ComponentDefinition>,
    #[serde(default)]
    pub meta: Vec<Value>,
}

/// The four named registries of a theme.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ThemeSets {
    pub border_sets: IndexMap<String, BorderSet>,
    pub box_sets: IndexMap<String, BoxDefinition>,
    pub color_sets: IndexMap<String, ColorSet>,
    pub font_sets: IndexMap<String, FontSet>,
}

impl Theme {
    /// Maps a validated document onto the theme model.
    pub fn from_config(config: &ThemingConfig) -> Result<Self> {
        serde_json::from_value(Value::Object(config.document().clone())).map_err(|source| {
            ThemeError::Schema {
                theme: config.name().to_string(),
                source,
            }
        })
    }

    /// Validates `value` as a theme document and maps it onto the model.
    ///
    /// No `basedOn` resolution happens here.
    pub fn from_value(value: Value) -> Result<Self> {
        Self::from_config(&ThemingConfig::from_value(value)?)
    }
}
