use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

use super::boxes::BoxRef;

/// A component: its default variant plus named alternatives.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ComponentDefinition {
    pub default: Option<VariantDefinition>,
    pub variants: IndexMap<String, VariantDefinition>,
    /// Name of a component this one inherits variants from.
    #[serde(rename = "__extends")]
    pub extends: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VariantDefinition {
    pub theming: Option<BoxRef>,
    pub parts: IndexMap<String, BoxRef>,
    pub default_props: Option<Value>,
}
