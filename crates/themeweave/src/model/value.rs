//! Leaf values of a theme document.

use serde::Deserialize;
use serde_json::{Number, Value};

/// A literal value, possibly containing `$$` reference tokens.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Text(String),
    Number(Number),
}

impl From<&str> for Scalar {
    fn from(text: &str) -> Self {
        Scalar::Text(text.to_string())
    }
}

/// A gradient that can also stand in as a flat colour.
///
/// Where a gradient is accepted (`background`) the `definition` is used;
/// everywhere else the `fallbackColor`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GradientDefinition {
    pub definition: String,
    #[serde(rename = "fallbackColor", default)]
    pub fallback_color: Option<Scalar>,
}

impl GradientDefinition {
    /// Reads a gradient out of a globals value, if it has that shape.
    pub fn from_value(value: &Value) -> Option<Self> {
        if !value.get("definition").is_some_and(Value::is_string) {
            return None;
        }
        serde_json::from_value(value.clone()).ok()
    }
}

/// A colour: a scalar (literal or reference) or an inline gradient.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ColorValue {
    Scalar(Scalar),
    Gradient(GradientDefinition),
}

impl From<&str> for ColorValue {
    fn from(text: &str) -> Self {
        ColorValue::Scalar(text.into())
    }
}

/// A backdrop filter with the background to use where backdrop filters are
/// not supported.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BackdropFilter {
    pub definition: String,
    #[serde(rename = "fallbackBackground", default)]
    pub fallback_background: Option<ColorValue>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    Scalar(Scalar),
    WithFallback(BackdropFilter),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scalar_accepts_text_and_numbers() {
        let text: Scalar = serde_json::from_value(json!("1rem")).unwrap();
        assert_eq!(text, Scalar::Text("1rem".into()));
        let number: Scalar = serde_json::from_value(json!(400)).unwrap();
        assert!(matches!(number, Scalar::Number(_)));
    }

    #[test]
    fn test_color_value_accepts_inline_gradient() {
        let color: ColorValue = serde_json::from_value(json!({
            "definition": "linear-gradient(red, blue)",
            "fallbackColor": "red"
        }))
        .unwrap();
        match color {
            ColorValue::Gradient(g) => {
                assert_eq!(g.definition, "linear-gradient(red, blue)");
                assert_eq!(g.fallback_color, Some(Scalar::Text("red".into())));
            }
            other => panic!("expected gradient, got {:?}", other),
        }
    }

    #[test]
    fn test_gradient_from_value_requires_definition() {
        assert!(GradientDefinition::from_value(&json!({"definition": "x"})).is_some());
        assert!(GradientDefinition::from_value(&json!({"bg": "black"})).is_none());
        assert!(GradientDefinition::from_value(&json!("black")).is_none());
    }
}
