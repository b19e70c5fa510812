use indexmap::IndexMap;
use themeweave_css::PropertyMap;

use super::{insert_resolved, SetKind, StyleSet};
use crate::error::Result;
use crate::model::{FontMap, FontSet, PseudoStates, Scalar, SetRef, ThemeSets};
use crate::reference::ResolveCx;

impl StyleSet for FontSet {
    type Map = FontMap;

    const KIND: SetKind = SetKind::Font;

    fn registry(sets: &ThemeSets) -> &IndexMap<String, Self> {
        &sets.font_sets
    }

    fn extends(&self) -> Option<&SetRef<Self>> {
        self.extends.as_ref()
    }

    fn base(&self) -> &FontMap {
        &self.base
    }

    fn states(&self) -> &PseudoStates<FontMap> {
        &self.states
    }

    fn map_to_css(map: &FontMap, cx: &mut ResolveCx<'_>) -> Result<PropertyMap> {
        let declarations: [(&str, &Option<Scalar>); 8] = [
            ("transition-duration", &map.transition_speed),
            ("font-family", &map.family),
            ("letter-spacing", &map.letter_spacing),
            ("line-height", &map.line_height),
            ("font-size", &map.size),
            ("font-style", &map.style),
            ("text-transform", &map.transform),
            ("font-weight", &map.weight),
        ];

        let mut css = PropertyMap::new();
        for (name, value) in declarations {
            if let Some(value) = value {
                insert_resolved(&mut css, name, cx.resolve_scalar(value)?);
            }
        }
        Ok(css)
    }
}

#[cfg(test)]
mod tests {
    use super::super::font_set_to_css;
    use super::super::test_support::theme_with;
    use super::*;
    use crate::diagnostics::Diagnostics;
    use serde_json::json;
    use themeweave_css::compile;

    #[test]
    fn test_font_properties() {
        let theme = theme_with(
            json!({ "fonts": { "body": "Inter, sans-serif" } }),
            json!({}),
        );
        let set: FontSet = serde_json::from_value(json!({
            "family": "$$fonts.body",
            "size": "14px",
            "weight": 600,
            "transform": "uppercase",
            "__hover": { "letterSpacing": "0.1em" }
        }))
        .unwrap();

        let mut diagnostics = Diagnostics::new();
        let mut cx = ResolveCx::new(&theme, &mut diagnostics);
        let css = font_set_to_css(&SetRef::Inline(Box::new(set)), &mut cx).unwrap();
        assert_eq!(
            compile(&css, ".x"),
            ".x{font-family:Inter, sans-serif;font-size:14px;font-weight:600;\
             text-transform:uppercase;}.x:hover{letter-spacing:0.1em;}"
        );
    }
}
