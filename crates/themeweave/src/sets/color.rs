use indexmap::IndexMap;
use themeweave_css::PropertyMap;

use super::{insert_resolved, SetKind, StyleSet};
use crate::error::Result;
use crate::model::{ColorMap, ColorSet, FilterValue, PseudoStates, SetRef, ThemeSets, SELECTION_SELECTOR};
use crate::reference::ResolveCx;

/// Shown instead of a backdrop filter where browsers lack support for one.
const NO_BACKDROP_FILTER: &str = "@supports not (backdrop-filter: blur(1px))";

impl StyleSet for ColorSet {
    type Map = ColorMap;

    const KIND: SetKind = SetKind::Color;

    fn registry(sets: &ThemeSets) -> &IndexMap<String, Self> {
        &sets.color_sets
    }

    fn extends(&self) -> Option<&SetRef<Self>> {
        self.extends.as_ref()
    }

    fn base(&self) -> &ColorMap {
        &self.base
    }

    fn states(&self) -> &PseudoStates<ColorMap> {
        &self.states
    }

    fn map_to_css(map: &ColorMap, cx: &mut ResolveCx<'_>) -> Result<PropertyMap> {
        let mut css = PropertyMap::new();
        if let Some(speed) = &map.transition_speed {
            insert_resolved(&mut css, "transition-duration", cx.resolve_scalar(speed)?);
        }
        if let Some(background) = &map.background {
            insert_resolved(&mut css, "background", cx.resolve_color(background, true)?);
        }
        if let Some(border) = &map.border {
            insert_resolved(&mut css, "border-color", cx.resolve_color(border, false)?);
        }
        if let Some(filter) = &map.filter {
            insert_resolved(&mut css, "filter", cx.resolve_scalar(filter)?);
        }
        match &map.backdrop_filter {
            Some(FilterValue::Scalar(filter)) => {
                insert_resolved(&mut css, "backdrop-filter", cx.resolve_scalar(filter)?);
            }
            Some(FilterValue::WithFallback(filter)) => {
                insert_resolved(&mut css, "backdrop-filter", cx.resolve(&filter.definition)?);
                if let Some(fallback) = &filter.fallback_background {
                    let mut block = PropertyMap::new();
                    insert_resolved(&mut block, "background", cx.resolve_color(fallback, true)?);
                    if !block.is_empty() {
                        css.insert(NO_BACKDROP_FILTER, block);
                    }
                }
            }
            None => {}
        }
        if let Some(foreground) = &map.foreground {
            insert_resolved(&mut css, "color", cx.resolve_color(foreground, false)?);
        }
        if let Some(icon) = &map.icon {
            let mut block = PropertyMap::new();
            insert_resolved(&mut block, "color", cx.resolve_color(icon, false)?);
            if !block.is_empty() {
                css.insert("& svg", block);
            }
        }
        if let Some(shadow) = &map.shadow {
            insert_resolved(&mut css, "box-shadow", cx.resolve_scalar(shadow)?);
        }
        Ok(css)
    }

    fn extra_groups(&self, cx: &mut ResolveCx<'_>, css: &mut PropertyMap) -> Result<()> {
        let Some(selection) = &self.selection else {
            return Ok(());
        };
        let mut block = PropertyMap::new();
        if let Some(foreground) = &selection.foreground {
            insert_resolved(&mut block, "color", cx.resolve_color(foreground, false)?);
        }
        if let Some(background) = &selection.background {
            insert_resolved(&mut block, "background", cx.resolve_color(background, false)?);
        }
        css.insert(SELECTION_SELECTOR, block);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::theme_with;
    use super::super::color_set_to_css;
    use super::*;
    use crate::diagnostics::Diagnostics;
    use serde_json::json;
    use themeweave_css::compile;

    fn resolve(globals: serde_json::Value, set: serde_json::Value) -> String {
        let theme = theme_with(globals, json!({ "colorSets": { "s": set } }));
        let mut diagnostics = Diagnostics::new();
        let mut cx = ResolveCx::new(&theme, &mut diagnostics);
        let css = color_set_to_css(&SetRef::Named("$$s".into()), &mut cx).unwrap();
        compile(&css, ".x")
    }

    #[test]
    fn test_property_mapping() {
        let css = resolve(
            json!({ "c": { "fg": "white", "line": "#ddd" } }),
            json!({
                "background": "black",
                "foreground": "$$c.fg",
                "border": "$$c.line",
                "shadow": "0 1px 2px $$c.line",
                "transitionSpeed": "150ms",
                "icon": "$$c.fg"
            }),
        );
        assert_eq!(
            css,
            ".x{background:black;border-color:#ddd;box-shadow:0 1px 2px #ddd;\
             color:white;transition-duration:150ms;}.x svg{color:white;}"
        );
    }

    #[test]
    fn test_gradient_only_on_background() {
        let css = resolve(
            json!({
                "g": { "definition": "linear-gradient(red, blue)", "fallbackColor": "red" }
            }),
            json!({ "background": "$$g", "foreground": "$$g" }),
        );
        assert_eq!(css, ".x{background:linear-gradient(red, blue);color:red;}");
    }

    #[test]
    fn test_backdrop_filter_with_fallback() {
        let css = resolve(
            json!({ "glass": "rgba(0,0,0,.6)" }),
            json!({
                "backdropFilter": {
                    "definition": "blur(5px)",
                    "fallbackBackground": "$$glass"
                }
            }),
        );
        assert_eq!(
            css,
            ".x{backdrop-filter:blur(5px);}\
             @supports not (backdrop-filter: blur(1px)){.x{background:rgba(0,0,0,.6);}}"
        );
    }

    #[test]
    fn test_selection_never_uses_gradient() {
        let css = resolve(
            json!({
                "g": { "definition": "linear-gradient(red, blue)", "fallbackColor": "red" }
            }),
            json!({ "__selection": { "foreground": "white", "background": "$$g" } }),
        );
        assert_eq!(css, ".x::selection{color:white;background:red;}");
    }

    #[test]
    fn test_empty_values_are_omitted() {
        let css = resolve(json!({}), json!({ "background": "$$missing", "foreground": "blue" }));
        assert_eq!(css, ".x{color:blue;}");
    }
}
