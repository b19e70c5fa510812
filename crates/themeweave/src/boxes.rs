//! Box composition.
//!
//! A box turns into an ordered list of property-map fragments that the
//! stylesheet merges in order:
//!
//! ```text
//! __extends, animation, borderSet, colorSet, padding, fontSet, height, width,
//! pseudo-elements
//! ```
//!
//! Each fragment is omitted when the box does not declare it.

use std::fmt;

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;
use themeweave_css::PropertyMap;

use crate::diagnostics::Warning;
use crate::error::{CycleKind, Result, ThemeError};
use crate::model::{BoxDefinition, BoxRef, ElementProps, Scalar, Theme};
use crate::reference::ResolveCx;
use crate::sets::{insert_resolved, order_selector_groups, set_to_css};
use crate::util::strip_reference;

/// The variant whose parts are searched when a box name is not a box set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartsContext<'n> {
    pub component: &'n str,
    pub variant: &'n str,
}

impl<'n> PartsContext<'n> {
    pub fn new(component: &'n str, variant: &'n str) -> Self {
        Self { component, variant }
    }

    fn parts<'t>(&self, theme: &'t Theme) -> Option<&'t IndexMap<String, BoxRef>> {
        let component = theme.components.get(self.component)?;
        let variant = if self.variant == "default" {
            component.default.as_ref()
        } else {
            component.variants.get(self.variant)
        };
        variant.map(|v| &v.parts)
    }
}

impl fmt::Display for PartsContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.variant == "default" {
            write!(f, "{}.default.parts", self.component)
        } else {
            write!(f, "{}.variants.{}.parts", self.component, self.variant)
        }
    }
}

/// Finds the definition a box reference points at.
///
/// Names (`$$card` or `card`) are looked up in the box-set registry and then,
/// with a `context`, among the variant's parts. Parts may alias each other.
/// Returns `None` and records a warning when nothing matches.
pub fn resolve_box<'t>(
    box_ref: &'t BoxRef,
    cx: &mut ResolveCx<'t>,
    context: Option<PartsContext<'_>>,
) -> Result<Option<&'t BoxDefinition>> {
    let theme = cx.theme();
    let mut seen: Vec<String> = Vec::new();
    let mut current = box_ref;
    loop {
        let name = match current {
            BoxRef::Inline(definition) => return Ok(Some(&**definition)),
            BoxRef::Named(name) => strip_reference(name),
        };
        if seen.iter().any(|n| n == name) {
            return Err(ThemeError::cycle(CycleKind::Box, &seen, name));
        }
        seen.push(name.to_string());

        if let Some(definition) = theme.sets.box_sets.get(name) {
            return Ok(Some(definition));
        }
        match context
            .and_then(|c| c.parts(theme))
            .and_then(|parts| parts.get(name))
        {
            Some(next) => current = next,
            None => {
                cx.warn(Warning::UnresolvedBox {
                    name: name.to_string(),
                    context: context.map(|c| c.to_string()),
                });
                return Ok(None);
            }
        }
    }
}

/// Composes a box into its ordered fragment list.
pub fn box_to_props<'t>(
    definition: &'t BoxDefinition,
    cx: &mut ResolveCx<'t>,
    context: Option<PartsContext<'_>>,
) -> Result<Vec<PropertyMap>> {
    let mut fragments = Vec::new();
    let mut chain = Vec::new();
    compose(definition, cx, context, &mut chain, &mut fragments)?;
    Ok(fragments)
}

fn compose<'t>(
    definition: &'t BoxDefinition,
    cx: &mut ResolveCx<'t>,
    context: Option<PartsContext<'_>>,
    chain: &mut Vec<String>,
    fragments: &mut Vec<PropertyMap>,
) -> Result<()> {
    if let Some(parent) = &definition.extends {
        let name = match parent {
            BoxRef::Named(name) => Some(strip_reference(name).to_string()),
            BoxRef::Inline(_) => None,
        };
        if let Some(name) = &name {
            if chain.contains(name) {
                return Err(ThemeError::cycle(CycleKind::Box, chain, name));
            }
            chain.push(name.clone());
        }
        if let Some(parent) = resolve_box(parent, cx, context)? {
            compose(parent, cx, context, chain, fragments)?;
        }
        if name.is_some() {
            chain.pop();
        }
    }

    push_scalar(fragments, "animation", definition.animation.as_ref(), cx)?;
    if let Some(set) = &definition.border_set {
        push_map(fragments, set_to_css(set, cx)?);
    }
    if let Some(set) = &definition.color_set {
        push_map(fragments, set_to_css(set, cx)?);
    }
    push_scalar(fragments, "padding", definition.padding.as_ref(), cx)?;
    if let Some(set) = &definition.font_set {
        push_map(fragments, set_to_css(set, cx)?);
    }
    push_scalar(fragments, "height", definition.height.as_ref(), cx)?;
    push_scalar(fragments, "width", definition.width.as_ref(), cx)?;
    push_map(fragments, pseudo_elements(definition, cx)?);
    Ok(())
}

fn push_map(fragments: &mut Vec<PropertyMap>, css: PropertyMap) {
    if !css.is_empty() {
        fragments.push(css);
    }
}

fn push_scalar(
    fragments: &mut Vec<PropertyMap>,
    name: &str,
    value: Option<&Scalar>,
    cx: &mut ResolveCx<'_>,
) -> Result<()> {
    if let Some(value) = value {
        let mut css = PropertyMap::new();
        insert_resolved(&mut css, name, cx.resolve_scalar(value)?);
        push_map(fragments, css);
    }
    Ok(())
}

fn pseudo_elements(definition: &BoxDefinition, cx: &mut ResolveCx<'_>) -> Result<PropertyMap> {
    let mut css = PropertyMap::new();
    elements_into(&mut css, definition.before.as_ref(), definition.after.as_ref(), cx)?;

    let mut states = PropertyMap::new();
    for (state, elements) in definition.states.iter() {
        let mut block = PropertyMap::new();
        elements_into(&mut block, elements.before.as_ref(), elements.after.as_ref(), cx)?;
        if !block.is_empty() {
            states.insert(state.selector(), block);
        }
    }
    order_selector_groups(&mut states);
    css.merge(&states);
    Ok(css)
}

fn elements_into(
    css: &mut PropertyMap,
    before: Option<&ElementProps>,
    after: Option<&ElementProps>,
    cx: &mut ResolveCx<'_>,
) -> Result<()> {
    for (selector, props) in [("&::before", before), ("&::after", after)] {
        let Some(props) = props else { continue };
        let mut block = PropertyMap::new();
        for (name, value) in props {
            let mut value = cx.resolve_scalar(value)?;
            if name == "content" {
                value = quote_content(value);
            }
            insert_resolved(&mut block, name, value);
        }
        css.insert(selector, block);
    }
    Ok(())
}

/// `content` keywords, written unquoted.
const CONTENT_KEYWORDS: &[&str] = &[
    "none",
    "normal",
    "open-quote",
    "close-quote",
    "no-open-quote",
    "no-close-quote",
    "inherit",
    "initial",
    "revert",
    "unset",
];

static CSS_FUNCTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^-?[A-Za-z][\w-]*\(.*\)$").expect("function pattern is valid"));

/// Quotes a `content` value unless it already is a string, a keyword or a
/// CSS function such as `attr(data-count)`.
fn quote_content(value: String) -> String {
    let quoted = value.len() >= 2
        && ((value.starts_with('"') && value.ends_with('"'))
            || (value.starts_with('\'') && value.ends_with('\'')));
    if quoted || CONTENT_KEYWORDS.contains(&value.as_str()) || CSS_FUNCTION.is_match(&value) {
        return value;
    }
    format!("\"{}\"", value.replace('"', "\\\""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::Diagnostics;
    use serde_json::{json, Value};
    use themeweave_css::{compile, merge_fragments};

    fn theme(sets: Value, components: Value) -> Theme {
        Theme::from_value(json!({
            "name": "test",
            "version": "1",
            "globals": { "space": { "sm": "4px" } },
            "sets": sets,
            "components": components
        }))
        .unwrap()
    }

    fn compiled(fragments: &[PropertyMap]) -> String {
        compile(&merge_fragments(fragments), ".x")
    }

    #[test]
    fn test_fragment_order() {
        let theme = theme(
            json!({
                "colorSets": { "c": { "foreground": "white" } },
                "fontSets": { "f": { "size": "12px" } },
                "borderSets": { "b": { "radius": "2px" } }
            }),
            json!({}),
        );
        let definition: BoxDefinition = serde_json::from_value(json!({
            "width": "100%",
            "fontSet": "$$f",
            "padding": "$$space.sm",
            "colorSet": "$$c",
            "borderSet": "b",
            "animation": "spin 1s"
        }))
        .unwrap();

        let mut diagnostics = Diagnostics::new();
        let mut cx = ResolveCx::new(&theme, &mut diagnostics);
        let fragments = box_to_props(&definition, &mut cx, None).unwrap();
        let firsts: Vec<String> = fragments
            .iter()
            .map(|f| f.keys().next().cloned().unwrap())
            .collect();
        assert_eq!(
            firsts,
            vec!["animation", "border-radius", "color", "padding", "font-size", "width"]
        );
    }

    #[test]
    fn test_extends_comes_first_and_is_overridden() {
        let theme = theme(
            json!({ "boxSets": { "base": { "padding": "1px", "width": "10px" } } }),
            json!({}),
        );
        let definition: BoxDefinition =
            serde_json::from_value(json!({ "__extends": "$$base", "padding": "2px" })).unwrap();

        let mut diagnostics = Diagnostics::new();
        let mut cx = ResolveCx::new(&theme, &mut diagnostics);
        let fragments = box_to_props(&definition, &mut cx, None).unwrap();
        assert_eq!(compiled(&fragments), ".x{padding:2px;width:10px;}");
    }

    #[test]
    fn test_sibling_part_lookup() {
        let theme = theme(
            json!({}),
            json!({
                "Card": {
                    "default": {
                        "parts": {
                            "title": { "padding": "3px" },
                            "subtitle": "$$title",
                            "caption": { "__extends": "title", "width": "5px" }
                        }
                    }
                }
            }),
        );
        let context = PartsContext::new("Card", "default");
        let parts = &theme.components["Card"].default.as_ref().unwrap().parts;

        let mut diagnostics = Diagnostics::new();
        let mut cx = ResolveCx::new(&theme, &mut diagnostics);
        let subtitle = resolve_box(&parts["subtitle"], &mut cx, Some(context))
            .unwrap()
            .unwrap();
        assert_eq!(subtitle.padding, Some("3px".into()));

        let caption = resolve_box(&parts["caption"], &mut cx, Some(context))
            .unwrap()
            .unwrap();
        let fragments = box_to_props(caption, &mut cx, Some(context)).unwrap();
        assert_eq!(compiled(&fragments), ".x{padding:3px;width:5px;}");
    }

    #[test]
    fn test_unresolved_box_warns_with_context() {
        let theme = theme(json!({}), json!({ "Card": { "default": {} } }));
        let missing = BoxRef::Named("$$nope".into());
        let mut diagnostics = Diagnostics::new();
        {
            let mut cx = ResolveCx::new(&theme, &mut diagnostics);
            let found = resolve_box(&missing, &mut cx, Some(PartsContext::new("Card", "default")));
            assert!(found.unwrap().is_none());
        }
        assert_eq!(
            diagnostics.warnings(),
            &[Warning::UnresolvedBox {
                name: "nope".into(),
                context: Some("Card.default.parts".into())
            }]
        );
    }

    #[test]
    fn test_part_alias_cycle() {
        let theme = theme(
            json!({}),
            json!({ "Card": { "variants": { "x": { "parts": { "a": "$$b", "b": "$$a" } } } } }),
        );
        let parts = &theme.components["Card"].variants["x"].parts;
        let mut diagnostics = Diagnostics::new();
        let mut cx = ResolveCx::new(&theme, &mut diagnostics);
        let err = resolve_box(&parts["a"], &mut cx, Some(PartsContext::new("Card", "x"))).unwrap_err();
        assert!(matches!(err, ThemeError::Cycle { kind: CycleKind::Box, .. }));
    }

    #[test]
    fn test_extends_cycle() {
        let theme = theme(
            json!({ "boxSets": { "a": { "__extends": "$$b" }, "b": { "__extends": "$$a" } } }),
            json!({}),
        );
        let mut diagnostics = Diagnostics::new();
        let mut cx = ResolveCx::new(&theme, &mut diagnostics);
        let a = &theme.sets.box_sets["a"];
        let err = box_to_props(a, &mut cx, None).unwrap_err();
        assert!(matches!(err, ThemeError::Cycle { kind: CycleKind::Box, .. }));
    }

    #[test]
    fn test_pseudo_elements() {
        let theme = theme(json!({}), json!({}));
        let definition: BoxDefinition = serde_json::from_value(json!({
            "before": { "content": "→", "marginRight": "$$space.sm" },
            "after": { "content": "attr(data-count)" },
            "__disabled": { "before": { "content": "'x'" } }
        }))
        .unwrap();

        let mut diagnostics = Diagnostics::new();
        let mut cx = ResolveCx::new(&theme, &mut diagnostics);
        let fragments = box_to_props(&definition, &mut cx, None).unwrap();
        assert_eq!(
            compiled(&fragments),
            ".x::before{content:\"→\";margin-right:4px;}\
             .x::after{content:attr(data-count);}\
             .x:disabled::before,.x[aria-disabled=true]::before{content:'x';}"
        );
    }

    #[test]
    fn test_quote_content() {
        assert_eq!(quote_content("hi".into()), "\"hi\"");
        assert_eq!(quote_content("\"hi\"".into()), "\"hi\"");
        assert_eq!(quote_content("say \"x\"".into()), "\"say \\\"x\\\"\"");
        assert_eq!(quote_content("counter(item)".into()), "counter(item)");
        assert_eq!(quote_content("url(\"a.png\")".into()), "url(\"a.png\")");
        assert_eq!(quote_content("none".into()), "none");
        assert_eq!(quote_content("open-quote".into()), "open-quote");
        assert_eq!(quote_content("no-close-quote".into()), "no-close-quote");
        assert_eq!(quote_content("hi (x)".into()), "\"hi (x)\"");
        assert_eq!(quote_content("(x)".into()), "\"(x)\"");
    }
}
