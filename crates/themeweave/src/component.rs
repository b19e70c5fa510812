//! Component resolution.
//!
//! Resolution runs in two steps. [`style_component`] does all the fallible
//! work (references, sets, boxes, inheritance) and produces fragment lists.
//! [`StyledComponent::into_resolved`] then hands those lists to a
//! [`StyleEngine`] for class names. Nothing touches the engine until every
//! requested component has styled successfully.

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::{Map, Value};
use themeweave_css::PropertyMap;

use crate::boxes::{box_to_props, resolve_box, PartsContext};
use crate::diagnostics::{Diagnostics, Warning};
use crate::engine::StyleEngine;
use crate::error::{CycleKind, Result, ThemeError};
use crate::model::{Theme, VariantDefinition};
use crate::reference::ResolveCx;
use crate::sets::merge_in_cascade_order;
use crate::util::{deep_merge, strip_reference};

/// A component whose styling has been resolved into class names.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedComponent {
    pub component: String,
    pub variants: Vec<ResolvedVariant>,
}

impl ResolvedComponent {
    pub fn variant(&self, name: &str) -> Option<&ResolvedVariant> {
        self.variants.iter().find(|v| v.variant == name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedVariant {
    pub variant: String,
    /// Empty when the variant declares no theming.
    pub class_name: String,
    pub parts: IndexMap<String, String>,
    pub default_props: Value,
}

impl ResolvedVariant {
    /// Overlays caller `props` on the variant's default props.
    ///
    /// Keys in `props` win. A default `children` that is not a string is
    /// dropped first.
    pub fn apply_props(&self, props: Value) -> Value {
        let Value::Object(mut merged) = self.default_props.clone() else {
            return props;
        };
        if merged.get("children").is_some_and(|c| !c.is_string()) {
            merged.shift_remove("children");
        }
        match props {
            Value::Object(props) => {
                merged.extend(props);
                Value::Object(merged)
            }
            Value::Null => Value::Object(merged),
            other => other,
        }
    }
}

/// A component with fragment lists in place of class names.
#[derive(Debug, Clone, PartialEq)]
pub struct StyledComponent {
    pub component: String,
    pub variants: Vec<StyledVariant>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StyledVariant {
    pub variant: String,
    /// `None` when the variant declares no theming.
    pub fragments: Option<Vec<PropertyMap>>,
    /// `None` for parts whose box could not be resolved.
    pub parts: IndexMap<String, Option<Vec<PropertyMap>>>,
    pub default_props: Value,
}

impl StyledComponent {
    /// Registers every fragment list with `engine`.
    ///
    /// Each list is handed over merged, with its state groups in cascade
    /// order.
    pub fn into_resolved<E: StyleEngine + ?Sized>(self, engine: &mut E) -> ResolvedComponent {
        let mut class_name = |fragments: Option<Vec<PropertyMap>>| {
            fragments
                .map(|f| engine.class_name(&[merge_in_cascade_order(&f)]))
                .unwrap_or_default()
        };
        let variants = self
            .variants
            .into_iter()
            .map(|variant| ResolvedVariant {
                class_name: class_name(variant.fragments),
                parts: variant
                    .parts
                    .into_iter()
                    .map(|(part, fragments)| (part, class_name(fragments)))
                    .collect(),
                variant: variant.variant,
                default_props: variant.default_props,
            })
            .collect();
        ResolvedComponent {
            component: self.component,
            variants,
        }
    }

    /// Lays `child` over `self`, the parent.
    ///
    /// Variants with the same name take the child's theming when it declares
    /// one, merge parts key by key and deep-merge default props. Parent-only variants keep their
    /// place; child-only variants are appended.
    fn extended_by(mut self, child: StyledComponent) -> StyledComponent {
        for variant in child.variants {
            match self.variants.iter_mut().find(|v| v.variant == variant.variant) {
                Some(inherited) => {
                    if variant.fragments.is_some() {
                        inherited.fragments = variant.fragments;
                    }
                    inherited.parts.extend(variant.parts);
                    deep_merge(&mut inherited.default_props, variant.default_props);
                }
                None => self.variants.push(variant),
            }
        }
        self.component = child.component;
        self
    }
}

/// Resolves the component `name` of the context's theme into fragment lists.
///
/// An unknown component yields no variants and a warning.
pub fn style_component(name: &str, cx: &mut ResolveCx<'_>) -> Result<StyledComponent> {
    let mut chain = Vec::new();
    style_inner(name, cx, &mut chain)
}

fn style_inner<'t>(
    name: &str,
    cx: &mut ResolveCx<'t>,
    chain: &mut Vec<String>,
) -> Result<StyledComponent> {
    if chain.iter().any(|n| n == name) {
        return Err(ThemeError::cycle(CycleKind::Component, chain, name));
    }
    let theme = cx.theme();
    let Some(definition) = theme.components.get(name) else {
        cx.warn(Warning::MissingComponent {
            name: name.to_string(),
        });
        return Ok(StyledComponent {
            component: name.to_string(),
            variants: Vec::new(),
        });
    };

    chain.push(name.to_string());
    let parent = match &definition.extends {
        Some(parent) => Some(style_inner(strip_reference(parent), cx, chain)?),
        None => None,
    };
    chain.pop();

    let mut variants = Vec::new();
    let declared = definition
        .default
        .iter()
        .map(|v| ("default", v))
        .chain(
            definition
                .variants
                .iter()
                .filter(|(key, _)| key.as_str() != "default")
                .map(|(key, v)| (key.as_str(), v)),
        );
    for (variant, def) in declared {
        if let Some(styled) = style_variant(name, variant, def, cx)? {
            variants.push(styled);
        }
    }

    let own = StyledComponent {
        component: name.to_string(),
        variants,
    };
    Ok(match parent {
        Some(parent) => parent.extended_by(own),
        None => own,
    })
}

fn style_variant<'t>(
    component: &str,
    variant: &str,
    def: &'t VariantDefinition,
    cx: &mut ResolveCx<'t>,
) -> Result<Option<StyledVariant>> {
    let fragments = match &def.theming {
        None => None,
        Some(theming) => match resolve_box(theming, cx, None)? {
            Some(definition) => Some(box_to_props(definition, cx, None)?),
            None => return Ok(None),
        },
    };

    let context = PartsContext::new(component, variant);
    let mut parts = IndexMap::new();
    for (part, part_ref) in &def.parts {
        let styled = match resolve_box(part_ref, cx, Some(context))? {
            Some(definition) => Some(box_to_props(definition, cx, Some(context))?),
            None => None,
        };
        parts.insert(part.clone(), styled);
    }

    let default_props = match &def.default_props {
        Some(props) => cx.resolve_props(props)?,
        None => Value::Object(Map::new()),
    };

    Ok(Some(StyledVariant {
        variant: variant.to_string(),
        fragments,
        parts,
        default_props,
    }))
}

/// Resolves one component of `theme` into class names.
pub fn resolve_component<E: StyleEngine + ?Sized>(
    name: &str,
    theme: &Theme,
    engine: &mut E,
    diagnostics: &mut Diagnostics,
) -> Result<ResolvedComponent> {
    let mut cx = ResolveCx::new(theme, diagnostics);
    Ok(style_component(name, &mut cx)?.into_resolved(engine))
}
