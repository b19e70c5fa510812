//! Style-set resolution.
//!
//! A style set (border, colour or font) resolves to one [`PropertyMap`]: the
//! base declarations followed by one nested block per declared pseudo-state.
//! `__extends` parents are resolved first and merged underneath, so a set's
//! own values always win.
//!
//! Selector groups are put in a fixed order after every resolution:
//!
//! 1. `&:hover`
//! 2. the focus groups, in the order they were declared
//! 3. `&:active`
//! 4. the disabled group
//! 5. everything else, lexicographically
//!
//! Later groups win the cascade, so a disabled element never shows a hover
//! colour no matter how the document was written.

mod border;
mod color;
mod font;

use std::cmp::Ordering;
use std::fmt;

use indexmap::IndexMap;
use themeweave_css::{merge_fragments, PropertyMap};

use crate::diagnostics::Warning;
use crate::error::{CycleKind, Result, ThemeError};
use crate::model::{BorderSet, ColorSet, FontSet, PseudoState, PseudoStates, SetRef, ThemeSets};
use crate::reference::ResolveCx;
use crate::util::strip_reference;

/// The registry a set belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SetKind {
    Border,
    Color,
    Font,
}

impl fmt::Display for SetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SetKind::Border => "border",
            SetKind::Color => "color",
            SetKind::Font => "font",
        })
    }
}

/// A kind of style set that can be resolved with [`set_to_css`].
pub trait StyleSet: Sized {
    /// The property map a set and each of its pseudo-states carry.
    type Map;

    const KIND: SetKind;

    /// The theme registry named sets of this kind are looked up in.
    fn registry(sets: &ThemeSets) -> &IndexMap<String, Self>;

    fn extends(&self) -> Option<&SetRef<Self>>;

    fn base(&self) -> &Self::Map;

    fn states(&self) -> &PseudoStates<Self::Map>;

    /// Converts one map into CSS declarations.
    fn map_to_css(map: &Self::Map, cx: &mut ResolveCx<'_>) -> Result<PropertyMap>;

    /// Adds selector groups that are specific to this kind of set.
    fn extra_groups(&self, _cx: &mut ResolveCx<'_>, _css: &mut PropertyMap) -> Result<()> {
        Ok(())
    }
}

/// Resolves a set, by name or inline, into CSS.
///
/// An unknown name resolves to an empty map and records a warning.
pub fn set_to_css<S: StyleSet>(set: &SetRef<S>, cx: &mut ResolveCx<'_>) -> Result<PropertyMap> {
    let mut chain = Vec::new();
    resolve_ref(set, cx, &mut chain)
}

pub fn border_set_to_css(set: &SetRef<BorderSet>, cx: &mut ResolveCx<'_>) -> Result<PropertyMap> {
    set_to_css(set, cx)
}

pub fn color_set_to_css(set: &SetRef<ColorSet>, cx: &mut ResolveCx<'_>) -> Result<PropertyMap> {
    set_to_css(set, cx)
}

pub fn font_set_to_css(set: &SetRef<FontSet>, cx: &mut ResolveCx<'_>) -> Result<PropertyMap> {
    set_to_css(set, cx)
}

fn resolve_ref<S: StyleSet>(
    set: &SetRef<S>,
    cx: &mut ResolveCx<'_>,
    chain: &mut Vec<String>,
) -> Result<PropertyMap> {
    let name = match set {
        SetRef::Inline(set) => return build(&**set, cx, chain),
        SetRef::Named(name) => strip_reference(name),
    };
    if chain.iter().any(|n| n == name) {
        return Err(ThemeError::cycle(CycleKind::Set, chain, name));
    }

    let theme = cx.theme();
    let Some(set) = S::registry(&theme.sets).get(name) else {
        cx.warn(Warning::MissingSet {
            kind: S::KIND,
            name: name.to_string(),
        });
        return Ok(PropertyMap::new());
    };

    chain.push(name.to_string());
    let css = build(set, cx, chain);
    chain.pop();
    css
}

fn build<S: StyleSet>(set: &S, cx: &mut ResolveCx<'_>, chain: &mut Vec<String>) -> Result<PropertyMap> {
    let mut css = S::map_to_css(set.base(), cx)?;
    for (state, map) in set.states().iter() {
        let mut block = S::map_to_css(map, cx)?;
        if state == PseudoState::Disabled {
            block.insert("pointer-events", "none");
        }
        css.insert(state.selector(), block);
    }
    set.extra_groups(cx, &mut css)?;

    if let Some(parent) = set.extends() {
        let mut merged = resolve_ref(parent, cx, chain)?;
        merged.merge(&css);
        css = merged;
    }
    order_selector_groups(&mut css);
    Ok(css)
}

fn precedence(key: &str) -> u8 {
    const FOCUS_WITHIN: &str = "&:focus-within";
    if key == PseudoState::Hover.selector() {
        0
    } else if key == PseudoState::Focus.selector()
        || key == PseudoState::FocusVisible.selector()
        || key == FOCUS_WITHIN
    {
        1
    } else if key == PseudoState::Active.selector() {
        2
    } else if key == PseudoState::Disabled.selector() {
        3
    } else {
        4
    }
}

/// Sorts the keys of `css` into the fixed selector-group order.
pub fn order_selector_groups(css: &mut PropertyMap) {
    css.sort_keys_by(|a, b| {
        let (pa, pb) = (precedence(a), precedence(b));
        match pa.cmp(&pb) {
            Ordering::Equal if pa == 4 => a.cmp(b),
            ordering => ordering,
        }
    });
}

/// Merges a box's fragments and puts the state groups of the result into
/// the fixed order.
///
/// Each set orders its own groups, but merging keeps a group where it first
/// appeared, so a border set's `&:disabled` would otherwise precede a colour
/// set's `&:hover`. Entries other than the hover, focus, active and disabled
/// groups keep their merged position.
pub fn merge_in_cascade_order(fragments: &[PropertyMap]) -> PropertyMap {
    let mut css = merge_fragments(fragments);
    css.sort_keys_by(|a, b| precedence(a).cmp(&precedence(b)));
    css
}

/// Inserts a resolved declaration unless it resolved to nothing.
pub(crate) fn insert_resolved(css: &mut PropertyMap, name: &str, value: String) {
    if !value.is_empty() {
        css.insert(name, value);
    }
}
