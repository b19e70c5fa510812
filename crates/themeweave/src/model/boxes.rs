//! Box definitions: one element's complete visual style.

use indexmap::IndexMap;
use serde::Deserialize;

use super::sets::{BorderSet, ColorSet, FontSet, SetRef};
use super::states::PseudoStates;
use super::value::Scalar;

/// Free-form declarations of a `::before` / `::after` pseudo-element.
pub type ElementProps = IndexMap<String, Scalar>;

/// A box given by name or declared inline.
///
/// Names are looked up in the box-set registry, then among the sibling parts
/// of the variant being resolved.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum BoxRef {
    Named(String),
    Inline(Box<BoxDefinition>),
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BoxDefinition {
    #[serde(rename = "__extends")]
    pub extends: Option<BoxRef>,
    pub animation: Option<Scalar>,
    pub border_set: Option<SetRef<BorderSet>>,
    pub color_set: Option<SetRef<ColorSet>>,
    pub font_set: Option<SetRef<FontSet>>,
    pub padding: Option<Scalar>,
    pub height: Option<Scalar>,
    pub width: Option<Scalar>,
    pub before: Option<ElementProps>,
    pub after: Option<ElementProps>,
    #[serde(flatten)]
    pub states: PseudoStates<PseudoElements>,
}

/// Pseudo-elements styled for one pseudo-state.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PseudoElements {
    pub before: Option<ElementProps>,
    pub after: Option<ElementProps>,
}
