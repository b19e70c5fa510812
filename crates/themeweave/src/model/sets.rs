//! Border, colour and font style sets.

use serde::Deserialize;

use super::states::PseudoStates;
use super::value::{ColorValue, FilterValue, Scalar};

/// A set given by name (`$$name` or `name`) or declared inline.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum SetRef<T> {
    Named(String),
    Inline(Box<T>),
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ColorMap {
    pub background: Option<ColorValue>,
    pub border: Option<ColorValue>,
    pub filter: Option<Scalar>,
    pub backdrop_filter: Option<FilterValue>,
    pub foreground: Option<ColorValue>,
    pub icon: Option<ColorValue>,
    pub shadow: Option<Scalar>,
    pub transition_speed: Option<Scalar>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ColorSet {
    #[serde(rename = "__extends")]
    pub extends: Option<SetRef<ColorSet>>,
    #[serde(rename = "__selection")]
    pub selection: Option<ColorMap>,
    #[serde(flatten)]
    pub states: PseudoStates<ColorMap>,
    #[serde(flatten)]
    pub base: ColorMap,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FontMap {
    pub family: Option<Scalar>,
    pub letter_spacing: Option<Scalar>,
    pub line_height: Option<Scalar>,
    pub size: Option<Scalar>,
    pub style: Option<Scalar>,
    pub transform: Option<Scalar>,
    pub weight: Option<Scalar>,
    pub transition_speed: Option<Scalar>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct FontSet {
    #[serde(rename = "__extends")]
    pub extends: Option<SetRef<FontSet>>,
    #[serde(flatten)]
    pub states: PseudoStates<FontMap>,
    #[serde(flatten)]
    pub base: FontMap,
}

/// Border properties of a single side.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct BorderSide {
    pub image: Option<Scalar>,
    pub style: Option<Scalar>,
    pub width: Option<Scalar>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BorderMap {
    pub image: Option<Scalar>,
    pub style: Option<Scalar>,
    pub width: Option<Scalar>,
    pub radius: Option<Scalar>,
    pub top: Option<BorderSide>,
    pub right: Option<BorderSide>,
    pub bottom: Option<BorderSide>,
    pub left: Option<BorderSide>,
    pub transition_speed: Option<Scalar>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct BorderSet {
    #[serde(rename = "__extends")]
    pub extends: Option<SetRef<BorderSet>>,
    #[serde(flatten)]
    pub states: PseudoStates<BorderMap>,
    #[serde(flatten)]
    pub base: BorderMap,
}
