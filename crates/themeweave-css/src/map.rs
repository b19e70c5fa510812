//! Property maps: the unit of style handed to the stylesheet.
//!
//! A [`PropertyMap`] is an insertion-ordered map from CSS property names (or
//! nested selector groups) to [`CssValue`]s. Order is significant: two
//! selector groups that match the same element at equal specificity are
//! resolved by the cascade in emission order.

use indexmap::IndexMap;
use serde::Serialize;

/// A single value in a [`PropertyMap`].
///
/// Either a plain declaration value (`"black"`, `"1rem"`) or a nested block
/// keyed by a selector group (`"&:hover"`) or an at-rule
/// (`"@supports not (backdrop-filter: blur(1px))"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CssValue {
    /// A declaration value.
    Value(String),
    /// A nested rule block.
    Block(PropertyMap),
}

impl CssValue {
    /// Returns the declaration value, if this is not a block.
    pub fn as_value(&self) -> Option<&str> {
        match self {
            CssValue::Value(v) => Some(v),
            CssValue::Block(_) => None,
        }
    }

    /// Returns the nested block, if this is one.
    pub fn as_block(&self) -> Option<&PropertyMap> {
        match self {
            CssValue::Block(b) => Some(b),
            CssValue::Value(_) => None,
        }
    }
}

impl From<String> for CssValue {
    fn from(value: String) -> Self {
        CssValue::Value(value)
    }
}

impl From<&str> for CssValue {
    fn from(value: &str) -> Self {
        CssValue::Value(value.to_string())
    }
}

impl From<PropertyMap> for CssValue {
    fn from(block: PropertyMap) -> Self {
        CssValue::Block(block)
    }
}

/// An ordered map of CSS properties and nested selector groups.
///
/// Equality compares entries regardless of order. Class names, however, are
/// derived from the compiled text, so maps that differ only in order may still
/// receive different class names.
///
/// # Example
///
/// ```rust
/// use themeweave_css::PropertyMap;
///
/// let hover = PropertyMap::new().with("color", "red");
/// let map = PropertyMap::new()
///     .with("background", "black")
///     .with("&:hover", hover);
///
/// assert_eq!(map.len(), 2);
/// assert_eq!(map.get("background").and_then(|v| v.as_value()), Some("black"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PropertyMap(IndexMap<String, CssValue>);

impl PropertyMap {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    /// Inserts an entry, returning `self` for chaining.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<CssValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Inserts an entry. An existing key keeps its position and takes the new value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<CssValue>) -> Option<CssValue> {
        self.0.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&CssValue> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Removes an entry, preserving the order of the remaining ones.
    pub fn remove(&mut self, key: &str) -> Option<CssValue> {
        self.0.shift_remove(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &CssValue)> {
        self.0.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.0.keys()
    }

    /// Deep-merges `other` over `self`.
    ///
    /// Blocks present on both sides are merged recursively; any other clash is
    /// won by `other`. Keys already in `self` keep their position, new keys
    /// are appended in `other`'s order.
    pub fn merge(&mut self, other: &PropertyMap) {
        for (key, value) in other.iter() {
            if let (Some(CssValue::Block(mine)), CssValue::Block(theirs)) =
                (self.0.get_mut(key), value)
            {
                mine.merge(theirs);
                continue;
            }
            self.0.insert(key.clone(), value.clone());
        }
    }

    /// Stable-sorts the top-level entries by key.
    pub fn sort_keys_by<F>(&mut self, mut compare: F)
    where
        F: FnMut(&str, &str) -> std::cmp::Ordering,
    {
        self.0.sort_by(|a, _, b, _| compare(a.as_str(), b.as_str()));
    }
}

impl FromIterator<(String, CssValue)> for PropertyMap {
    fn from_iter<T: IntoIterator<Item = (String, CssValue)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a PropertyMap {
    type Item = (&'a String, &'a CssValue);
    type IntoIter = indexmap::map::Iter<'a, String, CssValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Deep-merges a fragment list in order, later fragments winning.
pub fn merge_fragments(fragments: &[PropertyMap]) -> PropertyMap {
    let mut merged = PropertyMap::new();
    for fragment in fragments {
        merged.merge(fragment);
    }
    merged
}
