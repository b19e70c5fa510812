//! The stylesheet: class-name generation and rule storage.
//!
//! [`Stylesheet::css`] turns an ordered list of property-map fragments into a
//! class name. Fragments are deep-merged in order, compiled against a
//! placeholder selector, and the compiled text is hashed. Equal input text
//! always yields the same class name, so equivalent styling specified in two
//! places is emitted once.

use indexmap::IndexMap;

use crate::compile::compile;
use crate::map::{merge_fragments, PropertyMap};

/// Identifier of the stylesheet element a host would inject the sheet into.
pub const SHEET_ID: &str = "_themeweave";

/// Default prefix for generated class names.
pub const DEFAULT_CLASS_PREFIX: &str = "tw";

/// Hashes compiled CSS text into a class name.
///
/// Multiplicative string hash (seed 11, factor 101) over the characters of
/// `text`, wrapping at 32 bits.
pub fn class_hash(prefix: &str, text: &str) -> String {
    let hash = text
        .chars()
        .fold(11u32, |acc, c| acc.wrapping_mul(101).wrapping_add(c as u32));
    format!("{prefix}{hash}")
}

/// Handle on the global stylesheet created for one theme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlobalStyles {
    /// Identifier of the sheet the styles live in.
    pub sheet_id: String,
    /// Name of the theme this handle was created for.
    pub theme: String,
    /// Compiled global rules.
    pub css: String,
}

/// An in-memory stylesheet.
///
/// # Example
///
/// ```rust
/// use themeweave_css::{PropertyMap, Stylesheet};
///
/// let mut sheet = Stylesheet::new();
/// let a = sheet.css(&[PropertyMap::new().with("color", "red")]);
/// let b = sheet.css(&[PropertyMap::new(), PropertyMap::new().with("color", "red")]);
///
/// assert_eq!(a, b);
/// assert_eq!(sheet.len(), 1);
/// assert_eq!(sheet.rule(&a), Some(format!(".{a}{{color:red;}}").as_str()));
/// ```
#[derive(Debug, Clone)]
pub struct Stylesheet {
    prefix: String,
    rules: IndexMap<String, String>,
    global: Option<GlobalStyles>,
}

impl Default for Stylesheet {
    fn default() -> Self {
        Self::new()
    }
}

impl Stylesheet {
    /// Creates an empty sheet using [`DEFAULT_CLASS_PREFIX`].
    pub fn new() -> Self {
        Self::with_prefix(DEFAULT_CLASS_PREFIX)
    }

    /// Creates an empty sheet generating class names with `prefix`.
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            rules: IndexMap::new(),
            global: None,
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Registers a fragment list and returns its class name.
    pub fn css(&mut self, fragments: &[PropertyMap]) -> String {
        let merged = merge_fragments(fragments);
        let class = class_hash(&self.prefix, &compile(&merged, "&"));
        if !self.rules.contains_key(&class) {
            let rule = compile(&merged, &format!(".{class}"));
            self.rules.insert(class.clone(), rule);
        }
        class
    }

    /// Returns the compiled rules registered for `class`.
    pub fn rule(&self, class: &str) -> Option<&str> {
        self.rules.get(class).map(String::as_str)
    }

    /// Number of distinct classes registered.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty() && self.global.is_none()
    }

    /// Returns the whole sheet: global styles first, then class rules in
    /// registration order.
    pub fn extract(&self) -> String {
        let mut out = String::new();
        if let Some(global) = &self.global {
            out.push_str(&global.css);
        }
        for rule in self.rules.values() {
            out.push_str(rule);
        }
        out
    }

    /// Drops every rule and the global styles.
    pub fn clear(&mut self) {
        self.rules.clear();
        self.global = None;
    }

    /// Replaces the global styles with `rules` compiled for `html,body`.
    pub fn create_global(&mut self, theme: &str, rules: &PropertyMap) -> GlobalStyles {
        let global = GlobalStyles {
            sheet_id: SHEET_ID.to_string(),
            theme: theme.to_string(),
            css: compile(rules, "html,body"),
        };
        self.global = Some(global.clone());
        global
    }
}
