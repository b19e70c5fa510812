//! `$$` reference tokens and their resolution against a theme's globals.
//!
//! A token is `$$` followed by a dotted path (`$$colors.brand.primary`) and an
//! optional `|suffix` that is appended verbatim to the resolved value
//! (`$$colors.bg|aa` gives `#cc6655aa` for `#cc6655`). A string may mix any
//! number of tokens with literal text:
//!
//! ```text
//! "$$spacing.sm $$spacing.md"     ->  "4px 8px"
//! "1px solid $$colors.border"     ->  "1px solid #ddd"
//! ```
//!
//! Targets that are themselves token strings are resolved recursively; a chain
//! that comes back to a path it is already resolving is an error.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};

use crate::diagnostics::{Diagnostics, Warning};
use crate::error::{CycleKind, Result, ThemeError};
use crate::model::{ColorValue, GradientDefinition, Scalar, Theme};

static TOKEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\$\$([\w-]+(?:\.[\w-]+)*)(?:\|([^\s,;)$]*))?").expect("token pattern is valid")
});

/// Returns true if `value` contains at least one reference token.
pub fn contains_reference(value: &str) -> bool {
    TOKEN.is_match(value)
}

/// A dotted path into the globals tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VarPath(Vec<String>);

impl VarPath {
    /// Parses `colors.bg` or `$$colors.bg`. Empty segments are rejected.
    pub fn parse(path: &str) -> Option<Self> {
        let path = path.strip_prefix("$$").unwrap_or(path);
        let segments: Vec<String> = path.split('.').map(str::to_string).collect();
        if segments.iter().any(String::is_empty) {
            return None;
        }
        Some(Self(segments))
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// Walks `globals` along the path. `null` counts as missing.
    pub fn lookup<'g>(&self, globals: &'g Map<String, Value>) -> Option<&'g Value> {
        let (first, rest) = self.0.split_first()?;
        let mut current = globals.get(first)?;
        for segment in rest {
            current = current.as_object()?.get(segment)?;
        }
        (!current.is_null()).then_some(current)
    }
}

impl fmt::Display for VarPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join("."))
    }
}

/// Turns a terminal globals value into text, or returns `None` to fall back
/// to the plain string form.
pub type Transform<'t, 'a> = dyn Fn(&mut ResolveCx<'a>, &Value) -> Result<Option<String>> + 't;

/// Resolution context: the theme being resolved plus the warning sink.
///
/// Every resolver in the crate threads one of these through.
pub struct ResolveCx<'a> {
    theme: &'a Theme,
    diagnostics: &'a mut Diagnostics,
    stack: Vec<String>,
}

impl<'a> ResolveCx<'a> {
    pub fn new(theme: &'a Theme, diagnostics: &'a mut Diagnostics) -> Self {
        Self {
            theme,
            diagnostics,
            stack: Vec::new(),
        }
    }

    pub fn theme(&self) -> &'a Theme {
        self.theme
    }

    pub fn warn(&mut self, warning: Warning) {
        self.diagnostics.warn(warning);
    }

    /// Replaces every token in `value` with the text of its target.
    ///
    /// Strings without tokens come back unchanged. A token whose path does not
    /// exist is replaced by nothing, and a warning is recorded.
    pub fn resolve(&mut self, value: &str) -> Result<String> {
        self.resolve_with(value, &|_, _| Ok(None))
    }

    /// Like [`resolve`](Self::resolve), passing every terminal value through
    /// `transform` first.
    pub fn resolve_with(&mut self, value: &str, transform: &Transform<'_, 'a>) -> Result<String> {
        if !contains_reference(value) {
            return Ok(value.to_string());
        }

        let mut out = String::with_capacity(value.len());
        let mut last = 0;
        for caps in TOKEN.captures_iter(value) {
            let (Some(token), Some(path)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            out.push_str(&value[last..token.start()]);
            last = token.end();

            let Some(path) = VarPath::parse(path.as_str()) else {
                continue;
            };
            if let Some(resolved) = self.resolve_token(token.as_str(), &path, transform)? {
                out.push_str(&resolved);
                if let Some(suffix) = caps.get(2) {
                    out.push_str(suffix.as_str());
                }
            }
        }
        out.push_str(&value[last..]);
        Ok(out)
    }

    fn resolve_token(
        &mut self,
        token: &str,
        path: &VarPath,
        transform: &Transform<'_, 'a>,
    ) -> Result<Option<String>> {
        let key = path.to_string();
        if self.stack.contains(&key) {
            return Err(ThemeError::cycle(CycleKind::Reference, &self.stack, &key));
        }

        let theme = self.theme;
        let Some(target) = path.lookup(&theme.globals) else {
            self.warn(Warning::UnresolvedReference {
                token: token.to_string(),
                path: key,
            });
            return Ok(None);
        };

        self.stack.push(key);
        let resolved = self.resolve_terminal(token, path, target, transform);
        self.stack.pop();
        resolved
    }

    fn resolve_terminal(
        &mut self,
        token: &str,
        path: &VarPath,
        target: &Value,
        transform: &Transform<'_, 'a>,
    ) -> Result<Option<String>> {
        if let Value::String(text) = target {
            if contains_reference(text) {
                return self.resolve_with(text, transform).map(Some);
            }
        }
        if let Some(custom) = transform(self, target)? {
            return Ok(Some(custom));
        }
        match target {
            Value::String(text) => Ok(Some(text.clone())),
            Value::Number(n) => Ok(Some(n.to_string())),
            Value::Bool(b) => Ok(Some(b.to_string())),
            _ => {
                self.warn(Warning::NonScalarReference {
                    token: token.to_string(),
                    path: path.to_string(),
                });
                Ok(None)
            }
        }
    }

    pub fn resolve_scalar(&mut self, scalar: &Scalar) -> Result<String> {
        match scalar {
            Scalar::Text(text) => self.resolve(text),
            Scalar::Number(n) => Ok(n.to_string()),
        }
    }

    /// Resolves a colour.
    ///
    /// Gradients, inline or reached through a token, contribute their
    /// `definition` when `allow_gradient` is set and their `fallbackColor`
    /// otherwise.
    pub fn resolve_color(&mut self, color: &ColorValue, allow_gradient: bool) -> Result<String> {
        match color {
            ColorValue::Gradient(gradient) => self.resolve_gradient(gradient, allow_gradient),
            ColorValue::Scalar(Scalar::Number(n)) => Ok(n.to_string()),
            ColorValue::Scalar(Scalar::Text(text)) => self.resolve_with(text, &|cx, value| {
                match GradientDefinition::from_value(value) {
                    Some(gradient) => cx.resolve_gradient(&gradient, allow_gradient).map(Some),
                    None => Ok(None),
                }
            }),
        }
    }

    fn resolve_gradient(
        &mut self,
        gradient: &GradientDefinition,
        allow_gradient: bool,
    ) -> Result<String> {
        if allow_gradient {
            return self.resolve(&gradient.definition);
        }
        match &gradient.fallback_color {
            Some(fallback) => self.resolve_scalar(fallback),
            None => Ok(String::new()),
        }
    }

    /// Resolves every string in a props value: mappings field by field, lists
    /// element by element.
    pub fn resolve_props(&mut self, props: &Value) -> Result<Value> {
        Ok(match props {
            Value::String(text) => Value::String(self.resolve(text)?),
            Value::Array(items) => Value::Array(
                items
                    .iter()
                    .map(|item| self.resolve_props(item))
                    .collect::<Result<_>>()?,
            ),
            Value::Object(fields) => {
                let mut resolved = Map::new();
                for (key, value) in fields {
                    resolved.insert(key.clone(), self.resolve_props(value)?);
                }
                Value::Object(resolved)
            }
            other => other.clone(),
        })
    }
}
