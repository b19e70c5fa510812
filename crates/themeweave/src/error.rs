//! Error types for theme resolution.
//!
//! Only structural problems are errors. Missing data (an unknown variable, a
//! set name nobody defined) degrades the output and is reported through
//! [`Diagnostics`](crate::Diagnostics) instead.

use std::fmt;
use std::path::PathBuf;

/// Top-level keys every theme document must carry.
pub const REQUIRED_KEYS: &[&str] = &["name", "components", "version", "globals", "sets"];

/// The kind of chain a cycle was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleKind {
    /// `$$` references inside the globals tree.
    Reference,
    /// `__extends` between border, colour or font sets.
    Set,
    /// `__extends` between boxes, or part aliases.
    Box,
    /// `__extends` between components.
    Component,
    /// `basedOn` between themes.
    Theme,
}

impl fmt::Display for CycleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CycleKind::Reference => "variable reference",
            CycleKind::Set => "style set",
            CycleKind::Box => "box",
            CycleKind::Component => "component",
            CycleKind::Theme => "theme",
        };
        f.write_str(name)
    }
}

/// Fatal errors raised while loading or resolving a theme.
#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    /// No configuration was given at all.
    #[error("no theming config found")]
    MissingConfig,

    /// The document is not a mapping, or its `name` is not a string.
    #[error("invalid theme document{}: {message}", theme_suffix(.theme))]
    InvalidDocument {
        theme: Option<String>,
        message: String,
    },

    /// One or more of [`REQUIRED_KEYS`] is absent.
    #[error("falsy configuration for {theme}: missing {}", .missing.join(", "))]
    MissingKeys {
        theme: String,
        missing: Vec<&'static str>,
    },

    /// The component selection is not a list of component names.
    #[error("components must be a list of strings, got {0}")]
    InvalidComponentList(String),

    /// A chain of references leads back to itself.
    #[error("cycle detected in {kind} chain: {}", .path.join(" -> "))]
    Cycle { kind: CycleKind, path: Vec<String> },

    /// The document could not be mapped onto the theme model.
    #[error("theme '{theme}' does not match the theming schema: {source}")]
    Schema {
        theme: String,
        #[source]
        source: serde_json::Error,
    },

    /// JSON parse error.
    #[error("failed to parse theme JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML parse error.
    #[error("failed to parse theme YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A theme file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ThemeError {
    /// Create a cycle error from the visited chain and the repeated entry.
    pub fn cycle(kind: CycleKind, chain: &[String], repeated: &str) -> Self {
        let mut path = chain.to_vec();
        path.push(repeated.to_string());
        Self::Cycle { kind, path }
    }

    pub(crate) fn invalid_document(theme: Option<&str>, message: impl Into<String>) -> Self {
        Self::InvalidDocument {
            theme: theme.map(str::to_string),
            message: message.into(),
        }
    }
}

fn theme_suffix(theme: &Option<String>) -> String {
    theme
        .as_ref()
        .map(|t| format!(" '{}'", t))
        .unwrap_or_default()
}

/// Result type for theme operations.
pub type Result<T> = std::result::Result<T, ThemeError>;
