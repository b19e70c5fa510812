//! Recoverable resolution problems.
//!
//! A theme that references a variable nobody defined, or a set name with a
//! typo, still resolves: the affected property is left out, the variant is
//! dropped, and so on. Each such case is recorded as a [`Warning`] so callers
//! and tests can see exactly what degraded, and is logged through `tracing`.

use std::fmt;

use crate::sets::SetKind;

/// A single recoverable problem found while resolving a theme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// A `$$` token points at a path that does not exist.
    UnresolvedReference { token: String, path: String },
    /// A `$$` token resolves to a mapping or list where a scalar was expected.
    NonScalarReference { token: String, path: String },
    /// A named style set is not in its registry.
    MissingSet { kind: SetKind, name: String },
    /// A box reference matches neither a box set nor a sibling part.
    UnresolvedBox { name: String, context: Option<String> },
    /// A requested component is not defined by the theme.
    MissingComponent { name: String },
    /// A `basedOn` ancestor is neither cached nor in the pool.
    MissingAncestor { theme: String, based_on: String },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::UnresolvedReference { token, path } => {
                write!(f, "no variable found for {} ({}), skipped", token, path)
            }
            Warning::NonScalarReference { token, path } => {
                write!(f, "variable {} ({}) is not a scalar value, skipped", token, path)
            }
            Warning::MissingSet { kind, name } => {
                write!(f, "no {} set named '{}'", kind, name)
            }
            Warning::UnresolvedBox { name, context } => match context {
                Some(context) => write!(f, "no box or part named '{}' (in {})", name, context),
                None => write!(f, "no box named '{}'", name),
            },
            Warning::MissingComponent { name } => {
                write!(f, "component '{}' is not defined by the theme", name)
            }
            Warning::MissingAncestor { theme, based_on } => {
                write!(f, "theme '{}' is based on unknown theme '{}'", theme, based_on)
            }
        }
    }
}

/// Collector for [`Warning`]s.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    warnings: Vec<Warning>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a warning and logs it.
    pub fn warn(&mut self, warning: Warning) {
        tracing::warn!(%warning, "theme resolution degraded");
        self.warnings.push(warning);
    }

    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    pub fn is_empty(&self) -> bool {
        self.warnings.is_empty()
    }

    pub fn len(&self) -> usize {
        self.warnings.len()
    }

    pub fn into_warnings(self) -> Vec<Warning> {
        self.warnings
    }
}
