//! The theme manager: the stateful entry point.
//!
//! A [`ThemeManager`] owns a CSS engine, remembers every theme document it
//! has been handed, and holds the active theme. Loading works in two phases:
//!
//! 1. Everything that can fail (ancestry, schema, references, sets, boxes,
//!    component inheritance) runs first, without touching the engine.
//! 2. Only then is the engine reset, class names minted and the new
//!    [`ActiveTheme`] installed.
//!
//! A failed load therefore leaves the previous theme and its styles intact.

use std::sync::Arc;

use serde_json::Value;
use themeweave_css::{GlobalStyles, Stylesheet};

use crate::component::{style_component, ResolvedComponent, ResolvedVariant};
use crate::config::{resolve_config, ThemingConfig};
use crate::diagnostics::{Diagnostics, Warning};
use crate::engine::StyleEngine;
use crate::error::{Result, ThemeError};
use crate::model::Theme;
use crate::reference::ResolveCx;
use crate::util::value_kind;

/// Which components of a theme to resolve.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ComponentSelection {
    /// Every component the theme defines, in document order.
    #[default]
    All,
    /// The named components, in the given order.
    Only(Vec<String>),
}

impl ComponentSelection {
    /// Reads a selection from a list of component names.
    ///
    /// # Errors
    ///
    /// [`ThemeError::InvalidComponentList`] for anything but a list of
    /// strings.
    pub fn from_value(value: &Value) -> Result<Self> {
        let Value::Array(items) = value else {
            return Err(ThemeError::InvalidComponentList(value_kind(value).to_string()));
        };
        items
            .iter()
            .map(|item| match item {
                Value::String(name) => Ok(name.clone()),
                other => Err(ThemeError::InvalidComponentList(format!(
                    "a list containing {}",
                    value_kind(other)
                ))),
            })
            .collect::<Result<Vec<_>>>()
            .map(ComponentSelection::Only)
    }

    fn names(&self, theme: &Theme) -> Vec<String> {
        match self {
            ComponentSelection::All => theme.components.keys().cloned().collect(),
            ComponentSelection::Only(names) => names.clone(),
        }
    }
}

impl<S: Into<String>> FromIterator<S> for ComponentSelection {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        ComponentSelection::Only(iter.into_iter().map(Into::into).collect())
    }
}

/// The currently loaded theme.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveTheme {
    pub name: String,
    pub components: Vec<ResolvedComponent>,
    pub global_styles: GlobalStyles,
    /// Problems that degraded the output while this theme was resolved.
    pub warnings: Vec<Warning>,
}

impl ActiveTheme {
    pub fn component(&self, name: &str) -> Option<&ResolvedComponent> {
        self.components.iter().find(|c| c.component == name)
    }

    /// Looks up one variant of one component.
    pub fn variant(&self, component: &str, variant: &str) -> Option<&ResolvedVariant> {
        self.component(component)?.variant(variant)
    }
}

/// Loads themes and keeps the active one.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use themeweave::{ThemeManager, ThemingConfig};
///
/// let config = ThemingConfig::from_value(json!({
///     "name": "dark",
///     "version": "1",
///     "globals": { "colors": { "bg": "black", "fg": "white" } },
///     "sets": {
///         "colorSets": {
///             "base": { "background": "$$colors.bg", "foreground": "$$colors.fg" }
///         }
///     },
///     "components": {
///         "Button": { "default": { "theming": { "colorSet": "$$base" } } }
///     }
/// }))
/// .unwrap();
///
/// let mut manager = ThemeManager::new();
/// let active = manager.load_theme(&config, &[]).unwrap();
///
/// let class = &active.variant("Button", "default").unwrap().class_name;
/// assert!(manager
///     .engine()
///     .extract()
///     .contains(&format!(".{class}{{background:black;color:white;}}")));
/// ```
#[derive(Debug)]
pub struct ThemeManager<E = Stylesheet> {
    engine: E,
    loaded: Vec<ThemingConfig>,
    active: Option<Arc<ActiveTheme>>,
}

impl ThemeManager<Stylesheet> {
    pub fn new() -> Self {
        Self::with_engine(Stylesheet::new())
    }
}

impl Default for ThemeManager<Stylesheet> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: StyleEngine> ThemeManager<E> {
    pub fn with_engine(engine: E) -> Self {
        Self {
            engine,
            loaded: Vec::new(),
            active: None,
        }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Every document handed to the manager so far, first load first.
    pub fn loaded_themes(&self) -> &[ThemingConfig] {
        &self.loaded
    }

    pub fn active(&self) -> Option<&Arc<ActiveTheme>> {
        self.active.as_ref()
    }

    /// Loads `config` and resolves all of its components.
    ///
    /// `pool` holds documents that may serve as `basedOn` ancestors without
    /// being loaded themselves.
    pub fn load_theme(
        &mut self,
        config: &ThemingConfig,
        pool: &[ThemingConfig],
    ) -> Result<Arc<ActiveTheme>> {
        self.load_components(&ComponentSelection::All, config, pool)
    }

    /// Loads `config` and resolves the selected components.
    ///
    /// When the resolved theme is already active, the active record is
    /// returned as is and nothing is re-resolved.
    pub fn load_components(
        &mut self,
        selection: &ComponentSelection,
        config: &ThemingConfig,
        pool: &[ThemingConfig],
    ) -> Result<Arc<ActiveTheme>> {
        if !self.loaded.iter().any(|c| c.name() == config.name()) {
            self.loaded.push(config.clone());
        }

        let mut diagnostics = Diagnostics::new();
        let resolved = resolve_config(config, &self.loaded, pool, &mut diagnostics)?;

        if let Some(active) = &self.active {
            if active.name == resolved.name() {
                tracing::debug!(theme = %active.name, "theme already active");
                return Ok(Arc::clone(active));
            }
        }

        let theme = Theme::from_config(&resolved)?;
        let styled = {
            let mut cx = ResolveCx::new(&theme, &mut diagnostics);
            selection
                .names(&theme)
                .iter()
                .map(|name| style_component(name, &mut cx))
                .collect::<Result<Vec<_>>>()?
        };

        self.engine.reset();
        let components = styled
            .into_iter()
            .map(|component| component.into_resolved(&mut self.engine))
            .collect();
        let global_styles = self.engine.global_styles(&theme.name);

        let active = Arc::new(ActiveTheme {
            name: resolved.name().to_string(),
            components,
            global_styles,
            warnings: diagnostics.into_warnings(),
        });
        tracing::debug!(
            theme = %active.name,
            components = active.components.len(),
            warnings = active.warnings.len(),
            "theme activated"
        );
        self.active = Some(Arc::clone(&active));
        Ok(active)
    }

    /// Drops the active theme and every registered style.
    ///
    /// Loaded documents stay known for later `basedOn` lookups.
    pub fn unload(&mut self) {
        self.engine.reset();
        self.active = None;
    }
}
