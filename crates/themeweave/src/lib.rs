//! Themeweave - declarative component theming compiled to atomic CSS classes.
//!
//! A theme document declares a tree of global variables, reusable style sets
//! and, per component, the boxes its variants and parts are drawn with.
//! Themeweave resolves all of it into class names:
//!
//! - `$$path.to.var` tokens, with optional `|suffix`, resolved against the
//!   globals tree
//! - border, colour and font sets with pseudo-states and `__extends`
//! - boxes composing one set of each kind plus layout properties
//! - components with variants, parts, default props and `__extends`
//! - themes inheriting from other themes through `basedOn`
//!
//! # Quick Start
//!
//! ```rust
//! use themeweave::{ThemeManager, ThemingConfig};
//!
//! let config = ThemingConfig::from_yaml(r#"
//! name: dark
//! version: "1.0"
//! globals:
//!   colors:
//!     bg: black
//!     fg: white
//! sets:
//!   colorSets:
//!     base:
//!       background: $$colors.bg
//!       foreground: $$colors.fg
//!       __hover:
//!         foreground: $$colors.bg
//! components:
//!   Button:
//!     default:
//!       theming:
//!         colorSet: $$base
//!       defaultProps:
//!         type: button
//! "#).unwrap();
//!
//! let mut manager = ThemeManager::new();
//! let active = manager.load_theme(&config, &[]).unwrap();
//!
//! let button = active.variant("Button", "default").unwrap();
//! assert!(button.class_name.starts_with("tw"));
//! assert_eq!(button.default_props["type"], "button");
//! assert!(active.warnings.is_empty());
//! ```
//!
//! # Degradation
//!
//! Missing data never aborts a load. An unknown variable resolves to nothing,
//! an unknown set to no declarations, an unresolvable variant is dropped.
//! Each case is logged with `tracing` and listed in
//! [`ActiveTheme::warnings`]. Structural problems (missing top-level keys,
//! malformed documents, cycles) are [`ThemeError`]s.

mod boxes;
mod component;
mod diagnostics;
mod engine;
mod error;
mod manager;
mod reference;
mod util;

pub mod config;
pub mod model;
pub mod sets;

// Re-export public API
pub use boxes::{box_to_props, resolve_box, PartsContext};
pub use component::{
    resolve_component, style_component, ResolvedComponent, ResolvedVariant, StyledComponent,
    StyledVariant,
};
pub use config::{resolve_config, ThemePool, ThemingConfig};
pub use diagnostics::{Diagnostics, Warning};
pub use engine::StyleEngine;
pub use error::{CycleKind, Result, ThemeError, REQUIRED_KEYS};
pub use manager::{ActiveTheme, ComponentSelection, ThemeManager};
pub use model::Theme;
pub use reference::{contains_reference, ResolveCx, Transform, VarPath};
pub use sets::{set_to_css, SetKind, StyleSet};
pub use util::deep_merge;

pub use themeweave_css::{GlobalStyles, PropertyMap, Stylesheet};
