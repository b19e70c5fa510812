//! Typed theme definitions.
//!
//! Theme documents arrive as JSON or YAML and are mapped onto these types with
//! `serde` after their `basedOn` ancestry has been merged. Field names follow
//! the document keys (`colorSet`, `__extends`, `__hover`, ...).

mod boxes;
mod component;
mod sets;
mod states;
mod theme;
mod value;

pub use boxes::{BoxDefinition, BoxRef, ElementProps, PseudoElements};
pub use component::{ComponentDefinition, VariantDefinition};
pub use sets::{BorderMap, BorderSet, BorderSide, ColorMap, ColorSet, FontMap, FontSet, SetRef};
pub use states::{PseudoState, PseudoStates, SELECTION_SELECTOR};
pub use theme::{Theme, ThemeSets};
pub use value::{BackdropFilter, ColorValue, FilterValue, GradientDefinition, Scalar};
