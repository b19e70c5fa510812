//! # themeweave-css
//!
//! The CSS-generation side of `themeweave`: it turns ordered lists of
//! [`PropertyMap`] fragments into class names and keeps the resulting rules in
//! an in-memory [`Stylesheet`].
//!
//! The theme resolver never looks inside class names. It relies on one
//! property only: value-equal fragment lists produce identical class names, so
//! equivalent styling declared in different components is emitted once.
//!
//! ```rust
//! use themeweave_css::{PropertyMap, Stylesheet};
//!
//! let mut sheet = Stylesheet::new();
//! let base = PropertyMap::new()
//!     .with("background", "black")
//!     .with("color", "white")
//!     .with("&:hover", PropertyMap::new().with("color", "red"));
//!
//! let class = sheet.css(&[base]);
//! let css = sheet.extract();
//!
//! assert!(css.contains(&format!(".{class}{{background:black;color:white;}}")));
//! assert!(css.contains(&format!(".{class}:hover{{color:red;}}")));
//! ```

mod compile;
mod map;
mod sheet;

pub use compile::{compile, nest_selector};
pub use map::{merge_fragments, CssValue, PropertyMap};
pub use sheet::{class_hash, GlobalStyles, Stylesheet, DEFAULT_CLASS_PREFIX, SHEET_ID};
