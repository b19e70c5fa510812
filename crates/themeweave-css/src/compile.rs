//! Compiling property maps into CSS text.
//!
//! # Rules
//!
//! - Declarations of a block are emitted first, as `selector{name:value;...}`.
//!   A block without declarations emits no rule of its own.
//! - Nested blocks follow, in map order:
//!   - keys starting with `@` wrap the block compiled for the *current*
//!     selector: `@supports x{.c{...}}`
//!   - any other key is a selector group. Each comma-separated part is
//!     combined with each part of the parent selector: `&` is replaced by the
//!     parent, a part starting with `:` is appended to it, anything else
//!     becomes a descendant selector.
//! - Property names in camelCase are written in kebab-case; custom properties
//!   (`--name`) are kept verbatim.

use crate::map::{CssValue, PropertyMap};

/// Compiles `map` as the rules of `selector`.
///
/// # Example
///
/// ```rust
/// use themeweave_css::{compile, PropertyMap};
///
/// let map = PropertyMap::new()
///     .with("backgroundColor", "black")
///     .with("&:hover", PropertyMap::new().with("color", "red"));
///
/// assert_eq!(
///     compile(&map, ".card"),
///     ".card{background-color:black;}.card:hover{color:red;}"
/// );
/// ```
pub fn compile(map: &PropertyMap, selector: &str) -> String {
    let mut declarations = String::new();
    let mut nested = String::new();

    for (key, value) in map {
        match value {
            CssValue::Value(v) => {
                declarations.push_str(&property_name(key));
                declarations.push(':');
                declarations.push_str(v);
                declarations.push(';');
            }
            CssValue::Block(block) if key.starts_with('@') => {
                nested.push_str(key);
                nested.push('{');
                nested.push_str(&compile(block, selector));
                nested.push('}');
            }
            CssValue::Block(block) => {
                nested.push_str(&compile(block, &nest_selector(selector, key)));
            }
        }
    }

    if declarations.is_empty() {
        return nested;
    }
    format!("{selector}{{{declarations}}}{nested}")
}

/// Combines a parent selector with a nested selector group.
///
/// ```rust
/// use themeweave_css::nest_selector;
///
/// assert_eq!(nest_selector(".a", "&:hover"), ".a:hover");
/// assert_eq!(nest_selector(".a", "::selection"), ".a::selection");
/// assert_eq!(nest_selector(".a", "& svg"), ".a svg");
/// assert_eq!(nest_selector(".a", "span"), ".a span");
/// assert_eq!(
///     nest_selector(".a:disabled,.a[x]", "&::before"),
///     ".a:disabled::before,.a[x]::before"
/// );
/// ```
pub fn nest_selector(parent: &str, key: &str) -> String {
    let mut parts = Vec::new();
    for outer in parent.split(',') {
        let outer = outer.trim();
        for inner in key.split(',') {
            let inner = inner.trim();
            if inner.is_empty() {
                continue;
            }
            if inner.contains('&') {
                parts.push(inner.replace('&', outer));
            } else if inner.starts_with(':') {
                parts.push(format!("{outer}{inner}"));
            } else {
                parts.push(format!("{outer} {inner}"));
            }
        }
    }
    parts.join(",")
}

/// Converts a camelCase property name to kebab-case.
pub(crate) fn property_name(name: &str) -> String {
    if name.starts_with("--") {
        return name.to_string();
    }
    let mut out = String::with_capacity(name.len() + 4);
    for c in name.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_block() {
        let map = PropertyMap::new().with("background", "black").with("color", "white");
        assert_eq!(compile(&map, ".x"), ".x{background:black;color:white;}");
    }

    #[test]
    fn test_empty_map_compiles_to_nothing() {
        assert_eq!(compile(&PropertyMap::new(), ".x"), "");
    }

    #[test]
    fn test_nested_only_block_emits_no_empty_rule() {
        let map = PropertyMap::new().with("&:hover", PropertyMap::new().with("color", "red"));
        assert_eq!(compile(&map, ".x"), ".x:hover{color:red;}");
    }

    #[test]
    fn test_declarations_come_before_nested_rules() {
        let map = PropertyMap::new()
            .with("&:hover", PropertyMap::new().with("color", "red"))
            .with("color", "blue");
        assert_eq!(compile(&map, ".x"), ".x{color:blue;}.x:hover{color:red;}");
    }

    #[test]
    fn test_at_rule_wraps_current_selector() {
        let map = PropertyMap::new().with("backdropFilter", "blur(5px)").with(
            "@supports not (backdrop-filter: blur(1px))",
            PropertyMap::new().with("background", "grey"),
        );
        assert_eq!(
            compile(&map, ".x"),
            ".x{backdrop-filter:blur(5px);}@supports not (backdrop-filter: blur(1px)){.x{background:grey;}}"
        );
    }

    #[test]
    fn test_group_expansion_is_cartesian() {
        let map = PropertyMap::new().with(
            "&:checked,&[aria-checked=true]",
            PropertyMap::new()
                .with("color", "violet")
                .with("&::before", PropertyMap::new().with("content", "\"hi\"")),
        );
        assert_eq!(
            compile(&map, ".x"),
            ".x:checked,.x[aria-checked=true]{color:violet;}\
             .x:checked::before,.x[aria-checked=true]::before{content:\"hi\";}"
        );
    }

    #[test]
    fn test_property_name_kebab_case() {
        assert_eq!(property_name("borderColor"), "border-color");
        assert_eq!(property_name("transitionDuration"), "transition-duration");
        assert_eq!(property_name("font-size"), "font-size");
        assert_eq!(property_name("--accentColor"), "--accentColor");
    }

    #[test]
    fn test_descendant_selector() {
        let map = PropertyMap::new().with("& svg", PropertyMap::new().with("color", "red"));
        assert_eq!(compile(&map, ".x"), ".x svg{color:red;}");
    }
}
