//! The boundary to the CSS engine.

use themeweave_css::{GlobalStyles, PropertyMap, Stylesheet};

/// Turns fragment lists into class names.
///
/// Implementations must give value-equal fragment lists the same class name.
/// [`ThemeManager`](crate::ThemeManager) relies on that to share classes
/// between components with equivalent styling.
pub trait StyleEngine {
    /// Registers `fragments` (merged in order) and returns their class name.
    fn class_name(&mut self, fragments: &[PropertyMap]) -> String;

    /// Forgets everything registered so far.
    fn reset(&mut self);

    /// Creates the global styles handle for `theme`.
    fn global_styles(&mut self, theme: &str) -> GlobalStyles;
}

impl StyleEngine for Stylesheet {
    fn class_name(&mut self, fragments: &[PropertyMap]) -> String {
        self.css(fragments)
    }

    fn reset(&mut self) {
        self.clear();
    }

    fn global_styles(&mut self, theme: &str) -> GlobalStyles {
        self.create_global(theme, &PropertyMap::new())
    }
}

impl<E: StyleEngine + ?Sized> StyleEngine for &mut E {
    fn class_name(&mut self, fragments: &[PropertyMap]) -> String {
        (**self).class_name(fragments)
    }

    fn reset(&mut self) {
        (**self).reset();
    }

    fn global_styles(&mut self, theme: &str) -> GlobalStyles {
        (**self).global_styles(theme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stylesheet_engine() {
        let mut sheet = Stylesheet::new();
        let fragment = PropertyMap::new().with("color", "red");
        let class = sheet.class_name(&[fragment.clone()]);
        assert_eq!(class, StyleEngine::class_name(&mut sheet, &[fragment]));

        let global = sheet.global_styles("dark");
        assert_eq!(global.theme, "dark");

        StyleEngine::reset(&mut sheet);
        assert!(sheet.is_empty());
    }
}
