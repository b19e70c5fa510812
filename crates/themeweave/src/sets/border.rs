use indexmap::IndexMap;
use themeweave_css::PropertyMap;

use super::{insert_resolved, SetKind, StyleSet};
use crate::error::Result;
use crate::model::{BorderMap, BorderSet, BorderSide, PseudoStates, Scalar, SetRef, ThemeSets};
use crate::reference::ResolveCx;

impl StyleSet for BorderSet {
    type Map = BorderMap;

    const KIND: SetKind = SetKind::Border;

    fn registry(sets: &ThemeSets) -> &IndexMap<String, Self> {
        &sets.border_sets
    }

    fn extends(&self) -> Option<&SetRef<Self>> {
        self.extends.as_ref()
    }

    fn base(&self) -> &BorderMap {
        &self.base
    }

    fn states(&self) -> &PseudoStates<BorderMap> {
        &self.states
    }

    fn map_to_css(map: &BorderMap, cx: &mut ResolveCx<'_>) -> Result<PropertyMap> {
        let mut css = PropertyMap::new();
        if let Some(speed) = &map.transition_speed {
            insert_resolved(&mut css, "transition-duration", cx.resolve_scalar(speed)?);
        }
        side_to_css("border", &map.image, &map.style, &map.width, cx, &mut css)?;
        if let Some(radius) = &map.radius {
            insert_resolved(&mut css, "border-radius", cx.resolve_scalar(radius)?);
        }

        let sides = [
            ("border-top", &map.top),
            ("border-right", &map.right),
            ("border-bottom", &map.bottom),
            ("border-left", &map.left),
        ];
        for (prefix, side) in sides {
            if let Some(BorderSide { image, style, width }) = side {
                side_to_css(prefix, image, style, width, cx, &mut css)?;
            }
        }
        Ok(css)
    }
}

fn side_to_css(
    prefix: &str,
    image: &Option<Scalar>,
    style: &Option<Scalar>,
    width: &Option<Scalar>,
    cx: &mut ResolveCx<'_>,
    css: &mut PropertyMap,
) -> Result<()> {
    for (suffix, value) in [("image", image), ("style", style), ("width", width)] {
        if let Some(value) = value {
            insert_resolved(css, &format!("{prefix}-{suffix}"), cx.resolve_scalar(value)?);
        }
    }
    Ok(())
}
