//! `basedOn` ancestry.

use crate::diagnostics::{Diagnostics, Warning};
use crate::error::{CycleKind, Result, ThemeError};

use super::ThemingConfig;

/// Merges `config` over its `basedOn` ancestors.
///
/// Ancestors are looked up by name in `cache` (themes loaded before), then in
/// `pool`. Each ancestor is resolved the same way before `config` is merged
/// over it, so the nearest theme wins at every depth and lists accumulate
/// from the root down. An ancestor that cannot be found leaves `config`
/// unmerged and records a warning.
pub fn resolve_config(
    config: &ThemingConfig,
    cache: &[ThemingConfig],
    pool: &[ThemingConfig],
    diagnostics: &mut Diagnostics,
) -> Result<ThemingConfig> {
    let mut chain = vec![config.name().to_string()];
    resolve_ancestry(config, cache, pool, &mut chain, diagnostics)
}

fn resolve_ancestry(
    config: &ThemingConfig,
    cache: &[ThemingConfig],
    pool: &[ThemingConfig],
    chain: &mut Vec<String>,
    diagnostics: &mut Diagnostics,
) -> Result<ThemingConfig> {
    let Some(parent) = config.based_on() else {
        return Ok(config.clone());
    };
    if chain.iter().any(|name| name == parent) {
        return Err(ThemeError::cycle(CycleKind::Theme, chain, parent));
    }

    let ancestor = cache
        .iter()
        .chain(pool)
        .find(|candidate| candidate.name() == parent);
    let Some(ancestor) = ancestor else {
        diagnostics.warn(Warning::MissingAncestor {
            theme: config.name().to_string(),
            based_on: parent.to_string(),
        });
        return Ok(config.clone());
    };

    chain.push(parent.to_string());
    let ancestor = resolve_ancestry(ancestor, cache, pool, chain, diagnostics)?;
    chain.pop();

    tracing::debug!(theme = config.name(), based_on = parent, "merged theme ancestry");
    Ok(config.merged_over(&ancestor))
}
