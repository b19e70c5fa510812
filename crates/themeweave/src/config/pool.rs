//! Candidate theme documents for `basedOn` lookups.
//!
//! Documents come from two sources:
//!
//! 1. **Inline documents** (added via [`ThemePool::add`]) have highest priority
//! 2. **Theme files** found by [`ThemePool::add_dir`], in directory
//!    registration order (first directory wins)
//!
//! Entries are keyed by the theme's `name`, not by file name.
//!
//! # Supported Extensions
//!
//! | Priority | Extension |
//! |----------|-----------|
//! | 1 (highest) | `.json` |
//! | 2 | `.yaml` |
//! | 3 (lowest) | `.yml` |
//!
//! When one directory holds files with the same base name but different
//! extensions (`dark.json` and `dark.yaml`), only the higher-priority file is
//! read.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::error::{Result, ThemeError};

use super::ThemingConfig;

/// Recognized theme file extensions in priority order.
pub const THEME_EXTENSIONS: &[&str] = &["json", "yaml", "yml"];

/// An ordered collection of theme documents.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use themeweave::{ThemePool, ThemingConfig};
///
/// let mut pool = ThemePool::new();
/// pool.add(ThemingConfig::from_value(json!({
///     "name": "base",
///     "version": "1",
///     "globals": {},
///     "sets": {},
///     "components": {}
/// })).unwrap());
///
/// assert!(pool.contains("base"));
/// assert_eq!(pool.as_slice().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ThemePool {
    inline: Vec<ThemingConfig>,
    files: Vec<ThemingConfig>,
    entries: Vec<ThemingConfig>,
}

impl ThemePool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a document that shadows any file-based theme of the same name.
    ///
    /// Adding a second inline document with the same name replaces the first.
    pub fn add(&mut self, config: ThemingConfig) {
        self.inline.retain(|c| c.name() != config.name());
        self.inline.push(config);
        self.rebuild();
    }

    /// Reads one theme file.
    pub fn add_file<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let config = ThemingConfig::from_file(path)?;
        self.push_file(config);
        self.rebuild();
        Ok(())
    }

    /// Reads every theme file directly inside `path`.
    ///
    /// Files are read in name order. Themes whose name is already known from
    /// an earlier file are skipped.
    pub fn add_dir<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let path = path.as_ref();
        let read_error = |source| ThemeError::Load {
            path: path.to_path_buf(),
            source,
        };

        let mut candidates: Vec<(String, usize, PathBuf)> = Vec::new();
        for entry in std::fs::read_dir(path).map_err(read_error)? {
            let file = entry.map_err(read_error)?.path();
            if !file.is_file() {
                continue;
            }
            let (Some(stem), Some(priority)) = (
                file.file_stem().and_then(|s| s.to_str()),
                extension_priority(&file),
            ) else {
                continue;
            };
            candidates.push((stem.to_string(), priority, file));
        }
        candidates.sort();

        let mut stems = HashSet::new();
        for (stem, _, file) in candidates {
            if !stems.insert(stem) {
                continue;
            }
            let config = ThemingConfig::from_file(&file)?;
            self.push_file(config);
        }
        self.rebuild();
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&ThemingConfig> {
        self.entries.iter().find(|c| c.name() == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(ThemingConfig::name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All documents, highest priority first.
    pub fn as_slice(&self) -> &[ThemingConfig] {
        &self.entries
    }

    fn push_file(&mut self, config: ThemingConfig) {
        if self.files.iter().any(|c| c.name() == config.name()) {
            tracing::debug!(
                theme = config.name(),
                path = ?config.source_path(),
                "theme already registered, skipping file"
            );
            return;
        }
        self.files.push(config);
    }

    fn rebuild(&mut self) {
        let shadowed: HashSet<&str> = self.inline.iter().map(ThemingConfig::name).collect();
        self.entries = self
            .inline
            .iter()
            .chain(self.files.iter().filter(|c| !shadowed.contains(c.name())))
            .cloned()
            .collect();
    }
}

impl AsRef<[ThemingConfig]> for ThemePool {
    fn as_ref(&self) -> &[ThemingConfig] {
        self.as_slice()
    }
}

fn extension_priority(path: &Path) -> Option<usize> {
    let extension = path.extension()?.to_str()?;
    THEME_EXTENSIONS.iter().position(|e| *e == extension)
}
