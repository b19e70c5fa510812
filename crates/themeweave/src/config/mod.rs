//! Theme documents and their `basedOn` ancestry.

mod document;
mod pool;
mod resolve;

pub use document::ThemingConfig;
pub use pool::{ThemePool, THEME_EXTENSIONS};
pub use resolve::resolve_config;
