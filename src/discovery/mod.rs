//! Source discovery
//!
//! Two passes, cheapest first:
//!
//! - `walker`: recursively list files carrying the configured extension
//! - `select`: read each candidate, extract its module name and keep it when
//!   the name matches the [`ModuleSelector`]
//!
//! The second pass exists because selection is over logical module names,
//! which are unknown until a file has been read.

mod config;
mod select;
mod selector;
mod walker;

pub use config::{DEFAULT_EXTENSION, DiscoveryConfig};
pub use select::{Selection, SourceModule, select_modules, select_modules_with};
pub use selector::ModuleSelector;
pub use walker::{SourceWalker, discover, glob_match, has_extension};
