//! Module tree output
//!
//! - `mermaid` - fenced Mermaid flowchart, the default artifact
//! - `json` - the raw tree, for tooling

mod json;
mod mermaid;

pub use json::{print_json, to_json};
pub use mermaid::{MermaidRenderer, render, write_diagram};
