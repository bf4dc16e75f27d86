//! Mermaid flowchart rendering
//!
//! Namespaces become subgraphs holding a `[/label/]` box for the namespace
//! itself; modules without children become plain `[label]` boxes. Every box
//! is keyed by the module's full dotted name, which is also what edges refer
//! to. All boxes come first, then all edges.

use std::fs;
use std::io;
use std::path::Path;

use crate::module_tree::ModuleTree;

const HEADER: &str = "```mermaid\nflowchart LR\n";
const FOOTER: &str = "```";

/// Renders a [`ModuleTree`] as a fenced Mermaid flowchart.
#[derive(Debug, Default)]
pub struct MermaidRenderer {
    nodes: String,
    edges: String,
}

impl MermaidRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render every top-level module below `root`. The root itself is never
    /// drawn.
    pub fn render(mut self, root: &ModuleTree) -> String {
        for child in &root.children {
            self.visit(child, "");
        }

        let mut out =
            String::with_capacity(HEADER.len() + self.nodes.len() + self.edges.len() + FOOTER.len());
        out.push_str(HEADER);
        out.push_str(&self.nodes);
        out.push_str(&self.edges);
        out.push_str(FOOTER);
        out
    }

    /// `prefix` is the dotted path of the parent including its trailing dot.
    fn visit(&mut self, node: &ModuleTree, prefix: &str) {
        let id = format!("{}{}", prefix, node.label);

        if node.is_leaf() {
            self.push_node(&format!("{}[{}]", id, node.label));
        } else {
            self.push_node(&format!("subgraph {}_subgraph [{}]", id, node.label));
            self.push_node(&format!("{}[/{}/]", id, node.label));
            let child_prefix = format!("{}.", id);
            for child in &node.children {
                self.visit(child, &child_prefix);
            }
            self.push_node("end");
        }

        for dependency in &node.dependencies {
            self.edges.push_str(&id);
            self.edges.push_str(" --> ");
            self.edges.push_str(dependency);
            self.edges.push('\n');
        }
    }

    fn push_node(&mut self, line: &str) {
        self.nodes.push_str(line);
        self.nodes.push('\n');
    }
}

/// Render `root` as a fenced Mermaid flowchart.
pub fn render(root: &ModuleTree) -> String {
    MermaidRenderer::new().render(root)
}

/// Write a rendered diagram to `path`, creating parent directories.
pub fn write_diagram(path: &Path, diagram: &str) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, diagram)
}
