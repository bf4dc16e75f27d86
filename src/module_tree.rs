//! Hierarchical module tree
//!
//! Module names are dot-separated paths. Each segment is one level of the
//! tree: `Data.Map.Internal` lives at root → `Data` → `Map` → `Internal`.
//! Intermediate levels that are not modules themselves (namespaces) are
//! created on the way down. Dependency edges hang off the node of the
//! importing module and point at full module names.

use std::collections::HashSet;

use serde::Serialize;

use crate::discovery::{ModuleSelector, SourceModule};

/// One node of the module tree.
///
/// Children keep insertion order, which is also the rendering order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ModuleTree {
    /// This node's own path segment. Empty for the root.
    pub label: String,
    /// Full names of the modules this node's module imports.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dependencies: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ModuleTree>,
}

impl ModuleTree {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Default::default()
        }
    }

    /// Synthetic root standing for the empty path.
    pub fn root() -> Self {
        Self::default()
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    pub fn child(&self, label: &str) -> Option<&ModuleTree> {
        self.children.iter().find(|c| c.label == label)
    }

    fn child_mut(&mut self, label: &str) -> Option<&mut ModuleTree> {
        self.children.iter_mut().find(|c| c.label == label)
    }

    /// Node at `path` below this one. An empty path is this node.
    pub fn find<S: AsRef<str>>(&self, path: &[S]) -> Option<&ModuleTree> {
        path.iter()
            .try_fold(self, |node, segment| node.child(segment.as_ref()))
    }

    fn find_mut<S: AsRef<str>>(&mut self, path: &[S]) -> Option<&mut ModuleTree> {
        let mut node = self;
        for segment in path {
            node = node.child_mut(segment.as_ref())?;
        }
        Some(node)
    }

    /// Make sure a node exists at `path`, creating missing ancestors.
    /// Inserting an existing path changes nothing.
    pub fn add_module<S: AsRef<str>>(&mut self, path: &[S]) {
        let mut node = self;
        for segment in path {
            let segment = segment.as_ref();
            let index = match node.children.iter().position(|c| c.label == segment) {
                Some(index) => index,
                None => {
                    node.children.push(ModuleTree::new(segment));
                    node.children.len() - 1
                }
            };
            node = &mut node.children[index];
        }
    }

    /// Attach `dependency` to the node at `path`.
    ///
    /// Never creates nodes: returns `false` and leaves the tree untouched when
    /// nothing lives at `path`.
    pub fn add_dependency<S: AsRef<str>>(&mut self, path: &[S], dependency: &str) -> bool {
        match self.find_mut(path) {
            Some(node) => {
                node.dependencies.push(dependency.to_string());
                true
            }
            None => false,
        }
    }

    /// Number of nodes below this one.
    pub fn descendant_count(&self) -> usize {
        self.children
            .iter()
            .map(|c| 1 + c.descendant_count())
            .sum()
    }

    /// Number of dependency entries in this subtree.
    pub fn dependency_count(&self) -> usize {
        self.dependencies.len()
            + self
                .children
                .iter()
                .map(ModuleTree::dependency_count)
                .sum::<usize>()
    }
}

/// Split a dotted module name into its path segments.
pub fn module_path(name: &str) -> Vec<&str> {
    name.split('.').collect()
}

/// Build the module tree for a set of selected modules.
///
/// A dependency is kept only when it matches `selector` and is itself one of
/// `modules`; imports of anything else (libraries, filtered-out modules) are
/// dropped without notice. Each kept dependency is attached once, in the
/// order it is first imported.
pub fn build(modules: &[SourceModule], selector: &ModuleSelector) -> ModuleTree {
    let selected: HashSet<&str> = modules.iter().map(|m| m.name.as_str()).collect();
    let mut root = ModuleTree::root();

    for module in modules {
        let path = module_path(&module.name);
        root.add_module(&path);

        let mut seen = HashSet::new();
        for dependency in module.dependencies() {
            if !selector.is_selected(&dependency) || !selected.contains(dependency.as_str()) {
                continue;
            }
            if seen.insert(dependency.clone()) {
                root.add_dependency(&path, &dependency);
            }
        }
    }

    root
}
