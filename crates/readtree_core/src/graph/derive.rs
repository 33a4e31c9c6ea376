//! Graph derivation from a work registry.
//!
//! # Responsibility
//! - Resolve soft prerequisite references against registry titles.
//! - Produce a node/edge view for hierarchical rendering.
//!
//! # Invariants
//! - Edges point from prerequisite to dependent (`P -> W`).
//! - Unresolved references never produce edges and never fail.
//! - Cycles are passed through untouched; derivation is a single pass.

use crate::registry::work_registry::WorkRegistry;
use log::debug;
use serde::Serialize;

/// Directed "read before" relation between two registry titles.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Edge {
    /// Prerequisite title.
    pub from: String,
    /// Dependent title.
    pub to: String,
}

impl Edge {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

/// Prerequisite reference whose title is not in the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnresolvedRef {
    /// Work that lists the reference.
    pub work: String,
    /// Referenced title that could not be found.
    pub prerequisite: String,
}

/// Outcome of resolving every prerequisite reference in a registry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolution {
    pub resolved: Vec<Edge>,
    pub unresolved: Vec<UnresolvedRef>,
}

/// Derived node/edge view of a registry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WorkGraph {
    /// Every registry title, including works with no edges.
    pub nodes: Vec<String>,
    /// Resolved prerequisite edges. Repeated prerequisites repeat here.
    pub edges: Vec<Edge>,
}

impl WorkGraph {
    pub fn contains_node(&self, title: &str) -> bool {
        self.nodes.iter().any(|node| node == title)
    }

    pub fn contains_edge(&self, from: &str, to: &str) -> bool {
        self.edges.iter().any(|edge| edge.from == from && edge.to == to)
    }

    /// Titles with no incoming edge.
    pub fn roots(&self) -> Vec<&str> {
        self.nodes
            .iter()
            .filter(|node| !self.edges.iter().any(|edge| &edge.to == *node))
            .map(String::as_str)
            .collect()
    }

    /// Works that list `title` as a resolved prerequisite.
    pub fn dependents_of(&self, title: &str) -> Vec<&str> {
        self.edges
            .iter()
            .filter(|edge| edge.from == title)
            .map(|edge| edge.to.as_str())
            .collect()
    }

    /// Resolved prerequisites of `title`.
    pub fn prerequisites_of(&self, title: &str) -> Vec<&str> {
        self.edges
            .iter()
            .filter(|edge| edge.to == title)
            .map(|edge| edge.from.as_str())
            .collect()
    }
}

/// Splits every prerequisite reference into resolved edges and dangling refs.
pub fn resolve_prerequisites(registry: &WorkRegistry) -> Resolution {
    let mut resolution = Resolution::default();
    for work in registry.works() {
        for prerequisite in &work.prerequisites {
            if registry.contains(prerequisite) {
                resolution
                    .resolved
                    .push(Edge::new(prerequisite.as_str(), work.title.as_str()));
            } else {
                resolution.unresolved.push(UnresolvedRef {
                    work: work.title.clone(),
                    prerequisite: prerequisite.clone(),
                });
            }
        }
    }
    resolution
}

/// Builds the renderable graph view of `registry`.
///
/// Dangling prerequisite references are dropped; the count is logged at
/// debug level.
pub fn derive_graph(registry: &WorkRegistry) -> WorkGraph {
    let Resolution {
        resolved,
        unresolved,
    } = resolve_prerequisites(registry);

    if !unresolved.is_empty() {
        debug!(
            "event=graph_derive module=graph status=ok nodes={} edges={} unresolved={}",
            registry.len(),
            resolved.len(),
            unresolved.len()
        );
    }

    WorkGraph {
        nodes: registry.titles().map(str::to_string).collect(),
        edges: resolved,
    }
}
