//! Top-down layering for hierarchical layouts.
//!
//! Works collapse into strongly connected components first, so every member
//! of a cycle lands on the same layer. Components are then placed one layer
//! below their deepest prerequisite component.

use super::derive::WorkGraph;
use petgraph::algo::tarjan_scc;
use petgraph::graphmap::DiGraphMap;
use petgraph::Direction;
use std::collections::HashMap;

/// Groups graph nodes into layers, prerequisites above dependents.
///
/// Layer 0 holds works with no resolved prerequisites outside their own
/// cycle. Titles inside one layer are sorted. Never fails, including for
/// self-references and cycles.
pub fn layers(graph: &WorkGraph) -> Vec<Vec<String>> {
    let mut dag: DiGraphMap<&str, ()> = DiGraphMap::new();
    for node in &graph.nodes {
        dag.add_node(node.as_str());
    }
    for edge in &graph.edges {
        dag.add_edge(edge.from.as_str(), edge.to.as_str(), ());
    }

    // tarjan_scc yields components in reverse topological order.
    let mut components = tarjan_scc(&dag);
    components.reverse();

    let component_of: HashMap<&str, usize> = components
        .iter()
        .enumerate()
        .flat_map(|(index, members)| members.iter().map(move |member| (*member, index)))
        .collect();

    let mut depth = vec![0usize; components.len()];
    for (index, members) in components.iter().enumerate() {
        for member in members {
            for next in dag.neighbors_directed(*member, Direction::Outgoing) {
                let target = component_of[next];
                if target != index {
                    depth[target] = depth[target].max(depth[index] + 1);
                }
            }
        }
    }

    let layer_count = depth.iter().max().map_or(0, |deepest| deepest + 1);
    let mut layers: Vec<Vec<String>> = vec![Vec::new(); layer_count];
    for (index, members) in components.iter().enumerate() {
        layers[depth[index]].extend(members.iter().map(|member| member.to_string()));
    }
    for layer in &mut layers {
        layer.sort_unstable();
    }
    layers
}
