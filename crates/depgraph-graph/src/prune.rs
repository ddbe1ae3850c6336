//! Reachability pruning: keep only the paths leading to target artifacts.

use std::collections::HashSet;

use petgraph::visit::{Dfs, Reversed};

use depgraph_core::filter::FilterChain;

use crate::graph::DependencyGraph;

/// Restrict `graph` to the target nodes and everything that can reach them.
///
/// An empty target chain keeps the graph as it is. A non-empty chain that
/// matches no node yields an empty graph. Occurrences of removed nodes are
/// dropped from the recorded walk.
pub fn retain_ancestors_of(graph: DependencyGraph, targets: &FilterChain) -> DependencyGraph {
    if targets.is_empty() {
        return graph;
    }

    let inner = graph.inner();
    let starts: Vec<_> = inner
        .node_indices()
        .filter(|&idx| targets.include(&inner[idx].node))
        .collect();
    if starts.is_empty() {
        tracing::debug!("No node matches the target patterns; the graph is empty");
        return DependencyGraph::empty();
    }

    let reversed = Reversed(inner);
    let mut dfs = Dfs::empty(reversed);
    let mut keep = HashSet::new();
    for start in starts {
        dfs.move_to(start);
        while let Some(idx) = dfs.next(reversed) {
            keep.insert(idx);
        }
    }

    tracing::debug!(
        "Pruned graph to {} of {} nodes",
        keep.len(),
        inner.node_count()
    );
    let pruned = inner.filter_map(
        |idx, node| keep.contains(&idx).then(|| node.clone()),
        |_, edge| Some(edge.clone()),
    );
    graph.with_inner(pruned)
}
