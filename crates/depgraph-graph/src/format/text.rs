//! Plain-text tree output.

use crate::graph::{DependencyGraph, Occurrence};
use crate::render::{TextEdgeRenderer, TextNodeNameRenderer};

/// List the tree `graph` was built from, one line per occurrence in walk
/// order.
///
/// Every entry is printed as it appeared in the tree, so a node reached
/// along several paths shows up under each of them with its own children
/// only. Occurrences of nodes pruned from the graph are left out.
pub fn format(graph: &DependencyGraph, nodes: &TextNodeNameRenderer, edges: &TextEdgeRenderer) -> String {
    let occurrences = graph.occurrences();
    let last = last_among_siblings(occurrences);

    let mut output = String::new();
    // Per level below the root: whether more siblings follow at that level.
    let mut open: Vec<bool> = Vec::new();
    for (occurrence, &is_last) in occurrences.iter().zip(&last) {
        let name = nodes.render(&occurrence.node);
        let Some(parent) = &occurrence.parent else {
            output.push_str(&name);
            output.push('\n');
            open.clear();
            continue;
        };

        open.truncate(occurrence.depth.saturating_sub(1));
        let prefix: String = open.iter().map(|&more| if more { "│   " } else { "    " }).collect();
        let connector = if is_last { "└── " } else { "├── " };
        let label = edges.render(parent, &occurrence.node);
        if label.is_empty() {
            output.push_str(&format!("{prefix}{connector}{name}\n"));
        } else {
            output.push_str(&format!("{prefix}{connector}{name} ({label})\n"));
        }
        open.push(!is_last);
    }
    output
}

/// For each occurrence, whether no later sibling follows it under the same
/// parent.
fn last_among_siblings(occurrences: &[Occurrence]) -> Vec<bool> {
    let mut last = vec![true; occurrences.len()];
    let mut sibling_follows: Vec<bool> = Vec::new();
    for (i, occurrence) in occurrences.iter().enumerate().rev() {
        sibling_follows.resize(occurrence.depth + 1, false);
        last[i] = !sibling_follows[occurrence.depth];
        sibling_follows[occurrence.depth] = true;
    }
    last
}
