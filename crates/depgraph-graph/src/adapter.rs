//! Turns a resolved dependency tree into a [`DependencyGraph`].

use depgraph_core::filter::FilterChain;
use depgraph_core::node::{DependencyNode, NodeResolution, ResolutionContext};
use depgraph_core::tree::{RawDependencyTree, RawNode};

use crate::graph::{DependencyEdge, DependencyGraph, GraphBuilder, NodeHandle};
use crate::prune;

/// Which resolutions make it into the graph. Included nodes and the project
/// itself always do.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShownResolutions {
    pub conflicts: bool,
    pub duplicates: bool,
}

impl ShownResolutions {
    pub fn new(conflicts: bool, duplicates: bool) -> Self {
        Self {
            conflicts,
            duplicates,
        }
    }

    pub fn contains(&self, resolution: NodeResolution) -> bool {
        match resolution {
            NodeResolution::Included | NodeResolution::Parent => true,
            NodeResolution::OmittedForConflict => self.conflicts,
            NodeResolution::OmittedForDuplicate => self.duplicates,
        }
    }

    /// Whether only included nodes are shown, so omitted entries can be
    /// skipped without classifying them.
    pub fn only_included(&self) -> bool {
        !self.conflicts && !self.duplicates
    }
}

/// Filters applied while walking the tree.
#[derive(Debug, Clone, Default)]
pub struct GraphFilters {
    /// Applied to every dependency.
    pub global: FilterChain,
    /// Applied to dependencies below the project's direct dependencies.
    pub transitive: FilterChain,
    /// Selects the nodes the graph is pruned down to.
    pub targets: FilterChain,
}

/// Walks a resolved tree and feeds the visible nodes and edges to a builder.
pub struct GraphAdapter {
    filters: GraphFilters,
    shown: ShownResolutions,
}

impl GraphAdapter {
    pub fn new(filters: GraphFilters, shown: ShownResolutions) -> Self {
        Self { filters, shown }
    }

    /// Build the graph for `tree`.
    ///
    /// Every accepted entry is also recorded as an occurrence, so the tree
    /// can be listed as it was walked. The project node is always added. A dependency that is rejected by a
    /// filter is dropped together with its whole subtree.
    pub fn build_graph(&self, tree: &RawDependencyTree, mut builder: GraphBuilder) -> DependencyGraph {
        let project = DependencyNode::from_project(tree.project.clone());
        let root = builder.add_node(project.clone());
        builder.record_occurrence(0, root, project.clone(), None);
        for dependency in &tree.dependencies {
            self.visit(dependency, root, &project, 1, &mut builder);
        }

        let graph = builder.build();
        tracing::debug!(
            "Built graph for {} with {} nodes and {} edges",
            tree.project,
            graph.node_count(),
            graph.edge_count()
        );
        prune::retain_ancestors_of(graph, &self.filters.targets)
    }

    fn visit(
        &self,
        raw: &RawNode,
        parent: NodeHandle,
        parent_node: &DependencyNode,
        depth: usize,
        builder: &mut GraphBuilder,
    ) {
        if self.shown.only_included() && raw.winner.is_some() {
            return;
        }

        let context: ResolutionContext = raw.resolution_context();
        let node = DependencyNode::resolved(raw.coordinate.clone(), raw.scope, raw.optional, &context);
        if !self.accepts(&node, depth) {
            tracing::trace!("Skipping {} and its dependencies", node);
            return;
        }

        let handle = builder.add_node(node.clone());
        builder.record_occurrence(depth, handle, node.clone(), Some(parent_node.clone()));
        builder.add_edge(
            parent,
            handle,
            DependencyEdge {
                from: parent_node.clone(),
                to: node.clone(),
            },
        );

        for child in &raw.children {
            self.visit(child, handle, &node, depth + 1, builder);
        }
    }

    fn accepts(&self, node: &DependencyNode, depth: usize) -> bool {
        self.shown.contains(node.resolution())
            && self.filters.global.include(node)
            && (depth < 2 || self.filters.transitive.include(node))
    }
}
