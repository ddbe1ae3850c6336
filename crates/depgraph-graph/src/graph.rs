//! Dependency graph construction.
//!
//! Nodes are keyed by the string the [`NodeIdRenderer`] produces for them, so
//! tree entries that render to the same id collapse into one graph node.

use std::collections::{HashMap, HashSet};

use petgraph::graph::{DiGraph, EdgeIndex, NodeIndex};

use depgraph_core::node::DependencyNode;

use crate::render::NodeIdRenderer;

/// A node of the built graph together with its rendered identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphNode {
    pub id: String,
    pub node: DependencyNode,
}

/// Payload of an edge: both endpoints as they were seen on the path that
/// added (or last replaced) the edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyEdge {
    pub from: DependencyNode,
    pub to: DependencyNode,
}

/// One appearance of a node in the walked tree.
///
/// `node` is the entry as it appeared at this position, before it was merged
/// into the graph node carrying `id`. `parent` is the entry it hangs under,
/// absent for the project itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Occurrence {
    pub depth: usize,
    pub id: String,
    pub node: DependencyNode,
    pub parent: Option<DependencyNode>,
}

/// Opaque handle to a node added to a [`GraphBuilder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeHandle(NodeIndex);

/// Accumulates nodes and edges with identity deduplication.
pub struct GraphBuilder {
    id_renderer: NodeIdRenderer,
    graph: DiGraph<GraphNode, DependencyEdge>,
    index: HashMap<String, NodeIndex>,
    occurrences: Vec<Occurrence>,
}

impl GraphBuilder {
    pub fn new(id_renderer: NodeIdRenderer) -> Self {
        Self {
            id_renderer,
            graph: DiGraph::new(),
            index: HashMap::new(),
            occurrences: Vec::new(),
        }
    }

    /// Add a node, or merge it into the node already carrying the same id.
    pub fn add_node(&mut self, node: DependencyNode) -> NodeHandle {
        let id = self.id_renderer.render(&node);
        if let Some(&idx) = self.index.get(&id) {
            self.graph[idx].node.merge(&node);
            return NodeHandle(idx);
        }
        let idx = self.graph.add_node(GraphNode {
            id: id.clone(),
            node,
        });
        self.index.insert(id, idx);
        NodeHandle(idx)
    }

    /// Add an edge. Adding the same (from, to) pair again replaces the
    /// payload and keeps the edge's original position. Self edges are ignored.
    pub fn add_edge(&mut self, from: NodeHandle, to: NodeHandle, edge: DependencyEdge) {
        if from == to {
            tracing::debug!("Ignoring self dependency of {}", self.graph[from.0].id);
            return;
        }
        match self.graph.find_edge(from.0, to.0) {
            Some(existing) => self.graph[existing] = edge,
            None => {
                self.graph.add_edge(from.0, to.0, edge);
            }
        }
    }

    /// Record that `handle` appeared in the walk at `depth`, as `node`.
    pub fn record_occurrence(
        &mut self,
        depth: usize,
        handle: NodeHandle,
        node: DependencyNode,
        parent: Option<DependencyNode>,
    ) {
        self.occurrences.push(Occurrence {
            depth,
            id: self.graph[handle.0].id.clone(),
            node,
            parent,
        });
    }

    pub fn node(&self, handle: NodeHandle) -> &DependencyNode {
        &self.graph[handle.0].node
    }

    pub fn build(self) -> DependencyGraph {
        DependencyGraph {
            graph: self.graph,
            occurrences: self.occurrences,
        }
    }
}

/// An edge of a built graph, borrowed from it.
#[derive(Debug, Clone, Copy)]
pub struct EdgeView<'a> {
    pub from: &'a GraphNode,
    pub to: &'a GraphNode,
    pub payload: &'a DependencyEdge,
}

/// An immutable dependency graph. Nodes and edges iterate in the order they
/// were first added. The walk that produced it is kept alongside as a list
/// of occurrences.
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    graph: DiGraph<GraphNode, DependencyEdge>,
    occurrences: Vec<Occurrence>,
}

impl DependencyGraph {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Replace the node and edge sets, dropping occurrences of nodes that are
    /// no longer in the graph.
    pub(crate) fn with_inner(self, graph: DiGraph<GraphNode, DependencyEdge>) -> Self {
        let kept: HashSet<&str> = graph.node_weights().map(|n| n.id.as_str()).collect();
        let occurrences = self
            .occurrences
            .into_iter()
            .filter(|occurrence| kept.contains(occurrence.id.as_str()))
            .collect();
        Self { graph, occurrences }
    }

    pub(crate) fn inner(&self) -> &DiGraph<GraphNode, DependencyEdge> {
        &self.graph
    }

    pub fn nodes(&self) -> impl Iterator<Item = &GraphNode> + '_ {
        self.graph.node_indices().map(move |idx| &self.graph[idx])
    }

    pub fn edges(&self) -> impl Iterator<Item = EdgeView<'_>> + '_ {
        self.graph.edge_indices().filter_map(move |e| self.edge_view(e))
    }

    fn edge_view(&self, edge: EdgeIndex) -> Option<EdgeView<'_>> {
        let (from, to) = self.graph.edge_endpoints(edge)?;
        Some(EdgeView {
            from: &self.graph[from],
            to: &self.graph[to],
            payload: &self.graph[edge],
        })
    }

    /// The walk that built the graph, in visiting order.
    pub fn occurrences(&self) -> &[Occurrence] {
        &self.occurrences
    }

    pub fn find(&self, id: &str) -> Option<&GraphNode> {
        self.nodes().find(|n| n.id == id)
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }
}
