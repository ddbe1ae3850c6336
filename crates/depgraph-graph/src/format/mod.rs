//! Output formats for built graphs.

pub mod json;
pub mod text;

use depgraph_util::errors::DepgraphError;

use crate::graph::DependencyGraph;
use crate::render::{ArtifactDataRenderer, DependencyDataRenderer, TextEdgeRenderer, TextNodeNameRenderer};

pub use json::{JsonArtifact, JsonDependency, JsonGraph};

/// A formatted graph, ready to be written out.
#[derive(Debug, Clone)]
pub struct FormattedGraph {
    pub content: String,
    /// The structured document, for formats that have one.
    pub document: Option<JsonGraph>,
}

/// The supported formatters and the renderers they use.
#[derive(Debug, Clone, Copy)]
pub enum GraphFormatter {
    Text {
        nodes: TextNodeNameRenderer,
        edges: TextEdgeRenderer,
    },
    Json {
        nodes: ArtifactDataRenderer,
        edges: DependencyDataRenderer,
    },
    /// The JSON document, also written to a graph database afterwards.
    GraphStore {
        nodes: ArtifactDataRenderer,
        edges: DependencyDataRenderer,
    },
}

impl GraphFormatter {
    /// Render `graph` to its textual output. `graph_name` is the artifact id
    /// of the project the graph was built for.
    pub fn format(&self, graph_name: &str, graph: &DependencyGraph) -> Result<FormattedGraph, DepgraphError> {
        tracing::debug!("Formatting graph '{graph_name}' ({} nodes)", graph.node_count());
        match self {
            GraphFormatter::Text { nodes, edges } => Ok(FormattedGraph {
                content: text::format(graph, nodes, edges),
                document: None,
            }),
            GraphFormatter::Json { nodes, edges } | GraphFormatter::GraphStore { nodes, edges } => {
                let document = json::build_document(graph, nodes, edges);
                let content = serde_json::to_string_pretty(&document).map_err(|e| DepgraphError::Render {
                    message: format!("Unable to serialize graph '{graph_name}': {e}"),
                })?;
                Ok(FormattedGraph {
                    content,
                    document: Some(document),
                })
            }
        }
    }

    pub fn writes_graph_store(&self) -> bool {
        matches!(self, GraphFormatter::GraphStore { .. })
    }
}
