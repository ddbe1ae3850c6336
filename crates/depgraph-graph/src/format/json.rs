//! JSON document output, shared by the JSON and graph-store formats.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use depgraph_util::errors::DepgraphError;

use crate::graph::{DependencyGraph, EdgeView, GraphNode};
use crate::render::{ArtifactDataRenderer, DependencyDataRenderer};

/// `{ "artifacts": [...], "dependencies": [...] }`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JsonGraph {
    pub artifacts: Vec<JsonArtifact>,
    pub dependencies: Vec<JsonDependency>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonArtifact {
    pub id: String,
    pub numeric_id: usize,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonDependency {
    pub from: String,
    pub to: String,
    pub numeric_from: usize,
    pub numeric_to: usize,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

/// Assemble the document for `graph`.
///
/// Numeric ids are positions in the emitted artifact list, starting at 0. A
/// record whose attributes cannot be rendered is logged and left out, along
/// with every dependency touching a left-out artifact; the rest of the
/// document is still produced.
pub fn build_document(
    graph: &DependencyGraph,
    nodes: &ArtifactDataRenderer,
    edges: &DependencyDataRenderer,
) -> JsonGraph {
    assemble(
        graph,
        |node| to_attributes(&nodes.render(&node.node)),
        |edge| to_attributes(&edges.render(&edge.payload.from, &edge.payload.to)),
    )
}

fn assemble<N, E>(graph: &DependencyGraph, render_node: N, render_edge: E) -> JsonGraph
where
    N: Fn(&GraphNode) -> Result<Map<String, Value>, DepgraphError>,
    E: Fn(&EdgeView<'_>) -> Result<Map<String, Value>, DepgraphError>,
{
    let mut document = JsonGraph::default();
    let mut positions: HashMap<&str, usize> = HashMap::new();
    for node in graph.nodes() {
        match render_node(node) {
            Ok(attributes) => {
                let numeric_id = document.artifacts.len();
                positions.insert(node.id.as_str(), numeric_id);
                document.artifacts.push(JsonArtifact {
                    id: node.id.clone(),
                    numeric_id,
                    attributes,
                });
            }
            Err(e) => tracing::warn!("Skipping artifact {}: {e}", node.id),
        }
    }

    for edge in graph.edges() {
        let (Some(&numeric_from), Some(&numeric_to)) =
            (positions.get(edge.from.id.as_str()), positions.get(edge.to.id.as_str()))
        else {
            tracing::warn!(
                "Skipping dependency {} -> {}: endpoint was left out",
                edge.from.id,
                edge.to.id
            );
            continue;
        };
        match render_edge(&edge) {
            Ok(attributes) => document.dependencies.push(JsonDependency {
                from: edge.from.id.clone(),
                to: edge.to.id.clone(),
                numeric_from,
                numeric_to,
                attributes,
            }),
            Err(e) => tracing::warn!("Skipping dependency {} -> {}: {e}", edge.from.id, edge.to.id),
        }
    }
    document
}

fn to_attributes<T: Serialize>(value: &T) -> Result<Map<String, Value>, DepgraphError> {
    let value = serde_json::to_value(value).map_err(|e| DepgraphError::Render {
        message: e.to_string(),
    })?;
    match value {
        Value::Object(map) => Ok(map),
        other => Err(DepgraphError::Render {
            message: format!("expected an object, got {other}"),
        }),
    }
}
