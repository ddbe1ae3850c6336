//! Per-format renderer configuration.

use depgraph_core::config::GraphOptions;
use depgraph_core::format::GraphFormat;
use depgraph_graph::format::GraphFormatter;
use depgraph_graph::render::{
    ArtifactDataRenderer, DependencyDataRenderer, NodeIdRenderer, NodeLabelOptions, TextEdgeRenderer,
    TextNodeNameRenderer,
};
use depgraph_util::errors::DepgraphError;

/// Renderers and formatter for one output format.
#[derive(Debug, Clone, Copy)]
pub struct GraphStyle {
    pub format: GraphFormat,
    pub node_ids: NodeIdRenderer,
    pub formatter: GraphFormatter,
}

/// Whether `format` can be rendered.
pub fn is_supported(format: GraphFormat) -> bool {
    !matches!(format, GraphFormat::Dot | GraphFormat::Gml | GraphFormat::Puml)
}

fn label_options(options: &GraphOptions) -> NodeLabelOptions {
    NodeLabelOptions {
        show_group_id: options.show_group_ids,
        show_artifact_id: options.show_artifact_ids,
        show_types: options.show_types,
        show_classifiers: options.show_classifiers,
        show_versions: options.show_versions_on_nodes,
        show_optional: options.show_optional,
    }
}

impl GraphStyle {
    /// Resolve the format named in `options` and configure its renderers.
    pub fn from_options(options: &GraphOptions) -> Result<Self, DepgraphError> {
        let format: GraphFormat = options.format.parse()?;
        let node_ids = NodeIdRenderer::for_merge_options(options.merge_types, options.merge_classifiers);

        let formatter = match format {
            GraphFormat::Text => GraphFormatter::Text {
                nodes: TextNodeNameRenderer::new(label_options(options)),
                edges: TextEdgeRenderer::new(options.show_versions_on_edges),
            },
            GraphFormat::Json if options.show_all_attributes_for_json => GraphFormatter::Json {
                nodes: ArtifactDataRenderer::new(NodeLabelOptions::all()),
                edges: DependencyDataRenderer::new(true),
            },
            GraphFormat::Json => GraphFormatter::Json {
                nodes: ArtifactDataRenderer::new(label_options(options)),
                edges: DependencyDataRenderer::new(options.show_versions_on_edges),
            },
            GraphFormat::GraphStore => GraphFormatter::GraphStore {
                nodes: ArtifactDataRenderer::new(NodeLabelOptions::all()),
                edges: DependencyDataRenderer::new(true),
            },
            GraphFormat::Dot | GraphFormat::Gml | GraphFormat::Puml => {
                return Err(DepgraphError::config(format!(
                    "Graph format '{format}' is not supported. Use one of: text, json, graph-store"
                )))
            }
        };

        Ok(Self {
            format,
            node_ids,
            formatter,
        })
    }
}
