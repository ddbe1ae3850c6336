//! Operation: generate a dependency graph file.

use std::path::{Path, PathBuf};

use depgraph_core::config::{GraphConfig, GraphOptions, OutputConfig};
use depgraph_core::coordinate::Coordinate;
use depgraph_core::filter::FilterChain;
use depgraph_core::format::GraphFormat;
use depgraph_core::tree::{DependencyResolver, JsonTreeResolver};
use depgraph_graph::adapter::{GraphAdapter, GraphFilters, ShownResolutions};
use depgraph_graph::format::FormattedGraph;
use depgraph_graph::graph::GraphBuilder;
use depgraph_store::http::HttpGraphStore;
use depgraph_store::session::GraphSession;
use depgraph_store::writer::{self, WriteSummary};
use depgraph_util::errors::{DepgraphError, DepgraphResult};
use depgraph_util::progress;

use crate::style::GraphStyle;

/// A graph rendered for one project, not yet written anywhere.
#[derive(Debug, Clone)]
pub struct RenderedGraph {
    pub project: Coordinate,
    pub format: GraphFormat,
    pub node_count: usize,
    pub edge_count: usize,
    pub formatted: FormattedGraph,
    pub writes_graph_store: bool,
}

/// What `depgraph graph` produced.
#[derive(Debug, Clone)]
pub struct GraphOutcome {
    pub path: PathBuf,
    pub node_count: usize,
    pub edge_count: usize,
    pub store: Option<WriteSummary>,
}

/// Compile the filter chains in `options`, failing on the first bad pattern
/// or scope.
pub fn build_filters(options: &GraphOptions) -> Result<GraphFilters, DepgraphError> {
    Ok(GraphFilters {
        global: FilterChain::global(options.scope.as_deref(), &options.includes, &options.excludes)?,
        transitive: FilterChain::transitive(&options.transitive_includes, &options.transitive_excludes)?,
        targets: FilterChain::target(&options.target_includes)?,
    })
}

/// Resolve, build, prune and format the graph.
///
/// Configuration is validated before the resolver is called, so a bad
/// configuration never triggers resolution.
pub fn render_graph<R>(resolver: &R, options: &GraphOptions) -> Result<RenderedGraph, DepgraphError>
where
    R: DependencyResolver + ?Sized,
{
    let style = GraphStyle::from_options(options)?;
    let filters = build_filters(options)?;
    let shown = ShownResolutions::new(options.show_conflicts, options.show_duplicates);

    let tree = resolver.resolve()?;
    let graph = GraphAdapter::new(filters, shown).build_graph(&tree, GraphBuilder::new(style.node_ids));
    let formatted = style.formatter.format(&tree.project.artifact_id, &graph)?;

    Ok(RenderedGraph {
        project: tree.project,
        format: style.format,
        node_count: graph.node_count(),
        edge_count: graph.edge_count(),
        formatted,
        writes_graph_store: style.formatter.writes_graph_store(),
    })
}

/// Where the rendered graph of `artifact_id` is written.
pub fn output_path(project_root: &Path, output: &OutputConfig, artifact_id: &str, format: GraphFormat) -> PathBuf {
    let base = if output.use_artifact_id_in_file_name {
        artifact_id
    } else {
        output.file_name.as_str()
    };
    let extension = format.file_extension();
    let file_name = if base.ends_with(extension) {
        base.to_string()
    } else {
        format!("{base}{extension}")
    };
    project_root.join(&output.directory).join(file_name)
}

/// Write the rendered document to the graph store through `session`.
pub async fn store_graph<S>(session: &S, rendered: &RenderedGraph) -> Option<WriteSummary>
where
    S: GraphSession + ?Sized,
{
    let document = rendered.formatted.document.as_ref()?;
    let summary = writer::write_graph(session, document).await;
    progress::status_info(
        "Stored",
        &format!(
            "{} artifacts and {} dependencies",
            summary.artifacts_written, summary.dependencies_written
        ),
    );
    if summary.failed() > 0 {
        progress::status_warn(
            "Skipped",
            &format!("{} records the graph store rejected", summary.failed()),
        );
    }
    Some(summary)
}

/// Generate the dependency graph of the project rooted at `project_root`.
pub async fn graph(project_root: &Path, config: &GraphConfig) -> DepgraphResult<GraphOutcome> {
    let resolver = JsonTreeResolver::new(project_root.join(&config.input.tree));
    progress::status("Resolving", &resolver.path().display().to_string());
    let rendered = render_graph(&resolver, &config.graph)?;
    tracing::info!(
        "Graph for {} has {} nodes and {} edges",
        rendered.project,
        rendered.node_count,
        rendered.edge_count
    );
    if rendered.format == GraphFormat::Text {
        println!("Dependency graph:");
        print!("{}", rendered.formatted.content);
    }

    let store = if rendered.writes_graph_store {
        let store = HttpGraphStore::connect(&config.graph_store)?;
        let session = store.session();
        store_graph(&session, &rendered).await
    } else {
        None
    };

    let path = output_path(
        project_root,
        &config.output,
        &rendered.project.artifact_id,
        rendered.format,
    );
    depgraph_util::fs::write_graph_file(&path, &rendered.formatted.content)?;
    progress::status("Writing", &path.display().to_string());

    Ok(GraphOutcome {
        path,
        node_count: rendered.node_count,
        edge_count: rendered.edge_count,
        store,
    })
}
