//! Handler for `depgraph graph`.

use std::path::Path;

use miette::Result;

use depgraph_core::config::GraphConfig;
use depgraph_ops::ops_graph;
use depgraph_util::errors::DepgraphError;

use crate::cli::GraphArgs;

pub async fn exec(args: GraphArgs) -> Result<()> {
    let cwd = std::env::current_dir().map_err(DepgraphError::Io)?;

    let (mut config, project_root) = match &args.config {
        Some(path) => {
            let path = cwd.join(path);
            let config = GraphConfig::from_path(&path)?;
            let root = path.parent().unwrap_or(cwd.as_path()).to_path_buf();
            (config, root)
        }
        None => GraphConfig::discover(&cwd)?,
    };
    apply_overrides(&mut config, args, &cwd);

    let outcome = ops_graph::graph(&project_root, &config).await?;
    tracing::debug!(
        "Wrote {} ({} nodes, {} edges)",
        outcome.path.display(),
        outcome.node_count,
        outcome.edge_count
    );
    Ok(())
}

/// Overlay command-line flags on the loaded configuration. Paths given on
/// the command line are relative to the working directory.
fn apply_overrides(config: &mut GraphConfig, args: GraphArgs, cwd: &Path) {
    if let Some(input) = args.input {
        config.input.tree = cwd.join(input).display().to_string();
    }

    let graph = &mut config.graph;
    if let Some(format) = args.format {
        graph.format = format;
    }
    if args.scope.is_some() {
        graph.scope = args.scope;
    }
    for (patterns, target) in [
        (args.includes, &mut graph.includes),
        (args.excludes, &mut graph.excludes),
        (args.transitive_includes, &mut graph.transitive_includes),
        (args.transitive_excludes, &mut graph.transitive_excludes),
        (args.target_includes, &mut graph.target_includes),
    ] {
        if !patterns.is_empty() {
            *target = patterns;
        }
    }

    graph.show_conflicts |= args.show_conflicts;
    graph.show_duplicates |= args.show_duplicates;
    graph.merge_types |= args.merge_types;
    graph.merge_classifiers |= args.merge_classifiers;
    graph.show_group_ids |= args.show_group_ids;
    graph.show_artifact_ids &= !args.hide_artifact_ids;
    graph.show_types |= args.show_types;
    graph.show_classifiers |= args.show_classifiers;
    graph.show_versions_on_nodes |= args.show_versions_on_nodes;
    graph.show_versions_on_edges |= args.show_versions_on_edges;
    graph.show_optional |= args.show_optional;

    let output = &mut config.output;
    if let Some(directory) = args.output_directory {
        output.directory = cwd.join(directory).display().to_string();
    }
    if let Some(file_name) = args.output_file_name {
        output.file_name = file_name;
    }
    output.use_artifact_id_in_file_name |= args.use_artifact_id_in_file_name;

    let store = &mut config.graph_store;
    if let Some(uri) = args.graph_store_uri {
        store.uri = uri;
    }
    if args.graph_store_user.is_some() {
        store.user = args.graph_store_user;
    }
    if args.graph_store_password.is_some() {
        store.password = args.graph_store_password;
    }
}
