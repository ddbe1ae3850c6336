//! CLI argument definitions for depgraph.
//!
//! Uses `clap` derive macros to define the command surface. Each command
//! corresponds to a handler in the [`super::commands`] module.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "depgraph",
    version,
    about = "Render resolved Maven dependency trees as graphs",
    long_about = "depgraph turns a resolved dependency tree into a filtered, deduplicated \
                  dependency graph and writes it as a text tree, a JSON document, or into \
                  a Neo4j graph database."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a dependency graph file
    Graph(GraphArgs),

    /// List the graph formats and whether they can be rendered
    Formats,
}

/// Flags for `depgraph graph`. Anything given here overrides `depgraph.toml`.
#[derive(Args, Debug, Default)]
pub struct GraphArgs {
    /// Path to depgraph.toml (default: searched upwards from the current directory)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Resolved dependency tree (JSON)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Output format: text, json, graph-store
    #[arg(short, long)]
    pub format: Option<String>,

    /// Only show dependencies pulled in by this scope
    #[arg(long)]
    pub scope: Option<String>,

    /// Include patterns (group:artifact:type:classifier, globs allowed)
    #[arg(long = "include", value_delimiter = ',')]
    pub includes: Vec<String>,

    /// Exclude patterns
    #[arg(long = "exclude", value_delimiter = ',')]
    pub excludes: Vec<String>,

    /// Include patterns for transitive dependencies
    #[arg(long = "transitive-include", value_delimiter = ',')]
    pub transitive_includes: Vec<String>,

    /// Exclude patterns for transitive dependencies
    #[arg(long = "transitive-exclude", value_delimiter = ',')]
    pub transitive_excludes: Vec<String>,

    /// Only keep paths leading to artifacts matching these patterns
    #[arg(long = "target-include", value_delimiter = ',')]
    pub target_includes: Vec<String>,

    /// Show dependencies omitted for version conflicts
    #[arg(long)]
    pub show_conflicts: bool,

    /// Show dependencies omitted as duplicates
    #[arg(long)]
    pub show_duplicates: bool,

    /// Merge artifacts that differ only in type
    #[arg(long)]
    pub merge_types: bool,

    /// Merge artifacts that differ only in classifier
    #[arg(long)]
    pub merge_classifiers: bool,

    /// Show group ids on nodes
    #[arg(long)]
    pub show_group_ids: bool,

    /// Hide artifact ids on nodes
    #[arg(long)]
    pub hide_artifact_ids: bool,

    /// Show types on nodes
    #[arg(long)]
    pub show_types: bool,

    /// Show classifiers on nodes
    #[arg(long)]
    pub show_classifiers: bool,

    /// Show versions on nodes
    #[arg(long)]
    pub show_versions_on_nodes: bool,

    /// Show versions on edges
    #[arg(long)]
    pub show_versions_on_edges: bool,

    /// Mark optional dependencies
    #[arg(long)]
    pub show_optional: bool,

    /// Directory the graph file is written to
    #[arg(short, long)]
    pub output_directory: Option<String>,

    /// Graph file name
    #[arg(long)]
    pub output_file_name: Option<String>,

    /// Name the graph file after the project's artifact id
    #[arg(long)]
    pub use_artifact_id_in_file_name: bool,

    /// Graph store base URI
    #[arg(long, env = "DEPGRAPH_GRAPH_STORE_URI")]
    pub graph_store_uri: Option<String>,

    /// Graph store user
    #[arg(long, env = "DEPGRAPH_GRAPH_STORE_USER")]
    pub graph_store_user: Option<String>,

    /// Graph store password
    #[arg(long, env = "DEPGRAPH_GRAPH_STORE_PASSWORD", hide_env_values = true)]
    pub graph_store_password: Option<String>,
}

/// Parse CLI arguments.
pub fn parse() -> Cli {
    Cli::parse()
}
