use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use depgraph_util::errors::DepgraphError;

/// Name of the project-level configuration file.
pub const CONFIG_FILE_NAME: &str = "depgraph.toml";

/// Configuration loaded from `depgraph.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct GraphConfig {
    #[serde(default)]
    pub input: InputConfig,

    #[serde(default)]
    pub graph: GraphOptions,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub graph_store: GraphStoreConfig,
}

/// Where the resolved dependency tree is read from, from `[input]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    #[serde(default = "default_tree")]
    pub tree: String,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            tree: default_tree(),
        }
    }
}

fn default_tree() -> String {
    "dependency-tree.json".to_string()
}

/// Filtering and display options from `[graph]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct GraphOptions {
    #[serde(default = "default_format")]
    pub format: String,
    #[serde(default)]
    pub scope: Option<String>,
    #[serde(default)]
    pub includes: Vec<String>,
    #[serde(default)]
    pub excludes: Vec<String>,
    #[serde(default)]
    pub transitive_includes: Vec<String>,
    #[serde(default)]
    pub transitive_excludes: Vec<String>,
    #[serde(default)]
    pub target_includes: Vec<String>,
    #[serde(default)]
    pub show_conflicts: bool,
    #[serde(default)]
    pub show_duplicates: bool,
    #[serde(default)]
    pub merge_types: bool,
    #[serde(default)]
    pub merge_classifiers: bool,
    #[serde(default)]
    pub show_group_ids: bool,
    #[serde(default = "default_true")]
    pub show_artifact_ids: bool,
    #[serde(default)]
    pub show_types: bool,
    #[serde(default)]
    pub show_classifiers: bool,
    #[serde(default)]
    pub show_versions_on_nodes: bool,
    #[serde(default)]
    pub show_versions_on_edges: bool,
    #[serde(default)]
    pub show_optional: bool,
    #[serde(default = "default_true")]
    pub show_all_attributes_for_json: bool,
}

impl Default for GraphOptions {
    fn default() -> Self {
        Self {
            format: default_format(),
            scope: None,
            includes: Vec::new(),
            excludes: Vec::new(),
            transitive_includes: Vec::new(),
            transitive_excludes: Vec::new(),
            target_includes: Vec::new(),
            show_conflicts: false,
            show_duplicates: false,
            merge_types: false,
            merge_classifiers: false,
            show_group_ids: false,
            show_artifact_ids: true,
            show_types: false,
            show_classifiers: false,
            show_versions_on_nodes: false,
            show_versions_on_edges: false,
            show_optional: false,
            show_all_attributes_for_json: true,
        }
    }
}

fn default_format() -> String {
    "text".to_string()
}

fn default_true() -> bool {
    true
}

/// Output file location from `[output]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct OutputConfig {
    #[serde(default = "default_output_dir")]
    pub directory: String,
    #[serde(default = "default_file_name")]
    pub file_name: String,
    #[serde(default)]
    pub use_artifact_id_in_file_name: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: default_output_dir(),
            file_name: default_file_name(),
            use_artifact_id_in_file_name: false,
        }
    }
}

fn default_output_dir() -> String {
    "target".to_string()
}

fn default_file_name() -> String {
    "dependency-graph".to_string()
}

/// Graph database connection from `[graph-store]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphStoreConfig {
    #[serde(default = "default_store_uri")]
    pub uri: String,
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

impl Default for GraphStoreConfig {
    fn default() -> Self {
        Self {
            uri: default_store_uri(),
            database: default_database(),
            user: None,
            password: None,
        }
    }
}

fn default_store_uri() -> String {
    "http://localhost:7474".to_string()
}

fn default_database() -> String {
    "neo4j".to_string()
}

impl GraphConfig {
    /// Load `depgraph.toml` from the given path.
    pub fn from_path(path: &Path) -> Result<Self, DepgraphError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            DepgraphError::config(format!("Failed to read {}: {e}", path.display()))
        })?;
        toml::from_str(&content).map_err(|e| {
            DepgraphError::config(format!("Failed to parse {}: {e}", path.display()))
        })
    }

    /// Find `depgraph.toml` in `start` or one of its ancestors and load it,
    /// or return defaults if there is none.
    ///
    /// Returns the directory the file was found in so relative paths can be
    /// resolved against it.
    pub fn discover(start: &Path) -> Result<(Self, PathBuf), DepgraphError> {
        match depgraph_util::fs::find_ancestor_with(start, CONFIG_FILE_NAME) {
            Some(dir) => {
                let config = Self::from_path(&dir.join(CONFIG_FILE_NAME))?;
                tracing::debug!("Loaded {CONFIG_FILE_NAME} from {}", dir.display());
                Ok((config, dir))
            }
            None => Ok((Self::default(), start.to_path_buf())),
        }
    }
}
