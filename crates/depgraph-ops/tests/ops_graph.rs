use std::cell::Cell;
use std::path::Path;
use std::sync::Mutex;

use async_trait::async_trait;
use tempfile::TempDir;

use depgraph_core::config::{GraphConfig, GraphOptions, OutputConfig};
use depgraph_core::coordinate::Coordinate;
use depgraph_core::format::GraphFormat;
use depgraph_core::scope::Scope;
use depgraph_core::tree::{DependencyResolver, RawDependencyTree, RawNode};
use depgraph_graph::format::JsonGraph;
use depgraph_ops::ops_graph::{self, render_graph};
use depgraph_store::session::{GraphSession, Statement};
use depgraph_util::errors::DepgraphError;

struct StaticResolver {
    tree: RawDependencyTree,
    calls: Cell<usize>,
}

impl StaticResolver {
    fn new(tree: RawDependencyTree) -> Self {
        Self {
            tree,
            calls: Cell::new(0),
        }
    }
}

impl DependencyResolver for StaticResolver {
    fn resolve(&self) -> Result<RawDependencyTree, DepgraphError> {
        self.calls.set(self.calls.get() + 1);
        Ok(self.tree.clone())
    }
}

struct FailingResolver;

impl DependencyResolver for FailingResolver {
    fn resolve(&self) -> Result<RawDependencyTree, DepgraphError> {
        Err(DepgraphError::resolution(
            "Could not resolve com.example:app:1.0",
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing artifact"),
        ))
    }
}

#[derive(Default)]
struct RecordingSession {
    statements: Mutex<Vec<Statement>>,
}

#[async_trait]
impl GraphSession for RecordingSession {
    async fn run(&self, statement: &Statement) -> Result<(), DepgraphError> {
        self.statements.lock().unwrap().push(statement.clone());
        Ok(())
    }
}

fn coord(group: &str, artifact: &str, version: &str) -> Coordinate {
    Coordinate::new(group, artifact, version)
}

fn sample_tree() -> RawDependencyTree {
    RawDependencyTree::new(coord("com.example", "app", "1.0"))
        .dependency(
            RawNode::new(coord("org.apache.commons", "commons-lang3", "3.12.0"))
                .child(RawNode::new(coord("org.slf4j", "slf4j-api", "1.7.30")).winner(coord("org.slf4j", "slf4j-api", "2.0.9"))),
        )
        .dependency(RawNode::new(coord("org.slf4j", "slf4j-api", "2.0.9")))
        .dependency(RawNode::new(coord("junit", "junit", "4.13.2")).scope(Scope::Test))
}

fn options(format: &str) -> GraphOptions {
    GraphOptions {
        format: format.to_string(),
        ..GraphOptions::default()
    }
}

#[test]
fn text_graph_with_defaults() {
    let resolver = StaticResolver::new(sample_tree());
    let rendered = render_graph(&resolver, &options("text")).unwrap();

    let expected = "\
app:compile
├── commons-lang3:compile
├── slf4j-api:compile
└── junit:test
";
    assert_eq!(rendered.formatted.content, expected);
    assert_eq!(rendered.node_count, 4);
    assert_eq!(rendered.project.artifact_id, "app");
}

#[test]
fn conflicts_and_versions() {
    let resolver = StaticResolver::new(sample_tree());
    let opts = GraphOptions {
        show_conflicts: true,
        show_versions_on_nodes: true,
        show_versions_on_edges: true,
        ..options("text")
    };
    let rendered = render_graph(&resolver, &opts).unwrap();
    assert!(rendered
        .formatted
        .content
        .contains("│   └── slf4j-api:2.0.9:compile (omitted for conflict: 2.0.9)"));
}

#[test]
fn scope_and_patterns_filter_graph() {
    let resolver = StaticResolver::new(sample_tree());
    let opts = GraphOptions {
        scope: Some("compile".to_string()),
        excludes: vec!["org.slf4j".to_string()],
        ..options("json")
    };
    let rendered = render_graph(&resolver, &opts).unwrap();
    let document = rendered.formatted.document.unwrap();
    let ids: Vec<_> = document.artifacts.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(
        ids,
        ["com.example:app:jar:1.0", "org.apache.commons:commons-lang3:jar:3.12.0"]
    );
}

#[test]
fn target_includes_keep_paths_to_target() {
    let resolver = StaticResolver::new(sample_tree());
    let opts = GraphOptions {
        target_includes: vec!["junit:junit".to_string()],
        merge_types: true,
        ..options("json")
    };
    let document = render_graph(&resolver, &opts).unwrap().formatted.document.unwrap();
    let ids: Vec<_> = document.artifacts.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, ["com.example:app:1.0", "junit:junit:4.13.2"]);
    assert_eq!(document.dependencies.len(), 1);
}

#[test]
fn bad_configuration_fails_before_resolution() {
    let resolver = StaticResolver::new(sample_tree());
    for opts in [
        options("dot"),
        GraphOptions {
            includes: vec!["a:b:c:d:e".to_string()],
            ..options("text")
        },
        GraphOptions {
            scope: Some("everything".to_string()),
            ..options("text")
        },
    ] {
        let err = render_graph(&resolver, &opts).unwrap_err();
        assert!(matches!(err, DepgraphError::Config { .. }), "{err}");
    }
    assert_eq!(resolver.calls.get(), 0);
}

#[test]
fn resolution_failure_is_reported() {
    let err = render_graph(&FailingResolver, &options("text")).unwrap_err();
    match err {
        DepgraphError::Resolution { message, source } => {
            assert!(message.contains("com.example:app:1.0"));
            assert!(source.is_some());
        }
        other => panic!("expected resolution error, got {other}"),
    }
}

#[test]
fn output_path_naming() {
    let root = Path::new("/work");
    let output = OutputConfig::default();
    assert_eq!(
        ops_graph::output_path(root, &output, "app", GraphFormat::Text),
        Path::new("/work/target/dependency-graph.txt")
    );

    let by_artifact = OutputConfig {
        use_artifact_id_in_file_name: true,
        ..OutputConfig::default()
    };
    assert_eq!(
        ops_graph::output_path(root, &by_artifact, "app", GraphFormat::GraphStore),
        Path::new("/work/target/app.json")
    );

    let with_extension = OutputConfig {
        directory: "out".to_string(),
        file_name: "deps.json".to_string(),
        ..OutputConfig::default()
    };
    assert_eq!(
        ops_graph::output_path(root, &with_extension, "app", GraphFormat::Json),
        Path::new("/work/out/deps.json")
    );
}

#[tokio::test]
async fn store_graph_writes_document() {
    let resolver = StaticResolver::new(sample_tree());
    let rendered = render_graph(&resolver, &options("graph-store")).unwrap();
    assert!(rendered.writes_graph_store);

    let session = RecordingSession::default();
    let summary = ops_graph::store_graph(&session, &rendered).await.unwrap();
    assert_eq!(summary.artifacts_written, 4);
    assert_eq!(summary.dependencies_written, 3);
    assert_eq!(session.statements.lock().unwrap().len(), 7);
}

#[tokio::test]
async fn store_graph_skips_text() {
    let resolver = StaticResolver::new(sample_tree());
    let rendered = render_graph(&resolver, &options("text")).unwrap();
    let session = RecordingSession::default();
    assert!(ops_graph::store_graph(&session, &rendered).await.is_none());
}

fn write_tree(dir: &Path) {
    let json = serde_json::to_string_pretty(&sample_tree()).unwrap();
    std::fs::write(dir.join("dependency-tree.json"), json).unwrap();
}

#[tokio::test]
async fn graph_writes_output_file() {
    let tmp = TempDir::new().unwrap();
    write_tree(tmp.path());
    let config = GraphConfig {
        graph: options("json"),
        ..GraphConfig::default()
    };

    let outcome = ops_graph::graph(tmp.path(), &config).await.unwrap();
    assert_eq!(outcome.path, tmp.path().join("target/dependency-graph.json"));
    assert!(outcome.store.is_none());

    let content = std::fs::read_to_string(&outcome.path).unwrap();
    let document: JsonGraph = serde_json::from_str(&content).unwrap();
    assert_eq!(document.artifacts.len(), outcome.node_count);
    assert_eq!(document.dependencies.len(), outcome.edge_count);
}

#[tokio::test]
async fn missing_tree_writes_nothing() {
    let tmp = TempDir::new().unwrap();
    let err = ops_graph::graph(tmp.path(), &GraphConfig::default()).await.unwrap_err();
    assert!(err.to_string().contains("Dependency resolution failed"));
    assert!(!tmp.path().join("target").exists());
}
