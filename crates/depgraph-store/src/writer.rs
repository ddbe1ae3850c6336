//! Writes a formatted graph document to a [`GraphSession`].

use serde_json::{Map, Value};

use depgraph_graph::format::{JsonArtifact, JsonDependency, JsonGraph};
use depgraph_util::progress;

use crate::session::{GraphSession, Statement};

pub const ARTIFACT_STATEMENT: &str = "MERGE (a:Artifact {id: $id}) \
     SET a.groupId = $groupId, a.artifactId = $artifactId, a.version = $version, \
     a.scope = $scope, a.type = $type, a.classifier = $classifier, a.optional = $optional \
     RETURN a";

pub const DEPENDENCY_STATEMENT: &str = "MATCH (from:Artifact {id: $from}), (to:Artifact {id: $to}) \
     MERGE (from)-[r:DEPENDENCY {scope: $resolutionScope, name: $to + ':' + $resolutionScope}]->(to) \
     SET r.resolution = $resolution, r.version = $version \
     RETURN type(r), r.name";

const ARTIFACT_PARAMS: [&str; 7] = [
    "groupId",
    "artifactId",
    "version",
    "scope",
    "type",
    "classifier",
    "optional",
];
const DEPENDENCY_PARAMS: [&str; 3] = ["resolution", "resolutionScope", "version"];

/// Outcome of a write phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WriteSummary {
    pub artifacts_written: usize,
    pub artifacts_failed: usize,
    pub dependencies_written: usize,
    pub dependencies_failed: usize,
}

impl WriteSummary {
    pub fn failed(&self) -> usize {
        self.artifacts_failed + self.dependencies_failed
    }
}

/// Parameters for `names`, taken from `attributes`. Absent ones are null so
/// every statement parameter is bound.
fn parameters(attributes: &Map<String, Value>, names: &[&str]) -> Map<String, Value> {
    names
        .iter()
        .map(|&name| (name.to_string(), attributes.get(name).cloned().unwrap_or(Value::Null)))
        .collect()
}

pub fn artifact_statement(artifact: &JsonArtifact) -> Statement {
    let mut statement = Statement::new(ARTIFACT_STATEMENT).param("id", artifact.id.as_str());
    statement.parameters.extend(parameters(&artifact.attributes, &ARTIFACT_PARAMS));
    statement
}

pub fn dependency_statement(dependency: &JsonDependency) -> Statement {
    let mut statement = Statement::new(DEPENDENCY_STATEMENT)
        .param("from", dependency.from.as_str())
        .param("to", dependency.to.as_str());
    statement.parameters.extend(parameters(&dependency.attributes, &DEPENDENCY_PARAMS));
    statement
}

/// Upsert every artifact, then merge every dependency.
///
/// Writes are sequential. A failing record is logged and skipped; the
/// write phase itself never fails.
pub async fn write_graph<S>(session: &S, graph: &JsonGraph) -> WriteSummary
where
    S: GraphSession + ?Sized,
{
    let mut summary = WriteSummary::default();
    let total = graph.artifacts.len() + graph.dependencies.len();
    let pb = progress::progress_bar(total as u64, "Storing graph");

    for artifact in &graph.artifacts {
        match session.run(&artifact_statement(artifact)).await {
            Ok(()) => summary.artifacts_written += 1,
            Err(e) => {
                tracing::warn!("Unable to store artifact {}: {e}", artifact.id);
                summary.artifacts_failed += 1;
            }
        }
        pb.inc(1);
    }

    for dependency in &graph.dependencies {
        match session.run(&dependency_statement(dependency)).await {
            Ok(()) => summary.dependencies_written += 1,
            Err(e) => {
                tracing::warn!(
                    "Unable to store dependency {} -> {}: {e}",
                    dependency.from,
                    dependency.to
                );
                summary.dependencies_failed += 1;
            }
        }
        pb.inc(1);
    }

    pb.finish_and_clear();
    summary
}
