//! Renderers projecting nodes and edges to identities and labels.
//!
//! All renderers are pure: they read a [`DependencyNode`] and produce a
//! string or a serializable record, nothing else.

use serde::{Deserialize, Serialize};

use depgraph_core::node::{DependencyNode, NodeResolution};
use depgraph_core::scope::Scope;

const DELIMITER: &str = ":";

/// Join the present, non-empty fields with `:`.
fn join_present<'a>(fields: impl IntoIterator<Item = Option<&'a str>>) -> String {
    fields
        .into_iter()
        .flatten()
        .filter(|f| !f.is_empty())
        .collect::<Vec<_>>()
        .join(DELIMITER)
}

/// Projects a node to its graph identity.
///
/// The identity decides which tree entries collapse into one graph node and
/// is the id used in formatted output. Fields are joined in the order
/// group, artifact, type, version, classifier, scope.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NodeIdRenderer {
    with_group_id: bool,
    with_artifact_id: bool,
    with_type: bool,
    with_version: bool,
    with_classifier: bool,
    with_scope: bool,
}

impl NodeIdRenderer {
    /// `group:artifact:version`.
    pub fn group_artifact_version() -> Self {
        Self {
            with_group_id: true,
            with_artifact_id: true,
            with_version: true,
            ..Self::default()
        }
    }

    /// `group:artifact[:type]:version[:classifier]`, leaving out the fields
    /// whose variants should share a node.
    pub fn for_merge_options(merge_types: bool, merge_classifiers: bool) -> Self {
        Self::group_artifact_version()
            .with_type(!merge_types)
            .with_classifier(!merge_classifiers)
    }

    pub fn with_type(mut self, with_type: bool) -> Self {
        self.with_type = with_type;
        self
    }

    pub fn with_classifier(mut self, with_classifier: bool) -> Self {
        self.with_classifier = with_classifier;
        self
    }

    pub fn with_scope(mut self, with_scope: bool) -> Self {
        self.with_scope = with_scope;
        self
    }

    pub fn render(&self, node: &DependencyNode) -> String {
        let coord = node.coordinate();
        join_present([
            self.with_group_id.then_some(coord.group_id.as_str()),
            self.with_artifact_id.then_some(coord.artifact_id.as_str()),
            self.with_type.then_some(coord.artifact_type.as_str()),
            self.with_version.then_some(coord.version.as_str()),
            if self.with_classifier { coord.classifier() } else { None },
            self.with_scope.then_some(node.effective_scope().as_str()),
        ])
    }
}

/// Which node attributes a node-name renderer shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NodeLabelOptions {
    pub show_group_id: bool,
    pub show_artifact_id: bool,
    pub show_types: bool,
    pub show_classifiers: bool,
    pub show_versions: bool,
    pub show_optional: bool,
}

impl NodeLabelOptions {
    /// Every attribute enabled.
    pub fn all() -> Self {
        Self {
            show_group_id: true,
            show_artifact_id: true,
            show_types: true,
            show_classifiers: true,
            show_versions: true,
            show_optional: true,
        }
    }
}

/// Flat `:`-delimited node label for the text format.
///
/// The scope is always the last field; ` (optional)` is appended for
/// optional artifacts when enabled.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextNodeNameRenderer {
    options: NodeLabelOptions,
}

impl TextNodeNameRenderer {
    pub fn new(options: NodeLabelOptions) -> Self {
        Self { options }
    }

    pub fn render(&self, node: &DependencyNode) -> String {
        let opts = &self.options;
        let coord = node.coordinate();
        let label = join_present([
            opts.show_group_id.then_some(coord.group_id.as_str()),
            opts.show_artifact_id.then_some(coord.artifact_id.as_str()),
            opts.show_versions.then_some(node.effective_version()),
            opts.show_types.then_some(coord.artifact_type.as_str()),
            if opts.show_classifiers { coord.classifier() } else { None },
            Some(node.effective_scope().as_str()),
        ]);

        if opts.show_optional && node.is_optional() {
            format!("{label} (optional)")
        } else {
            label
        }
    }
}

/// Node attributes for the JSON and graph-store formats.
///
/// Absent attributes are not serialized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtifactData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artifact_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub optional: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classifier: Option<String>,
    pub scope: Scope,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub artifact_type: Option<String>,
}

fn non_empty(show: bool, value: &str) -> Option<String> {
    (show && !value.is_empty()).then(|| value.to_string())
}

/// Structured node-name renderer producing [`ArtifactData`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ArtifactDataRenderer {
    options: NodeLabelOptions,
}

impl ArtifactDataRenderer {
    pub fn new(options: NodeLabelOptions) -> Self {
        Self { options }
    }

    pub fn render(&self, node: &DependencyNode) -> ArtifactData {
        let opts = &self.options;
        let coord = node.coordinate();
        ArtifactData {
            group_id: non_empty(opts.show_group_id, &coord.group_id),
            artifact_id: non_empty(opts.show_artifact_id, &coord.artifact_id),
            version: non_empty(opts.show_versions, node.effective_version()),
            optional: (opts.show_optional && node.is_optional()).then_some(true),
            classifier: non_empty(opts.show_classifiers, coord.classifier().unwrap_or("")),
            scope: node.effective_scope(),
            artifact_type: non_empty(opts.show_types, &coord.artifact_type),
        }
    }
}

/// Edge attributes for the JSON and graph-store formats.
///
/// Versions live on the edge because the same artifact can be reached with
/// different effective versions on different paths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DependencyData {
    pub resolution: NodeResolution,
    pub resolution_scope: Scope,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// Structured edge renderer producing [`DependencyData`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DependencyDataRenderer {
    show_versions: bool,
}

impl DependencyDataRenderer {
    pub fn new(show_versions: bool) -> Self {
        Self { show_versions }
    }

    pub fn render(&self, _from: &DependencyNode, to: &DependencyNode) -> DependencyData {
        DependencyData {
            resolution: to.resolution(),
            resolution_scope: to.effective_scope(),
            version: non_empty(self.show_versions, to.effective_version()),
        }
    }
}

/// Edge label for the text format. Empty when there is nothing to say.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextEdgeRenderer {
    show_versions: bool,
}

impl TextEdgeRenderer {
    pub fn new(show_versions: bool) -> Self {
        Self { show_versions }
    }

    pub fn render(&self, _from: &DependencyNode, to: &DependencyNode) -> String {
        match to.resolution() {
            NodeResolution::OmittedForConflict if self.show_versions => {
                format!("omitted for conflict: {}", to.effective_version())
            }
            NodeResolution::OmittedForConflict => "omitted for conflict".to_string(),
            NodeResolution::OmittedForDuplicate => "omitted for duplicate".to_string(),
            NodeResolution::Included | NodeResolution::Parent => {
                let literal = to.coordinate().version.as_str();
                if self.show_versions && to.effective_version() != literal {
                    to.effective_version().to_string()
                } else {
                    String::new()
                }
            }
        }
    }
}
