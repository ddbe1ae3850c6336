use serde::{Deserialize, Serialize};

/// Packaging type assumed when a coordinate does not name one.
pub const DEFAULT_TYPE: &str = "jar";

fn default_type() -> String {
    DEFAULT_TYPE.to_string()
}

/// Maven-style artifact coordinates: `group:artifact:version` plus packaging
/// type and an optional classifier.
///
/// Coordinates carry no notion of identity of their own; which fields make
/// two coordinates "the same" graph node is decided by the node-id renderer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coordinate {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
    #[serde(rename = "type", default = "default_type")]
    pub artifact_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classifier: Option<String>,
}

impl Coordinate {
    /// Coordinates of a plain `jar` artifact without classifier.
    pub fn new(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            version: version.into(),
            artifact_type: default_type(),
            classifier: None,
        }
    }

    pub fn with_type(mut self, artifact_type: impl Into<String>) -> Self {
        self.artifact_type = artifact_type.into();
        self
    }

    /// Set the classifier. An empty classifier is the same as none.
    pub fn with_classifier(mut self, classifier: impl Into<String>) -> Self {
        let classifier = classifier.into();
        self.classifier = (!classifier.is_empty()).then_some(classifier);
        self
    }

    /// The classifier, treating an empty string as absent.
    pub fn classifier(&self) -> Option<&str> {
        self.classifier.as_deref().filter(|c| !c.is_empty())
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.group_id, self.artifact_id)?;
        match self.classifier() {
            Some(classifier) => write!(f, ":{}:{classifier}", self.artifact_type)?,
            None if self.artifact_type != DEFAULT_TYPE => write!(f, ":{}", self.artifact_type)?,
            None => {}
        }
        write!(f, ":{}", self.version)
    }
}
