//! Dependency graph nodes and their resolution status.

use serde::{Deserialize, Serialize};

use crate::coordinate::Coordinate;
use crate::scope::Scope;

/// Why (and whether) a dependency appears in the effective build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NodeResolution {
    /// Part of the resolved dependency set.
    Included,
    /// Rejected because another version of the same artifact won.
    OmittedForConflict,
    /// Rejected because the same version was already selected elsewhere.
    OmittedForDuplicate,
    /// The project's own artifact.
    Parent,
}

impl NodeResolution {
    /// Determine the resolution of a resolved tree entry from its conflict
    /// resolver context.
    pub fn determine(own_version: &str, context: &ResolutionContext) -> Self {
        match &context.winner {
            Some(winner) if winner.version == own_version => NodeResolution::OmittedForDuplicate,
            Some(_) => NodeResolution::OmittedForConflict,
            None => NodeResolution::Included,
        }
    }
}

/// Conflict resolver information threaded alongside a tree entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolutionContext {
    /// The node the conflict resolver kept instead of this one, if any.
    pub winner: Option<Coordinate>,
}

impl ResolutionContext {
    pub fn with_winner(winner: Coordinate) -> Self {
        Self {
            winner: Some(winner),
        }
    }
}

/// A node of the dependency graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyNode {
    coordinate: Coordinate,
    resolution: NodeResolution,
    effective_version: String,
    scope: Scope,
    optional: bool,
}

impl DependencyNode {
    /// Node for the project's own artifact. It has no resolution context.
    pub fn from_project(coordinate: Coordinate) -> Self {
        let effective_version = coordinate.version.clone();
        Self {
            coordinate,
            resolution: NodeResolution::Parent,
            effective_version,
            scope: Scope::Compile,
            optional: false,
        }
    }

    /// Node for an entry of the resolved tree. A missing scope means `compile`.
    pub fn resolved(
        coordinate: Coordinate,
        scope: Option<Scope>,
        optional: bool,
        context: &ResolutionContext,
    ) -> Self {
        let resolution = NodeResolution::determine(&coordinate.version, context);
        let effective_version = match &context.winner {
            Some(winner) => winner.version.clone(),
            None => coordinate.version.clone(),
        };
        Self {
            coordinate,
            resolution,
            effective_version,
            scope: scope.unwrap_or_default(),
            optional,
        }
    }

    /// Fold another occurrence of the same graph node into this one.
    ///
    /// The merged node is optional if any occurrence was. Scope, version and
    /// resolution of the first occurrence are kept.
    pub fn merge(&mut self, other: &DependencyNode) {
        self.optional |= other.optional;
    }

    pub fn coordinate(&self) -> &Coordinate {
        &self.coordinate
    }

    pub fn resolution(&self) -> NodeResolution {
        self.resolution
    }

    /// The version actually in force: the winner's version for omitted
    /// nodes, the coordinate's own version otherwise.
    pub fn effective_version(&self) -> &str {
        &self.effective_version
    }

    pub fn effective_scope(&self) -> Scope {
        self.scope
    }

    pub fn is_optional(&self) -> bool {
        self.optional
    }
}

impl std::fmt::Display for DependencyNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.coordinate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coord(version: &str) -> Coordinate {
        Coordinate::new("org.example", "lib", version)
    }

    #[test]
    fn no_winner_is_included() {
        let node = DependencyNode::resolved(coord("1.0"), None, false, &ResolutionContext::default());
        assert_eq!(node.resolution(), NodeResolution::Included);
        assert_eq!(node.effective_version(), "1.0");
        assert_eq!(node.effective_scope(), Scope::Compile);
    }

    #[test]
    fn winner_with_same_version_is_duplicate() {
        let ctx = ResolutionContext::with_winner(coord("1.0"));
        let node = DependencyNode::resolved(coord("1.0"), Some(Scope::Runtime), false, &ctx);
        assert_eq!(node.resolution(), NodeResolution::OmittedForDuplicate);
        assert_eq!(node.effective_version(), "1.0");
    }

    #[test]
    fn winner_with_other_version_is_conflict() {
        let ctx = ResolutionContext::with_winner(coord("2.0"));
        let node = DependencyNode::resolved(coord("1.0"), None, false, &ctx);
        assert_eq!(node.resolution(), NodeResolution::OmittedForConflict);
        assert_eq!(node.effective_version(), "2.0");
        assert_eq!(node.coordinate().version, "1.0");
    }

    #[test]
    fn project_node_is_parent() {
        let node = DependencyNode::from_project(coord("1.0"));
        assert_eq!(node.resolution(), NodeResolution::Parent);
        assert_eq!(node.effective_scope(), Scope::Compile);
    }

    #[test]
    fn merge_keeps_optional_signal() {
        let ctx = ResolutionContext::default();
        let mut optional = DependencyNode::resolved(coord("1.0"), None, true, &ctx);
        let required = DependencyNode::resolved(coord("1.0"), None, false, &ctx);
        optional.merge(&required);
        assert!(optional.is_optional());

        let mut required = DependencyNode::resolved(coord("1.0"), None, false, &ctx);
        let optional = DependencyNode::resolved(coord("1.0"), None, true, &ctx);
        required.merge(&optional);
        assert!(required.is_optional());
    }

    #[test]
    fn merge_keeps_first_scope() {
        let ctx = ResolutionContext::default();
        let mut first = DependencyNode::resolved(coord("1.0"), Some(Scope::Test), false, &ctx);
        let second = DependencyNode::resolved(coord("1.0"), Some(Scope::Compile), false, &ctx);
        first.merge(&second);
        assert_eq!(first.effective_scope(), Scope::Test);
    }

    #[test]
    fn resolution_serializes_screaming_snake_case() {
        let json = serde_json::to_string(&NodeResolution::OmittedForConflict).unwrap();
        assert_eq!(json, "\"OMITTED_FOR_CONFLICT\"");
    }
}
