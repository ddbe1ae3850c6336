//! The resolved dependency tree handed over by a resolver.
//!
//! Resolution itself happens elsewhere. A resolver returns the project's
//! coordinates plus the resolved tree, where entries rejected by conflict
//! resolution carry a reference to the winning artifact.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use depgraph_util::errors::DepgraphError;

use crate::coordinate::Coordinate;
use crate::node::ResolutionContext;
use crate::scope::Scope;

/// One entry of the resolved tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawNode {
    pub coordinate: Coordinate,
    #[serde(default)]
    pub scope: Option<Scope>,
    #[serde(default)]
    pub optional: bool,
    /// The artifact the conflict resolver kept in place of this entry.
    #[serde(default)]
    pub winner: Option<Coordinate>,
    #[serde(default)]
    pub children: Vec<RawNode>,
}

impl RawNode {
    pub fn new(coordinate: Coordinate) -> Self {
        Self {
            coordinate,
            scope: None,
            optional: false,
            winner: None,
            children: Vec::new(),
        }
    }

    pub fn scope(mut self, scope: Scope) -> Self {
        self.scope = Some(scope);
        self
    }

    pub fn optional(mut self, optional: bool) -> Self {
        self.optional = optional;
        self
    }

    pub fn winner(mut self, winner: Coordinate) -> Self {
        self.winner = Some(winner);
        self
    }

    pub fn child(mut self, child: RawNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn resolution_context(&self) -> ResolutionContext {
        ResolutionContext {
            winner: self.winner.clone(),
        }
    }
}

/// A project and its resolved dependencies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawDependencyTree {
    pub project: Coordinate,
    #[serde(default)]
    pub dependencies: Vec<RawNode>,
}

impl RawDependencyTree {
    pub fn new(project: Coordinate) -> Self {
        Self {
            project,
            dependencies: Vec::new(),
        }
    }

    pub fn dependency(mut self, node: RawNode) -> Self {
        self.dependencies.push(node);
        self
    }
}

/// Source of resolved dependency trees.
pub trait DependencyResolver {
    /// Resolve the project this resolver was created for.
    ///
    /// Failures are reported as [`DepgraphError::Resolution`] carrying the
    /// underlying cause. Implementations do not retry.
    fn resolve(&self) -> Result<RawDependencyTree, DepgraphError>;
}

/// Resolver reading a tree previously exported as JSON.
#[derive(Debug, Clone)]
pub struct JsonTreeResolver {
    path: PathBuf,
}

impl JsonTreeResolver {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DependencyResolver for JsonTreeResolver {
    fn resolve(&self) -> Result<RawDependencyTree, DepgraphError> {
        let display = self.path.display();
        let content = std::fs::read_to_string(&self.path)
            .map_err(|e| DepgraphError::resolution(format!("Failed to read {display}"), e))?;
        let tree: RawDependencyTree = serde_json::from_str(&content)
            .map_err(|e| DepgraphError::resolution(format!("Failed to parse {display}"), e))?;
        tracing::debug!(
            "Loaded dependency tree for {} with {} direct dependencies",
            tree.project,
            tree.dependencies.len()
        );
        Ok(tree)
    }
}
