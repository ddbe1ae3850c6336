//! Session abstraction over a graph database.

use async_trait::async_trait;
use serde::Serialize;
use serde_json::{Map, Value};

use depgraph_util::errors::DepgraphError;

/// A parameterized Cypher statement.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Statement {
    pub statement: String,
    pub parameters: Map<String, Value>,
}

impl Statement {
    pub fn new(statement: impl Into<String>) -> Self {
        Self {
            statement: statement.into(),
            parameters: Map::new(),
        }
    }

    pub fn param(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.parameters.insert(name.to_string(), value.into());
        self
    }
}

/// An open session against a graph database.
///
/// Every statement is committed on its own, so one failing statement does
/// not affect the others.
#[async_trait]
pub trait GraphSession: Send + Sync {
    async fn run(&self, statement: &Statement) -> Result<(), DepgraphError>;
}
