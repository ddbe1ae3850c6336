//! Neo4j HTTP API client.
//!
//! Statements are posted to the transactional endpoint
//! `{uri}/db/{database}/tx/commit`, one statement per request so every
//! statement commits (or fails) on its own.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;

use depgraph_core::config::GraphStoreConfig;
use depgraph_util::errors::DepgraphError;

use crate::auth;
use crate::session::{GraphSession, Statement};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Connection settings and HTTP client for one graph database.
pub struct HttpGraphStore {
    client: Client,
    config: GraphStoreConfig,
}

impl HttpGraphStore {
    /// Build the client. No request is sent until a statement runs.
    pub fn connect(config: &GraphStoreConfig) -> Result<Self, DepgraphError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("depgraph/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| DepgraphError::Store {
                message: format!("Failed to create HTTP client: {e}"),
            })?;
        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    pub fn commit_url(&self) -> String {
        format!(
            "{}/db/{}/tx/commit",
            self.config.uri.trim_end_matches('/'),
            self.config.database
        )
    }

    pub fn session(&self) -> HttpSession<'_> {
        tracing::debug!("Opened graph-store session on {}", self.config.uri);
        HttpSession {
            store: self,
            statements: AtomicUsize::new(0),
        }
    }
}

/// A session bound to an [`HttpGraphStore`]. Closed when dropped.
pub struct HttpSession<'a> {
    store: &'a HttpGraphStore,
    statements: AtomicUsize,
}

#[derive(Debug, Deserialize)]
struct CommitResponse {
    #[serde(default)]
    errors: Vec<CypherError>,
}

#[derive(Debug, Deserialize)]
struct CypherError {
    code: String,
    message: String,
}

#[async_trait]
impl<'a> GraphSession for HttpSession<'a> {
    async fn run(&self, statement: &Statement) -> Result<(), DepgraphError> {
        self.statements.fetch_add(1, Ordering::Relaxed);
        let url = self.store.commit_url();
        let request = self
            .store
            .client
            .post(&url)
            .json(&json!({ "statements": [statement] }));
        let request = auth::apply_auth(request, &self.store.config);

        let response = request.send().await.map_err(|e| DepgraphError::Store {
            message: format!("Request to {url} failed: {e}"),
        })?;
        let status = response.status();
        if !status.is_success() {
            return Err(DepgraphError::Store {
                message: format!("HTTP {status} from {url}"),
            });
        }

        let body: CommitResponse = response.json().await.map_err(|e| DepgraphError::Store {
            message: format!("Failed to read response from {url}: {e}"),
        })?;
        match body.errors.first() {
            Some(error) => Err(DepgraphError::Store {
                message: format!("{}: {}", error.code, error.message),
            }),
            None => Ok(()),
        }
    }
}

impl Drop for HttpSession<'_> {
    fn drop(&mut self) {
        tracing::debug!(
            "Closed graph-store session after {} statements",
            self.statements.load(Ordering::Relaxed)
        );
    }
}
