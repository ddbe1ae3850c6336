//! Graph store authentication using credentials from `depgraph.toml`.
//!
//! ```toml
//! [graph-store]
//! uri = "http://localhost:7474"
//! user = "neo4j"
//! password = "secret"
//! ```

use reqwest::RequestBuilder;

use depgraph_core::config::GraphStoreConfig;

/// Apply authentication to a request if the store has credentials.
pub fn apply_auth(request: RequestBuilder, config: &GraphStoreConfig) -> RequestBuilder {
    match (&config.user, &config.password) {
        (Some(user), Some(pass)) => request.basic_auth(user, Some(pass)),
        (Some(user), None) => request.basic_auth(user, None::<&str>),
        (None, Some(token)) => request.bearer_auth(token),
        (None, None) => request,
    }
}
