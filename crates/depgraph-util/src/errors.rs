use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Boxed error used to carry the underlying cause of a failure.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Unified error type for all depgraph operations.
#[derive(Debug, Error, Diagnostic)]
pub enum DepgraphError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration: malformed pattern, unknown scope or format.
    #[error("Configuration error: {message}")]
    #[diagnostic(help("Check your depgraph.toml and command-line arguments"))]
    Config { message: String },

    /// The dependency resolver could not produce a dependency tree.
    #[error("Dependency resolution failed: {message}")]
    Resolution {
        message: String,
        #[source]
        source: Option<BoxError>,
    },

    /// A single node or edge could not be rendered.
    #[error("Render error: {message}")]
    Render { message: String },

    /// Writing to the graph store failed.
    #[error("Graph store error: {message}")]
    Store { message: String },

    /// The graph was built but the output file could not be written.
    #[error("Unable to write graph file {}: {source}", path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl DepgraphError {
    /// Shorthand for a [`DepgraphError::Config`] error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Wrap an underlying resolver failure.
    pub fn resolution(message: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self::Resolution {
            message: message.into(),
            source: Some(source.into()),
        }
    }
}

/// Convenience alias for `miette::Result<T>`.
pub type DepgraphResult<T> = miette::Result<T>;
