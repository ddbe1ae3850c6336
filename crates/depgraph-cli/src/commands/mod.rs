//! Command dispatch and handler modules.

mod formats;
mod graph;

use miette::Result;

use crate::cli::{Cli, Command};

/// Route a parsed CLI invocation to the appropriate command handler.
pub async fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Graph(args) => graph::exec(args).await,
        Command::Formats => formats::exec(),
    }
}
