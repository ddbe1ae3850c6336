//! Graph database output: writes a formatted dependency graph as
//! `Artifact` nodes and `DEPENDENCY` relationships.

pub mod auth;
pub mod http;
pub mod session;
pub mod writer;
