//! Core data types for depgraph.
//!
//! This crate defines the fundamental types the graph pipeline works on:
//! artifact coordinates, dependency scopes, dependency nodes with their
//! resolution status, filter chains, the raw resolved tree handed over by a
//! resolver, configuration, and the recognized output formats.
//!
//! This crate is intentionally free of async code and network I/O.

pub mod config;
pub mod coordinate;
pub mod filter;
pub mod format;
pub mod node;
pub mod scope;
pub mod tree;
