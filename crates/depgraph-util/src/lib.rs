//! Shared utilities for depgraph.
//!
//! This crate provides cross-cutting concerns used by all other depgraph crates:
//! error types, filesystem helpers for writing graph files, and terminal
//! status and progress indicators.

pub mod errors;
pub mod fs;
pub mod progress;
