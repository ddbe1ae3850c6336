//! Dependency graph model: builds a filtered, deduplicated graph from a
//! resolved dependency tree and renders it as text or JSON.

pub mod adapter;
pub mod format;
pub mod graph;
pub mod prune;
pub mod render;
