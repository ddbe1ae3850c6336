//! High-level operations wiring CLI commands to the graph pipeline.

pub mod ops_graph;
pub mod style;
