//! In-memory graph operations — the core data structure.

pub mod builder;
pub mod traversal;
pub mod weighted_graph;

pub use builder::GraphBuilder;
pub use traversal::{dfs, dfs_edges};
pub use weighted_graph::Graph;
