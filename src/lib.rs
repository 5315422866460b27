//! undigraph — in-memory weighted undirected graph.
//!
//! Vertices are named by strings and created implicitly by adding edges.
//! On top of the adjacency store the crate offers depth-first traversal, a
//! completeness check, a degree-signature isomorphism filter (a heuristic,
//! not a certifier) and Prim's minimum spanning tree.

pub mod algorithms;
pub mod cli;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use algorithms::{
    degree_signature, is_isomorphic, prim, prim_from_first, DegreeSignature, MinimumSpanningTree,
};
pub use graph::{dfs, dfs_edges, Graph, GraphBuilder};
pub use types::{GraphError, GraphResult, TreeEdge, Weight, DEFAULT_WEIGHT};
