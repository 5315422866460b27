//! Fluent API for building Graph instances.

use crate::types::{Weight, DEFAULT_WEIGHT};

use super::Graph;

/// Fluent builder for constructing a Graph.
///
/// Edges are applied in the order they were given, so neighbor order (and
/// therefore traversal order) matches a sequence of `add_edge` calls.
#[derive(Debug, Clone, Default)]
pub struct GraphBuilder {
    edges: Vec<(String, String, Weight)>,
}

impl GraphBuilder {
    /// Create a new, empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an edge with the default weight.
    pub fn edge(self, u: impl Into<String>, v: impl Into<String>) -> Self {
        self.weighted_edge(u, v, DEFAULT_WEIGHT)
    }

    /// Add a weighted edge.
    pub fn weighted_edge(
        mut self,
        u: impl Into<String>,
        v: impl Into<String>,
        weight: Weight,
    ) -> Self {
        self.edges.push((u.into(), v.into(), weight));
        self
    }

    /// Add a chain of unit-weight edges through `path`.
    pub fn path<S: AsRef<str>>(mut self, path: &[S]) -> Self {
        for pair in path.windows(2) {
            self = self.edge(pair[0].as_ref(), pair[1].as_ref());
        }
        self
    }

    /// Build the final Graph.
    pub fn build(self) -> Graph {
        let mut graph = Graph::new();
        for (u, v, w) in &self.edges {
            graph.add_weighted_edge(u, v, *w);
        }
        graph
    }
}
