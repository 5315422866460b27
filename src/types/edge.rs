//! Edges reported by traversal and spanning-tree results.

use std::fmt;

use serde::Serialize;

use super::{format_weight, Weight};

/// An edge used to reach a new vertex: `parent -> child` with the weight of
/// the connecting edge.
///
/// Results own their vertex names, so they stay valid after the graph is
/// mutated further.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TreeEdge {
    /// Vertex that was already in the tree.
    pub parent: String,
    /// Vertex discovered through this edge.
    pub child: String,
    /// Weight of the edge.
    pub weight: Weight,
}

impl TreeEdge {
    /// Create a new tree edge.
    pub fn new(parent: impl Into<String>, child: impl Into<String>, weight: Weight) -> Self {
        Self {
            parent: parent.into(),
            child: child.into(),
            weight,
        }
    }
}

impl fmt::Display for TreeEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {})",
            self.parent,
            self.child,
            format_weight(self.weight)
        )
    }
}
