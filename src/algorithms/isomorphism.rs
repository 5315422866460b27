//! Degree-connection signature and the isomorphism heuristic built on it.
//!
//! This is a necessary-condition filter, not an isomorphism test. Two graphs
//! with different signatures are certainly not isomorphic; two graphs with
//! equal signatures may still differ in structure (false positives).

use std::collections::{HashMap, HashSet};

use crate::graph::Graph;

/// Degree value -> union of the degrees of all neighbors of every vertex
/// with that degree.
pub type DegreeSignature = HashMap<usize, HashSet<usize>>;

/// Build the degree-connection signature of `graph`.
///
/// Invariant under vertex renaming.
pub fn degree_signature(graph: &Graph) -> DegreeSignature {
    let mut signature = DegreeSignature::new();
    for slot in 0..graph.num_nodes() {
        let adjacent = graph.adjacent(slot);
        let connected = signature.entry(adjacent.len()).or_default();
        for &(neighbor, _) in adjacent {
            connected.insert(graph.adjacent(neighbor).len());
        }
    }
    signature
}

/// Heuristic isomorphism check.
///
/// Returns false when vertex or edge counts differ, otherwise compares the
/// two degree signatures. A `true` answer means "possibly isomorphic".
/// Symmetric in its arguments.
pub fn is_isomorphic(g: &Graph, h: &Graph) -> bool {
    if g.num_nodes() != h.num_nodes() || g.num_edges() != h.num_edges() {
        log::debug!(
            "Isomorphism rejected on counts: ({}, {}) vs ({}, {})",
            g.num_nodes(),
            g.num_edges(),
            h.num_nodes(),
            h.num_edges()
        );
        return false;
    }
    let same = degree_signature(g) == degree_signature(h);
    log::debug!("Degree signatures equal: {}", same);
    same
}

impl Graph {
    /// See [`is_isomorphic`]. Heuristic only.
    pub fn is_isomorphic(&self, other: &Graph) -> bool {
        is_isomorphic(self, other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphBuilder;

    #[test]
    fn star_signature() {
        let star = GraphBuilder::new()
            .edge("c", "a")
            .edge("c", "b")
            .edge("c", "d")
            .build();
        let sig = degree_signature(&star);
        assert_eq!(sig.len(), 2);
        assert_eq!(sig[&3], HashSet::from([1]));
        assert_eq!(sig[&1], HashSet::from([3]));
    }
}
