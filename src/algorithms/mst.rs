//! Minimum spanning tree via lazy Prim.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use serde::Serialize;

use crate::graph::Graph;
use crate::types::{GraphError, GraphResult, TreeEdge, Weight};

/// Spanning tree of the component reachable from the start vertex.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MinimumSpanningTree {
    /// Edges in the order they joined the tree.
    pub edges: Vec<TreeEdge>,
}

impl MinimumSpanningTree {
    /// Sum of all tree edge weights.
    pub fn total_weight(&self) -> Weight {
        self.edges.iter().map(|e| e.weight).sum()
    }

    /// Number of tree edges.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// True if the tree has no edges.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Vertices spanned by the tree, root first, then in join order.
    pub fn vertices(&self) -> Vec<&str> {
        let mut out = Vec::with_capacity(self.edges.len() + 1);
        if let Some(first) = self.edges.first() {
            out.push(first.parent.as_str());
        }
        out.extend(self.edges.iter().map(|e| e.child.as_str()));
        out
    }
}

/// Heap entry. Ordered by weight, then vertex name, then parent name (the
/// root's missing parent sorts first); reversed so `BinaryHeap` pops the
/// smallest.
struct Candidate<'a> {
    weight: Weight,
    vertex: usize,
    name: &'a str,
    parent: Option<&'a str>,
}

impl Candidate<'_> {
    fn key_cmp(&self, other: &Self) -> Ordering {
        self.weight
            .total_cmp(&other.weight)
            .then_with(|| self.name.cmp(other.name))
            .then_with(|| self.parent.cmp(&other.parent))
    }
}

impl PartialEq for Candidate<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.key_cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate<'_> {}

impl Ord for Candidate<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        other.key_cmp(self)
    }
}

impl PartialOrd for Candidate<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Prim's algorithm from `start`.
///
/// Only the component containing `start` is spanned; other components are
/// left out without error. Equal-weight candidates are broken by vertex
/// name, then parent name, so the result is deterministic.
///
/// Errors: [`GraphError::EmptyGraph`] for an empty graph,
/// [`GraphError::VertexNotFound`] for an unknown start, and
/// [`GraphError::Disconnected`] when `start` has no edges.
pub fn prim(graph: &Graph, start: &str) -> GraphResult<MinimumSpanningTree> {
    if graph.is_empty() {
        return Err(GraphError::EmptyGraph);
    }
    let start_slot = graph.slot_of(start).ok_or_else(|| {
        log::warn!("MST start vertex {:?} not in graph", start);
        GraphError::VertexNotFound(start.to_string())
    })?;

    let mut in_tree = vec![false; graph.num_nodes()];
    let mut edges = Vec::new();
    let mut heap = BinaryHeap::new();
    heap.push(Candidate {
        weight: 0.0,
        vertex: start_slot,
        name: graph.name_of(start_slot),
        parent: None,
    });

    while let Some(candidate) = heap.pop() {
        if in_tree[candidate.vertex] {
            log::trace!("Discarding stale entry for {}", candidate.name);
            continue;
        }
        in_tree[candidate.vertex] = true;
        if let Some(parent_name) = candidate.parent {
            edges.push(TreeEdge::new(parent_name, candidate.name, candidate.weight));
        }

        for &(neighbor, weight) in graph.adjacent(candidate.vertex) {
            if !in_tree[neighbor] {
                heap.push(Candidate {
                    weight,
                    vertex: neighbor,
                    name: graph.name_of(neighbor),
                    parent: Some(candidate.name),
                });
            }
        }
    }

    if edges.is_empty() {
        log::warn!("MST from {:?}: no edges reachable", start);
        return Err(GraphError::Disconnected(start.to_string()));
    }

    let tree = MinimumSpanningTree { edges };
    log::debug!(
        "MST from {:?}: {} edges, total weight {}",
        start,
        tree.len(),
        tree.total_weight()
    );
    Ok(tree)
}

/// Prim's algorithm starting at the first-inserted vertex.
pub fn prim_from_first(graph: &Graph) -> GraphResult<MinimumSpanningTree> {
    match graph.vertices().next() {
        Some(first) => prim(graph, first),
        None => Err(GraphError::EmptyGraph),
    }
}

impl Graph {
    /// See [`prim`].
    pub fn prim(&self, start: &str) -> GraphResult<MinimumSpanningTree> {
        prim(self, start)
    }
}
