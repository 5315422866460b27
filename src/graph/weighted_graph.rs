//! Core graph structure — named vertices with insertion-ordered adjacency.

use std::collections::HashMap;
use std::fmt;

use crate::types::{format_weight, Weight, DEFAULT_WEIGHT};

/// One vertex slot: its name and its neighbors in the order the edges
/// touching it were first added.
#[derive(Debug, Clone)]
struct VertexEntry {
    name: String,
    /// (neighbor slot, weight), insertion order.
    neighbors: Vec<(usize, Weight)>,
    /// neighbor slot -> position in `neighbors`.
    positions: HashMap<usize, usize>,
}

impl VertexEntry {
    fn new(name: String) -> Self {
        Self {
            name,
            neighbors: Vec::new(),
            positions: HashMap::new(),
        }
    }

    /// Insert or overwrite the weight towards `neighbor`. An overwrite keeps
    /// the neighbor's original position.
    fn set_neighbor(&mut self, neighbor: usize, weight: Weight) -> bool {
        match self.positions.get(&neighbor) {
            Some(&pos) => {
                self.neighbors[pos].1 = weight;
                false
            }
            None => {
                self.positions.insert(neighbor, self.neighbors.len());
                self.neighbors.push((neighbor, weight));
                true
            }
        }
    }
}

/// Weighted undirected graph keyed by vertex name.
///
/// Vertices exist only as endpoints of edges; there is no removal. Every
/// edge is stored in both directions with the same weight.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    /// Vertex slots in insertion order.
    vertices: Vec<VertexEntry>,
    /// Vertex name -> slot.
    index: HashMap<String, usize>,
}

impl Graph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an edge with the default weight of 1.
    pub fn add_edge(&mut self, u: &str, v: &str) {
        self.add_weighted_edge(u, v, DEFAULT_WEIGHT);
    }

    /// Add an edge between `u` and `v`, creating either vertex if new.
    ///
    /// Re-adding an existing pair overwrites its weight in both directions.
    /// Weights are not validated.
    pub fn add_weighted_edge(&mut self, u: &str, v: &str, weight: Weight) {
        let ui = self.ensure_vertex(u);
        let vi = self.ensure_vertex(v);
        let inserted = self.vertices[ui].set_neighbor(vi, weight);
        self.vertices[vi].set_neighbor(ui, weight);
        if inserted {
            log::debug!("Added edge {} -- {} ({})", u, v, weight);
        } else {
            log::debug!("Updated edge {} -- {} to {}", u, v, weight);
        }
    }

    fn ensure_vertex(&mut self, name: &str) -> usize {
        if let Some(&slot) = self.index.get(name) {
            return slot;
        }
        let slot = self.vertices.len();
        self.vertices.push(VertexEntry::new(name.to_string()));
        self.index.insert(name.to_string(), slot);
        slot
    }

    /// Number of vertices.
    pub fn num_nodes(&self) -> usize {
        self.vertices.len()
    }

    /// Number of edges: half the sum of all neighbor counts.
    pub fn num_edges(&self) -> usize {
        self.vertices.iter().map(|v| v.neighbors.len()).sum::<usize>() / 2
    }

    /// True if the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// True if `name` is a vertex of this graph. Names are case-sensitive.
    pub fn contains_vertex(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Vertex names in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = &str> + '_ {
        self.vertices.iter().map(|v| v.name.as_str())
    }

    /// Neighbors of `name` with edge weights, in insertion order.
    /// `None` if the vertex does not exist.
    pub fn neighbors(&self, name: &str) -> Option<Vec<(&str, Weight)>> {
        let slot = self.slot_of(name)?;
        Some(
            self.vertices[slot]
                .neighbors
                .iter()
                .map(|&(n, w)| (self.vertices[n].name.as_str(), w))
                .collect(),
        )
    }

    /// Number of neighbors of `name`.
    pub fn degree(&self, name: &str) -> Option<usize> {
        self.slot_of(name).map(|slot| self.vertices[slot].neighbors.len())
    }

    /// Weight of the edge between `u` and `v`, if there is one.
    pub fn weight(&self, u: &str, v: &str) -> Option<Weight> {
        let ui = self.slot_of(u)?;
        let vi = self.slot_of(v)?;
        let entry = &self.vertices[ui];
        entry.positions.get(&vi).map(|&pos| entry.neighbors[pos].1)
    }

    /// True iff every vertex is adjacent to every other vertex.
    ///
    /// An empty graph is complete (vacuously).
    pub fn is_complete(&self) -> bool {
        let expected = self.num_nodes().saturating_sub(1);
        let complete = self.vertices.iter().all(|v| v.neighbors.len() == expected);
        log::debug!(
            "Completeness check over {} vertices: {}",
            self.num_nodes(),
            complete
        );
        complete
    }

    // Slot-level access for the algorithms.

    pub(crate) fn slot_of(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    pub(crate) fn name_of(&self, slot: usize) -> &str {
        &self.vertices[slot].name
    }

    pub(crate) fn adjacent(&self, slot: usize) -> &[(usize, Weight)] {
        &self.vertices[slot].neighbors
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for vertex in &self.vertices {
            write!(f, "{} -> ", vertex.name)?;
            for &(n, w) in &vertex.neighbors {
                write!(f, "({}, {}) ", self.vertices[n].name, format_weight(w))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
