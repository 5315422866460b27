//! Depth-first traversal.
//!
//! The walk uses an explicit stack but visits vertices in exactly the order
//! the recursive formulation would: neighbors are tried in insertion order
//! and each unvisited one is fully explored before the next is tried.

use crate::types::{GraphError, GraphResult, TreeEdge, Weight};

use super::Graph;

/// Walk the component of `start`, calling `discover(parent, child, weight)`
/// for every newly reached vertex in discovery order.
fn walk<F>(graph: &Graph, start: usize, mut discover: F)
where
    F: FnMut(usize, usize, Weight),
{
    let mut visited = vec![false; graph.num_nodes()];
    // (vertex, index of the next neighbor to try)
    let mut stack: Vec<(usize, usize)> = vec![(start, 0)];
    visited[start] = true;

    while let Some(frame) = stack.last_mut() {
        let (current, next) = *frame;
        let adjacent = graph.adjacent(current);
        if next >= adjacent.len() {
            stack.pop();
            continue;
        }
        frame.1 += 1;

        let (neighbor, weight) = adjacent[next];
        if !visited[neighbor] {
            visited[neighbor] = true;
            discover(current, neighbor, weight);
            stack.push((neighbor, 0));
        }
    }
}

fn start_slot(graph: &Graph, start: &str) -> GraphResult<usize> {
    graph.slot_of(start).ok_or_else(|| {
        log::warn!("DFS start vertex {:?} not in graph", start);
        GraphError::VertexNotFound(start.to_string())
    })
}

/// Depth-first traversal from `start`, returning vertices in visit order.
///
/// The first element is always `start`.
pub fn dfs(graph: &Graph, start: &str) -> GraphResult<Vec<String>> {
    let start_slot = start_slot(graph, start)?;
    let mut order = vec![start.to_string()];
    walk(graph, start_slot, |_, child, _| {
        order.push(graph.name_of(child).to_string());
    });
    log::debug!("DFS from {:?} visited {} vertices", start, order.len());
    Ok(order)
}

/// Depth-first traversal from `start`, returning the edges used to discover
/// each new vertex, in discovery order. A start vertex with no unvisited
/// neighbors yields an empty list.
pub fn dfs_edges(graph: &Graph, start: &str) -> GraphResult<Vec<TreeEdge>> {
    let start_slot = start_slot(graph, start)?;
    let mut edges = Vec::new();
    walk(graph, start_slot, |parent, child, weight| {
        edges.push(TreeEdge::new(
            graph.name_of(parent),
            graph.name_of(child),
            weight,
        ));
    });
    log::debug!("DFS tree from {:?} has {} edges", start, edges.len());
    Ok(edges)
}

impl Graph {
    /// See [`dfs`].
    pub fn dfs(&self, start: &str) -> GraphResult<Vec<String>> {
        dfs(self, start)
    }

    /// See [`dfs_edges`].
    pub fn dfs_edges(&self, start: &str) -> GraphResult<Vec<TreeEdge>> {
        dfs_edges(self, start)
    }
}
