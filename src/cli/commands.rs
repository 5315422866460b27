//! CLI command implementations.
//!
//! Every command writes its report to `out`, either as text or as JSON.

use std::io::Write;

use crate::algorithms::{is_isomorphic, prim, prim_from_first, MinimumSpanningTree};
use crate::graph::Graph;
use crate::types::{format_weight, GraphResult, TreeEdge};

use super::presets::{preset, PRESET_NAMES};

fn write_json<W: Write>(out: &mut W, value: &serde_json::Value) -> GraphResult<()> {
    writeln!(out, "{}", serde_json::to_string_pretty(value)?)?;
    Ok(())
}

fn adjacency_json(graph: &Graph) -> serde_json::Value {
    let vertices: Vec<serde_json::Value> = graph
        .vertices()
        .map(|v| {
            let neighbors: Vec<serde_json::Value> = graph
                .neighbors(v)
                .unwrap_or_default()
                .into_iter()
                .map(|(n, w)| serde_json::json!({"vertex": n, "weight": w}))
                .collect();
            serde_json::json!({"vertex": v, "neighbors": neighbors})
        })
        .collect();
    serde_json::Value::Array(vertices)
}

/// List the preset graph names.
pub fn cmd_presets<W: Write>(out: &mut W, json: bool) -> GraphResult<()> {
    if json {
        write_json(out, &serde_json::json!(PRESET_NAMES))
    } else {
        for name in PRESET_NAMES {
            writeln!(out, "{}", name)?;
        }
        Ok(())
    }
}

/// Print a preset's adjacency and counts.
pub fn cmd_show<W: Write>(out: &mut W, name: &str, json: bool) -> GraphResult<()> {
    let graph = preset(name)?;
    if json {
        write_json(
            out,
            &serde_json::json!({
                "graph": name,
                "nodes": graph.num_nodes(),
                "edges": graph.num_edges(),
                "adjacency": adjacency_json(&graph),
            }),
        )
    } else {
        write!(out, "{}", graph)?;
        writeln!(out, "Nodes: {}", graph.num_nodes())?;
        writeln!(out, "Edges: {}", graph.num_edges())?;
        Ok(())
    }
}

/// Report whether a preset is complete.
pub fn cmd_complete<W: Write>(out: &mut W, name: &str, json: bool) -> GraphResult<()> {
    let graph = preset(name)?;
    let complete = graph.is_complete();
    if json {
        write_json(out, &serde_json::json!({"graph": name, "complete": complete}))
    } else if complete {
        writeln!(out, "Graph {} is complete.", name)?;
        Ok(())
    } else {
        writeln!(out, "Graph {} is not complete.", name)?;
        Ok(())
    }
}

/// Run the degree-signature isomorphism filter on two presets.
pub fn cmd_iso<W: Write>(out: &mut W, first: &str, second: &str, json: bool) -> GraphResult<()> {
    let g = preset(first)?;
    let h = preset(second)?;
    let verdict = is_isomorphic(&g, &h);
    if json {
        write_json(
            out,
            &serde_json::json!({
                "first": first,
                "second": second,
                "possibly_isomorphic": verdict,
            }),
        )
    } else if verdict {
        writeln!(
            out,
            "Graphs {} and {} pass the degree-signature check (possibly isomorphic).",
            first, second
        )?;
        Ok(())
    } else {
        writeln!(out, "Graphs {} and {} are not isomorphic.", first, second)?;
        Ok(())
    }
}

fn edges_text(edges: &[TreeEdge]) -> String {
    edges
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Depth-first traversal of a preset.
pub fn cmd_dfs<W: Write>(
    out: &mut W,
    name: &str,
    start: &str,
    edges: bool,
    json: bool,
) -> GraphResult<()> {
    let graph = preset(name)?;
    if edges {
        let tree = graph.dfs_edges(start)?;
        if json {
            write_json(out, &serde_json::json!({"start": start, "edges": tree}))
        } else {
            writeln!(out, "DFS edges: {}", edges_text(&tree))?;
            Ok(())
        }
    } else {
        let order = graph.dfs(start)?;
        if json {
            write_json(out, &serde_json::json!({"start": start, "visited": order}))
        } else {
            writeln!(out, "DFS: {}", order.join(" "))?;
            Ok(())
        }
    }
}

/// Prim's MST on a preset, from `start` or the first vertex.
pub fn cmd_mst<W: Write>(
    out: &mut W,
    name: &str,
    start: Option<&str>,
    json: bool,
) -> GraphResult<()> {
    let graph = preset(name)?;
    let tree = match start {
        Some(s) => prim(&graph, s)?,
        None => prim_from_first(&graph)?,
    };
    write_tree(out, &tree, json)
}

fn write_tree<W: Write>(out: &mut W, tree: &MinimumSpanningTree, json: bool) -> GraphResult<()> {
    if json {
        write_json(
            out,
            &serde_json::json!({
                "edges": tree.edges,
                "total_weight": tree.total_weight(),
            }),
        )
    } else {
        writeln!(out, "MST: {}", edges_text(&tree.edges))?;
        writeln!(out, "Total weight: {}", format_weight(tree.total_weight()))?;
        Ok(())
    }
}

/// Run the full demonstration sequence: isomorphism of the two triangles,
/// completeness of the first, DFS from A, Prim on the weighted preset, and
/// the weighted adjacency itself.
pub fn cmd_demo<W: Write>(out: &mut W, json: bool) -> GraphResult<()> {
    let g = preset("triangle")?;
    let h = preset("triangle-xyz")?;
    let p = preset("weighted")?;

    let iso = is_isomorphic(&g, &h);
    let complete = g.is_complete();
    let order = g.dfs("A")?;
    let tree = prim_from_first(&p)?;

    if json {
        write_json(
            out,
            &serde_json::json!({
                "possibly_isomorphic": iso,
                "complete": complete,
                "dfs": order,
                "mst": tree.edges,
                "total_weight": tree.total_weight(),
                "adjacency": adjacency_json(&p),
            }),
        )
    } else {
        if iso {
            writeln!(out, "The graphs are (possibly) isomorphic.")?;
        } else {
            writeln!(out, "The graphs are not isomorphic.")?;
        }
        if complete {
            writeln!(out, "The graph is complete.")?;
        } else {
            writeln!(out, "The graph is not complete.")?;
        }
        writeln!(out, "DFS: {}", order.join(" "))?;
        write_tree(out, &tree, false)?;
        write!(out, "{}", p)?;
        Ok(())
    }
}
