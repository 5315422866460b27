//! Named example graphs available to the CLI.

use crate::graph::{Graph, GraphBuilder};
use crate::types::{GraphError, GraphResult};

/// All preset names, in listing order.
pub const PRESET_NAMES: [&str; 5] = ["triangle", "triangle-xyz", "weighted", "path", "complete4"];

/// Build the preset graph called `name`.
pub fn preset(name: &str) -> GraphResult<Graph> {
    let graph = match name {
        "triangle" => GraphBuilder::new()
            .edge("A", "B")
            .edge("B", "C")
            .edge("C", "A")
            .build(),
        "triangle-xyz" => GraphBuilder::new()
            .edge("X", "Y")
            .edge("Y", "Z")
            .edge("Z", "X")
            .build(),
        "weighted" => GraphBuilder::new()
            .weighted_edge("A", "B", 2.0)
            .weighted_edge("A", "C", 3.0)
            .weighted_edge("A", "D", 3.0)
            .weighted_edge("B", "C", 4.0)
            .weighted_edge("B", "E", 3.0)
            .build(),
        "path" => GraphBuilder::new().path(&["A", "B", "C", "D"]).build(),
        "complete4" => {
            let names = ["A", "B", "C", "D"];
            let mut builder = GraphBuilder::new();
            for (i, u) in names.iter().enumerate() {
                for v in &names[i + 1..] {
                    builder = builder.edge(*u, *v);
                }
            }
            builder.build()
        }
        other => return Err(GraphError::UnknownPreset(other.to_string())),
    };
    Ok(graph)
}
