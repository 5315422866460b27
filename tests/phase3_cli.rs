//! Phase 3 tests: CLI presets and command output.

use undigraph::cli::commands::{
    cmd_complete, cmd_demo, cmd_dfs, cmd_iso, cmd_mst, cmd_presets, cmd_show,
};
use undigraph::cli::{preset, PRESET_NAMES};
use undigraph::types::{GraphError, GraphResult};

fn capture<F>(f: F) -> GraphResult<String>
where
    F: FnOnce(&mut Vec<u8>) -> GraphResult<()>,
{
    let mut buf = Vec::new();
    f(&mut buf)?;
    Ok(String::from_utf8(buf).unwrap())
}

#[test]
fn test_all_presets_build() {
    for name in PRESET_NAMES {
        let graph = preset(name).unwrap();
        assert!(!graph.is_empty(), "preset {} is empty", name);
    }
    assert!(preset("complete4").unwrap().is_complete());
    assert_eq!(preset("complete4").unwrap().num_edges(), 6);
}

#[test]
fn test_unknown_preset() {
    match preset("nope") {
        Err(GraphError::UnknownPreset(name)) => assert_eq!(name, "nope"),
        other => panic!("Expected UnknownPreset, got {:?}", other),
    }
    assert!(capture(|out| cmd_show(out, "nope", false)).is_err());
}

#[test]
fn test_presets_listing() {
    let text = capture(|out| cmd_presets(out, false)).unwrap();
    assert_eq!(text.lines().collect::<Vec<_>>(), PRESET_NAMES.to_vec());

    let json = capture(|out| cmd_presets(out, true)).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.as_array().unwrap().len(), PRESET_NAMES.len());
}

#[test]
fn test_show_text() {
    let text = capture(|out| cmd_show(out, "triangle", false)).unwrap();
    assert_eq!(
        text,
        "A -> (B, 1) (C, 1) \nB -> (A, 1) (C, 1) \nC -> (B, 1) (A, 1) \nNodes: 3\nEdges: 3\n"
    );
}

#[test]
fn test_show_json() {
    let json = capture(|out| cmd_show(out, "weighted", true)).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed["nodes"], 5);
    assert_eq!(parsed["edges"], 5);
    assert_eq!(parsed["adjacency"][0]["vertex"], "A");
    assert_eq!(parsed["adjacency"][0]["neighbors"][0]["weight"], 2.0);
}

#[test]
fn test_complete_command() {
    let yes = capture(|out| cmd_complete(out, "triangle", false)).unwrap();
    assert_eq!(yes, "Graph triangle is complete.\n");
    let no = capture(|out| cmd_complete(out, "path", true)).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&no).unwrap();
    assert_eq!(parsed["complete"], false);
}

#[test]
fn test_iso_command() {
    let text = capture(|out| cmd_iso(out, "triangle", "triangle-xyz", false)).unwrap();
    assert!(text.contains("possibly isomorphic"));
    let text = capture(|out| cmd_iso(out, "triangle", "path", false)).unwrap();
    assert!(text.contains("are not isomorphic"));
}

#[test]
fn test_dfs_command() {
    let text = capture(|out| cmd_dfs(out, "triangle", "A", false, false)).unwrap();
    assert_eq!(text, "DFS: A B C\n");

    let text = capture(|out| cmd_dfs(out, "triangle", "A", true, false)).unwrap();
    assert_eq!(text, "DFS edges: (A, B, 1) (B, C, 1)\n");

    let json = capture(|out| cmd_dfs(out, "path", "B", false, true)).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed["visited"], serde_json::json!(["B", "A", "C", "D"]));
}

#[test]
fn test_dfs_command_missing_vertex() {
    let result = capture(|out| cmd_dfs(out, "triangle", "Q", false, false));
    assert!(matches!(result, Err(GraphError::VertexNotFound(_))));
}

#[test]
fn test_mst_command() {
    let text = capture(|out| cmd_mst(out, "weighted", None, false)).unwrap();
    assert_eq!(
        text,
        "MST: (A, B, 2) (A, C, 3) (A, D, 3) (B, E, 3)\nTotal weight: 11\n"
    );

    let json = capture(|out| cmd_mst(out, "weighted", Some("E"), true)).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed["total_weight"], 11.0);
    assert_eq!(parsed["edges"][0]["parent"], "E");
    assert_eq!(parsed["edges"].as_array().unwrap().len(), 4);
}

#[test]
fn test_demo_text() {
    let text = capture(|out| cmd_demo(out, false)).unwrap();
    let expected = "The graphs are (possibly) isomorphic.\n\
                    The graph is complete.\n\
                    DFS: A B C\n\
                    MST: (A, B, 2) (A, C, 3) (A, D, 3) (B, E, 3)\n\
                    Total weight: 11\n\
                    A -> (B, 2) (C, 3) (D, 3) \n\
                    B -> (A, 2) (C, 4) (E, 3) \n\
                    C -> (A, 3) (B, 4) \n\
                    D -> (A, 3) \n\
                    E -> (B, 3) \n";
    assert_eq!(text, expected);
}

#[test]
fn test_demo_json() {
    let json = capture(|out| cmd_demo(out, true)).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed["possibly_isomorphic"], true);
    assert_eq!(parsed["complete"], true);
    assert_eq!(parsed["dfs"], serde_json::json!(["A", "B", "C"]));
    assert_eq!(parsed["total_weight"], 11.0);
}
