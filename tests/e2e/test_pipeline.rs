//! End-to-end tests for the full pipeline: JSON payload → layout →
//! structured description / PNG bytes.

use graph_visualizer::{export_png, generate, GraphInput, LayoutConfig, Node, VizError};

const PNG_MAGIC: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];

fn payload(json: &str) -> GraphInput {
    serde_json::from_str(json).expect("valid payload")
}

fn png_dimensions(bytes: &[u8]) -> (u32, u32) {
    assert_eq!(&bytes[..8], &PNG_MAGIC, "missing PNG signature");
    let w = u32::from_be_bytes(bytes[16..20].try_into().unwrap());
    let h = u32::from_be_bytes(bytes[20..24].try_into().unwrap());
    (w, h)
}

// ── Structured export ─────────────────────────────────────────────────────

#[test]
fn test_generate_small_graph_json_shape() {
    let input = payload(
        r#"{
            "nodes": [
                {"id": 1, "label": "A"},
                {"id": 2, "label": "B"},
                {"id": "third", "label": "C"}
            ],
            "edges": [
                {"id": 1, "from": "A", "to": "B"},
                {"id": 2, "from": "B", "to": "C"}
            ]
        }"#,
    );
    let v = serde_json::to_value(generate(&input.nodes, &input.edges)).unwrap();

    assert_eq!(v["nodes"].as_array().unwrap().len(), 3);
    assert_eq!(v["edges"].as_array().unwrap().len(), 2);
    assert_eq!(v["nodes"][2]["id"], "third");
    assert_eq!(v["nodes"][0]["data"]["connections"], 1);
    assert_eq!(v["nodes"][1]["data"]["connections"], 2);
    assert_eq!(v["edges"][0]["id"], "e1");
    assert_eq!(v["layout"], "force-directed");
    assert_eq!(v["theme"], "light");
    assert_eq!(v["metadata"]["totalNodes"], 3);
    assert_eq!(v["metadata"]["totalEdges"], 2);
}

#[test]
fn test_generate_dangling_edge_does_not_crash() {
    let input = payload(
        r#"{
            "nodes": [{"id": 1, "label": "A"}],
            "edges": [{"id": 1, "from": "A", "to": "B"}]
        }"#,
    );
    let d = generate(&input.nodes, &input.edges);
    assert_eq!(d.nodes.len(), 1);
    assert_eq!(d.edges.len(), 0);
}

#[test]
fn test_generate_missing_field_is_a_client_error() {
    assert!(serde_json::from_str::<GraphInput>(r#"{"nodes": []}"#).is_err());
}

#[test]
fn test_generate_two_runs_identical_for_small_graph() {
    let input = payload(
        r#"{
            "nodes": [
                {"id": 1, "label": "A"}, {"id": 2, "label": "B"},
                {"id": 3, "label": "C"}, {"id": 4, "label": "D"}
            ],
            "edges": [{"id": 1, "from": "A", "to": "D"}]
        }"#,
    );
    let a = serde_json::to_value(generate(&input.nodes, &input.edges)).unwrap();
    let b = serde_json::to_value(generate(&input.nodes, &input.edges)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_generate_large_graph_positions_bounded() {
    let nodes: Vec<Node> = (0..25).map(|i| Node::new(i, format!("n{i}"))).collect();
    let edges = Vec::new();
    let cfg = LayoutConfig::default();
    for _ in 0..3 {
        let d = generate(&nodes, &edges);
        for n in &d.nodes {
            assert!(n.position.x >= cfg.padding && n.position.x <= cfg.width - cfg.padding);
            assert!(n.position.y >= cfg.padding && n.position.y <= cfg.height - cfg.padding);
        }
    }
}

// ── PNG export ────────────────────────────────────────────────────────────

#[test]
fn test_export_png_single_node_canvas_size() {
    let input = payload(
        r#"{
            "nodes": [{"id": 1, "label": "A", "position": {"x": 0, "y": 0}}],
            "edges": []
        }"#,
    );
    let bytes = export_png(&input.nodes, &input.edges).unwrap();
    assert_eq!(png_dimensions(&bytes), (200, 150));
}

#[test]
fn test_export_png_with_provided_positions_and_edge() {
    let input = payload(
        r#"{
            "nodes": [
                {"id": 1, "label": "A", "position": {"x": 0, "y": 0}},
                {"id": 2, "label": "B", "position": {"x": 200, "y": 0}}
            ],
            "edges": [{"id": 1, "from": "A", "to": "B"}]
        }"#,
    );
    let bytes = export_png(&input.nodes, &input.edges).unwrap();
    // 100-wide boxes at x=0 and x=200 plus padding: 400×150.
    assert_eq!(png_dimensions(&bytes), (400, 150));
}

#[test]
fn test_export_png_without_positions_runs_layout() {
    let input = payload(
        r#"{
            "nodes": [{"id": 1, "label": "A"}, {"id": 2, "label": "B"}],
            "edges": [{"id": 1, "from": "A", "to": "B"}]
        }"#,
    );
    let bytes = export_png(&input.nodes, &input.edges).unwrap();
    let (w, h) = png_dimensions(&bytes);
    assert!(w > 0 && h > 0);
}

#[test]
fn test_export_png_downscales_huge_graph() {
    let input = payload(
        r#"{
            "nodes": [
                {"id": 1, "label": "A", "position": {"x": 0, "y": 0}},
                {"id": 2, "label": "B", "position": {"x": 5000, "y": 0}}
            ],
            "edges": []
        }"#,
    );
    let bytes = export_png(&input.nodes, &input.edges).unwrap();
    let (w, h) = png_dimensions(&bytes);
    assert!(w <= 2000 && h <= 2000);
    assert_eq!(w, 2000);
}

#[test]
fn test_export_png_empty_graph_is_invalid_input() {
    let input = payload(r#"{"nodes": [], "edges": []}"#);
    assert!(matches!(
        export_png(&input.nodes, &input.edges),
        Err(VizError::InvalidInput(_))
    ));
}
