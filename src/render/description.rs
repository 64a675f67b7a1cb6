//! Structured export — turns a positioned graph into a display-ready
//! description (the JSON handed to a front-end flow renderer).

use serde::Serialize;

use crate::model::{Edge, GraphIr, Point, PositionedNode};

const EDGE_COLOR: &str = "#555";
const EDGE_STROKE_WIDTH: f64 = 2.0;

// ─── Output types ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct NodeData {
    pub label: String,
    /// Count of input edges touching this label on either end.
    pub connections: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct DescribedNode {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub position: Point,
    pub data: NodeData,
}

#[derive(Debug, Clone, Serialize)]
pub struct EdgeStyle {
    pub stroke: String,
    #[serde(rename = "strokeWidth")]
    pub stroke_width: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct EdgeMarker {
    #[serde(rename = "type")]
    pub kind: String,
    pub color: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct DescribedEdge {
    pub id: String,
    pub source: String,
    pub target: String,
    pub animated: bool,
    pub style: EdgeStyle,
    #[serde(rename = "markerEnd")]
    pub marker_end: EdgeMarker,
}

#[derive(Debug, Clone, Serialize)]
pub struct GraphMetadata {
    #[serde(rename = "totalNodes")]
    pub total_nodes: usize,
    #[serde(rename = "totalEdges")]
    pub total_edges: usize,
    #[serde(rename = "graphDensity")]
    pub graph_density: f64,
}

/// The full structured export.
#[derive(Debug, Clone, Serialize)]
pub struct GraphDescription {
    pub nodes: Vec<DescribedNode>,
    pub edges: Vec<DescribedEdge>,
    pub layout: String,
    pub theme: String,
    pub metadata: GraphMetadata,
}

// ─── Builder ─────────────────────────────────────────────────────────────────

fn edge_color(_edge: &Edge) -> &'static str {
    EDGE_COLOR
}

impl GraphDescription {
    /// Build the description from positioned nodes and the raw edge list.
    ///
    /// One output node per input node; one output edge per input edge whose
    /// both endpoints resolve by label — the rest are omitted, never
    /// errored. Counts and density in the metadata reflect the raw input.
    pub fn build(positioned: &[PositionedNode], edges: &[Edge]) -> Self {
        let ir = GraphIr::from_parts(
            &positioned
                .iter()
                .map(|p| crate::model::Node {
                    id: p.id.clone(),
                    label: p.label.clone(),
                    position: Some(p.position),
                })
                .collect::<Vec<_>>(),
            edges,
        );

        let nodes = positioned
            .iter()
            .map(|p| DescribedNode {
                id: p.id.to_string(),
                kind: "customNode".to_string(),
                position: p.position,
                data: NodeData {
                    label: p.label.clone(),
                    connections: ir.connections(&p.label),
                },
            })
            .collect();

        let described_edges = edges
            .iter()
            .filter_map(|edge| {
                let source = ir.resolve(&edge.from)?;
                let target = ir.resolve(&edge.to)?;
                let color = edge_color(edge);
                Some(DescribedEdge {
                    id: format!("e{}", edge.id),
                    source: ir.digraph[source].id.to_string(),
                    target: ir.digraph[target].id.to_string(),
                    animated: true,
                    style: EdgeStyle {
                        stroke: color.to_string(),
                        stroke_width: EDGE_STROKE_WIDTH,
                    },
                    marker_end: EdgeMarker {
                        kind: "arrowclosed".to_string(),
                        color: color.to_string(),
                    },
                })
            })
            .collect();

        Self {
            nodes,
            edges: described_edges,
            layout: "force-directed".to_string(),
            theme: "light".to_string(),
            metadata: GraphMetadata {
                total_nodes: positioned.len(),
                total_edges: edges.len(),
                graph_density: ir.density(),
            },
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
