//! graph-visualizer — 2D layout and rendering for directed graphs.
//!
//! Pipeline: raw `(nodes, edges)` → layout engine → positioned graph →
//! renderer → JSON description or PNG bytes. Nodes are identified by id;
//! edges reference nodes by **label**, and an edge whose label matches no
//! node is dropped silently at every stage.
//!
//! Public API: [`generate`] and [`export_png`] (plus `_with_config`
//! variants for non-default geometry).

pub mod config;
pub mod error;
pub mod layout;
pub mod model;
pub mod render;

pub use config::{LayoutConfig, RenderConfig};
pub use error::{Result, VizError};
pub use model::{Edge, GraphInput, Node, NodeId, Point, PositionedNode};
pub use render::GraphDescription;

/// Lay the graph out and build the structured description.
pub fn generate(nodes: &[Node], edges: &[Edge]) -> GraphDescription {
    generate_with_config(nodes, edges, &LayoutConfig::default())
}

pub fn generate_with_config(
    nodes: &[Node],
    edges: &[Edge],
    config: &LayoutConfig,
) -> GraphDescription {
    let positioned = layout::layout(nodes, edges, config);
    GraphDescription::build(&positioned, edges)
}

/// Render the graph to PNG bytes.
///
/// When every node already carries a position, those positions are used
/// as-is; otherwise the layout engine runs first.
pub fn export_png(nodes: &[Node], edges: &[Edge]) -> Result<Vec<u8>> {
    export_png_with_config(nodes, edges, &LayoutConfig::default(), &RenderConfig::default())
}

pub fn export_png_with_config(
    nodes: &[Node],
    edges: &[Edge],
    layout_config: &LayoutConfig,
    render_config: &RenderConfig,
) -> Result<Vec<u8>> {
    let positioned = position_nodes(nodes, edges, layout_config);
    let (svg, canvas) = render::svg::render(&positioned, edges, render_config)?;
    render::png::rasterize(&svg, &canvas)
}

fn position_nodes(nodes: &[Node], edges: &[Edge], config: &LayoutConfig) -> Vec<PositionedNode> {
    let provided: Option<Vec<PositionedNode>> = nodes
        .iter()
        .map(|n| n.position.map(|p| PositionedNode::new(n, p)))
        .collect();
    match provided {
        Some(positioned) => positioned,
        None => layout::layout(nodes, edges, config),
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
