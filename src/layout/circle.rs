//! Circular placement for small graphs.

use std::f64::consts::TAU;

use crate::config::LayoutConfig;
use crate::model::{Node, Point, PositionedNode};

/// Place nodes evenly on a circle centered on the canvas.
///
/// Radius is `min(width, height) / 2.5 - padding`; node `i` of `n` sits at
/// angle `i/n · 2π`, in input order. Edges play no role here.
pub fn place(nodes: &[Node], config: &LayoutConfig) -> Vec<PositionedNode> {
    let radius = config.width.min(config.height) / 2.5 - config.padding;
    let cx = config.width / 2.0;
    let cy = config.height / 2.0;
    let n = nodes.len() as f64;

    nodes
        .iter()
        .enumerate()
        .map(|(i, node)| {
            let angle = i as f64 / n * TAU;
            let position = Point::new(cx + radius * angle.cos(), cy + radius * angle.sin());
            PositionedNode::new(node, position)
        })
        .collect()
}

// ─── Tests ───────────────────────────────────────────────────────────────────
