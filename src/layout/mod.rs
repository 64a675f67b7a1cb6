//! Layout engine — computes a 2D position for every node.
//!
//! Two strategies, picked by node count: small graphs go on a circle
//! (deterministic), larger ones run a force-directed simulation. Both are
//! pure functions of their input apart from the simulation's random seed.

pub mod circle;
pub mod force;

use crate::config::LayoutConfig;
use crate::model::{Edge, Node, PositionedNode};

/// Compute positions for `nodes`.
///
/// Graphs of up to `circle_threshold` nodes are placed evenly on a circle in
/// input order; anything larger is spread by the force simulation. Edges
/// only influence the simulated path (attraction); endpoints that resolve to
/// no node label are ignored.
pub fn layout(nodes: &[Node], edges: &[Edge], config: &LayoutConfig) -> Vec<PositionedNode> {
    tracing::debug!(
        node_count = nodes.len(),
        edge_count = edges.len(),
        "generating layout"
    );
    if nodes.len() <= config.circle_threshold {
        circle::place(nodes, config)
    } else {
        force::simulate(nodes, edges, config)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
