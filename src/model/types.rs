//! Input data structures for the visualization pipeline.
//!
//! These types represent the raw `(nodes, edges)` payload handed to the
//! library: nodes identified by id, edges referencing nodes **by label**.

use serde::{Deserialize, Serialize};

// ─── NodeId ──────────────────────────────────────────────────────────────────

/// A node (or edge) identifier: callers send either a string or an integer.
///
/// Ids are stringified on output, so both variants render the same way.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NodeId {
    Int(i64),
    Str(String),
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NodeId::Int(n) => write!(f, "{}", n),
            NodeId::Str(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for NodeId {
    fn from(n: i64) -> Self {
        NodeId::Int(n)
    }
}

impl From<i32> for NodeId {
    fn from(n: i32) -> Self {
        NodeId::Int(n.into())
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        NodeId::Str(s.to_string())
    }
}

// ─── Point ───────────────────────────────────────────────────────────────────

/// A 2D position in graph coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

// ─── Node ────────────────────────────────────────────────────────────────────

/// An input node.
///
/// `position` is only honored by the image-export path: when every node in
/// the payload carries one, layout is skipped and the given positions are
/// rendered as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    /// Display label; also the join key edges use to reference this node.
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Point>,
}

impl Node {
    pub fn new(id: impl Into<NodeId>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            position: None,
        }
    }

    pub fn at(id: impl Into<NodeId>, label: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            position: Some(Point::new(x, y)),
        }
    }
}

// ─── Edge ────────────────────────────────────────────────────────────────────

/// A directed input edge. Endpoints are node **labels**, not ids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub id: NodeId,
    /// Label of the source node.
    pub from: String,
    /// Label of the target node.
    pub to: String,
}

impl Edge {
    pub fn new(id: impl Into<NodeId>, from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            from: from.into(),
            to: to.into(),
        }
    }
}

// ─── PositionedNode ──────────────────────────────────────────────────────────

/// A node with its computed (or caller-supplied) position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PositionedNode {
    pub id: NodeId,
    pub label: String,
    pub position: Point,
}

impl PositionedNode {
    pub fn new(node: &Node, position: Point) -> Self {
        Self {
            id: node.id.clone(),
            label: node.label.clone(),
            position,
        }
    }
}

// ─── GraphInput ──────────────────────────────────────────────────────────────

/// The top-level request payload: both fields are mandatory, so a document
/// missing `nodes` or `edges` fails deserialization before any computation.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphInput {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

// ─── Tests ───────────────────────────────────────────────────────────────────
