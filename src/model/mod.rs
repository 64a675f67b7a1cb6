//! Data model: input payload types and the petgraph-backed IR.

pub mod graph;
pub mod types;

pub use graph::GraphIr;
pub use types::{Edge, GraphInput, Node, NodeId, Point, PositionedNode};
