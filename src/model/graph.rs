//! GraphIr — converts the raw payload into a petgraph DiGraph for layout
//! and analysis.
//!
//! Edges reference nodes by label; this module performs that join exactly
//! once per call. Resolution is lenient: an edge whose `from` or `to`
//! matches no node label is kept out of the digraph (and out of every
//! downstream computation) without raising an error. When two nodes share a
//! label, the first one in input order wins the lookup.

use std::collections::HashMap;

use petgraph::graph::{DiGraph, NodeIndex};

use crate::model::types::{Edge, Node, NodeId};

/// Node data stored in the petgraph DiGraph.
#[derive(Debug, Clone)]
pub struct NodeData {
    pub id: NodeId,
    pub label: String,
}

/// Edge data stored in the petgraph DiGraph.
#[derive(Debug, Clone)]
pub struct EdgeData {
    pub id: NodeId,
}

/// Graph intermediate representation.
///
/// Wraps a petgraph DiGraph and keeps the label→node join table plus the
/// raw edge list. Node insertion order matches input order, so
/// `NodeIndex::index()` doubles as an index into any parallel positions
/// vector.
pub struct GraphIr {
    pub digraph: DiGraph<NodeData, EdgeData>,
    /// Maps node label → petgraph NodeIndex; first match wins on duplicates.
    label_index: HashMap<String, NodeIndex>,
    /// The unresolved input edges, kept for raw-count metrics.
    raw_edges: Vec<Edge>,
}

impl GraphIr {
    pub fn from_parts(nodes: &[Node], edges: &[Edge]) -> Self {
        let mut digraph: DiGraph<NodeData, EdgeData> = DiGraph::new();
        let mut label_index: HashMap<String, NodeIndex> = HashMap::new();

        for node in nodes {
            let idx = digraph.add_node(NodeData {
                id: node.id.clone(),
                label: node.label.clone(),
            });
            label_index.entry(node.label.clone()).or_insert(idx);
        }

        for edge in edges {
            match (label_index.get(&edge.from), label_index.get(&edge.to)) {
                (Some(&from), Some(&to)) => {
                    digraph.add_edge(from, to, EdgeData { id: edge.id.clone() });
                }
                _ => {
                    tracing::debug!(
                        from = %edge.from,
                        to = %edge.to,
                        "dropping edge with unresolvable endpoint"
                    );
                }
            }
        }

        Self {
            digraph,
            label_index,
            raw_edges: edges.to_vec(),
        }
    }

    pub fn node_count(&self) -> usize {
        self.digraph.node_count()
    }

    /// Number of edges whose both endpoints resolved.
    pub fn edge_count(&self) -> usize {
        self.digraph.edge_count()
    }

    /// Number of edges in the input, resolvable or not.
    pub fn raw_edge_count(&self) -> usize {
        self.raw_edges.len()
    }

    /// Look a node up by label (first match wins).
    pub fn resolve(&self, label: &str) -> Option<NodeIndex> {
        self.label_index.get(label).copied()
    }

    /// Resolved edge endpoints as positional indices into the input node
    /// order, one pair per digraph edge.
    pub fn endpoint_indices(&self) -> Vec<(usize, usize)> {
        self.digraph
            .edge_indices()
            .filter_map(|e| self.digraph.edge_endpoints(e))
            .map(|(a, b)| (a.index(), b.index()))
            .collect()
    }

    /// How many input edges touch the given label on either end.
    ///
    /// Counted over the raw edge list: an edge with one dangling endpoint
    /// still contributes to the other endpoint's count.
    pub fn connections(&self, label: &str) -> usize {
        self.raw_edges
            .iter()
            .filter(|e| e.from == label || e.to == label)
            .count()
    }

    /// Undirected density approximation on the directed edge count:
    /// `e / (n·(n-1)) · 2` for n > 1, else 0. Uses the raw edge count.
    pub fn density(&self) -> f64 {
        let n = self.node_count();
        if n > 1 {
            self.raw_edge_count() as f64 / (n as f64 * (n as f64 - 1.0)) * 2.0
        } else {
            0.0
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
