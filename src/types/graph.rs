use super::edge::GraphEdge;
use super::node::{GraphNode, NetworkNode};
use std::collections::HashMap;

/// Adjacency-list representation of a stored graph
///
/// Holds three views of the same topology:
/// - an ordered node list (insertion order of the input),
/// - the adjacency map from node name to outgoing edges (edge order
///   follows the source node's connection order),
/// - optionally, the retained flat [`NetworkNode`] list the graph was
///   built from, kept for round-trip fidelity and for migrating legacy
///   documents that lack it.
///
/// Invariants: node names are unique; every edge's target names a node in
/// the graph; a graph with N nodes has exactly N adjacency entries, with
/// isolated nodes mapping to an empty edge list.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Graph {
    nodes: Vec<GraphNode>,
    adjacency: HashMap<String, Vec<GraphEdge>>,
    network_nodes: Option<Vec<NetworkNode>>,
}

impl Graph {
    /// Assemble a graph from its parts
    ///
    /// Callers (the builder and the codec) are responsible for upholding
    /// the adjacency invariants.
    pub fn from_parts(
        nodes: Vec<GraphNode>,
        adjacency: HashMap<String, Vec<GraphEdge>>,
        network_nodes: Option<Vec<NetworkNode>>,
    ) -> Self {
        Self {
            nodes,
            adjacency,
            network_nodes,
        }
    }

    /// Nodes in insertion order
    pub fn nodes(&self) -> &[GraphNode] {
        &self.nodes
    }

    /// Number of nodes
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Look up a node by name
    pub fn node(&self, name: &str) -> Option<&GraphNode> {
        self.nodes.iter().find(|n| n.name == name)
    }

    /// Check whether a node with the given name exists
    pub fn contains(&self, name: &str) -> bool {
        self.adjacency.contains_key(name)
    }

    /// Outgoing edges of a node, empty for unknown names
    pub fn edges(&self, name: &str) -> &[GraphEdge] {
        self.adjacency.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Total number of edges across all nodes
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    /// The retained flat node list, if this graph carries one
    pub fn network_nodes(&self) -> Option<&[NetworkNode]> {
        self.network_nodes.as_deref()
    }

    /// Attach a flat node list (used by the codec's migration path)
    pub fn set_network_nodes(&mut self, nodes: Vec<NetworkNode>) {
        self.network_nodes = Some(nodes);
    }

    /// Project the adjacency map back into a flat [`NetworkNode`] list
    ///
    /// For each node, outgoing edges become parallel `connectedNodes` /
    /// `parameters` sequences in adjacency edge order. This is how legacy
    /// documents that never carried a flat list get one.
    pub fn derive_network_nodes(&self) -> Vec<NetworkNode> {
        self.nodes
            .iter()
            .map(|node| {
                let edges = self.edges(&node.name);
                NetworkNode {
                    name: node.name.clone(),
                    parameters: edges.iter().map(|e| e.weight).collect(),
                    connected_nodes: edges.iter().map(|e| e.target.clone()).collect(),
                }
            })
            .collect()
    }
}
