/// Dual-schema JSON codec for stored graphs
///
/// One logical graph has two on-disk shapes:
/// - the legacy shape, a `nodes` array of `{name, value, edges}` entries
///   derived from the adjacency map,
/// - the current shape, a `networkNodes` array carrying the flat
///   [`NetworkNode`] list the graph was built from.
///
/// Saving always writes the legacy shape and adds the current shape when
/// the graph carries a flat list, so old readers keep working. Loading
/// accepts either shape; a legacy-only document is upgraded in memory by
/// deriving the flat list from its adjacency (lazy migration), and the
/// caller decides whether to re-persist the upgraded document.

use crate::builder::{self, BuildError};
use crate::types::{Graph, GraphEdge, GraphNode, NetworkNode};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::collections::HashMap;
use thiserror::Error;

/// Codec errors
#[derive(Error, Debug)]
pub enum CodecError {
    /// Document carries neither `nodes` nor `networkNodes`
    #[error("document contains no graph data")]
    EmptyDocument,

    /// Legacy edge resolution failed; the legacy shape assumes every
    /// `to` name is present in the same document
    #[error(transparent)]
    UnresolvedReference(#[from] BuildError),

    /// Malformed JSON
    #[error("malformed graph document: {0}")]
    Json(#[from] serde_json::Error),
}

/// One node entry of the legacy `nodes` array
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LegacyNode {
    pub name: String,
    pub value: f64,
    #[serde(default)]
    pub edges: Vec<LegacyEdge>,
}

/// One edge entry of a legacy node
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LegacyEdge {
    pub to: String,
    pub weight: f64,
}

/// Raw serde view of the persisted document; both keys optional on read,
/// absent keys omitted on write
#[derive(Debug, Serialize, Deserialize, Default)]
struct RawDocument {
    #[serde(skip_serializing_if = "Option::is_none")]
    nodes: Option<Vec<LegacyNode>>,

    #[serde(rename = "networkNodes", skip_serializing_if = "Option::is_none")]
    network_nodes: Option<Vec<NetworkNode>>,
}

/// Which shapes a persisted document actually carries
///
/// Presence checks happen once, here, instead of being scattered through
/// the codec.
#[derive(Debug, Clone, PartialEq)]
pub enum GraphDocument {
    /// Only the legacy `nodes` array
    Legacy(Vec<LegacyNode>),
    /// Only the current `networkNodes` array
    Current(Vec<NetworkNode>),
    /// Both shapes, as written by every save since the current shape
    /// was introduced
    Both {
        nodes: Vec<LegacyNode>,
        network_nodes: Vec<NetworkNode>,
    },
}

impl GraphDocument {
    /// Classify a JSON value into one of the document shapes
    pub fn from_value(value: &JsonValue) -> Result<Self, CodecError> {
        let raw: RawDocument = serde_json::from_value(value.clone())?;
        match (raw.nodes, raw.network_nodes) {
            (Some(nodes), Some(network_nodes)) => Ok(GraphDocument::Both {
                nodes,
                network_nodes,
            }),
            (Some(nodes), None) => Ok(GraphDocument::Legacy(nodes)),
            (None, Some(network_nodes)) => Ok(GraphDocument::Current(network_nodes)),
            (None, None) => Err(CodecError::EmptyDocument),
        }
    }

    /// Render the document back to JSON
    pub fn to_value(&self) -> JsonValue {
        let raw = match self {
            GraphDocument::Legacy(nodes) => RawDocument {
                nodes: Some(nodes.clone()),
                network_nodes: None,
            },
            GraphDocument::Current(network_nodes) => RawDocument {
                nodes: None,
                network_nodes: Some(network_nodes.clone()),
            },
            GraphDocument::Both {
                nodes,
                network_nodes,
            } => RawDocument {
                nodes: Some(nodes.clone()),
                network_nodes: Some(network_nodes.clone()),
            },
        };
        // RawDocument serialization cannot fail: plain structs and numbers
        serde_json::to_value(raw).expect("document serialization is infallible")
    }

    /// Upgrade a legacy-only document to carry both shapes
    ///
    /// Each legacy node's edges are projected into parallel
    /// `connectedNodes` / `parameters` sequences in edge order. `Current`
    /// and `Both` documents are returned unchanged.
    pub fn upgrade(self) -> Self {
        match self {
            GraphDocument::Legacy(nodes) => {
                let network_nodes = nodes
                    .iter()
                    .map(|n| NetworkNode {
                        name: n.name.clone(),
                        parameters: n.edges.iter().map(|e| e.weight).collect(),
                        connected_nodes: n.edges.iter().map(|e| e.to.clone()).collect(),
                    })
                    .collect();
                GraphDocument::Both {
                    nodes,
                    network_nodes,
                }
            }
            other => other,
        }
    }
}

/// Serialize a graph to its persisted JSON document
///
/// The legacy `nodes` array is always emitted; `networkNodes` is added
/// when the graph retains its flat list.
pub fn encode(graph: &Graph) -> JsonValue {
    let nodes = graph
        .nodes()
        .iter()
        .map(|node| LegacyNode {
            name: node.name.clone(),
            value: node.value,
            edges: graph
                .edges(&node.name)
                .iter()
                .map(|e| LegacyEdge {
                    to: e.target.clone(),
                    weight: e.weight,
                })
                .collect(),
        })
        .collect();

    let document = match graph.network_nodes() {
        Some(list) => GraphDocument::Both {
            nodes,
            network_nodes: list.to_vec(),
        },
        None => GraphDocument::Legacy(nodes),
    };
    document.to_value()
}

/// Deserialize a persisted JSON document into a graph
///
/// Returns the graph and a flag reporting whether the document was
/// legacy-only and got lazily migrated: in that case the returned graph
/// carries a freshly derived flat list that storage does not have yet,
/// and the caller may re-persist it (best effort).
pub fn decode(value: &JsonValue) -> Result<(Graph, bool), CodecError> {
    match GraphDocument::from_value(value)? {
        GraphDocument::Both {
            nodes,
            network_nodes,
        } => {
            let mut graph = graph_from_legacy(nodes)?;
            graph.set_network_nodes(network_nodes);
            Ok((graph, false))
        }
        GraphDocument::Current(network_nodes) => {
            Ok((builder::build(network_nodes), false))
        }
        GraphDocument::Legacy(nodes) => {
            let mut graph = graph_from_legacy(nodes)?;
            let derived = graph.derive_network_nodes();
            tracing::debug!(
                nodes = derived.len(),
                "migrated legacy-only document in memory"
            );
            graph.set_network_nodes(derived);
            Ok((graph, true))
        }
    }
}

/// Rebuild the adjacency map from the legacy shape
///
/// Two passes: instantiate every node first, then resolve each edge's
/// `to` name against the instantiated set. The legacy shape assumes full
/// resolvability, so an unknown name fails the whole load (the `Reject`
/// side of the shared dangling-edge policy).
fn graph_from_legacy(nodes: Vec<LegacyNode>) -> Result<Graph, CodecError> {
    let graph_nodes: Vec<GraphNode> = nodes
        .iter()
        .map(|n| GraphNode::new(&n.name, n.value))
        .collect();

    let mut adjacency: HashMap<String, Vec<GraphEdge>> = HashMap::with_capacity(nodes.len());
    for node in &nodes {
        let mut edges = Vec::with_capacity(node.edges.len());
        for edge in &node.edges {
            if !graph_nodes.iter().any(|n| n.name == edge.to) {
                return Err(BuildError::UnresolvedReference {
                    node: node.name.clone(),
                    target: edge.to.clone(),
                }
                .into());
            }
            edges.push(GraphEdge::new(&edge.to, edge.weight));
        }
        adjacency.insert(node.name.clone(), edges);
    }

    Ok(Graph::from_parts(graph_nodes, adjacency, None))
}
