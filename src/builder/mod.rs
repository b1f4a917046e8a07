/// Graph construction from a flat node list
///
/// Turns an ordered [`NetworkNode`] list into an adjacency-based
/// [`Graph`]. One `GraphNode` is created per input node; edges are
/// resolved by neighbor name, with the weight taken from the source
/// node's `parameters` at the neighbor's index (zero when the array is
/// short). The input list is retained on the graph for serialization.

use crate::types::{Graph, GraphEdge, GraphNode, NetworkNode};
use std::collections::{HashMap, HashSet};
use thiserror::Error;

/// Build errors
#[derive(Error, Debug, PartialEq)]
pub enum BuildError {
    /// An edge names a node that is not part of the input
    #[error("node '{node}' references unknown node '{target}'")]
    UnresolvedReference { node: String, target: String },
}

/// How to treat edges whose target name is not among the input nodes
///
/// One policy type shared by the builder and the codec's legacy path, so
/// dangling references are handled the same way everywhere and the choice
/// is visible at the call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DanglingEdgePolicy {
    /// Skip the edge and keep building
    #[default]
    Drop,
    /// Fail the whole build with [`BuildError::UnresolvedReference`]
    Reject,
}

/// Build a graph, dropping edges whose target is unknown
///
/// This is the lenient entry point used for graph creation from user
/// input; it never fails.
pub fn build(nodes: Vec<NetworkNode>) -> Graph {
    match build_with_policy(nodes, DanglingEdgePolicy::Drop) {
        Ok(graph) => graph,
        // Drop never yields UnresolvedReference
        Err(_) => unreachable!("drop policy cannot fail"),
    }
}

/// Build a graph with an explicit dangling-edge policy
///
/// Repeated neighbor names yield repeated edges and self-loops are kept;
/// the builder does no edge deduplication of any kind.
pub fn build_with_policy(
    nodes: Vec<NetworkNode>,
    policy: DanglingEdgePolicy,
) -> Result<Graph, BuildError> {
    let known: HashSet<&str> = nodes.iter().map(|n| n.name.as_str()).collect();

    let mut graph_nodes = Vec::with_capacity(nodes.len());
    let mut adjacency: HashMap<String, Vec<GraphEdge>> = HashMap::with_capacity(nodes.len());

    for node in &nodes {
        // TODO: replace the parameter sum with a real node metric once one
        // is defined for the domain
        graph_nodes.push(GraphNode::new(&node.name, node.parameter_sum()));

        let mut edges = Vec::with_capacity(node.connected_nodes.len());
        for (i, target) in node.connected_nodes.iter().enumerate() {
            if !known.contains(target.as_str()) {
                match policy {
                    DanglingEdgePolicy::Drop => {
                        tracing::debug!(
                            node = %node.name,
                            target = %target,
                            "dropping edge to unknown node"
                        );
                        continue;
                    }
                    DanglingEdgePolicy::Reject => {
                        return Err(BuildError::UnresolvedReference {
                            node: node.name.clone(),
                            target: target.clone(),
                        });
                    }
                }
            }
            edges.push(GraphEdge::new(target, node.weight_at(i)));
        }
        adjacency.insert(node.name.clone(), edges);
    }

    Ok(Graph::from_parts(graph_nodes, adjacency, Some(nodes)))
}
