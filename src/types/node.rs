use serde::{Deserialize, Serialize};

/// Flat, user-supplied description of one vertex and its outgoing
/// weighted connections
///
/// This is the wire shape graphs are created from and the `networkNodes`
/// entry of the persisted document. `parameters[i]` is the weight of the
/// connection to `connected_nodes[i]`; when `parameters` is shorter than
/// `connected_nodes`, the missing weights are treated as zero.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct NetworkNode {
    /// Node name, unique within a graph
    pub name: String,

    /// Connection weights, positionally paired with `connected_nodes`
    #[serde(default)]
    pub parameters: Vec<f64>,

    /// Names of the nodes this node connects to
    #[serde(rename = "connectedNodes", default)]
    pub connected_nodes: Vec<String>,
}

impl NetworkNode {
    /// Create a node with paired connections and weights
    pub fn new(
        name: impl Into<String>,
        connected_nodes: Vec<String>,
        parameters: Vec<f64>,
    ) -> Self {
        Self {
            name: name.into(),
            parameters,
            connected_nodes,
        }
    }

    /// Create a node with no outgoing connections
    pub fn isolated(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parameters: Vec::new(),
            connected_nodes: Vec::new(),
        }
    }

    /// Weight of the connection at `index`, zero when `parameters` is short
    pub fn weight_at(&self, index: usize) -> f64 {
        self.parameters.get(index).copied().unwrap_or(0.0)
    }

    /// Sum of all parameters, zero for an empty list
    pub fn parameter_sum(&self) -> f64 {
        self.parameters.iter().sum()
    }
}

/// Vertex of a built graph
///
/// `value` is currently the sum of the originating [`NetworkNode`]'s
/// parameters. It is a placeholder aggregate, not a domain metric.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GraphNode {
    /// Node name, unique within a graph
    pub name: String,

    /// Aggregate value of the node
    pub value: f64,
}

impl GraphNode {
    /// Create a new graph node
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weight_at_pads_with_zero() {
        let node = NetworkNode::new(
            "a",
            vec!["b".to_string(), "c".to_string()],
            vec![1.5],
        );
        assert_eq!(node.weight_at(0), 1.5);
        assert_eq!(node.weight_at(1), 0.0);
        assert_eq!(node.weight_at(7), 0.0);
    }

    #[test]
    fn test_parameter_sum_empty() {
        assert_eq!(NetworkNode::isolated("a").parameter_sum(), 0.0);
    }

    #[test]
    fn test_network_node_deserializes_with_missing_arrays() {
        let node: NetworkNode = serde_json::from_str(r#"{"name": "a"}"#).unwrap();
        assert_eq!(node.name, "a");
        assert!(node.parameters.is_empty());
        assert!(node.connected_nodes.is_empty());
    }

    #[test]
    fn test_network_node_field_renames() {
        let node = NetworkNode::new("a", vec!["b".to_string()], vec![2.0]);
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json["connectedNodes"][0], "b");
        assert_eq!(json["parameters"][0], 2.0);
    }
}
