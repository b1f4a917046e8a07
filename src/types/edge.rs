use serde::{Deserialize, Serialize};

/// Directed, weighted arc of a built graph
///
/// Edges are owned by the graph's adjacency map. `target` is a lookup key
/// into the graph's node set, never an owning back-reference, so cyclic
/// graphs stay representable without reference cycles.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GraphEdge {
    /// Weight of the arc
    pub weight: f64,

    /// Name of the node this arc points at
    pub target: String,
}

impl GraphEdge {
    /// Create a new edge
    pub fn new(target: impl Into<String>, weight: f64) -> Self {
        Self {
            weight,
            target: target.into(),
        }
    }

    /// Check whether this edge points at the given node name
    pub fn points_at(&self, name: &str) -> bool {
        self.target == name
    }
}
