/// Core data types for the graph subsystem
///
/// - `NetworkNode`: flat wire/input shape of one vertex
/// - `GraphNode` / `GraphEdge`: vertices and arcs of a built graph
/// - `Graph`: adjacency-list representation plus the retained flat list
/// - `GraphId`: key of a stored graph document

pub mod edge;
pub mod graph;
pub mod graphid;
pub mod node;

pub use edge::GraphEdge;
pub use graph::Graph;
pub use graphid::GraphId;
pub use node::{GraphNode, NetworkNode};
