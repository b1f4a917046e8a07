/// netgraph
///
/// Stored weighted directed graphs with backward-compatible JSON
/// persistence and shortest-path queries.
///
/// # Architecture
///
/// ```text
/// ┌──────────────────────────────────────────────────┐
/// │                 netgraph core                    │
/// ├──────────────────────────────────────────────────┤
/// │  ┌────────────────────────────────┐              │
/// │  │   Graph Builder                │              │
/// │  └────────────┬───────────────────┘              │
/// │               ↓                                   │
/// │  ┌────────────────────────────────┐              │
/// │  │   Dual-Schema Codec (JSON)     │              │
/// │  └────────────┬───────────────────┘              │
/// │               ↓                                   │
/// │  ┌────────────────────────────────┐              │
/// │  │   Document Store (RocksDB)     │              │
/// │  └────────────┬───────────────────┘              │
/// │               ↓                                   │
/// │  ┌────────────────────────────────┐              │
/// │  │   Path Finder (Dijkstra)       │              │
/// │  └────────────────────────────────┘              │
/// └──────────────────────────────────────────────────┘
/// ```
///
/// # Modules
///
/// - `types`: Core data types (NetworkNode, GraphNode, GraphEdge, Graph, GraphId)
/// - `builder`: Graph construction from a flat node list
/// - `codec`: Dual-schema JSON document codec with lazy migration
/// - `algorithms`: Path search (Dijkstra)
/// - `storage`: Document store abstraction and implementations
/// - `service`: Create / load / path-query operations over a store

pub mod algorithms;
pub mod builder;
pub mod codec;
pub mod service;
pub mod storage;
pub mod types;

// Re-export commonly used types
pub use types::{Graph, GraphEdge, GraphId, GraphNode, NetworkNode};

// Re-export builder entry points
pub use builder::{build, build_with_policy, BuildError, DanglingEdgePolicy};

// Re-export codec entry points
pub use codec::{decode, encode, CodecError, GraphDocument};

// Re-export storage types
pub use storage::{DocumentStore, MemoryStore, RocksDbStore, SharedStore, StorageError, StorageResult};

// Re-export algorithm entry points
pub use algorithms::{find_shortest_path, path_weight};

// Re-export service types
pub use service::{GraphService, PathFound, ServiceError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
