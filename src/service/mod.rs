/// Graph service
///
/// The seam the surrounding application calls into: create a graph from a
/// node list, load a stored graph, answer a path query. Assumes its input
/// is already authorized and loaded; all persistence goes through the
/// injected [`DocumentStore`].

use crate::algorithms::{find_shortest_path, path_weight};
use crate::builder;
use crate::codec::{self, CodecError};
use crate::storage::{SharedStore, StorageError};
use crate::types::{Graph, GraphId, NetworkNode};
use std::sync::Arc;
use thiserror::Error;

/// Service errors
#[derive(Error, Debug)]
pub enum ServiceError {
    /// No document stored under the given id
    #[error("graph {0} not found")]
    GraphNotFound(GraphId),

    /// Storage error
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// Stored document could not be decoded
    #[error(transparent)]
    Codec(#[from] CodecError),
}

/// Result of a successful path query
#[derive(Debug, Clone, PartialEq)]
pub struct PathFound {
    /// Node names from source to target, inclusive
    pub path: Vec<String>,

    /// Sum of the weights along the path, aggregated by re-walking the
    /// returned node sequence
    pub total_weight: f64,
}

/// Stored-graph operations over an injected document store
pub struct GraphService {
    store: SharedStore,
}

impl GraphService {
    /// Create a service over a document store
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    /// Build a graph from a node list and persist it
    ///
    /// The id comes from the store's allocator, so it never collides
    /// with graphs already stored there, including across restarts of
    /// the process that owns the service.
    pub async fn create_graph(
        &self,
        nodes: Vec<NetworkNode>,
    ) -> Result<(GraphId, Graph), ServiceError> {
        let graph = builder::build(nodes);
        let id = self.store.allocate_id().await?;

        self.store.put(id, codec::encode(&graph)).await?;

        tracing::debug!(%id, nodes = graph.node_count(), "graph created");
        Ok((id, graph))
    }

    /// Load a stored graph
    ///
    /// When the stored document is legacy-only, the decoded graph carries
    /// a freshly derived flat node list and the upgraded document is
    /// re-persisted fire-and-forget: a persistence failure is logged and
    /// swallowed, and this load still succeeds.
    pub async fn load_graph(&self, id: GraphId) -> Result<Graph, ServiceError> {
        let document = self
            .store
            .get(id)
            .await?
            .ok_or(ServiceError::GraphNotFound(id))?;

        let (graph, migrated) = codec::decode(&document)?;

        if migrated {
            let upgraded = codec::encode(&graph);
            let store = Arc::clone(&self.store);
            tokio::spawn(async move {
                if let Err(err) = store.put(id, upgraded).await {
                    tracing::warn!(%id, %err, "failed to persist migrated graph document");
                }
            });
        }

        Ok(graph)
    }

    /// Answer a minimum-weight path query on a stored graph
    ///
    /// Returns `Ok(None)` when either name is unknown or the nodes are
    /// disconnected; only missing graphs and broken documents are errors.
    pub async fn find_path(
        &self,
        id: GraphId,
        source: &str,
        target: &str,
    ) -> Result<Option<PathFound>, ServiceError> {
        let graph = self.load_graph(id).await?;

        Ok(find_shortest_path(&graph, source, target).map(|path| {
            let total_weight = path_weight(&graph, &path);
            PathFound {
                path: path.into_iter().map(|n| n.name).collect(),
                total_weight,
            }
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn sample_nodes() -> Vec<NetworkNode> {
        vec![
            NetworkNode::new(
                "a",
                vec!["b".to_string(), "c".to_string()],
                vec![2.0, 3.0],
            ),
            NetworkNode::new("b", vec!["c".to_string()], vec![5.0]),
            NetworkNode::isolated("c"),
        ]
    }

    fn service() -> GraphService {
        GraphService::new(Arc::new(MemoryStore::new()))
    }

    #[tokio::test]
    async fn test_create_then_load() {
        let service = service();
        let (id, created) = service.create_graph(sample_nodes()).await.unwrap();

        let loaded = service.load_graph(id).await.unwrap();
        assert_eq!(loaded.node_count(), created.node_count());
        assert_eq!(loaded.network_nodes(), created.network_nodes());
    }

    #[tokio::test]
    async fn test_load_missing_graph() {
        let err = service().load_graph(GraphId(99)).await.unwrap_err();
        assert!(matches!(err, ServiceError::GraphNotFound(GraphId(99))));
    }

    #[tokio::test]
    async fn test_find_path_reports_total_weight() {
        let service = service();
        let (id, _) = service.create_graph(sample_nodes()).await.unwrap();

        let found = service.find_path(id, "a", "c").await.unwrap().unwrap();
        assert_eq!(found.path, vec!["a", "c"]);
        assert_eq!(found.total_weight, 3.0);
    }

    #[tokio::test]
    async fn test_find_path_absent_for_disconnected_nodes() {
        let service = service();
        let (id, _) = service.create_graph(sample_nodes()).await.unwrap();

        assert_eq!(service.find_path(id, "c", "a").await.unwrap(), None);
        assert_eq!(service.find_path(id, "a", "ghost").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_ids_are_unique_per_service() {
        let service = service();
        let (first, _) = service.create_graph(sample_nodes()).await.unwrap();
        let (second, _) = service.create_graph(sample_nodes()).await.unwrap();
        assert_ne!(first, second);
    }
}
