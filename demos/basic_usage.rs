/// Basic usage demo for netgraph
///
/// This demo shows:
/// 1. Building a graph from a flat node list
/// 2. Persisting it through the in-memory document store
/// 3. Loading a legacy-only document (lazy migration)
/// 4. Answering shortest-path queries

use netgraph::{DocumentStore, GraphId, GraphService, MemoryStore, NetworkNode};
use serde_json::json;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let store = Arc::new(MemoryStore::new());
    let service = GraphService::new(store.clone());

    // Example 1: build and persist a graph
    println!("1. Creating a graph");
    println!("{}", "-".repeat(50));

    let nodes = vec![
        NetworkNode::new(
            "amsterdam",
            vec!["berlin".to_string(), "paris".to_string()],
            vec![2.0, 3.0],
        ),
        NetworkNode::new("berlin", vec!["paris".to_string()], vec![5.0]),
        NetworkNode::isolated("paris"),
    ];

    let (id, graph) = service.create_graph(nodes).await?;
    println!(
        "Created graph {} with {} nodes and {} edges\n",
        id,
        graph.node_count(),
        graph.edge_count()
    );

    // Example 2: query the shortest path
    println!("2. Path query");
    println!("{}", "-".repeat(50));

    match service.find_path(id, "amsterdam", "paris").await? {
        Some(found) => println!(
            "amsterdam -> paris: {:?} (total weight {})\n",
            found.path, found.total_weight
        ),
        None => println!("no path found\n"),
    }

    // Example 3: load a legacy-only document
    println!("3. Legacy document migration");
    println!("{}", "-".repeat(50));

    let legacy_id = GraphId(100);
    store
        .put(
            legacy_id,
            json!({
                "nodes": [
                    {"name": "old_a", "value": 1.0, "edges": [{"to": "old_b", "weight": 1.0}]},
                    {"name": "old_b", "value": 0.0, "edges": []}
                ]
            }),
        )
        .await?;

    let migrated = service.load_graph(legacy_id).await?;
    println!(
        "Loaded legacy graph; derived flat list has {} entries",
        migrated.network_nodes().map(|l| l.len()).unwrap_or(0)
    );

    Ok(())
}
