/// Shortest path search over a built graph
///
/// Binary-heap Dijkstra over the adjacency map. Weights are assumed
/// non-negative; the parameters graphs are built from carry connection
/// weights, and negative ones are outside this algorithm's contract.

use crate::types::{Graph, GraphNode};
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

/// Heap entry ordered as a min-heap by accumulated cost
#[derive(Debug, Clone, PartialEq)]
struct QueueEntry<'a> {
    node: &'a str,
    cost: f64,
}

impl Eq for QueueEntry<'_> {}

impl Ord for QueueEntry<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap; name as tie-break keeps the
        // ordering total
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for QueueEntry<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Find a minimum-total-weight path between two named nodes
///
/// Returns the node sequence from `source` to `target` inclusive, or
/// `None` when either name is absent from the graph or the nodes are
/// disconnected. A query from a node to itself yields the single-node
/// path.
pub fn find_shortest_path(graph: &Graph, source: &str, target: &str) -> Option<Vec<GraphNode>> {
    if !graph.contains(source) || !graph.contains(target) {
        return None;
    }

    let mut heap = BinaryHeap::new();
    let mut distances: HashMap<&str, f64> = HashMap::new();
    let mut predecessors: HashMap<&str, &str> = HashMap::new();
    let mut visited: HashSet<&str> = HashSet::new();

    heap.push(QueueEntry {
        node: source,
        cost: 0.0,
    });
    distances.insert(source, 0.0);

    while let Some(QueueEntry { node, cost }) = heap.pop() {
        if !visited.insert(node) {
            continue;
        }

        if node == target {
            return Some(reconstruct_path(graph, source, target, &predecessors));
        }

        for edge in graph.edges(node) {
            let neighbor = edge.target.as_str();
            if visited.contains(neighbor) {
                continue;
            }

            let new_cost = cost + edge.weight;
            let is_better = distances
                .get(neighbor)
                .map(|&current| new_cost < current)
                .unwrap_or(true);

            if is_better {
                distances.insert(neighbor, new_cost);
                predecessors.insert(neighbor, node);
                heap.push(QueueEntry {
                    node: neighbor,
                    cost: new_cost,
                });
            }
        }
    }

    None
}

/// Walk the predecessors map backwards from target to source
fn reconstruct_path<'a>(
    graph: &Graph,
    source: &'a str,
    target: &'a str,
    predecessors: &HashMap<&'a str, &'a str>,
) -> Vec<GraphNode> {
    let mut names = Vec::new();
    let mut current = target;

    while current != source {
        names.push(current);
        match predecessors.get(current) {
            Some(&prev) => current = prev,
            None => break,
        }
    }
    names.push(source);
    names.reverse();

    names
        .into_iter()
        .filter_map(|name| graph.node(name).cloned())
        .collect()
}

/// Total weight of a node sequence, aggregated after the search
///
/// For each consecutive pair, the first outgoing edge of the earlier node
/// that points at the later one contributes its weight. Pairs without a
/// connecting edge contribute zero; a well-formed search result never
/// produces such a pair.
pub fn path_weight(graph: &Graph, path: &[GraphNode]) -> f64 {
    path.windows(2)
        .map(|pair| {
            graph
                .edges(&pair[0].name)
                .iter()
                .find(|e| e.points_at(&pair[1].name))
                .map(|e| e.weight)
                .unwrap_or(0.0)
        })
        .sum()
}
