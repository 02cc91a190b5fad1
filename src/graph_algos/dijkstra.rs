use crate::graph::Graph;
use super::AllPairsShortestPath;
use super::shortest_path::{PathTable, ShortestPaths};

use std::{collections::BinaryHeap, cmp::Ordering};
use num_traits::Float;
use log::{debug, trace};


/// All-pairs shortest paths by running Dijkstra's Algorithm from every node
/// https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm
/// Results are aggregated into one distance table and one predecessor table per source
#[derive(Clone, Copy, Debug, Default)]
pub struct RepeatedDijkstra;

impl AllPairsShortestPath for RepeatedDijkstra {

    fn compute<'g, C: Float>(&self, graph: &'g Graph<C>) -> ShortestPaths<'g, C> {
        let n = graph.len();
        debug!("dijkstra from each of {n} nodes");

        let mut dist = Vec::with_capacity(n * n);
        let mut pred = Vec::with_capacity(n * n);

        for source in 0..n {
            let (source_dist, source_pred) = single_source(graph, source);
            dist.extend(source_dist);
            pred.extend(source_pred);
        }

        ShortestPaths::new(graph, dist, PathTable::Predecessor(pred))
    }
}


/// Traverses the graph from `source` using Dijkstra's algorithm
/// Returns the distance to every node (+infinity when unreachable) and the
/// predecessor of every node on its shortest path from `source`
pub fn single_source<C: Float>(graph: &Graph<C>, source: usize) -> (Vec<C>, Vec<Option<usize>>) {
    let n = graph.len();

    let mut dist = vec![C::infinity(); n];
    let mut pred: Vec<Option<usize>> = vec![None; n];
    // settled nodes - cost is known, no longer need to visit
    let mut settled = vec![false; n];
    let mut settled_count = 0;

    // Nodes to visit - binary heap sorts Biggest to Smallest, QueueEntry reverses it
    // Stale entries stay in the heap and are skipped when popped
    let mut to_visit: BinaryHeap<QueueEntry<C>> = BinaryHeap::new();

    dist[source] = C::zero();
    to_visit.push(QueueEntry { index: source, cost: C::zero() });

    // Only finite costs are ever queued, so an empty heap means every
    // remaining node is unreachable
    while let Some(QueueEntry { index, cost }) = to_visit.pop() {

        // If cost from the heap is higher than the best cost, skip it
        // This implies we've already found a better path to this node
        if settled[index] || cost > dist[index] {
            continue;
        }

        settled[index] = true;
        settled_count += 1;
        if settled_count == n {
            break;
        }

        for (neighbor, edge_cost) in graph.neighbor_indices(index) {
            if settled[neighbor] {
                continue;
            }

            // new cost to reach this node = edge cost + node cost
            let new_cost = cost + edge_cost;

            if new_cost < dist[neighbor] {
                dist[neighbor] = new_cost;
                pred[neighbor] = Some(index);
                to_visit.push(QueueEntry { index: neighbor, cost: new_cost });
            }
        }
    }

    trace!("source {source}: settled {settled_count} of {n} nodes");
    (dist, pred)
}


/// Heap entry
/// - for ordering we only need cost and a way to identify the node
/// - equal costs fall back to the lower node index so the settle order is deterministic
#[derive(Debug)]
struct QueueEntry<C> {
    index: usize,
    cost: C,
}

impl<C: Float> Ord for QueueEntry<C> {
    fn cmp(&self, other: &Self) -> Ordering {
        // weights are finite and nonnegative, so costs are never NaN
        other.cost
            .partial_cmp(&self.cost)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.index.cmp(&self.index))
    }
}
impl<C: Float> PartialOrd for QueueEntry<C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl<C: Float> PartialEq for QueueEntry<C> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}
impl<C: Float> Eq for QueueEntry<C> {}
