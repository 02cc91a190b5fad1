use crate::graph::Graph;
use super::AllPairsShortestPath;
use super::shortest_path::{PathTable, ShortestPaths};

use num_traits::Float;
use log::debug;


/// Floyd-Warshall all-pairs shortest paths
/// https://en.wikipedia.org/wiki/Floyd%E2%80%93Warshall_algorithm
/// Dense dynamic programming over every intermediate node, O(n^3)
/// Paths are recovered from a next-hop table
#[derive(Clone, Copy, Debug, Default)]
pub struct FloydWarshall;

impl AllPairsShortestPath for FloydWarshall {

    fn compute<'g, C: Float>(&self, graph: &'g Graph<C>) -> ShortestPaths<'g, C> {
        let n = graph.len();
        debug!("floyd-warshall over {n} nodes");

        // dist[i][j] = edge weight if adjacent, 0 on the diagonal, +infinity otherwise
        // next[i][j] = j if adjacent
        let mut dist = vec![C::infinity(); n * n];
        let mut next: Vec<Option<usize>> = vec![None; n * n];

        for i in 0..n {
            for (j, weight) in graph.neighbor_indices(i) {
                if i != j {
                    dist[i * n + j] = weight;
                    next[i * n + j] = Some(j);
                }
            }
            dist[i * n + i] = C::zero();
        }

        for k in 0..n {
            for i in 0..n {
                let via_k = dist[i * n + k];

                // nothing reaches k from i, no pair through k can improve
                if via_k.is_infinite() {
                    continue;
                }

                for j in 0..n {
                    let candidate = via_k + dist[k * n + j];
                    if candidate < dist[i * n + j] {
                        dist[i * n + j] = candidate;
                        next[i * n + j] = next[i * n + k];
                    }
                }
            }
        }

        ShortestPaths::new(graph, dist, PathTable::NextHop(next))
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Graph {
        let mut graph = Graph::new();
        graph.add_edge("A", "B", 1.0).unwrap();
        graph.add_edge("B", "C", 1.0).unwrap();
        graph.add_edge("A", "C", 5.0).unwrap();
        graph
    }

    #[test]
    fn test_floyd_warshall_relaxes_through_intermediate() {
        let graph = triangle();
        let table = FloydWarshall.compute(&graph);

        assert_eq!(table.distance("A", "B"), Some(1.0));
        assert_eq!(table.distance("B", "C"), Some(1.0));
        assert_eq!(table.distance("A", "C"), Some(2.0)); // via B
        assert_eq!(table.distance("C", "A"), Some(2.0));
        assert_eq!(table.distance("A", "A"), Some(0.0));
    }

    #[test]
    fn test_floyd_warshall_next_hop_path() {
        let graph = triangle();
        let table = FloydWarshall.compute(&graph);

        let path: Vec<String> = table.path("A", "C").unwrap().iter().map(|n| n.to_string()).collect();
        assert_eq!(path, vec!["A", "B", "C"]);
        assert_eq!(table.path("C", "C").unwrap().len(), 1);
    }

    #[test]
    fn test_floyd_warshall_disconnected() {
        let mut graph = Graph::new();
        graph.add_edge("A", "B", 1.0).unwrap();
        graph.add_edge("C", "D", 1.0).unwrap();

        let table = FloydWarshall.compute(&graph);

        assert_eq!(table.distance("A", "D"), Some(f64::INFINITY));
        assert_eq!(table.path("A", "D"), None);
        assert!(matches!(table.path_table(), PathTable::NextHop(_)));
    }

    #[test]
    fn test_floyd_warshall_self_loop_keeps_zero_diagonal() {
        let mut graph = Graph::new();
        graph.add_edge("A", "A", 3.0).unwrap();
        graph.add_edge("A", "B", 2.0).unwrap();

        let table = FloydWarshall.compute(&graph);

        assert_eq!(table.distance("A", "A"), Some(0.0));
        assert_eq!(table.distance("B", "A"), Some(2.0));
    }

    #[test]
    fn test_floyd_warshall_empty_graph() {
        let graph: Graph = Graph::new();
        let table = FloydWarshall.compute(&graph);
        assert!(table.is_empty());
    }
}
