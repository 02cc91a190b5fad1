use crate::graph::{Graph, NodeId};

use num_traits::Float;


/// Structure used to rebuild a shortest path from the all-pairs tables
/// Both tables are dense n x n, row-major, indexed by graph node index
#[derive(Clone, Debug, PartialEq)]
pub enum PathTable {
    /// next[i][j] - first hop from i toward j
    NextHop(Vec<Option<usize>>),
    /// pred[s][v] - node before v on the shortest path from source s
    Predecessor(Vec<Option<usize>>),
}


/// All-pairs shortest path result
/// Distances are +infinity for unreachable pairs and 0 on the diagonal
#[derive(Clone, Debug)]
pub struct ShortestPaths<'g, C> {
    graph: &'g Graph<C>,
    dist: Vec<C>,
    paths: PathTable,
}

impl<'g, C: Float> ShortestPaths<'g, C> {

    pub(crate) fn new(graph: &'g Graph<C>, dist: Vec<C>, paths: PathTable) -> Self {
        debug_assert_eq!(dist.len(), graph.len() * graph.len());
        Self { graph, dist, paths }
    }

    pub fn graph(&self) -> &'g Graph<C> {
        self.graph
    }

    pub fn len(&self) -> usize {
        self.graph.len()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.is_empty()
    }

    pub fn path_table(&self) -> &PathTable {
        &self.paths
    }

    /// Shortest distance between two nodes
    /// None if either node is not in the graph, +infinity if there is no path
    pub fn distance(&self, from: &str, to: &str) -> Option<C> {
        let i = self.graph.index_of(from)?;
        let j = self.graph.index_of(to)?;
        Some(self.distance_by_index(i, j))
    }

    /// Ordered nodes of a shortest path, from first to last
    /// None if either node is unknown or no path exists
    pub fn path(&self, from: &str, to: &str) -> Option<Vec<NodeId>> {
        let i = self.graph.index_of(from)?;
        let j = self.graph.index_of(to)?;
        self.path_by_index(i, j)?
            .into_iter()
            .map(|k| self.graph.node(k).cloned())
            .collect()
    }

    pub(crate) fn distance_by_index(&self, i: usize, j: usize) -> C {
        self.dist[i * self.len() + j]
    }

    pub(crate) fn path_by_index(&self, i: usize, j: usize) -> Option<Vec<usize>> {
        match &self.paths {
            PathTable::NextHop(next) => next_hop_path(next, self.len(), i, j),
            PathTable::Predecessor(pred) => predecessor_path(pred, self.len(), i, j),
        }
    }
}


/// Follow next hops from `from` until `to` is reached
/// Returns [from] for a zero-length path
/// The walk is bounded by the node count so a corrupted table cannot loop forever
fn next_hop_path(next: &[Option<usize>], n: usize, from: usize, to: usize) -> Option<Vec<usize>> {
    if from != to && next[from * n + to].is_none() {
        return None;
    }

    let mut path = vec![from];
    let mut current = from;

    while current != to {
        current = next[current * n + to]?;
        path.push(current);
        if path.len() > n {
            return None;
        }
    }

    Some(path)
}


/// Trace back from `to` through the predecessors recorded for source `from`
fn predecessor_path(pred: &[Option<usize>], n: usize, from: usize, to: usize) -> Option<Vec<usize>> {
    let row = &pred[from * n..(from + 1) * n];

    if from != to && row[to].is_none() {
        return None;
    }

    let mut path = vec![to];
    let mut current = to;

    // Trace back from goal to start
    while current != from {
        current = row[current]?;
        path.push(current);
        if path.len() > n {
            return None;
        }
    }

    // The path is in reverse order, so reverse it
    path.reverse();
    Some(path)
}
