pub mod dijkstra;
pub mod floyd_warshall;
mod shortest_path;

pub use dijkstra::RepeatedDijkstra;
pub use floyd_warshall::FloydWarshall;
pub use shortest_path::{PathTable, ShortestPaths};

use crate::graph::Graph;

use std::fmt;
use num_traits::Float;
use serde::{Deserialize, Serialize};


/// All-pairs shortest path capability
/// Implementations must agree on distances for the same graph; they only
/// differ in how paths are recorded (see `PathTable`)
pub trait AllPairsShortestPath {
    fn compute<'g, C: Float>(&self, graph: &'g Graph<C>) -> ShortestPaths<'g, C>;
}


/// Selectable shortest path engine
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Dense dynamic programming with a next-hop table
    #[default]
    FloydWarshall,
    /// Dijkstra from every node with per-source predecessors
    Dijkstra,
}

impl AllPairsShortestPath for Strategy {
    fn compute<'g, C: Float>(&self, graph: &'g Graph<C>) -> ShortestPaths<'g, C> {
        match self {
            Strategy::FloydWarshall => FloydWarshall.compute(graph),
            Strategy::Dijkstra => RepeatedDijkstra.compute(graph),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::FloydWarshall => f.write_str("floyd-warshall"),
            Strategy::Dijkstra => f.write_str("dijkstra"),
        }
    }
}
