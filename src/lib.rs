//! Delivery route planning over weighted city graphs
//!
//! Builds an all-pairs shortest path table (Floyd-Warshall or repeated
//! Dijkstra), orders the delivery points with the nearest neighbor
//! heuristic and expands every hop of the tour into its shortest path.

mod collections;
pub mod errors;
pub mod graph;
pub mod graph_algos;
pub mod io;
pub mod planner;
pub mod report;
pub mod tour;

pub use errors::{Result, RouteError};
pub use graph::{Graph, NodeId};
pub use graph_algos::{AllPairsShortestPath, ShortestPaths, Strategy};
pub use planner::{plan_route, PlannerConfig, RoutePlanner, UnreachablePolicy};
pub use tour::{Hop, Route};
