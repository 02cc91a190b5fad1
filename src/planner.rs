use crate::errors::{Result, RouteError};
use crate::graph::{Graph, NodeId};
use crate::graph_algos::{AllPairsShortestPath, Strategy};
use crate::tour::{self, Route};

use num_traits::Float;
use serde::{Deserialize, Serialize};
use log::{debug, info, warn};


/// What to do with a tour hop that has no path
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum UnreachablePolicy {
    /// Keep going: the hop adds 0 to the distance and nothing to the full path
    #[default]
    Skip,
    /// Reject the whole route
    Fail,
}


#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannerConfig {
    pub strategy: Strategy,
    pub unreachable: UnreachablePolicy,
}


/// Plans delivery routes: shortest path tables, nearest neighbor tour, path expansion
/// Every call works on its own tables, nothing is kept between calls
#[derive(Clone, Debug, Default)]
pub struct RoutePlanner {
    config: PlannerConfig,
}

impl RoutePlanner {

    pub fn new(config: PlannerConfig) -> Self {
        Self { config }
    }

    pub fn with_strategy(strategy: Strategy) -> Self {
        Self::new(PlannerConfig { strategy, ..PlannerConfig::default() })
    }

    /// Plan a closed route from `start` through every stop
    /// Fails with `UnknownNode` before any computation if the start or a stop is not in the graph
    pub fn plan<C: Float>(&self, graph: &Graph<C>, start: &NodeId, stops: &[NodeId]) -> Result<Route<C>> {
        for node in std::iter::once(start).chain(stops) {
            if !graph.contains(node.as_str()) {
                return Err(RouteError::UnknownNode(node.clone()));
            }
        }

        info!(
            "planning route from {start} through {} stops over {} nodes using {}",
            stops.len(),
            graph.len(),
            self.config.strategy
        );

        let table = self.config.strategy.compute(graph);
        let tour = tour::nearest_neighbor(&table, start, stops)?;
        debug!("tour: {}", join(&tour));

        let route = tour::assemble(&table, tour)?;

        if let Some(hop) = route.unreachable_hops.first() {
            match self.config.unreachable {
                UnreachablePolicy::Fail => {
                    return Err(RouteError::UnreachableHop { from: hop.from.clone(), to: hop.to.clone() });
                }
                UnreachablePolicy::Skip => {
                    for hop in &route.unreachable_hops {
                        warn!("no path for {hop}, hop skipped");
                    }
                }
            }
        }

        debug!("full path: {}", join(&route.full_path));
        Ok(route)
    }
}


/// Plan a route with the given engine and the default unreachable policy
pub fn plan_route<C: Float>(graph: &Graph<C>, start: &NodeId, stops: &[NodeId], strategy: Strategy) -> Result<Route<C>> {
    RoutePlanner::with_strategy(strategy).plan(graph, start, stops)
}


fn join(nodes: &[NodeId]) -> String {
    nodes.iter().map(NodeId::as_str).collect::<Vec<_>>().join(" -> ")
}
