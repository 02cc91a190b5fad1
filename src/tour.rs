use crate::collections::FxIndexSet;
use crate::errors::{Result, RouteError};
use crate::graph::NodeId;
use crate::graph_algos::ShortestPaths;

use std::fmt;
use num_traits::Float;
use serde::Serialize;
use log::debug;


/// Consecutive tour pair
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Hop {
    pub from: NodeId,
    pub to: NodeId,
}

impl fmt::Display for Hop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}


/// Computed delivery route
/// - tour: start, every stop once, start again
/// - full_path: the tour with every hop expanded into its shortest path
/// - total_distance: sum of the shortest distances of the tour hops, unreachable hops count 0
/// - unreachable_hops: tour hops with no path, they add nothing to full_path or total_distance
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Route<C = f64> {
    pub tour: Vec<NodeId>,
    pub full_path: Vec<NodeId>,
    pub total_distance: C,
    pub unreachable_hops: Vec<Hop>,
}


/// Nearest neighbor tour over the distance table
/// From the start, repeatedly move to the closest stop not yet visited, then return to the start
/// Candidates are scanned in the order given and the first minimum wins, so the
/// result only depends on the inputs. Unreachable stops are still picked once
/// nothing closer is left.
/// Duplicate stops and stops equal to the start are visited once
pub fn nearest_neighbor<C: Float>(table: &ShortestPaths<'_, C>, start: &NodeId, stops: &[NodeId]) -> Result<Vec<NodeId>> {
    let start_index = index_of(table, start)?;
    let stop_indices = stops
        .iter()
        .map(|stop| index_of(table, stop))
        .collect::<Result<Vec<_>>>()?;

    nearest_neighbor_indices(table, start_index, &stop_indices)
        .into_iter()
        .map(|i| node_at(table, i))
        .collect()
}


/// Expand a tour into a `Route`
/// Every hop with a path contributes all of its nodes but the last, the final
/// tour node is appended once at the end
pub fn assemble<C: Float>(table: &ShortestPaths<'_, C>, tour: Vec<NodeId>) -> Result<Route<C>> {
    let indices = tour
        .iter()
        .map(|node| index_of(table, node))
        .collect::<Result<Vec<_>>>()?;

    let mut full_path = Vec::new();
    let mut total_distance = C::zero();
    let mut unreachable_hops = Vec::new();

    for (hop, nodes) in indices.windows(2).zip(tour.windows(2)) {
        let (from, to) = (hop[0], hop[1]);

        let distance = table.distance_by_index(from, to);
        if distance.is_finite() {
            total_distance = total_distance + distance;
        }

        match table.path_by_index(from, to) {
            Some(segment) => {
                for &i in &segment[..segment.len().saturating_sub(1)] {
                    full_path.push(node_at(table, i)?);
                }
            }
            None => {
                debug!("no path for hop {} -> {}", nodes[0], nodes[1]);
                unreachable_hops.push(Hop { from: nodes[0].clone(), to: nodes[1].clone() });
            }
        }
    }

    if let Some(last) = tour.last() {
        full_path.push(last.clone());
    }

    Ok(Route { tour, full_path, total_distance, unreachable_hops })
}


fn nearest_neighbor_indices<C: Float>(table: &ShortestPaths<'_, C>, start: usize, stops: &[usize]) -> Vec<usize> {
    // unvisited stops, scoped to this call; insertion order drives tie-breaking
    let mut unvisited: FxIndexSet<usize> = stops.iter().copied().filter(|&s| s != start).collect();

    let mut tour = Vec::with_capacity(unvisited.len() + 2);
    tour.push(start);
    let mut current = start;

    while !unvisited.is_empty() {
        let mut nearest: Option<(usize, C)> = None; // (position in unvisited, distance)

        for (position, &candidate) in unvisited.iter().enumerate() {
            let distance = table.distance_by_index(current, candidate);
            match nearest {
                Some((_, best)) if distance >= best => {}
                _ => nearest = Some((position, distance)),
            }
        }

        let Some(next) = nearest.and_then(|(position, _)| unvisited.shift_remove_index(position)) else {
            break;
        };
        tour.push(next);
        current = next;
    }

    // close the loop
    tour.push(start);
    tour
}


fn index_of<C: Float>(table: &ShortestPaths<'_, C>, node: &NodeId) -> Result<usize> {
    table
        .graph()
        .index_of(node.as_str())
        .ok_or_else(|| RouteError::UnknownNode(node.clone()))
}

fn node_at<C: Float>(table: &ShortestPaths<'_, C>, index: usize) -> Result<NodeId> {
    table
        .graph()
        .node(index)
        .cloned()
        .ok_or_else(|| RouteError::UnknownNode(NodeId::new(index.to_string())))
}
