use crate::collections::{FxIndexMap, FxIndexSet};
use crate::errors::{Result, RouteError};

use std::{borrow::Borrow, fmt};
use num_traits::Float;
use serde::{Deserialize, Serialize};


/// City identifier
/// Identifiers are trimmed on construction so `" 7"` and `"7"` name the same city
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String")]
pub struct NodeId(String);

impl NodeId {
    pub fn new(id: impl AsRef<str>) -> Self {
        Self(id.as_ref().trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for NodeId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for NodeId {
    fn from(id: String) -> Self {
        Self::new(id)
    }
}

impl From<&NodeId> for NodeId {
    fn from(id: &NodeId) -> Self {
        id.clone()
    }
}

impl Borrow<str> for NodeId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}


/// Undirected weighted graph
/// Nodes are numbered in first-insertion order, the shortest path tables use the same numbering
/// C: edge weight, finite and nonnegative
#[derive(Clone, Debug)]
pub struct Graph<C = f64> {
    nodes: FxIndexSet<NodeId>,
    adjacency: Vec<FxIndexMap<usize, C>>, // adjacency[i] maps neighbor index -> weight
}

impl<C> Default for Graph<C> {
    fn default() -> Self {
        Self {
            nodes: FxIndexSet::default(),
            adjacency: Vec::new(),
        }
    }
}

impl<C: Float> Graph<C> {

    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node without edges, returns its index
    /// Adding an existing node is a no-op
    pub fn add_node(&mut self, node: impl Into<NodeId>) -> usize {
        let (index, inserted) = self.nodes.insert_full(node.into());
        if inserted {
            self.adjacency.push(FxIndexMap::default());
        }
        index
    }

    /// Add an undirected edge, both directions get the same weight
    /// Re-adding an edge overwrites the previous weight
    pub fn add_edge(&mut self, a: impl Into<NodeId>, b: impl Into<NodeId>, weight: C) -> Result<()> {
        let a = a.into();
        let b = b.into();

        if !weight.is_finite() {
            return Err(RouteError::InvalidWeight { from: a, to: b, reason: "weight must be finite".into() });
        }
        if weight < C::zero() {
            return Err(RouteError::InvalidWeight { from: a, to: b, reason: "weight must be nonnegative".into() });
        }

        let i = self.add_node(a);
        let j = self.add_node(b);
        self.adjacency[i].insert(j, weight);
        self.adjacency[j].insert(i, weight);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of undirected edges, a self-loop counts once
    pub fn edge_count(&self) -> usize {
        let mut loops = 0;
        let mut ends = 0;
        for (i, neighbors) in self.adjacency.iter().enumerate() {
            for &j in neighbors.keys() {
                if i == j { loops += 1; } else { ends += 1; }
            }
        }
        loops + ends / 2
    }

    pub fn contains(&self, node: &str) -> bool {
        self.nodes.contains(node)
    }

    pub fn index_of(&self, node: &str) -> Option<usize> {
        self.nodes.get_index_of(node)
    }

    pub fn node(&self, index: usize) -> Option<&NodeId> {
        self.nodes.get_index(index)
    }

    /// Nodes in index order
    pub fn nodes(&self) -> impl Iterator<Item = &NodeId> {
        self.nodes.iter()
    }

    /// Neighbors of a node with edge weights, empty for unknown nodes
    pub fn neighbors<'a>(&'a self, node: &str) -> impl Iterator<Item = (&'a NodeId, C)> + use<'a, C> {
        self.index_of(node)
            .into_iter()
            .flat_map(move |i| self.neighbor_indices(i))
            .map(move |(j, w)| (&self.nodes[j], w))
    }

    /// Edge weight between two nodes, if adjacent
    pub fn weight(&self, a: &str, b: &str) -> Option<C> {
        let i = self.index_of(a)?;
        let j = self.index_of(b)?;
        self.adjacency[i].get(&j).copied()
    }

    pub(crate) fn neighbor_indices(&self, index: usize) -> impl Iterator<Item = (usize, C)> + '_ {
        self.adjacency[index].iter().map(|(&j, &w)| (j, w))
    }
}
