use serde::{Deserialize, Serialize};

use crate::room::RoomId;

/// A static room-adjacency graph.
///
/// Nodes and neighbor lists keep authored order; pathfinding seeds its queue
/// by iterating them, so enumeration order must be stable for next-hop
/// results to be deterministic. Two instances exist per world, one for each
/// face of the gallery.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomGraph {
    nodes: Vec<(RoomId, Vec<RoomId>)>,
}

impl RoomGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node with its neighbor list, builder-style. Re-adding a node
    /// replaces its neighbors.
    pub fn with_node<I>(mut self, node: RoomId, neighbors: I) -> Self
    where
        I: IntoIterator<Item = RoomId>,
    {
        let neighbors: Vec<RoomId> = neighbors.into_iter().collect();
        if let Some(entry) = self.nodes.iter_mut().find(|(n, _)| *n == node) {
            entry.1 = neighbors;
        } else {
            self.nodes.push((node, neighbors));
        }
        self
    }

    /// The neighbors of a node, if it is in the graph.
    pub fn neighbors(&self, node: RoomId) -> Option<&[RoomId]> {
        self.nodes
            .iter()
            .find(|(n, _)| *n == node)
            .map(|(_, adj)| adj.as_slice())
    }

    /// Whether the graph contains a node.
    pub fn contains(&self, node: RoomId) -> bool {
        self.nodes.iter().any(|(n, _)| *n == node)
    }

    /// Iterate the node ids in authored order.
    pub fn nodes(&self) -> impl Iterator<Item = RoomId> + '_ {
        self.nodes.iter().map(|(n, _)| *n)
    }

    /// The number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
