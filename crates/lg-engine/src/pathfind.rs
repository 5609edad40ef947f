//! Single-source shortest path over a room-adjacency graph.
//!
//! Dijkstra with the generic relaxation loop, even though every edge weighs
//! one, so weighted maps stay a drop-in change. The caller gets back the
//! first room to step into, not the whole path: pursuit only ever moves one
//! hop per turn.

use std::collections::HashMap;

use thiserror::Error;

use lg_core::{RoomGraph, RoomId};

use crate::queue::{PriorityQueue, QueueError};

const UNREACHED: u32 = u32::MAX;

/// The first hop toward a target, and the full distance to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathStep {
    /// The room to step into next.
    pub next_hop: RoomId,
    /// Total hops from source to target.
    pub distance: u32,
}

/// Pathfinding failures. All of them mean a malformed graph or a bad call;
/// an authored map never produces them during play.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    /// No path connects the two rooms.
    #[error("no path from {from} to {to}")]
    Unreachable {
        /// The starting room.
        from: RoomId,
        /// The room that could not be reached.
        to: RoomId,
    },
    /// A room involved in the search is not a node of the graph.
    #[error("{0} is not a node of the graph")]
    MissingNode(RoomId),
    /// Queue misuse while relaxing.
    #[error(transparent)]
    Queue(#[from] QueueError),
}

/// Compute the next hop from `source` toward `target` along a shortest
/// path, plus the total distance.
///
/// `source == target` returns distance 0 with the target itself as the hop;
/// callers must treat that as "already arrived" and not move.
pub fn shortest_next_hop(
    source: RoomId,
    target: RoomId,
    graph: &RoomGraph,
) -> Result<PathStep, PathError> {
    if !graph.contains(source) {
        return Err(PathError::MissingNode(source));
    }
    if !graph.contains(target) {
        return Err(PathError::MissingNode(target));
    }
    if source == target {
        return Ok(PathStep {
            next_hop: target,
            distance: 0,
        });
    }

    let mut distance: HashMap<RoomId, u32> = HashMap::new();
    let mut previous: HashMap<RoomId, Option<RoomId>> = HashMap::new();
    let mut queue = PriorityQueue::new();
    for node in graph.nodes() {
        let d = if node == source { 0 } else { UNREACHED };
        distance.insert(node, d);
        previous.insert(node, None);
        queue.insert(node, d);
    }

    while !queue.is_empty() {
        let current = queue.pop_min()?;
        if current == target {
            break;
        }
        let reached = distance[&current];
        if reached == UNREACHED {
            // Only disconnected nodes remain.
            break;
        }
        let neighbors = graph
            .neighbors(current)
            .ok_or(PathError::MissingNode(current))?;
        for &neighbor in neighbors {
            let known = *distance
                .get(&neighbor)
                .ok_or(PathError::MissingNode(neighbor))?;
            let candidate = reached + 1;
            if candidate < known {
                distance.insert(neighbor, candidate);
                previous.insert(neighbor, Some(current));
                queue.decrease_priority(&neighbor, candidate)?;
            }
        }
    }

    let total = distance[&target];
    if total == UNREACHED {
        return Err(PathError::Unreachable {
            from: source,
            to: target,
        });
    }

    // Walk predecessors back from the target until the node whose
    // predecessor is the source; that node is the first hop.
    let mut hop = target;
    let mut back = previous[&target];
    while let Some(p) = back {
        if p == source {
            break;
        }
        hop = p;
        back = previous[&p];
    }

    Ok(PathStep {
        next_hop: hop,
        distance: total,
    })
}
