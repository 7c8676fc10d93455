use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use tracing::warn;

use crate::catalog::PlaceId;
use crate::graph::RoadGraph;

/// Distance and back-pointer state produced by one shortest-path run.
///
/// A place absent from `distances` was never reached before termination.
/// The source never has a predecessor entry.
#[derive(Debug, Clone, Default)]
pub struct SearchOutcome {
    pub distances: HashMap<PlaceId, f64>,
    pub predecessors: HashMap<PlaceId, PlaceId>,
}

impl SearchOutcome {
    /// Best-known distance to a place, if it was reached.
    pub fn distance_to(&self, place: PlaceId) -> Option<f64> {
        self.distances.get(&place).copied()
    }
}

/// Run Dijkstra's algorithm from `source` toward `target`.
///
/// Uses a binary min-heap with lazy deletion: superseded entries are left
/// in the heap and skipped when popped. The search exits early once the
/// target is settled; the returned maps cover every place settled or
/// relaxed before that point, not just the target.
pub fn shortest_path(graph: &RoadGraph, source: PlaceId, target: PlaceId) -> SearchOutcome {
    let mut outcome = SearchOutcome::default();
    let mut queue = BinaryHeap::new();

    outcome.distances.insert(source, 0.0);
    queue.push(QueueEntry::new(source, 0.0));

    while let Some(entry) = queue.pop() {
        let best_known = *outcome
            .distances
            .get(&entry.node)
            .unwrap_or(&f64::INFINITY);
        // Skip outdated heap entries.
        if entry.cost.0 > best_known {
            continue;
        }

        if entry.node == target {
            break;
        }

        for edge in graph.neighbours(entry.node) {
            let next = edge.target;
            let next_cost = best_known + edge.miles;
            if next_cost < *outcome.distances.get(&next).unwrap_or(&f64::INFINITY) {
                outcome.distances.insert(next, next_cost);
                outcome.predecessors.insert(next, entry.node);
                queue.push(QueueEntry::new(next, next_cost));
            }
        }
    }

    outcome
}

/// Rebuild the place sequence from `source` to `target` using back-pointers.
///
/// Returns `None` when the target was never reached. A broken predecessor
/// chain is also reported as no path; it cannot occur when the outcome came
/// from [`shortest_path`] over the same graph, but is checked rather than
/// trusted.
pub fn reconstruct_path(
    outcome: &SearchOutcome,
    source: PlaceId,
    target: PlaceId,
) -> Option<Vec<PlaceId>> {
    if source == target {
        return Some(vec![source]);
    }

    if !outcome.predecessors.contains_key(&target) {
        return None;
    }

    let mut path = vec![target];
    let mut current = target;

    while current != source {
        match outcome.predecessors.get(&current) {
            Some(&previous) => {
                path.push(previous);
                current = previous;
            }
            None => {
                warn!(
                    %source,
                    %target,
                    stranded = %current,
                    "predecessor chain broke before reaching the source"
                );
                return None;
            }
        }
    }

    path.reverse();
    Some(path)
}

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq(&other.0)
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct QueueEntry {
    node: PlaceId,
    cost: FloatOrd,
}

impl QueueEntry {
    fn new(node: PlaceId, cost: f64) -> Self {
        Self {
            node,
            cost: FloatOrd(cost),
        }
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by cost.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queue_entry_orders_cheapest_first() {
        let mut heap = BinaryHeap::new();
        heap.push(QueueEntry::new(1, 4.0));
        heap.push(QueueEntry::new(2, 1.5));
        heap.push(QueueEntry::new(3, 2.5));

        assert_eq!(heap.pop().map(|e| e.node), Some(2));
        assert_eq!(heap.pop().map(|e| e.node), Some(3));
        assert_eq!(heap.pop().map(|e| e.node), Some(1));
    }

    #[test]
    fn queue_entry_breaks_cost_ties_on_node_id() {
        let mut heap = BinaryHeap::new();
        heap.push(QueueEntry::new(7, 2.0));
        heap.push(QueueEntry::new(3, 2.0));

        assert_eq!(heap.pop().map(|e| e.node), Some(3));
    }

    #[test]
    fn broken_chain_is_reported_as_no_path() {
        let mut outcome = SearchOutcome::default();
        // Target points at a node that itself has no predecessor and is
        // not the source.
        outcome.predecessors.insert(5, 4);

        assert_eq!(reconstruct_path(&outcome, 1, 5), None);
    }
}
