use std::collections::HashMap;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::catalog::PlaceId;
use crate::error::{Error, Result};

/// Directed entry within the road graph adjacency lists.
#[derive(Debug, Clone, PartialEq)]
pub struct RoadEdge {
    pub target: PlaceId,
    pub miles: f64,
    pub road: String,
}

/// Undirected road network stored as per-place adjacency lists.
///
/// Every raw record is materialized once per direction, so traversal never
/// branches on orientation. Parallel edges between the same pair are all
/// retained in file order; self-loops are stored verbatim.
#[derive(Debug, Clone, Default)]
pub struct RoadGraph {
    adjacency: HashMap<PlaceId, Vec<RoadEdge>>,
}

impl RoadGraph {
    /// Build a graph directly from adjacency lists.
    ///
    /// Useful for constructing synthetic networks in tests; the caller is
    /// responsible for inserting both directions of each road.
    pub fn from_adjacency(adjacency: HashMap<PlaceId, Vec<RoadEdge>>) -> Self {
        Self { adjacency }
    }

    /// Return the neighbours for a given place identifier.
    pub fn neighbours(&self, place: PlaceId) -> &[RoadEdge] {
        self.adjacency.get(&place).map(Vec::as_slice).unwrap_or(&[])
    }

    /// First stored edge from `from` to `to`, if any.
    ///
    /// With parallel edges the first entry in file order wins, matching the
    /// order the shortest-path engine relaxed them in.
    pub fn find_edge(&self, from: PlaceId, to: PlaceId) -> Option<&RoadEdge> {
        self.neighbours(from).iter().find(|edge| edge.target == to)
    }

    /// Number of places with at least one incident road.
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Total number of stored directed entries (twice the record count).
    pub fn directed_edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    /// One arbitrary node and its neighbour count, for load diagnostics.
    pub fn sample_node(&self) -> Option<(PlaceId, usize)> {
        self.adjacency
            .iter()
            .next()
            .map(|(id, edges)| (*id, edges.len()))
    }
}

/// Load the roads file into a [`RoadGraph`].
///
/// Each non-blank line is `<from>,<to>,<miles>,<road>` split into at most
/// four parts, so road descriptions may contain commas. Distances must be
/// non-negative. Any malformed line aborts the load.
pub fn load_roads(road_file: &Path) -> Result<RoadGraph> {
    if !road_file.exists() {
        return Err(Error::RoadFileNotFound {
            path: road_file.to_path_buf(),
        });
    }

    let contents = fs::read_to_string(road_file)?;
    let mut graph = RoadGraph::default();

    for (index, raw_line) in contents.lines().enumerate() {
        let line_number = index + 1;
        let stripped = raw_line.trim();
        if stripped.is_empty() {
            continue;
        }

        let malformed = || Error::MalformedRoad {
            path: road_file.to_path_buf(),
            line: line_number,
            content: raw_line.to_string(),
        };

        let mut parts = stripped.splitn(4, ',');
        let (from_field, to_field, miles_field, road) = match (
            parts.next(),
            parts.next(),
            parts.next(),
            parts.next(),
        ) {
            (Some(from), Some(to), Some(miles), Some(road)) => (from, to, miles, road),
            _ => return Err(malformed()),
        };

        let from_id: PlaceId = from_field.trim().parse().map_err(|_| malformed())?;
        let to_id: PlaceId = to_field.trim().parse().map_err(|_| malformed())?;
        let miles: f64 = miles_field.trim().parse().map_err(|_| malformed())?;
        if miles < 0.0 {
            return Err(malformed());
        }
        let road = road.trim().to_string();

        graph.adjacency.entry(from_id).or_default().push(RoadEdge {
            target: to_id,
            miles,
            road: road.clone(),
        });
        graph.adjacency.entry(to_id).or_default().push(RoadEdge {
            target: from_id,
            miles,
            road,
        });
    }

    debug!(
        path = %road_file.display(),
        nodes = graph.node_count(),
        directed_edges = graph.directed_edge_count(),
        "loaded road graph"
    );

    Ok(graph)
}

#[cfg(test)]
pub(crate) fn graph_from_edges(edges: &[(PlaceId, PlaceId, f64, &str)]) -> RoadGraph {
    let mut graph = RoadGraph::default();
    for &(from, to, miles, road) in edges {
        graph.adjacency.entry(from).or_default().push(RoadEdge {
            target: to,
            miles,
            road: road.to_string(),
        });
        graph.adjacency.entry(to).or_default().push(RoadEdge {
            target: from,
            miles,
            road: road.to_string(),
        });
    }
    graph
}
