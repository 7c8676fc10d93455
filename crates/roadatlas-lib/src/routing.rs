//! Query orchestration for shortest-route lookups.
//!
//! [`plan_route`] resolves place names against the catalog, runs the
//! shortest-path engine, and reconstructs the traversed place sequence.
//! Unreachable targets surface as [`Error::RouteNotFound`] at this
//! boundary; the engine and reconstructor themselves stay error-free.

use serde::Serialize;

use crate::catalog::{PlaceCatalog, PlaceId};
use crate::error::{Error, Result};
use crate::graph::RoadGraph;
use crate::path::{reconstruct_path, shortest_path};

/// Single-pair shortest-route request with exact-match place names.
#[derive(Debug, Clone)]
pub struct RouteRequest {
    pub start: String,
    pub goal: String,
}

impl RouteRequest {
    pub fn new(start: impl Into<String>, goal: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            goal: goal.into(),
        }
    }
}

/// Planned route returned by the library.
#[derive(Debug, Clone, Serialize)]
pub struct RoutePlan {
    pub start: PlaceId,
    pub goal: PlaceId,
    pub steps: Vec<PlaceId>,
    /// Minimum travel distance in miles as computed by the engine.
    pub total_miles: f64,
}

impl RoutePlan {
    /// Number of hops in the route.
    pub fn hop_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }
}

/// Resolve a place name to its identifier, rejecting empty input.
pub fn resolve_place(catalog: &PlaceCatalog, name: &str) -> Result<PlaceId> {
    let name = name.trim();
    if name.is_empty() {
        return Err(Error::EmptyPlaceName);
    }
    catalog
        .place_id_by_name(name)
        .ok_or_else(|| Error::UnknownPlace {
            name: name.to_string(),
        })
}

/// Compute the shortest route between the requested places.
pub fn plan_route(
    catalog: &PlaceCatalog,
    graph: &RoadGraph,
    request: &RouteRequest,
) -> Result<RoutePlan> {
    let start_id = resolve_place(catalog, &request.start)?;
    let goal_id = resolve_place(catalog, &request.goal)?;

    let not_found = || Error::RouteNotFound {
        start: request.start.clone(),
        goal: request.goal.clone(),
    };

    let outcome = shortest_path(graph, start_id, goal_id);
    let total_miles = outcome.distance_to(goal_id).ok_or_else(not_found)?;
    let steps = reconstruct_path(&outcome, start_id, goal_id).ok_or_else(not_found)?;

    Ok(RoutePlan {
        start: start_id,
        goal: goal_id,
        steps,
        total_miles,
    })
}
