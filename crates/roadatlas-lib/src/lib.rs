//! Roadatlas library entry points.
//!
//! This crate loads a place catalog and a mileage-weighted road graph from
//! flat text files, answers single-pair shortest-route queries with
//! Dijkstra's algorithm, and renders the result as a per-segment itinerary.
//! Higher-level consumers (the CLI) should only depend on the functions
//! exported here instead of reimplementing behavior.

#![deny(warnings)]

pub mod catalog;
pub mod error;
pub mod graph;
pub mod output;
pub mod path;
pub mod routing;

pub use catalog::{load_places, PlaceCatalog, PlaceId, PLACEHOLDER_NAME};
pub use error::{Error, Result};
pub use graph::{load_roads, RoadEdge, RoadGraph};
pub use output::{RouteEndpoint, RouteLeg, RouteSummary};
pub use path::{reconstruct_path, shortest_path, SearchOutcome};
pub use routing::{plan_route, resolve_place, RoutePlan, RouteRequest};
