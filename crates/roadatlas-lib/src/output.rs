use std::fmt::Write;

use serde::Serialize;
use tracing::warn;

use crate::catalog::{PlaceCatalog, PlaceId};
use crate::graph::RoadGraph;
use crate::routing::RoutePlan;

/// Endpoint within a rendered itinerary.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteEndpoint {
    pub id: PlaceId,
    pub name: String,
}

/// One hop of a rendered itinerary.
///
/// `road` and `miles` are `None` when no stored edge matched the step, in
/// which case the leg does not contribute to the running total.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteLeg {
    pub index: usize,
    pub from_id: PlaceId,
    pub from_name: String,
    pub to_id: PlaceId,
    pub to_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub road: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub miles: Option<f64>,
    /// Cumulative matched distance up to and including this leg.
    pub running_total_miles: f64,
}

/// Structured itinerary that higher-level consumers can serialise.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteSummary {
    pub start: RouteEndpoint,
    pub goal: RouteEndpoint,
    pub hops: usize,
    pub legs: Vec<RouteLeg>,
    pub total_miles: f64,
}

impl RouteSummary {
    /// Re-walk a reconstructed route and attach per-leg road data.
    ///
    /// Each consecutive step pair is matched against the first stored edge
    /// toward the next place. A missing edge is logged and rendered
    /// without distance data rather than aborting the whole itinerary.
    pub fn from_plan(catalog: &PlaceCatalog, graph: &RoadGraph, plan: &RoutePlan) -> Self {
        let mut legs = Vec::with_capacity(plan.hop_count());
        let mut total_miles = 0.0;

        for (index, pair) in plan.steps.windows(2).enumerate() {
            let (from_id, to_id) = (pair[0], pair[1]);
            let (road, miles) = match graph.find_edge(from_id, to_id) {
                Some(edge) => {
                    total_miles += edge.miles;
                    (Some(edge.road.clone()), Some(edge.miles))
                }
                None => {
                    warn!(
                        %from_id,
                        %to_id,
                        "no edge data found for a reconstructed step"
                    );
                    (None, None)
                }
            };

            legs.push(RouteLeg {
                index: index + 1,
                from_id,
                from_name: catalog.display_name(from_id).to_string(),
                to_id,
                to_name: catalog.display_name(to_id).to_string(),
                road,
                miles,
                running_total_miles: total_miles,
            });
        }

        Self {
            start: RouteEndpoint {
                id: plan.start,
                name: catalog.display_name(plan.start).to_string(),
            },
            goal: RouteEndpoint {
                id: plan.goal,
                name: catalog.display_name(plan.goal).to_string(),
            },
            hops: plan.hop_count(),
            legs,
            total_miles,
        }
    }

    /// Render the itinerary as numbered text lines plus a total line.
    pub fn render_text(&self) -> String {
        let mut buffer = String::new();

        for leg in &self.legs {
            match (&leg.road, leg.miles) {
                (Some(road), Some(miles)) => {
                    let _ = writeln!(
                        buffer,
                        "\t{}: {}({}) -> {}({}), {}, {:.2} mi.",
                        leg.index, leg.from_id, leg.from_name, leg.to_id, leg.to_name, road, miles
                    );
                }
                _ => {
                    let _ = writeln!(
                        buffer,
                        "\t{}: {}({}) -> {}({}), <missing edge data>",
                        leg.index, leg.from_id, leg.from_name, leg.to_id, leg.to_name
                    );
                }
            }
        }

        let _ = writeln!(
            buffer,
            "It takes {:.2} miles from {}({}) to {}({}).",
            self.total_miles, self.start.id, self.start.name, self.goal.id, self.goal.name
        );

        buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::graph_from_edges;
    use crate::routing::RoutePlan;

    fn plan(steps: Vec<PlaceId>, total_miles: f64) -> RoutePlan {
        RoutePlan {
            start: *steps.first().expect("non-empty steps"),
            goal: *steps.last().expect("non-empty steps"),
            steps,
            total_miles,
        }
    }

    #[test]
    fn summary_accumulates_leg_distances() {
        let catalog = PlaceCatalog::default();
        let graph = graph_from_edges(&[(1, 2, 3.0, "First St"), (2, 3, 4.5, "Second St")]);

        let summary = RouteSummary::from_plan(&catalog, &graph, &plan(vec![1, 2, 3], 7.5));

        assert_eq!(summary.legs.len(), 2);
        assert_eq!(summary.total_miles, 7.5);
        assert_eq!(summary.legs[0].road.as_deref(), Some("First St"));
        assert_eq!(summary.legs[0].running_total_miles, 3.0);
        assert_eq!(summary.legs[1].miles, Some(4.5));
        assert_eq!(summary.legs[1].running_total_miles, 7.5);
    }

    #[test]
    fn missing_edge_is_rendered_without_distance() {
        let catalog = PlaceCatalog::default();
        let graph = graph_from_edges(&[(1, 2, 3.0, "First St")]);

        // Step 2 -> 9 has no stored edge.
        let summary = RouteSummary::from_plan(&catalog, &graph, &plan(vec![1, 2, 9], 3.0));

        assert_eq!(summary.legs.len(), 2);
        assert_eq!(summary.legs[1].road, None);
        assert_eq!(summary.legs[1].miles, None);
        assert_eq!(summary.legs[1].running_total_miles, 3.0);
        assert_eq!(summary.total_miles, 3.0);
        assert!(summary.render_text().contains("<missing edge data>"));
    }

    #[test]
    fn text_rendering_uses_two_decimal_places() {
        let catalog = PlaceCatalog::default();
        let graph = graph_from_edges(&[(1, 2, 112.5, "Route128")]);

        let text = RouteSummary::from_plan(&catalog, &graph, &plan(vec![1, 2], 112.5)).render_text();

        assert!(text.contains("Route128, 112.50 mi."));
        assert!(text.contains("It takes 112.50 miles"));
    }

    #[test]
    fn trivial_plan_renders_only_the_total_line() {
        let catalog = PlaceCatalog::default();
        let graph = graph_from_edges(&[]);

        let summary = RouteSummary::from_plan(&catalog, &graph, &plan(vec![7], 0.0));

        assert!(summary.legs.is_empty());
        assert_eq!(summary.total_miles, 0.0);
        assert!(summary.render_text().starts_with("It takes 0.00 miles"));
    }
}
