//! Load-time dataset reporting and timing output.

use std::time::Duration;

use roadatlas_lib::{PlaceCatalog, RoadGraph};

/// Print counts and sample entries so users can sanity-check the dataset.
pub fn print_dataset_report(catalog: &PlaceCatalog, graph: &RoadGraph) {
    println!("Loaded {} place IDs with names.", catalog.place_count());
    println!("Unique place names stored: {}", catalog.name_count());

    let samples = catalog.sample_names(5);
    if !samples.is_empty() {
        println!("Sample entries:");
        for (name, id) in samples {
            println!("  {name} -> {id}");
        }
    }

    let directed = graph.directed_edge_count();
    println!(
        "Graph contains {} nodes with at least one incident road.",
        graph.node_count()
    );
    println!(
        "Stored {directed} directed edges (~{} undirected segments).",
        directed / 2
    );

    match graph.sample_node() {
        Some((node, neighbours)) => {
            println!("Sample node {node} has {neighbours} neighbors.");
        }
        None => println!("Graph appears to be empty."),
    }
    println!();
}

/// Print the elapsed query time to two decimal places.
pub fn print_elapsed(elapsed: Duration) {
    println!(
        "Computation time (search + path reconstruction): {:.2} seconds.",
        elapsed.as_secs_f64()
    );
}
