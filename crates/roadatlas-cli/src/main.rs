use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use roadatlas_lib::{
    load_places, load_roads, plan_route, resolve_place, RouteRequest, RouteSummary,
};

mod diagnostics;
mod prompt;

#[derive(Parser, Debug)]
#[command(author, version, about = "Roadatlas shortest-route utilities")]
struct Cli {
    /// Path to the places file.
    #[arg(long, default_value = "data/raw/Place.txt")]
    places: PathBuf,

    /// Path to the roads file.
    #[arg(long, default_value = "data/raw/Road.txt")]
    roads: PathBuf,

    /// Output format for query results.
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute the shortest route between two place names.
    Route {
        /// Starting place name (prompted for when omitted).
        #[arg(long = "from")]
        from: Option<String>,
        /// Destination place name (prompted for when omitted).
        #[arg(long = "to")]
        to: Option<String>,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    /// Load diagnostics plus a numbered itinerary.
    Text,
    /// Machine-readable route summary only.
    Json,
}

fn main() -> Result<()> {
    init_tracing();
    let Cli {
        places,
        roads,
        format,
        command,
    } = Cli::parse();

    match command {
        Command::Route { from, to } => handle_route(&places, &roads, format, from, to),
    }
}

fn handle_route(
    places: &Path,
    roads: &Path,
    format: OutputFormat,
    from: Option<String>,
    to: Option<String>,
) -> Result<()> {
    let catalog = load_places(places)
        .with_context(|| format!("failed to load places from {}", places.display()))?;
    let graph = load_roads(roads)
        .with_context(|| format!("failed to load roads from {}", roads.display()))?;

    if format == OutputFormat::Text {
        diagnostics::print_dataset_report(&catalog, &graph);
    }

    let from = match from {
        Some(name) => name,
        None => prompt::read_place_name("Enter the Source Name: ")?,
    };
    let to = match to {
        Some(name) => name,
        None => prompt::read_place_name("Enter the Destination Name: ")?,
    };

    let start_id = resolve_place(&catalog, &from).context("could not resolve the source name")?;
    let goal_id = resolve_place(&catalog, &to).context("could not resolve the destination name")?;

    if format == OutputFormat::Text {
        println!(
            "Searching from {}({}) to {}({})",
            start_id,
            catalog.display_name(start_id),
            goal_id,
            catalog.display_name(goal_id)
        );
    }

    let started = Instant::now();
    let plan = plan_route(&catalog, &graph, &RouteRequest::new(from, to)).context(
        "no route exists; the places may be in disconnected components \
         (e.g., mainland vs. Alaska/Hawaii)",
    )?;
    let summary = RouteSummary::from_plan(&catalog, &graph, &plan);
    let elapsed = started.elapsed();

    match format {
        OutputFormat::Text => {
            print!("{}", summary.render_text());
            diagnostics::print_elapsed(elapsed);
        }
        OutputFormat::Json => {
            let rendered =
                serde_json::to_string_pretty(&summary).context("failed to serialise route")?;
            println!("{rendered}");
        }
    }

    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
