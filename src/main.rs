//! # delivery-route CLI
//!
//! Plans one delivery route from an edge list and prints a summary.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use delivery_route::io::{self, CityNames};
use delivery_route::report::RouteSummary;
use delivery_route::{NodeId, PlannerConfig, RoutePlanner, Strategy, UnreachablePolicy};
use log::{error, LevelFilter};


/// Command-line interface for delivery-route
#[derive(Parser)]
#[command(name = "delivery-route")]
#[command(about = "Plan a closed delivery route over a weighted city graph")]
#[command(long_about = "Plans a delivery route with the nearest neighbor heuristic:
  delivery-route --graph graph.txt --start 1 --stops '[4, 7, 9]'
  delivery-route --graph graph.txt --names city_names.txt --start 1 --stops '[\"4\"]' --format json

The graph file holds one 'cityA cityB weight' edge per line.
The names file holds one 'id name' pair per line.")]
#[command(version)]
struct Cli {
    /// Edge list file
    #[arg(long)]
    graph: PathBuf,

    /// Optional city names file
    #[arg(long)]
    names: Option<PathBuf>,

    /// Start city id
    #[arg(long)]
    start: String,

    /// Delivery points as a JSON array, e.g. '[2, "5"]'
    #[arg(long, default_value = "[]")]
    stops: String,

    /// Shortest path engine
    #[arg(long, value_enum, default_value_t = Strategy::FloydWarshall)]
    strategy: Strategy,

    /// What to do when a tour hop has no path
    #[arg(long, value_enum, default_value_t = UnreachablePolicy::Skip)]
    on_unreachable: UnreachablePolicy,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() {
    if let Err(e) = run() {
        error!("{e:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging to stderr, RUST_LOG still overrides the level
    env_logger::Builder::new()
        .filter_level(if cli.verbose { LevelFilter::Debug } else { LevelFilter::Warn })
        .parse_default_env()
        .target(env_logger::Target::Stderr)
        .init();

    let graph = io::load_graph(&cli.graph)?;
    let names = match &cli.names {
        Some(path) => io::load_city_names(path)?,
        None => CityNames::default(),
    };

    let start = NodeId::new(&cli.start);
    let stops = io::parse_stops_or_empty(&cli.stops);

    let planner = RoutePlanner::new(PlannerConfig {
        strategy: cli.strategy,
        unreachable: cli.on_unreachable,
    });
    let route = planner
        .plan(&graph, &start, &stops)
        .with_context(|| format!("failed to plan route from {start}"))?;

    match cli.format {
        OutputFormat::Text => {
            println!("{}", RouteSummary { start: &start, stops: &stops, route: &route, names: &names });
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&route)?);
        }
    }

    Ok(())
}
