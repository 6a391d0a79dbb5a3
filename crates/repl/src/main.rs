//! Interactive shell to plan routes on a network file
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use reedline_repl_rs::clap::{Arg, ArgMatches, Command};
use reedline_repl_rs::{Repl, Result};
use route_core::{
    network::{Limits, Network},
    planner::RoutePlanner,
    statistics::{average_out_degree, isolated_nodes},
};
use route_map::{format_distance, MapView};

/// Print network info
fn info(_args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    let g = context.planner.graph();
    Ok(Some(format!(
        "{}\nAverage degree: {:.2}, isolated locations: {}",
        g,
        average_out_degree(g),
        isolated_nodes(g)
    )))
}

fn locations(_args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    let mut out = String::new();
    for l in &context.planner.network().locations {
        out.push_str(&format!("{}  (lat: {:.5}, lon: {:.5})\n", l.name, l.lat, l.lon));
    }
    Ok(Some(out))
}

fn roads(_args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    let mut out = String::new();
    for r in &context.planner.network().roads {
        out.push_str(&format!(
            "{} ↔ {}  :  {} units\n",
            r.from,
            r.to,
            format_distance(r.distance)
        ));
    }
    Ok(Some(out))
}

fn endpoints(args: &ArgMatches) -> (&str, &str) {
    // Both arguments are required, clap rejects the command without them
    let start = args.get_one::<String>("start").map_or("", String::as_str);
    let end = args.get_one::<String>("end").map_or("", String::as_str);
    (start, end)
}

fn route(args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    let (start, end) = endpoints(&args);

    match context.planner.plan(start, end) {
        Ok(route) => Ok(Some(format!(
            "Shortest Route: {}\nTotal Distance: {} units",
            route.describe(),
            format_distance(route.distance)
        ))),
        Err(e) => Ok(Some(e.to_string())),
    }
}

fn map(args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    let (start, end) = endpoints(&args);
    let file = args
        .get_one::<String>("file")
        .map_or("route.html", String::as_str);

    let route = match context.planner.plan(start, end) {
        Ok(route) => route,
        Err(e) => return Ok(Some(e.to_string())),
    };

    let html = MapView::new(context.planner.network())
        .with_route(&route)
        .render();

    match std::fs::write(file, html) {
        Ok(()) => Ok(Some(format!("Map written to {}", file))),
        Err(e) => Ok(Some(format!("Could not write {}: {}", file, e))),
    }
}

struct Context {
    planner: RoutePlanner,
}

impl Context {
    fn new(planner: RoutePlanner) -> Self {
        Self { planner }
    }
}

fn load_network(path: &Path) -> anyhow::Result<Network> {
    let network = match path.extension().and_then(|e| e.to_str()) {
        Some("csv") => {
            // A locations file `<name>.csv` comes with `<name>_roads.csv`
            let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or_default();
            let roads = path.with_file_name(format!("{}_roads.csv", stem));
            Network::from_csv(path, &roads)?
        }
        _ => Network::from_toml_file(path)?,
    };
    network
        .validate(&Limits::unbounded())
        .context("Invalid network")
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let path = std::env::args()
        .nth(1)
        .context("No path to network file given")?;
    let network = load_network(Path::new(&path))?;
    let context = Context::new(RoutePlanner::new(network));

    let endpoint_args = || {
        [
            Arg::new("start").required(true).help("Name of the start location"),
            Arg::new("end").required(true).help("Name of the destination"),
        ]
    };

    let mut repl = Repl::new(context)
        .with_name("Route Planner")
        .with_version("v0.1.0")
        .with_description("Shell to plan shortest delivery routes")
        .with_banner("Welcome to the route planner")
        .with_history(PathBuf::from(".route_history"), 100)
        .with_command(Command::new("info").about("Print network info"), info)
        .with_command(
            Command::new("locations").about("List all locations"),
            locations,
        )
        .with_command(Command::new("roads").about("List all roads"), roads)
        .with_command(
            Command::new("route")
                .args(endpoint_args())
                .about("Calculate the shortest route using Dijkstra's algorithm"),
            route,
        )
        .with_command(
            Command::new("map")
                .args(endpoint_args())
                .arg(
                    Arg::new("file")
                        .required(false)
                        .help("Output html file, route.html by default"),
                )
                .about("Write a map of the shortest route to an html file"),
            map,
        );

    repl.run()
        .map_err(|e| anyhow::anyhow!("Shell failed: {}", e))
}
