use log::info;
use serde::Serialize;

use crate::{
    constants::Weight,
    error::RouteError,
    graph::{Graph, NodeIndex},
    network::{Location, Network},
    search::dijkstra::Dijkstra,
};

/// A planned delivery route.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    /// Locations in travel order, starting at the start location
    pub stops: Vec<Location>,
    /// Sum of the distances of all roads travelled
    pub distance: Weight,
}

impl Route {
    pub fn start(&self) -> Option<&Location> {
        self.stops.first()
    }

    pub fn end(&self) -> Option<&Location> {
        self.stops.last()
    }

    /// True if start and end are the same location
    pub fn is_trivial(&self) -> bool {
        self.stops.len() <= 1
    }

    pub fn names(&self) -> Vec<&str> {
        self.stops.iter().map(|l| l.name.as_str()).collect()
    }

    /// Human readable list of stops, e.g. `A → B → C`
    pub fn describe(&self) -> String {
        self.names().join(" → ")
    }
}

/// Plans routes on a fixed network. The road graph is built once on creation.
#[derive(Debug, Clone)]
pub struct RoutePlanner {
    network: Network,
    graph: Graph,
}

impl RoutePlanner {
    pub fn new(network: Network) -> Self {
        let graph = network.to_graph();
        info!("{}", graph);
        RoutePlanner { network, graph }
    }

    pub fn network(&self) -> &Network {
        &self.network
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    fn lookup(&self, name: &str) -> Result<NodeIndex, RouteError> {
        self.graph
            .node_index_by_name(name)
            .ok_or_else(|| RouteError::UnknownLocation(name.to_string()))
    }

    /// Shortest route from `start` to `end`.
    pub fn plan(&self, start: &str, end: &str) -> Result<Route, RouteError> {
        if self.graph.nodes.is_empty() {
            return Err(RouteError::EmptyNetwork);
        }
        let source = self.lookup(start)?;
        let target = self.lookup(end)?;

        let mut dijkstra = Dijkstra::new(&self.graph);
        let sp = dijkstra.search(source, target).ok_or_else(|| RouteError::NoPath {
            start: start.to_string(),
            end: end.to_string(),
        })?;

        let stops = sp
            .nodes
            .iter()
            .filter_map(|idx| self.graph.node(*idx))
            .map(Location::from)
            .collect();

        Ok(Route {
            stops,
            distance: sp.weight,
        })
    }
}
