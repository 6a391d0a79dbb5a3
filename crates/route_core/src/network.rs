//! Definition of a delivery network: named locations connected by roads.
//!
//! A [`Network`] is the raw user input. It is checked with
//! [`Network::validate`] before it is turned into a [`Graph`].
use std::path::Path;

use anyhow::Context;
use log::{debug, info, warn};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::{
    constants::{Weight, DEFAULT_LAT, DEFAULT_LON, DEFAULT_STEP},
    error::NetworkError,
    graph::{Edge, Graph, Node},
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
}

impl Location {
    pub fn new(name: impl Into<String>, lat: f64, lon: f64) -> Self {
        Location {
            name: name.into(),
            lat,
            lon,
        }
    }
}

impl From<&Node> for Location {
    fn from(node: &Node) -> Self {
        Location::new(node.name.clone(), node.lat, node.lon)
    }
}

/// Undirected road between two locations, referenced by name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Road {
    pub from: String,
    pub to: String,
    pub distance: Weight,
}

impl Road {
    pub fn new(from: impl Into<String>, to: impl Into<String>, distance: Weight) -> Self {
        Road {
            from: from.into(),
            to: to.into(),
            distance,
        }
    }
}

/// Bounds on the size of a network accepted by [`Network::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    pub min_locations: usize,
    pub max_locations: usize,
    pub min_roads: usize,
    pub max_roads: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Limits {
            min_locations: 2,
            max_locations: 20,
            min_roads: 1,
            max_roads: 100,
        }
    }
}

impl Limits {
    /// No bounds at all, used for networks loaded from files
    pub fn unbounded() -> Self {
        Limits {
            min_locations: 0,
            max_locations: usize::MAX,
            min_roads: 0,
            max_roads: usize::MAX,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Network {
    #[serde(default, alias = "location")]
    pub locations: Vec<Location>,
    #[serde(default, alias = "road")]
    pub roads: Vec<Road>,
}

impl Network {
    pub fn new(locations: Vec<Location>, roads: Vec<Road>) -> Self {
        Network { locations, roads }
    }

    /// Creates `n` locations named `Point1`..`PointN`, placed diagonally next
    /// to each other. There are no roads yet.
    pub fn with_default_locations(n: usize) -> Self {
        let locations = (0..n)
            .map(|i| {
                let offset = i as f64 * DEFAULT_STEP;
                Location::new(
                    format!("Point{}", i + 1),
                    DEFAULT_LAT + offset,
                    DEFAULT_LON + offset,
                )
            })
            .collect();

        Network {
            locations,
            roads: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Checks the network and returns a cleaned up copy of it.
    ///
    /// Location names are trimmed. Roads with an endpoint that is not one of
    /// the locations are dropped.
    pub fn validate(mut self, limits: &Limits) -> Result<Network, NetworkError> {
        let num_locations = self.locations.len();
        if num_locations < limits.min_locations {
            return Err(NetworkError::TooFewLocations {
                min: limits.min_locations,
                actual: num_locations,
            });
        }
        if num_locations > limits.max_locations {
            return Err(NetworkError::TooManyLocations {
                max: limits.max_locations,
                actual: num_locations,
            });
        }

        let num_roads = self.roads.len();
        if num_roads < limits.min_roads {
            return Err(NetworkError::TooFewRoads {
                min: limits.min_roads,
                actual: num_roads,
            });
        }
        if num_roads > limits.max_roads {
            return Err(NetworkError::TooManyRoads {
                max: limits.max_roads,
                actual: num_roads,
            });
        }

        for location in self.locations.iter_mut() {
            location.name = location.name.trim().to_string();
        }
        for road in self.roads.iter_mut() {
            road.from = road.from.trim().to_string();
            road.to = road.to.trim().to_string();
        }

        if self.locations.iter().any(|l| l.name.is_empty()) {
            return Err(NetworkError::EmptyName);
        }

        let mut names = FxHashSet::default();
        for location in &self.locations {
            if !names.insert(location.name.as_str()) {
                return Err(NetworkError::DuplicateName(location.name.clone()));
            }
            if !location.lat.is_finite() || !location.lon.is_finite() {
                return Err(NetworkError::InvalidCoordinate {
                    name: location.name.clone(),
                    lat: location.lat,
                    lon: location.lon,
                });
            }
        }

        if let Some(road) = self.roads.iter().find(|r| r.from == r.to) {
            return Err(NetworkError::SelfLoop(road.from.clone()));
        }

        if let Some(road) = self
            .roads
            .iter()
            .find(|r| !r.distance.is_finite() || r.distance < 0.0)
        {
            return Err(NetworkError::InvalidDistance {
                from: road.from.clone(),
                to: road.to.clone(),
                distance: road.distance,
            });
        }

        let roads = std::mem::take(&mut self.roads);
        let (known, unknown): (Vec<Road>, Vec<Road>) = roads
            .into_iter()
            .partition(|r| names.contains(r.from.as_str()) && names.contains(r.to.as_str()));
        for road in &unknown {
            warn!(
                "Dropping road {} ↔ {}, an endpoint is not a known location",
                road.from, road.to
            );
        }
        self.roads = known;

        debug!(
            "Validated network with {} locations and {} roads",
            self.locations.len(),
            self.roads.len()
        );
        Ok(self)
    }

    /// Builds the undirected road graph. Roads with unknown endpoints are skipped.
    pub fn to_graph(&self) -> Graph {
        let mut g = Graph::with_capacity(self.locations.len(), self.roads.len());

        for location in &self.locations {
            g.add_node(Node::new(location.name.clone(), location.lat, location.lon));
        }

        for road in &self.roads {
            match (
                g.node_index_by_name(&road.from),
                g.node_index_by_name(&road.to),
            ) {
                (Some(source), Some(target)) => {
                    g.add_edge(Edge::new_bidir(source, target, road.distance));
                }
                _ => debug!("Skipping road {} ↔ {}", road.from, road.to),
            }
        }

        g
    }

    pub fn location(&self, name: &str) -> Option<&Location> {
        self.locations.iter().find(|l| l.name == name)
    }

    /// Returns `(lat, lon)` of the location called `name`
    pub fn coords_by_name(&self, name: &str) -> Option<(f64, f64)> {
        self.location(name).map(|l| (l.lat, l.lon))
    }

    /// Mean latitude and longitude of all locations
    pub fn center(&self) -> Option<(f64, f64)> {
        if self.locations.is_empty() {
            return None;
        }
        let n = self.locations.len() as f64;
        let lat = self.locations.iter().map(|l| l.lat).sum::<f64>() / n;
        let lon = self.locations.iter().map(|l| l.lon).sum::<f64>() / n;
        Some((lat, lon))
    }

    pub fn from_toml_str(input: &str) -> Result<Self, NetworkError> {
        toml::from_str(input).map_err(|e| NetworkError::Parse(e.to_string()))
    }

    pub fn to_toml_string(&self) -> anyhow::Result<String> {
        toml::to_string(self).context("Failed to serialize network")
    }

    pub fn from_toml_file(path: &Path) -> anyhow::Result<Self> {
        info!("Reading network from {}", path.display());
        let input = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let network = Self::from_toml_str(&input)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        Ok(network)
    }

    /// Reads locations (`name,lat,lon`) and roads (`from,to,distance`) from
    /// two csv files with header rows.
    pub fn from_csv(path_to_locations: &Path, path_to_roads: &Path) -> anyhow::Result<Self> {
        let mut locations = Vec::new();
        let mut reader = csv::Reader::from_path(path_to_locations)
            .with_context(|| format!("Failed to open {}", path_to_locations.display()))?;
        for result in reader.deserialize() {
            let location: Location = result.context("Failed to parse Location")?;
            locations.push(location);
        }

        let mut roads = Vec::new();
        let mut reader = csv::Reader::from_path(path_to_roads)
            .with_context(|| format!("Failed to open {}", path_to_roads.display()))?;
        for result in reader.deserialize() {
            let road: Road = result.context("Failed to parse Road")?;
            roads.push(road);
        }

        info!(
            "Read {} locations and {} roads from csv",
            locations.len(),
            roads.len()
        );
        Ok(Network { locations, roads })
    }

    /// Writes `locations.csv` and `roads.csv` into `dir`.
    pub fn export_csv(&self, dir: &Path) -> anyhow::Result<()> {
        let mut wtr = csv::Writer::from_path(dir.join("locations.csv"))?;

        debug!("BEGIN writing locations");
        for location in &self.locations {
            wtr.serialize(location)?;
        }
        wtr.flush()?;
        debug!("FINISHED writing locations");

        let mut wtr = csv::Writer::from_path(dir.join("roads.csv"))?;
        debug!("BEGIN writing roads");
        for road in &self.roads {
            wtr.serialize(road)?;
        }
        wtr.flush()?;
        debug!("FINISHED writing roads");
        Ok(())
    }
}
