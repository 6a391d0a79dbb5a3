//! Error types of the route planner.

use thiserror::Error;

use crate::constants::Weight;

/// Reasons a network definition is rejected.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NetworkError {
    #[error("Location names cannot be empty")]
    EmptyName,

    #[error("Location names must be unique, '{0}' is used more than once")]
    DuplicateName(String),

    #[error("Location '{name}' has invalid coordinates ({lat}, {lon})")]
    InvalidCoordinate { name: String, lat: f64, lon: f64 },

    #[error("Roads cannot connect a location to itself ('{0}')")]
    SelfLoop(String),

    #[error("Road {from} ↔ {to} has invalid distance {distance}")]
    InvalidDistance {
        from: String,
        to: String,
        distance: Weight,
    },

    #[error("At least {min} locations are required, got {actual}")]
    TooFewLocations { min: usize, actual: usize },

    #[error("At most {max} locations are allowed, got {actual}")]
    TooManyLocations { max: usize, actual: usize },

    #[error("At least {min} roads are required, got {actual}")]
    TooFewRoads { min: usize, actual: usize },

    #[error("At most {max} roads are allowed, got {actual}")]
    TooManyRoads { max: usize, actual: usize },

    #[error("Could not parse network: {0}")]
    Parse(String),
}

/// Reasons a route cannot be planned.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RouteError {
    #[error("The network has no locations")]
    EmptyNetwork,

    #[error("Location '{0}' does not exist in the network")]
    UnknownLocation(String),

    #[error("No path exists between '{start}' and '{end}' with the given roads")]
    NoPath { start: String, end: String },
}
