//! Re-exports of the most commonly used items in `route_core`.
pub use crate::error::{NetworkError, RouteError};
pub use crate::network::{Limits, Location, Network, Road};
pub use crate::planner::{Route, RoutePlanner};

pub use crate::search;

pub use crate::graph::node_index;
pub use crate::graph::Graph;
