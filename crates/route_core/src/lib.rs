//! Crate to model delivery networks and plan shortest routes between their locations.
//!
//! # Basic usage
//! ```
//! use route_core::prelude::*;
//!
//! let network = Network::from_toml_str(
//!     r#"
//!     [[locations]]
//!     name = "Warehouse"
//!     lat = 19.076
//!     lon = 72.8777
//!
//!     [[locations]]
//!     name = "Shop"
//!     lat = 19.081
//!     lon = 72.8827
//!
//!     [[roads]]
//!     from = "Warehouse"
//!     to = "Shop"
//!     distance = 4.0
//!     "#,
//! )
//! .expect("Failed to parse network");
//!
//! // Validate the raw input before planning on it
//! let network = network.validate(&Limits::default()).expect("Invalid network");
//!
//! let planner = RoutePlanner::new(network);
//! let route = planner.plan("Warehouse", "Shop").expect("No route");
//!
//! assert_eq!(route.describe(), "Warehouse → Shop");
//! assert_eq!(route.distance, 4.0);
//!```
pub mod constants;
pub mod error;
pub mod graph;
pub mod network;
pub mod planner;
pub mod prelude;
pub mod search;
pub mod statistics;
pub mod util;
