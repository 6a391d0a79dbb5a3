//! Web UI of the delivery route planner.
//!
//! Serves a single page to edit the delivery network and plan routes on it,
//! plus a small JSON api doing the same.
pub mod cli;
pub mod error;
pub mod handlers;
pub mod pages;
pub mod server;
pub mod state;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
