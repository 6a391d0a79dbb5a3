use std::sync::Arc;

use log::info;
use parking_lot::{RwLock, RwLockReadGuard};
use route_core::{
    error::NetworkError,
    network::{Limits, Network},
    planner::RoutePlanner,
};
use route_map::ColorTheme;

use crate::cli::Cfg;

/// State shared by all requests. The network only lives in memory and is
/// gone when the server stops.
#[derive(Clone)]
pub struct AppState {
    planner: Arc<RwLock<RoutePlanner>>,
    pub limits: Limits,
    pub theme: ColorTheme,
}

impl AppState {
    pub fn new(network: Network, limits: Limits, theme: ColorTheme) -> Self {
        Self {
            planner: Arc::new(RwLock::new(RoutePlanner::new(network))),
            limits,
            theme,
        }
    }

    pub fn from_cfg(cfg: Cfg) -> Self {
        Self::new(cfg.network, cfg.limits, cfg.theme)
    }

    /// Current planner. Do not hold the guard across an `.await`.
    pub fn planner(&self) -> RwLockReadGuard<'_, RoutePlanner> {
        self.planner.read()
    }

    /// Validates `network` and replaces the current one with it. The current
    /// network is kept if validation fails.
    pub fn save(&self, network: Network) -> Result<(), NetworkError> {
        let network = network.validate(&self.limits)?;
        info!(
            "Saving network with {} locations and {} roads",
            network.locations.len(),
            network.roads.len()
        );
        let planner = RoutePlanner::new(network);
        *self.planner.write() = planner;
        Ok(())
    }
}
