use std::{net::SocketAddr, path::PathBuf};

use anyhow::Context;
use clap::{Parser, ValueEnum};
use route_core::network::{Limits, Network};
use route_map::{
    color_theme::{DARK_THEME, LIGHT_THEME},
    ColorTheme,
};

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl From<Theme> for ColorTheme {
    fn from(theme: Theme) -> Self {
        match theme {
            Theme::Light => LIGHT_THEME,
            Theme::Dark => DARK_THEME,
        }
    }
}

#[derive(Parser, Debug)]
#[command(author = "Daniel Holzner", version, about, long_about = None)]
pub struct Cli {
    /// Address the web server listens on
    #[arg(long, default_value = "127.0.0.1:8501")]
    pub addr: SocketAddr,

    /// Network definition (.toml) loaded on startup
    #[arg(long, value_name = "FILE", conflicts_with_all = ["locations", "roads"])]
    pub network: Option<PathBuf>,

    /// Locations csv file (name,lat,lon) loaded on startup, requires --roads
    #[arg(long, value_name = "FILE", requires = "roads")]
    pub locations: Option<PathBuf>,

    /// Roads csv file (from,to,distance) loaded on startup, requires --locations
    #[arg(long, value_name = "FILE", requires = "locations")]
    pub roads: Option<PathBuf>,

    /// Maximum number of locations a network may have
    #[arg(long, default_value_t = 20)]
    pub max_locations: usize,

    /// Maximum number of roads a network may have
    #[arg(long, default_value_t = 100)]
    pub max_roads: usize,

    /// Map theme
    #[arg(long, value_enum, default_value_t = Theme::Light)]
    pub theme: Theme,
}

#[derive(Debug, Clone)]
pub struct Cfg {
    pub addr: SocketAddr,
    pub network: Network,
    pub limits: Limits,
    pub theme: ColorTheme,
}

impl Cli {
    /// Loads the startup network and resolves all settings
    pub fn into_cfg(self) -> anyhow::Result<Cfg> {
        let limits = Limits {
            max_locations: self.max_locations,
            max_roads: self.max_roads,
            ..Limits::default()
        };

        let network = match (self.network, self.locations, self.roads) {
            (Some(path), _, _) => Some(Network::from_toml_file(&path)?),
            (None, Some(locations), Some(roads)) => Some(Network::from_csv(&locations, &roads)?),
            _ => None,
        };

        let network = match network {
            Some(network) => network
                .validate(&limits)
                .context("Network given on the command line is invalid")?,
            None => Network::default(),
        };

        Ok(Cfg {
            addr: self.addr,
            network,
            limits,
            theme: self.theme.into(),
        })
    }
}

pub fn parse() -> anyhow::Result<Cfg> {
    Cli::parse().into_cfg()
}
