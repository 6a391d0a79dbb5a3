//! Renders delivery networks and planned routes as standalone Leaflet maps.
pub mod color_theme;
pub mod map_view;

pub use color_theme::ColorTheme;
pub use map_view::{format_distance, MapView, MapViewOptions};
