/// Colours and stroke settings of a rendered map.
///
/// Marker colours are names understood by Leaflet.awesome-markers, line
/// colours are css colours.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorTheme {
    pub tiles_url: &'static str,
    pub tiles_attribution: &'static str,
    pub location_color: &'static str,
    pub start_color: &'static str,
    pub end_color: &'static str,
    pub road_color: &'static str,
    pub road_weight: u32,
    pub road_opacity: f64,
    pub route_color: &'static str,
    pub route_weight: u32,
    /// Animation delay of the route in milliseconds
    pub route_delay: u32,
    pub label_font_size: u32,
}

pub const LIGHT_THEME: ColorTheme = ColorTheme {
    tiles_url: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png",
    tiles_attribution: "&copy; OpenStreetMap contributors",
    location_color: "blue",
    start_color: "red",
    end_color: "green",
    road_color: "#888",
    road_weight: 2,
    road_opacity: 0.6,
    route_color: "#00cc44",
    route_weight: 6,
    route_delay: 1000,
    label_font_size: 10,
};

pub const DARK_THEME: ColorTheme = ColorTheme {
    tiles_url: "https://{s}.basemaps.cartocdn.com/dark_all/{z}/{x}/{y}.png",
    tiles_attribution: "&copy; OpenStreetMap contributors &copy; CARTO",
    location_color: "cadetblue",
    start_color: "red",
    end_color: "green",
    road_color: "#ccc",
    road_weight: 2,
    road_opacity: 0.5,
    route_color: "#00ff55",
    route_weight: 6,
    route_delay: 1000,
    label_font_size: 10,
};

impl Default for ColorTheme {
    fn default() -> Self {
        LIGHT_THEME
    }
}
