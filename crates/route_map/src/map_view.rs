use log::debug;
use route_core::{
    constants::Weight,
    network::{Location, Network},
    planner::Route,
};
use serde::Serialize;

use crate::color_theme::ColorTheme;

const TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>Delivery Route Map</title>
<link rel="stylesheet" href="https://unpkg.com/leaflet@1.9.4/dist/leaflet.css">
<link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/Leaflet.awesome-markers/2.0.2/leaflet.awesome-markers.css">
<link rel="stylesheet" href="https://netdna.bootstrapcdn.com/bootstrap/3.0.0/css/bootstrap-glyphicons.css">
<script src="https://unpkg.com/leaflet@1.9.4/dist/leaflet.js"></script>
<script src="https://cdnjs.cloudflare.com/ajax/libs/Leaflet.awesome-markers/2.0.2/leaflet.awesome-markers.js"></script>
<script src="https://cdn.jsdelivr.net/npm/leaflet-ant-path@1.3.0/dist/leaflet-ant-path.js"></script>
<style>
html, body { margin: 0; padding: 0; }
#map { width: __WIDTH__; height: __HEIGHT__; }
.distance-label { background: none; border: none; white-space: nowrap; }
</style>
</head>
<body>
<div id="map"></div>
<script>
const data = __DATA__;
const map = L.map("map").setView(data.center, data.zoom);
L.tileLayer(data.tiles.url, { attribution: data.tiles.attribution, maxZoom: 19 }).addTo(map);

function text(content) {
  const el = document.createElement("span");
  el.textContent = content;
  return el;
}

for (const road of data.roads) {
  L.polyline(road.points, { color: road.color, weight: road.weight, opacity: road.opacity }).addTo(map);
}

for (const label of data.labels) {
  const el = text(label.text);
  el.style.fontSize = label.font_size + "px";
  L.marker(label.position, { icon: L.divIcon({ html: el, className: "distance-label" }) }).addTo(map);
}

if (data.route) {
  L.polyline.antPath(data.route.points, {
    color: data.route.color,
    weight: data.route.weight,
    delay: data.route.delay,
  }).addTo(map);
}

for (const marker of data.markers) {
  const icon = L.AwesomeMarkers.icon({ icon: marker.icon, markerColor: marker.color, prefix: "glyphicon" });
  L.marker(marker.position, { icon: icon }).bindPopup(text(marker.popup)).addTo(map);
}
</script>
</body>
</html>
"#;

/// Formats a distance the way it is shown to users: whole numbers keep one
/// decimal place (`3.0`), everything else is printed as is.
pub fn format_distance(distance: Weight) -> String {
    if distance.fract() == 0.0 && distance.is_finite() {
        format!("{:.1}", distance)
    } else {
        format!("{}", distance)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MapViewOptions {
    /// Width of the map in pixels, the full page width if `None`
    pub width: Option<u32>,
    pub height: u32,
    pub zoom: u8,
    /// Draw the distance of every road at its midpoint. Defaults to
    /// on for maps with a route and off for previews.
    pub show_distances: Option<bool>,
}

impl Default for MapViewOptions {
    fn default() -> Self {
        Self {
            width: None,
            height: 500,
            zoom: 13,
            show_distances: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tiles {
    pub url: String,
    pub attribution: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub position: [f64; 2],
    pub popup: String,
    pub color: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Line {
    pub points: Vec<[f64; 2]>,
    pub color: String,
    pub weight: u32,
    pub opacity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Label {
    pub position: [f64; 2],
    pub text: String,
    pub font_size: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AntPath {
    pub points: Vec<[f64; 2]>,
    pub color: String,
    pub weight: u32,
    pub delay: u32,
}

/// Everything the browser needs to draw the map.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapData {
    pub center: [f64; 2],
    pub zoom: u8,
    pub tiles: Tiles,
    pub markers: Vec<Marker>,
    pub roads: Vec<Line>,
    pub labels: Vec<Label>,
    pub route: Option<AntPath>,
}

fn position(location: &Location) -> [f64; 2] {
    [location.lat, location.lon]
}

/// Map of a network with an optional highlighted route.
pub struct MapView<'a> {
    network: &'a Network,
    route: Option<&'a Route>,
    theme: ColorTheme,
    options: MapViewOptions,
}

impl<'a> MapView<'a> {
    pub fn new(network: &'a Network) -> Self {
        Self {
            network,
            route: None,
            theme: ColorTheme::default(),
            options: MapViewOptions::default(),
        }
    }

    pub fn with_route(mut self, route: &'a Route) -> Self {
        self.route = Some(route);
        self
    }

    pub fn with_theme(mut self, theme: ColorTheme) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_options(mut self, options: MapViewOptions) -> Self {
        self.options = options;
        self
    }

    fn location_markers(&self) -> Vec<Marker> {
        self.network
            .locations
            .iter()
            .map(|location| Marker {
                position: position(location),
                popup: location.name.clone(),
                color: self.theme.location_color.to_string(),
                icon: "info-sign".to_string(),
            })
            .collect()
    }

    fn road_lines(&self) -> (Vec<Line>, Vec<Label>) {
        let mut lines = Vec::with_capacity(self.network.roads.len());
        let mut labels = Vec::new();
        let show_distances = self
            .options
            .show_distances
            .unwrap_or(self.route.is_some());

        for road in &self.network.roads {
            let (Some(from), Some(to)) = (
                self.network.coords_by_name(&road.from),
                self.network.coords_by_name(&road.to),
            ) else {
                debug!("Not drawing road {} ↔ {}", road.from, road.to);
                continue;
            };

            lines.push(Line {
                points: vec![[from.0, from.1], [to.0, to.1]],
                color: self.theme.road_color.to_string(),
                weight: self.theme.road_weight,
                opacity: self.theme.road_opacity,
            });

            if show_distances {
                labels.push(Label {
                    position: [(from.0 + to.0) / 2.0, (from.1 + to.1) / 2.0],
                    text: format_distance(road.distance),
                    font_size: self.theme.label_font_size,
                });
            }
        }

        (lines, labels)
    }

    /// Collects all layers of the map
    pub fn data(&self) -> MapData {
        let (center_lat, center_lon) = self.network.center().unwrap_or((0.0, 0.0));

        let mut markers = self.location_markers();
        let (roads, labels) = self.road_lines();

        let mut route = None;
        if let Some(r) = self.route {
            let points: Vec<[f64; 2]> = r.stops.iter().map(position).collect();

            if let (Some(start), Some(end)) = (r.start(), r.end()) {
                markers.push(Marker {
                    position: position(start),
                    popup: format!("Start: {}", start.name),
                    color: self.theme.start_color.to_string(),
                    icon: "home".to_string(),
                });
                markers.push(Marker {
                    position: position(end),
                    popup: format!("End: {}", end.name),
                    color: self.theme.end_color.to_string(),
                    icon: "flag".to_string(),
                });
            }

            if points.len() >= 2 {
                route = Some(AntPath {
                    points,
                    color: self.theme.route_color.to_string(),
                    weight: self.theme.route_weight,
                    delay: self.theme.route_delay,
                });
            }
        }

        MapData {
            center: [center_lat, center_lon],
            zoom: self.options.zoom,
            tiles: Tiles {
                url: self.theme.tiles_url.to_string(),
                attribution: self.theme.tiles_attribution.to_string(),
            },
            markers,
            roads,
            labels,
            route,
        }
    }

    /// Renders the map as a complete html document
    pub fn render(&self) -> String {
        let data = self.data();
        // serde_json never fails on these plain structs
        let json = serde_json::to_string(&data).unwrap_or_else(|_| "null".to_string());
        // Keep user supplied names from closing the script element
        let json = json.replace('<', "\\u003c").replace('>', "\\u003e");

        let width = match self.options.width {
            Some(width) => format!("{}px", width),
            None => "100%".to_string(),
        };

        TEMPLATE
            .replace("__WIDTH__", &width)
            .replace("__HEIGHT__", &format!("{}px", self.options.height))
            .replace("__DATA__", &json)
    }
}
