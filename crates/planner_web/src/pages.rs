//! The html page of the planner: configuration form, overview of the network,
//! route controls and the map.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Html,
    Form,
};
use log::{info, warn};
use route_core::{
    error::RouteError,
    network::{Network, Road},
    planner::RoutePlanner,
};
use route_map::format_distance;
use serde::Deserialize;

use crate::{
    handlers::{render_map, RouteQuery},
    state::AppState,
};

const STYLE: &str = r#"
body { font-family: sans-serif; margin: 0; display: flex; min-height: 100vh; }
aside { width: 340px; padding: 1rem; background: #f0f2f6; }
main { flex: 1; padding: 1rem 2rem; }
textarea { width: 100%; height: 60vh; font-family: monospace; font-size: 12px; }
.columns { display: flex; gap: 2rem; }
.columns > div { flex: 1; }
.msg { padding: .6rem 1rem; border-radius: .4rem; margin: .5rem 0; }
.success { background: #dff5e3; }
.info { background: #e1ecfb; }
.warning { background: #fff6d6; }
.error { background: #fde2e2; }
iframe { width: 100%; border: none; }
"#;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Level {
    Success,
    Info,
    Warning,
    Error,
}

impl Level {
    fn class(&self) -> &'static str {
        match self {
            Level::Success => "success",
            Level::Info => "info",
            Level::Warning => "warning",
            Level::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub level: Level,
    pub text: String,
}

impl Message {
    fn new(level: Level, text: impl Into<String>) -> Self {
        Message {
            level,
            text: text.into(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ConfigForm {
    pub network: String,
}

/// Escapes text for use in html content and attribute values
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Network shown in the configuration form before anything was saved:
/// three default locations and one road between the first two.
fn template_network() -> Network {
    let mut network = Network::with_default_locations(3);
    network.roads.push(Road::new("Point1", "Point2", 1.0));
    network
}

/// Messages shown after planning the route from `start` to `end`
pub fn route_messages(planner: &RoutePlanner, start: &str, end: &str) -> Vec<Message> {
    if start == end {
        return vec![Message::new(
            Level::Warning,
            "Start and end are the same location — distance is 0.",
        )];
    }

    match planner.plan(start, end) {
        Ok(route) => vec![
            Message::new(
                Level::Success,
                format!("Shortest Route: {}", route.describe()),
            ),
            Message::new(
                Level::Info,
                format!("Total Distance: {} units", format_distance(route.distance)),
            ),
        ],
        Err(RouteError::NoPath { .. }) => vec![Message::new(
            Level::Error,
            "❌ No path exists between the selected nodes with the given roads.",
        )],
        Err(RouteError::UnknownLocation(_)) | Err(RouteError::EmptyNetwork) => {
            vec![Message::new(
                Level::Error,
                "Start or end node missing in the graph. Re-save configuration.",
            )]
        }
    }
}

fn write_messages(html: &mut String, messages: &[Message]) {
    for message in messages {
        html.push_str(&format!(
            r#"<div class="msg {}">{}</div>"#,
            message.level.class(),
            escape_html(&message.text)
        ));
    }
}

fn write_select(html: &mut String, label: &str, name: &str, options: &[&str], selected: &str) {
    html.push_str(&format!(r#"<label>{} <select name="{}">"#, label, name));
    for option in options {
        let option = escape_html(option);
        let marker = if option == escape_html(selected) {
            " selected"
        } else {
            ""
        };
        html.push_str(&format!(r#"<option value="{0}"{1}>{0}</option>"#, option, marker));
    }
    html.push_str("</select></label> ");
}

/// Renders the whole page.
///
/// `config_text` is what the configuration form shows, `config_messages`
/// the outcome of the last save.
pub fn render_page(
    state: &AppState,
    query: &RouteQuery,
    config_text: Option<&str>,
    config_messages: &[Message],
) -> String {
    let planner = state.planner();
    let network = planner.network();

    let default_text;
    let config_text = match config_text {
        Some(text) => text,
        None => {
            let shown = if network.is_empty() {
                template_network()
            } else {
                network.clone()
            };
            default_text = shown.to_toml_string().unwrap_or_default();
            default_text.as_str()
        }
    };

    let mut html = String::new();
    html.push_str(r#"<!DOCTYPE html><html><head><meta charset="utf-8">"#);
    html.push_str("<title>Smart Delivery Route Planner 🚚</title>");
    html.push_str(&format!("<style>{}</style></head><body>", STYLE));

    // Sidebar with the configuration form
    html.push_str("<aside><h2>📍 Configure Map</h2>");
    html.push_str(&format!(
        "<p>Locations need unique names. At most {} locations and {} roads.</p>",
        state.limits.max_locations, state.limits.max_roads
    ));
    html.push_str(r#"<form method="post" action="/config">"#);
    html.push_str(&format!(
        r#"<textarea name="network">{}</textarea>"#,
        escape_html(config_text)
    ));
    html.push_str(r#"<button type="submit">💾 Save Configuration</button></form>"#);
    write_messages(&mut html, config_messages);
    html.push_str("</aside>");

    html.push_str("<main><h1>🚚 Smart Delivery Route Planner</h1>");
    html.push_str(
        "<p>Interactive shortest-route planner — stable UI + animated route. (Dijkstra under the hood)</p>",
    );
    html.push_str("<h3>Map &amp; Route Controls</h3>");

    if network.is_empty() {
        write_messages(
            &mut html,
            &[Message::new(
                Level::Info,
                "Use the sidebar to add locations and roads, then click 'Save Configuration'.",
            )],
        );
        html.push_str("</main></body></html>");
        return html;
    }

    // Overview
    html.push_str(r#"<div class="columns"><div>"#);
    html.push_str(&format!("<strong>Locations ({}):</strong><ul>", network.locations.len()));
    for l in &network.locations {
        html.push_str(&format!(
            "<li>{} (lat: {:.5}, lon: {:.5})</li>",
            escape_html(&l.name),
            l.lat,
            l.lon
        ));
    }
    html.push_str("</ul></div><div>");
    html.push_str(&format!("<strong>Roads ({}):</strong><ul>", network.roads.len()));
    for r in &network.roads {
        html.push_str(&format!(
            "<li>{} ↔ {} : {} units</li>",
            escape_html(&r.from),
            escape_html(&r.to),
            format_distance(r.distance)
        ));
    }
    html.push_str("</ul></div></div>");

    // Route controls
    let names: Vec<&str> = network.locations.iter().map(|l| l.name.as_str()).collect();
    let start = query.start.as_deref().unwrap_or(names[0]);
    let end = query
        .end
        .as_deref()
        .unwrap_or(names[1.min(names.len() - 1)]);

    html.push_str(r#"<form method="get" action="/">"#);
    write_select(&mut html, "🏠 Warehouse (start)", "start", &names, start);
    write_select(&mut html, "📦 Destination (end)", "end", &names, end);
    html.push_str(r#"<button type="submit">🚀 Find Shortest Route</button></form>"#);

    let mut map_query = RouteQuery::default();
    if let Some((start, end)) = query.endpoints() {
        let messages = route_messages(&planner, start, end);
        write_messages(&mut html, &messages);
        if messages.iter().all(|m| m.level != Level::Error) && start != end {
            map_query.start = Some(start.to_string());
            map_query.end = Some(end.to_string());
        }
    }
    // The map reads the planner on its own
    drop(planner);

    let map = render_map(state, &map_query);
    let height = if map_query.endpoints().is_some() {
        620
    } else {
        520
    };
    html.push_str(&format!(
        r#"<iframe style="height: {}px" srcdoc="{}"></iframe>"#,
        height,
        escape_html(&map)
    ));

    html.push_str("</main></body></html>");
    html
}

pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<RouteQuery>,
) -> Html<String> {
    Html(render_page(&state, &query, None, &[]))
}

/// Saves the configuration from the sidebar form
pub async fn save_config(
    State(state): State<AppState>,
    Form(form): Form<ConfigForm>,
) -> (StatusCode, Html<String>) {
    let result = Network::from_toml_str(&form.network).and_then(|network| state.save(network));

    match result {
        Ok(()) => {
            info!("Configuration saved");
            let messages = [Message::new(
                Level::Success,
                "Configuration saved. You can now find routes.",
            )];
            let html = render_page(&state, &RouteQuery::default(), None, &messages);
            (StatusCode::OK, Html(html))
        }
        Err(e) => {
            warn!("Rejected configuration: {}", e);
            let messages = [Message::new(Level::Error, format!("{}. Fix it and save again.", e))];
            let html = render_page(
                &state,
                &RouteQuery::default(),
                Some(&form.network),
                &messages,
            );
            (StatusCode::UNPROCESSABLE_ENTITY, Html(html))
        }
    }
}
