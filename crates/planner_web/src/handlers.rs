//! Handlers of the json api and the standalone map.

use axum::{
    extract::{rejection::JsonRejection, Query, State},
    response::Html,
    Json,
};
use log::info;
use route_core::{
    constants::Weight,
    error::NetworkError,
    network::{Location, Network},
    planner::Route,
};
use route_map::{MapView, MapViewOptions};
use serde::{Deserialize, Serialize};

use crate::{
    error::{ApiError, ApiResult},
    state::AppState,
    VERSION,
};

#[derive(Debug, Default, Deserialize)]
pub struct RouteQuery {
    pub start: Option<String>,
    pub end: Option<String>,
}

impl RouteQuery {
    /// Start and end, if both are given and not empty
    pub fn endpoints(&self) -> Option<(&str, &str)> {
        let start = self.start.as_deref().filter(|s| !s.is_empty())?;
        let end = self.end.as_deref().filter(|s| !s.is_empty())?;
        Some((start, end))
    }
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct SaveResponse {
    pub message: String,
    pub locations: usize,
    pub roads: usize,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct RouteResponse {
    pub path: Vec<String>,
    pub description: String,
    pub distance: Weight,
    pub stops: Vec<Location>,
}

impl From<Route> for RouteResponse {
    fn from(route: Route) -> Self {
        RouteResponse {
            path: route.names().into_iter().map(String::from).collect(),
            description: route.describe(),
            distance: route.distance,
            stops: route.stops,
        }
    }
}

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: VERSION.to_string(),
    })
}

pub async fn get_network(State(state): State<AppState>) -> Json<Network> {
    Json(state.planner().network().clone())
}

/// Replaces the network. Bodies that are not a network are parse errors.
pub async fn put_network(
    State(state): State<AppState>,
    payload: Result<Json<Network>, JsonRejection>,
) -> ApiResult<Json<SaveResponse>> {
    let Json(network) = payload.map_err(|e| NetworkError::Parse(e.body_text()))?;
    state.save(network)?;

    let planner = state.planner();
    Ok(Json(SaveResponse {
        message: "Configuration saved. You can now find routes.".to_string(),
        locations: planner.network().locations.len(),
        roads: planner.network().roads.len(),
    }))
}

pub async fn get_route(
    State(state): State<AppState>,
    Query(query): Query<RouteQuery>,
) -> ApiResult<Json<RouteResponse>> {
    let start = query.start.as_deref().ok_or(ApiError::MissingParameter("start"))?;
    let end = query.end.as_deref().ok_or(ApiError::MissingParameter("end"))?;

    let route = state.planner().plan(start, end)?;
    info!("Route {}: {} units", route.describe(), route.distance);
    Ok(Json(route.into()))
}

/// Map of the current network. The route is drawn if `start` and `end` are
/// given and a route between them exists.
pub async fn get_map(
    State(state): State<AppState>,
    Query(query): Query<RouteQuery>,
) -> Html<String> {
    Html(render_map(&state, &query))
}

pub(crate) fn render_map(state: &AppState, query: &RouteQuery) -> String {
    let planner = state.planner();
    let network = planner.network();

    let route = query
        .endpoints()
        .and_then(|(start, end)| planner.plan(start, end).ok());

    let view = MapView::new(network).with_theme(state.theme.clone());
    match &route {
        Some(route) => view
            .with_options(MapViewOptions {
                height: 600,
                ..Default::default()
            })
            .with_route(route)
            .render(),
        None => view.render(),
    }
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        Router,
    };
    use route_core::{
        network::{Limits, Road},
        util::test_graphs::sample_network,
    };
    use route_map::ColorTheme;
    use serde_json::Value;
    use tower::ServiceExt;

    use super::*;
    use crate::server::create_app;

    fn app_with(network: Network) -> Router {
        create_app(AppState::new(
            network,
            Limits::default(),
            ColorTheme::default(),
        ))
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, body.to_vec())
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, Vec<u8>) {
        send(app, Request::get(uri).body(Body::empty()).unwrap()).await
    }

    async fn put_json(app: Router, uri: &str, body: String) -> (StatusCode, Vec<u8>) {
        let request = Request::put(uri)
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap();
        send(app, request).await
    }

    #[tokio::test]
    async fn health() {
        let (status, body) = get(app_with(Network::default()), "/api/health").await;
        assert_eq!(status, StatusCode::OK);

        let body: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn route_found() {
        let (status, body) = get(
            app_with(sample_network()),
            "/api/route?start=Warehouse&end=Harbour",
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let route: RouteResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(route.path, vec!["Warehouse", "Station", "Harbour"]);
        assert_eq!(route.description, "Warehouse → Station → Harbour");
        assert_eq!(route.distance, 5.0);
        assert_eq!(route.stops.len(), 3);
    }

    #[tokio::test]
    async fn route_errors() {
        let (status, body) = get(
            app_with(sample_network()),
            "/api/route?start=Warehouse&end=Airport",
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        let body: Value = serde_json::from_slice(&body).unwrap();
        assert!(body["error"].as_str().unwrap().starts_with("No path exists"));

        let (status, _) = get(
            app_with(sample_network()),
            "/api/route?start=Warehouse&end=Moon",
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = get(app_with(sample_network()), "/api/route?start=Warehouse").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn save_and_read_network() {
        let app = app_with(Network::default());

        let body = serde_json::to_string(&sample_network()).unwrap();
        let (status, body) = put_json(app.clone(), "/api/network", body).await;
        assert_eq!(status, StatusCode::OK);
        let saved: SaveResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(saved.locations, 6);
        assert_eq!(saved.roads, 6);

        let (status, body) = get(app, "/api/network").await;
        assert_eq!(status, StatusCode::OK);
        let network: Network = serde_json::from_slice(&body).unwrap();
        assert_eq!(network, sample_network());
    }

    #[tokio::test]
    async fn invalid_network_is_rejected() {
        let app = app_with(sample_network());

        let mut invalid = sample_network();
        invalid.roads.push(Road::new("Market", "Market", 2.0));
        let body = serde_json::to_string(&invalid).unwrap();

        let (status, body) = put_json(app.clone(), "/api/network", body).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        let body: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(
            body["error"],
            "Roads cannot connect a location to itself ('Market')"
        );

        let (_, body) = get(app, "/api/network").await;
        let network: Network = serde_json::from_slice(&body).unwrap();
        assert_eq!(network, sample_network());
    }

    #[tokio::test]
    async fn malformed_network_is_a_bad_request() {
        let app = app_with(sample_network());

        let wrong_type =
            r#"{"locations":[{"name":"A","lat":"x","lon":1.0}],"roads":[]}"#.to_string();
        for body in [wrong_type, "{not json".to_string()] {
            let (status, body) = put_json(app.clone(), "/api/network", body).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            let body: Value = serde_json::from_slice(&body).unwrap();
            assert!(body["error"]
                .as_str()
                .unwrap()
                .starts_with("Could not parse network"));
        }

        let (_, body) = get(app, "/api/network").await;
        let network: Network = serde_json::from_slice(&body).unwrap();
        assert_eq!(network, sample_network());
    }

    #[tokio::test]
    async fn map_with_and_without_route() {
        let (status, body) = get(app_with(sample_network()), "/map").await;
        assert_eq!(status, StatusCode::OK);
        let html = String::from_utf8(body).unwrap();
        assert!(html.contains("\"route\":null"));

        let (_, body) = get(
            app_with(sample_network()),
            "/map?start=Warehouse&end=Harbour",
        )
        .await;
        let html = String::from_utf8(body).unwrap();
        assert!(html.contains("Start: Warehouse"));
        assert!(html.contains("#00cc44"));
        assert!(html.contains("height: 600px;"));
    }

    #[test]
    fn empty_endpoints_are_ignored() {
        let query = RouteQuery {
            start: Some("A".to_string()),
            end: Some(String::new()),
        };
        assert_eq!(query.endpoints(), None);
        assert_eq!(RouteQuery::default().endpoints(), None);
    }
}
