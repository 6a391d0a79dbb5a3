//! HTTP server of the route planner

use std::net::SocketAddr;

use axum::{
    http::{header::CONTENT_TYPE, Method},
    routing::{get, post},
    Router,
};
use log::info;
use tower_http::cors::{Any, CorsLayer};

use crate::{handlers, pages, state::AppState};

/// Creates the router with all pages and api routes
pub fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::PUT])
        .allow_headers([CONTENT_TYPE])
        .allow_origin(Any);

    Router::new()
        // Pages
        .route("/", get(pages::index))
        .route("/config", post(pages::save_config))
        .route("/map", get(handlers::get_map))
        // Api
        .route(
            "/api/network",
            get(handlers::get_network).put(handlers::put_network),
        )
        .route("/api/route", get(handlers::get_route))
        .route("/api/health", get(handlers::health_check))
        .layer(cors)
        .with_state(state)
}

/// Serves the planner until ctrl-c is pressed
pub async fn start_server(addr: SocketAddr, state: AppState) -> anyhow::Result<()> {
    let app = create_app(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("Route planner listening on http://{}", addr);
    info!("Health check available at http://{}/api/health", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Route planner stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for ctrl-c: {}", e);
    }
}
