//! Thin HTTP wrapper around the action-item extraction pipeline.

use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderName, HeaderValue, Method};
use log::info;
use tower_http::cors::CorsLayer;

pub(crate) mod controller;
pub mod error;
pub(crate) mod extractors;
pub mod router;

pub use error::{Error, Result};
pub use service::AppState;

/// Bind the configured interface/port and serve the API until shutdown.
pub async fn init_server(app_state: AppState) -> Result<()> {
    let host = app_state
        .config
        .interface
        .clone()
        .unwrap_or_else(|| "127.0.0.1".to_string());
    let port = app_state.config.port;
    let listen_addr = format!("{host}:{port}");

    info!("Server starting... listening for requests on http://{listen_addr}");

    let origins: Vec<HeaderValue> = app_state
        .config
        .allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE, HeaderName::from_static("x-version")])
        .allow_origin(origins);

    let router = router::define_routes(app_state).layer(cors);

    let listener = tokio::net::TcpListener::bind(listen_addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
