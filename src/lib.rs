pub mod args;
pub mod config;
pub mod error;
pub mod hello_data;
pub mod request_body;
pub mod response_body;
pub mod response_view;
pub mod strings;
pub mod view;

use anyhow::Result;
use axum::extract::Extension;
use axum::routing::{any, get, post};
use axum::Router;
use dotenv::dotenv;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub use config::*;
use view::{DirRenderer, SharedRenderer};

/// The full route surface. Every endpoint family keeps all of its variants;
/// that is the point of the demo.
pub fn app(renderer: SharedRenderer) -> Router {
    Router::new()
        .route(
            "/request-body-string-v1",
            post(request_body::request_body_string_v1),
        )
        .route(
            "/request-body-string-v2",
            post(request_body::request_body_string_v2),
        )
        .route(
            "/request-body-string-v3",
            post(request_body::request_body_string_v3),
        )
        .route(
            "/request-body-string-v4",
            post(request_body::request_body_string_v4),
        )
        .route(
            "/request-body-json-v1",
            post(request_body::request_body_json_v1),
        )
        .route(
            "/request-body-json-v2",
            post(request_body::request_body_json_v2),
        )
        .route(
            "/request-body-json-v3",
            post(request_body::request_body_json_v3),
        )
        .route(
            "/response-body-string-v1",
            get(response_body::response_body_string_v1),
        )
        .route(
            "/response-body-string-v2",
            get(response_body::response_body_string_v2),
        )
        .route(
            "/response-body-string-v3",
            get(response_body::response_body_string_v3),
        )
        .route(
            "/response-body-json-v1",
            get(response_body::response_body_json_v1),
        )
        .route(
            "/response-body-json-v2",
            get(response_body::response_body_json_v2),
        )
        .route("/response-view-v1", any(response_view::response_view_v1))
        .route("/response-view-v2", any(response_view::response_view_v2))
        .route("/response/hello", any(response_view::response_view_v3))
        .layer(Extension(renderer))
        .layer(TraceLayer::new_for_http())
}

pub async fn run_server(host_override: Option<String>, port_override: Option<u16>) -> Result<()> {
    dotenv().ok();

    let config = ServerConfig::from_env(host_override, port_override)?;
    let renderer: SharedRenderer = Arc::new(DirRenderer::new(&config.template_dir));
    let app = app(renderer);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    tracing::info!("listening on {}", addr);
    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await?;
    Ok(())
}
