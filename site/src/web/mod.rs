//! Web server module for the portfolio page
//!
//! Provides the HTTP server that renders the card list, the small JSON API,
//! and the embedded static assets.

pub mod api;
pub mod pages;
pub mod state;

use anyhow::Result;
use axum::{
    http::{header, StatusCode, Uri},
    response::Response,
    routing::get,
    Router,
};
use rust_embed::RustEmbed;
use std::net::SocketAddr;
use std::path::PathBuf;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::cards::{CardTemplate, TimestampField};
use crate::data;
use crate::manager::RepoManager;
use crate::page::PageMounts;
use crate::query::UrlQueryParams;
use state::{AppState, SiteInfo};

/// Embedded static files (stylesheet)
#[derive(RustEmbed)]
#[folder = "static/"]
struct StaticAssets;

/// Configuration for the web server
pub struct WebConfig {
    pub port: u16,
    pub data_dir: PathBuf,
    pub title: String,
    pub owner: Option<String>,
    pub timestamp: TimestampField,
}

/// Start the web server
pub async fn serve(config: WebConfig) -> Result<()> {
    // Missing or unreadable data is fatal here: without it there is no page.
    let repos = data::load_repositories(&config.data_dir)?;
    tracing::info!(
        "loaded {} repositories from {}",
        repos.len(),
        config.data_dir.display()
    );

    let mounts = PageMounts::new(CardTemplate {
        timestamp: config.timestamp,
    });
    let manager = RepoManager::new(repos, mounts, Box::new(UrlQueryParams::for_path("/")));

    let state = AppState::new(
        manager,
        SiteInfo {
            title: config.title,
            owner: config.owner,
        },
    );
    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("starting web server on http://localhost:{}", config.port);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the router with all routes
fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/repos", get(api::list_repos))
        .route("/health", get(api::health));

    Router::new()
        .route("/", get(pages::index))
        .nest("/api", api_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
        .fallback(static_handler)
}

/// Serve embedded static files
async fn static_handler(uri: Uri) -> Response<axum::body::Body> {
    let path = uri.path().trim_start_matches('/');

    if let Some(content) = StaticAssets::get(path) {
        let mime = mime_guess::from_path(path).first_or_octet_stream();
        let body = axum::body::Body::from(content.data.to_vec());
        return Response::builder()
            .status(StatusCode::OK)
            .header(header::CONTENT_TYPE, mime.as_ref())
            .body(body)
            .unwrap();
    }

    Response::builder()
        .status(StatusCode::NOT_FOUND)
        .body(axum::body::Body::from("Not Found"))
        .unwrap()
}
