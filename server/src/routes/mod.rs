//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module stitches the health endpoint and the static bundle together
//! with Leptos SSR rendering under a single Axum router.


use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

#[derive(Debug, thiserror::Error)]
pub enum RouteError {
    #[error("leptos configuration: {0}")]
    LeptosConfig(String),
}

/// Non-UI routes.
fn api_routes() -> Router {
    Router::new().route("/healthz", get(healthz))
}

/// API routes + Leptos SSR + the hydrated bundle under `/pkg`.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[[workspace.metadata.leptos]]` section or `LEPTOS_*` env).
pub fn app() -> Result<Router, RouteError> {
    let conf = get_configuration(None).map_err(|e| RouteError::LeptosConfig(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());
    tracing::debug!(site_root = %site_root_path.display(), "serving static bundle");

    Ok(api_routes()
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
