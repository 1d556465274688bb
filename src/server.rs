//! HTTP server for the dashboard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Built only with `ssr`. Every route the Leptos router declares is rendered
//! server-side through `app::shell`; the browser bundle under `/pkg` then
//! hydrates that markup via `crate::hydrate`. Site root, bind address and
//! reload port come from `[package.metadata.leptos]` or the `LEPTOS_*`
//! environment variables.

#[cfg(test)]
#[path = "server_test.rs"]
mod server_test;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::app::{App, shell};

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("leptos configuration: {0}")]
    Config(String),
    #[error("server io: {0}")]
    Io(#[from] std::io::Error),
}

/// SSR routes for every page, static assets under `/pkg`, and `/healthz`.
pub fn app(options: LeptosOptions) -> Router {
    let routes = generate_route_list(App);
    let site_root = PathBuf::from(options.site_root.as_ref());

    let leptos_router = Router::new()
        .leptos_routes(&options, routes, {
            let opts = options.clone();
            move || shell(opts.clone())
        })
        .with_state(options);

    leptos_router
        .route("/healthz", get(healthz))
        .nest_service("/pkg", ServeDir::new(site_root.join("pkg")))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

/// Load the Leptos configuration, bind `site_addr` and serve until the listener fails.
///
/// # Errors
///
/// Returns an error if the configuration cannot be loaded, the address cannot
/// be bound, or the server stops with an I/O error.
pub async fn serve() -> Result<(), ServerError> {
    let conf = get_configuration(None).map_err(|e| ServerError::Config(e.to_string()))?;
    let options = conf.leptos_options;
    let addr = options.site_addr;

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "journal dashboard listening");
    axum::serve(listener, app(options)).await?;
    Ok(())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
