//! REST API module using Axum
//!
//! Provides HTTP endpoints for the service center dashboard:
//! - v1 API with consistent envelope, derived fresh per request
//! - Static browser shell served via `rust-embed` (compiled into the binary)

pub mod envelope;
pub mod handlers;
mod routes;

pub use handlers::DashboardState;

use axum::http::{header, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Router;
use rust_embed::Embed;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Browser shell assets from `dashboard/`, embedded as committed.
#[derive(Embed)]
#[folder = "dashboard/"]
struct DashboardAssets;

/// Serve a static asset or fall back to `index.html` for any app path.
async fn serve_asset(uri: Uri) -> Response {
    let path = uri.path().trim_start_matches('/');

    // Try exact file match first.
    if let Some(content) = DashboardAssets::get(path) {
        let mime = mime_guess::from_path(path).first_or_octet_stream();
        return (
            StatusCode::OK,
            [(header::CONTENT_TYPE, mime.as_ref())],
            content.data.into_owned(),
        )
            .into_response();
    }

    // Fallback — serve index.html for any non-API, non-file path.
    if let Some(index) = DashboardAssets::get("index.html") {
        return (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/html")],
            index.data.into_owned(),
        )
            .into_response();
    }

    // Shell assets missing from the build — keep the API reachable anyway.
    (StatusCode::OK, "cnap-atlas is running. Dashboard assets not embedded in this build.")
        .into_response()
}

/// Build a CORS layer that is restrictive by default (same-origin only).
///
/// Set `ATLAS_CORS_ORIGINS` to a comma-separated list of allowed origins
/// for development against a separately served shell.
fn build_cors_layer() -> CorsLayer {
    match std::env::var("ATLAS_CORS_ORIGINS") {
        Ok(origins) => {
            let allowed: Vec<_> = origins
                .split(',')
                .filter_map(|o| o.trim().parse().ok())
                .collect();
            tracing::info!(origins = %origins, "CORS: allowing configured origins");
            CorsLayer::new()
                .allow_origin(allowed)
                .allow_methods([Method::GET])
                .allow_headers([header::CONTENT_TYPE])
        }
        Err(_) => {
            // No cross-origin allowed — the shell is same-origin
            CorsLayer::new()
                .allow_methods([Method::GET])
                .allow_headers([header::CONTENT_TYPE])
        }
    }
}

/// Create the complete application router with API and shell serving.
pub fn create_app(state: DashboardState) -> Router {
    let cors = build_cors_layer();

    Router::new()
        // v1 API
        .nest("/api/v1", routes::api_routes(state.clone()))
        // Legacy health endpoint at /health
        .merge(routes::legacy_routes(state))
        // Shell fallback — serves the embedded dashboard for any unmatched path
        .fallback(serve_asset)
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors)
}
