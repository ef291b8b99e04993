//! API route definitions
//!
//! Organizes endpoints for the service center dashboard:
//! - /api/v1/dashboard - Complete dashboard view for a filter/view snapshot
//! - /api/v1/options - Filter vocabularies (regions, types, districts)
//! - /api/v1/centers/:id - Detail card for one center
//! - /api/v1/status - Dataset size, version, uptime

use axum::{routing::get, Router};

use super::handlers::{self, DashboardState};

/// Create all API routes for the dashboard
pub fn api_routes(state: DashboardState) -> Router {
    Router::new()
        .route("/dashboard", get(handlers::get_dashboard))
        .route("/options", get(handlers::get_options))
        .route("/centers/:id", get(handlers::get_center))
        .route("/status", get(handlers::get_status))
        .with_state(state)
}

/// Legacy health endpoint at root level
pub fn legacy_routes(state: DashboardState) -> Router {
    Router::new()
        .route("/health", get(handlers::legacy_health_check))
        .with_state(state)
}
