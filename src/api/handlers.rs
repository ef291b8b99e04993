//! API route handlers
//!
//! Request handling logic for the dashboard endpoints:
//! - Complete dashboard derivation for a (filter, view) snapshot
//! - Filter vocabularies for the select controls
//! - Single-center detail cards
//! - Service status and legacy liveness

use std::sync::Arc;
use std::time::Instant;

use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::response::Response;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::envelope::{ApiErrorResponse, ApiResponse};
use crate::pipeline::{
    derive_dashboard, FilterConfig, FilterOptions, SortDirection, SortKey, SortState, ViewSettings,
    ViewState,
};
use crate::types::ServiceCenter;
use crate::view::detail_view;

// ============================================================================
// API State
// ============================================================================

/// Shared state for API handlers.
///
/// The record set and the vocabularies derived from it are immutable after
/// startup; handlers only read. Cloning is cheap, everything heavy sits
/// behind an `Arc`.
#[derive(Clone)]
pub struct DashboardState {
    /// The full registry, loaded once.
    pub records: Arc<Vec<ServiceCenter>>,
    /// Filter vocabularies, derived from the full set at startup.
    pub options: Arc<FilterOptions>,
    /// Presentation settings from configuration.
    pub settings: ViewSettings,
    /// Where the records came from, for the status endpoint.
    pub dataset_label: String,
    /// Server start time, for uptime reporting.
    pub started_at: Instant,
}

impl DashboardState {
    pub fn new(
        records: Vec<ServiceCenter>,
        settings: ViewSettings,
        dataset_label: impl Into<String>,
    ) -> Self {
        let options = FilterOptions::from_records(&records);
        Self {
            records: Arc::new(records),
            options: Arc::new(options),
            settings,
            dataset_label: dataset_label.into(),
            started_at: Instant::now(),
        }
    }

    fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}

// ============================================================================
// Request / Response Types
// ============================================================================

/// Query string of `GET /api/v1/dashboard`.
///
/// Every parameter is optional; an absent parameter means "unconstrained" for
/// filters and "default" for view state. Parameter names match the filter
/// panel controls, not the struct fields.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct DashboardQuery {
    pub region: Option<String>,
    #[serde(rename = "type")]
    pub facility_type: Option<String>,
    pub district: Option<String>,
    pub search: Option<String>,
    pub wifi: Option<bool>,
    pub ramp: Option<bool>,
    pub online: Option<bool>,
    pub dracts: Option<bool>,
    pub sort: Option<SortKey>,
    pub dir: Option<SortDirection>,
    pub page: Option<usize>,
}

impl DashboardQuery {
    fn filter_config(&self) -> FilterConfig {
        FilterConfig {
            region: self.region.clone(),
            facility_type: self.facility_type.clone(),
            district: self.district.clone(),
            search: self.search.clone(),
            free_wifi: self.wifi.unwrap_or(false),
            ramp_access: self.ramp.unwrap_or(false),
            online_consulting: self.online.unwrap_or(false),
            civil_registry: self.dracts.unwrap_or(false),
        }
    }

    fn view_state(&self) -> ViewState {
        ViewState {
            page: self.page.unwrap_or(1),
            sort: SortState {
                key: self.sort.unwrap_or(SortKey::Name),
                direction: self.dir.unwrap_or(SortDirection::None),
            },
        }
    }
}

/// Service status for `GET /api/v1/status`.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub dataset: String,
    pub centers: usize,
    pub version: String,
    pub uptime_seconds: u64,
}

/// Legacy liveness shape for `GET /health`.
#[derive(Debug, Serialize)]
pub struct LegacyHealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /api/v1/dashboard - Derive all four panels for one snapshot
pub async fn get_dashboard(
    State(state): State<DashboardState>,
    query: Result<Query<DashboardQuery>, QueryRejection>,
) -> Response {
    let Query(query) = match query {
        Ok(q) => q,
        Err(rejection) => return ApiErrorResponse::bad_request(rejection.to_string()),
    };

    let filter = query.filter_config();
    let view = query.view_state();
    debug!(?filter, page = view.page, "Deriving dashboard");

    let dashboard = derive_dashboard(&state.records, &filter, &view, &state.settings);
    ApiResponse::ok(dashboard)
}

/// GET /api/v1/options - Filter vocabularies from the full record set
pub async fn get_options(State(state): State<DashboardState>) -> Response {
    ApiResponse::ok(state.options.as_ref().clone())
}

/// GET /api/v1/centers/:id - Detail card for one center
pub async fn get_center(
    State(state): State<DashboardState>,
    Path(id): Path<String>,
) -> Response {
    match detail_view(&state.records, &id) {
        Some(detail) => ApiResponse::ok(detail),
        None => ApiErrorResponse::not_found(format!("no center with id {id}")),
    }
}

/// GET /api/v1/status - Dataset and service status
pub async fn get_status(State(state): State<DashboardState>) -> Response {
    ApiResponse::ok(StatusResponse {
        dataset: state.dataset_label.clone(),
        centers: state.records.len(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.uptime_seconds(),
    })
}

/// GET /health - Legacy health check
pub async fn legacy_health_check(
    State(state): State<DashboardState>,
) -> Json<LegacyHealthResponse> {
    Json(LegacyHealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.uptime_seconds(),
    })
}
