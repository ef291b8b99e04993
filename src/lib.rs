//! cnap-atlas: dashboard server for the Ukrainian service center registry
//!
//! Loads the ЦНАП registry JSON once at startup and serves a browser
//! dashboard over it: a marker map, four charts, and a sortable paginated
//! table, all driven by one pure derivation pipeline.
//!
//! ## Architecture
//!
//! - **types**: presence-normalized fields and the typed registry record
//! - **pipeline**: filter → aggregate → sort → paginate, pure per request
//! - **view**: projections into the map/chart/table DTOs the shell consumes
//! - **api**: axum router, response envelope, embedded static shell
//!
//! The record set is immutable after load; every response is a pure function
//! of (records, filter configuration, view state).

pub mod api;
pub mod config;
pub mod dataset;
pub mod pipeline;
pub mod types;
pub mod view;

// Re-export the configuration root
pub use config::AtlasConfig;

// Re-export the domain types
pub use types::{ServiceCenter, ServiceFlag, TextField};

// Re-export the derivation pipeline surface
pub use pipeline::{
    derive_dashboard, DashboardView, FilterConfig, FilterOptions, SortDirection, SortKey,
    SortState, ViewSettings, ViewState,
};

// Re-export the view projections used outside the pipeline
pub use view::{detail_view, DetailView, MapFocus};
