//! The filter/derive/render pipeline
//!
//! One pure function, [`derive_dashboard`], takes the immutable record set
//! plus the client's filter and view state and produces the complete
//! [`DashboardView`]. Stages run in a fixed order:
//!
//! ```text
//! STAGE 1: filter      (order-preserving subset of the full set)
//! STAGE 2: aggregate   (stat cards, chart counts over the subset)
//! STAGE 3: map         (markers + viewport-focus instruction)
//! STAGE 4: sort        (Ukrainian collation over the chosen column)
//! STAGE 5: paginate    (one table page + footer metadata)
//! ```
//!
//! Every stage recomputes from its inputs on every call. Nothing here holds
//! state between requests, which is what keeps the four panels mutually
//! consistent: they always describe the same (filter, sort, page) snapshot.

mod aggregate;
mod filter;
mod paginate;
mod sort;

pub use aggregate::*;
pub use filter::*;
pub use paginate::*;
pub use sort::*;

use serde::{Deserialize, Serialize};

use crate::types::ServiceCenter;
use crate::view::{
    build_charts, build_map, build_table, ChartsView, MapDefaults, MapViewModel, TableView,
};

/// Client-owned view state: which page, which sort.
///
/// The shell resets `page` to 1 whenever the filter configuration changes and
/// keeps it across sort changes; the paginator clamps whatever arrives and
/// reports the page actually served.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    pub page: usize,
    pub sort: SortState,
}

impl Default for ViewState {
    fn default() -> Self {
        ViewState { page: 1, sort: SortState::default() }
    }
}

/// Server-side presentation settings, fixed at startup from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewSettings {
    /// Table rows per page.
    pub page_size: usize,
    /// How many districts the ranking chart keeps.
    pub district_top_n: usize,
    pub map: MapDefaults,
}

impl Default for ViewSettings {
    fn default() -> Self {
        ViewSettings {
            page_size: 10,
            district_top_n: 8,
            map: MapDefaults {
                center: crate::view::GeoPoint { lat: 48.5, lng: 31.5 },
                zoom: 6,
                single_close_zoom: 10,
                padding_px: 50,
            },
        }
    }
}

/// The complete dashboard state for one (filter, view) snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardView {
    pub stats: SummaryStats,
    pub map: MapViewModel,
    pub charts: ChartsView,
    pub table: TableView,
}

/// Derive all four dashboard panels from scratch.
pub fn derive_dashboard(
    records: &[ServiceCenter],
    filter: &FilterConfig,
    view: &ViewState,
    settings: &ViewSettings,
) -> DashboardView {
    let subset = filter.apply(records);

    let stats = summarize(&subset);
    let map = build_map(&subset, &settings.map);
    let charts = build_charts(&subset, settings.district_top_n);

    let mut sorted = subset;
    apply_sort(&mut sorted, view.sort);
    let table = build_table(paginate(sorted, settings.page_size, view.page));

    DashboardView { stats, map, charts, table }
}
