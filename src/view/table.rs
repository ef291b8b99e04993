//! Table view model
//!
//! Formats one page of records into display-ready rows and carries the
//! pagination metadata the footer renders: page position, the page-number
//! window, and the "X–Y з Z" range summary.

use serde::{Deserialize, Serialize};

use crate::pipeline::{page_window, Page, PageWindow};
use crate::types::ServiceCenter;
use crate::view::{street_address, FALLBACK_UNNAMED};

/// Fallback for absent cells in the table body.
const CELL_DASH: &str = "-";

/// One formatted table row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRow {
    pub id: String,
    pub name: String,
    pub facility_type: String,
    pub region: String,
    pub settlement: String,
    pub address: String,
}

impl TableRow {
    fn from_center(center: &ServiceCenter) -> Self {
        TableRow {
            id: center.id.clone(),
            name: center.name.display(FALLBACK_UNNAMED).to_string(),
            facility_type: center.facility_type.display(CELL_DASH).to_string(),
            region: center.region.display(CELL_DASH).to_string(),
            settlement: center.settlement.display(CELL_DASH).to_string(),
            address: street_address(center),
        }
    }
}

/// The table panel: rows plus footer metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableView {
    pub rows: Vec<TableRow>,
    pub page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub range_start: usize,
    pub range_end: usize,
    /// "X–Y з Z", or "0–0 з 0" for an empty subset.
    pub range_label: String,
    pub window: PageWindow,
}

/// Format one page of sorted records into the table panel.
pub fn build_table(page: Page<&ServiceCenter>) -> TableView {
    TableView {
        rows: page.items.iter().map(|c| TableRow::from_center(c)).collect(),
        range_label: format!("{}–{} з {}", page.range_start, page.range_end, page.total_items),
        window: page_window(page.page, page.total_pages),
        page: page.page,
        total_pages: page.total_pages,
        total_items: page.total_items,
        range_start: page.range_start,
        range_end: page.range_end,
    }
}
