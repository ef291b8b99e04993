//! View projections for the browser shell
//!
//! Each submodule turns pipeline output into the exact DTO one panel
//! consumes:
//! - map: markers plus a declarative viewport-focus instruction
//! - charts: aligned label/value series for the four charts
//! - table: formatted rows plus pagination metadata
//! - detail: the modal card for a single record, badges included
//!
//! Display fallbacks live here so every panel renders absent data the same
//! way.

mod charts;
mod detail;
mod map;
mod table;

pub use charts::*;
pub use detail::*;
pub use map::*;
pub use table::*;

use crate::types::ServiceCenter;

/// Fallback for absent text in popups, cards and chart buckets.
pub const FALLBACK_UNSPECIFIED: &str = "Не вказано";
/// Fallback for a missing center name.
pub const FALLBACK_UNNAMED: &str = "Без назви";
/// Fallback when no street-level address part is present.
pub const FALLBACK_NO_ADDRESS: &str = "Адреса не вказана";

/// Street-level address line: street, then `буд. N`, then `корп. N`,
/// whichever are present, comma-joined.
pub fn street_address(center: &ServiceCenter) -> String {
    let mut parts: Vec<String> = Vec::new();
    if let Some(street) = center.street.text() {
        parts.push(street.to_string());
    }
    if let Some(building) = center.building.text() {
        parts.push(format!("буд. {building}"));
    }
    if let Some(block) = center.block.text() {
        parts.push(format!("корп. {block}"));
    }
    if parts.is_empty() {
        FALLBACK_NO_ADDRESS.to_string()
    } else {
        parts.join(", ")
    }
}
