//! Detail card for a single record
//!
//! Lookup runs over the FULL record set, not the filtered subset: the card
//! opens from map popups too, and a popup can outlive the filter state that
//! created it. An unknown id is a no-op for the shell, so the lookup returns
//! `None` instead of erroring.

use serde::{Deserialize, Serialize};

use crate::types::{ServiceCenter, ServiceFlag};
use crate::view::{street_address, FALLBACK_UNNAMED, FALLBACK_UNSPECIFIED};

/// Subtitle fallback when the facility type is absent.
const FALLBACK_TYPE: &str = "Тип не вказано";

/// One service or accessibility badge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Badge {
    pub label: String,
    pub satisfied: bool,
}

impl Badge {
    fn for_flag(center: &ServiceCenter, flag: ServiceFlag) -> Self {
        Badge { label: flag.label().to_string(), satisfied: center.offers(flag) }
    }
}

/// Everything the modal card renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailView {
    pub id: String,
    pub name: String,
    pub facility_type: String,
    /// Postal code, region, district, settlement and street on one line.
    pub full_address: String,
    pub manager: String,
    pub phone: String,
    pub email: String,
    /// Present only when the record carries a usable value; the shell renders
    /// a link or the fallback text.
    pub website: Option<String>,
    pub schedule: String,
    pub services: Vec<Badge>,
    pub accessibility: Vec<Badge>,
}

/// Find a record by id and project its detail card.
pub fn detail_view(records: &[ServiceCenter], id: &str) -> Option<DetailView> {
    let center = records.iter().find(|c| c.id == id)?;
    Some(DetailView {
        id: center.id.clone(),
        name: center.name.display(FALLBACK_UNNAMED).to_string(),
        facility_type: center.facility_type.display(FALLBACK_TYPE).to_string(),
        full_address: full_address(center),
        manager: center.manager.display(FALLBACK_UNSPECIFIED).to_string(),
        phone: center.phone.display(FALLBACK_UNSPECIFIED).to_string(),
        email: center.email.display(FALLBACK_UNSPECIFIED).to_string(),
        website: center.website.text().map(str::to_string),
        schedule: center.schedule.display(FALLBACK_UNSPECIFIED).to_string(),
        services: ServiceFlag::SERVICES.iter().map(|f| Badge::for_flag(center, *f)).collect(),
        accessibility: ServiceFlag::ACCESSIBILITY
            .iter()
            .map(|f| Badge::for_flag(center, *f))
            .collect(),
    })
}

/// Region-to-street address line, most general part first.
fn full_address(center: &ServiceCenter) -> String {
    let mut parts: Vec<String> = Vec::new();

    let postal_region: Vec<&str> = [&center.postal_code, &center.region]
        .iter()
        .filter_map(|f| f.text())
        .collect();
    if !postal_region.is_empty() {
        parts.push(postal_region.join(" "));
    }
    if let Some(district) = center.district.text() {
        parts.push(district.to_string());
    }
    let settlement: Vec<&str> = [&center.settlement_type, &center.settlement]
        .iter()
        .filter_map(|f| f.text())
        .collect();
    if !settlement.is_empty() {
        parts.push(settlement.join(" "));
    }
    parts.push(street_address(center));

    parts.join(", ")
}
