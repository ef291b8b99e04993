//! Record filtering
//!
//! A [`FilterConfig`] is a snapshot of every control on the filter panel.
//! Applying it walks the full record set once and keeps the records that
//! satisfy ALL active predicates, in their original order. Inactive
//! dimensions (empty selects, blank search, unchecked toggles) constrain
//! nothing, so the default config is the identity filter.
//!
//! Filter vocabularies ([`FilterOptions`]) come from the FULL set, never the
//! filtered subset, so narrowing one dimension does not hide the other
//! options.

use serde::{Deserialize, Serialize};

use crate::pipeline::sort::ukrainian_sort_key;
use crate::types::{ServiceCenter, ServiceFlag};

/// Snapshot of the filter panel.
///
/// `None` and `Some("")` both mean "no constraint" for the text dimensions;
/// the query layer hands selections through untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    pub region: Option<String>,
    pub facility_type: Option<String>,
    pub district: Option<String>,
    pub search: Option<String>,
    pub free_wifi: bool,
    pub ramp_access: bool,
    pub online_consulting: bool,
    pub civil_registry: bool,
}

fn active(selection: &Option<String>) -> Option<&str> {
    selection.as_deref().filter(|s| !s.is_empty())
}

impl FilterConfig {
    /// Whether one record passes every active predicate.
    pub fn matches(&self, center: &ServiceCenter) -> bool {
        if let Some(region) = active(&self.region) {
            if center.region.text() != Some(region) {
                return false;
            }
        }
        if let Some(facility_type) = active(&self.facility_type) {
            if center.facility_type.text() != Some(facility_type) {
                return false;
            }
        }
        if let Some(district) = active(&self.district) {
            if center.district.text() != Some(district) {
                return false;
            }
        }
        if let Some(query) = active(&self.search) {
            // Absent fields keep their empty slot so the separators stay put.
            let haystack = format!(
                "{} {} {}",
                center.name.display(""),
                center.settlement.display(""),
                center.street.display("")
            )
            .to_lowercase();
            if !haystack.contains(&query.to_lowercase()) {
                return false;
            }
        }
        if self.free_wifi && !center.offers(ServiceFlag::FreeWifi) {
            return false;
        }
        if self.ramp_access && !center.offers(ServiceFlag::RampAccess) {
            return false;
        }
        if self.online_consulting && !center.offers(ServiceFlag::OnlineConsulting) {
            return false;
        }
        if self.civil_registry && !center.offers(ServiceFlag::CivilRegistry) {
            return false;
        }
        true
    }

    /// Order-preserving subset of `records` passing every active predicate.
    pub fn apply<'a>(&self, records: &'a [ServiceCenter]) -> Vec<&'a ServiceCenter> {
        records.iter().filter(|c| self.matches(c)).collect()
    }

    /// True when no dimension constrains anything.
    pub fn is_empty(&self) -> bool {
        active(&self.region).is_none()
            && active(&self.facility_type).is_none()
            && active(&self.district).is_none()
            && active(&self.search).is_none()
            && !self.free_wifi
            && !self.ramp_access
            && !self.online_consulting
            && !self.civil_registry
    }
}

// ============================================================================
// Filter vocabularies
// ============================================================================

/// Distinct values for the three categorical selects.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterOptions {
    pub regions: Vec<String>,
    pub facility_types: Vec<String>,
    pub districts: Vec<String>,
}

impl FilterOptions {
    /// Collect distinct present values of region, facility type and district
    /// from the full record set, in Ukrainian alphabet order.
    pub fn from_records(records: &[ServiceCenter]) -> Self {
        FilterOptions {
            regions: distinct_values(records, |c| &c.region),
            facility_types: distinct_values(records, |c| &c.facility_type),
            districts: distinct_values(records, |c| &c.district),
        }
    }
}

fn distinct_values<F>(records: &[ServiceCenter], field: F) -> Vec<String>
where
    F: Fn(&ServiceCenter) -> &crate::types::TextField,
{
    let mut values: Vec<String> = records
        .iter()
        .filter_map(|c| field(c).text())
        .map(str::to_string)
        .collect();
    // The exact value tiebreaks the case-folding collation key, keeping
    // equal values adjacent for dedup and case variants as distinct options.
    values.sort_by_cached_key(|v| (ukrainian_sort_key(v), v.clone()));
    values.dedup();
    values
}
