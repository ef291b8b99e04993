//! Chart datasets
//!
//! Four charts, one shape: aligned `labels` / `values` lists, ready for a
//! Chart.js constructor. Two charts group by a categorical field (districts,
//! facility types), two count flags against a fixed axis (services,
//! infrastructure). The shell destroys and recreates each chart on every
//! update, so datasets are always complete, never deltas.

use serde::{Deserialize, Serialize};

use crate::pipeline::{count_affirmative, group_counts, rank_top};
use crate::types::{ServiceCenter, ServiceFlag};
use crate::view::FALLBACK_UNSPECIFIED;

/// Fixed axis of the services bar chart.
const SERVICE_AXIS: [(&str, ServiceFlag); 5] = [
    ("Паспортні", ServiceFlag::PassportServices),
    ("ДРАЦС", ServiceFlag::CivilRegistry),
    ("Соціальні", ServiceFlag::SocialServices),
    ("Водіям", ServiceFlag::DriverServices),
    ("Онлайн", ServiceFlag::OnlineConsulting),
];

/// Fixed axis of the infrastructure radar chart.
const INFRASTRUCTURE_AXIS: [(&str, ServiceFlag); 5] = [
    ("WiFi", ServiceFlag::FreeWifi),
    ("Пандус", ServiceFlag::RampAccess),
    ("Санвузол", ServiceFlag::SanitaryRoom),
    ("Стоянка", ServiceFlag::AccessibleParking),
    ("Ел. черга", ServiceFlag::ElectronicQueue),
];

/// Label/value series for one chart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartDataset {
    pub labels: Vec<String>,
    pub values: Vec<usize>,
}

impl ChartDataset {
    fn from_groups(groups: Vec<(String, usize)>) -> Self {
        let (labels, values) = groups.into_iter().unzip();
        ChartDataset { labels, values }
    }

    fn from_axis(subset: &[&ServiceCenter], axis: &[(&str, ServiceFlag)]) -> Self {
        ChartDataset {
            labels: axis.iter().map(|(label, _)| label.to_string()).collect(),
            values: axis.iter().map(|(_, flag)| count_affirmative(subset, *flag)).collect(),
        }
    }
}

/// All four chart panels.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartsView {
    /// Top districts by center count, bar chart.
    pub districts: ChartDataset,
    /// Every facility type in the subset, doughnut chart.
    pub facility_types: ChartDataset,
    /// Service coverage against the fixed axis, bar chart.
    pub services: ChartDataset,
    /// Accessibility coverage against the fixed axis, radar chart.
    pub infrastructure: ChartDataset,
}

/// Build all chart datasets for the current subset.
pub fn build_charts(subset: &[&ServiceCenter], district_top_n: usize) -> ChartsView {
    ChartsView {
        districts: ChartDataset::from_groups(rank_top(
            group_counts(subset, |c| &c.district, FALLBACK_UNSPECIFIED),
            district_top_n,
        )),
        facility_types: ChartDataset::from_groups(group_counts(
            subset,
            |c| &c.facility_type,
            FALLBACK_UNSPECIFIED,
        )),
        services: ChartDataset::from_axis(subset, &SERVICE_AXIS),
        infrastructure: ChartDataset::from_axis(subset, &INFRASTRUCTURE_AXIS),
    }
}
