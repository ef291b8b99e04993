//! Aggregate statistics over a filtered subset
//!
//! Everything here is a fold over `&[&ServiceCenter]`: the stat-card summary,
//! per-flag counts for the fixed-axis charts, and grouped counts for the
//! categorical charts. Grouping is exhaustive (absent values bucket under a
//! fallback label) so group totals always add back up to the subset length.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::types::{ServiceCenter, ServiceFlag, TextField};

/// The four stat cards above the charts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryStats {
    /// Records in the current subset.
    pub total: usize,
    /// Distinct regions represented in the subset.
    pub distinct_regions: usize,
    /// Records with a barrier-free entrance or ramp.
    pub barrier_free: usize,
    /// Records offering free Wi-Fi.
    pub free_wifi: usize,
}

/// Fold the subset into the stat-card numbers.
pub fn summarize(subset: &[&ServiceCenter]) -> SummaryStats {
    let regions: HashSet<&str> = subset.iter().filter_map(|c| c.region.text()).collect();
    SummaryStats {
        total: subset.len(),
        distinct_regions: regions.len(),
        barrier_free: count_affirmative(subset, ServiceFlag::RampAccess),
        free_wifi: count_affirmative(subset, ServiceFlag::FreeWifi),
    }
}

/// How many records in the subset satisfy one flag.
pub fn count_affirmative(subset: &[&ServiceCenter], flag: ServiceFlag) -> usize {
    subset.iter().filter(|c| c.offers(flag)).count()
}

/// Count records per distinct value of one text field.
///
/// Absent values bucket under `fallback`, so the counts sum to the subset
/// length. Entries appear in first-encounter order; ranking is a separate
/// step.
pub fn group_counts<F>(subset: &[&ServiceCenter], field: F, fallback: &str) -> Vec<(String, usize)>
where
    F: Fn(&ServiceCenter) -> &TextField,
{
    let mut groups: Vec<(String, usize)> = Vec::new();
    for center in subset {
        let label = field(center).display(fallback);
        match groups.iter_mut().find(|(l, _)| l == label) {
            Some((_, count)) => *count += 1,
            None => groups.push((label.to_string(), 1)),
        }
    }
    groups
}

/// Keep the `n` largest groups, by descending count.
///
/// The sort is stable, so groups tied on count keep their first-encounter
/// order.
pub fn rank_top(mut groups: Vec<(String, usize)>, n: usize) -> Vec<(String, usize)> {
    groups.sort_by_key(|(_, count)| std::cmp::Reverse(*count));
    groups.truncate(n);
    groups
}
