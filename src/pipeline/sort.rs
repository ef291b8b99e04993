//! Table sorting with Ukrainian collation
//!
//! `str::cmp` orders by code point, which exiles і, ї, є and ґ past я and
//! splits the alphabet for exactly the letters Ukrainian place names use
//! most. [`ukrainian_sort_key`] remaps the 33 letters of the alphabet onto a
//! contiguous rank band so that ґ sorts after г, є after е, і after и and ї
//! after і, case-insensitively. Everything outside the alphabet keeps its
//! lowercased code point and therefore sorts ahead of Cyrillic, the same side
//! Latin and digits land on under the browser's collator.

use serde::{Deserialize, Serialize};

use crate::types::ServiceCenter;

/// The Ukrainian alphabet in canonical order, lowercase.
const ALPHABET: [char; 33] = [
    'а', 'б', 'в', 'г', 'ґ', 'д', 'е', 'є', 'ж', 'з', 'и', 'і', 'ї', 'й', 'к', 'л', 'м', 'н',
    'о', 'п', 'р', 'с', 'т', 'у', 'ф', 'х', 'ц', 'ч', 'ш', 'щ', 'ь', 'ю', 'я',
];

/// Rank band for alphabet letters, above every Unicode scalar value.
const ALPHABET_BAND: u32 = 0x0020_0000;

// ============================================================================
// Sort state
// ============================================================================

/// Column a table sort can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    Name,
    #[serde(rename = "type")]
    FacilityType,
    Region,
    Settlement,
}

/// Tri-state sort direction.
///
/// `None` means "leave the filter order alone", not "ascending by default".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    #[default]
    #[serde(rename = "none")]
    None,
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    Descending,
}

impl SortDirection {
    /// The next state in the header-click cycle none → asc → desc → none.
    pub fn cycled(self) -> Self {
        match self {
            SortDirection::None => SortDirection::Ascending,
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::None,
        }
    }
}

/// A complete sort request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl Default for SortState {
    fn default() -> Self {
        SortState { key: SortKey::Name, direction: SortDirection::None }
    }
}

// ============================================================================
// Collation
// ============================================================================

/// Case-insensitive collation key honoring Ukrainian alphabet order.
pub fn ukrainian_sort_key(text: &str) -> Vec<u32> {
    text.chars()
        .map(|c| {
            let lower = c.to_lowercase().next().unwrap_or(c);
            match ALPHABET.iter().position(|&a| a == lower) {
                Some(pos) => ALPHABET_BAND + pos as u32,
                None => lower as u32,
            }
        })
        .collect()
}

fn sort_field(center: &ServiceCenter, key: SortKey) -> &str {
    match key {
        SortKey::Name => center.name.display(""),
        SortKey::FacilityType => center.facility_type.display(""),
        SortKey::Region => center.region.display(""),
        SortKey::Settlement => center.settlement.display(""),
    }
}

/// Reorder `subset` in place according to `state`.
///
/// Direction `None` leaves the incoming order exactly as it is, so cycling a
/// header back to the third state restores the filter order without keeping a
/// pristine copy around.
pub fn apply_sort(subset: &mut [&ServiceCenter], state: SortState) {
    match state.direction {
        SortDirection::None => {}
        SortDirection::Ascending => {
            subset.sort_by_cached_key(|c| ukrainian_sort_key(sort_field(c, state.key)));
        }
        SortDirection::Descending => {
            subset.sort_by_cached_key(|c| ukrainian_sort_key(sort_field(c, state.key)));
            subset.reverse();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn center(name: &str) -> ServiceCenter {
        serde_json::from_value(serde_json::json!({ "idf": name, "Найменування": name })).unwrap()
    }

    fn sorted_names(names: &[&str], state: SortState) -> Vec<String> {
        let records: Vec<ServiceCenter> = names.iter().map(|n| center(n)).collect();
        let mut refs: Vec<&ServiceCenter> = records.iter().collect();
        apply_sort(&mut refs, state);
        refs.iter().map(|c| c.name.display("").to_string()).collect()
    }

    #[test]
    fn ascending_orders_by_ukrainian_alphabet() {
        let state = SortState { key: SortKey::Name, direction: SortDirection::Ascending };
        assert_eq!(sorted_names(&["Біла Церква", "Авдіївка", "Вараш"], state), [
            "Авдіївка",
            "Біла Церква",
            "Вараш"
        ]);
    }

    #[test]
    fn descending_reverses_ascending() {
        let state = SortState { key: SortKey::Name, direction: SortDirection::Descending };
        assert_eq!(sorted_names(&["Біла Церква", "Авдіївка", "Вараш"], state), [
            "Вараш",
            "Біла Церква",
            "Авдіївка"
        ]);
    }

    #[test]
    fn direction_none_preserves_input_order() {
        let state = SortState { key: SortKey::Name, direction: SortDirection::None };
        assert_eq!(sorted_names(&["Б", "А", "В"], state), ["Б", "А", "В"]);
    }

    #[test]
    fn special_letters_sort_inside_the_alphabet() {
        // Code-point order would put all of these after "я".
        let state = SortState { key: SortKey::Name, direction: SortDirection::Ascending };
        assert_eq!(
            sorted_names(&["Їжакевича", "Івано-Франківськ", "Ирпінь", "Єнакієве", "Ужгород"], state),
            ["Єнакієве", "Ирпінь", "Івано-Франківськ", "Їжакевича", "Ужгород"]
        );

        // ґ lands right after г, not past я.
        assert_eq!(sorted_names(&["Дніпро", "Ґудзівка", "Гадяч"], state), [
            "Гадяч",
            "Ґудзівка",
            "Дніпро"
        ]);
    }

    #[test]
    fn comparison_ignores_case() {
        let state = SortState { key: SortKey::Name, direction: SortDirection::Ascending };
        assert_eq!(sorted_names(&["києво-святошинський", "БРОВАРИ"], state), [
            "БРОВАРИ",
            "києво-святошинський"
        ]);
    }

    #[test]
    fn direction_cycle_wraps_around() {
        let mut dir = SortDirection::None;
        dir = dir.cycled();
        assert_eq!(dir, SortDirection::Ascending);
        dir = dir.cycled();
        assert_eq!(dir, SortDirection::Descending);
        dir = dir.cycled();
        assert_eq!(dir, SortDirection::None);
    }

    #[test]
    fn query_names_round_trip() {
        assert_eq!(serde_json::to_string(&SortKey::FacilityType).unwrap(), "\"type\"");
        assert_eq!(serde_json::to_string(&SortDirection::Ascending).unwrap(), "\"asc\"");
        let dir: SortDirection = serde_json::from_str("\"desc\"").unwrap();
        assert_eq!(dir, SortDirection::Descending);
    }
}
