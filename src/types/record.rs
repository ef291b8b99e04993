//! Service center records
//!
//! [`ServiceCenter`] mirrors one row of the national registry export. Field
//! names on the wire are the registry's Ukrainian column headers; the struct
//! renames them to stable identifiers once, at the serde boundary.
//!
//! Two normalizations happen here and nowhere else:
//! - text columns pass through [`TextField`], which folds empty strings and
//!   the literal `"null"` into an absent state
//! - coordinates are only usable as a pair, via [`ServiceCenter::coordinates`]

use serde::{Deserialize, Deserializer, Serialize};

use crate::types::field::TextField;

// ============================================================================
// Record
// ============================================================================

/// One administrative service center as published in the registry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceCenter {
    /// Registry-wide unique identifier, treated as opaque text.
    #[serde(rename = "idf")]
    pub id: String,

    #[serde(rename = "Найменування", default)]
    pub name: TextField,
    #[serde(rename = "Тип закладу", default)]
    pub facility_type: TextField,

    // Location
    #[serde(rename = "Область", default)]
    pub region: TextField,
    #[serde(rename = "Район", default)]
    pub district: TextField,
    #[serde(rename = "Тип населеного пункту", default)]
    pub settlement_type: TextField,
    #[serde(rename = "Населений пункт", default)]
    pub settlement: TextField,
    #[serde(rename = "Вулиця", default)]
    pub street: TextField,
    #[serde(rename = "Будинок", default)]
    pub building: TextField,
    #[serde(rename = "Корпус", default)]
    pub block: TextField,
    #[serde(rename = "Індекс", default)]
    pub postal_code: TextField,

    /// Raw latitude as exported. Use [`ServiceCenter::coordinates`] instead.
    #[serde(rename = "Lat", default, deserialize_with = "de_coordinate")]
    pub lat: Option<f64>,
    /// Raw longitude as exported. Use [`ServiceCenter::coordinates`] instead.
    #[serde(rename = "Long", default, deserialize_with = "de_coordinate")]
    pub lng: Option<f64>,

    // Contacts
    #[serde(rename = "Телефон", default)]
    pub phone: TextField,
    #[serde(rename = "Електронна скринька", default)]
    pub email: TextField,
    #[serde(rename = "Веб-сайт", default)]
    pub website: TextField,
    #[serde(rename = "Графік роботи", default)]
    pub schedule: TextField,
    #[serde(rename = "Керівник", default)]
    pub manager: TextField,

    // Service flags
    #[serde(rename = "Паспортні послуги", default)]
    pub passport_services: TextField,
    #[serde(rename = "Послуги ДРАЦС", default)]
    pub civil_registry: TextField,
    #[serde(rename = "Соціальні послуги", default)]
    pub social_services: TextField,
    #[serde(rename = "Послуги водіям", default)]
    pub driver_services: TextField,
    #[serde(rename = "Онлайн-консультування", default)]
    pub online_consulting: TextField,
    #[serde(rename = "Консультування телефоном", default)]
    pub phone_consulting: TextField,

    // Accessibility flags
    #[serde(rename = "Вільний (безперешкодний) вхід або пандус", default)]
    pub ramp_access: TextField,
    #[serde(rename = "Сходи з поручнями", default)]
    pub handrails: TextField,
    #[serde(rename = "Обладнана санітарна кімната", default)]
    pub sanitary_room: TextField,
    #[serde(
        rename = "Наявність безоплатної стоянки автотранспорту для осіб з інвалідністю",
        default
    )]
    pub accessible_parking: TextField,
    #[serde(rename = "Наявність зупинок громадського транспорту в радіусі 100м", default)]
    pub transit_stop: TextField,
    #[serde(rename = "Вільний Wi-Fi", default)]
    pub free_wifi: TextField,
    #[serde(rename = "Електронна черга", default)]
    pub electronic_queue: TextField,
    #[serde(rename = "Місце для тимчасового розміщення дитячих колясок", default)]
    pub stroller_space: TextField,
}

impl ServiceCenter {
    /// The mappable position of this center, if it has one.
    ///
    /// Absent when either component is missing or non-finite, and when both
    /// are exactly zero. The registry writes `0,0` for "never geocoded", and
    /// that point is in the Gulf of Guinea, not in Ukraine.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        let (lat, lng) = (self.lat?, self.lng?);
        if !lat.is_finite() || !lng.is_finite() {
            return None;
        }
        if lat == 0.0 && lng == 0.0 {
            return None;
        }
        Some((lat, lng))
    }

    /// The normalized value of one boolean-like flag column.
    pub fn flag(&self, flag: ServiceFlag) -> &TextField {
        match flag {
            ServiceFlag::PassportServices => &self.passport_services,
            ServiceFlag::CivilRegistry => &self.civil_registry,
            ServiceFlag::SocialServices => &self.social_services,
            ServiceFlag::DriverServices => &self.driver_services,
            ServiceFlag::OnlineConsulting => &self.online_consulting,
            ServiceFlag::PhoneConsulting => &self.phone_consulting,
            ServiceFlag::RampAccess => &self.ramp_access,
            ServiceFlag::Handrails => &self.handrails,
            ServiceFlag::SanitaryRoom => &self.sanitary_room,
            ServiceFlag::AccessibleParking => &self.accessible_parking,
            ServiceFlag::TransitStop => &self.transit_stop,
            ServiceFlag::FreeWifi => &self.free_wifi,
            ServiceFlag::ElectronicQueue => &self.electronic_queue,
            ServiceFlag::StrollerSpace => &self.stroller_space,
        }
    }

    /// Whether a flag column holds the affirmative token.
    pub fn offers(&self, flag: ServiceFlag) -> bool {
        self.flag(flag).is_affirmative()
    }
}

// ============================================================================
// Flag columns
// ============================================================================

/// The fourteen boolean-like columns of the registry.
///
/// Six describe services offered, eight describe facility accessibility.
/// Each knows its display label for badges and chart axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceFlag {
    PassportServices,
    CivilRegistry,
    SocialServices,
    DriverServices,
    OnlineConsulting,
    PhoneConsulting,
    RampAccess,
    Handrails,
    SanitaryRoom,
    AccessibleParking,
    TransitStop,
    FreeWifi,
    ElectronicQueue,
    StrollerSpace,
}

impl ServiceFlag {
    /// Flags describing services the center performs.
    pub const SERVICES: [ServiceFlag; 6] = [
        ServiceFlag::PassportServices,
        ServiceFlag::CivilRegistry,
        ServiceFlag::SocialServices,
        ServiceFlag::DriverServices,
        ServiceFlag::OnlineConsulting,
        ServiceFlag::PhoneConsulting,
    ];

    /// Flags describing the building and its surroundings.
    pub const ACCESSIBILITY: [ServiceFlag; 8] = [
        ServiceFlag::RampAccess,
        ServiceFlag::Handrails,
        ServiceFlag::SanitaryRoom,
        ServiceFlag::AccessibleParking,
        ServiceFlag::TransitStop,
        ServiceFlag::FreeWifi,
        ServiceFlag::ElectronicQueue,
        ServiceFlag::StrollerSpace,
    ];

    /// Human label, as shown on detail badges.
    pub fn label(self) -> &'static str {
        match self {
            ServiceFlag::PassportServices => "Паспортні послуги",
            ServiceFlag::CivilRegistry => "Послуги ДРАЦС",
            ServiceFlag::SocialServices => "Соціальні послуги",
            ServiceFlag::DriverServices => "Послуги водіям",
            ServiceFlag::OnlineConsulting => "Онлайн-консультування",
            ServiceFlag::PhoneConsulting => "Консультування телефоном",
            ServiceFlag::RampAccess => "Безбар'єрний вхід/пандус",
            ServiceFlag::Handrails => "Сходи з поручнями",
            ServiceFlag::SanitaryRoom => "Санітарна кімната",
            ServiceFlag::AccessibleParking => "Стоянка для осіб з інвалідністю",
            ServiceFlag::TransitStop => "Зупинка транспорту поруч",
            ServiceFlag::FreeWifi => "Вільний Wi-Fi",
            ServiceFlag::ElectronicQueue => "Електронна черга",
            ServiceFlag::StrollerSpace => "Місце для колясок",
        }
    }
}

// ============================================================================
// Lenient coordinate parsing
// ============================================================================

/// Accept a coordinate as a JSON number, a numeric string, or null.
///
/// Unparsable strings become absent rather than failing the whole dataset;
/// one bad row must not take the dashboard down.
fn de_coordinate<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Num(f64),
        Text(String),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Num(v)) => Some(v),
        Some(Raw::Text(s)) => s.trim().parse::<f64>().ok(),
        None => None,
    })
}
