//! Map view model
//!
//! Produces everything the Leaflet layer in the shell needs and nothing it
//! has to compute: one [`Marker`] per visible record with a usable position,
//! plus a [`MapFocus`] instruction describing where the viewport should go.
//!
//! The focus contract implements "zoom-in only": the widget compares the zoom
//! required to frame `bounds` against its current zoom, fits the bounds when
//! it would zoom IN, and otherwise only pans to `center`. A lone marker seen
//! from countrywide distance snaps to `single_close_zoom` so the user can
//! actually see it. With no markers at all the shell falls back to the
//! configured country overview. The server never tracks the widget's zoom;
//! the instruction is declarative.

use serde::{Deserialize, Serialize};

use crate::types::ServiceCenter;
use crate::view::{street_address, FALLBACK_UNNAMED, FALLBACK_UNSPECIFIED};

/// A WGS84 position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

/// A south-west / north-east bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoBounds {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl GeoBounds {
    /// Smallest box containing every point. `None` for an empty input.
    pub fn enclosing(points: &[GeoPoint]) -> Option<GeoBounds> {
        let first = points.first()?;
        let mut bounds =
            GeoBounds { south: first.lat, west: first.lng, north: first.lat, east: first.lng };
        for p in &points[1..] {
            bounds.south = bounds.south.min(p.lat);
            bounds.north = bounds.north.max(p.lat);
            bounds.west = bounds.west.min(p.lng);
            bounds.east = bounds.east.max(p.lng);
        }
        Some(bounds)
    }

    pub fn center(&self) -> GeoPoint {
        GeoPoint {
            lat: (self.south + self.north) / 2.0,
            lng: (self.west + self.east) / 2.0,
        }
    }
}

/// Marker color classes, keyed off the facility type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerCategory {
    Cnap,
    DiiaCenter,
    MobileCnap,
    Other,
}

impl MarkerCategory {
    pub fn from_facility_type(facility_type: &str) -> Self {
        match facility_type {
            "ЦНАП" => MarkerCategory::Cnap,
            "ДІЯ ЦЕНТР" => MarkerCategory::DiiaCenter,
            "МОБІЛЬНИЙ ЦНАП" => MarkerCategory::MobileCnap,
            _ => MarkerCategory::Other,
        }
    }
}

/// One map pin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub id: String,
    pub lat: f64,
    pub lng: f64,
    pub category: MarkerCategory,
    /// Ready-to-bind popup markup; field values arrive HTML-escaped.
    pub popup_html: String,
}

/// Viewport instruction accompanying the markers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MapFocus {
    /// Nothing to show; return to the configured country view.
    Overview { center: GeoPoint, zoom: u32 },
    /// Frame these markers, zooming in only.
    Frame {
        bounds: GeoBounds,
        center: GeoPoint,
        count: usize,
        padding_px: u32,
        single_close_zoom: u32,
    },
}

/// Map defaults handed down from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapDefaults {
    pub center: GeoPoint,
    pub zoom: u32,
    pub single_close_zoom: u32,
    pub padding_px: u32,
}

/// The complete map panel state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapViewModel {
    pub markers: Vec<Marker>,
    /// Marker count, echoed under the map as "Показано: N".
    pub rendered: usize,
    pub focus: MapFocus,
}

/// Build the map panel for the current subset.
///
/// Records without usable coordinates stay in the table and the statistics
/// but produce no marker.
pub fn build_map(subset: &[&ServiceCenter], defaults: &MapDefaults) -> MapViewModel {
    let mut markers = Vec::new();
    let mut points = Vec::new();

    for center in subset {
        if let Some((lat, lng)) = center.coordinates() {
            points.push(GeoPoint { lat, lng });
            markers.push(Marker {
                id: center.id.clone(),
                lat,
                lng,
                category: MarkerCategory::from_facility_type(center.facility_type.display("")),
                popup_html: popup_html(center),
            });
        }
    }

    let focus = match GeoBounds::enclosing(&points) {
        Some(bounds) => MapFocus::Frame {
            center: bounds.center(),
            bounds,
            count: markers.len(),
            padding_px: defaults.padding_px,
            single_close_zoom: defaults.single_close_zoom,
        },
        None => MapFocus::Overview { center: defaults.center, zoom: defaults.zoom },
    };

    MapViewModel { rendered: markers.len(), markers, focus }
}

fn popup_html(center: &ServiceCenter) -> String {
    format!(
        concat!(
            r#"<div class="popup-content">"#,
            r#"<div class="popup-title">{name}</div>"#,
            r#"<div class="popup-info"><strong>Тип:</strong> {facility_type}</div>"#,
            r#"<div class="popup-info"><strong>Адреса:</strong> {address}</div>"#,
            r#"<div class="popup-info"><strong>Телефон:</strong> {phone}</div>"#,
            r#"<button class="popup-button" data-id="{id}">Детальніше</button>"#,
            "</div>"
        ),
        name = escape_html(center.name.display(FALLBACK_UNNAMED)),
        facility_type = escape_html(center.facility_type.display(FALLBACK_UNSPECIFIED)),
        address = escape_html(&street_address(center)),
        phone = escape_html(center.phone.display(FALLBACK_UNSPECIFIED)),
        id = escape_html(&center.id),
    )
}

/// Minimal HTML entity escaping for text interpolated into popup markup.
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
