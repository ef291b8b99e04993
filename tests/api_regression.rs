//! API Regression Tests
//!
//! In-process tests that build the Axum app via `create_app()` and exercise
//! the /api/v1/* endpoints plus the embedded shell fallback using
//! `tower::ServiceExt::oneshot()`.
//! No binary spawn, no network port — runs in CI without `#[ignore]`.

use std::path::PathBuf;

use cnap_atlas::api::{create_app, DashboardState};
use cnap_atlas::dataset::load_dataset;
use cnap_atlas::pipeline::ViewSettings;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::Response;
use tower::ServiceExt;

fn create_test_state() -> DashboardState {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/sample/centers.json");
    let records = load_dataset(&path).expect("Failed to load sample registry");
    DashboardState::new(records, ViewSettings::default(), "sample")
}

/// Percent-encode a query value; `http::Uri` rejects raw Cyrillic bytes.
fn encode(value: &str) -> String {
    value
        .bytes()
        .map(|b| match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                (b as char).to_string()
            }
            _ => format!("%{b:02X}"),
        })
        .collect()
}

async fn get(uri: &str) -> Response {
    let app = create_app(create_test_state());
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn body_json(resp: Response) -> serde_json::Value {
    let body = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&body).unwrap()
}

/// All v1 GET endpoints should return 200.
#[tokio::test]
async fn test_v1_get_endpoints_return_200() {
    let endpoints = [
        "/api/v1/dashboard",
        "/api/v1/options",
        "/api/v1/centers/1",
        "/api/v1/status",
        "/health",
    ];

    for endpoint in &endpoints {
        let resp = get(endpoint).await;
        assert!(
            resp.status().is_success(),
            "GET {endpoint} returned status {}",
            resp.status()
        );
    }
}

/// Every /api/v1 success response carries the data + meta envelope.
#[tokio::test]
async fn test_v1_responses_use_the_envelope() {
    for endpoint in ["/api/v1/dashboard", "/api/v1/options", "/api/v1/status"] {
        let json = body_json(get(endpoint).await).await;
        assert!(json.get("data").is_some(), "{endpoint} missing data");
        assert_eq!(json["meta"]["version"], "1", "{endpoint} missing meta.version");
        assert!(json["meta"]["timestamp"].is_string());
    }
}

/// The dashboard payload exposes all four panels.
#[tokio::test]
async fn test_dashboard_has_all_panels() {
    let json = body_json(get("/api/v1/dashboard").await).await;
    let data = &json["data"];

    assert_eq!(data["stats"]["total"], 12);
    assert!(data["map"]["markers"].is_array());
    assert!(data["map"]["focus"]["kind"].is_string());
    assert!(data["charts"]["districts"]["labels"].is_array());
    assert!(data["charts"]["services"]["values"].is_array());
    assert!(data["table"]["rows"].is_array());
    assert_eq!(data["table"]["total_items"], 12);
    assert_eq!(data["table"]["total_pages"], 2);
}

/// A filtered dashboard stays consistent across panels.
#[tokio::test]
async fn test_filtered_dashboard_is_consistent() {
    let uri = format!(
        "/api/v1/dashboard?region={}&type={}",
        encode("Київська"),
        encode("ЦНАП")
    );
    let json = body_json(get(&uri).await).await;
    let data = &json["data"];

    assert_eq!(data["stats"]["total"], 5);
    assert_eq!(data["table"]["total_items"], 5);

    // One of the five sits at 0,0 and renders no marker.
    let markers = data["map"]["markers"].as_array().unwrap();
    assert_eq!(markers.len(), 4);
    assert_eq!(data["map"]["rendered"], 4);
    assert_eq!(data["map"]["focus"]["kind"], "frame");
    assert_eq!(data["map"]["focus"]["count"], 4);
}

/// Boolean toggles arrive as literal true/false query values.
#[tokio::test]
async fn test_boolean_filter_params() {
    let json = body_json(get("/api/v1/dashboard?wifi=true").await).await;
    let data = &json["data"];

    assert_eq!(data["stats"]["total"], 7);

    // Record 4 says "null" in the Wi-Fi column and must not match.
    let rows = data["table"]["rows"].as_array().unwrap();
    assert!(rows.iter().all(|r| r["id"] != "4"));
}

/// Sort and page parameters drive the table panel.
#[tokio::test]
async fn test_sort_and_page_params() {
    let json = body_json(get("/api/v1/dashboard?sort=name&dir=asc").await).await;
    let table = &json["data"]["table"];

    assert_eq!(table["page"], 1);
    // The unnamed center sorts first; Ukrainian alphabet order follows.
    let rows = table["rows"].as_array().unwrap();
    assert_eq!(rows[0]["name"], "Без назви");
    assert_eq!(rows[1]["name"], "Віддалене робоче місце с. Агрономічне");

    // A stale page number clamps to the last page and reports it.
    let json = body_json(get("/api/v1/dashboard?page=99").await).await;
    assert_eq!(json["data"]["table"]["page"], 2);
}

/// Malformed query values return a 400 with the error envelope.
#[tokio::test]
async fn test_malformed_query_returns_400_envelope() {
    for uri in ["/api/v1/dashboard?wifi=maybe", "/api/v1/dashboard?page=abc"] {
        let resp = get(uri).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "GET {uri}");

        let json = body_json(resp).await;
        assert_eq!(json["error"]["code"], "BAD_REQUEST");
        assert!(json["error"]["message"].is_string());
        assert_eq!(json["meta"]["version"], "1");
    }
}

/// Unknown center ids return a 404 with the error envelope.
#[tokio::test]
async fn test_unknown_center_returns_404_envelope() {
    let resp = get("/api/v1/centers/no-such-id").await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let json = body_json(resp).await;
    assert_eq!(json["error"]["code"], "NOT_FOUND");
    assert!(json.get("data").is_none());
}

/// The detail card carries both badge groups.
#[tokio::test]
async fn test_center_detail_payload() {
    let json = body_json(get("/api/v1/centers/1").await).await;
    let data = &json["data"];

    assert_eq!(data["name"], "ЦНАП м. Бровари");
    assert_eq!(data["services"].as_array().unwrap().len(), 6);
    assert_eq!(data["accessibility"].as_array().unwrap().len(), 8);
    assert!(data["full_address"].as_str().unwrap().contains("Київська"));
}

/// Filter vocabularies come from the full set, in Ukrainian alphabet order.
#[tokio::test]
async fn test_options_vocabularies() {
    let json = body_json(get("/api/v1/options").await).await;
    let data = &json["data"];

    let regions: Vec<&str> = data["regions"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap())
        .collect();
    assert_eq!(regions, [
        "Вінницька",
        "Дніпропетровська",
        "Київська",
        "Львівська",
        "Одеська",
        "Харківська",
    ]);

    let types: Vec<&str> = data["facility_types"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap())
        .collect();
    assert_eq!(types, ["Віддалене робоче місце", "ДІЯ ЦЕНТР", "МОБІЛЬНИЙ ЦНАП", "ЦНАП"]);
}

/// /api/v1/status reports the dataset behind the service.
#[tokio::test]
async fn test_status_reports_dataset() {
    let json = body_json(get("/api/v1/status").await).await;
    let data = &json["data"];

    assert_eq!(data["dataset"], "sample");
    assert_eq!(data["centers"], 12);
    assert!(data["version"].is_string());
    assert!(data["uptime_seconds"].is_number());
}

/// Legacy /health returns 200 with a plain JSON object.
#[tokio::test]
async fn test_legacy_health_returns_200() {
    let resp = get("/health").await;
    assert_eq!(resp.status(), StatusCode::OK);

    let json = body_json(resp).await;
    assert_eq!(json["status"], "ok");
}

/// Unmatched paths serve the embedded shell, so deep links work.
#[tokio::test]
async fn test_fallback_serves_shell() {
    for uri in ["/", "/some/app/path"] {
        let resp = get(uri).await;
        assert_eq!(resp.status(), StatusCode::OK, "GET {uri}");

        let content_type = resp
            .headers()
            .get(axum::http::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        assert!(content_type.starts_with("text/html"), "GET {uri}: {content_type}");

        let body = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let text = String::from_utf8_lossy(&body);
        assert!(text.contains("<!DOCTYPE html>"), "GET {uri} did not serve the shell");
    }
}
