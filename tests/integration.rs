//! Integration tests for the finance display server.
//!
//! Drives the full router the way the data-entry form and the kiosk do:
//! records go in through the JSON API, the engine's incoming-pay figures
//! come out of `/incoming`, and error handling is exercised end to end.

use std::fs;
use std::path::PathBuf;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::{Value, json};
use tower::ServiceExt;
use uuid::Uuid;

use finance_display::api::{AppState, create_router};
use finance_display::config::ChartConfig;
use finance_display::store::FinanceStore;

// =============================================================================
// Test Helpers
// =============================================================================

/// A data file in the system temp dir, removed on drop.
struct TempDataFile(PathBuf);

impl TempDataFile {
    fn new() -> Self {
        Self(std::env::temp_dir().join(format!("finance-api-{}.json", Uuid::new_v4())))
    }
}

impl Drop for TempDataFile {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.0);
    }
}

fn test_router(data_file: &TempDataFile) -> Router {
    let store = FinanceStore::load(&data_file.0).expect("Failed to load store");
    create_router(AppState::new(store, ChartConfig::default()))
}

async fn send(
    router: Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(value) => {
            builder = builder.header("Content-Type", "application/json");
            Body::from(value.to_string())
        }
        None => Body::empty(),
    };
    let response = router.oneshot(builder.body(body).unwrap()).await.unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

fn work_log_body(date: &str, job: &str, hours: f64, pay_cashed: bool) -> Value {
    json!({
        "date": date,
        "jobId": job,
        "hours": hours,
        "payRate": 10.0,
        "taxRate": 0.25,
        "payCashed": pay_cashed
    })
}

async fn seed_log(router: &Router, body: Value) -> i32 {
    let (status, json) = send(router.clone(), "POST", "/work-logs", Some(body)).await;
    assert_eq!(status, StatusCode::OK);
    json["id"].as_i64().unwrap() as i32
}

async fn incoming_on(router: &Router, date: &str) -> Value {
    let (status, json) = send(router.clone(), "GET", &format!("/incoming?date={date}"), None).await;
    assert_eq!(status, StatusCode::OK, "incoming failed: {json}");
    json
}

// =============================================================================
// Record lifecycle
// =============================================================================

#[tokio::test]
async fn test_data_bundle_reflects_entries() {
    let file = TempDataFile::new();
    let router = test_router(&file);

    let (status, job) = send(
        router.clone(),
        "POST",
        "/jobs",
        Some(json!({"id": "grocery", "name": "Grocery Store"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(job["name"], "Grocery Store");

    seed_log(&router, work_log_body("2025-01-07", "grocery", 8.0, false)).await;
    seed_log(&router, work_log_body("2025-01-06", "grocery", 6.0, false)).await;

    let (status, data) = send(router.clone(), "GET", "/data", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(data["jobs"].as_array().unwrap().len(), 1);
    let logs = data["workLogs"].as_array().unwrap();
    assert_eq!(logs.len(), 2);
    // Kept sorted by date regardless of entry order.
    assert_eq!(logs[0]["date"], "2025-01-06");
    assert_eq!(logs[1]["date"], "2025-01-07");
}

#[tokio::test]
async fn test_replace_work_log_keeps_id() {
    let file = TempDataFile::new();
    let router = test_router(&file);

    let id = seed_log(&router, work_log_body("2025-01-06", "grocery", 8.0, false)).await;
    let (status, replaced) = send(
        router.clone(),
        "PUT",
        &format!("/work-logs/{id}"),
        Some(work_log_body("2025-01-06", "grocery", 5.5, false)),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(replaced["id"].as_i64().unwrap() as i32, id);
    assert_eq!(replaced["hours"], 5.5);
}

#[tokio::test]
async fn test_delete_work_log() {
    let file = TempDataFile::new();
    let router = test_router(&file);

    let id = seed_log(&router, work_log_body("2025-01-06", "grocery", 8.0, false)).await;
    let (status, body) = send(router.clone(), "DELETE", &format!("/work-logs/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ok"], true);

    let (status, error) = send(router.clone(), "DELETE", &format!("/work-logs/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_deleting_job_does_not_cascade() {
    let file = TempDataFile::new();
    let router = test_router(&file);

    send(
        router.clone(),
        "POST",
        "/jobs",
        Some(json!({"id": "grocery", "name": "Grocery Store"})),
    )
    .await;
    seed_log(&router, work_log_body("2025-01-06", "grocery", 8.0, false)).await;

    let (status, _) = send(router.clone(), "DELETE", "/jobs/grocery", None).await;
    assert_eq!(status, StatusCode::OK);

    let (_, data) = send(router.clone(), "GET", "/data", None).await;
    assert!(data["jobs"].as_array().unwrap().is_empty());
    assert_eq!(data["workLogs"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_snapshot_lifecycle() {
    let file = TempDataFile::new();
    let router = test_router(&file);

    let (status, created) = send(
        router.clone(),
        "POST",
        "/snapshots",
        Some(json!({
            "date": "2025-01-06",
            "checking": 1200.50,
            "creditAvailable": 3500.0,
            "creditLimit": 5000.0,
            "personalDebt": 0.0,
            "note": "green:bonus"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let id = created["id"].as_i64().unwrap();

    let (status, replaced) = send(
        router.clone(),
        "PUT",
        &format!("/snapshots/{id}"),
        Some(json!({
            "date": "2025-01-06",
            "checking": 1300.0,
            "creditAvailable": 3500.0,
            "creditLimit": 5000.0,
            "personalDebt": 0.0,
            "note": ""
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(replaced["checking"], 1300.0);

    let (status, body) = send(router.clone(), "DELETE", &format!("/snapshots/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ok"], true);
}

#[tokio::test]
async fn test_data_survives_restart() {
    let file = TempDataFile::new();
    {
        let router = test_router(&file);
        seed_log(&router, work_log_body("2025-01-06", "grocery", 8.0, false)).await;
    }
    // A new router over the same file sees the entry.
    let router = test_router(&file);
    let (_, data) = send(router.clone(), "GET", "/data", None).await;
    assert_eq!(data["workLogs"].as_array().unwrap().len(), 1);
}

// =============================================================================
// Incoming pay
// =============================================================================

#[tokio::test]
async fn test_incoming_new_year_cash_out_scenario() {
    let file = TempDataFile::new();
    let router = test_router(&file);

    seed_log(&router, work_log_body("2024-12-28", "grocery", 2.0, false)).await;
    seed_log(&router, work_log_body("2024-12-29", "grocery", 2.0, false)).await;
    seed_log(&router, work_log_body("2025-01-01", "grocery", 1.0, true)).await;
    seed_log(&router, work_log_body("2025-01-02", "grocery", 1.0, false)).await;
    seed_log(&router, work_log_body("2025-01-03", "grocery", 1.0, false)).await;

    let expectations = [
        ("2024-12-28", 15.0),
        ("2024-12-29", 30.0),
        ("2025-01-01", 22.5),
        ("2025-01-02", 30.0),
        ("2025-01-03", 37.5),
    ];
    for (date, expected) in expectations {
        let body = incoming_on(&router, date).await;
        assert_eq!(body["date"], date);
        assert_eq!(body["incoming"].as_f64().unwrap(), expected, "as of {date}");
    }
}

#[tokio::test]
async fn test_incoming_reports_daily_earned() {
    let file = TempDataFile::new();
    let router = test_router(&file);

    seed_log(&router, work_log_body("2025-01-06", "grocery", 8.0, false)).await;
    seed_log(&router, work_log_body("2025-01-07", "grocery", 2.0, false)).await;

    let body = incoming_on(&router, "2025-01-07").await;
    // Whole week incoming vs Tuesday's own contribution.
    assert_eq!(body["incoming"].as_f64().unwrap(), 75.0);
    assert_eq!(body["dailyEarned"].as_f64().unwrap(), 15.0);
}

#[tokio::test]
async fn test_incoming_is_idempotent() {
    let file = TempDataFile::new();
    let router = test_router(&file);
    seed_log(&router, work_log_body("2025-01-06", "grocery", 8.0, false)).await;

    let first = incoming_on(&router, "2025-01-06").await;
    let second = incoming_on(&router, "2025-01-06").await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_incoming_defaults_to_today() {
    let file = TempDataFile::new();
    let router = test_router(&file);

    let (status, body) = send(router.clone(), "GET", "/incoming", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["incoming"].as_f64().unwrap(), 0.0);
    assert!(body["date"].as_str().unwrap().len() == 10);
}

#[tokio::test]
async fn test_incoming_with_malformed_date_is_400() {
    let file = TempDataFile::new();
    let router = test_router(&file);

    let (status, error) = send(router.clone(), "GET", "/incoming?date=12-28-2024", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "INVALID_DATE");
}

// =============================================================================
// Validation and error handling
// =============================================================================

#[tokio::test]
async fn test_negative_hours_rejected() {
    let file = TempDataFile::new();
    let router = test_router(&file);

    let (status, error) = send(
        router.clone(),
        "POST",
        "/work-logs",
        Some(work_log_body("2025-01-06", "grocery", -2.0, false)),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "VALIDATION_ERROR");
    assert!(error["message"].as_str().unwrap().contains("hours"));
}

#[tokio::test]
async fn test_tax_rate_of_one_rejected() {
    let file = TempDataFile::new();
    let router = test_router(&file);

    let mut body = work_log_body("2025-01-06", "grocery", 8.0, false);
    body["taxRate"] = json!(1.0);
    let (status, error) = send(router.clone(), "POST", "/work-logs", Some(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_malformed_work_log_date_rejected() {
    let file = TempDataFile::new();
    let router = test_router(&file);

    let (status, error) = send(
        router.clone(),
        "POST",
        "/work-logs",
        Some(work_log_body("garbage", "grocery", 1.0, false)),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "INVALID_DATE");
}

#[tokio::test]
async fn test_missing_field_rejected() {
    let file = TempDataFile::new();
    let router = test_router(&file);

    let (status, error) = send(
        router.clone(),
        "POST",
        "/work-logs",
        Some(json!({"date": "2025-01-06", "jobId": "grocery"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_empty_job_id_rejected() {
    let file = TempDataFile::new();
    let router = test_router(&file);

    let (status, error) = send(
        router.clone(),
        "POST",
        "/jobs",
        Some(json!({"id": "  ", "name": "Nameless"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "VALIDATION_ERROR");
}

// =============================================================================
// Chart config
// =============================================================================

#[tokio::test]
async fn test_chart_config_served() {
    let file = TempDataFile::new();
    let router = test_router(&file);

    let (status, config) = send(router.clone(), "GET", "/chart-config", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(config["width"], 1920);
    assert_eq!(config["daysShown"], 120);
    assert!(config["palette"]["balance"].as_str().unwrap().starts_with('#'));
}
