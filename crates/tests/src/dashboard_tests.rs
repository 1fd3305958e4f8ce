use axum::http::StatusCode;
use chrono::{Datelike, Local};

use crate::common::{get, patch_json, test_app};

#[tokio::test]
async fn dashboard_totals() {
    let app = test_app();

    let (status, body) = get(&app, "/api/v1/dashboard").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totalCases"], 6);
    assert_eq!(body["activeCases"], 3);
    assert_eq!(body["activeCustomers"], 4);
    assert_eq!(body["collectedRevenue"], 73500.0);
    assert_eq!(body["outstanding"], 13900.0);
}

#[tokio::test]
async fn dashboard_upcoming_sessions_sorted() {
    let app = test_app();

    let (_, body) = get(&app, "/api/v1/dashboard").await;

    let sessions = body["upcomingSessions"].as_array().unwrap();
    assert_eq!(sessions.len(), 4);
    let starts: Vec<&str> = sessions
        .iter()
        .map(|s| s["startsAt"].as_str().unwrap())
        .collect();
    let mut sorted = starts.clone();
    sorted.sort();
    assert_eq!(starts, sorted);
}

#[tokio::test]
async fn dashboard_revenue_ends_this_month() {
    let app = test_app();

    let (_, body) = get(&app, "/api/v1/dashboard").await;

    let months = body["monthlyRevenue"].as_array().unwrap();
    assert_eq!(months.len(), 6);
    assert_eq!(months[5]["month"], Local::now().month());
}

#[tokio::test]
async fn dashboard_reflects_status_changes() {
    let app = test_app();

    let body = serde_json::json!({ "status": "closed" });
    patch_json(&app, "/api/v1/cases/case-1/status", &body.to_string()).await;

    let (_, body) = get(&app, "/api/v1/dashboard").await;
    assert_eq!(body["activeCases"], 2);
    let closed = body["statusCounts"]
        .as_array()
        .unwrap()
        .iter()
        .find(|c| c["status"] == "closed")
        .unwrap();
    assert_eq!(closed["count"], 2);
}
