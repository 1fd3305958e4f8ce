use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use chrono::NaiveDate;
use server::store::OfficeStore;
use shared_types::OfficeSettings;
use std::sync::Arc;
use tower::ServiceExt;

/// Fixed "today" so seeded dates are stable across runs.
#[allow(dead_code)]
pub fn fixed_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 15).unwrap()
}

#[allow(dead_code)]
/// Build a router over a freshly seeded store, so tests never share state.
pub fn test_app() -> Router {
    let store = OfficeStore::seeded(fixed_today(), OfficeSettings::default())
        .expect("seeding the office store");
    server::rest::rest_router_with(Arc::new(store))
}

async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    json: Option<&str>,
    token: Option<&str>,
) -> (StatusCode, String) {
    let mut builder = Request::builder().method(method).uri(uri);
    if json.is_some() {
        builder = builder.header("content-type", "application/json");
    }
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {}", token));
    }
    let body = json.map(|j| Body::from(j.to_string())).unwrap_or_else(Body::empty);

    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

#[allow(dead_code)]
/// Helper to make a GET request and return (status, body).
pub async fn get(app: &Router, uri: &str) -> (StatusCode, String) {
    send(app, "GET", uri, None, None).await
}

#[allow(dead_code)]
/// Helper to make a GET request with Bearer auth.
pub async fn get_with_auth(app: &Router, uri: &str, token: &str) -> (StatusCode, String) {
    send(app, "GET", uri, None, Some(token)).await
}

#[allow(dead_code)]
/// Helper to make a POST request with JSON body.
pub async fn post_json(app: &Router, uri: &str, json: &str) -> (StatusCode, String) {
    send(app, "POST", uri, Some(json), None).await
}

#[allow(dead_code)]
/// Helper to make a POST request with no body and Bearer auth.
pub async fn post_with_auth(app: &Router, uri: &str, token: &str) -> (StatusCode, String) {
    send(app, "POST", uri, None, Some(token)).await
}

#[allow(dead_code)]
/// Log in as a demo account and return the issued token.
pub async fn login_token(app: &Router, email: &str, password: &str) -> String {
    let json = serde_json::json!({ "email": email, "password": password });
    let (status, body) = post_json(app, "/api/v1/auth/login", &json.to_string()).await;
    assert_eq!(status, StatusCode::OK);
    let value: serde_json::Value = serde_json::from_str(&body).unwrap();
    value["data"]["token"].as_str().unwrap().to_string()
}
