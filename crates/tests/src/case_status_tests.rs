use axum::http::StatusCode;

use crate::common::{get, patch_json, test_app};

#[tokio::test]
async fn update_status_success() {
    let app = test_app();

    let body = serde_json::json!({ "status": "closed" });
    let (status, resp) = patch_json(&app, "/api/v1/cases/case-1/status", &body.to_string()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(resp["status"], "closed");
    assert_eq!(resp["id"], "case-1");

    let (_, fetched) = get(&app, "/api/v1/cases/case-1").await;
    assert_eq!(fetched["status"], "closed");
}

#[tokio::test]
async fn update_status_all_valid_values() {
    let app = test_app();

    for target_status in ["active", "pending", "processing", "closed"] {
        let body = serde_json::json!({ "status": target_status });
        let (status, resp) =
            patch_json(&app, "/api/v1/cases/case-2/status", &body.to_string()).await;

        assert_eq!(status, StatusCode::OK, "Failed for status: {}", target_status);
        assert_eq!(resp["status"], target_status);
    }
}

#[tokio::test]
async fn update_status_invalid_value_422() {
    let app = test_app();

    let body = serde_json::json!({ "status": "archived" });
    let (status, resp) = patch_json(&app, "/api/v1/cases/case-1/status", &body.to_string()).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(resp["kind"], "ValidationError");
    assert!(resp["field_errors"]["status"].is_string());

    let (_, fetched) = get(&app, "/api/v1/cases/case-1").await;
    assert_eq!(fetched["status"], "active");
}

#[tokio::test]
async fn update_status_unknown_case_404() {
    let app = test_app();

    let body = serde_json::json!({ "status": "closed" });
    let (status, _) = patch_json(&app, "/api/v1/cases/case-999/status", &body.to_string()).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}
