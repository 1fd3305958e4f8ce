use axum::http::StatusCode;

use crate::common::{get, test_app};

#[tokio::test]
async fn get_case_by_id() {
    let app = test_app();

    let (status, body) = get(&app, "/api/v1/cases/case-1").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], "case-1");
    assert_eq!(body["client"]["id"], "cus-2");
    assert_eq!(body["fees"]["type"], "percentage");
}

#[tokio::test]
async fn get_customer_uses_type_key() {
    let app = test_app();

    let (status, body) = get(&app, "/api/v1/customers/cus-3").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["type"], "institution");
}

#[tokio::test]
async fn get_finance_record_carries_source() {
    let app = test_app();

    let (status, body) = get(&app, "/api/v1/finance/fin-10").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["sourceType"], "employee");
    assert_eq!(body["sourceId"], "emp-6");
}

#[tokio::test]
async fn get_missing_record_404() {
    let app = test_app();

    let (status, body) = get(&app, "/api/v1/sessions/ses-999").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["kind"], "NotFound");
}

#[tokio::test]
async fn get_missing_case_404() {
    let app = test_app();

    let (status, _) = get(&app, "/api/v1/cases/case-999").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}
